#![no_main]

use chrono::NaiveDate;
use daftar::ledger::*;
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Some(date) = NaiveDate::from_ymd_opt(2024, 1, 1) else {
        return;
    };
    let entries = text
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            LedgerEntry::new(date, format!("JE-{i}"), Decimal::from(i), Decimal::ZERO)
                .description(line)
        })
        .collect();
    let ledger = AccountLedger::new(text, Decimal::ZERO).entries(entries);
    let config = LedgerExportConfigBuilder::new(date).build();
    let Ok(csv) = render_delimited(&ledger, &config) else {
        return;
    };
    assert!(csv.ends_with(&format!(
        "Closing Balance,{}",
        daftar::core::format_amount(ledger.summary().closing_balance)
    )));
});
