//! Delimited-text (CSV) ledger export.
//!
//! Layout, one record per line, `\n` separated:
//!
//! ```text
//! Account Ledger
//! Account,Cash at Bank
//! Opening Balance,1000.00
//!
//! Date,Entry Number,Description,Debit,Credit,Balance
//! 2024-01-05,JE-1,Customer receipt,500.00,0.00,1500.00
//!
//! Total Debit,500.00
//! Total Credit,0.00
//! Closing Balance,1500.00
//! ```
//!
//! Every entry of the ledger is written; descriptions are never truncated.
//! Fields containing the delimiter, a quote or a line break are quoted. A
//! configuration whose delimiter is itself a quote or line break is rejected.

use super::balance::{compute_running_balances, compute_summary_with};
use super::config::LedgerExportConfig;
use super::export::{ExportFormat, LedgerExport, export_filename};
use super::types::AccountLedger;
use crate::core::{DaftarError, format_amount};

const COLUMNS: [&str; 6] = [
    "Date",
    "Entry Number",
    "Description",
    "Debit",
    "Credit",
    "Balance",
];

/// Render the whole ledger as delimited text.
pub fn render_delimited(
    ledger: &AccountLedger,
    config: &LedgerExportConfig,
) -> Result<String, DaftarError> {
    config.validate()?;
    let normal = ledger.normal_balance();
    let lines = compute_running_balances(&ledger.entries, ledger.opening_balance, normal);
    let summary = compute_summary_with(&ledger.entries, ledger.opening_balance, normal);
    let sep = config.delimiter;
    let account = ledger.display_name();

    let mut records = vec![
        record(sep, &[config.title.as_str()]),
        record(sep, &["Account", account.as_str()]),
        record(
            sep,
            &["Opening Balance", format_amount(summary.opening_balance).as_str()],
        ),
        String::new(),
        record(sep, &COLUMNS),
    ];

    for line in &lines {
        let e = line.entry;
        records.push(record(
            sep,
            &[
                e.date.format("%Y-%m-%d").to_string().as_str(),
                e.entry_number.as_str(),
                e.text(),
                format_amount(e.debit).as_str(),
                format_amount(e.credit).as_str(),
                format_amount(line.running_balance).as_str(),
            ],
        ));
    }

    records.push(String::new());
    records.push(record(
        sep,
        &["Total Debit", format_amount(summary.total_debit).as_str()],
    ));
    records.push(record(
        sep,
        &["Total Credit", format_amount(summary.total_credit).as_str()],
    ));
    records.push(record(
        sep,
        &["Closing Balance", format_amount(summary.closing_balance).as_str()],
    ));

    log::debug!(
        "delimited export of '{}': {} rows",
        ledger.account_name,
        lines.len()
    );
    Ok(records.join("\n"))
}

/// Produce the delimited-text export file.
pub fn to_delimited(
    ledger: &AccountLedger,
    config: &LedgerExportConfig,
) -> Result<LedgerExport, DaftarError> {
    let text = render_delimited(ledger, config).inspect_err(|e| {
        log::error!("delimited export of '{}' failed: {e}", ledger.account_name);
    })?;
    Ok(LedgerExport {
        filename: export_filename(
            &ledger.account_name,
            config.generated_on,
            ExportFormat::Delimited,
        ),
        format: ExportFormat::Delimited,
        bytes: text.into_bytes(),
    })
}

fn record(sep: char, fields: &[&str]) -> String {
    let mut out = String::new();
    for (i, value) in fields.iter().enumerate() {
        if i > 0 {
            out.push(sep);
        }
        out.push_str(&field(value, sep));
    }
    out
}

fn field(value: &str, sep: char) -> String {
    if !value.contains([sep, '"', '\n', '\r']) {
        return value.to_string();
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    // Escape internal double quotes
    for ch in value.chars() {
        if ch == '"' {
            quoted.push_str("\"\"");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('"');
    quoted
}
