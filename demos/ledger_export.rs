use chrono::NaiveDate;
use daftar::core::{PageRequest, format_display};
use daftar::ledger::*;
use rust_decimal_macros::dec;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut ledger = AccountLedger::new("Cash at Bank", dec!(15000))
        .account_code("1010")
        .account_type(AccountType::Asset);
    for day in 1..=28 {
        ledger = ledger
            .add_entry(
                LedgerEntry::new(date(day), format!("JE-2024-{:04}", day * 2 - 1), dec!(1250), dec!(0))
                    .description(format!("Customer receipt INV-{day:03}"))
                    .source("invoice"),
            )
            .add_entry(
                LedgerEntry::new(date(day), format!("JE-2024-{:04}", day * 2), dec!(0), dec!(430.5))
                    .memo("Supplier payment, stationery and office supplies for the Dubai branch")
                    .source("bank"),
            );
    }

    // First page as it would appear on screen
    println!("=== {} ===\n", ledger.display_name());
    let page = ledger.page(PageRequest::new(1, 10));
    for line in &page.items {
        println!(
            "  {}  {:<12} {:>10} {:>10} {:>12}",
            line.entry.date,
            line.entry.entry_number,
            format_display(line.entry.debit),
            format_display(line.entry.credit),
            format_display(line.running_balance)
        );
    }
    println!("  ... page {} of {}", page.page, page.total_pages);

    let summary = ledger.summary();
    println!("\n  Closing balance: {}", format_display(summary.closing_balance));

    // Exports always cover the whole ledger
    let config = LedgerExportConfigBuilder::new(date(31)).build();
    let out_dir = std::env::temp_dir();

    let csv = to_delimited(&ledger, &config)?;
    println!("\n  wrote {}", csv.write_to(&out_dir)?.display());

    let pdf = to_pdf(&ledger, &config, &PdfLayout::default())?;
    println!("  wrote {}", pdf.write_to(&out_dir)?.display());

    // Only the second half of the month
    let window = LedgerFilter::new().date_from(date(15)).apply(&ledger);
    println!(
        "\n  from Jan 15: opening {}, {} entries",
        format_display(window.opening_balance),
        window.entries.len()
    );

    Ok(())
}
