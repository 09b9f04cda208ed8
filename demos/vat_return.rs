use std::collections::BTreeMap;

use chrono::NaiveDate;
use daftar::vat::*;
use rust_decimal_macros::dec;

fn main() {
    env_logger::init();

    // Figures as a user would type them into the form
    println!("=== VAT 201 Return ===\n");

    let mut ret = Vat201Return::default();
    let inputs = [
        ("box1aAbuDhabiAmount", "10000"),
        ("box1bDubaiAmount", "42500.75"),
        ("box1bDubaiAdjustment", "-250"),
        ("zeroRatedAmount", "18000"),
        ("exemptAmount", "3200"),
        ("importsAmount", "7500"),
        ("expensesAmount", "21000"),
        ("expensesReverseChargeAmount", "oops"),
    ];
    for (name, raw) in inputs {
        if let Err(e) = ret.update_named(name, raw) {
            println!("  {name}: {e}");
        }
    }

    for vat_box in VatBox::all() {
        let entry = ret.entry(vat_box);
        if entry.amount.is_zero() {
            continue;
        }
        println!(
            "  Box {:<3} {:<45} {:>12} {:>10}",
            vat_box.number(),
            vat_box.description(),
            daftar::core::format_display(entry.amount),
            daftar::core::format_display(entry.vat)
        );
    }

    let summary = ret.summary();
    println!("\n  Box 8  total sales    {}", summary.box8.amount);
    println!("  Box 11 total expenses {}", summary.box11.amount);
    println!("  Box 12 due tax        {}", summary.box12_total_due);
    println!("  Box 13 recoverable    {}", summary.box13_recoverable);
    println!("  Box 14                {}", summary.box14_net);

    // Review before submitting
    println!("\n=== Review ===\n");
    ret.update_named("importsVat", "412").ok();
    let findings = ret.review();
    if findings.is_empty() {
        println!("  nothing to review");
    }
    for finding in &findings {
        println!("  {finding}");
    }

    // Draft as returned by the server
    println!("\n=== Draft ===\n");
    let mut draft = BTreeMap::new();
    draft.insert("box1cSharjahAmount", dec!(8000));
    draft.insert("box1cSharjahVat", dec!(400));
    draft.insert("expensesAmount", dec!(12000));
    draft.insert("expensesVat", dec!(600));
    match Vat201Return::from_draft(draft) {
        Ok(r) => println!("  draft net: {}", r.net_position()),
        Err(e) => println!("  draft rejected: {e}"),
    }

    // Registration and deadline
    println!("\n=== Filing ===\n");
    for trn in ["100-2345-6789-0003", "12345"] {
        match validate_trn(trn) {
            Ok(clean) => println!("  {trn} => valid ({clean})"),
            Err(e) => println!("  {trn} => INVALID: {e}"),
        }
    }
    let period = TaxPeriod::new(
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
    );
    match period {
        Ok(p) => println!("  Q2 2024 due by {}", p.filing_due_date()),
        Err(e) => println!("  bad period: {e}"),
    }
}
