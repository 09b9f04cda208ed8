use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use daftar::ledger::pdf::{PdfLayout, layout_document};
use daftar::ledger::*;
use daftar::vat::*;

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

fn build_ledger(n: usize) -> AccountLedger {
    let entries = (0..n)
        .map(|i| {
            let debit = if i % 3 == 0 { dec!(0) } else { dec!(1250.75) };
            let credit = if i % 3 == 0 { dec!(980.20) } else { dec!(0) };
            LedgerEntry::new(test_date(), format!("JE-{i:05}"), debit, credit)
                .description(format!("Posting {i}, batch {}", i / 50))
        })
        .collect();
    AccountLedger::new("Cash at Bank", dec!(10000))
        .account_code("1010")
        .entries(entries)
}

fn bench_vat_return(c: &mut Criterion) {
    c.bench_function("vat201_fill_and_summarise", |b| {
        b.iter(|| {
            let mut r = Vat201Return::default();
            for field in Vat201Field::all() {
                r.update(field, black_box("1234.56"));
            }
            black_box(r.summary())
        })
    });
}

fn bench_running_balances(c: &mut Criterion) {
    let ledger = build_ledger(10_000);
    c.bench_function("running_balances_10k", |b| {
        b.iter(|| black_box(ledger.lines().len()))
    });
}

fn bench_delimited_export(c: &mut Criterion) {
    let ledger = build_ledger(1_000);
    let config = LedgerExportConfigBuilder::new(test_date()).build();
    c.bench_function("delimited_export_1k", |b| {
        b.iter(|| black_box(render_delimited(&ledger, &config).unwrap()))
    });
}

fn bench_pdf_export(c: &mut Criterion) {
    let ledger = build_ledger(1_000);
    let config = LedgerExportConfigBuilder::new(test_date()).build();
    let layout = PdfLayout::default();
    c.bench_function("pdf_layout_1k", |b| {
        b.iter(|| black_box(layout_document(&ledger, &config, &layout)))
    });
    c.bench_function("pdf_export_1k", |b| {
        b.iter(|| black_box(to_pdf(&ledger, &config, &layout)))
    });
}

criterion_group!(
    benches,
    bench_vat_return,
    bench_running_balances,
    bench_delimited_export,
    bench_pdf_export
);
criterion_main!(benches);
