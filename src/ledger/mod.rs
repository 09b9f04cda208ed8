//! Account ledger balances and exports.
//!
//! Turns the chronologically ordered postings of one account into running
//! balances and a period summary, and serialises the complete (never
//! paginated) result as delimited text or, with the `pdf` feature, as a
//! paginated PDF table.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use daftar::ledger::*;
//! use rust_decimal_macros::dec;
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
//! let ledger = AccountLedger::new("Cash at Bank", dec!(1000))
//!     .add_entry(LedgerEntry::new(day(5), "JE-1", dec!(500), dec!(0)))
//!     .add_entry(LedgerEntry::new(day(9), "JE-2", dec!(0), dec!(200)));
//!
//! let balances: Vec<_> = ledger.lines().iter().map(|l| l.running_balance).collect();
//! assert_eq!(balances, vec![dec!(1500), dec!(1300)]);
//! assert_eq!(ledger.summary().closing_balance, dec!(1300));
//!
//! let config = LedgerExportConfigBuilder::new(day(31)).build();
//! let export = to_delimited(&ledger, &config).unwrap();
//! assert_eq!(export.filename, "ledger_Cash_at_Bank_20240131.csv");
//! ```

mod balance;
mod config;
mod delimited;
mod export;
mod filter;
mod types;

#[cfg(feature = "pdf")]
pub mod pdf;

pub use balance::{
    BalancedEntry, LedgerSummary, compute_running_balances, compute_summary, compute_summary_with,
    is_chronological, sort_chronological,
};
pub use config::{LedgerExportConfig, LedgerExportConfigBuilder};
pub use delimited::{render_delimited, to_delimited};
pub use export::{ExportFormat, LedgerExport, export_filename};
pub use filter::LedgerFilter;
pub use types::{AccountLedger, AccountType, LedgerEntry, NormalBalance};

#[cfg(feature = "pdf")]
pub use pdf::{PdfLayout, to_pdf};
