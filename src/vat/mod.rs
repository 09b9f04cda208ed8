//! FTA VAT 201 return calculator.
//!
//! Holds the per-box figures of one filing period, derives VAT at the 5%
//! standard rate when an amount is entered, and produces the statutory
//! totals (boxes 8 and 11-14). Also validates TRNs by format and computes
//! filing deadlines.
//!
//! # Example
//!
//! ```
//! use daftar::vat::*;
//! use rust_decimal_macros::dec;
//!
//! let mut vat_return = Vat201Return::default();
//! vat_return.update_named("box1aAbuDhabiAmount", "10000").unwrap();
//! vat_return.update_named("expensesAmount", "2000").unwrap();
//!
//! let summary = vat_return.summary();
//! assert_eq!(summary.box12_total_due, dec!(500.00));
//! assert_eq!(summary.box13_recoverable, dec!(100.00));
//! assert_eq!(summary.box14_net.to_string(), "AED 400.00 Payable");
//! ```

mod boxes;
mod period;
mod review;
mod trn;
mod vat201;

pub use boxes::{Emirate, FieldKind, Vat201Field, VatBox};
pub use period::{FILING_WINDOW_DAYS, TaxPeriod};
pub use review::VAT_TOLERANCE;
pub use trn::{TRN_LENGTH, TrnFormatError, validate_trn};
pub use vat201::{
    BoxEntry, NetVatPosition, UAE_STANDARD_RATE, Vat201Return, Vat201Summary, standard_vat,
};
