//! # daftar
//!
//! Bookkeeping core for UAE businesses: the FTA VAT 201 return calculator
//! and account-ledger balances with delimited-text and PDF exports.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Everything here is a pure, synchronous computation over data the caller
//! has already fetched; there is no I/O except writing a finished export.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "vat")] {
//! use daftar::vat::*;
//! use rust_decimal_macros::dec;
//!
//! let mut vat_return = Vat201Return::default();
//! vat_return.update_named("box1aAbuDhabiAmount", "10000").unwrap();
//!
//! assert_eq!(vat_return.total_sales_vat(), dec!(500.00));
//! assert_eq!(vat_return.net_position().label(), "Payable");
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Amount parsing/formatting, errors, pagination |
//! | `vat` | VAT 201 return calculator, TRN and tax period helpers |
//! | `ledger` | Running balances, summaries, filters, delimited-text export |
//! | `pdf` | Paginated ledger document rendered with `lopdf` |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "vat")]
pub mod vat;

#[cfg(feature = "ledger")]
pub mod ledger;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
