//! Core numeric helpers, error types and pagination.
//!
//! Every other module builds on these: amounts are parsed and formatted
//! here, and all fallible operations return [`DaftarError`].

mod error;
pub mod money;
mod pagination;

pub use error::*;
pub use money::{
    DEFAULT_CURRENCY, MAX_AMOUNT, bounded_amount, format_amount, format_currency, format_display,
    parse_amount, round_money, saturating_sum,
};
pub use pagination::{Page, PageRequest};
