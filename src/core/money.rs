//! Monetary rounding, lenient parsing and the two formatting layers.
//!
//! Exports always carry raw two-decimal numbers (`"0.00"`), while on-screen
//! tables show grouped figures and a dash for empty debit/credit cells.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::str::FromStr;

/// ISO 4217 code used when no currency is configured.
pub const DEFAULT_CURRENCY: &str = "AED";

/// Largest magnitude accepted as a single amount (10^15).
///
/// Keeps every derived figure (5% VAT, box totals, net VAT) well inside
/// `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Round to fils (2 dp), midpoint away from zero.
///
/// Negative zero collapses to zero so it never prints as `-0.00`.
pub fn round_money(d: Decimal) -> Decimal {
    let r = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if r.is_zero() { Decimal::ZERO } else { r }
}

/// Parse a user-entered amount, coercing anything unusable to zero.
///
/// Only the leading numeric prefix is read (optional sign, digits, one
/// decimal point), so `"12.5abc"` yields `12.5` and `"abc"` yields `0`.
/// Currency symbols and digit grouping are not understood. Magnitudes above
/// [`MAX_AMOUNT`] are unusable and also yield `0`.
pub fn parse_amount(raw: &str) -> Decimal {
    let s = raw.trim();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return Decimal::ZERO;
    }

    let mut prefix = s[..end].trim_end_matches('.').to_string();
    let negative = prefix.starts_with('-');
    prefix = prefix.trim_start_matches(['+', '-']).to_string();
    if prefix.starts_with('.') {
        prefix.insert(0, '0');
    }

    match Decimal::from_str(&prefix) {
        Ok(d) if negative => bounded_amount(-d),
        Ok(d) => bounded_amount(d),
        Err(_) => Decimal::ZERO,
    }
}

/// `d` itself when its magnitude is at most [`MAX_AMOUNT`], otherwise `0`.
pub fn bounded_amount(d: Decimal) -> Decimal {
    if d.abs() <= MAX_AMOUNT {
        d
    } else {
        log::warn!("amount {d} exceeds {MAX_AMOUNT}; treated as 0");
        Decimal::ZERO
    }
}

/// Sum that clamps to `Decimal::MAX`/`MIN` instead of panicking on overflow.
pub fn saturating_sum<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    let mut total = Decimal::ZERO;
    let mut saturated = false;
    for amount in amounts {
        total = match total.checked_add(amount) {
            Some(t) => t,
            None => {
                saturated = true;
                total.saturating_add(amount)
            }
        };
    }
    if saturated {
        log::warn!("amount total overflowed and was clamped to {total}");
    }
    total
}

/// Export-layer formatting: exactly two decimals, no grouping.
pub fn format_amount(d: Decimal) -> String {
    format!("{:.2}", round_money(d))
}

/// Presentation-layer formatting: `-` for zero, otherwise grouped with two decimals.
pub fn format_display(d: Decimal) -> String {
    let d = round_money(d);
    if d.is_zero() {
        return "-".into();
    }
    group_thousands(d)
}

/// Grouped amount with a currency prefix, e.g. `AED 1,234.50`.
pub fn format_currency(d: Decimal, currency: &str) -> String {
    format!("{} {}", currency, group_thousands(round_money(d)))
}

fn group_thousands(d: Decimal) -> String {
    let plain = format!("{:.2}", d.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if d.is_sign_negative() { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}
