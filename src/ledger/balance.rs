//! Running balances and period summaries.
//!
//! The aggregator never sorts. Entries must arrive ascending by date with
//! ties in creation order; out-of-order input still produces a result but
//! the running balances are meaningless, so a warning is logged.
//!
//! Arithmetic saturates: a figure that would leave `Decimal`'s range is
//! clamped to `Decimal::MAX`/`MIN` and a warning is logged. Nothing here
//! panics, whatever amounts a deserialised ledger carries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{AccountLedger, LedgerEntry, NormalBalance};
use crate::core::{Page, PageRequest, saturating_sum};

/// A ledger line together with the account balance after it was posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalancedEntry<'a> {
    pub entry: &'a LedgerEntry,
    pub running_balance: Decimal,
}

/// Totals over the full entry set of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub opening_balance: Decimal,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    pub closing_balance: Decimal,
}

/// Prefix sum of `sign × (debit − credit)` seeded with `opening_balance`.
pub fn compute_running_balances(
    entries: &[LedgerEntry],
    opening_balance: Decimal,
    normal: NormalBalance,
) -> Vec<BalancedEntry<'_>> {
    if !is_chronological(entries) {
        log::warn!(
            "ledger entries are not in date order; running balances will not match posting order"
        );
    }

    let sign = normal.sign();
    let mut balance = opening_balance;
    entries
        .iter()
        .map(|entry| {
            balance = saturating_sum([balance, sign * entry.net()]);
            BalancedEntry {
                entry,
                running_balance: balance,
            }
        })
        .collect()
}

/// Debit-normal summary: `closing = opening + Σdebit − Σcredit`.
pub fn compute_summary(entries: &[LedgerEntry], opening_balance: Decimal) -> LedgerSummary {
    compute_summary_with(entries, opening_balance, NormalBalance::Debit)
}

/// Summary whose closing balance follows the account's sign convention, so it
/// always equals the last running balance from [`compute_running_balances`].
pub fn compute_summary_with(
    entries: &[LedgerEntry],
    opening_balance: Decimal,
    normal: NormalBalance,
) -> LedgerSummary {
    let total_debit = saturating_sum(entries.iter().map(|e| e.debit));
    let total_credit = saturating_sum(entries.iter().map(|e| e.credit));
    let movement = normal.sign() * total_debit.saturating_sub(total_credit);
    LedgerSummary {
        opening_balance,
        total_debit,
        total_credit,
        closing_balance: saturating_sum([opening_balance, movement]),
    }
}

/// True when dates never decrease.
pub fn is_chronological(entries: &[LedgerEntry]) -> bool {
    entries.windows(2).all(|w| w[0].date <= w[1].date)
}

/// Stable sort by date; entries sharing a date keep their current order.
pub fn sort_chronological(entries: &mut [LedgerEntry]) {
    entries.sort_by_key(|e| e.date);
}

impl AccountLedger {
    /// Every entry with its running balance, using the account's sign convention.
    pub fn lines(&self) -> Vec<BalancedEntry<'_>> {
        compute_running_balances(&self.entries, self.opening_balance, self.normal_balance())
    }

    /// Totals over all entries, not just a displayed page.
    pub fn summary(&self) -> LedgerSummary {
        compute_summary_with(&self.entries, self.opening_balance, self.normal_balance())
    }

    /// One on-screen page of balanced lines.
    ///
    /// Balances are computed over the whole ledger first, so a row shows the
    /// same balance whichever page it lands on.
    pub fn page(&self, request: PageRequest) -> Page<BalancedEntry<'_>> {
        Page::slice(&self.lines(), request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn two_entries() -> Vec<LedgerEntry> {
        vec![
            LedgerEntry::new(date(2024, 1, 5), "JE-1", dec!(500), dec!(0)),
            LedgerEntry::new(date(2024, 1, 9), "JE-2", dec!(0), dec!(200)),
        ]
    }

    #[test]
    fn running_balance_debit_normal() {
        let entries = two_entries();
        let lines = compute_running_balances(&entries, dec!(1000), NormalBalance::Debit);
        let balances: Vec<_> = lines.iter().map(|l| l.running_balance).collect();
        assert_eq!(balances, vec![dec!(1500), dec!(1300)]);
    }

    #[test]
    fn running_balance_credit_normal() {
        let entries = two_entries();
        let lines = compute_running_balances(&entries, dec!(1000), NormalBalance::Credit);
        let balances: Vec<_> = lines.iter().map(|l| l.running_balance).collect();
        assert_eq!(balances, vec![dec!(500), dec!(700)]);
    }

    #[test]
    fn summary_matches_formula() {
        let s = compute_summary(&two_entries(), dec!(1000));
        assert_eq!(s.total_debit, dec!(500));
        assert_eq!(s.total_credit, dec!(200));
        assert_eq!(s.closing_balance, dec!(1300));
    }

    #[test]
    fn credit_normal_summary_matches_last_line() {
        let entries = two_entries();
        let s = compute_summary_with(&entries, dec!(1000), NormalBalance::Credit);
        let lines = compute_running_balances(&entries, dec!(1000), NormalBalance::Credit);
        assert_eq!(s.closing_balance, lines.last().unwrap().running_balance);
    }

    #[test]
    fn empty_set_summary() {
        let s = compute_summary(&[], dec!(250));
        assert_eq!(s.total_debit, Decimal::ZERO);
        assert_eq!(s.total_credit, Decimal::ZERO);
        assert_eq!(s.closing_balance, dec!(250));
        assert!(compute_running_balances(&[], dec!(250), NormalBalance::Debit).is_empty());
    }

    #[test]
    fn sort_keeps_same_day_order() {
        let mut entries = vec![
            LedgerEntry::new(date(2024, 3, 2), "B", dec!(1), dec!(0)),
            LedgerEntry::new(date(2024, 3, 1), "A", dec!(1), dec!(0)),
            LedgerEntry::new(date(2024, 3, 2), "C", dec!(1), dec!(0)),
        ];
        assert!(!is_chronological(&entries));
        sort_chronological(&mut entries);
        let order: Vec<_> = entries.iter().map(|e| e.entry_number.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
        assert!(is_chronological(&entries));
    }

    #[test]
    fn page_keeps_global_balances() {
        let entries: Vec<_> = (1..=57)
            .map(|i| LedgerEntry::new(date(2024, 1, 1), format!("JE-{i}"), dec!(10), dec!(0)))
            .collect();
        let ledger = AccountLedger::new("Cash", dec!(0)).entries(entries);
        let page = ledger.page(PageRequest::new(3, 25));
        assert_eq!(page.items.len(), 7);
        assert_eq!(page.items[0].running_balance, dec!(510));
        assert_eq!(page.total, 57);
        assert_eq!(ledger.summary().closing_balance, dec!(570));
    }

    #[test]
    fn huge_debits_saturate() {
        let big: Decimal = format!("5{}", "0".repeat(28)).parse().unwrap();
        let entries = vec![
            LedgerEntry::new(date(2024, 1, 1), "JE-1", big, dec!(0)),
            LedgerEntry::new(date(2024, 1, 2), "JE-2", big, dec!(0)),
        ];
        let s = compute_summary(&entries, dec!(0));
        assert_eq!(s.total_debit, Decimal::MAX);
        assert_eq!(s.closing_balance, Decimal::MAX);

        let lines = compute_running_balances(&entries, dec!(0), NormalBalance::Debit);
        assert_eq!(lines[0].running_balance, big);
        assert_eq!(lines[1].running_balance, Decimal::MAX);
    }

    #[test]
    fn huge_credits_saturate_on_credit_normal() {
        let entries = vec![
            LedgerEntry::new(date(2024, 1, 1), "JE-1", dec!(0), Decimal::MAX),
            LedgerEntry::new(date(2024, 1, 2), "JE-2", dec!(0), Decimal::MAX),
        ];
        let s = compute_summary_with(&entries, dec!(-1), NormalBalance::Credit);
        assert_eq!(s.total_credit, Decimal::MAX);
        assert_eq!(s.closing_balance, Decimal::MAX - dec!(1));
    }

    #[test]
    fn out_of_order_input_still_computes() {
        let mut entries = two_entries();
        entries.reverse();
        let lines = compute_running_balances(&entries, dec!(1000), NormalBalance::Debit);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].running_balance, dec!(1300));
    }
}
