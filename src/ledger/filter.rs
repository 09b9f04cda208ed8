//! Narrowing a ledger to a date window, search text or posting source.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{AccountLedger, LedgerEntry};
use crate::core::saturating_sum;

/// Criteria applied before balances are computed.
///
/// Entries dated before `from` are not dropped outright: their net effect is
/// folded into the opening balance so the window starts from the right figure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    /// Case-insensitive match on entry number, description or memo.
    pub search: Option<String>,
    /// Exact match on the posting source.
    pub source: Option<String>,
}

impl LedgerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date_from(mut self, date: NaiveDate) -> Self {
        self.from = Some(date);
        self
    }

    pub fn date_to(mut self, date: NaiveDate) -> Self {
        self.to = Some(date);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Produce the filtered ledger; the input is left untouched.
    pub fn apply(&self, ledger: &AccountLedger) -> AccountLedger {
        let sign = ledger.normal_balance().sign();
        let carried = match self.from {
            Some(from) => saturating_sum(
                ledger
                    .entries
                    .iter()
                    .filter(|e| e.date < from)
                    .map(|e| sign * e.net()),
            ),
            None => Decimal::ZERO,
        };

        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let entries: Vec<LedgerEntry> = ledger
            .entries
            .iter()
            .filter(|e| self.from.is_none_or(|from| e.date >= from))
            .filter(|e| self.to.is_none_or(|to| e.date <= to))
            .filter(|e| match &self.source {
                Some(src) => e.source.as_deref() == Some(src.as_str()),
                None => true,
            })
            .filter(|e| match &needle {
                Some(n) => matches_search(e, n),
                None => true,
            })
            .cloned()
            .collect();

        log::debug!(
            "ledger filter kept {} of {} entries for '{}'",
            entries.len(),
            ledger.entries.len(),
            ledger.account_name
        );

        AccountLedger {
            account_name: ledger.account_name.clone(),
            account_code: ledger.account_code.clone(),
            account_type: ledger.account_type,
            opening_balance: saturating_sum([ledger.opening_balance, carried]),
            entries,
        }
    }
}

fn matches_search(entry: &LedgerEntry, needle: &str) -> bool {
    [
        Some(entry.entry_number.as_str()),
        entry.description.as_deref(),
        entry.memo.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}
