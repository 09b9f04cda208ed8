use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One posted journal line affecting a single account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    /// Posting date.
    pub date: NaiveDate,
    /// Journal entry number shown to users (e.g. "JE-2024-0001").
    pub entry_number: String,
    /// Line description; falls back to `memo` when empty.
    #[serde(default)]
    pub description: Option<String>,
    /// Journal-level memo.
    #[serde(default)]
    pub memo: Option<String>,
    /// Debit amount (≥ 0). Absent counts as zero.
    #[serde(default)]
    pub debit: Decimal,
    /// Credit amount (≥ 0). Absent counts as zero.
    #[serde(default)]
    pub credit: Decimal,
    /// Origin of the posting (e.g. "manual", "invoice", "bank").
    #[serde(default)]
    pub source: Option<String>,
    /// Identifier of the journal entry this line belongs to.
    #[serde(default)]
    pub journal_entry_id: String,
}

impl LedgerEntry {
    /// Create a line with the required fields; the rest stay empty.
    pub fn new(
        date: NaiveDate,
        entry_number: impl Into<String>,
        debit: Decimal,
        credit: Decimal,
    ) -> Self {
        Self {
            date,
            entry_number: entry_number.into(),
            description: None,
            memo: None,
            debit,
            credit,
            source: None,
            journal_entry_id: String::new(),
        }
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn memo(mut self, text: impl Into<String>) -> Self {
        self.memo = Some(text.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn journal_entry_id(mut self, id: impl Into<String>) -> Self {
        self.journal_entry_id = id.into();
        self
    }

    /// Description, or the memo when the description is missing or blank.
    pub fn text(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .or(self.memo.as_deref())
            .unwrap_or("")
    }

    /// Debit minus credit, before applying the account's sign. Saturates
    /// at the `Decimal` limits.
    pub fn net(&self) -> Decimal {
        self.debit.saturating_sub(self.credit)
    }
}

/// Side on which an account's balance grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalBalance {
    /// Debits increase the balance (assets, expenses).
    #[default]
    Debit,
    /// Credits increase the balance (liabilities, equity, revenue).
    Credit,
}

impl NormalBalance {
    /// `+1` for debit-normal, `-1` for credit-normal.
    pub fn sign(&self) -> Decimal {
        match self {
            Self::Debit => Decimal::ONE,
            Self::Credit => Decimal::NEGATIVE_ONE,
        }
    }
}

/// Account classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

impl AccountType {
    pub fn normal_balance(&self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense => NormalBalance::Debit,
            Self::Liability | Self::Equity | Self::Revenue => NormalBalance::Credit,
        }
    }
}

/// All posted lines of one account, in chronological order.
///
/// Entries must be sorted ascending by date (ties in creation order) before
/// they are placed here; see [`sort_chronological`](super::sort_chronological).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountLedger {
    pub account_name: String,
    #[serde(default)]
    pub account_code: Option<String>,
    /// When absent the ledger is treated as debit-normal.
    #[serde(default)]
    pub account_type: Option<AccountType>,
    #[serde(default)]
    pub opening_balance: Decimal,
    #[serde(default)]
    pub entries: Vec<LedgerEntry>,
}

impl AccountLedger {
    pub fn new(account_name: impl Into<String>, opening_balance: Decimal) -> Self {
        Self {
            account_name: account_name.into(),
            account_code: None,
            account_type: None,
            opening_balance,
            entries: Vec::new(),
        }
    }

    pub fn account_code(mut self, code: impl Into<String>) -> Self {
        self.account_code = Some(code.into());
        self
    }

    pub fn account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = Some(account_type);
        self
    }

    pub fn entries(mut self, entries: Vec<LedgerEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn add_entry(mut self, entry: LedgerEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Sign convention for running balances.
    pub fn normal_balance(&self) -> NormalBalance {
        self.account_type
            .map(|t| t.normal_balance())
            .unwrap_or_default()
    }

    /// "code - name" when a code is set, otherwise the name.
    pub fn display_name(&self) -> String {
        match &self.account_code {
            Some(code) if !code.is_empty() => format!("{} - {}", code, self.account_name),
            _ => self.account_name.clone(),
        }
    }
}
