//! Tax periods and filing deadlines.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::DaftarError;

/// Days after the end of a tax period by which the return must be filed.
pub const FILING_WINDOW_DAYS: u64 = 28;

/// A VAT tax period (both ends inclusive).
///
/// Deserialisation goes through [`TaxPeriod::new`], so an inverted period
/// cannot be built from JSON either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTaxPeriod")]
pub struct TaxPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawTaxPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawTaxPeriod> for TaxPeriod {
    type Error = DaftarError;

    fn try_from(raw: RawTaxPeriod) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl TaxPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DaftarError> {
        if end < start {
            return Err(DaftarError::Validation(format!(
                "tax period ends ({end}) before it starts ({start})"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Last day to file the return and pay the tax.
    pub fn filing_due_date(&self) -> NaiveDate {
        self.end
            .checked_add_days(Days::new(FILING_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether a return filed on `date` is late.
    pub fn is_overdue(&self, date: NaiveDate) -> bool {
        date > self.filing_due_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn quarter_due_28_days_after_end() {
        let p = TaxPeriod::new(date(2024, 1, 1), date(2024, 3, 31)).unwrap();
        assert_eq!(p.filing_due_date(), date(2024, 4, 28));
        assert!(!p.is_overdue(date(2024, 4, 28)));
        assert!(p.is_overdue(date(2024, 4, 29)));
    }

    #[test]
    fn due_date_crosses_year() {
        let p = TaxPeriod::new(date(2024, 10, 1), date(2024, 12, 31)).unwrap();
        assert_eq!(p.filing_due_date(), date(2025, 1, 28));
    }

    #[test]
    fn contains_is_inclusive() {
        let p = TaxPeriod::new(date(2024, 1, 1), date(2024, 3, 31)).unwrap();
        assert!(p.contains(date(2024, 1, 1)));
        assert!(p.contains(date(2024, 3, 31)));
        assert!(!p.contains(date(2024, 4, 1)));
    }

    #[test]
    fn inverted_period_rejected() {
        assert!(TaxPeriod::new(date(2024, 3, 31), date(2024, 1, 1)).is_err());
    }

    #[test]
    fn inverted_period_rejected_from_json() {
        let json = r#"{"start":"2024-03-31","end":"2024-01-01"}"#;
        let err = serde_json::from_str::<TaxPeriod>(json).unwrap_err();
        assert!(err.to_string().contains("before it starts"));
    }

    #[test]
    fn period_json_round_trip() {
        let p = TaxPeriod::new(date(2024, 4, 1), date(2024, 6, 30)).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"start":"2024-04-01","end":"2024-06-30"}"#);
        let back: TaxPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert_eq!(back.start(), date(2024, 4, 1));
        assert_eq!(back.end(), date(2024, 6, 30));
    }
}
