//! Export configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_CURRENCY, DaftarError};

/// Configuration shared by the ledger exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExportConfig {
    /// Currency code printed next to the header figures.
    pub currency: String,
    /// Date stamped into the filename (`ledger_<name>_<YYYYMMDD>.<ext>`).
    pub generated_on: NaiveDate,
    /// Field separator of the delimited-text export. Must not be `"`, CR or LF.
    pub delimiter: char,
    /// Title line at the top of both exports.
    pub title: String,
}

impl Default for LedgerExportConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.into(),
            generated_on: chrono::Local::now().date_naive(),
            delimiter: ',',
            title: "Account Ledger".into(),
        }
    }
}

impl LedgerExportConfig {
    /// Check that the delimited export can be written with this configuration.
    ///
    /// The quote character and line breaks are reserved by the quoting rules,
    /// so none of them can separate fields.
    pub fn validate(&self) -> Result<(), DaftarError> {
        if matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(DaftarError::Validation(format!(
                "delimiter {:?} is reserved for quoting or line breaks",
                self.delimiter
            )));
        }
        Ok(())
    }
}

/// Builder for [`LedgerExportConfig`].
///
/// # Example
///
/// ```
/// use daftar::ledger::LedgerExportConfigBuilder;
/// use chrono::NaiveDate;
///
/// let config = LedgerExportConfigBuilder::new(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
///     .delimiter(';')
///     .build();
/// assert_eq!(config.currency, "AED");
/// ```
pub struct LedgerExportConfigBuilder {
    config: LedgerExportConfig,
}

impl LedgerExportConfigBuilder {
    /// Create a builder stamped with the given export date.
    pub fn new(generated_on: NaiveDate) -> Self {
        Self {
            config: LedgerExportConfig {
                generated_on,
                ..Default::default()
            },
        }
    }

    /// Set the currency code.
    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.config.currency = code.into();
        self
    }

    /// Set the delimited-text field separator.
    ///
    /// `"`, CR and LF are rejected when the export is rendered; see
    /// [`LedgerExportConfig::validate`].
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Set the title line.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> LedgerExportConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let config = LedgerExportConfigBuilder::new(date)
            .currency("USD")
            .delimiter('\t')
            .title("General Ledger")
            .build();
        assert_eq!(config.generated_on, date);
        assert_eq!(config.currency, "USD");
        assert_eq!(config.delimiter, '\t');
        assert_eq!(config.title, "General Ledger");
    }

    #[test]
    fn reserved_delimiters_rejected() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        for delimiter in ['"', '\n', '\r'] {
            let config = LedgerExportConfigBuilder::new(date).delimiter(delimiter).build();
            assert!(matches!(config.validate(), Err(DaftarError::Validation(_))));
        }
        for delimiter in [',', ';', '\t', '|'] {
            let config = LedgerExportConfigBuilder::new(date).delimiter(delimiter).build();
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{"currency":"AED","generated_on":"2024-06-30","delimiter":";","title":"Ledger"}"#;
        let config: LedgerExportConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.delimiter, ';');
    }
}
