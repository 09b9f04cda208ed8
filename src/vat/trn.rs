//! Tax Registration Number (TRN) format validation.

use std::fmt;

/// Number of digits in a UAE TRN.
pub const TRN_LENGTH: usize = 15;

/// Error returned when a TRN fails format validation.
#[derive(Debug, Clone)]
pub struct TrnFormatError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for TrnFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid TRN '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for TrnFormatError {}

/// Validate a UAE TRN by format (no network call).
///
/// Spaces and dashes are accepted as separators (`100-1234-5678-9003`).
/// Returns the 15 digits on success.
pub fn validate_trn(trn: &str) -> Result<String, TrnFormatError> {
    let trimmed = trn.trim();
    let fail = |reason: &str| TrnFormatError {
        value: trimmed.into(),
        reason: reason.into(),
    };

    let digits: String = trimmed
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();

    if digits.is_empty() {
        return Err(fail("empty"));
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(fail("must contain digits only"));
    }
    if digits.len() != TRN_LENGTH {
        return Err(fail(&format!(
            "must be {TRN_LENGTH} digits, got {}",
            digits.len()
        )));
    }
    Ok(digits)
}
