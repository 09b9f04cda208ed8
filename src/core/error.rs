use thiserror::Error;

/// Errors that can occur while looking up return fields or producing exports.
///
/// The calculators themselves never fail: malformed numbers coerce to zero
/// and totals are always computable. Only name-based lookups, document
/// generation and file writes surface an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DaftarError {
    /// Field name does not exist on the VAT 201 form.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Field exists on the form but not for the requested box (e.g. VAT on box 4).
    #[error("invalid field: {0}")]
    InvalidField(String),

    /// Document generation failed; no file was produced.
    #[error("export failed: {0}")]
    Export(String),

    /// Writing an export to disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),
}

/// An advisory finding produced by `Vat201Return::review`.
///
/// Findings never block a calculation. `field` is the flat VAT 201 form
/// field name that `Vat201Field` parses from (e.g. `importsVat`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Flat form field name the finding refers to (e.g. "box1aAbuDhabiVat").
    pub field: String,
    /// Human-readable description.
    pub message: String,
    /// Short rule identifier if applicable (e.g. "VAT-RATE").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a finding without a rule ID.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a finding with a rule ID.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}
