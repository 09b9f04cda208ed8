//! Finished export files.

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::DaftarError;

/// Output format of a ledger export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma (or configured delimiter) separated text.
    Delimited,
    /// Paginated PDF table.
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Delimited => "csv",
            Self::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Delimited => "text/csv",
            Self::Pdf => "application/pdf",
        }
    }
}

/// A complete export held in memory.
///
/// Exports are only ever constructed from a fully generated document, so a
/// failed export leaves nothing behind.
#[derive(Debug, Clone)]
pub struct LedgerExport {
    pub filename: String,
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

impl LedgerExport {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Write the export into `dir` under its filename.
    ///
    /// Content goes to a hidden `.part` file first and is renamed into place,
    /// so readers never see a half-written export.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, DaftarError> {
        let target = dir.join(&self.filename);
        let partial = dir.join(format!(".{}.part", self.filename));

        if let Err(e) = fs::write(&partial, &self.bytes) {
            let _ = fs::remove_file(&partial);
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&partial, &target) {
            let _ = fs::remove_file(&partial);
            return Err(e.into());
        }

        log::debug!("wrote {} ({} bytes)", target.display(), self.bytes.len());
        Ok(target)
    }
}

/// `ledger_<accountname>_<YYYYMMDD>.<ext>`.
///
/// Whitespace and path separators in the account name become `_`.
pub fn export_filename(account_name: &str, date: NaiveDate, format: ExportFormat) -> String {
    let name: String = account_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_whitespace() || matches!(c, '/' | '\\') {
                '_'
            } else {
                c
            }
        })
        .collect();
    format!(
        "ledger_{}_{}.{}",
        name,
        date.format("%Y%m%d"),
        format.extension()
    )
}
