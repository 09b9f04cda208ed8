//! Paginated tabular-document (PDF) ledger export.
//!
//! Layout and rendering are separate steps: [`layout_document`] decides what
//! goes on which page, [`render_pdf`] turns that into PDF bytes with `lopdf`.

mod layout;
mod render;

pub use layout::{DocPage, PdfLayout, TabularDocument, TextRun, layout_document};
pub use render::render_pdf;

use super::config::LedgerExportConfig;
use super::export::{ExportFormat, LedgerExport, export_filename};
use super::types::AccountLedger;
use crate::core::DaftarError;

/// Produce the PDF export file.
///
/// On failure nothing is returned but the error; callers surface it as a
/// failed export and keep their state unchanged.
pub fn to_pdf(
    ledger: &AccountLedger,
    config: &LedgerExportConfig,
    layout: &PdfLayout,
) -> Result<LedgerExport, DaftarError> {
    let document = layout_document(ledger, config, layout);
    let bytes = render_pdf(&document).inspect_err(|e| {
        log::error!("PDF export of '{}' failed: {e}", ledger.account_name);
    })?;

    Ok(LedgerExport {
        filename: export_filename(&ledger.account_name, config.generated_on, ExportFormat::Pdf),
        format: ExportFormat::Pdf,
        bytes,
    })
}
