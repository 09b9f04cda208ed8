//! Page layout of the tabular ledger document.
//!
//! Positions are millimetres from the top-left corner of the page, the way
//! the document is designed; conversion to PDF points happens at render time.

use serde::{Deserialize, Serialize};

use crate::core::format_amount;
use crate::ledger::balance::{compute_running_balances, compute_summary_with};
use crate::ledger::config::LedgerExportConfig;
use crate::ledger::types::AccountLedger;

/// Page geometry and typography of the ledger document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfLayout {
    /// Page width in mm (A4: 210).
    pub page_width: f32,
    /// Page height in mm (A4: 297).
    pub page_height: f32,
    /// A new page starts once the next row would sit below this y position.
    pub break_threshold: f32,
    /// y position of the first line on every page.
    pub top_margin: f32,
    /// Vertical advance per table row.
    pub row_height: f32,
    /// Title font size in pt.
    pub title_size: f32,
    /// Body font size in pt.
    pub body_size: f32,
    /// Descriptions longer than this many characters are cut.
    pub description_width: usize,
    /// x position of the six columns: date, entry number, description, debit, credit, balance.
    pub columns: [f32; 6],
    /// Repeat the column header row at the top of continuation pages.
    pub repeat_column_header: bool,
}

impl Default for PdfLayout {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            break_threshold: 280.0,
            top_margin: 20.0,
            row_height: 7.0,
            title_size: 18.0,
            body_size: 10.0,
            description_width: 40,
            columns: [14.0, 38.0, 66.0, 136.0, 158.0, 180.0],
            repeat_column_header: false,
        }
    }
}

/// A piece of text placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub bold: bool,
    pub text: String,
}

/// One page of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocPage {
    pub runs: Vec<TextRun>,
    /// Number of ledger entry rows on this page.
    pub rows: usize,
}

/// Laid-out document, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabularDocument {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub pages: Vec<DocPage>,
}

impl TabularDocument {
    /// Entry rows across all pages.
    pub fn row_count(&self) -> usize {
        self.pages.iter().map(|p| p.rows).sum()
    }
}

const COLUMN_TITLES: [&str; 6] = ["Date", "Entry #", "Description", "Debit", "Credit", "Balance"];

struct Cursor<'a> {
    layout: &'a PdfLayout,
    pages: Vec<DocPage>,
    y: f32,
}

impl<'a> Cursor<'a> {
    fn new(layout: &'a PdfLayout) -> Self {
        Self {
            layout,
            pages: vec![DocPage::default()],
            y: layout.top_margin,
        }
    }

    fn page(&mut self) -> &mut DocPage {
        // `pages` starts with one page and only grows
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn text(&mut self, x: f32, size: f32, bold: bool, text: impl Into<String>) {
        let y = self.y;
        self.page().runs.push(TextRun {
            x,
            y,
            size,
            bold,
            text: text.into(),
        });
    }

    fn new_page(&mut self) {
        self.pages.push(DocPage::default());
        self.y = self.layout.top_margin;
    }

    fn column_header(&mut self) {
        let size = self.layout.body_size;
        for (x, title) in self.layout.columns.into_iter().zip(COLUMN_TITLES) {
            self.text(x, size, true, title);
        }
        self.y += self.layout.row_height + 1.0;
    }

    /// Start a new page if `needed` mm would cross the threshold.
    fn ensure_room(&mut self, needed: f32) {
        if self.y + needed > self.layout.break_threshold {
            self.new_page();
        }
    }
}

/// Lay out the whole ledger over as many pages as it needs.
///
/// The account header block appears on the first page only; the totals block
/// closes the last page.
pub fn layout_document(
    ledger: &AccountLedger,
    config: &LedgerExportConfig,
    layout: &PdfLayout,
) -> TabularDocument {
    let normal = ledger.normal_balance();
    let lines = compute_running_balances(&ledger.entries, ledger.opening_balance, normal);
    let summary = compute_summary_with(&ledger.entries, ledger.opening_balance, normal);
    let left = layout.columns[0];
    let body = layout.body_size;

    let mut cur = Cursor::new(layout);

    // Header block
    cur.text(left, layout.title_size, true, config.title.as_str());
    cur.y += 10.0;
    cur.text(left, body, false, format!("Account: {}", ledger.display_name()));
    cur.y += 6.0;
    cur.text(
        left,
        body,
        false,
        format!(
            "Opening Balance: {} {}",
            config.currency,
            format_amount(summary.opening_balance)
        ),
    );
    cur.y += 10.0;
    cur.column_header();

    for line in &lines {
        if cur.y > layout.break_threshold {
            cur.new_page();
            if layout.repeat_column_header {
                cur.column_header();
            }
        }
        let e = line.entry;
        let c = layout.columns;
        cur.text(c[0], body, false, e.date.format("%Y-%m-%d").to_string());
        cur.text(c[1], body, false, e.entry_number.as_str());
        cur.text(c[2], body, false, truncate(e.text(), layout.description_width));
        cur.text(c[3], body, false, format_amount(e.debit));
        cur.text(c[4], body, false, format_amount(e.credit));
        cur.text(c[5], body, false, format_amount(line.running_balance));
        cur.page().rows += 1;
        cur.y += layout.row_height;
    }

    // Totals block
    cur.y += 3.0;
    cur.ensure_room(2.0 * layout.row_height);
    for (label, amount) in [
        ("Total Debit", summary.total_debit),
        ("Total Credit", summary.total_credit),
        ("Closing Balance", summary.closing_balance),
    ] {
        cur.text(
            left,
            body,
            true,
            format!("{label}: {} {}", config.currency, format_amount(amount)),
        );
        cur.y += layout.row_height;
    }

    log::debug!(
        "ledger document for '{}': {} rows on {} pages",
        ledger.account_name,
        lines.len(),
        cur.pages.len()
    );

    TabularDocument {
        title: format!("{} - {}", config.title, ledger.display_name()),
        width: layout.page_width,
        height: layout.page_height,
        pages: cur.pages,
    }
}

/// Cut to at most `max` characters.
fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
