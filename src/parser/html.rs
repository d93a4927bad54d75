// Shared pieces of the HTML table layouts.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::{header_row, RawRow};

/// Right-to-left mark that some exports prepend to cell text
pub(crate) const RLM: char = '\u{200f}';

/// Stand-in for a blank date cell. It lands decades outside any statement
/// period, so date-range repair rewrites it.
pub(crate) const PLACEHOLDER_DATE: &str = "1970-01-01";

/// Cell class marking the totals row of the Cal and Leumi grids
pub(crate) const FOOTER_CLASS: &str = "footer_cell_total";

pub(crate) static TR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("invalid tr selector"));
pub(crate) static TD: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("invalid td selector"));
pub(crate) static TH: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th").expect("invalid th selector"));

pub(crate) fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

pub(crate) fn strip_direction_marks(text: &str) -> String {
    text.trim_matches(|c: char| c == RLM || c.is_whitespace())
        .to_string()
}

pub(crate) fn cells(row: ElementRef<'_>, cell: &Selector) -> RawRow {
    row.select(cell).map(cell_text).collect()
}

fn is_footer_row(row: ElementRef<'_>) -> bool {
    row.select(&TD)
        .any(|td| td.value().classes().any(|c| c == FOOTER_CLASS))
}

/// Header from the first row matched by `header`, `th` cells.
pub(crate) fn grid_header(doc: &Html, header: &Selector) -> Option<RawRow> {
    doc.select(header)
        .next()
        .map(|tr| header_row(cells(tr, &TH)))
}

/// `td` rows matched by `rows`, up to the first totals row. Rows without
/// `td` cells (captions, header rows inside the body) are dropped.
pub(crate) fn grid_rows(doc: &Html, rows: &Selector) -> Vec<RawRow> {
    let rows: Vec<ElementRef<'_>> = doc.select(rows).collect();
    let end = rows
        .iter()
        .position(|tr| is_footer_row(*tr))
        .unwrap_or(rows.len());

    rows[..end]
        .iter()
        .map(|tr| cells(*tr, &TD))
        .filter(|row| !row.is_empty())
        .collect()
}

/// Header plus data rows of an anchored grid, or nothing when the anchor
/// (or its header) is missing.
pub(crate) fn grid(doc: &Html, header: &Selector, rows: &Selector) -> Vec<RawRow> {
    match grid_header(doc, header) {
        Some(header) => {
            let mut out = vec![header];
            out.extend(grid_rows(doc, rows));
            out
        }
        None => Vec::new(),
    }
}

// ============================================================================
// POSITIONAL SCAN
// ============================================================================

/// Layouts without a usable anchor: every `tr` in the page, minus a fixed set
/// of boilerplate positions, the first survivor being the header.
pub(crate) struct TableScan {
    /// Whether the `tr` at this document position is boilerplate
    pub skip: fn(usize) -> bool,
    /// Whether a kept row is the first row of the totals footer
    pub is_footer: fn(&[String]) -> bool,
}

impl TableScan {
    /// `None` when some row before the footer has fewer than two cells: the
    /// page is laid out differently and belongs to another decoder.
    pub(crate) fn rows(&self, doc: &Html) -> Option<Vec<RawRow>> {
        let mut kept: Vec<RawRow> = doc
            .select(&TR)
            .enumerate()
            .filter(|(i, _)| !(self.skip)(*i))
            .map(|(_, tr)| {
                tr.select(&TD)
                    .map(|td| strip_direction_marks(&cell_text(td)))
                    .collect()
            })
            .collect();

        let end = kept
            .iter()
            .position(|row| (self.is_footer)(row))
            .unwrap_or(kept.len());
        kept.truncate(end);

        if kept.iter().any(|row| row.len() < 2) {
            return None;
        }

        let mut kept = kept.into_iter();
        let Some(header) = kept.next() else {
            return Some(Vec::new());
        };

        let mut rows = vec![header_row(header)];
        for mut row in kept {
            if row[0].is_empty() {
                row[0] = PLACEHOLDER_DATE.to_string();
            }
            rows.push(row);
        }
        Some(rows)
    }
}
