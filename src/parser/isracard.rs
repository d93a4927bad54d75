// Isracard statement page, ISO-8859-8-I HTML.
//
// Rows 0-2 are titles, row 3 the header and row 4 a sub-caption; the
// transactions follow until the "total charge" line. Checking-account pages
// reach this decoder too (they share the bare table structure), and are told
// apart by their single-cell layout rows.

use scraper::Html;
use tracing::debug;

use super::html::TableScan;
use super::{Layout, LayoutDecoder, RawRow};
use crate::encoding::normalize;
use crate::error::DecodeError;

const HEADER_ROW: usize = 3;

const TOTAL_CHARGE_LABEL: &str = "סך חיוב בש\"ח:";

fn is_total_charge(row: &[String]) -> bool {
    row.get(1)
        .map(|cell| cell.trim_start_matches('@') == TOTAL_CHARGE_LABEL)
        .unwrap_or(false)
}

const SCAN: TableScan = TableScan {
    skip: |i| i < HEADER_ROW || i == HEADER_ROW + 1,
    is_footer: is_total_charge,
};

pub struct IsracardDecoder;

impl LayoutDecoder for IsracardDecoder {
    fn layout(&self) -> Layout {
        Layout::Isracard
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<RawRow>, DecodeError> {
        let text = normalize(bytes, self.layout().encoding())?;
        let doc = Html::parse_document(&text);

        match SCAN.rows(&doc) {
            Some(rows) => Ok(rows),
            None => {
                debug!("isracard: short row before total charge, not this layout");
                Ok(Vec::new())
            }
        }
    }
}
