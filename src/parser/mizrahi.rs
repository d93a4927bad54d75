// Mizrahi-Tefahot credit card statement, saved as UTF-16LE HTML.
//
// No ids to anchor on: the page opens with seven rows of titles and account
// details, then the header row. The card summary ("כרטיס:") closes the list.

use scraper::Html;
use tracing::debug;

use super::html::TableScan;
use super::{Layout, LayoutDecoder, RawRow};
use crate::encoding::normalize;
use crate::error::DecodeError;

const LEADING_ROWS: usize = 7;

const CARD_SUMMARY_LABEL: &str = "כרטיס:";

const SCAN: TableScan = TableScan {
    skip: |i| i < LEADING_ROWS,
    is_footer: |row| row.first().map(String::as_str) == Some(CARD_SUMMARY_LABEL),
};

pub struct MizrahiCreditCardDecoder;

impl LayoutDecoder for MizrahiCreditCardDecoder {
    fn layout(&self) -> Layout {
        Layout::MizrahiCreditCard
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<RawRow>, DecodeError> {
        let text = normalize(bytes, self.layout().encoding())?;
        let doc = Html::parse_document(&text);

        match SCAN.rows(&doc) {
            Some(rows) => Ok(rows),
            None => {
                debug!("mizrahi: short row before card summary, not this layout");
                Ok(Vec::new())
            }
        }
    }
}
