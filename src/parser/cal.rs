// Cal (Visa Cal) "export to Excel" page, saved as UTF-16LE HTML.
// The transactions grid sits under #tdCalGrid; the totals row carries a
// footer_cell_total cell.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::html::grid;
use super::{Layout, LayoutDecoder, RawRow};
use crate::encoding::normalize;
use crate::error::DecodeError;

static HEADER: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#tdCalGrid thead tr").expect("invalid Cal header selector"));
static ROWS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#tdCalGrid tbody tr").expect("invalid Cal rows selector"));

pub struct CalDecoder;

impl LayoutDecoder for CalDecoder {
    fn layout(&self) -> Layout {
        Layout::Cal
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<RawRow>, DecodeError> {
        let text = normalize(bytes, self.layout().encoding())?;
        let doc = Html::parse_document(&text);
        Ok(grid(&doc, &HEADER, &ROWS))
    }
}
