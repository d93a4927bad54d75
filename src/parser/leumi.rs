// Bank Leumi online-banking pages (checking account activity and Leumi Card),
// UTF-8 HTML. Both are ASP.NET grids: a `tr.header` row of `th` captions and
// a totals row marked by a footer_cell_total cell.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::html::grid;
use super::{Layout, LayoutDecoder, RawRow};
use crate::encoding::normalize;
use crate::error::DecodeError;

static ACTIVITY_HEADER: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("#ctlActivityTable tr.header").expect("invalid activity header selector")
});
static ACTIVITY_ROWS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("#ctlActivityTable tbody tr").expect("invalid activity rows selector")
});

static CARD_HEADER: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("#ctlRegularTransactions tr.header").expect("invalid card header selector")
});
static CARD_ROWS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("#ctlRegularTransactions tr.alternatingItem")
        .expect("invalid card rows selector")
});

fn decode_grid(
    layout: Layout,
    bytes: &[u8],
    header: &Selector,
    rows: &Selector,
) -> Result<Vec<RawRow>, DecodeError> {
    let text = normalize(bytes, layout.encoding())?;
    let doc = Html::parse_document(&text);
    Ok(grid(&doc, header, rows))
}

/// Checking-account activity (`#ctlActivityTable`), with separate debit and
/// credit columns.
pub struct LeumiCheckingDecoder;

impl LayoutDecoder for LeumiCheckingDecoder {
    fn layout(&self) -> Layout {
        Layout::LeumiChecking
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<RawRow>, DecodeError> {
        decode_grid(self.layout(), bytes, &ACTIVITY_HEADER, &ACTIVITY_ROWS)
    }
}

/// Leumi Card regular transactions (`#ctlRegularTransactions`).
pub struct LeumiCardDecoder;

impl LayoutDecoder for LeumiCardDecoder {
    fn layout(&self) -> Layout {
        Layout::LeumiCard
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<RawRow>, DecodeError> {
        decode_grid(self.layout(), bytes, &CARD_HEADER, &CARD_ROWS)
    }
}
