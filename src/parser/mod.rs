// Parser Framework
// One decoder per known statement layout, tried in a fixed priority order.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::encoding::SourceEncoding;
use crate::error::{DecodeError, ImportError};

pub mod cal;
mod html;
pub mod isracard;
pub mod leumi;
pub mod mizrahi;
pub mod xml;

#[cfg(test)]
pub(crate) mod fixtures;

pub use cal::CalDecoder;
pub use isracard::IsracardDecoder;
pub use leumi::{LeumiCardDecoder, LeumiCheckingDecoder};
pub use mizrahi::MizrahiCreditCardDecoder;
pub use xml::LeumiCardXmlDecoder;

// ============================================================================
// CORE TYPES
// ============================================================================

/// One table row as decoded, without schema. The first row of a decode is
/// the header that names the columns of every row after it.
pub type RawRow = Vec<String>;

/// Known statement layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    LeumiCardXml,
    Cal,
    MizrahiCreditCard,
    Isracard,
    LeumiChecking,
    LeumiCard,
}

impl Layout {
    /// Human-readable name for display
    pub fn name(&self) -> &str {
        match self {
            Layout::LeumiCardXml => "Leumi Card (spreadsheet XML)",
            Layout::Cal => "Cal",
            Layout::MizrahiCreditCard => "Mizrahi-Tefahot credit card",
            Layout::Isracard => "Isracard",
            Layout::LeumiChecking => "Leumi checking account",
            Layout::LeumiCard => "Leumi Card (HTML)",
        }
    }

    /// Short code for logs
    pub fn code(&self) -> &str {
        match self {
            Layout::LeumiCardXml => "leumicard-xml",
            Layout::Cal => "cal",
            Layout::MizrahiCreditCard => "mizrahi-cc",
            Layout::Isracard => "isracard",
            Layout::LeumiChecking => "leumi-checking",
            Layout::LeumiCard => "leumicard",
        }
    }

    pub fn encoding(&self) -> SourceEncoding {
        match self {
            Layout::Cal | Layout::MizrahiCreditCard => SourceEncoding::Utf16Le,
            Layout::Isracard => SourceEncoding::Iso8859_8I,
            Layout::LeumiCardXml | Layout::LeumiChecking | Layout::LeumiCard => {
                SourceEncoding::Utf8
            }
        }
    }
}

/// Rows recovered from a statement, with the layout that recognized it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedStatement {
    pub layout: Layout,
    pub rows: Vec<RawRow>,
}

impl DecodedStatement {
    pub fn data_rows(&self) -> &[RawRow] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

// ============================================================================
// DECODER TRAIT
// ============================================================================

/// LayoutDecoder - recognizes and extracts one statement layout.
///
/// `Ok` with no rows means the file is not this layout. `Err` is reserved for
/// input this decoder cannot even read (wrong encoding, malformed XML); the
/// chain moves on in both cases.
pub trait LayoutDecoder: Send + Sync {
    fn layout(&self) -> Layout;

    fn decode(&self, bytes: &[u8]) -> Result<Vec<RawRow>, DecodeError>;
}

/// Caption for a header cell, with a positional name for blank ones.
pub(crate) fn header_label(index: usize, text: &str) -> String {
    if text.is_empty() {
        format!("field_{}", index)
    } else {
        text.to_string()
    }
}

pub(crate) fn header_row<I>(cells: I) -> RawRow
where
    I: IntoIterator<Item = String>,
{
    cells
        .into_iter()
        .enumerate()
        .map(|(i, text)| header_label(i, &text))
        .collect()
}

// ============================================================================
// FACTORY & SELECTOR
// ============================================================================

pub fn get_decoder(layout: Layout) -> Box<dyn LayoutDecoder> {
    match layout {
        Layout::LeumiCardXml => Box::new(LeumiCardXmlDecoder),
        Layout::Cal => Box::new(CalDecoder),
        Layout::MizrahiCreditCard => Box::new(MizrahiCreditCardDecoder),
        Layout::Isracard => Box::new(IsracardDecoder),
        Layout::LeumiChecking => Box::new(LeumiCheckingDecoder),
        Layout::LeumiCard => Box::new(LeumiCardDecoder),
    }
}

/// Ordered decoder list.
///
/// Credit-card layouts come before checking-account layouts: the checking
/// exports also satisfy some credit-card anchors, and only the order keeps
/// them apart.
pub struct DecoderChain {
    decoders: Vec<Box<dyn LayoutDecoder>>,
}

impl DecoderChain {
    pub const STANDARD_ORDER: [Layout; 6] = [
        // Credit cards
        Layout::LeumiCardXml,
        Layout::Cal,
        Layout::MizrahiCreditCard,
        Layout::Isracard,
        // Checking accounts
        Layout::LeumiChecking,
        Layout::LeumiCard,
    ];

    pub fn standard() -> Self {
        DecoderChain::with_order(&DecoderChain::STANDARD_ORDER)
    }

    pub fn with_order(layouts: &[Layout]) -> Self {
        DecoderChain {
            decoders: layouts.iter().map(|l| get_decoder(*l)).collect(),
        }
    }

    pub fn layouts(&self) -> Vec<Layout> {
        self.decoders.iter().map(|d| d.layout()).collect()
    }

    /// Decode the statement at `path`, reading it afresh for every attempt.
    pub fn decode_file(&self, path: &Path) -> Result<DecodedStatement, ImportError> {
        self.decode_source(path, || fs::read(path))
    }

    /// Like [`decode_file`](Self::decode_file), with `read` supplying the
    /// file contents for each attempt.
    pub fn decode_source<F>(&self, path: &Path, mut read: F) -> Result<DecodedStatement, ImportError>
    where
        F: FnMut() -> std::io::Result<Vec<u8>>,
    {
        let file = path.display().to_string();
        let mut last_error = None;

        for decoder in &self.decoders {
            let layout = decoder.layout();
            let bytes = read().map_err(|e| ImportError::io(path, e))?;

            match decoder.decode(&bytes) {
                Ok(rows) if !rows.is_empty() => {
                    info!(
                        file = %file,
                        layout = layout.code(),
                        encoding = layout.encoding().name(),
                        rows = rows.len(),
                        "layout recognized"
                    );
                    return Ok(DecodedStatement { layout, rows });
                }
                Ok(_) => debug!(file = %file, layout = layout.code(), "no match"),
                Err(e) => {
                    debug!(file = %file, layout = layout.code(), error = %e, "decoder failed");
                    last_error = Some(e);
                }
            }
        }

        Err(ImportError::NoMatchingDecoder {
            file,
            last: last_error,
        })
    }
}

impl Default for DecoderChain {
    fn default() -> Self {
        DecoderChain::standard()
    }
}

// ============================================================================
// TESTS
// ============================================================================
