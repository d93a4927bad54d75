// Error taxonomy for the import pipeline.
//
// Decoder-level errors are recovered by the decoder chain; everything from
// field mapping onward is fatal for the file being imported.

use std::path::PathBuf;
use thiserror::Error;

use crate::lexicon::CanonicalField;

/// Malformed byte stream for the declared encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("read odd number of bytes ({0}) while expecting UTF-16LE")]
    OddByteCount(usize),
    #[error("input is not valid UTF-8")]
    InvalidUtf8,
}

/// Hard failure of a single decoder attempt.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error("malformed XML")]
    Xml(#[from] roxmltree::Error),
    #[error("expected <Workbook> root element, found <{0}>")]
    NotAWorkbook(String),
}

/// A single data row could not be mapped onto the canonical schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("no column matches field '{field}' (header: {header:?})")]
    NoSuchField {
        field: CanonicalField,
        header: Vec<String>,
    },
    #[error("unparseable date '{0}'")]
    UnparseableDate(String),
    #[error("non-numeric {field} value '{value}'")]
    NonNumericAmount { field: CanonicalField, value: String },
    #[error("expected exactly one of outflow '{outflow}' and inflow '{inflow}'")]
    AmbiguousSides { outflow: String, inflow: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("no transactions (header row only)")]
    NoTransactions,
    #[error("data row {row}: {error}")]
    Row { row: usize, error: FieldError },
}

/// File-level import failure, carrying the file it happened in.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no known layout recognized {file}")]
    NoMatchingDecoder {
        file: String,
        #[source]
        last: Option<DecodeError>,
    },
    #[error("{file}: {error}")]
    Ledger { file: String, error: LedgerError },
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl ImportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImportError::Io {
            path: path.into(),
            source,
        }
    }
}
