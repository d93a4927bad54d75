// Ledger Normalizer - Core Library
// Israeli bank and credit-card statement exports → canonical CSV ledger

pub mod batch;
pub mod config;
pub mod data_quality; // Date range repair
pub mod dates;
pub mod encoding;
pub mod error;
pub mod export;
pub mod ledger;
pub mod lexicon;
pub mod parser;

// Re-export commonly used types
pub use batch::{process_root, BatchReport, FileOutcome, FileReport, FileSummary, Importer};
pub use config::Config;
pub use data_quality::{repair_dates, DateRepairSettings, RepairReport};
pub use dates::parse_date;
pub use encoding::{normalize, SourceEncoding};
pub use error::{DecodeError, EncodingError, FieldError, ImportError, LedgerError};
pub use export::{to_csv_bytes, write_csv};
pub use ledger::{build_ledger, build_transaction, Transaction};
pub use lexicon::{CanonicalField, ColumnIndex, FieldLexicon};
pub use parser::{get_decoder, DecodedStatement, DecoderChain, Layout, LayoutDecoder, RawRow};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
