// Batch Runner
// Converts every statement in `<root>/input` into `<root>/output/<stem>.csv`.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::Config;
use crate::data_quality::{repair_dates, DateRepairSettings, RepairReport};
use crate::error::ImportError;
use crate::export::to_csv_bytes;
use crate::ledger::{build_ledger, Transaction};
use crate::lexicon::FieldLexicon;
use crate::parser::{DecoderChain, Layout};

pub const INPUT_DIR: &str = "input";
pub const OUTPUT_DIR: &str = "output";

/// Files that file managers drop next to downloads
const METADATA_FILES: [&str; 3] = [".DS_Store", "Thumbs.db", "desktop.ini"];

pub fn is_metadata_file(name: &str) -> bool {
    METADATA_FILES.contains(&name) || name.starts_with("._")
}

// ============================================================================
// REPORT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub layout: Layout,
    pub transactions: usize,
    pub repair: RepairReport,
    pub output: PathBuf,
}

#[derive(Debug)]
pub enum FileOutcome {
    Converted(FileSummary),
    Failed(ImportError),
}

#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub outcome: FileOutcome,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn converted(&self) -> impl Iterator<Item = (&Path, &FileSummary)> {
        self.files.iter().filter_map(|f| match &f.outcome {
            FileOutcome::Converted(summary) => Some((f.input.as_path(), summary)),
            FileOutcome::Failed(_) => None,
        })
    }

    pub fn failed(&self) -> impl Iterator<Item = (&Path, &ImportError)> {
        self.files.iter().filter_map(|f| match &f.outcome {
            FileOutcome::Failed(e) => Some((f.input.as_path(), e)),
            FileOutcome::Converted(_) => None,
        })
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }
}

// ============================================================================
// IMPORTER
// ============================================================================

/// One statement file through the whole pipeline, in memory.
pub struct Importer {
    chain: DecoderChain,
    lexicon: FieldLexicon,
    repair: DateRepairSettings,
}

/// A converted statement, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub layout: Layout,
    pub transactions: Vec<Transaction>,
    pub repair: RepairReport,
}

impl Importer {
    pub fn new(config: &Config) -> Self {
        Importer {
            chain: DecoderChain::standard(),
            lexicon: config.lexicon(),
            repair: config.date_repair.clone(),
        }
    }

    pub fn convert_file(&self, path: &Path) -> Result<Conversion, ImportError> {
        let decoded = self.chain.decode_file(path)?;
        let mut transactions =
            build_ledger(&decoded.rows, &self.lexicon).map_err(|error| ImportError::Ledger {
                file: path.display().to_string(),
                error,
            })?;
        let repair = repair_dates(&mut transactions, &self.repair);

        Ok(Conversion {
            layout: decoded.layout,
            transactions,
            repair,
        })
    }

    /// Convert `input` and write its ledger to `output`. Nothing is written
    /// unless the whole file converted.
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<FileSummary, ImportError> {
        let conversion = self.convert_file(input)?;
        let bytes = to_csv_bytes(&conversion.transactions)?;
        fs::write(output, bytes).map_err(|e| ImportError::io(output, e))?;

        Ok(FileSummary {
            layout: conversion.layout,
            transactions: conversion.transactions.len(),
            repair: conversion.repair,
            output: output.to_path_buf(),
        })
    }
}

// ============================================================================
// BATCH
// ============================================================================

/// Statement files in `dir`, sorted by name.
pub fn list_inputs(dir: &Path) -> Result<Vec<PathBuf>, ImportError> {
    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ImportError::io(dir, e))? {
        let entry = entry.map_err(|e| ImportError::io(dir, e))?;
        let path = entry.path();
        if path.is_dir() || is_metadata_file(&entry.file_name().to_string_lossy()) {
            continue;
        }
        inputs.push(path);
    }
    inputs.sort();
    Ok(inputs)
}

pub fn output_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .or_else(|| input.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{}.csv", stem))
}

pub fn process_root(root: &Path, config: &Config) -> Result<BatchReport, ImportError> {
    let input_dir = root.join(INPUT_DIR);
    let output_dir = root.join(OUTPUT_DIR);

    let inputs = list_inputs(&input_dir)?;
    fs::create_dir_all(&output_dir).map_err(|e| ImportError::io(&output_dir, e))?;
    info!(files = inputs.len(), input = %input_dir.display(), "starting batch");

    let importer = Importer::new(config);
    let mut report = BatchReport::default();

    for input in inputs {
        let output = output_path(&output_dir, &input);
        let outcome = match importer.process_file(&input, &output) {
            Ok(summary) => {
                info!(
                    file = %input.display(),
                    layout = summary.layout.code(),
                    transactions = summary.transactions,
                    repaired = summary.repair.adjusted,
                    "converted"
                );
                FileOutcome::Converted(summary)
            }
            Err(e) => {
                error!(file = %input.display(), error = %e, "conversion failed");
                FileOutcome::Failed(e)
            }
        };

        let failed = matches!(outcome, FileOutcome::Failed(_));
        report.files.push(FileReport { input, outcome });
        if failed && config.fail_fast {
            break;
        }
    }

    Ok(report)
}
