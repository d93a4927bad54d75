// Run configuration, loaded from an optional JSON file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::data_quality::DateRepairSettings;
use crate::error::ImportError;
use crate::lexicon::{CanonicalField, FieldLexicon};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extra header captions per field, tried after the built-in ones
    pub extra_synonyms: BTreeMap<CanonicalField, Vec<String>>,
    pub date_repair: DateRepairSettings,
    /// Stop the batch at the first file that fails
    pub fail_fast: bool,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ImportError> {
        let data = fs::read_to_string(path).map_err(|e| ImportError::io(path, e))?;
        let config: Config = serde_json::from_str(&data).map_err(|e| ImportError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate().map_err(|reason| ImportError::Config {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(config)
    }

    /// Repaired dates must exist in every month.
    fn validate(&self) -> Result<(), String> {
        let day = self.date_repair.repaired_day;
        if !(1..=28).contains(&day) {
            return Err(format!("date_repair.repaired_day must be 1..=28, got {}", day));
        }
        if self.date_repair.max_period_days < 0 {
            return Err(format!(
                "date_repair.max_period_days must not be negative, got {}",
                self.date_repair.max_period_days
            ));
        }
        Ok(())
    }

    /// Built-in lexicon with the configured captions appended.
    pub fn lexicon(&self) -> FieldLexicon {
        let mut lexicon = FieldLexicon::hebrew();
        for (field, labels) in &self.extra_synonyms {
            lexicon.extend(*field, labels.iter().cloned());
        }
        lexicon
    }
}
