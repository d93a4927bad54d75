// Field Mapper
// Maps institution-specific column captions onto canonical ledger fields.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::FieldError;

// ============================================================================
// CANONICAL FIELDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalField {
    Date,
    Payee,
    Memo,
    /// Unified signed amount; positive means money leaving the account
    Amount,
    Inflow,
    Outflow,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 6] = [
        CanonicalField::Date,
        CanonicalField::Payee,
        CanonicalField::Memo,
        CanonicalField::Amount,
        CanonicalField::Inflow,
        CanonicalField::Outflow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CanonicalField::Date => "date",
            CanonicalField::Payee => "payee",
            CanonicalField::Memo => "memo",
            CanonicalField::Amount => "amount",
            CanonicalField::Inflow => "inflow",
            CanonicalField::Outflow => "outflow",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// COLUMN INDEX
// ============================================================================

/// Header caption → column position, built from one file's own header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    /// A caption that appears more than once resolves to its rightmost column.
    pub fn build(header: &[String]) -> Self {
        let positions = header
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i))
            .collect();
        ColumnIndex { positions }
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Captions ordered by column position
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<(&String, &usize)> = self.positions.iter().collect();
        labels.sort_by_key(|(_, i)| **i);
        labels.into_iter().map(|(l, _)| l.clone()).collect()
    }
}

// ============================================================================
// FIELD LEXICON
// ============================================================================

/// Canonical field → accepted captions, most preferred first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLexicon {
    synonyms: BTreeMap<CanonicalField, Vec<String>>,
}

impl FieldLexicon {
    pub fn empty() -> Self {
        FieldLexicon {
            synonyms: BTreeMap::new(),
        }
    }

    /// Captions used by the supported Israeli card issuers and banks.
    pub fn hebrew() -> Self {
        let mut lexicon = FieldLexicon::empty();
        lexicon.extend(
            CanonicalField::Amount,
            [
                "סכום חיוב ₪",
                "סכוםהחיוב",
                "סכום החיוב בש''ח",
                "סכום לחיוב",
                "סכום החיוב",
            ],
        );
        lexicon.extend(CanonicalField::Inflow, ["זכות"]);
        lexicon.extend(CanonicalField::Outflow, ["חובה"]);
        lexicon.extend(
            CanonicalField::Date,
            [
                "תאריך עסקה",
                "תאריךהעסקה",
                "תאריך הקנייה",
                "תאריך רכישה",
                "תאריך",
                "תאריך העסקה",
            ],
        );
        lexicon.extend(
            CanonicalField::Payee,
            ["שם בית העסק", "שםבית העסק", "שם בית עסק", "סוג תנועה", "תיאור"],
        );
        lexicon.extend(
            CanonicalField::Memo,
            ["הערות", "פירוט נוסף", "מידע נוסף", "פרוט נוסף", "אסמכתא", "פרטים"],
        );
        lexicon
    }

    pub fn synonyms(&self, field: CanonicalField) -> &[String] {
        self.synonyms.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append captions for `field` after the existing ones, skipping repeats.
    pub fn extend<I, S>(&mut self, field: CanonicalField, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.synonyms.entry(field).or_default();
        for label in labels {
            let label = label.into();
            if !entry.contains(&label) {
                entry.push(label);
            }
        }
    }

    /// Column position of the most preferred synonym present in `index`.
    pub fn locate(&self, field: CanonicalField, index: &ColumnIndex) -> Option<usize> {
        self.synonyms(field)
            .iter()
            .find_map(|label| index.position(label))
    }

    /// Value of `field` in `row`.
    ///
    /// A column the header declares but a short row lacks reads as empty.
    pub fn resolve<'r>(
        &self,
        row: &'r [String],
        field: CanonicalField,
        index: &ColumnIndex,
    ) -> Result<&'r str, FieldError> {
        match self.locate(field, index) {
            Some(i) => Ok(row.get(i).map(String::as_str).unwrap_or("")),
            None => Err(FieldError::NoSuchField {
                field,
                header: index.labels(),
            }),
        }
    }
}

impl Default for FieldLexicon {
    fn default() -> Self {
        FieldLexicon::hebrew()
    }
}
