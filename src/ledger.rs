// Transaction Builder
// Turns decoded rows into canonical transactions, one header index per file.

use chrono::NaiveDate;

use crate::dates::parse_date;
use crate::error::{FieldError, LedgerError};
use crate::lexicon::{CanonicalField, ColumnIndex, FieldLexicon};
use crate::parser::RawRow;

// ============================================================================
// TRANSACTION
// ============================================================================

/// One normalized ledger entry.
///
/// `outflow` and `inflow` are decimal strings; exactly one of them is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub payee: String,
    /// No statement carries one; always empty
    pub category: String,
    pub memo: String,
    pub outflow: String,
    pub inflow: String,
}

// ============================================================================
// AMOUNTS
// ============================================================================

/// Parse an amount cell, dropping thousands separators.
pub fn parse_amount(field: CanonicalField, text: &str) -> Result<f64, FieldError> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FieldError::NonNumericAmount {
            field,
            value: text.to_string(),
        }),
    }
}

/// Shortest decimal form: `215`, `50.5`, never `-0`.
pub fn format_amount(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

/// Split a signed amount into `(outflow, inflow)`. Positive amounts are
/// charges; everything else becomes an inflow of the negated value.
pub fn split_amount(value: f64) -> (String, String) {
    if value > 0.0 {
        (format_amount(value), String::new())
    } else {
        (String::new(), format_amount(-value))
    }
}

/// A value of a dedicated debit or credit column. Blank and zero read as
/// blank.
fn side_amount(field: CanonicalField, text: &str) -> Result<String, FieldError> {
    if text.trim().is_empty() {
        return Ok(String::new());
    }
    let value = parse_amount(field, text)?;
    if value == 0.0 {
        Ok(String::new())
    } else {
        Ok(format_amount(value))
    }
}

/// Debit and credit cells of one row, exactly one of them filled.
fn split_sides(outflow: &str, inflow: &str) -> Result<(String, String), FieldError> {
    let sides = (
        side_amount(CanonicalField::Outflow, outflow)?,
        side_amount(CanonicalField::Inflow, inflow)?,
    );
    if sides.0.is_empty() == sides.1.is_empty() {
        return Err(FieldError::AmbiguousSides {
            outflow: outflow.to_string(),
            inflow: inflow.to_string(),
        });
    }
    Ok(sides)
}

// ============================================================================
// BUILDER
// ============================================================================

pub fn build_transaction(
    row: &[String],
    index: &ColumnIndex,
    lexicon: &FieldLexicon,
) -> Result<Transaction, FieldError> {
    let (outflow, inflow) = match lexicon.resolve(row, CanonicalField::Amount, index) {
        Ok(amount) => split_amount(parse_amount(CanonicalField::Amount, amount)?),
        Err(FieldError::NoSuchField { .. }) => {
            let outflow = lexicon.resolve(row, CanonicalField::Outflow, index)?;
            let inflow = lexicon.resolve(row, CanonicalField::Inflow, index)?;
            split_sides(outflow, inflow)?
        }
        Err(e) => return Err(e),
    };

    let date = parse_date(lexicon.resolve(row, CanonicalField::Date, index)?)?;
    let payee = lexicon.resolve(row, CanonicalField::Payee, index)?.to_string();
    let memo = lexicon
        .resolve(row, CanonicalField::Memo, index)
        .unwrap_or("")
        .to_string();

    Ok(Transaction {
        date,
        payee,
        category: String::new(),
        memo,
        outflow,
        inflow,
    })
}

/// Build every data row of a decoded statement. `rows[0]` is the header.
pub fn build_ledger(rows: &[RawRow], lexicon: &FieldLexicon) -> Result<Vec<Transaction>, LedgerError> {
    let Some((header, data)) = rows.split_first() else {
        return Err(LedgerError::NoTransactions);
    };
    if data.is_empty() {
        return Err(LedgerError::NoTransactions);
    }

    let index = ColumnIndex::build(header);
    data.iter()
        .enumerate()
        .map(|(row, cells)| {
            build_transaction(cells, &index, lexicon).map_err(|error| LedgerError::Row { row, error })
        })
        .collect()
}
