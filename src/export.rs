// Ledger Exporter
// Canonical CSV: fixed header, DD/MM/YYYY dates, `\n` line endings.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use crate::error::ImportError;
use crate::ledger::Transaction;

pub const HEADER: [&str; 6] = ["Date", "Payee", "Category", "Memo", "Outflow", "Inflow"];

pub const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Payee")]
    payee: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Memo")]
    memo: &'a str,
    #[serde(rename = "Outflow")]
    outflow: &'a str,
    #[serde(rename = "Inflow")]
    inflow: &'a str,
}

impl<'a> From<&'a Transaction> for CsvRow<'a> {
    fn from(tx: &'a Transaction) -> Self {
        CsvRow {
            date: format_date(tx.date),
            payee: &tx.payee,
            category: &tx.category,
            memo: &tx.memo,
            outflow: &tx.outflow,
            inflow: &tx.inflow,
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn write_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<(), ImportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(HEADER)?;
    for tx in transactions {
        wtr.serialize(CsvRow::from(tx))?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn to_csv_bytes(transactions: &[Transaction]) -> Result<Vec<u8>, ImportError> {
    let mut buf = Vec::new();
    write_csv(transactions, &mut buf)?;
    Ok(buf)
}
