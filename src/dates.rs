// Date Parser
// Statement dates come in a handful of fixed shapes; try them most specific first.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::FieldError;

/// Spreadsheet-XML timestamp, e.g. `2014-09-30T00:00:00`
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Date-only formats, in the order they are tried after [`DATETIME_FORMAT`].
/// `%d/%m/%y` must precede `%d/%m/%Y`, otherwise `30/09/14` reads as year 14.
const DATE_FORMATS: [&str; 3] = ["%d/%m/%y", "%Y-%m-%d", "%d/%m/%Y"];

pub fn parse_date(text: &str) -> Result<NaiveDate, FieldError> {
    let text = text.trim();

    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, DATETIME_FORMAT) {
        return Ok(datetime.date());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .ok_or_else(|| FieldError::UnparseableDate(text.to_string()))
}
