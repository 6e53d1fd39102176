use std::fs::File;
use std::io::Read;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::history::Completion;

#[derive(Error, Debug)]
pub enum CsvImportError {
    #[error("failed to read history file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse history csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("record {record}: invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { record: usize, value: String },
    #[error("record {record}: count must not be negative, got {value}")]
    NegativeCount { record: usize, value: i64 },
    #[error("record {record}: date {date} is not after the previous record")]
    OutOfOrder { record: usize, date: NaiveDate },
}

/// Reads a two-column (date, count) history record without a header row.
/// Dates must be ISO-8601 and strictly increasing; counts must be
/// non-negative. Every call returns a freshly built, caller-owned vector.
pub fn load_history_from_csv<R: Read>(reader: R) -> Result<Vec<Completion>, CsvImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut history = Vec::new();
    for (index, row) in csv_reader.deserialize().enumerate() {
        let record = index + 1;
        let (date, count): (String, i64) = row?;

        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| CsvImportError::InvalidDate { record, value: date })?;
        if count < 0 {
            return Err(CsvImportError::NegativeCount { record, value: count });
        }
        if let Some(Completion { date: previous, .. }) = history.last() {
            if date <= *previous {
                return Err(CsvImportError::OutOfOrder { record, date });
            }
        }

        history.push(Completion {
            date,
            count: count as usize,
        });
    }

    Ok(history)
}

pub fn load_history_from_csv_file(path: &str) -> Result<Vec<Completion>, CsvImportError> {
    let file = File::open(path)?;
    load_history_from_csv(file)
}
