use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal load-time failure: the session cannot start on malformed data.
///
/// Row numbers are 1-based file lines (the header is line 1), matching what
/// an editor shows when the user opens the offending CSV.
#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{} is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("{} row {row}: unparseable date '{value}' (expected YYYY-MM-DD)", path.display())]
    InvalidDate {
        path: PathBuf,
        row: usize,
        value: String,
    },
    #[error("{} row {row}: season code {code} is outside 1-4", path.display())]
    UnknownSeasonCode {
        path: PathBuf,
        row: usize,
        code: u8,
    },
    #[error("{} row {row}: weather code {code} is outside 1-4", path.display())]
    UnknownWeatherCode {
        path: PathBuf,
        row: usize,
        code: u8,
    },
    #[error("{} row {row}: workingday flag {value} is not 0 or 1", path.display())]
    InvalidWorkingDay {
        path: PathBuf,
        row: usize,
        value: u8,
    },
    #[error("{} row {row}: hour {value} is outside 0-23", path.display())]
    HourOutOfRange {
        path: PathBuf,
        row: usize,
        value: i64,
    },
    #[error("{} row {row}: negative rental count {value}", path.display())]
    NegativeCount {
        path: PathBuf,
        row: usize,
        value: i64,
    },
}
