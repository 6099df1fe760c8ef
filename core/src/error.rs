use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProgressError {
    /// Brukeren har valgt sluttdato før startdato.
    #[error("invalid date interval: start {start} is after end {end}")]
    InvalidInterval { start: NaiveDate, end: NaiveDate },
    #[error("invalid date/time value: {0:?}")]
    InvalidDateTime(String),
    #[error("page size must be at least 1")]
    InvalidPageSize,
    #[error("progress request failed: {0}")]
    Http(String),
    #[error("invalid JSON: {0}")]
    Json(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ProgressError {
    fn from(e: serde_json::Error) -> Self {
        ProgressError::Json(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProgressError>;
