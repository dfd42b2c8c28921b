use chrono::NaiveDate;
use polars::prelude::PolarsError;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ScheduleError {
    InvalidRange { start: NaiveDate, end: NaiveDate },
    UnknownWeekday(String),
    DateNotFound { label: String, context: String },
    DataFrame(PolarsError),
    Io(io::Error),
    Config(SerdeJsonError),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidRange { start, end } => {
                write!(f, "invalid date range: start {start} is after end {end}")
            }
            ScheduleError::UnknownWeekday(name) => {
                write!(f, "unknown weekday '{name}' (expected Mon..Sun)")
            }
            ScheduleError::DateNotFound { label, context } => {
                write!(f, "{context} '{label}' is not a scheduled class date")
            }
            ScheduleError::DataFrame(err) => write!(f, "dataframe error: {err}"),
            ScheduleError::Io(err) => write!(f, "io error: {err}"),
            ScheduleError::Config(err) => write!(f, "config error: {err}"),
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<PolarsError> for ScheduleError {
    fn from(value: PolarsError) -> Self {
        Self::DataFrame(value)
    }
}

impl From<io::Error> for ScheduleError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<SerdeJsonError> for ScheduleError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Config(value)
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
