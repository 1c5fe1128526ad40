//! Error types shared across ingestion, classification and views

use std::path::PathBuf;

use thiserror::Error;

/// A single malformed value. Ingestion drops the row and keeps going.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("invalid date '{0}': expected day/month/year")]
    Date(String),

    #[error("invalid day/month '{0}': expected day/month")]
    MonthDay(String),

    #[error("column '{column}': cannot read '{value}' as a number")]
    Number { column: &'static str, value: String },

    #[error("hour {0} is outside 0-23")]
    Hour(i64),

    #[error("row is missing field '{0}'")]
    MissingField(&'static str),
}

/// A scenario id outside the fixed catalog.
///
/// This points at a data/catalog mismatch and is never swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown scenario id {0}: the catalog defines ids 1-4")]
pub struct UnknownScenario(pub i64);

/// Failure to turn a data source into readings.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("required column '{0}' is missing")]
    MissingColumn(&'static str),

    #[error(transparent)]
    Scenario(#[from] UnknownScenario),

    #[error("no usable rows in data source")]
    NoRows,
}

/// Invalid request against a view controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("day index {index} is out of range (0..{count})")]
    DayOutOfRange { index: usize, count: usize },

    #[error("day {0} is not in the dataset")]
    DayNotFound(String),
}

/// Failure to write a composed chart to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing has been rendered yet")]
    NothingRendered,

    #[error("failed to save chart: {0}")]
    Save(String),
}
