//! Sensor readings and their CSV sources

mod hourly;
mod year;

pub use hourly::{load_hourly, read_hourly};
pub use year::{load_year, read_year};

use std::fs::File;
use std::path::Path;

use crate::date::CalendarDate;
use crate::error::DataLoadError;
use crate::scenario::{ScenarioId, ScenarioSet};

/// One hourly sample
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub day: CalendarDate,
    /// Hour of day, 0-23
    pub hour: u8,
    /// HVAC energy usage score
    pub energy: f64,
    /// PMV comfort score
    pub comfort: f64,
    pub scenarios: ScenarioSet,
}

impl Reading {
    /// Scenarios this reading satisfies (zero, one or several)
    pub fn classify(&self) -> ScenarioSet {
        self.scenarios
    }
}

/// One half of a year-view day (work hours or break hours)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubReading {
    pub energy: f64,
    pub comfort: f64,
    pub scenario: ScenarioId,
}

impl SubReading {
    /// Exactly one scenario per sub-reading
    pub fn classify(&self) -> ScenarioId {
        self.scenario
    }
}

/// One day of the year dataset
#[derive(Debug, Clone, PartialEq)]
pub struct YearReading {
    pub day: CalendarDate,
    pub work: SubReading,
    /// Break-hours half of the day
    pub rest: SubReading,
}

/// Which half of a year-view day a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Work,
    Break,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Work, Period::Break];

    pub fn label(self) -> &'static str {
        match self {
            Period::Work => "work",
            Period::Break => "break",
        }
    }
}

impl YearReading {
    pub fn period(&self, period: Period) -> &SubReading {
        match period {
            Period::Work => &self.work,
            Period::Break => &self.rest,
        }
    }
}

fn open(path: &Path) -> Result<File, DataLoadError> {
    File::open(path).map_err(|source| DataLoadError::Open {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests;
