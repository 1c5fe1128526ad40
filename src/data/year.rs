//! Year dataset: one row per day, split into work and break halves

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::Deserialize;

use super::{SubReading, YearReading, open};
use crate::date::CalendarDate;
use crate::error::{DataLoadError, UnknownScenario};
use crate::scenario::ScenarioId;

#[derive(Debug, Deserialize)]
struct YearRow {
    day: String,
    avg_hvac_work: f64,
    avg_pmv_work: f64,
    scenario_work: i64,
    avg_hvac_break: f64,
    avg_pmv_break: f64,
    scenario_break: i64,
}

/// Load the year dataset from a CSV file
pub fn load_year(path: &Path) -> Result<Vec<YearReading>, DataLoadError> {
    let readings = read_year(open(path)?)?;
    debug!("loaded {} year rows from {}", readings.len(), path.display());
    Ok(readings)
}

/// Read year rows from any CSV source.
///
/// Rows with unreadable numbers or dates are logged and skipped. A scenario id
/// outside the catalog aborts the load with [`DataLoadError::Scenario`].
pub fn read_year<R: Read>(reader: R) -> Result<Vec<YearReading>, DataLoadError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut readings = Vec::new();
    for (line, result) in rdr.deserialize::<YearRow>().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!("skipping year row {}: {}", line + 2, e);
                continue;
            }
        };

        let day = match CalendarDate::parse_month_day(&row.day) {
            Ok(day) => day,
            Err(e) => {
                warn!("skipping year row {}: {}", line + 2, e);
                continue;
            }
        };

        if let Some(column) = non_finite_column(&row) {
            warn!("skipping year row {}: non-finite {}", line + 2, column);
            continue;
        }

        readings.push(to_reading(day, &row)?);
    }

    if readings.is_empty() {
        return Err(DataLoadError::NoRows);
    }
    Ok(readings)
}

/// First measurement column holding NaN or an infinity
fn non_finite_column(row: &YearRow) -> Option<&'static str> {
    [
        ("avg_hvac_work", row.avg_hvac_work),
        ("avg_pmv_work", row.avg_pmv_work),
        ("avg_hvac_break", row.avg_hvac_break),
        ("avg_pmv_break", row.avg_pmv_break),
    ]
    .into_iter()
    .find(|(_, v)| !v.is_finite())
    .map(|(column, _)| column)
}

fn to_reading(day: CalendarDate, row: &YearRow) -> Result<YearReading, UnknownScenario> {
    Ok(YearReading {
        day,
        work: SubReading {
            energy: row.avg_hvac_work,
            comfort: row.avg_pmv_work,
            scenario: ScenarioId::try_from(row.scenario_work)?,
        },
        rest: SubReading {
            energy: row.avg_hvac_break,
            comfort: row.avg_pmv_break,
            scenario: ScenarioId::try_from(row.scenario_break)?,
        },
    })
}
