//! Hourly dataset: `day, time, avg_pmv, avg_hvac, <one flag column per scenario>`

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};

use super::{Reading, open};
use crate::date::CalendarDate;
use crate::error::{DataLoadError, ParseError};
use crate::scenario::{ScenarioId, classify_flags};

/// Header positions of the columns we read
struct Columns {
    day: usize,
    time: usize,
    pmv: usize,
    hvac: usize,
    flags: [Option<usize>; 4],
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, DataLoadError> {
        let find = |name: &'static str| headers.iter().position(|h| h == name);
        let require =
            |name: &'static str| find(name).ok_or(DataLoadError::MissingColumn(name));

        let flags = ScenarioId::ALL.map(|id| {
            let idx = find(id.column_key());
            if idx.is_none() {
                warn!("column '{}' missing, treating as never set", id.column_key());
            }
            idx
        });

        Ok(Columns {
            day: require("day")?,
            time: require("time")?,
            pmv: require("avg_pmv")?,
            hvac: require("avg_hvac")?,
            flags,
        })
    }
}

/// Load the hourly dataset from a CSV file
pub fn load_hourly(path: &Path) -> Result<Vec<Reading>, DataLoadError> {
    let readings = read_hourly(open(path)?)?;
    debug!("loaded {} hourly readings from {}", readings.len(), path.display());
    Ok(readings)
}

/// Read hourly readings from any CSV source.
///
/// Malformed rows are logged and skipped. Fails when the header lacks a
/// required column, on I/O errors, or when no row survives.
pub fn read_hourly<R: Read>(reader: R) -> Result<Vec<Reading>, DataLoadError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let columns = Columns::locate(rdr.headers()?)?;

    let mut readings = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!("skipping hourly row {}: {}", line + 2, e);
                continue;
            }
        };

        match parse_row(&record, &columns) {
            Ok(reading) => readings.push(reading),
            Err(e) => warn!("skipping hourly row {}: {}", line + 2, e),
        }
    }

    if readings.is_empty() {
        return Err(DataLoadError::NoRows);
    }
    Ok(readings)
}

fn parse_row(record: &StringRecord, columns: &Columns) -> Result<Reading, ParseError> {
    let field = |idx: usize, name: &'static str| {
        record.get(idx).ok_or(ParseError::MissingField(name))
    };
    let number = |idx: usize, name: &'static str| -> Result<f64, ParseError> {
        let raw = field(idx, name)?;
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::Number {
                column: name,
                value: raw.to_string(),
            })
    };

    let day = CalendarDate::parse(field(columns.day, "day")?)?;

    let raw_time = field(columns.time, "time")?;
    let time: i64 = raw_time.parse().map_err(|_| ParseError::Number {
        column: "time",
        value: raw_time.to_string(),
    })?;
    let hour = u8::try_from(time)
        .ok()
        .filter(|h| *h < 24)
        .ok_or(ParseError::Hour(time))?;

    let comfort = number(columns.pmv, "avg_pmv")?;
    let energy = number(columns.hvac, "avg_hvac")?;
    let scenarios =
        classify_flags(|id| columns.flags[id.index()].and_then(|idx| record.get(idx)));

    Ok(Reading {
        day,
        hour,
        energy,
        comfort,
        scenarios,
    })
}
