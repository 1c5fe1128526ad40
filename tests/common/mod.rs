//! Common test utilities

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const HOURLY_HEADER: &str =
    "day,time,avg_pmv,avg_hvac,Optimal,Inefficient_Energy,Thermal_Overdrive,Thermal_Neglect";

pub const YEAR_HEADER: &str =
    "day,avg_hvac_work,avg_pmv_work,scenario_work,avg_hvac_break,avg_pmv_break,scenario_break";

/// One hourly row; `flags` are the four scenario cells in catalog order
pub fn hourly_row(day: &str, hour: u8, pmv: f64, hvac: f64, flags: [u8; 4]) -> String {
    format!(
        "{},{},{},{},{},{},{},{}",
        day, hour, pmv, hvac, flags[0], flags[1], flags[2], flags[3]
    )
}

/// A full day of hourly rows with a warm afternoon flagged as overdrive
pub fn hourly_day(day: &str) -> Vec<String> {
    (0..24u8)
        .map(|hour| {
            let afternoon = (12..18).contains(&hour);
            let pmv = if afternoon { 0.9 } else { 0.1 };
            let hvac = if afternoon { 1.4 } else { 0.3 };
            let flags = if afternoon { [0, 0, 1, 0] } else { [1, 0, 0, 0] };
            hourly_row(day, hour, pmv, hvac, flags)
        })
        .collect()
}

/// One year row (day/month, no year)
pub fn year_row(day: &str, work: (f64, f64, u8), rest: (f64, f64, u8)) -> String {
    format!(
        "{},{},{},{},{},{},{}",
        day, work.0, work.1, work.2, rest.0, rest.1, rest.2
    )
}

/// First `days` days of the reference year, cycling through the scenarios
pub fn year_rows(days: u32) -> Vec<String> {
    (0..days)
        .map(|i| {
            let day = format!("{}/{}", i % 28 + 1, i / 28 + 1);
            let work = (1.0 + i as f64 * 0.01, 0.4, (i % 4 + 1) as u8);
            let rest = (0.2, -0.6, ((i + 1) % 4 + 1) as u8);
            year_row(&day, work, rest)
        })
        .collect()
}

/// Write a CSV file from a header and rows
pub fn write_csv(path: &Path, header: &str, rows: &[String]) -> io::Result<()> {
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(path, content)
}

/// Write an hourly dataset covering the given days
pub fn write_hourly(dir: &Path, name: &str, days: &[&str]) -> io::Result<PathBuf> {
    let rows: Vec<String> = days.iter().flat_map(|d| hourly_day(d)).collect();
    let path = dir.join(name);
    write_csv(&path, HOURLY_HEADER, &rows)?;
    Ok(path)
}

/// Write a year dataset with `days` rows
pub fn write_year(dir: &Path, name: &str, days: u32) -> io::Result<PathBuf> {
    let path = dir.join(name);
    write_csv(&path, YEAR_HEADER, &year_rows(days))?;
    Ok(path)
}
