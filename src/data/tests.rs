//! Unit tests for CSV ingestion

use super::*;
use crate::error::UnknownScenario;

const HOURLY_HEADER: &str =
    "day,time,avg_pmv,avg_hvac,Optimal,Inefficient_Energy,Thermal_Overdrive,Thermal_Neglect\n";

const YEAR_HEADER: &str =
    "day,avg_hvac_work,avg_pmv_work,scenario_work,avg_hvac_break,avg_pmv_break,scenario_break\n";

fn hourly(rows: &str) -> Result<Vec<Reading>, DataLoadError> {
    read_hourly(format!("{HOURLY_HEADER}{rows}").as_bytes())
}

fn year(rows: &str) -> Result<Vec<YearReading>, DataLoadError> {
    read_year(format!("{YEAR_HEADER}{rows}").as_bytes())
}

#[test]
fn test_hourly_row_is_classified_at_ingestion() {
    let readings = hourly("17/02/2019,14,0.6,1.2,0,0,1,0\n").unwrap();
    assert_eq!(readings.len(), 1);

    let r = &readings[0];
    assert_eq!(r.day, CalendarDate::parse("17/02/2019").unwrap());
    assert_eq!(r.hour, 14);
    assert_eq!(r.comfort, 0.6);
    assert_eq!(r.energy, 1.2);
    assert!(r.classify().contains(ScenarioId::ThermalOverdrive));
    assert_eq!(r.classify().len(), 1);
}

#[test]
fn test_hourly_overlapping_flags_are_kept() {
    let readings = hourly("17/02/2019,3,0.1,0.2,1,0,1,0\n").unwrap();
    let set = readings[0].classify();
    assert!(set.contains(ScenarioId::Optimal));
    assert!(set.contains(ScenarioId::ThermalOverdrive));
}

#[test]
fn test_hourly_malformed_rows_are_skipped() {
    let rows = "\
17/02/2019,0,0.1,0.2,1,0,0,0
not-a-date,1,0.1,0.2,1,0,0,0
17/02/2019,25,0.1,0.2,1,0,0,0
17/02/2019,2,warm,0.2,1,0,0,0
17/02/2019,3,0.1
17/02/2019,4,-0.3,0.9,0,0,0,1
";
    let readings = hourly(rows).unwrap();
    let hours: Vec<u8> = readings.iter().map(|r| r.hour).collect();
    assert_eq!(hours, vec![0, 4]);
}

#[test]
fn test_hourly_missing_scenario_column_reads_as_unset() {
    let csv = "day,time,avg_pmv,avg_hvac,Optimal\n1/1/2019,0,0,0,1\n";
    let readings = read_hourly(csv.as_bytes()).unwrap();
    assert!(readings[0].scenarios.contains(ScenarioId::Optimal));
    assert_eq!(readings[0].scenarios.len(), 1);
}

#[test]
fn test_hourly_missing_required_column() {
    let csv = "day,avg_pmv,avg_hvac\n1/1/2019,0,0\n";
    let err = read_hourly(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, DataLoadError::MissingColumn("time")));
}

#[test]
fn test_hourly_no_usable_rows() {
    let err = hourly("garbage,x,y,z,0,0,0,0\n").unwrap_err();
    assert!(matches!(err, DataLoadError::NoRows));
    let err = hourly("").unwrap_err();
    assert!(matches!(err, DataLoadError::NoRows));
}

#[test]
fn test_year_row_splits_work_and_break() {
    let readings = year("5/10,1.1,0.2,3,0.3,-0.7,1\n").unwrap();
    let r = &readings[0];
    assert_eq!(r.day.day_of_year(), 278);
    assert_eq!(r.work.classify(), ScenarioId::ThermalOverdrive);
    assert_eq!(r.rest.classify(), ScenarioId::Optimal);
    assert_eq!(r.period(Period::Break).comfort, -0.7);
    assert_eq!(r.period(Period::Work).energy, 1.1);
}

#[test]
fn test_year_unknown_scenario_fails_fast() {
    let err = year("1/1,1,0,1,1,0,1\n2/1,1,0,7,1,0,1\n").unwrap_err();
    assert!(matches!(err, DataLoadError::Scenario(UnknownScenario(7))));
}

#[test]
fn test_year_malformed_rows_are_skipped() {
    let rows = "\
1/1,1,0,1,1,0,1
31/2,1,0,1,1,0,1
2/1,high,0,1,1,0,1
3/1,0.5,0.1,2,0.4,0.2,4
";
    let readings = year(rows).unwrap();
    assert_eq!(readings.len(), 2);
    assert_eq!(readings[1].day.day_of_year(), 3);
    assert_eq!(readings[1].rest.scenario, ScenarioId::ThermalNeglect);
}

#[test]
fn test_year_non_finite_measurements_are_skipped() {
    let rows = "\
1/1,NaN,0,1,1,0,1
2/1,1,0,1,1,0,1
3/1,1,inf,1,1,0,1
4/1,1,0,1,-inf,0,1
5/1,1,0,1,1,NaN,1
";
    let readings = year(rows).unwrap();
    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].day.day_of_year(), 2);
    assert!(readings[0].work.energy.is_finite());
}

#[test]
fn test_year_only_non_finite_rows_is_no_rows() {
    let err = year("1/1,NaN,0,1,1,0,1\n").unwrap_err();
    assert!(matches!(err, DataLoadError::NoRows));
}

#[test]
fn test_load_missing_file_is_open_error() {
    let err = load_hourly(Path::new("/nonexistent/24hr daily.csv")).unwrap_err();
    assert!(matches!(err, DataLoadError::Open { .. }));
    assert!(err.to_string().contains("cannot open"));
}

#[test]
fn test_load_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("year view.csv");
    std::fs::write(&path, format!("{YEAR_HEADER}15/1,1,0,1,1,0,2\n")).unwrap();
    let readings = load_year(&path).unwrap();
    assert_eq!(readings[0].day.day_of_year(), 15);
}
