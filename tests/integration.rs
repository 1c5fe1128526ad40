//! Integration tests for climaview CLI

mod common;

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Get the path to the climaview binary
fn climaview_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("climaview");
    path
}

/// Run climaview with the given arguments
fn run_climaview(args: &[&str]) -> std::process::Output {
    Command::new(climaview_bin())
        .args(args)
        .output()
        .expect("failed to execute climaview")
}

/// Hourly data for two days, listed out of order
fn create_hourly(dir: &TempDir) -> PathBuf {
    common::write_hourly(dir.path(), "hourly.csv", &["05/10/2019", "17/02/2019"]).unwrap()
}

fn create_year(dir: &TempDir, days: u32) -> PathBuf {
    common::write_year(dir.path(), "year.csv", days).unwrap()
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Basic functionality tests
// =============================================================================

#[test]
fn test_help_flag() {
    let output = run_climaview(&["--help"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Indoor-climate dashboard"));
    assert!(stdout.contains("--year"));
    assert!(stdout.contains("--page"));
    assert!(stdout.contains("--scenario"));
    assert!(stdout.contains("--image"));
}

#[test]
fn test_version_flag() {
    let output = run_climaview(&["--version"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("climaview"));
}

// =============================================================================
// Day view mode
// =============================================================================

#[test]
fn test_day_defaults_to_first_date() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_hourly(&temp_dir);

    let output = run_climaview(&["-q", "--no-color", csv.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Sunday, February 17th, 2019 (day 1 of 2)"));
    assert!(stdout.contains("[Scenario Hours]"));
    assert!(stdout.contains("[Hourly Readings]"));
}

#[test]
fn test_day_scenario_hours() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_hourly(&temp_dir);

    let output = run_climaview(&["-q", "--no-color", csv.to_str().unwrap()]);
    let stdout = stdout_of(&output);

    let hours = |label: &str| {
        stdout
            .lines()
            .find(|l| l.trim_start().starts_with(label))
            .map(|l| l.trim().to_string())
    };
    assert!(hours("Optimal").unwrap().ends_with("18h"));
    assert!(hours("Thermal Overdrive").unwrap().ends_with("6h"));
    assert!(hours("Thermal Neglect").unwrap().ends_with("0h"));
}

#[test]
fn test_day_hour_rows() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_hourly(&temp_dir);

    let output = run_climaview(&["-q", "--no-color", csv.to_str().unwrap()]);
    let stdout = stdout_of(&output);

    let row = stdout.lines().find(|l| l.starts_with("14:00")).unwrap();
    assert!(row.contains("1.40"));
    assert!(row.contains("Too Warm"));
    assert!(row.contains("Thermal Overdrive"));

    let rows = stdout.lines().filter(|l| l.get(2..5) == Some(":00")).count();
    assert_eq!(rows, 24);
}

#[test]
fn test_day_by_date() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_hourly(&temp_dir);

    let output = run_climaview(&["-q", "--no-color", csv.to_str().unwrap(), "--day", "5/10/2019"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Saturday, October 5th, 2019 (day 2 of 2)"));
}

#[test]
fn test_day_by_index() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_hourly(&temp_dir);

    let output = run_climaview(&["-q", csv.to_str().unwrap(), "--index", "1"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("October 5th"));
}

#[test]
fn test_day_index_out_of_range() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_hourly(&temp_dir);

    let output = run_climaview(&["-q", csv.to_str().unwrap(), "--index", "2"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("out of range"));
}

#[test]
fn test_day_not_in_dataset() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_hourly(&temp_dir);

    let output = run_climaview(&["-q", csv.to_str().unwrap(), "--day", "01/01/2019"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("not in the dataset"));
}

#[test]
fn test_day_highlights() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_hourly(&temp_dir);

    let output = run_climaview(&[
        "--no-color",
        csv.to_str().unwrap(),
        "--highlight",
        "05/10/2019=Custom spring day",
        "--highlight",
        "25/12/2019=Christmas",
    ]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("[Highlights]"));
    assert!(stdout.contains("17th Feb: A Summer Sunday"));
    assert!(stdout.contains("Custom spring day"));
    // Days missing from the data are dropped silently
    assert!(!stdout.contains("Christmas"));
    assert!(!stdout.contains("26th Jun"));
}

#[test]
fn test_day_with_image() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_hourly(&temp_dir);
    let image_path = temp_dir.path().join("day.png");

    let output = run_climaview(&[
        "-q",
        csv.to_str().unwrap(),
        "--image",
        image_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(image_path.exists(), "Image file should be created");
    assert!(std::fs::metadata(&image_path).unwrap().len() > 0);
}

// =============================================================================
// Year view mode
// =============================================================================

#[test]
fn test_year_summary() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_year(&temp_dir, 40);

    let output = run_climaview(&["-q", "--no-color", "--year", csv.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("[Scenario Days]"));
    assert!(stdout.contains("Filter: all"));
    assert!(stdout.contains("Lines:  hvac-work, pmv-work, hvac-break, pmv-break"));
    assert!(stdout.contains("[Page 1]"));
    assert!(stdout.contains("(no call-outs)"));

    // 40 days cycling through four scenarios: 10 each
    let optimal = stdout
        .lines()
        .find(|l| l.starts_with("Optimal"))
        .unwrap()
        .split_whitespace()
        .skip(1)
        .map(|v| v.parse::<usize>().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(optimal, vec![10, 10]);
}

#[test]
fn test_year_page_callouts() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_year(&temp_dir, 10);

    let output = run_climaview(&["-q", "--year", csv.to_str().unwrap(), "--page", "6"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Scroll down for Day View"));

    let output = run_climaview(&["-q", "--year", csv.to_str().unwrap(), "--page", "3"]);
    let stdout = stdout_of(&output);
    assert!(stdout.contains("purple annotation"));
    assert!(stdout.contains("green annotation"));
}

#[test]
fn test_year_unknown_page_warns() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_year(&temp_dir, 10);

    let output = run_climaview(&["-q", "--year", csv.to_str().unwrap(), "--page", "9"]);
    assert!(output.status.success());
    assert!(stderr_of(&output).contains("warning"));
    assert!(stdout_of(&output).contains("(no call-outs)"));
}

#[test]
fn test_year_filter_and_hide() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_year(&temp_dir, 10);

    let output = run_climaview(&[
        "-q",
        "--year",
        csv.to_str().unwrap(),
        "--scenario",
        "thermal-overdrive",
        "--hide",
        "pmv-break",
        "--hide",
        "hvac-work",
    ]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Filter: Thermal Overdrive"));
    assert!(stdout.contains("Lines:  pmv-work, hvac-break"));
}

#[test]
fn test_year_with_image() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_year(&temp_dir, 60);
    let image_path = temp_dir.path().join("year.png");

    let output = run_climaview(&[
        "-q",
        "--year",
        csv.to_str().unwrap(),
        "--page",
        "2",
        "--image",
        image_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(image_path.exists(), "Image file should be created");
}

// =============================================================================
// Error handling tests
// =============================================================================

#[test]
fn test_no_file_error() {
    let output = run_climaview(&[]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("required"));
}

#[test]
fn test_nonexistent_file_error() {
    let output = run_climaview(&["/nonexistent/path/hourly.csv"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Error loading data"));
}

#[test]
fn test_unknown_scenario_fails_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("year.csv");
    let rows = vec![
        common::year_row("1/1", (1.0, 0.2, 1), (0.3, -0.4, 2)),
        common::year_row("2/1", (1.0, 0.2, 7), (0.3, -0.4, 2)),
    ];
    common::write_csv(&path, common::YEAR_HEADER, &rows).unwrap();

    let output = run_climaview(&["--year", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("unknown scenario id 7"));
}

#[test]
fn test_bad_rows_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hourly.csv");
    let mut rows = common::hourly_day("17/02/2019");
    rows.push(common::hourly_row("31/02/2019", 3, 0.1, 0.2, [1, 0, 0, 0]));
    rows.push(common::hourly_row("18/02/2019", 30, 0.1, 0.2, [1, 0, 0, 0]));
    common::write_csv(&path, common::HOURLY_HEADER, &rows).unwrap();

    let output = run_climaview(&["-q", "--no-color", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("(day 1 of 1)"));
}

#[test]
fn test_no_usable_rows_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hourly.csv");
    let rows = vec![common::hourly_row("not-a-date", 3, 0.1, 0.2, [0, 0, 0, 0])];
    common::write_csv(&path, common::HOURLY_HEADER, &rows).unwrap();

    let output = run_climaview(&[path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("no usable rows"));
}

#[test]
fn test_missing_column_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hourly.csv");
    common::write_csv(&path, "day,time,avg_pmv", &["17/02/2019,3,0.1".to_string()]).unwrap();

    let output = run_climaview(&[path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("required column 'avg_hvac'"));
}

#[test]
fn test_day_and_index_error() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_hourly(&temp_dir);

    let output = run_climaview(&[csv.to_str().unwrap(), "--day", "17/02/2019", "--index", "0"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("--day and --index cannot be used together"));
}

#[test]
fn test_year_options_without_year_error() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_hourly(&temp_dir);

    let output = run_climaview(&[csv.to_str().unwrap(), "--page", "3"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("can only be used with --year"));
}

#[test]
fn test_day_options_with_year_error() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_year(&temp_dir, 5);

    let output = run_climaview(&["--year", csv.to_str().unwrap(), "--index", "1"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("can only be used without --year"));
}

#[test]
fn test_unknown_filter_error() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_year(&temp_dir, 5);

    let output = run_climaview(&["--year", csv.to_str().unwrap(), "--scenario", "sunny"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Unknown scenario filter: sunny"));
}

#[test]
fn test_unknown_series_error() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_year(&temp_dir, 5);

    let output = run_climaview(&["--year", csv.to_str().unwrap(), "--hide", "hvac"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Unknown series: hvac"));
}

#[test]
fn test_invalid_highlight_error() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_hourly(&temp_dir);

    let output = run_climaview(&[csv.to_str().unwrap(), "--highlight", "17/02/2019"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Invalid highlight"));
}

#[test]
fn test_invalid_viewport_error() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_hourly(&temp_dir);

    let output = run_climaview(&[csv.to_str().unwrap(), "--width", "0"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("at least 1 pixel"));
}

#[test]
fn test_sub_pixel_viewport_error() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_year(&temp_dir, 10);

    let output = run_climaview(&[csv.to_str().unwrap(), "--year", "--height", "0.5"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("at least 1 pixel"));
}

#[test]
fn test_image_invalid_directory_error() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_hourly(&temp_dir);

    let output = run_climaview(&[
        "-q",
        csv.to_str().unwrap(),
        "--image",
        "/nonexistent/dir/chart.png",
    ]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Directory does not exist"));
}

// =============================================================================
// Output format tests
// =============================================================================

#[test]
fn test_no_color_option() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_hourly(&temp_dir);

    let output = run_climaview(&["--no-color", csv.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(
        !stdout_of(&output).contains("\x1b["),
        "Should not contain ANSI escape codes"
    );
}

#[test]
fn test_quiet_mode_reduces_output() {
    let temp_dir = TempDir::new().unwrap();
    let csv = create_year(&temp_dir, 10);

    let verbose_output = run_climaview(&["--year", csv.to_str().unwrap()]);
    let quiet_output = run_climaview(&["-q", "--year", csv.to_str().unwrap()]);

    let verbose_stdout = stdout_of(&verbose_output);
    let quiet_stdout = stdout_of(&quiet_output);

    assert!(quiet_stdout.len() < verbose_stdout.len());
    assert!(verbose_stdout.contains("Scenarios:"));
    assert!(verbose_stdout.contains("✓ Low energy, ✓ High comfort"));
    assert!(!quiet_stdout.contains("Scenarios:"));
}
