//! 24-hour view mode

use std::path::Path;

use climaview::chart::echarts::EchartsRenderer;
use climaview::config::DashboardConfig;
use climaview::data::load_hourly;
use climaview::date::CalendarDate;
use climaview::view::DayView;

use crate::output::{
    get_display_name, print_day_header, print_error, print_file_info, print_hour_table,
    print_legend, print_markers, print_scenario_hours,
};

use super::{exit_on_load_error, export_chart};

/// How the day to show was chosen
#[derive(Debug, Clone, Copy)]
pub enum DaySelection {
    Index(usize),
    Date(CalendarDate),
}

/// Show one day of the hourly dataset
pub fn run_day(
    filename: &str,
    selection: DaySelection,
    config: &DashboardConfig,
    quiet: bool,
    image_path: Option<&str>,
) {
    let readings = exit_on_load_error(load_hourly(Path::new(filename)));
    let reading_count = readings.len();
    let mut view = DayView::new(readings, config);
    let mut renderer = EchartsRenderer::new();

    let selected = match selection {
        DaySelection::Index(index) => view.select_day(index, &mut renderer),
        DaySelection::Date(day) => view.select_date(day, &mut renderer),
    };
    if let Err(e) = selected {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    if !quiet {
        print_file_info(
            get_display_name(filename),
            "hourly",
            view.day_count(),
            reading_count,
        );
    }

    let Some(day) = view.current_day() else {
        print_error("No days in data");
        std::process::exit(1);
    };
    print_day_header(day, view.current_index(), view.day_count());
    println!();
    print_scenario_hours(&view.summary());
    println!();
    print_hour_table(view.current_rows());

    if !quiet {
        println!();
        print_markers(view.markers());
        println!();
        print_legend();
    }

    export_chart(&renderer, image_path);
}
