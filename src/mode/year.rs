//! Full-year view mode

use std::path::Path;

use climaview::chart::LineSeries;
use climaview::chart::echarts::EchartsRenderer;
use climaview::config::Viewport;
use climaview::data::{Period, load_year};
use climaview::view::{ScenarioFilter, YearView};

use crate::output::{
    get_display_name, print_file_info, print_legend, print_page, print_year_counts,
};

use super::{exit_on_load_error, export_chart};

/// Selection state applied before output
#[derive(Debug, Clone)]
pub struct YearOptions {
    pub page: u32,
    pub filter: ScenarioFilter,
    pub hidden: Vec<LineSeries>,
    pub viewport: Viewport,
}

/// Show the year dataset on one page
pub fn run_year(filename: &str, options: &YearOptions, quiet: bool, image_path: Option<&str>) {
    let data = exit_on_load_error(load_year(Path::new(filename)));
    let mut view = YearView::new(data, options.viewport);
    let mut renderer = EchartsRenderer::new();

    view.show(&mut renderer);
    view.set_page(options.page, &mut renderer);
    if options.filter != ScenarioFilter::All {
        view.set_filter(options.filter, &mut renderer);
    }
    for line in &options.hidden {
        view.set_series_visible(*line, false, &mut renderer);
    }

    if !quiet {
        print_file_info(
            get_display_name(filename),
            "year",
            view.data().len(),
            view.data().len() * 2,
        );
    }

    print_year_counts(
        &view.scenario_days(Period::Work),
        &view.scenario_days(Period::Break),
    );
    println!();
    println!("Filter: {}", view.filter());
    let shown: Vec<&str> = LineSeries::ALL
        .into_iter()
        .filter(|l| view.is_visible(*l))
        .map(LineSeries::id)
        .collect();
    println!(
        "Lines:  {}",
        if shown.is_empty() { "-".to_string() } else { shown.join(", ") }
    );
    println!();
    print_page(view.page(), &view.overlay().annotations);

    if !quiet {
        println!();
        print_legend();
    }

    export_chart(&renderer, image_path);
}
