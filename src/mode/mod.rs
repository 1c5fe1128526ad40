//! CLI mode implementations

mod day;
mod year;

pub use day::{DaySelection, run_day};
pub use year::{YearOptions, run_year};

use climaview::chart::echarts::EchartsRenderer;
use climaview::error::DataLoadError;

use crate::output::print_error;

/// Print a load failure and stop; no chart is produced
fn exit_on_load_error<T>(loaded: Result<T, DataLoadError>) -> T {
    loaded.unwrap_or_else(|e| {
        print_error(&format!("Error loading data: {}", e));
        std::process::exit(1);
    })
}

/// Write the rendered chart if an image path was given
fn export_chart(renderer: &EchartsRenderer, image_path: Option<&str>) {
    if let Some(path) = image_path {
        if let Err(e) = renderer.save_png(path) {
            print_error(&e.to_string());
            std::process::exit(1);
        }
        eprintln!("Chart saved to: {}", path);
    }
}
