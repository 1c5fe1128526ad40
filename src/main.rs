mod mode;
mod output;

use clap::Parser;

use climaview::chart::{FIRST_PAGE, LAST_PAGE, LineSeries};
use climaview::config::{DashboardConfig, Highlight, Viewport};
use climaview::date::CalendarDate;
use climaview::view::ScenarioFilter;
use mode::{DaySelection, YearOptions, run_day, run_year};
use output::{print_error, print_warning};

#[derive(Parser)]
#[command(
    name = "climaview",
    version,
    about = "Indoor-climate dashboard: HVAC energy and PMV comfort by day and by year",
    after_help = "Examples:
  climaview hourly.csv                                  First day of the hourly data
  climaview hourly.csv --day 17/02/2019                 One specific day
  climaview hourly.csv --index 3 --image day.png        Fourth day, exported as PNG
  climaview --year year.csv --page 3                    Year view with page 3 call-outs
  climaview --year year.csv --scenario optimal          Only Optimal backgrounds
  climaview --year year.csv --hide pmv-break            Hide the break-hours PMV line
  climaview --no-color hourly.csv                       Disable colored output"
)]
struct Args {
    /// CSV data file (hourly, or year data with --year)
    file: String,

    /// Full-year view mode
    #[arg(short, long)]
    year: bool,

    /// Day to show (day/month/year)
    #[arg(short, long, value_name = "DATE")]
    day: Option<String>,

    /// Day to show by slider position (0-based)
    #[arg(long, value_name = "N")]
    index: Option<usize>,

    /// Year-view story page
    #[arg(short, long, default_value_t = FIRST_PAGE, value_name = "N")]
    page: u32,

    /// Year-view background filter: none, all, or a scenario id/name
    #[arg(short, long, value_name = "FILTER")]
    scenario: Option<String>,

    /// Hide a year-view line (hvac-work, pmv-work, hvac-break, pmv-break)
    #[arg(long, value_name = "SERIES")]
    hide: Vec<String>,

    /// Viewport width in pixels
    #[arg(long, default_value = "1280", value_name = "PX")]
    width: f64,

    /// Viewport height in pixels
    #[arg(long, default_value = "800", value_name = "PX")]
    height: f64,

    /// Extra slider highlight, e.g. "25/12/2019=Christmas"
    #[arg(long, value_name = "DATE=LABEL")]
    highlight: Vec<String>,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output the chart as PNG image
    #[arg(long, value_name = "PATH")]
    image: Option<String>,
}

fn fail(msg: &str) -> ! {
    print_error(msg);
    std::process::exit(1);
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Validate viewport
    if !(args.width >= 1.0 && args.height >= 1.0) {
        fail("Viewport width and height must be at least 1 pixel");
    }
    let viewport = Viewport::new(args.width, args.height);

    // Validate option combinations
    if args.day.is_some() && args.index.is_some() {
        fail("--day and --index cannot be used together");
    }

    if args.year && (args.day.is_some() || args.index.is_some() || !args.highlight.is_empty()) {
        fail("--day, --index and --highlight can only be used without --year");
    }

    if !args.year && (args.page != FIRST_PAGE || args.scenario.is_some() || !args.hide.is_empty()) {
        fail("--page, --scenario and --hide can only be used with --year");
    }

    // Validate image output path
    if let Some(ref path) = args.image {
        use std::path::Path;
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fail(&format!("Directory does not exist: {}", parent.display()));
        }
    }

    // Dispatch to appropriate mode
    if args.year {
        if !(FIRST_PAGE..=LAST_PAGE).contains(&args.page) {
            print_warning(&format!(
                "page {} has no call-outs (pages are {}-{})",
                args.page, FIRST_PAGE, LAST_PAGE
            ));
        }

        let filter = match args.scenario.as_deref() {
            None => ScenarioFilter::All,
            Some(raw) => ScenarioFilter::parse(raw)
                .unwrap_or_else(|| fail(&format!("Unknown scenario filter: {}", raw))),
        };

        let hidden: Vec<LineSeries> = args
            .hide
            .iter()
            .map(|id| {
                LineSeries::from_id(id).unwrap_or_else(|| fail(&format!("Unknown series: {}", id)))
            })
            .collect();

        let options = YearOptions {
            page: args.page,
            filter,
            hidden,
            viewport,
        };
        run_year(&args.file, &options, args.quiet, args.image.as_deref());
    } else {
        let mut config = DashboardConfig {
            viewport,
            ..DashboardConfig::default()
        };
        for raw in &args.highlight {
            let highlight = raw
                .split_once('=')
                .and_then(|(day, label)| Highlight::parse(day.trim(), label.trim()))
                .unwrap_or_else(|| {
                    fail(&format!("Invalid highlight (expected DATE=LABEL): {}", raw))
                });
            config.highlights.push(highlight);
        }

        let selection = match (&args.day, args.index) {
            (Some(raw), _) => match CalendarDate::parse(raw) {
                Ok(day) => DaySelection::Date(day),
                Err(e) => fail(&e.to_string()),
            },
            (None, Some(index)) => DaySelection::Index(index),
            (None, None) => DaySelection::Index(0),
        };
        run_day(
            &args.file,
            selection,
            &config,
            args.quiet,
            args.image.as_deref(),
        );
    }
}
