//! Year view: every day of the reference year, work and break halves
//!
//! Trace order is fixed and used for opacity updates:
//! `[work bg day0, break bg day0, work bg day1, ..., HVAC work, PMV work,
//! HVAC break, PMV break, date reference]`.

use super::colors::{
    COLOR_TEXT, HVAC_BREAK, HVAC_WORK, PMV_BREAK, PMV_THRESHOLD, PMV_WORK, SEASON_MARK,
    YEAR_COMFORT_AXIS, YEAR_ENERGY_AXIS,
};
use super::overlay::page_overlay;
use super::{
    Annotation, AxisSpec, COMFORT_LIMIT, ChartModel, Comfort, Curve, Layer, Layout, Overlay,
    Series, SeriesKind, Shape, XRef, YAxis, YRef, font_size,
};
use crate::config::Viewport;
use crate::data::{Period, YearReading};
use crate::date::reference_day_of_year;

/// Comfort-axis extent of the work (upper) and break (lower) backgrounds
const REGION_EXTENT: f64 = 1.75;

const MAX_WIDTH: f64 = 1800.0;
const MAX_HEIGHT: f64 = 600.0;

/// Season markers (southern hemisphere): (day of year, label)
const SEASONS: [(f64, &str); 4] = [
    (79.0, "Autumn Equinox"),
    (172.0, "Winter Solstice"),
    (266.0, "Spring Equinox"),
    (356.0, "Summer Solstice"),
];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The four toggleable foreground lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineSeries {
    HvacWork,
    PmvWork,
    HvacBreak,
    PmvBreak,
}

impl LineSeries {
    pub const ALL: [LineSeries; 4] = [
        LineSeries::HvacWork,
        LineSeries::PmvWork,
        LineSeries::HvacBreak,
        LineSeries::PmvBreak,
    ];

    /// Stable identifier for controls ("hvac-work", ...)
    pub fn id(self) -> &'static str {
        match self {
            LineSeries::HvacWork => "hvac-work",
            LineSeries::PmvWork => "pmv-work",
            LineSeries::HvacBreak => "hvac-break",
            LineSeries::PmvBreak => "pmv-break",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        LineSeries::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn period(self) -> Period {
        match self {
            LineSeries::HvacWork | LineSeries::PmvWork => Period::Work,
            LineSeries::HvacBreak | LineSeries::PmvBreak => Period::Break,
        }
    }

    fn is_energy(self) -> bool {
        matches!(self, LineSeries::HvacWork | LineSeries::HvacBreak)
    }

    fn name(self) -> &'static str {
        match self {
            LineSeries::HvacWork => "HVAC (Work)",
            LineSeries::PmvWork => "PMV (Work)",
            LineSeries::HvacBreak => "HVAC (Break)",
            LineSeries::PmvBreak => "PMV (Break)",
        }
    }

    fn color(self) -> &'static str {
        match self {
            LineSeries::HvacWork => HVAC_WORK,
            LineSeries::PmvWork => PMV_WORK,
            LineSeries::HvacBreak => HVAC_BREAK,
            LineSeries::PmvBreak => PMV_BREAK,
        }
    }

    fn position(self) -> usize {
        self as usize
    }
}

/// Trace index of a day's background region
pub fn background_index(day_index: usize, period: Period) -> usize {
    day_index * 2
        + match period {
            Period::Work => 0,
            Period::Break => 1,
        }
}

/// Trace index of a foreground line, given the number of days
pub fn line_index(day_count: usize, line: LineSeries) -> usize {
    day_count * 2 + line.position()
}

/// Full year model for one page
pub fn build_year_model(data: &[YearReading], viewport: &Viewport, page: u32) -> ChartModel {
    let overlay = Overlay::merged(&persistent_overlay(), &page_overlay(page));
    ChartModel {
        series: build_year_traces(data),
        shapes: overlay.shapes,
        annotations: overlay.annotations,
        layout: build_year_layout(viewport),
    }
}

/// Background regions, foreground lines and the date reference trace
pub fn build_year_traces(data: &[YearReading]) -> Vec<Series> {
    let mut traces = Vec::with_capacity(data.len() * 2 + LineSeries::ALL.len() + 1);

    for reading in data {
        let x = reading.day.day_of_year() as f64;
        for period in Period::ALL {
            traces.push(background_region(x, period, reading));
        }
    }

    for line in LineSeries::ALL {
        traces.push(line_trace(line, data));
    }

    traces.push(Series {
        name: "date".to_string(),
        kind: SeriesKind::Reference,
        axis: YAxis::Reference,
        points: data
            .iter()
            .map(|r| (r.day.day_of_year() as f64, 2.0))
            .collect(),
        hover: data
            .iter()
            .map(|r| format!("{} {}", r.day.short_label(), r.day.year()))
            .collect(),
        opacity: 0.0,
    });

    traces
}

fn background_region(x: f64, period: Period, reading: &YearReading) -> Series {
    let (lo, hi) = match period {
        Period::Work => (0.0, REGION_EXTENT),
        Period::Break => (-REGION_EXTENT, 0.0),
    };
    let scenario = reading.period(period).classify();

    Series {
        name: format!("{} {}", period.label(), reading.day),
        kind: SeriesKind::Region {
            fill: scenario.definition().background,
        },
        axis: YAxis::Comfort,
        points: vec![(x - 0.5, lo), (x + 0.5, lo), (x + 0.5, hi), (x - 0.5, hi)],
        hover: Vec::new(),
        opacity: 1.0,
    }
}

fn line_trace(line: LineSeries, data: &[YearReading]) -> Series {
    let period = line.period();
    let value = |r: &YearReading| {
        let sub = r.period(period);
        if line.is_energy() { sub.energy } else { sub.comfort }
    };

    let hover = data
        .iter()
        .map(|r| {
            let v = value(r);
            if line.is_energy() {
                format!("HVAC {}: {:.2}", period.label(), v)
            } else {
                format!(
                    "PMV {}: {:.2} ({})",
                    period.label(),
                    v,
                    Comfort::classify(v).label()
                )
            }
        })
        .collect();

    Series {
        name: line.name().to_string(),
        kind: SeriesKind::Line {
            color: line.color(),
            width: 2.0,
            curve: Curve::Linear,
            marker: None,
        },
        axis: if line.is_energy() {
            YAxis::Energy
        } else {
            YAxis::Comfort
        },
        points: data
            .iter()
            .map(|r| (r.day.day_of_year() as f64, value(r)))
            .collect(),
        hover,
        opacity: 1.0,
    }
}

/// Always-present annotations and shapes: season markers, PMV thresholds and
/// the work/break region labels
pub fn persistent_overlay() -> Overlay {
    let mut shapes: Vec<Shape> = SEASONS
        .iter()
        .map(|(day, _)| {
            Shape::line(
                (*day, *day),
                (0.0, 2.0),
                XRef::Data,
                YRef::Axis(YAxis::Reference),
            )
            .stroke(SEASON_MARK, 0.85)
        })
        .collect();

    shapes.extend([-COMFORT_LIMIT, COMFORT_LIMIT].map(|y| {
        Shape::line((1.0, 366.0), (y, y), XRef::Data, YRef::Axis(YAxis::Comfort))
            .stroke(PMV_THRESHOLD, 2.5)
            .layer(Layer::Below)
    }));

    let mut annotations: Vec<Annotation> = SEASONS
        .iter()
        .map(|(day, label)| {
            Annotation::new(*label, *day, 2.04, XRef::Data, YRef::Axis(YAxis::Reference))
                .font(13.0, SEASON_MARK)
        })
        .collect();

    let period_label = |text: &str, y: f64| {
        Annotation::new(text, 0.02, y, XRef::Paper, YRef::Axis(YAxis::Energy))
            .font(12.0, "#000")
    };
    annotations.push(period_label("Break hours", 0.07));
    annotations.push(period_label("Work hours", 1.93));

    Overlay {
        annotations,
        shapes,
    }
}

/// Axis ranges, month ticks and responsive size
pub fn build_year_layout(viewport: &Viewport) -> Layout {
    let month_ticks: Vec<(f64, String)> = MONTHS
        .iter()
        .enumerate()
        .map(|(i, name)| {
            (
                reference_day_of_year(i as u32 + 1, 15),
                format!("{} 15", name),
            )
        })
        .collect();

    let mut x = AxisSpec::new((1.0, 366.0)).title("Day of Year", Some(COLOR_TEXT));
    x.ticks = month_ticks;

    Layout {
        width: Some((viewport.width * 0.95).min(MAX_WIDTH)),
        height: (viewport.height * 0.7).min(MAX_HEIGHT),
        font_size: font_size(viewport),
        show_legend: false,
        x,
        energy: AxisSpec::new((0.0, 2.0))
            .title("Energy Usage Score", Some(YEAR_ENERGY_AXIS)),
        comfort: AxisSpec::new((-2.0, 2.0))
            .title("Thermal Comfort", Some(YEAR_COMFORT_AXIS))
            .ticks(&[
                (-2.0, "Cool"),
                (-1.5, "-1.5"),
                (-0.5, "-0.5"),
                (0.0, "0"),
                (0.5, "+0.5"),
                (1.5, "1.5"),
                (2.0, "Warm"),
            ]),
        reference: Some(AxisSpec::new((0.0, 2.1))),
    }
}
