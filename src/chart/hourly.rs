//! Day view: one day's hours on a 0-23 axis

use super::colors::{COLOR_TEXT, DAY_COMFORT_BAND, DAY_ENERGY_AXIS, DAY_HVAC, DAY_PMV};
use super::{
    Annotation, AxisSpec, COMFORT_LIMIT, ChartModel, Comfort, Curve, Layer, Layout, Marker,
    Series, SeriesKind, Shape, XRef, YAxis, YRef, font_size,
};
use crate::aggregate::summarize_hours;
use crate::config::Viewport;
use crate::data::Reading;
use crate::date::CalendarDate;

/// Fixed chart height of the day view
const DAY_CHART_HEIGHT: f64 = 350.0;

/// Build the day-view model for one day's readings (ascending hour order)
pub fn build_day_model(day: CalendarDate, rows: &[Reading], viewport: &Viewport) -> ChartModel {
    let mut shapes = scenario_shapes(rows);
    shapes.push(comfort_band());

    ChartModel {
        series: traces(rows),
        shapes,
        annotations: annotations(day, rows),
        layout: layout(viewport),
    }
}

/// One rect per (reading, satisfied scenario), later scenarios on top
fn scenario_shapes(rows: &[Reading]) -> Vec<Shape> {
    rows.iter()
        .flat_map(|r| {
            let hour = r.hour as f64;
            r.scenarios.iter().map(move |id| {
                Shape::rect((hour - 0.5, hour + 0.5), (0.0, 1.0), XRef::Data, YRef::Paper)
                    .fill(id.definition().background)
                    .layer(Layer::Below)
            })
        })
        .collect()
}

/// Comfortable PMV zone spanning the full width
fn comfort_band() -> Shape {
    Shape::rect(
        (0.0, 1.0),
        (-COMFORT_LIMIT, COMFORT_LIMIT),
        XRef::Paper,
        YRef::Axis(YAxis::Comfort),
    )
    .fill(DAY_COMFORT_BAND)
    .layer(Layer::Below)
}

fn traces(rows: &[Reading]) -> Vec<Series> {
    let hvac = Series {
        name: "HVAC".to_string(),
        kind: SeriesKind::Line {
            color: DAY_HVAC,
            width: 3.0,
            curve: Curve::Step,
            marker: Some(Marker::Diamond),
        },
        axis: YAxis::Energy,
        points: rows.iter().map(|r| (r.hour as f64, r.energy)).collect(),
        hover: rows
            .iter()
            .map(|r| format!("HVAC: {:.2} point", r.energy))
            .collect(),
        opacity: 1.0,
    };

    let pmv = Series {
        name: "PMV".to_string(),
        kind: SeriesKind::Line {
            color: DAY_PMV,
            width: 3.0,
            curve: Curve::Spline,
            marker: Some(Marker::Circle),
        },
        axis: YAxis::Comfort,
        points: rows.iter().map(|r| (r.hour as f64, r.comfort)).collect(),
        hover: rows
            .iter()
            .map(|r| {
                format!(
                    "PMV: {:.2} ({})",
                    r.comfort,
                    Comfort::classify(r.comfort).hourly_label()
                )
            })
            .collect(),
        opacity: 1.0,
    };

    vec![hvac, pmv]
}

fn annotations(day: CalendarDate, rows: &[Reading]) -> Vec<Annotation> {
    let comfortable = Annotation::new(
        "Comfortable",
        0.97,
        0.0,
        XRef::Paper,
        YRef::Axis(YAxis::Comfort),
    )
    .font(10.0, DAY_ENERGY_AXIS);

    let summary = Annotation::new(
        format!("{}: {}", day.long_label(), summarize_hours(rows).describe()),
        0.03,
        1.07,
        XRef::Paper,
        YRef::Paper,
    )
    .font(14.0, DAY_HVAC);

    vec![comfortable, summary]
}

fn layout(viewport: &Viewport) -> Layout {
    let mut x = AxisSpec::new((-0.1, 23.1)).title("Hours of the Day", Some(COLOR_TEXT));
    x.ticks = (0..24).map(|hour| (hour as f64, hour.to_string())).collect();

    Layout {
        width: None,
        height: DAY_CHART_HEIGHT,
        font_size: font_size(viewport),
        show_legend: true,
        x,
        energy: AxisSpec::new((0.0, 2.0)).title("Energy Usage Score", Some(DAY_ENERGY_AXIS)),
        comfort: AxisSpec::new((-1.75, 1.75))
            .title("Thermal Comfort", Some(DAY_PMV))
            .ticks(&[
                (-1.75, "Cool"),
                (-1.5, "-1.5"),
                (-0.5, "-0.5"),
                (0.0, "0"),
                (0.5, "+0.5"),
                (1.5, "1.5"),
                (1.75, "Warm"),
            ]),
        reference: None,
    }
}
