//! Render-ready chart models for the day and year views
//!
//! A [`ChartModel`] is plain data: traces, background shapes, annotations and
//! axis configuration. It carries no rendering dependency; [`echarts`] is one
//! collaborator that draws it.

mod colors;
pub mod echarts;
mod hourly;
mod overlay;
mod year;

pub use hourly::build_day_model;
pub use overlay::{FIRST_PAGE, LAST_PAGE, page_overlay};
pub use year::{
    LineSeries, background_index, build_year_layout, build_year_model, build_year_traces,
    line_index, persistent_overlay,
};

use crate::config::Viewport;

/// PMV magnitude beyond which a reading is no longer comfortable
pub const COMFORT_LIMIT: f64 = 0.5;

/// Vertical axes shared by both views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YAxis {
    /// HVAC energy usage score (left)
    Energy,
    /// PMV comfort score (right)
    Comfort,
    /// Hidden axis for the year view's date tooltip and season markers
    Reference,
}

/// Horizontal reference of a shape or annotation coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XRef {
    Data,
    /// 0..1 across the plot area
    Paper,
}

/// Vertical reference of a shape or annotation coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YRef {
    Axis(YAxis),
    /// 0..1 up the plot area
    Paper,
}

/// Whether an overlay entry survives page switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    Persistent,
    Page,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Below,
    Above,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Linear,
    /// Horizontal then vertical step
    Step,
    Spline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Diamond,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesKind {
    /// Foreground value trace
    Line {
        color: &'static str,
        width: f64,
        curve: Curve,
        marker: Option<Marker>,
    },
    /// Filled closed polygon, no hover
    Region { fill: &'static str },
    /// Invisible trace carrying tooltip text only
    Reference,
}

/// One trace. Its index in [`ChartModel::series`] is its trace index.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    pub axis: YAxis,
    pub points: Vec<(f64, f64)>,
    /// Hover text per point (may be empty)
    pub hover: Vec<String>,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    Line,
}

/// Background or reference geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub xref: XRef,
    pub yref: YRef,
    pub fill: Option<&'static str>,
    pub stroke: Option<Stroke>,
    pub layer: Layer,
    pub scope: Scope,
}

impl Shape {
    pub fn rect(x: (f64, f64), y: (f64, f64), xref: XRef, yref: YRef) -> Self {
        Self {
            kind: ShapeKind::Rect,
            x,
            y,
            xref,
            yref,
            fill: None,
            stroke: None,
            layer: Layer::Below,
            scope: Scope::Persistent,
        }
    }

    pub fn line(x: (f64, f64), y: (f64, f64), xref: XRef, yref: YRef) -> Self {
        Self {
            kind: ShapeKind::Line,
            layer: Layer::Above,
            ..Self::rect(x, y, xref, yref)
        }
    }

    pub fn fill(mut self, color: &'static str) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn stroke(mut self, color: &'static str, width: f64) -> Self {
        self.stroke = Some(Stroke { color, width });
        self
    }

    pub fn layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    pub fn page(mut self) -> Self {
        self.scope = Scope::Page;
        self
    }
}

/// Text call-out anchored on the chart
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub xref: XRef,
    pub yref: YRef,
    pub font_size: f64,
    pub color: &'static str,
    pub bold: bool,
    pub scope: Scope,
}

impl Annotation {
    pub fn new(text: impl Into<String>, x: f64, y: f64, xref: XRef, yref: YRef) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            xref,
            yref,
            font_size: 12.0,
            color: "#000",
            bold: false,
            scope: Scope::Persistent,
        }
    }

    pub fn font(mut self, size: f64, color: &'static str) -> Self {
        self.font_size = size;
        self.color = color;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn page(mut self) -> Self {
        self.scope = Scope::Page;
        self
    }
}

/// Configuration of one axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub title: Option<String>,
    pub color: Option<&'static str>,
    pub range: (f64, f64),
    /// Explicit (value, label) ticks; empty means automatic
    pub ticks: Vec<(f64, String)>,
}

impl AxisSpec {
    pub fn new(range: (f64, f64)) -> Self {
        Self {
            title: None,
            color: None,
            range,
            ticks: Vec::new(),
        }
    }

    pub fn title(mut self, title: &str, color: Option<&'static str>) -> Self {
        self.title = Some(title.to_string());
        self.color = color;
        self
    }

    pub fn ticks(mut self, ticks: &[(f64, &str)]) -> Self {
        self.ticks = ticks.iter().map(|(v, l)| (*v, l.to_string())).collect();
        self
    }

    /// Map a value on this axis to 0..1 of the plot span
    pub fn fraction(&self, value: f64) -> f64 {
        let (lo, hi) = self.range;
        if hi == lo {
            return 0.0;
        }
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    }

    /// Inverse of [`AxisSpec::fraction`]
    pub fn at_fraction(&self, fraction: f64) -> f64 {
        let (lo, hi) = self.range;
        lo + fraction * (hi - lo)
    }
}

/// Axis ranges, sizes and fonts. Rebuilt on resize; independent of trace data.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// `None` follows the container width
    pub width: Option<f64>,
    pub height: f64,
    pub font_size: f64,
    pub show_legend: bool,
    pub x: AxisSpec,
    pub energy: AxisSpec,
    pub comfort: AxisSpec,
    pub reference: Option<AxisSpec>,
}

impl Layout {
    pub fn y_axis(&self, axis: YAxis) -> Option<&AxisSpec> {
        match axis {
            YAxis::Energy => Some(&self.energy),
            YAxis::Comfort => Some(&self.comfort),
            YAxis::Reference => self.reference.as_ref(),
        }
    }
}

/// Annotations and shapes drawn over the traces
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub annotations: Vec<Annotation>,
    pub shapes: Vec<Shape>,
}

impl Overlay {
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty() && self.shapes.is_empty()
    }

    /// Persistent entries followed by the page entries
    pub fn merged(persistent: &Overlay, page: &Overlay) -> Overlay {
        let mut merged = persistent.clone();
        merged.replace_page(page.clone());
        merged
    }

    /// Drop every page-scoped entry and append `page` in its place.
    ///
    /// Persistent entries are left as they are; appended entries are forced to
    /// page scope so the next replacement removes them.
    pub fn replace_page(&mut self, page: Overlay) {
        self.annotations.retain(|a| a.scope == Scope::Persistent);
        self.shapes.retain(|s| s.scope == Scope::Persistent);
        self.annotations
            .extend(page.annotations.into_iter().map(Annotation::page));
        self.shapes.extend(page.shapes.into_iter().map(Shape::page));
    }
}

/// Everything a render collaborator needs for one full draw
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub series: Vec<Series>,
    pub shapes: Vec<Shape>,
    pub annotations: Vec<Annotation>,
    pub layout: Layout,
}

/// Thermal comfort condition of a PMV value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comfort {
    Cool,
    Comfortable,
    Warm,
}

impl Comfort {
    pub fn classify(pmv: f64) -> Self {
        if pmv < -COMFORT_LIMIT {
            Comfort::Cool
        } else if pmv > COMFORT_LIMIT {
            Comfort::Warm
        } else {
            Comfort::Comfortable
        }
    }

    /// Label used in the year view
    pub fn label(self) -> &'static str {
        match self {
            Comfort::Cool => "Cool",
            Comfort::Comfortable => "Comfortable",
            Comfort::Warm => "Warm",
        }
    }

    /// Label used in the day view
    pub fn hourly_label(self) -> &'static str {
        match self {
            Comfort::Cool => "Too Cool",
            Comfort::Comfortable => "Comfortable",
            Comfort::Warm => "Too Warm",
        }
    }
}

/// Base font size for a viewport
pub(crate) fn font_size(viewport: &Viewport) -> f64 {
    if viewport.is_narrow() { 10.0 } else { 12.0 }
}
