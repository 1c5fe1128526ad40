//! Render collaborator drawing chart models with ECharts (via charming)

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisType, Color, ItemStyle, LineStyle, MarkArea, MarkAreaData, SplitLine,
        Symbol, TextStyle,
    },
    renderer::ImageFormat,
    series::Line,
};
use log::{debug, warn};

use super::colors::{COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT};
use super::{
    Annotation, AxisSpec, Curve, Layer, Layout, Marker, Series, SeriesKind, Shape, ShapeKind,
    XRef, YAxis, YRef,
};
use crate::error::ExportError;
use crate::view::Render;

/// Width used when the layout follows its container
const DEFAULT_CHART_WIDTH: f64 = 1200.0;

/// Plot area margins, percent of the canvas
const GRID_LEFT: f64 = 6.0;
const GRID_RIGHT: f64 = 6.0;
const GRID_TOP: f64 = 15.0;
const GRID_BOTTOM: f64 = 10.0;

/// Last state pushed through the render contract
#[derive(Debug, Clone)]
struct Rendered {
    series: Vec<Series>,
    shapes: Vec<Shape>,
    annotations: Vec<Annotation>,
    layout: Layout,
}

/// Keeps the rendered state and turns it into a charming [`Chart`] on demand
#[derive(Debug, Default)]
pub struct EchartsRenderer {
    state: Option<Rendered>,
}

impl EchartsRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current chart, `None` before the first render
    pub fn chart(&self) -> Option<Chart> {
        self.state.as_ref().map(compose)
    }

    /// Pixel size of the current chart, never below 1x1
    pub fn size(&self) -> Option<(u32, u32)> {
        self.state.as_ref().map(|s| {
            let width = s.layout.width.unwrap_or(DEFAULT_CHART_WIDTH);
            let pixels = |v: f64| (v.round() as u32).max(1);
            (pixels(width), pixels(s.layout.height))
        })
    }

    /// Render the current chart to a PNG file
    pub fn save_png(&self, output_path: &str) -> Result<(), ExportError> {
        let (Some(chart), Some((width, height))) = (self.chart(), self.size()) else {
            return Err(ExportError::NothingRendered);
        };

        let mut renderer = ImageRenderer::new(width, height);
        renderer
            .save_format(ImageFormat::Png, &chart, output_path)
            .map_err(|e| ExportError::Save(e.to_string()))
    }
}

impl Render for EchartsRenderer {
    fn render(
        &mut self,
        series: &[Series],
        shapes: &[Shape],
        annotations: &[Annotation],
        layout: &Layout,
    ) {
        debug!(
            "render: {} traces, {} shapes, {} annotations",
            series.len(),
            shapes.len(),
            annotations.len()
        );
        self.state = Some(Rendered {
            series: series.to_vec(),
            shapes: shapes.to_vec(),
            annotations: annotations.to_vec(),
            layout: layout.clone(),
        });
    }

    fn update_overlay(&mut self, annotations: &[Annotation], shapes: &[Shape]) {
        match self.state.as_mut() {
            Some(state) => {
                state.annotations = annotations.to_vec();
                state.shapes = shapes.to_vec();
            }
            None => warn!("overlay update before first render ignored"),
        }
    }

    fn set_opacity(&mut self, traces: &[usize], values: &[f64]) {
        let Some(state) = self.state.as_mut() else {
            warn!("opacity update before first render ignored");
            return;
        };
        for (&index, &value) in traces.iter().zip(values) {
            match state.series.get_mut(index) {
                Some(series) => series.opacity = value,
                None => warn!("opacity update for unknown trace {}", index),
            }
        }
    }
}

/// ECharts y-axis index; the hidden reference axis shares the energy axis
fn axis_index(axis: YAxis) -> u8 {
    match axis {
        YAxis::Energy | YAxis::Reference => 0,
        YAxis::Comfort => 1,
    }
}

fn value_axis(spec: &AxisSpec, font_size: f64) -> Axis {
    let color = spec.color.unwrap_or(COLOR_TEXT);
    let mut axis = Axis::new()
        .type_(AxisType::Value)
        .min(spec.range.0)
        .max(spec.range.1)
        .axis_label(
            AxisLabel::new()
                .show(spec.ticks.is_empty())
                .color(color)
                .font_size(font_size),
        )
        .split_line(SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)));

    if let Some(title) = &spec.title {
        axis = axis
            .name(title.as_str())
            .name_text_style(TextStyle::new().color(color).font_size(font_size));
    }
    axis
}

/// Resolve a shape/annotation x coordinate to data space
fn data_x(layout: &Layout, x: f64, xref: XRef) -> f64 {
    match xref {
        XRef::Data => x,
        XRef::Paper => layout.x.at_fraction(x),
    }
}

/// Resolve a y coordinate to (echarts axis index, data value)
fn data_y(layout: &Layout, y: f64, yref: YRef) -> (u8, f64) {
    match yref {
        YRef::Axis(YAxis::Reference) => {
            // Re-express on the energy axis, which hosts reference items
            let fraction = layout.y_axis(YAxis::Reference).map_or(0.0, |a| a.fraction(y));
            (0, layout.energy.at_fraction(fraction))
        }
        YRef::Axis(axis) => (axis_index(axis), y),
        YRef::Paper => (0, layout.energy.at_fraction(y)),
    }
}

/// Expand a step curve into explicit horizontal-then-vertical points
fn step_points(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for pair in points.windows(2) {
        out.push(pair[0]);
        out.push((pair[1].0, pair[0].1));
    }
    if let Some(last) = points.last() {
        out.push(*last);
    }
    out
}

/// Filled boxes sharing one layer, axis and style
#[derive(Debug)]
struct AreaGroup {
    layer: Layer,
    axis: u8,
    fill: &'static str,
    stroke: Option<(&'static str, f64)>,
    boxes: Vec<((f64, f64), (f64, f64))>,
}

fn push_area(
    groups: &mut Vec<AreaGroup>,
    layer: Layer,
    axis: u8,
    fill: &'static str,
    stroke: Option<(&'static str, f64)>,
    area: ((f64, f64), (f64, f64)),
) {
    match groups
        .iter_mut()
        .find(|g| g.layer == layer && g.axis == axis && g.fill == fill && g.stroke == stroke)
    {
        Some(group) => group.boxes.push(area),
        None => groups.push(AreaGroup {
            layer,
            axis,
            fill,
            stroke,
            boxes: vec![area],
        }),
    }
}

/// Mark-area groups for visible regions and rect shapes
fn area_groups(state: &Rendered) -> Vec<AreaGroup> {
    let layout = &state.layout;
    let mut areas: Vec<AreaGroup> = Vec::new();
    for series in state.series.iter().filter(|s| s.opacity > 0.0) {
        if let SeriesKind::Region { fill } = series.kind {
            let xs = series.points.iter().map(|p| p.0);
            let ys = series.points.iter().map(|p| p.1);
            let x = (xs.clone().fold(f64::MAX, f64::min), xs.fold(f64::MIN, f64::max));
            let y = (ys.clone().fold(f64::MAX, f64::min), ys.fold(f64::MIN, f64::max));
            let axis = axis_index(series.axis);
            push_area(&mut areas, Layer::Below, axis, fill, None, (x, y));
        }
    }
    for shape in state.shapes.iter().filter(|s| s.kind == ShapeKind::Rect) {
        let (axis, y0) = data_y(layout, shape.y.0, shape.yref);
        let (_, y1) = data_y(layout, shape.y.1, shape.yref);
        let x = (
            data_x(layout, shape.x.0, shape.xref),
            data_x(layout, shape.x.1, shape.xref),
        );
        let fill = shape.fill.unwrap_or("transparent");
        let stroke = shape.stroke.map(|s| (s.color, s.width));
        push_area(&mut areas, shape.layer, axis, fill, stroke, (x, (y0, y1)));
    }
    areas
}

fn area_series(group: &AreaGroup) -> Line {
    let mut style = ItemStyle::new().color(group.fill);
    if let Some((color, width)) = group.stroke {
        style = style.border_color(color).border_width(width);
    }

    let data = group
        .boxes
        .iter()
        .map(|&((x0, x1), (y0, y1))| {
            (
                MarkAreaData::new().x_axis(x0.to_string()).y_axis(y0.to_string()),
                MarkAreaData::new().x_axis(x1.to_string()).y_axis(y1.to_string()),
            )
        })
        .collect();

    Line::new()
        .name("")
        .y_axis_index(group.axis)
        .data(Vec::<Vec<f64>>::new())
        .mark_area(MarkArea::new().item_style(style).data(data))
}

fn line_series(
    series: &Series,
    color: &'static str,
    width: f64,
    curve: Curve,
    marker: Option<Marker>,
) -> Line {
    let points = match curve {
        Curve::Step => step_points(&series.points),
        Curve::Linear | Curve::Spline => series.points.clone(),
    };
    let data: Vec<Vec<f64>> = points.into_iter().map(|(x, y)| vec![x, y]).collect();

    let line = Line::new()
        .name(series.name.as_str())
        .y_axis_index(axis_index(series.axis))
        .data(data)
        .line_style(LineStyle::new().width(width).color(color))
        .item_style(ItemStyle::new().color(color).opacity(series.opacity));

    match marker {
        Some(Marker::Diamond) => line.symbol(Symbol::Diamond).symbol_size(6),
        Some(Marker::Circle) => line.symbol(Symbol::Circle).symbol_size(6),
        None => line.symbol(Symbol::None),
    }
}

fn shape_line(layout: &Layout, shape: &Shape) -> Option<Line> {
    let stroke = shape.stroke?;
    let (axis, y0) = data_y(layout, shape.y.0, shape.yref);
    let (_, y1) = data_y(layout, shape.y.1, shape.yref);
    let x0 = data_x(layout, shape.x.0, shape.xref);
    let x1 = data_x(layout, shape.x.1, shape.xref);

    Some(
        Line::new()
            .name("")
            .y_axis_index(axis)
            .data(vec![vec![x0, y0], vec![x1, y1]])
            .symbol(Symbol::None)
            .line_style(LineStyle::new().width(stroke.width).color(stroke.color)),
    )
}

fn shape_lines(state: &Rendered, layer: Layer) -> Vec<Line> {
    state
        .shapes
        .iter()
        .filter(|s| s.kind == ShapeKind::Line && s.layer == layer)
        .filter_map(|s| shape_line(&state.layout, s))
        .collect()
}

/// Canvas percentages of a plot-area point given as axis fractions
fn grid_position(x_fraction: f64, y_fraction: f64) -> (String, String) {
    let left = GRID_LEFT + x_fraction * (100.0 - GRID_LEFT - GRID_RIGHT);
    let top = GRID_TOP + (1.0 - y_fraction) * (100.0 - GRID_TOP - GRID_BOTTOM);
    (format!("{:.1}%", left), format!("{:.1}%", top))
}

/// Explicit tick labels placed along the plot edges
fn tick_titles(layout: &Layout) -> Vec<Title> {
    let label = |text: &str, left: &str, top: &str, color: &'static str| {
        Title::new()
            .text(text)
            .left(left)
            .top(top)
            .text_style(TextStyle::new().color(color).font_size(layout.font_size))
    };
    let below_plot = format!("{:.1}%", 100.0 - GRID_BOTTOM + 1.0);
    let left_of_plot = format!("{:.1}%", GRID_LEFT - 4.0);
    let right_of_plot = format!("{:.1}%", 100.0 - GRID_RIGHT + 0.5);

    let mut titles = Vec::new();
    let x = &layout.x;
    let x_color = x.color.unwrap_or(COLOR_TEXT);
    for (value, text) in &x.ticks {
        let (left, _) = grid_position(x.fraction(*value), 0.0);
        titles.push(label(text.as_str(), left.as_str(), below_plot.as_str(), x_color));
    }
    for (axis, left) in [(&layout.energy, &left_of_plot), (&layout.comfort, &right_of_plot)] {
        let color = axis.color.unwrap_or(COLOR_TEXT);
        for (value, text) in &axis.ticks {
            let (_, top) = grid_position(0.0, axis.fraction(*value));
            titles.push(label(text.as_str(), left.as_str(), top.as_str(), color));
        }
    }
    titles
}

fn annotation_title(layout: &Layout, annotation: &Annotation) -> Title {
    let x_fraction = match annotation.xref {
        XRef::Data => layout.x.fraction(annotation.x),
        XRef::Paper => annotation.x.clamp(0.0, 1.0),
    };
    let y_fraction = match annotation.yref {
        YRef::Axis(axis) => layout.y_axis(axis).map_or(0.0, |a| a.fraction(annotation.y)),
        YRef::Paper => annotation.y.clamp(0.0, 1.0),
    };

    let left = format!("{:.1}%", x_fraction * 100.0);
    let top = format!("{:.1}%", (1.0 - y_fraction) * 100.0);
    let mut style = TextStyle::new()
        .color(annotation.color)
        .font_size(annotation.font_size);
    if annotation.bold {
        style = style.font_weight("bold");
    }

    Title::new()
        .text(annotation.text.as_str())
        .left(left.as_str())
        .top(top.as_str())
        .text_style(style)
}

fn compose(state: &Rendered) -> Chart {
    let layout = &state.layout;

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .grid(
            Grid::new()
                .left(format!("{}%", GRID_LEFT).as_str())
                .right(format!("{}%", GRID_RIGHT).as_str())
                .bottom(format!("{}%", GRID_BOTTOM).as_str())
                .top(format!("{}%", GRID_TOP).as_str())
                .contain_label(true),
        )
        .x_axis(value_axis(&layout.x, layout.font_size))
        .y_axis(value_axis(&layout.energy, layout.font_size))
        .y_axis(value_axis(&layout.comfort, layout.font_size));

    if layout.show_legend {
        let names: Vec<String> = state
            .series
            .iter()
            .filter(|s| matches!(s.kind, SeriesKind::Line { .. }) && s.opacity > 0.0)
            .map(|s| s.name.clone())
            .collect();
        chart = chart.legend(
            Legend::new()
                .data(names)
                .top("1%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(layout.font_size)),
        );
    }

    let areas = area_groups(state);

    // Below the value lines: scenario regions, bands and guides
    for group in areas.iter().filter(|g| g.layer == Layer::Below) {
        chart = chart.series(area_series(group));
    }
    for line in shape_lines(state, Layer::Below) {
        chart = chart.series(line);
    }

    for series in state.series.iter().filter(|s| s.opacity > 0.0) {
        if let SeriesKind::Line {
            color,
            width,
            curve,
            marker,
        } = series.kind
        {
            chart = chart.series(line_series(series, color, width, curve, marker));
        }
    }

    for group in areas.iter().filter(|g| g.layer == Layer::Above) {
        chart = chart.series(area_series(group));
    }
    for line in shape_lines(state, Layer::Above) {
        chart = chart.series(line);
    }

    for title in tick_titles(layout) {
        chart = chart.title(title);
    }
    for annotation in &state.annotations {
        chart = chart.title(annotation_title(layout, annotation));
    }

    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Overlay, build_year_model, page_overlay, persistent_overlay};
    use crate::config::Viewport;
    use crate::data::{SubReading, YearReading};
    use crate::date::CalendarDate;
    use crate::scenario::ScenarioId;

    fn year_data() -> Vec<YearReading> {
        (1..=3)
            .map(|d| YearReading {
                day: CalendarDate::parse_month_day(&format!("{}/1", d)).unwrap(),
                work: SubReading {
                    energy: 1.0,
                    comfort: 0.2,
                    scenario: ScenarioId::Optimal,
                },
                rest: SubReading {
                    energy: 0.4,
                    comfort: -0.8,
                    scenario: ScenarioId::ThermalNeglect,
                },
            })
            .collect()
    }

    #[test]
    fn test_step_points_expand_horizontal_first() {
        let pts = step_points(&[(0.0, 1.0), (1.0, 2.0), (2.0, 0.5)]);
        assert_eq!(
            pts,
            vec![(0.0, 1.0), (1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 0.5)]
        );
        assert!(step_points(&[]).is_empty());
    }

    #[test]
    fn test_nothing_rendered() {
        let renderer = EchartsRenderer::new();
        assert!(renderer.chart().is_none());
        assert!(matches!(
            renderer.save_png("/tmp/never.png"),
            Err(ExportError::NothingRendered)
        ));
    }

    #[test]
    fn test_render_then_partial_updates() {
        let data = year_data();
        let model = build_year_model(&data, &Viewport::default(), 1);
        let mut renderer = EchartsRenderer::new();
        renderer.render(&model.series, &model.shapes, &model.annotations, &model.layout);
        assert!(renderer.chart().is_some());
        assert_eq!(renderer.size(), Some((1216, 560)));

        renderer.set_opacity(&[0, 1, 999], &[0.0, 0.0, 1.0]);
        let state = renderer.state.as_ref().unwrap();
        assert_eq!(state.series.len(), model.series.len());
        assert_eq!(state.series[0].opacity, 0.0);
        assert_eq!(state.series[0].points, model.series[0].points);

        let overlay = Overlay::merged(&persistent_overlay(), &page_overlay(3));
        renderer.update_overlay(&overlay.annotations, &overlay.shapes);
        let state = renderer.state.as_ref().unwrap();
        assert_eq!(state.shapes, overlay.shapes);
        assert_eq!(state.series.len(), model.series.len());
    }

    #[test]
    fn test_tiny_layout_keeps_one_pixel() {
        let model = build_year_model(&year_data(), &Viewport::new(0.4, 0.5), 1);
        let mut renderer = EchartsRenderer::new();
        renderer.render(&model.series, &model.shapes, &model.annotations, &model.layout);
        assert_eq!(renderer.size(), Some((1, 1)));
    }

    #[test]
    fn test_explicit_ticks_become_edge_labels() {
        let model = build_year_model(&year_data(), &Viewport::default(), 1);
        // Twelve month ticks and seven comfort ticks
        assert_eq!(tick_titles(&model.layout).len(), 19);

        let (left, top) = grid_position(0.0, 1.0);
        assert_eq!((left.as_str(), top.as_str()), ("6.0%", "15.0%"));
        let (left, top) = grid_position(1.0, 0.0);
        assert_eq!((left.as_str(), top.as_str()), ("94.0%", "90.0%"));
    }

    #[test]
    fn test_call_outs_draw_above_value_lines() {
        let model = build_year_model(&year_data(), &Viewport::default(), 3);
        let mut renderer = EchartsRenderer::new();
        renderer.render(&model.series, &model.shapes, &model.annotations, &model.layout);

        let areas = area_groups(renderer.state.as_ref().unwrap());
        let above: Vec<&AreaGroup> = areas.iter().filter(|g| g.layer == Layer::Above).collect();
        assert_eq!(above.iter().map(|g| g.boxes.len()).sum::<usize>(), 2);
        assert!(above.iter().all(|g| g.stroke.is_some()));
        // Two scenarios per period over three days
        let below: usize = areas
            .iter()
            .filter(|g| g.layer == Layer::Below)
            .map(|g| g.boxes.len())
            .sum();
        assert_eq!(below, 6);
    }

    #[test]
    fn test_paper_coordinates_map_onto_axes() {
        let model = build_year_model(&year_data(), &Viewport::default(), 1);
        let layout = &model.layout;
        assert_eq!(data_x(layout, 0.0, XRef::Paper), 1.0);
        assert_eq!(data_x(layout, 1.0, XRef::Paper), 366.0);
        assert_eq!(data_y(layout, 1.0, YRef::Paper), (0, 2.0));
        assert_eq!(data_y(layout, -0.5, YRef::Axis(YAxis::Comfort)), (1, -0.5));
    }
}
