//! Year view controller: pages, scenario filter and line toggles
//!
//! Traces are built once. Filter and visibility changes only touch opacity,
//! a page change only touches the overlay, a resize only rebuilds the layout.

use std::fmt;

use log::{debug, trace};

use super::Render;
use crate::chart::{
    FIRST_PAGE, LineSeries, Overlay, Series, background_index, build_year_layout,
    build_year_traces, line_index, page_overlay, persistent_overlay,
};
use crate::config::Viewport;
use crate::data::{Period, YearReading};
use crate::scenario::ScenarioId;

/// Which background regions are visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScenarioFilter {
    None,
    #[default]
    All,
    Only(ScenarioId),
}

impl ScenarioFilter {
    /// Parse "none", "all", or a scenario code/name
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "none" => Some(ScenarioFilter::None),
            "all" => Some(ScenarioFilter::All),
            other => ScenarioId::lookup(other).map(ScenarioFilter::Only),
        }
    }

    pub fn shows(self, scenario: ScenarioId) -> bool {
        match self {
            ScenarioFilter::None => false,
            ScenarioFilter::All => true,
            ScenarioFilter::Only(id) => id == scenario,
        }
    }
}

impl fmt::Display for ScenarioFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioFilter::None => f.write_str("none"),
            ScenarioFilter::All => f.write_str("all"),
            ScenarioFilter::Only(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug)]
pub struct YearView {
    data: Vec<YearReading>,
    /// Trace list as last rendered, opacities included
    series: Vec<Series>,
    /// Persistent entries plus the current page's call-outs
    overlay: Overlay,
    page: u32,
    filter: ScenarioFilter,
    visible: [bool; 4],
    viewport: Viewport,
}

impl YearView {
    pub fn new(data: Vec<YearReading>, viewport: Viewport) -> Self {
        let series = build_year_traces(&data);
        let mut overlay = persistent_overlay();
        overlay.replace_page(page_overlay(FIRST_PAGE));
        debug!("year view: {} days, {} traces", data.len(), series.len());

        Self {
            data,
            series,
            overlay,
            page: FIRST_PAGE,
            filter: ScenarioFilter::All,
            visible: [true; 4],
            viewport,
        }
    }

    pub fn data(&self) -> &[YearReading] {
        &self.data
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn filter(&self) -> ScenarioFilter {
        self.filter
    }

    pub fn is_visible(&self, line: LineSeries) -> bool {
        self.visible[line as usize]
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Number of days whose `period` half falls in each scenario
    pub fn scenario_days(&self, period: Period) -> [(ScenarioId, usize); 4] {
        ScenarioId::ALL.map(|id| {
            let days = self
                .data
                .iter()
                .filter(|r| r.period(period).classify() == id)
                .count();
            (id, days)
        })
    }

    /// Full draw from the stored traces and overlay
    pub fn show(&self, renderer: &mut dyn Render) {
        renderer.render(
            &self.series,
            &self.overlay.shapes,
            &self.overlay.annotations,
            &build_year_layout(&self.viewport),
        );
    }

    /// Swap the page call-outs; persistent entries are untouched
    pub fn set_page(&mut self, page: u32, renderer: &mut dyn Render) {
        if page == self.page {
            return;
        }
        self.overlay.replace_page(page_overlay(page));
        self.page = page;
        debug!("year view: page {}", page);
        renderer.update_overlay(&self.overlay.annotations, &self.overlay.shapes);
    }

    /// Show only backgrounds matching `filter`; lines keep their visibility
    pub fn set_filter(&mut self, filter: ScenarioFilter, renderer: &mut dyn Render) {
        self.filter = filter;

        let mut traces = Vec::with_capacity(self.data.len() * 2);
        let mut values = Vec::with_capacity(self.data.len() * 2);
        for (day, reading) in self.data.iter().enumerate() {
            for period in Period::ALL {
                traces.push(background_index(day, period));
                values.push(opacity(filter.shows(reading.period(period).classify())));
            }
        }

        trace!("year view: filter {} over {} regions", filter, traces.len());
        self.apply_opacity(&traces, &values, renderer);
    }

    pub fn set_series_visible(
        &mut self,
        line: LineSeries,
        visible: bool,
        renderer: &mut dyn Render,
    ) {
        self.visible[line as usize] = visible;
        let index = line_index(self.data.len(), line);
        self.apply_opacity(&[index], &[opacity(visible)], renderer);
    }

    /// Re-layout for a new viewport. Trace data and opacities are kept.
    pub fn resize(&mut self, viewport: Viewport, renderer: &mut dyn Render) {
        self.viewport = viewport;
        self.show(renderer);
    }

    fn apply_opacity(&mut self, traces: &[usize], values: &[f64], renderer: &mut dyn Render) {
        for (&index, &value) in traces.iter().zip(values) {
            if let Some(series) = self.series.get_mut(index) {
                series.opacity = value;
            }
        }
        renderer.set_opacity(traces, values);
    }
}

fn opacity(visible: bool) -> f64 {
    if visible { 1.0 } else { 0.0 }
}
