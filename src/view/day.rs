//! Day view controller: one day at a time, picked with a slider

use log::debug;

use super::Render;
use crate::aggregate::{DayGroups, ScenarioHourSummary, group_by_day, summarize_hours};
use crate::chart::{ChartModel, build_day_model};
use crate::config::{DashboardConfig, Highlight, Viewport};
use crate::data::Reading;
use crate::date::{CalendarDate, sorted_unique_days};
use crate::error::ViewError;

/// A highlighted day resolved to a slider position
#[derive(Debug, Clone, PartialEq)]
pub struct SliderMarker {
    pub index: usize,
    /// Offset along the slider, 0-100
    pub position_pct: f64,
    pub label: String,
}

#[derive(Debug)]
pub struct DayView {
    groups: DayGroups,
    days: Vec<CalendarDate>,
    current: usize,
    viewport: Viewport,
    markers: Vec<SliderMarker>,
}

impl DayView {
    pub fn new(readings: Vec<Reading>, config: &DashboardConfig) -> Self {
        let groups = group_by_day(readings);
        let days = sorted_unique_days(groups.days());
        let markers = slider_markers(&days, &config.highlights);

        debug!(
            "day view: {} days, {} readings, {} slider markers",
            days.len(),
            groups.reading_count(),
            markers.len()
        );

        Self {
            groups,
            days,
            current: 0,
            viewport: config.viewport,
            markers,
        }
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Slider domain, ascending
    pub fn days(&self) -> &[CalendarDate] {
        &self.days
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_day(&self) -> Option<CalendarDate> {
        self.days.get(self.current).copied()
    }

    /// Readings of the selected day in hour order
    pub fn current_rows(&self) -> &[Reading] {
        self.current_day()
            .and_then(|day| self.groups.get(&day))
            .unwrap_or(&[])
    }

    pub fn markers(&self) -> &[SliderMarker] {
        &self.markers
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn summary(&self) -> ScenarioHourSummary {
        summarize_hours(self.current_rows())
    }

    /// Model of the selected day, `None` for an empty dataset
    pub fn model(&self) -> Option<ChartModel> {
        self.current_day()
            .map(|day| build_day_model(day, self.current_rows(), &self.viewport))
    }

    /// Draw the selected day
    pub fn show(&self, renderer: &mut dyn Render) -> Result<(), ViewError> {
        let model = self.model().ok_or(ViewError::DayOutOfRange {
            index: self.current,
            count: 0,
        })?;
        renderer.render(&model.series, &model.shapes, &model.annotations, &model.layout);
        Ok(())
    }

    /// Move the slider and redraw
    pub fn select_day(&mut self, index: usize, renderer: &mut dyn Render) -> Result<(), ViewError> {
        if index >= self.days.len() {
            return Err(ViewError::DayOutOfRange {
                index,
                count: self.days.len(),
            });
        }
        self.current = index;
        debug!("day view: selected {}", self.days[index]);
        self.show(renderer)
    }

    pub fn select_date(
        &mut self,
        day: CalendarDate,
        renderer: &mut dyn Render,
    ) -> Result<(), ViewError> {
        let index = self
            .days
            .binary_search(&day)
            .map_err(|_| ViewError::DayNotFound(day.to_string()))?;
        self.select_day(index, renderer)
    }

    /// New viewport: full rebuild of the selected day
    pub fn resize(
        &mut self,
        viewport: Viewport,
        renderer: &mut dyn Render,
    ) -> Result<(), ViewError> {
        self.viewport = viewport;
        self.show(renderer)
    }
}

/// Resolve highlights against the slider domain; days not in the data are dropped
fn slider_markers(days: &[CalendarDate], highlights: &[Highlight]) -> Vec<SliderMarker> {
    let last = days.len().saturating_sub(1);
    highlights
        .iter()
        .filter_map(|h| match days.binary_search(&h.day) {
            Ok(index) => Some(SliderMarker {
                index,
                position_pct: if last == 0 {
                    0.0
                } else {
                    index as f64 / last as f64 * 100.0
                },
                label: h.label.clone(),
            }),
            Err(_) => {
                debug!("highlight {} not in dataset", h.day);
                None
            }
        })
        .collect()
}
