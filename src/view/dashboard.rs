//! Both views side by side, sharing one debounced resize stream

use std::time::Instant;

use log::{debug, error};

use super::{DayView, Debouncer, Render, YearView};
use crate::config::{DashboardConfig, Viewport};
use crate::data::{Reading, YearReading};
use crate::error::{DataLoadError, ViewError};

/// A view, or the message shown in its place when its data failed to load
#[derive(Debug)]
pub enum Panel<V> {
    Ready(V),
    Unavailable(String),
}

impl<V> Panel<V> {
    /// Wrap a load result; a failure becomes a visible message
    pub fn from_load<T>(
        loaded: Result<T, DataLoadError>,
        build: impl FnOnce(T) -> V,
    ) -> Self {
        match loaded {
            Ok(data) => Panel::Ready(build(data)),
            Err(e) => {
                error!("{}", e);
                Panel::Unavailable(format!("Error loading data: {}", e))
            }
        }
    }

    pub fn ready(&self) -> Option<&V> {
        match self {
            Panel::Ready(view) => Some(view),
            Panel::Unavailable(_) => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut V> {
        match self {
            Panel::Ready(view) => Some(view),
            Panel::Unavailable(_) => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Panel::Ready(_) => None,
            Panel::Unavailable(msg) => Some(msg.as_str()),
        }
    }
}

#[derive(Debug)]
pub struct Dashboard {
    day: Panel<DayView>,
    year: Panel<YearView>,
    resize: Debouncer<Viewport>,
}

impl Dashboard {
    pub fn new(
        hourly: Result<Vec<Reading>, DataLoadError>,
        year: Result<Vec<YearReading>, DataLoadError>,
        config: &DashboardConfig,
    ) -> Self {
        Self {
            day: Panel::from_load(hourly, |rows| DayView::new(rows, config)),
            year: Panel::from_load(year, |rows| YearView::new(rows, config.viewport)),
            resize: Debouncer::new(config.resize_debounce),
        }
    }

    pub fn day(&self) -> &Panel<DayView> {
        &self.day
    }

    pub fn day_mut(&mut self) -> &mut Panel<DayView> {
        &mut self.day
    }

    pub fn year(&self) -> &Panel<YearView> {
        &self.year
    }

    pub fn year_mut(&mut self) -> &mut Panel<YearView> {
        &mut self.year
    }

    /// Initial draw of every available view
    pub fn show(&self, day: &mut dyn Render, year: &mut dyn Render) -> Result<(), ViewError> {
        if let Some(view) = self.year.ready() {
            view.show(year);
        }
        if let Some(view) = self.day.ready() {
            view.show(day)?;
        }
        Ok(())
    }

    /// Record a resize; nothing is rebuilt until the window goes quiet
    pub fn on_resize(&mut self, viewport: Viewport, now: Instant) {
        self.resize.trigger(viewport, now);
    }

    /// Apply a settled resize to both views. Returns whether anything was redrawn.
    pub fn tick(
        &mut self,
        now: Instant,
        day: &mut dyn Render,
        year: &mut dyn Render,
    ) -> Result<bool, ViewError> {
        let Some(viewport) = self.resize.poll(now) else {
            return Ok(false);
        };
        debug!("resize settled at {}x{}", viewport.width, viewport.height);

        if let Some(view) = self.year.ready_mut() {
            view.resize(viewport, year);
        }
        if let Some(view) = self.day.ready_mut() {
            view.resize(viewport, day)?;
        }
        Ok(true)
    }
}
