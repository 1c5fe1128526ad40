//! Dashboard defaults and viewport geometry

use std::time::Duration;

use log::debug;

use crate::date::CalendarDate;

/// Viewports at or below this width get the compact font
pub const NARROW_VIEWPORT_WIDTH: f64 = 768.0;

/// Quiet window before a resize burst triggers a re-layout
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Curated slider highlights: (day/month/year, label)
pub const DEFAULT_HIGHLIGHTS: [(&str, &str); 4] = [
    ("17/02/2019", "17th Feb: A Summer Sunday"),
    ("26/06/2019", "26th Jun: A Winter Wednesday"),
    ("07/05/2019", "7th May: A Typical Tuesday in Fall"),
    ("05/10/2019", "5th Oct: A Spring Saturday"),
];

/// Size of the window hosting the charts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_narrow(&self) -> bool {
        self.width <= NARROW_VIEWPORT_WIDTH
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// A day called out on the day-view slider
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub day: CalendarDate,
    pub label: String,
}

impl Highlight {
    /// Parse a highlight, `None` (logged) if the date is unreadable
    pub fn parse(day: &str, label: &str) -> Option<Self> {
        match CalendarDate::parse(day) {
            Ok(day) => Some(Self {
                day,
                label: label.to_string(),
            }),
            Err(e) => {
                debug!("dropping highlight '{}': {}", label, e);
                None
            }
        }
    }
}

/// Session-wide settings
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub viewport: Viewport,
    pub resize_debounce: Duration,
    pub highlights: Vec<Highlight>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            resize_debounce: RESIZE_DEBOUNCE,
            highlights: DEFAULT_HIGHLIGHTS
                .iter()
                .filter_map(|(day, label)| Highlight::parse(day, label))
                .collect(),
        }
    }
}
