//! View controllers: selection state plus the render contract
//!
//! Controllers own everything that changes during a session (selected day,
//! page, filter, visibility, viewport). They decide how much to rebuild and
//! push the result through [`Render`].

mod dashboard;
mod day;
mod debounce;
mod year;

pub use dashboard::{Dashboard, Panel};
pub use day::{DayView, SliderMarker};
pub use debounce::Debouncer;
pub use year::{ScenarioFilter, YearView};

use crate::chart::{Annotation, Layout, Series, Shape};

/// Drawing collaborator. Trace indices refer to positions in the last
/// `series` slice passed to [`Render::render`].
pub trait Render {
    /// Full draw, replacing whatever was shown
    fn render(
        &mut self,
        series: &[Series],
        shapes: &[Shape],
        annotations: &[Annotation],
        layout: &Layout,
    );

    /// Replace annotations and shapes, keeping traces and layout
    fn update_overlay(&mut self, annotations: &[Annotation], shapes: &[Shape]);

    /// Set the opacity of the given traces; `values` pairs with `traces`
    fn set_opacity(&mut self, traces: &[usize], values: &[f64]);
}
