//! Color definitions for charts

/// Common colors
pub(crate) const COLOR_BACKGROUND: &str = "#FFFFFF"; // White
pub(crate) const COLOR_TEXT: &str = "#2B2B2B"; // Near black
pub(crate) const COLOR_GRID: &str = "rgba(200, 200, 200, 0.2)"; // Grid lines

/// Day view
pub(super) const DAY_HVAC: &str = "#2980b9"; // Blue, HVAC line
pub(super) const DAY_PMV: &str = "#c0392b"; // Red, PMV line
pub(super) const DAY_ENERGY_AXIS: &str = "#3498db";
pub(super) const DAY_COMFORT_BAND: &str = "rgba(103, 78, 173, 0.15)"; // Light purple

/// Year view line colors
pub(super) const HVAC_WORK: &str = "#0041C4"; // Dark blue
pub(super) const PMV_WORK: &str = "#991F1B"; // Dark red
pub(super) const HVAC_BREAK: &str = "#3FA9F5"; // Light blue
pub(super) const PMV_BREAK: &str = "#FF6F61"; // Coral

/// Year view axes and guides
pub(super) const YEAR_ENERGY_AXIS: &str = "rgb(35, 126, 165)";
pub(super) const YEAR_COMFORT_AXIS: &str = "rgb(154, 53, 37)";
pub(super) const SEASON_MARK: &str = "rgba(0, 0, 0, 0.75)";
pub(super) const PMV_THRESHOLD: &str = "rgba(178, 120, 255, 0.97)"; // Violet

/// Page call-outs: (stroke, fill)
pub(super) const CALLOUT_MILD: (&str, &str) = ("black", "rgba(174, 125, 125, 0.1)");
pub(super) const CALLOUT_PURPLE: (&str, &str) = ("purple", "rgba(0, 0, 255, 0.1)");
pub(super) const CALLOUT_GREEN: (&str, &str) = ("green", "rgba(0, 255, 0, 0.1)");
pub(super) const CALLOUT_ORANGE: (&str, &str) = ("darkorange", "rgba(255, 165, 0, 0.1)");
pub(super) const CALLOUT_DARKGREEN: (&str, &str) = ("darkgreen", "rgba(0, 128, 0, 0.1)");
pub(super) const CALLOUT_BLUE: (&str, &str) = ("darkblue", "rgba(0, 0, 139, 0.1)");
pub(super) const CALLOUT_HINT: &str = "#68bc28"; // Green hint text
