//! Shared UI constants: colors and fixed element sizes.

pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#1f2937";
pub const BG_SURFACE: &str = "#374151";

pub const BORDER_DEFAULT: &str = "#374151";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";

pub const RULER_BAR_FILL: &str = "rgba(255, 255, 255, 0.25)";
pub const SEGMENT_FILL: &str = "rgba(255, 255, 255, 0.10)";
pub const PLAYHEAD_COLOR: &str = "#ca8a04";

/// Height of the ruler bar and of a keyframe segment.
pub const BAR_HEIGHT_PX: f64 = 24.0;
/// Height of one track row; segments line up with it.
pub const ROW_HEIGHT_PX: f64 = 40.0;

/// Config file the demo window looks for in the working directory.
pub const CONFIG_FILE_NAME: &str = "timeline.json";
