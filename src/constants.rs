// DOM wiring constants for the spark overlay canvas.

// Canvas element the engine draws into. The host page positions it over the
// clickable area with `pointer-events: none`.
pub const SPARK_CANVAS_ID: &str = "spark-canvas";

// Optional `data-*` attributes on the canvas element; each overrides one
// config field, malformed values keep the default.
pub const ATTR_COLOR: &str = "data-spark-color";
pub const ATTR_SIZE: &str = "data-spark-size";
pub const ATTR_RADIUS: &str = "data-spark-radius";
pub const ATTR_COUNT: &str = "data-spark-count";
pub const ATTR_DURATION: &str = "data-spark-duration";
pub const ATTR_EASING: &str = "data-spark-easing";
pub const ATTR_EXTRA_SCALE: &str = "data-spark-extra-scale";

// Attribute watched on the document element for theme flips (dark-mode
// toggles swap a class there, which changes resolved CSS variables).
pub const THEME_ATTR: &str = "class";
