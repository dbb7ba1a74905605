//! Constants used throughout hanzi-strokes

/// Side length of the square target canvas, in output units
pub const CANVAS_SIZE: f64 = 1024.0;

/// Element id of the group holding stroke outlines
pub const STROKES_LAYER_ID: &str = "layer-strokes";
/// Label keywords (lowercase) identifying the strokes group
pub const STROKES_LABEL_KEYWORDS: &[&str] = &["strokes", "nét"];

/// Element id of the group holding stroke medians
pub const MEDIANS_LAYER_ID: &str = "layer-medians";
/// Label keywords (lowercase) identifying the medians group
pub const MEDIANS_LABEL_KEYWORDS: &[&str] = &["median", "trục"];

/// Below this magnitude a polynomial coefficient is treated as zero
/// when solving for Bezier extrema
pub const COEFF_EPSILON: f64 = 1e-12;

/// Decimal places kept when serializing path data
pub const NUM_PRECISION: usize = 6;
