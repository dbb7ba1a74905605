//! Fit, center and balance a glyph on the square output canvas.

use log::{info, warn};

use crate::constants::CANVAS_SIZE;
use crate::errors::{Error, Result};
use crate::geometry::{AffineTransform, BoundingBox};
use crate::glyph::GlyphGeometry;
use crate::path::NormalizedPath;
use crate::types::fstr;

/// Placement options for the centering pass.
///
/// With `fit` unset the glyph keeps its size and is only translated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FitConfig {
    /// Scale uniformly so the glyph fills the canvas less padding
    pub fit: bool,
    pub pad_x: f64,
    pub pad_y: f64,
    /// Nudge applied after centering and balancing
    pub bias_x: f64,
    pub bias_y: f64,
    /// Negate `bias_y`, for targets where +y points up
    pub flip_y_bias: bool,
    pub balance_x: bool,
    pub balance_y: bool,
}

impl FitConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, pad) in [("pad-x", self.pad_x), ("pad-y", self.pad_y)] {
            if !pad.is_finite() || pad < 0. || 2. * pad >= CANVAS_SIZE {
                return Err(Error::InvalidValue(name.to_owned(), pad.to_string()));
            }
        }
        for (name, bias) in [("bias-x", self.bias_x), ("bias-y", self.bias_y)] {
            if !bias.is_finite() {
                return Err(Error::InvalidValue(name.to_owned(), bias.to_string()));
            }
        }
        Ok(())
    }
}

/// Aggregate bbox over all strokes which have one
pub fn glyph_bbox<'a>(strokes: impl IntoIterator<Item = &'a NormalizedPath>) -> Option<BoundingBox> {
    BoundingBox::union(strokes.into_iter().filter_map(|s| s.bbox()))
}

/// Derive the single scale + translate placing `bbox` on the canvas.
pub fn fit_transform(bbox: &BoundingBox, config: &FitConfig) -> AffineTransform {
    let (width, height) = (bbox.width(), bbox.height());
    let scale = if config.fit && width > 0. && height > 0. {
        f64::min(
            (CANVAS_SIZE - 2. * config.pad_x) / width,
            (CANVAS_SIZE - 2. * config.pad_y) / height,
        )
    } else {
        1.
    };

    let (cx, cy) = bbox.center();
    let mut dx = CANVAS_SIZE / 2. - scale * cx;
    let mut dy = CANVAS_SIZE / 2. - scale * cy;

    if config.balance_x {
        dx += balance_shift(bbox.x1, bbox.x2, scale, dx);
    }
    if config.balance_y {
        dy += balance_shift(bbox.y1, bbox.y2, scale, dy);
    }

    dx += config.bias_x;
    dy += if config.flip_y_bias {
        -config.bias_y
    } else {
        config.bias_y
    };

    AffineTransform::scale_translate(scale, dx, dy)
}

/// Shift equalizing the gaps either side of `[lo, hi]` once mapped by `scale`, `offset`
fn balance_shift(lo: f64, hi: f64, scale: f64, offset: f64) -> f64 {
    let near_gap = lo * scale + offset;
    let far_gap = CANVAS_SIZE - (hi * scale + offset);
    (far_gap - near_gap) / 2.
}

impl GlyphGeometry {
    /// Reposition strokes and medians on the canvas per `config`.
    ///
    /// Returns the geometry unchanged if no stroke has any points.
    pub fn centered(&self, config: &FitConfig) -> Self {
        let Some(bbox) = self.bbox() else {
            warn!("No stroke geometry to center; leaving glyph unchanged");
            return self.clone();
        };
        let xf = fit_transform(&bbox, config);
        info!(
            "bbox ({}, {}) - ({}, {}); scale {}; translate ({}, {})",
            fstr(bbox.x1),
            fstr(bbox.y1),
            fstr(bbox.x2),
            fstr(bbox.y2),
            fstr(xf.sx),
            fstr(xf.dx),
            fstr(xf.dy)
        );
        self.transformed(&xf)
    }
}
