use std::str::FromStr;

use super::Point;
use crate::errors::{Error, Result};
use crate::types::{attr_split, strp};

/// Source coordinate space of an SVG document, from its `viewBox`
/// (or `width` / `height` when no usable `viewBox` is present).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Result<Self> {
        let vb = Self {
            min_x,
            min_y,
            width,
            height,
        };
        let all_finite = [min_x, min_y, width, height].iter().all(|v| v.is_finite());
        if !all_finite || width <= 0. || height <= 0. {
            return Err(Error::InvalidValue(
                "viewBox".to_string(),
                format!("{min_x} {min_y} {width} {height}"),
            ));
        }
        Ok(vb)
    }
}

impl FromStr for ViewBox {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let parts = attr_split(value)
            .map(|v| strp(&v))
            .collect::<Result<Vec<_>>>()?;
        if let [min_x, min_y, width, height] = parts[..] {
            Self::new(min_x, min_y, width, height)
        } else {
            Err(Error::InvalidValue("viewBox".to_string(), value.to_string()))
        }
    }
}

/// Shape parameters of an elliptical arc segment, excluding its endpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcShape {
    pub rx: f64,
    pub ry: f64,
    /// x-axis rotation, in degrees
    pub rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

/// Per-axis scale followed by translation, optionally mirroring the y axis.
///
/// Maps `(x, y)` to `(x * sx + dx, y * sy + dy)`, or to `(x * sx + dx, dy - y * sy)`
/// when `flip_y` is set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineTransform {
    pub sx: f64,
    pub sy: f64,
    pub dx: f64,
    pub dy: f64,
    pub flip_y: bool,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    pub fn identity() -> Self {
        Self::scale_translate(1., 0., 0.)
    }

    /// Uniform scale `s` followed by translation `(dx, dy)`; never flips.
    pub fn scale_translate(s: f64, dx: f64, dy: f64) -> Self {
        Self {
            sx: s,
            sy: s,
            dx,
            dy,
            flip_y: false,
        }
    }

    /// Map a source viewBox onto a `size` x `size` canvas with the y axis
    /// pointing up, so the viewBox's top edge lands on `y = size`.
    pub fn viewbox_to_canvas(vb: &ViewBox, size: f64) -> Self {
        let sx = size / vb.width;
        let sy = size / vb.height;
        Self {
            sx,
            sy,
            dx: -vb.min_x * sx,
            dy: size + vb.min_y * sy,
            flip_y: true,
        }
    }

    pub fn map_point(&self, (x, y): Point) -> Point {
        let y = if self.flip_y {
            self.dy - y * self.sy
        } else {
            y * self.sy + self.dy
        };
        (x * self.sx + self.dx, y)
    }

    /// Radii scale per axis. Mirroring reverses the direction of travel around
    /// the ellipse, so under a flip the rotation is negated and the sweep
    /// flag inverted; the large-arc flag is unaffected.
    pub fn map_arc(&self, arc: ArcShape) -> ArcShape {
        let (rotation, sweep) = if self.flip_y {
            (-arc.rotation, !arc.sweep)
        } else {
            (arc.rotation, arc.sweep)
        };
        ArcShape {
            rx: (arc.rx * self.sx).abs(),
            ry: (arc.ry * self.sy).abs(),
            rotation,
            large_arc: arc.large_arc,
            sweep,
        }
    }

    /// The transform undoing this one. Requires non-zero scale factors.
    pub fn inverse(&self) -> Self {
        let dy = if self.flip_y {
            self.dy / self.sy
        } else {
            -self.dy / self.sy
        };
        Self {
            sx: 1. / self.sx,
            sy: 1. / self.sy,
            dx: -self.dx / self.sx,
            dy,
            flip_y: self.flip_y,
        }
    }
}
