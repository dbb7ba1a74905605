mod bbox;
mod transform;

pub use bbox::{BoundingBox, BoundingBoxBuilder};
pub use transform::{AffineTransform, ArcShape, ViewBox};

/// A location in 2D user space, as `(x, y)`
pub type Point = (f64, f64);
