use super::Point;

/// `BoundingBox` defines an axis-aligned rectangular region in user coordinates.
///
/// A box may be degenerate (zero width and/or height), e.g. for a path
/// consisting of a single `moveto`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Accumulates points and boxes; `build()` is `None` if nothing was added.
#[derive(Debug, Clone, Default)]
pub struct BoundingBoxBuilder {
    bbox: Option<BoundingBox>,
}

impl BoundingBoxBuilder {
    pub fn new() -> Self {
        Self { bbox: None }
    }

    pub fn extend(&mut self, bbox: BoundingBox) -> &Self {
        if let Some(ref mut b) = self.bbox {
            *b = b.combine(&bbox);
        } else {
            self.bbox = Some(bbox);
        }
        self
    }

    pub fn extend_point(&mut self, point: Point) -> &Self {
        self.extend(BoundingBox::from_point(point))
    }

    pub fn is_empty(&self) -> bool {
        self.bbox.is_none()
    }

    pub fn build(self) -> Option<BoundingBox> {
        self.bbox
    }
}

impl BoundingBox {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn from_point((x, y): Point) -> Self {
        Self::new(x, y, x, y)
    }

    pub fn union(bb_iter: impl IntoIterator<Item = Self>) -> Option<Self> {
        let bb_iter = bb_iter.into_iter();
        bb_iter.reduce(|bb1, bb2| bb1.combine(&bb2))
    }

    pub fn combine(&self, other: &Self) -> Self {
        Self::new(
            self.x1.min(other.x1),
            self.y1.min(other.y1),
            self.x2.max(other.x2),
            self.y2.max(other.y2),
        )
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn center(&self) -> Point {
        ((self.x1 + self.x2) / 2., (self.y1 + self.y2) / 2.)
    }

    /// True if the box has no area, i.e. fitting it to a region is undefined
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0. || self.height() <= 0.
    }
}
