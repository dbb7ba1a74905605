use super::command::{NormalizedPath, PathCommand};
use crate::constants::COEFF_EPSILON;
use crate::geometry::{BoundingBox, BoundingBoxBuilder, Point};

/// Interior turning points of the quadratic from `p0` through `p1` to `p2`.
///
/// On each axis the derivative is linear in `t`, so there is at most one
/// turning point per axis. The point itself comes from de Casteljau
/// interpolation.
fn quadratic_extrema(p0: Point, p1: Point, p2: Point) -> Vec<Point> {
    let lerp = |a: Point, b: Point, t: f64| (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t);
    [(p0.0, p1.0, p2.0), (p0.1, p1.1, p2.1)]
        .into_iter()
        .filter_map(|(a, b, c)| {
            let bend = a - 2.0 * b + c;
            (bend.abs() >= COEFF_EPSILON).then(|| (a - b) / bend)
        })
        .filter(|&t| t > 0.0 && t < 1.0)
        .map(|t| lerp(lerp(p0, p1, t), lerp(p1, p2, t), t))
        .collect()
}

fn cubic_extrema(start: Point, cp1: Point, cp2: Point, end: Point) -> Vec<Point> {
    fn cubic(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
        let mt = 1.0 - t;
        mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
    }

    fn stationary_ts(p0: f64, p1: f64, p2: f64, p3: f64) -> Vec<f64> {
        // Derivative of cubic Bezier: B'(t) = 3(1-t)^2 * (p1-p0) + 6(1-t)t(p2-p1) + 3t^2 * (p3-p2)
        // Dropping the common factor of 3 and rearranging: at^2 + bt + c = 0
        let a = -p0 + 3.0 * p1 - 3.0 * p2 + p3;
        let b = 2.0 * (p0 - 2.0 * p1 + p2);
        let c = p1 - p0;

        let roots = if a.abs() < COEFF_EPSILON {
            // Linear case: bt + c = 0
            if b.abs() < COEFF_EPSILON {
                vec![]
            } else {
                vec![-c / b]
            }
        } else {
            let disc = b * b - 4.0 * a * c;
            if disc < 0.0 {
                vec![]
            } else {
                let sqrt_disc = disc.sqrt();
                vec![(-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a)]
            }
        };
        roots.into_iter().filter(|&t| t > 0.0 && t < 1.0).collect()
    }

    let mut all_t = stationary_ts(start.0, cp1.0, cp2.0, end.0);
    all_t.extend(stationary_ts(start.1, cp1.1, cp2.1, end.1));

    all_t
        .into_iter()
        .map(|t| {
            (
                cubic(t, start.0, cp1.0, cp2.0, end.0),
                cubic(t, start.1, cp1.1, cp2.1, end.1),
            )
        })
        .collect()
}

/// Exact axis-aligned bounds of a path, or `None` if it has no points.
///
/// Curve segments contribute their analytic extrema as well as their
/// endpoints. Lines and arcs contribute only their endpoints.
pub fn path_bbox(path: &NormalizedPath) -> Option<BoundingBox> {
    let mut bbb = BoundingBoxBuilder::new();
    let mut position: Option<Point> = None;
    let mut subpath_start: Option<Point> = None;

    for cmd in path {
        if let Some(start) = position {
            let interior = match *cmd {
                PathCommand::CubicCurveTo { ctrl1, ctrl2, end }
                | PathCommand::SmoothCubicCurveTo { ctrl1, ctrl2, end } => {
                    cubic_extrema(start, ctrl1, ctrl2, end)
                }
                PathCommand::QuadraticCurveTo { ctrl, end }
                | PathCommand::SmoothQuadraticCurveTo { ctrl, end } => {
                    quadratic_extrema(start, ctrl, end)
                }
                _ => vec![],
            };
            for point in interior {
                bbb.extend_point(point);
            }
        }
        if let PathCommand::MoveTo(p) = cmd {
            subpath_start = Some(*p);
        }
        position = match cmd {
            PathCommand::ClosePath => subpath_start,
            _ => cmd.end_point(),
        };
        if let Some(end) = cmd.end_point() {
            bbb.extend_point(end);
        }
    }
    bbb.build()
}

impl NormalizedPath {
    pub fn bbox(&self) -> Option<BoundingBox> {
        path_bbox(self)
    }
}
