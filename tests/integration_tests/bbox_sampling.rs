// The analytic bounding box must agree with one found by densely sampling
// every segment of the path.

use assertables::assert_in_delta;
use hanzi_strokes::geometry::{BoundingBox, BoundingBoxBuilder, Point};
use hanzi_strokes::path::{normalize, PathCommand};

const SAMPLES: usize = 200_000;

fn cubic_at(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1. - t;
    let f = |a: f64, b: f64, c: f64, d: f64| {
        u * u * u * a + 3. * u * u * t * b + 3. * u * t * t * c + t * t * t * d
    };
    (f(p0.0, p1.0, p2.0, p3.0), f(p0.1, p1.1, p2.1, p3.1))
}

fn quadratic_at(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    let u = 1. - t;
    let f = |a: f64, b: f64, c: f64| u * u * a + 2. * u * t * b + t * t * c;
    (f(p0.0, p1.0, p2.0), f(p0.1, p1.1, p2.1))
}

fn sampled_bbox(data: &str) -> Option<BoundingBox> {
    let path = normalize(data).expect("valid path");
    let mut bbb = BoundingBoxBuilder::new();
    let mut position = (0., 0.);
    let mut start = (0., 0.);
    for cmd in &path {
        match *cmd {
            PathCommand::CubicCurveTo { ctrl1, ctrl2, end }
            | PathCommand::SmoothCubicCurveTo { ctrl1, ctrl2, end } => {
                for i in 0..=SAMPLES {
                    let t = i as f64 / SAMPLES as f64;
                    bbb.extend_point(cubic_at(position, ctrl1, ctrl2, end, t));
                }
            }
            PathCommand::QuadraticCurveTo { ctrl, end }
            | PathCommand::SmoothQuadraticCurveTo { ctrl, end } => {
                for i in 0..=SAMPLES {
                    let t = i as f64 / SAMPLES as f64;
                    bbb.extend_point(quadratic_at(position, ctrl, end, t));
                }
            }
            _ => {}
        }
        if let PathCommand::MoveTo(p) = *cmd {
            start = p;
        }
        position = cmd.end_point().unwrap_or(start);
        if let Some(p) = cmd.end_point() {
            bbb.extend_point(p);
        }
    }
    bbb.build()
}

fn check(data: &str) {
    let analytic = normalize(data)
        .expect("valid path")
        .bbox()
        .expect("has points");
    let sampled = sampled_bbox(data).expect("has points");
    for (a, s) in [
        (analytic.x1, sampled.x1),
        (analytic.y1, sampled.y1),
        (analytic.x2, sampled.x2),
        (analytic.y2, sampled.y2),
    ] {
        assert_in_delta!(a, s, 1e-6);
    }
}

#[test]
fn test_bbox_matches_sampling() {
    for data in [
        "M0 0 C0 10 10 10 10 0",
        "M10 10 C-20 40 80 -30 50 50",
        "M100 200 C100 100 250 100 250 200 S400 300 400 200",
        "M 0 0 c 5 -30 40 -30 45 0 s 40 30 45 0",
        "M0 0 Q50 100 100 0",
        "M0 0 Q50 -40 100 10 T200 0 T 250 60",
        "M 10 10 q 30 -60 60 0 t 60 0 z m 200 200 c 10 10 -40 30 5 5",
        "M 512 900 C 300 880 100 600 180 300 C 260 40 700 60 820 260 Q 980 600 512 900 Z",
        "M5 5 L 20 -3 H 0 V 40 Z",
    ] {
        check(data);
    }
}

#[test]
fn test_interior_extremum() {
    let bbox = normalize("M0 0 C0 10 10 10 10 0")
        .expect("valid path")
        .bbox()
        .expect("has points");
    assert!(bbox.y2 > 0. && bbox.y2 < 10.);
    assert_in_delta!(bbox.y2, 7.5, 1e-12);
}
