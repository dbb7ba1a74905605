//! The glyph record exchanged with the stroke-order renderer.

use serde_derive::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Error, Result};
use crate::fit::glyph_bbox;
use crate::geometry::{AffineTransform, BoundingBox, Point};
use crate::path::{normalize, NormalizedPath};

/// Centerline of one stroke, as a polyline
pub type Median = Vec<Point>;

/// `{ "character", "strokes", "medians", "radStrokes" }`
///
/// Unrecognised top-level keys are kept in `extra` and written back out.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub strokes: Vec<String>,
    #[serde(default)]
    pub medians: Vec<Median>,
    /// Reserved for radical stroke indices; always empty on conversion
    #[serde(rename = "radStrokes", default)]
    pub rad_strokes: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Glyph {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Compact JSON rendering
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse every stroke; any malformed stroke fails the whole glyph.
    pub fn geometry(&self) -> Result<GlyphGeometry> {
        let strokes = self
            .strokes
            .iter()
            .enumerate()
            .map(|(idx, d)| normalize(d).map_err(|e| e.in_stroke(idx.to_string())))
            .collect::<Result<Vec<_>>>()?;
        Ok(GlyphGeometry {
            strokes,
            medians: self.medians.clone(),
        })
    }

    pub fn set_geometry(&mut self, geometry: GlyphGeometry) {
        self.strokes = geometry.strokes.iter().map(|s| s.to_string()).collect();
        self.medians = geometry.medians;
    }
}

/// Parsed strokes and medians of one glyph, sharing one coordinate space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphGeometry {
    pub strokes: Vec<NormalizedPath>,
    pub medians: Vec<Median>,
}

impl GlyphGeometry {
    /// Union of the stroke bounding boxes; strokes without points are ignored.
    /// Medians do not contribute.
    pub fn bbox(&self) -> Option<BoundingBox> {
        glyph_bbox(&self.strokes)
    }

    /// Apply one transform to every stroke and every median point
    pub fn transformed(&self, xf: &AffineTransform) -> Self {
        Self {
            strokes: self.strokes.iter().map(|s| s.transformed(xf)).collect(),
            medians: self
                .medians
                .iter()
                .map(|m| m.iter().map(|&p| xf.map_point(p)).collect())
                .collect(),
        }
    }
}

impl TryFrom<&Glyph> for GlyphGeometry {
    type Error = Error;

    fn try_from(glyph: &Glyph) -> Result<Self> {
        glyph.geometry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assertables::assert_contains;

    #[test]
    fn test_glyph_json() {
        let glyph = Glyph::from_json(
            r#"{"character":"人","strokes":["M 0 0 L 10 10"],"medians":[[[0,0],[10,10]]],"radStrokes":[],"extra":1}"#,
        )
        .expect("valid");
        assert_eq!(glyph.character, "人");
        assert_eq!(glyph.medians, vec![vec![(0., 0.), (10., 10.)]]);
        assert_eq!(glyph.extra.get("extra"), Some(&Value::from(1)));

        let out = glyph.to_json().expect("serializable");
        assert_contains!(out, r#""character":"人""#);
        assert_contains!(out, r#""medians":[[[0.0,0.0],[10.0,10.0]]]"#);
        assert_contains!(out, r#""radStrokes":[]"#);
        assert_contains!(out, r#""extra":1"#);
    }

    #[test]
    fn test_glyph_defaults() {
        let glyph = Glyph::from_json("{}").expect("valid");
        assert_eq!(glyph, Glyph::default());
        assert!(Glyph::from_json("[1, 2]").is_err());
        assert!(Glyph::from_json(r#"{"strokes": "M 0 0"}"#).is_err());
    }

    #[test]
    fn test_geometry() {
        let mut glyph = Glyph {
            strokes: vec!["M0 0 h10".into(), "".into(), "M 5 5 V -5".into()],
            medians: vec![vec![(1., 1.)]],
            ..Default::default()
        };
        let geom = glyph.geometry().expect("valid strokes");
        assert_eq!(geom.bbox(), Some(BoundingBox::new(0., -5., 10., 5.)));

        let geom = geom.transformed(&AffineTransform::scale_translate(2., 1., 0.));
        glyph.set_geometry(geom);
        assert_eq!(glyph.strokes, ["M 1 0 L 21 0", "", "M 11 10 L 11 -10"]);
        assert_eq!(glyph.medians, vec![vec![(3., 2.)]]);
    }

    #[test]
    fn test_geometry_bad_stroke() {
        let glyph = Glyph {
            strokes: vec!["M0 0 L1 1".into(), "M0 0 L1".into()],
            ..Default::default()
        };
        match glyph.geometry() {
            Err(Error::Stroke { id, .. }) => assert_eq!(id, "1"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
