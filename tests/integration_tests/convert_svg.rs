use assertables::assert_contains;
use hanzi_strokes::{convert_str, ConvertConfig, Error, FitConfig, Glyph};

const GLYPH: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg
   width="2048"
   height="2048"
   viewBox="0 0 2048 2048"
   xmlns="http://www.w3.org/2000/svg"
   xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
   xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd">
  <sodipodi:namedview id="namedview1" inkscape:zoom="0.5"/>
  <g inkscape:groupmode="layer" id="layer1" inkscape:label="Nét (strokes)">
    <path id="s2" d="m 1024,400 v 1200" style="fill:none"/>
    <path id="s1" d="M 400,1000 H 1648"/>
  </g>
  <g inkscape:groupmode="layer" id="layer2" inkscape:label="Trục">
    <polyline points="420,1000 1628,1000"/>
    <path d="M 1024,420 L 1024,1580"/>
  </g>
</svg>"##;

fn glyph(svg: &str, config: &ConvertConfig) -> Glyph {
    Glyph::from_json(&convert_str(svg, config).expect("conversion failed")).expect("valid json")
}

#[test]
fn test_convert_glyph() {
    let glyph = glyph(GLYPH, &ConvertConfig::default());
    assert_eq!(glyph.character, "");
    assert_eq!(glyph.strokes, ["M 200 524 L 824 524", "M 512 824 L 512 224"]);
    assert_eq!(
        glyph.medians,
        vec![
            vec![(210., 524.), (814., 524.)],
            vec![(512., 814.), (512., 234.)],
        ]
    );
    assert!(glyph.rad_strokes.is_empty());
}

#[test]
fn test_convert_centered_fit() {
    let config = ConvertConfig {
        center: true,
        character: Some("十".into()),
        fit: FitConfig {
            fit: true,
            pad_x: 112.,
            pad_y: 112.,
            ..Default::default()
        },
        ..Default::default()
    };
    let glyph = glyph(GLYPH, &config);
    assert_eq!(glyph.character, "十");
    // the wider axis fills the canvas less padding
    assert_eq!(glyph.strokes[0], "M 112 512 L 912 512");
    assert_eq!(glyph.strokes[1], "M 512 896.615385 L 512 127.384615");
}

#[test]
fn test_convert_no_medians() {
    let config = ConvertConfig {
        no_medians: true,
        ..Default::default()
    };
    let json = convert_str(GLYPH, &config).expect("conversion failed");
    assert_contains!(json, r#""medians":[]"#);
}

#[test]
fn test_convert_curves_and_arcs() {
    let svg = r#"<svg viewBox="0 0 1024 1024"><g id="layer-strokes">
      <path id="s1" d="M 10 10 A 5 5 30 0 1 20 20"/>
      <path id="s2" d="M 0 0 C 10 0 20 10 20 20 S 30 40 40 40 Q 50 40 50 50 T 60 60 Z"/>
    </g></svg>"#;
    let glyph = glyph(svg, &ConvertConfig::default());
    assert_eq!(glyph.strokes[0], "M 10 1014 A 5 5 -30 0 0 20 1004");
    assert_eq!(
        glyph.strokes[1],
        "M 0 1024 C 10 1024 20 1014 20 1004 S 30 984 40 984 Q 50 984 50 974 T 60 964 Z"
    );
}

#[test]
fn test_convert_missing_layer() {
    let svg = r#"<svg><g id="layer-medians"><line x2="5" y2="5"/></g></svg>"#;
    let err = convert_str(svg, &ConvertConfig::default()).expect_err("no strokes layer");
    assert!(matches!(err, Error::MissingLayer(_)));
    assert_eq!(err.to_string(), "Required layer 'layer-strokes' not found");
}

#[test]
fn test_convert_bad_stroke() {
    let svg = r#"<svg><g id="layer-strokes">
      <path id="s1" d="M 0 0 L 10 10"/>
      <path id="s2" d="M 0 0 L 10 1x"/>
    </g></svg>"#;
    let err = convert_str(svg, &ConvertConfig::default()).expect_err("bad stroke");
    assert!(matches!(err, Error::Stroke { .. }));
    assert_contains!(err.to_string(), "Stroke 's2'");
    assert_contains!(err.to_string(), "offset");
}

#[test]
fn test_convert_bad_xml() {
    let err = convert_str("<svg><g id='layer-strokes'></svg>", &ConvertConfig::default())
        .expect_err("mismatched tags");
    assert!(matches!(err, Error::Document(_)));
}
