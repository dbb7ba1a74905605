use assertables::{assert_contains, assert_in_delta};
use hanzi_strokes::{center_str, CenterConfig, Error, FitConfig, Glyph};

const RECORD: &str = r#"{"character":"口","strokes":["M 100 100 L 100 300","M 100 300 L 400 300 L 400 100","M 100 100 L 400 100"],"medians":[[[100,100],[100,300]],[[100,300],[400,300],[400,100]],[[100,100],[400,100]]],"radStrokes":[],"source":"manual"}"#;

fn center(config: &CenterConfig) -> Glyph {
    Glyph::from_json(&center_str(RECORD, config).expect("centering failed")).expect("valid json")
}

fn bounds(glyph: &Glyph) -> (f64, f64, f64, f64) {
    let bbox = glyph.geometry().expect("valid").bbox().expect("has points");
    (bbox.x1, bbox.y1, bbox.x2, bbox.y2)
}

#[test]
fn test_center_only() {
    let glyph = center(&CenterConfig::default());
    assert_eq!(glyph.character, "口");
    assert_eq!(glyph.strokes[0], "M 362 412 L 362 612");
    assert_eq!(glyph.medians[1], vec![(362., 612.), (662., 612.), (662., 412.)]);
    assert_eq!(glyph.extra.get("source").and_then(|v| v.as_str()), Some("manual"));
}

#[test]
fn test_center_fit() {
    let config = CenterConfig {
        character: None,
        fit: FitConfig {
            fit: true,
            pad_x: 24.,
            pad_y: 24.,
            ..Default::default()
        },
    };
    let (x1, y1, x2, y2) = bounds(&center(&config));
    assert_in_delta!(x1, 24., 1e-6);
    assert_in_delta!(x2, 1000., 1e-6);
    assert_in_delta!((y1 + y2) / 2., 512., 1e-6);
    assert_in_delta!((y2 - y1) * 1.5, 976., 1e-5);
}

#[test]
fn test_center_bias() {
    let config = CenterConfig {
        character: Some("回".into()),
        fit: FitConfig {
            bias_x: 10.,
            bias_y: 20.,
            flip_y_bias: true,
            balance_x: true,
            balance_y: true,
            ..Default::default()
        },
    };
    let glyph = center(&config);
    assert_eq!(glyph.character, "回");
    let (x1, y1, x2, y2) = bounds(&glyph);
    assert_in_delta!(x1, 372., 1e-9);
    assert_in_delta!(x2, 672., 1e-9);
    assert_in_delta!(y1, 392., 1e-9);
    assert_in_delta!(y2, 592., 1e-9);
}

#[test]
fn test_center_curves() {
    // the bbox must include the interior extremum of the curve
    let input = r#"{"strokes":["M 0 0 C 0 100 100 100 100 0"],"medians":[]}"#;
    let output = center_str(input, &CenterConfig::default()).expect("valid");
    assert_contains!(output, r#""strokes":["M 462 474.5 C 462 574.5 562 574.5 562 474.5"]"#);
}

#[test]
fn test_center_invalid() {
    let config = CenterConfig {
        character: None,
        fit: FitConfig {
            pad_y: -1.,
            ..Default::default()
        },
    };
    assert!(matches!(center_str(RECORD, &config), Err(Error::InvalidValue(_, _))));
    assert!(matches!(
        center_str(r#"{"strokes":[1]}"#, &CenterConfig::default()),
        Err(Error::Json(_))
    ));
}
