//! ## hanzi-strokes - glyph outlines to stroke-order JSON
//!
//! Converts hand-authored SVG glyphs (one `<path>` per stroke, plus optional
//! centerline medians) into the JSON records consumed by stroke-order
//! animation libraries, and re-centers / fits existing records on the
//! 1024-unit canvas those libraries expect.
//!
//! ## Library use
//!
//! A `ConvertConfig` (SVG input) or `CenterConfig` (JSON input) should be
//! created as required, and the appropriate `convert_*` or `center_*`
//! function called with it.
//!
//! The lower level building blocks (path parsing, normalization and exact
//! bounding boxes) are available in the `path` and `geometry` modules.
//!
//! ## Example
//!
//! ```
//! let svg = r#"<svg viewBox="0 0 1024 1024">
//!   <g id="layer-strokes"><path id="s1" d="M 100 100 H 900"/></g>
//! </svg>"#;
//!
//! let json = hanzi_strokes::convert_str(svg, &Default::default()).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"character":"","strokes":["M 100 924 L 900 924"],"medians":[],"radStrokes":[]}"#
//! );
//! ```

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use std::io::{BufRead, Write};

#[cfg(feature = "cli")]
pub mod cli;
pub mod constants;
pub mod convert;
pub mod document;
pub mod errors;
pub mod fit;
pub mod geometry;
pub mod glyph;
pub mod median;
pub mod path;
pub mod types;

pub use convert::convert_document;
pub use document::SvgDocument;
pub use errors::{Error, Result};
pub use fit::FitConfig;
pub use glyph::{Glyph, GlyphGeometry, Median};

// Allow users of this as a library to easily retrieve the version being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings for converting one SVG glyph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConvertConfig {
    /// Don't read the medians layer
    pub no_medians: bool,
    /// Run the fit/center pass on the converted glyph
    pub center: bool,
    /// Value of the `character` field (default empty)
    pub character: Option<String>,
    /// Placement used when `center` is set
    pub fit: FitConfig,
}

/// Settings for re-centering an existing glyph record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CenterConfig {
    /// Replace the record's `character` field
    pub character: Option<String>,
    pub fit: FitConfig,
}

/// Reads an SVG document from `reader`, converts it and writes the glyph JSON
/// to `writer`.
///
/// Nothing is written unless the whole conversion succeeds.
pub fn convert_stream(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    config: &ConvertConfig,
) -> Result<()> {
    let doc = SvgDocument::from_reader(reader)?;
    let json = convert_document(&doc, config)?.to_json()?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

/// Convert an SVG document provided as a string, returning the glyph JSON.
pub fn convert_str(input: &str, config: &ConvertConfig) -> Result<String> {
    convert_document(&input.parse()?, config)?.to_json()
}

/// Re-center `glyph` per `config`, returning the updated record.
pub fn center_glyph(glyph: &Glyph, config: &CenterConfig) -> Result<Glyph> {
    config.fit.validate()?;
    let geometry = glyph.geometry()?.centered(&config.fit);
    let mut result = glyph.clone();
    result.set_geometry(geometry);
    if let Some(character) = &config.character {
        result.character = character.clone();
    }
    Ok(result)
}

/// Reads glyph JSON from `reader`, re-centers it and writes the result to `writer`.
pub fn center_stream(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    config: &CenterConfig,
) -> Result<()> {
    let glyph: Glyph = serde_json::from_reader(reader)?;
    let json = center_glyph(&glyph, config)?.to_json()?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

/// Re-center glyph JSON provided as a string, returning the updated JSON.
pub fn center_str(input: &str, config: &CenterConfig) -> Result<String> {
    center_glyph(&Glyph::from_json(input)?, config)?.to_json()
}

/// Convert an SVG document string to glyph JSON, optionally centering it
/// with default placement settings.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn svg_to_hanzi_json(input: String, center: bool) -> core::result::Result<String, String> {
    let config = ConvertConfig {
        center,
        ..Default::default()
    };
    convert_str(&input, &config).map_err(|e| e.to_string())
}
