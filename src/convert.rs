use log::info;

use crate::constants::CANVAS_SIZE;
use crate::document::SvgDocument;
use crate::errors::Result;
use crate::geometry::AffineTransform;
use crate::glyph::{Glyph, GlyphGeometry};
use crate::median::extract_medians;
use crate::path::normalize;
use crate::types::fstr;
use crate::ConvertConfig;

/// Build a glyph record from the strokes (and medians) layers of `doc`.
///
/// Coordinates are mapped from the document's viewBox onto the canvas with
/// +y pointing up. Any stroke failing to parse fails the whole conversion.
pub fn convert_document(doc: &SvgDocument, config: &ConvertConfig) -> Result<Glyph> {
    if config.center {
        config.fit.validate()?;
    }
    let vb = doc.viewbox()?;
    let xf = AffineTransform::viewbox_to_canvas(&vb, CANVAS_SIZE);
    info!(
        "viewBox ({}, {}, {}, {}) -> sx={}, sy={}",
        fstr(vb.min_x),
        fstr(vb.min_y),
        fstr(vb.width),
        fstr(vb.height),
        fstr(xf.sx),
        fstr(xf.sy)
    );

    let strokes = doc
        .stroke_paths()?
        .iter()
        .enumerate()
        .map(|(idx, (id, d))| {
            let id = if id.is_empty() { idx.to_string() } else { id.clone() };
            normalize(d)
                .map(|path| path.transformed(&xf))
                .map_err(|e| e.in_stroke(id))
        })
        .collect::<Result<Vec<_>>>()?;

    let medians = if config.no_medians {
        info!("medians: skipped");
        vec![]
    } else {
        let medians = doc
            .medians_layer()
            .map(|layer| extract_medians(layer, &xf))
            .unwrap_or_default();
        info!("medians: {}", medians.len());
        medians
    };

    let mut geometry = GlyphGeometry { strokes, medians };
    if config.center {
        geometry = geometry.centered(&config.fit);
    }

    let mut glyph = Glyph {
        character: config.character.clone().unwrap_or_default(),
        ..Default::default()
    };
    glyph.set_geometry(geometry);
    Ok(glyph)
}
