//! Stroke medians from the optional medians layer.
//!
//! Median authoring data is often rough, so extraction is lenient: elements
//! that cannot be read are skipped and unsupported path commands are stepped
//! over, leaving a (possibly truncated) polyline rather than an error.

use log::debug;

use crate::document::SvgElement;
use crate::geometry::{AffineTransform, Point};
use crate::glyph::Median;
use crate::path::{PathSyntax, Token, TokenKind};
use crate::types::{attr_split, strp};

/// Medians of every `line`, `polyline` and `path` below `layer`, in document
/// order, mapped through `xf`. Empty medians are dropped.
pub fn extract_medians(layer: &SvgElement, xf: &AffineTransform) -> Vec<Median> {
    let mut medians = Vec::new();
    collect_medians(layer, xf, &mut medians);
    medians
}

fn collect_medians(el: &SvgElement, xf: &AffineTransform, out: &mut Vec<Median>) {
    for child in el.children() {
        let median = match child.name() {
            "g" => {
                collect_medians(child, xf, out);
                continue;
            }
            "line" => line_median(child, xf),
            "polyline" => polyline_median(child, xf),
            "path" => Some(path_median(child.get_attr("d").unwrap_or_default(), xf)),
            other => {
                debug!("median: ignoring <{other}> element");
                None
            }
        };
        if let Some(median) = median.filter(|m| !m.is_empty()) {
            out.push(median);
        }
    }
}

fn line_median(el: &SvgElement, xf: &AffineTransform) -> Option<Median> {
    let coord = |key: &str| strp(el.get_attr(key).unwrap_or("0"));
    match (coord("x1"), coord("y1"), coord("x2"), coord("y2")) {
        (Ok(x1), Ok(y1), Ok(x2), Ok(y2)) => {
            Some(vec![xf.map_point((x1, y1)), xf.map_point((x2, y2))])
        }
        _ => {
            debug!("median: skipping <line> with invalid coordinates");
            None
        }
    }
}

fn polyline_median(el: &SvgElement, xf: &AffineTransform) -> Option<Median> {
    let values = attr_split(el.get_attr("points").unwrap_or_default())
        .map(|v| strp(&v))
        .collect::<Result<Vec<f64>, _>>();
    let Ok(values) = values else {
        debug!("median: skipping <polyline> with invalid points");
        return None;
    };
    Some(
        values
            .chunks_exact(2)
            .map(|xy| xf.map_point((xy[0], xy[1])))
            .collect(),
    )
}

/// Walk `d` collecting `M`/`L` points only.
///
/// Operands of any other command are skipped up to the next command letter.
/// A missing coordinate pair or a lexing error ends the walk.
pub fn path_median(d: &str, xf: &AffineTransform) -> Median {
    let tokens: Vec<Token> = PathSyntax::new(d)
        .map_while(|t| {
            t.map_err(|e| debug!("median: truncating path: {e}")).ok()
        })
        .collect();

    let mut points = Vec::new();
    let mut idx = 0;
    let mut prev_cmd: Option<char> = None;
    let mut current: Option<Point> = None;
    while idx < tokens.len() {
        let cmd = match tokens[idx].kind {
            TokenKind::Command(c) => {
                idx += 1;
                c
            }
            TokenKind::Number(_) => match prev_cmd {
                Some(c) => c,
                None => break,
            },
        };
        match cmd {
            'M' | 'm' | 'L' | 'l' => {
                let Some((x, y)) = number_pair(&tokens, idx) else {
                    break;
                };
                idx += 2;
                let p = match current {
                    Some((cx, cy)) if cmd.is_ascii_lowercase() => (cx + x, cy + y),
                    _ => (x, y),
                };
                current = Some(p);
                points.push(xf.map_point(p));
            }
            _ => {
                debug!("median: skipping unsupported '{cmd}' command");
                while idx < tokens.len() && !tokens[idx].is_command() {
                    idx += 1;
                }
            }
        }
        prev_cmd = Some(cmd);
    }
    points
}

fn number_pair(tokens: &[Token], idx: usize) -> Option<Point> {
    let x = tokens.get(idx)?.number()?;
    let y = tokens.get(idx + 1)?.number()?;
    Some((x, y))
}
