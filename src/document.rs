//! Minimal read-only SVG element tree.
//!
//! Only elements and their attributes are retained; text, comments and
//! processing instructions are dropped while reading.

use std::io::{BufRead, BufReader, Cursor};
use std::str::FromStr;

use log::info;
use quick_xml::events::{BytesStart, Event as XmlEvent};
use quick_xml::Reader;

use crate::constants::{
    CANVAS_SIZE, MEDIANS_LABEL_KEYWORDS, MEDIANS_LAYER_ID, STROKES_LABEL_KEYWORDS,
    STROKES_LAYER_ID,
};
use crate::errors::{Error, Result};
use crate::geometry::ViewBox;
use crate::types::{attr_split, strp_px};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SvgElement {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<SvgElement>,
}

impl SvgElement {
    pub fn new(name: &str, attrs: &[(String, String)]) -> Self {
        Self {
            name: name.to_owned(),
            attrs: attrs.to_vec(),
            children: vec![],
        }
    }

    /// Element name without any namespace prefix
    pub fn name(&self) -> &str {
        self.name
            .rsplit_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value of a namespaced `label` attribute, e.g. `inkscape:label`
    pub fn label(&self) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.ends_with(":label"))
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    pub fn children(&self) -> &[SvgElement] {
        &self.children
    }

    pub fn push_child(&mut self, child: SvgElement) {
        self.children.push(child);
    }

    /// All elements below this one, in document order
    pub fn descendants(&self) -> Vec<&SvgElement> {
        let mut result = Vec::new();
        for child in &self.children {
            result.push(child);
            result.extend(child.descendants());
        }
        result
    }

    /// First `g` below this element whose id is `id`, or whose label contains
    /// one of `keywords` (case-insensitive).
    pub fn find_layer(&self, id: &str, keywords: &[&str]) -> Option<&SvgElement> {
        self.descendants().into_iter().find(|el| {
            el.name() == "g"
                && (el.id() == Some(id)
                    || el.label().is_some_and(|label| {
                        let label = label.to_lowercase();
                        keywords.iter().any(|k| label.contains(k))
                    }))
        })
    }
}

impl TryFrom<&BytesStart<'_>> for SvgElement {
    type Error = Error;

    fn try_from(e: &BytesStart) -> Result<Self> {
        let name = String::from_utf8(e.name().into_inner().to_vec())?;
        let attrs = e
            .attributes()
            .map(|a| {
                let aa = a.map_err(Error::from_err)?;
                let key = String::from_utf8(aa.key.into_inner().to_vec())?;
                let value = aa.unescape_value().map_err(Error::from_err)?.into_owned();
                Ok((key, value))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            name,
            attrs,
            children: vec![],
        })
    }
}

/// A parsed SVG document with a single root element.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgDocument {
    root: SvgElement,
}

impl FromStr for SvgDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(&mut BufReader::new(Cursor::new(s.as_bytes())))
    }
}

impl SvgDocument {
    pub fn from_reader(reader: &mut dyn BufRead) -> Result<Self> {
        let mut reader = Reader::from_reader(reader);
        let mut buf = Vec::new();

        // Stack of currently open elements
        let mut open: Vec<SvgElement> = Vec::new();
        let mut root = None;

        let mut src_line = 1;
        loop {
            let ev = reader
                .read_event_into(&mut buf)
                .map_err(|e| Error::Document(format!("XML error near line {src_line}: {e}")))?;
            let event_lines = ev.iter().filter(|&c| *c == b'\n').count();

            let closed = match ev {
                XmlEvent::Start(ref bs) => {
                    open.push(SvgElement::try_from(bs)?);
                    None
                }
                XmlEvent::Empty(ref bs) => Some(SvgElement::try_from(bs)?),
                XmlEvent::End(_) => open.pop(),
                XmlEvent::Eof => break,
                _ => None,
            };
            if let Some(el) = closed {
                if let Some(parent) = open.last_mut() {
                    parent.push_child(el);
                } else if root.is_some() {
                    return Err(Error::Document(format!(
                        "multiple root elements near line {src_line}"
                    )));
                } else {
                    root = Some(el);
                }
            }

            src_line += event_lines;
            buf.clear();
        }

        if let Some(el) = open.last() {
            return Err(Error::Document(format!("unclosed element <{}>", el.name)));
        }
        match root {
            Some(root) => Ok(Self { root }),
            None => Err(Error::Document("no root element".to_owned())),
        }
    }

    pub fn root(&self) -> &SvgElement {
        &self.root
    }

    /// Source coordinate space from `viewBox`, falling back to
    /// `width`/`height` (each defaulting to the canvas size) at the origin.
    pub fn viewbox(&self) -> Result<ViewBox> {
        if let Some(value) = self.root.get_attr("viewBox") {
            match value.parse::<ViewBox>() {
                Ok(vb) => {
                    info!("viewBox: {value}");
                    return Ok(vb);
                }
                Err(_) if attr_split(value).count() == 4 => {
                    return Err(Error::Document(format!("unusable viewBox '{value}'")));
                }
                Err(_) => {}
            }
        }
        let length = |key: &str| -> Result<f64> {
            match self.root.get_attr(key) {
                Some(v) => strp_px(v)
                    .map_err(|_| Error::Document(format!("invalid {key} attribute '{v}'"))),
                None => Ok(CANVAS_SIZE),
            }
        };
        let (width, height) = (length("width")?, length("height")?);
        ViewBox::new(0., 0., width, height).map_err(|_| {
            Error::Document(format!("unusable document size {width} x {height}"))
        })
    }

    pub fn strokes_layer(&self) -> Result<&SvgElement> {
        self.root
            .find_layer(STROKES_LAYER_ID, STROKES_LABEL_KEYWORDS)
            .ok_or_else(|| Error::MissingLayer(STROKES_LAYER_ID.to_owned()))
    }

    pub fn medians_layer(&self) -> Option<&SvgElement> {
        self.root
            .find_layer(MEDIANS_LAYER_ID, MEDIANS_LABEL_KEYWORDS)
    }

    /// `(id, d)` for every non-blank path in the strokes layer, ordered by
    /// the numeric index of an `s<digits>` id prefix. Paths without such an
    /// index follow in document order.
    ///
    /// `d` is returned as written, so parse error offsets refer to the
    /// attribute value in the source document.
    pub fn stroke_paths(&self) -> Result<Vec<(String, String)>> {
        let layer = self.strokes_layer()?;
        let mut items: Vec<(String, String)> = layer
            .descendants()
            .into_iter()
            .filter(|el| el.name() == "path")
            .filter_map(|el| {
                let d = el.get_attr("d")?;
                (!d.trim().is_empty())
                    .then(|| (el.id().unwrap_or_default().to_owned(), d.to_owned()))
            })
            .collect();
        items.sort_by_key(|(id, _)| stroke_index(id).unwrap_or(u64::MAX));
        info!("strokes found: {}", items.len());
        Ok(items)
    }
}

/// Numeric index from an id such as `s12` or `S3-outline`
fn stroke_index(id: &str) -> Option<u64> {
    let digits = id.strip_prefix(['s', 'S'])?;
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}
