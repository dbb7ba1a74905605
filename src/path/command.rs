use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use super::parser::normalize;
use crate::errors::{Error, Result};
use crate::geometry::{AffineTransform, ArcShape, Point};
use crate::types::fstr;

/// The ten command families of the SVG path grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CubicCurveTo,
    SmoothCubicCurveTo,
    QuadraticCurveTo,
    SmoothQuadraticCurveTo,
    EllipticalArcTo,
    ClosePath,
}

impl CommandKind {
    /// Decode a command letter into its kind and whether it is relative (lower-case)
    pub fn from_letter(letter: char) -> Option<(Self, bool)> {
        use CommandKind::*;
        let kind = match letter.to_ascii_uppercase() {
            'M' => MoveTo,
            'L' => LineTo,
            'H' => HorizontalLineTo,
            'V' => VerticalLineTo,
            'C' => CubicCurveTo,
            'S' => SmoothCubicCurveTo,
            'Q' => QuadraticCurveTo,
            'T' => SmoothQuadraticCurveTo,
            'A' => EllipticalArcTo,
            'Z' => ClosePath,
            _ => return None,
        };
        Some((kind, letter.is_ascii_lowercase()))
    }

    pub fn letter(&self) -> char {
        use CommandKind::*;
        match self {
            MoveTo => 'M',
            LineTo => 'L',
            HorizontalLineTo => 'H',
            VerticalLineTo => 'V',
            CubicCurveTo => 'C',
            SmoothCubicCurveTo => 'S',
            QuadraticCurveTo => 'Q',
            SmoothQuadraticCurveTo => 'T',
            EllipticalArcTo => 'A',
            ClosePath => 'Z',
        }
    }
}

/// A single path command with all points in absolute coordinates.
///
/// Smooth curves carry their implied control point (the reflection of the
/// previous curve's control point) alongside the points written in the
/// source, so each command describes its segment without reference to
/// its predecessor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Horizontal line; the point holds the (unchanged) current y value
    HorizontalLineTo(Point),
    /// Vertical line; the point holds the (unchanged) current x value
    VerticalLineTo(Point),
    CubicCurveTo {
        ctrl1: Point,
        ctrl2: Point,
        end: Point,
    },
    SmoothCubicCurveTo {
        ctrl1: Point,
        ctrl2: Point,
        end: Point,
    },
    QuadraticCurveTo {
        ctrl: Point,
        end: Point,
    },
    SmoothQuadraticCurveTo {
        ctrl: Point,
        end: Point,
    },
    EllipticalArcTo {
        arc: ArcShape,
        end: Point,
    },
    ClosePath,
}

impl PathCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::MoveTo(_) => CommandKind::MoveTo,
            Self::LineTo(_) => CommandKind::LineTo,
            Self::HorizontalLineTo(_) => CommandKind::HorizontalLineTo,
            Self::VerticalLineTo(_) => CommandKind::VerticalLineTo,
            Self::CubicCurveTo { .. } => CommandKind::CubicCurveTo,
            Self::SmoothCubicCurveTo { .. } => CommandKind::SmoothCubicCurveTo,
            Self::QuadraticCurveTo { .. } => CommandKind::QuadraticCurveTo,
            Self::SmoothQuadraticCurveTo { .. } => CommandKind::SmoothQuadraticCurveTo,
            Self::EllipticalArcTo { .. } => CommandKind::EllipticalArcTo,
            Self::ClosePath => CommandKind::ClosePath,
        }
    }

    /// Final point of the segment; `None` for `ClosePath`, whose end
    /// depends on the subpath start.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Self::MoveTo(p)
            | Self::LineTo(p)
            | Self::HorizontalLineTo(p)
            | Self::VerticalLineTo(p)
            | Self::CubicCurveTo { end: p, .. }
            | Self::SmoothCubicCurveTo { end: p, .. }
            | Self::QuadraticCurveTo { end: p, .. }
            | Self::SmoothQuadraticCurveTo { end: p, .. }
            | Self::EllipticalArcTo { end: p, .. } => Some(p),
            Self::ClosePath => None,
        }
    }

    /// Apply `xf` to every point (and to arc parameters) of this command
    pub fn transformed(&self, xf: &AffineTransform) -> Self {
        let m = |p: Point| xf.map_point(p);
        match *self {
            Self::MoveTo(p) => Self::MoveTo(m(p)),
            Self::LineTo(p) => Self::LineTo(m(p)),
            Self::HorizontalLineTo(p) => Self::HorizontalLineTo(m(p)),
            Self::VerticalLineTo(p) => Self::VerticalLineTo(m(p)),
            Self::CubicCurveTo { ctrl1, ctrl2, end } => Self::CubicCurveTo {
                ctrl1: m(ctrl1),
                ctrl2: m(ctrl2),
                end: m(end),
            },
            Self::SmoothCubicCurveTo { ctrl1, ctrl2, end } => Self::SmoothCubicCurveTo {
                ctrl1: m(ctrl1),
                ctrl2: m(ctrl2),
                end: m(end),
            },
            Self::QuadraticCurveTo { ctrl, end } => Self::QuadraticCurveTo {
                ctrl: m(ctrl),
                end: m(end),
            },
            Self::SmoothQuadraticCurveTo { ctrl, end } => Self::SmoothQuadraticCurveTo {
                ctrl: m(ctrl),
                end: m(end),
            },
            Self::EllipticalArcTo { arc, end } => Self::EllipticalArcTo {
                arc: xf.map_arc(arc),
                end: m(end),
            },
            Self::ClosePath => Self::ClosePath,
        }
    }
}

fn fpt((x, y): Point) -> String {
    format!("{} {}", fstr(x), fstr(y))
}

impl fmt::Display for PathCommand {
    /// Horizontal and vertical lines are written as `L` since a transform may
    /// move both coordinates; smooth curves keep their shorthand form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MoveTo(p) => write!(f, "M {}", fpt(p)),
            Self::LineTo(p) | Self::HorizontalLineTo(p) | Self::VerticalLineTo(p) => {
                write!(f, "L {}", fpt(p))
            }
            Self::CubicCurveTo { ctrl1, ctrl2, end } => {
                write!(f, "C {} {} {}", fpt(ctrl1), fpt(ctrl2), fpt(end))
            }
            Self::SmoothCubicCurveTo { ctrl2, end, .. } => {
                write!(f, "S {} {}", fpt(ctrl2), fpt(end))
            }
            Self::QuadraticCurveTo { ctrl, end } => write!(f, "Q {} {}", fpt(ctrl), fpt(end)),
            Self::SmoothQuadraticCurveTo { end, .. } => write!(f, "T {}", fpt(end)),
            Self::EllipticalArcTo { arc, end } => write!(
                f,
                "A {} {} {} {} {} {}",
                fstr(arc.rx),
                fstr(arc.ry),
                fstr(arc.rotation),
                u8::from(arc.large_arc),
                u8::from(arc.sweep),
                fpt(end)
            ),
            Self::ClosePath => write!(f, "Z"),
        }
    }
}

/// A fully-absolute sequence of path commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedPath {
    commands: Vec<PathCommand>,
}

impl NormalizedPath {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathCommand> + '_ {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// A new path with `xf` applied to every command
    pub fn transformed(&self, xf: &AffineTransform) -> Self {
        Self::new(self.commands.iter().map(|c| c.transformed(xf)).collect())
    }
}

impl From<Vec<PathCommand>> for NormalizedPath {
    fn from(commands: Vec<PathCommand>) -> Self {
        Self::new(commands)
    }
}

impl<'a> IntoIterator for &'a NormalizedPath {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl FromStr for NormalizedPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        normalize(s)
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.commands.iter().join(" "))
    }
}
