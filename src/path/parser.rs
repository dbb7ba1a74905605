use super::command::{CommandKind, NormalizedPath, PathCommand};
use super::syntax::PathSyntax;
use crate::errors::{Error, Result};
use crate::geometry::{ArcShape, Point};

/// Interprets SVG path data, yielding one absolute `PathCommand` per
/// command (or implicitly repeated command) in the input.
///
/// Iteration stops after the first error.
pub struct PathParser<'a> {
    tokens: PathSyntax<'a>,
    // current position, updated as commands are processed
    position: Option<Point>,
    // location to return to for 'Z'/'z' commands
    subpath_start: Option<Point>,
    // current command being processed; most commands take multiple parameter
    // sets without repeating the command character
    command: Option<(CommandKind, bool)>,
    // previous second control point (if any) for evaluating 'S' and 's'
    cubic_cp2: Option<Point>,
    // previous control point (if any) for evaluating 'T' and 't'
    quadratic_cp: Option<Point>,
    failed: bool,
}

/// Reflect `cp` through `about`, or `about` itself if there is no `cp`
fn reflect(cp: Option<Point>, about: Point) -> Point {
    cp.map_or(about, |(x, y)| (2. * about.0 - x, 2. * about.1 - y))
}

impl<'a> PathParser<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            tokens: PathSyntax::new(data),
            position: None,
            subpath_start: None,
            command: None,
            cubic_cp2: None,
            quadratic_cp: None,
            failed: false,
        }
    }

    /// Current point after the commands processed so far
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    fn read_point(&mut self, relative: bool, base: Point) -> Result<Point> {
        let (x, y) = self.tokens.read_coord()?;
        if relative {
            Ok((base.0 + x, base.1 + y))
        } else {
            Ok((x, y))
        }
    }

    fn next_kind(&mut self) -> Result<(CommandKind, bool)> {
        if self.tokens.peek_command().is_some() {
            // "The command letter can be eliminated on subsequent commands if the same
            // command is used multiple times in a row (e.g., you can drop the second
            // "L" in "M 100 200 L 200 100 L -100 -200" and use "M 100 200 L 200 100
            // -100 -200" instead)."
            let offset = self.tokens.offset();
            let letter = self.tokens.read_command()?;
            return CommandKind::from_letter(letter)
                .ok_or_else(|| Error::parse(format!("unknown command '{letter}'"), offset));
        }
        match self.command {
            // "If a moveto is followed by multiple pairs of coordinates,
            // the subsequent pairs are treated as implicit lineto commands."
            Some((CommandKind::MoveTo, relative)) => Ok((CommandKind::LineTo, relative)),
            // closepath takes no parameters, so cannot repeat
            Some((CommandKind::ClosePath, _)) | None => {
                let offset = self.tokens.offset();
                Err(Error::parse(
                    format!(
                        "expected path command, found '{}'",
                        self.tokens.snippet(offset)
                    ),
                    offset,
                ))
            }
            Some(cmd) => Ok(cmd),
        }
    }

    /// Process the next command; `Ok(None)` once the data is exhausted.
    pub fn next_command(&mut self) -> Result<Option<PathCommand>> {
        self.tokens.skip_wsp_comma();
        if self.tokens.at_end() {
            return Ok(None);
        }
        let offset = self.tokens.offset();
        let (kind, relative) = self.next_kind()?;
        self.command = Some((kind, relative));

        let start = match (kind, self.position) {
            // An initial relative moveto is treated as absolute
            (CommandKind::MoveTo, pos) => pos.unwrap_or((0., 0.)),
            (_, Some(pos)) => pos,
            (_, None) => {
                return Err(Error::parse(
                    format!("'{}' without a current point", kind.letter()),
                    offset,
                ))
            }
        };

        let mut cubic_cp2: Option<Point> = None;
        let mut quadratic_cp: Option<Point> = None;

        let cmd = match kind {
            CommandKind::MoveTo => {
                let xy = self.read_point(relative, start)?;
                self.subpath_start = Some(xy);
                PathCommand::MoveTo(xy)
            }
            CommandKind::LineTo => PathCommand::LineTo(self.read_point(relative, start)?),
            CommandKind::HorizontalLineTo => {
                let x = self.tokens.read_number()?;
                let x = if relative { start.0 + x } else { x };
                PathCommand::HorizontalLineTo((x, start.1))
            }
            CommandKind::VerticalLineTo => {
                let y = self.tokens.read_number()?;
                let y = if relative { start.1 + y } else { y };
                PathCommand::VerticalLineTo((start.0, y))
            }
            CommandKind::CubicCurveTo => {
                // (x1 y1 x2 y2 x y)+
                let ctrl1 = self.read_point(relative, start)?;
                let ctrl2 = self.read_point(relative, start)?;
                let end = self.read_point(relative, start)?;
                cubic_cp2 = Some(ctrl2);
                PathCommand::CubicCurveTo { ctrl1, ctrl2, end }
            }
            CommandKind::SmoothCubicCurveTo => {
                // (x2 y2 x y)+
                let ctrl2 = self.read_point(relative, start)?;
                let end = self.read_point(relative, start)?;
                // "The first control point is assumed to be the reflection of the second
                //  control point on the previous command relative to the current point.
                //  If there is no previous command or if the previous command was not an
                //  C, c, S or s, assume the first control point is coincident with the
                //  current point."
                let ctrl1 = reflect(self.cubic_cp2, start);
                cubic_cp2 = Some(ctrl2);
                PathCommand::SmoothCubicCurveTo { ctrl1, ctrl2, end }
            }
            CommandKind::QuadraticCurveTo => {
                // (x1 y1 x y)+
                let ctrl = self.read_point(relative, start)?;
                let end = self.read_point(relative, start)?;
                quadratic_cp = Some(ctrl);
                PathCommand::QuadraticCurveTo { ctrl, end }
            }
            CommandKind::SmoothQuadraticCurveTo => {
                // (x y)+
                let end = self.read_point(relative, start)?;
                // "The control point is assumed to be the reflection of the control point
                //  on the previous command relative to the current point. (If there is no
                //  previous command or if the previous command was not a Q, q, T or t,
                //  assume the control point is coincident with the current point.)"
                let ctrl = reflect(self.quadratic_cp, start);
                quadratic_cp = Some(ctrl);
                PathCommand::SmoothQuadraticCurveTo { ctrl, end }
            }
            CommandKind::EllipticalArcTo => {
                // (rx ry x-axis-rotation large-arc-flag sweep-flag x y)+
                let rx = self.tokens.read_number()?;
                let ry = self.tokens.read_number()?;
                let rotation = self.tokens.read_number()?;
                let large_arc = self.tokens.read_flag()?;
                let sweep = self.tokens.read_flag()?;
                let end = self.read_point(relative, start)?;
                PathCommand::EllipticalArcTo {
                    arc: ArcShape {
                        rx,
                        ry,
                        rotation,
                        large_arc,
                        sweep,
                    },
                    end,
                }
            }
            CommandKind::ClosePath => PathCommand::ClosePath,
        };

        self.position = match cmd {
            PathCommand::ClosePath => self.subpath_start,
            _ => cmd.end_point(),
        };
        self.cubic_cp2 = cubic_cp2;
        self.quadratic_cp = quadratic_cp;
        Ok(Some(cmd))
    }
}

impl Iterator for PathParser<'_> {
    type Item = Result<PathCommand>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let res = self.next_command();
        if res.is_err() {
            self.failed = true;
        }
        res.transpose()
    }
}

/// Interpret path data into a fully-absolute `NormalizedPath`.
///
/// Any error discards the whole path; no partial result is returned.
pub fn normalize(data: &str) -> Result<NormalizedPath> {
    PathParser::new(data)
        .collect::<Result<Vec<_>>>()
        .map(NormalizedPath::from)
}
