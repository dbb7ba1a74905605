//! SVG path data: lexing, interpretation into absolute commands,
//! serialization and exact bounding boxes.

mod bbox;
mod command;
mod parser;
mod syntax;

pub use bbox::path_bbox;
pub use command::{CommandKind, NormalizedPath, PathCommand};
pub use parser::{normalize, PathParser};
pub use syntax::{tokenize, PathSyntax, Token, TokenKind};
