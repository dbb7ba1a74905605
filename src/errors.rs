use std::error::Error as StdError;
use std::fmt;
use std::num::ParseFloatError;
use std::string::FromUtf8Error;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// Malformed or incomplete path data; `offset` is a byte offset into the path string
    Parse { reason: String, offset: usize },
    Document(String),
    MissingLayer(String),
    /// An error attributed to a single stroke, identified by element id or position
    Stroke { id: String, source: Box<Error> },
    Json(serde_json::Error),
    InvalidValue(String, String),
    Cli(String),
    Other(Box<dyn StdError>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(source) => write!(f, "IO error: {source}"),
            Error::Parse { reason, offset } => {
                write!(f, "Parse error at offset {offset}: {reason}")
            }
            Error::Document(reason) => write!(f, "Document error: {reason}"),
            Error::MissingLayer(layer) => write!(f, "Required layer '{layer}' not found"),
            Error::Stroke { id, source } => write!(f, "Stroke '{id}': {source}"),
            Error::Json(source) => write!(f, "JSON error: {source}"),
            Error::InvalidValue(what, value) => write!(f, "Invalid {what}: '{value}'"),
            Error::Cli(reason) => write!(f, "{reason}"),
            Error::Other(source) => write!(f, "{source}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(source) => Some(source),
            Error::Stroke { source, .. } => Some(&**source),
            Error::Json(source) => Some(source),
            Error::Other(source) => Some(&**source),
            Error::Parse { .. }
            | Error::Document(_)
            | Error::MissingLayer(_)
            | Error::InvalidValue(_, _)
            | Error::Cli(_) => None,
        }
    }
}

impl Error {
    pub fn from_err<T>(err: T) -> Error
    where
        T: StdError + 'static,
    {
        Error::Other(Box::new(err))
    }

    pub(crate) fn parse(reason: impl Into<String>, offset: usize) -> Error {
        Error::Parse {
            reason: reason.into(),
            offset,
        }
    }

    /// Attach a stroke identifier to this error.
    pub(crate) fn in_stroke(self, id: impl Into<String>) -> Error {
        Error::Stroke {
            id: id.into(),
            source: Box::new(self),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Json(err)
    }
}

impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Error {
        Error::InvalidValue("number".to_string(), err.to_string())
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Error {
        Error::Document(format!("utf8: {err}"))
    }
}
