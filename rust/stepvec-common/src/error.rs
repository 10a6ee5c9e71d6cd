use std::ops::Range;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn zero_length(start: i64, end: i64) -> Error {
        Error(ErrorKind::ZeroLength { start, end }.into())
    }

    pub fn out_of_range(requested: Range<i64>, bounds: Range<i64>) -> Error {
        Error(ErrorKind::OutOfRange { requested, bounds }.into())
    }

    pub fn inverted_range(start: i64, end: i64) -> Error {
        Error(ErrorKind::InvertedRange { start, end }.into())
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// Returns `true` for [`ErrorKind::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }

    /// Returns `true` for [`ErrorKind::InvertedRange`].
    pub fn is_inverted_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvertedRange { .. })
    }

    /// Returns `true` for [`ErrorKind::ZeroLength`].
    pub fn is_zero_length(&self) -> bool {
        matches!(self.kind(), ErrorKind::ZeroLength { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("attempt to create zero length vector over [{start}, {end})")]
    ZeroLength { start: i64, end: i64 },

    #[error("index out of range: {requested:?} is outside {bounds:?}")]
    OutOfRange {
        requested: Range<i64>,
        bounds: Range<i64>,
    },

    #[error("inverted range: start {start} is past end {end}")]
    InvertedRange { start: i64, end: i64 },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
