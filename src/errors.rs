//! Definition of errors.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors in runetrie.
///
/// Building and searching an automaton never fail; only loading patterns and
/// texts from external resources does.
#[derive(Debug)]
pub enum RunetrieError {
    /// Contains [`io::Error`].
    Io(io::Error),

    /// Contains [`InvalidUtf8Error`].
    InvalidUtf8(InvalidUtf8Error),
}

impl RunetrieError {
    pub(crate) const fn invalid_utf8(line: Option<usize>) -> Self {
        Self::InvalidUtf8(InvalidUtf8Error { line })
    }
}

impl fmt::Display for RunetrieError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => e.fmt(f),
            Self::InvalidUtf8(e) => e.fmt(f),
        }
    }
}

impl Error for RunetrieError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidUtf8(e) => Some(e),
        }
    }
}

impl From<io::Error> for RunetrieError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Error used when the input is not valid UTF-8.
#[derive(Debug)]
pub struct InvalidUtf8Error {
    /// 1-based line number, when reading line by line.
    pub(crate) line: Option<usize>,
}

impl InvalidUtf8Error {
    /// Returns the 1-based line number of the invalid line, if known.
    pub const fn line(&self) -> Option<usize> {
        self.line
    }
}

impl fmt::Display for InvalidUtf8Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "InvalidUtf8Error: line {}", line),
            None => write!(f, "InvalidUtf8Error"),
        }
    }
}

impl Error for InvalidUtf8Error {}

/// A specialized Result type for runetrie.
pub type Result<T, E = RunetrieError> = std::result::Result<T, E>;
