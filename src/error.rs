//! Error types for ansi_text.

use std::fmt;
use std::io;

/// Result type alias for ansi_text operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ansi_text operations.
///
/// Measuring and generating sequences never fails; errors only come from
/// configuration parsing and from writing sequences to an output stream.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing sequences.
    Io(io::Error),
    /// An environment override held a value that is not a recognized boolean.
    InvalidOverride {
        /// Name of the environment variable.
        var: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidOverride { var, value } => {
                write!(f, "invalid value for {var}: {value:?} (expected true or false)")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidOverride { .. } => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
