//! DSN parse errors.

use thiserror::Error;

/// Result type for DSN parsing.
pub type Result<T> = core::result::Result<T, Error>;

/// DSN parse error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input does not match any recognized DSN shape.
    #[error("{message} ({dsn})")]
    Syntax {
        /// The raw input that failed to parse.
        dsn: String,
        /// What was wrong with it.
        message: String,
    },

    /// A port was present but is not an integer in `1..=65535`.
    #[error("Invalid port ({port})")]
    InvalidPort {
        /// The offending port string.
        port: String,
    },
}

impl Error {
    /// Creates a syntax error for the given input.
    #[must_use]
    pub(crate) fn syntax(dsn: &str, message: impl Into<String>) -> Self {
        Self::Syntax {
            dsn: dsn.to_owned(),
            message: message.into(),
        }
    }

    /// Creates a port error.
    #[must_use]
    pub(crate) fn invalid_port(port: &str) -> Self {
        Self::InvalidPort {
            port: port.to_owned(),
        }
    }

    /// Returns the error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax { .. } => ErrorKind::Syntax,
            Self::InvalidPort { .. } => ErrorKind::InvalidPort,
        }
    }

    /// Returns the raw input of a syntax error.
    #[must_use]
    pub fn dsn(&self) -> Option<&str> {
        match self {
            Self::Syntax { dsn, .. } => Some(dsn),
            Self::InvalidPort { .. } => None,
        }
    }
}

/// Parse error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed DSN.
    Syntax,
    /// Port out of range or not a number.
    InvalidPort,
}
