//! Errors surfaced by element construction and flushing.

use facet::Facet;

/// Errors that can occur while classifying arguments or flushing markup.
///
/// Neither kind is fatal: the element involved stays usable afterwards.
#[derive(Facet, Debug)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum Error {
    /// invalid argument: {reason}
    InvalidArgument { reason: String },

    /// failed to write markup to sink: {message}
    Io { message: String },
}

impl Error {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Returns true if this error came from the output sink.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
