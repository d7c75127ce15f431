//! Per-target error type.
//!
//! Each grab fails in one way at most. The session prints a distinct line per
//! kind, so callers and tests can tell them apart.

use std::io;
use std::path::PathBuf;

use crate::fetch::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum GrabError {
    /// The typed target cannot be turned into a request.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The final URL of a successful response names no usable file location.
    #[error("cannot derive output path: {0}")]
    OutputPath(String),

    /// Name resolution, connection, timeout or protocol failure.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Directory creation or file write failed.
    #[error("{}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GrabError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GrabError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
