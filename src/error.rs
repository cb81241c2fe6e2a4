//! Error types for the synthesis core.
//!
//! The library uses [`DvncError`] via `thiserror`. The binary and the
//! REPL adapter wrap it with `anyhow` for context.

use std::path::PathBuf;

/// Top-level error type for all core operations.
#[derive(Debug, thiserror::Error)]
pub enum DvncError {
    /// Invalid knowledge configuration. Fatal at startup.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// The caller broke the input contract (e.g. a null prompt).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A JSON document could not be decoded.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DvncError>;

impl DvncError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration {
            message: msg.into(),
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: msg.into(),
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
