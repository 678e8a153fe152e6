//! Error types for beatmap conversion
//!
//! Every failure inside one directory's conversion is captured as a
//! `ConvertError` and stored in that directory's `ConversionResult`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a `ConvertError`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The index or a referenced difficulty file does not exist
    NotFound,
    /// The file exists but is not valid structured text
    Malformed,
    /// Any other read, write or encode failure
    Io,
}

/// Errors that can occur while converting one beatmap directory
#[derive(Error, Debug)]
pub enum ConvertError {
    /// No `info.json` in the directory; callers treat this as a skip
    #[error("info.json not found in '{}'", dir.display())]
    InfoNotFound { dir: PathBuf },

    /// A difficulty listed in the index has no data file
    #[error("{reference} not found in '{}'", dir.display())]
    DifficultyNotFound { dir: PathBuf, reference: String },

    /// File content is not valid JSON or not a JSON object
    #[error("invalid JSON in '{}': {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// File bytes could not be decoded as text
    #[error("'{}' is not valid {encoding} text", path.display())]
    Encoding { path: PathBuf, encoding: &'static str },

    /// I/O error other than a missing file
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Rendering a record to JSON failed
    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ConvertError {
    /// Classify the error for status reporting
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::InfoNotFound { .. } | ConvertError::DifficultyNotFound { .. } => {
                ErrorKind::NotFound
            }
            ConvertError::Malformed { .. } | ConvertError::Encoding { .. } => ErrorKind::Malformed,
            ConvertError::Io { .. } | ConvertError::Serialize { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
