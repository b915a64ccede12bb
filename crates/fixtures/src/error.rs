//! Errors raised while generating, writing or verifying fixtures

use canonwire_core::TimeZoneLoadError;
use canonwire_wire::{DecodeError, EncodeError, RegistrationError};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Any failure in the fixture pipeline
///
/// Generation is all-or-nothing: the first error aborts the run.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The type registry could not be built
    #[error("registry: {0}")]
    Registration(#[from] RegistrationError),

    /// A value could not be encoded
    #[error("encode: {0}")]
    Encode(#[from] EncodeError),

    /// Bytes read back from a fixture did not decode
    #[error("decode: {0}")]
    Decode(#[from] DecodeError),

    /// Reference zone unavailable
    #[error(transparent)]
    TimeZone(#[from] TimeZoneLoadError),

    /// JSON rendering or parsing failed
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem operation failed
    #[error("{}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A fixture file exists but is not a fixture document
    #[error("{}: invalid fixture: {reason}", path.display())]
    InvalidFixture {
        /// Offending file
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// An input value could not be constructed
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl FixtureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixtureError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        FixtureError::InvalidFixture {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
