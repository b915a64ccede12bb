//! Unified error type for canonwire.
//!
//! Each crate reports its own error enum; this module folds them into one
//! stable type for callers of the facade.

use canonwire_core::TimeZoneLoadError;
use canonwire_fixtures::FixtureError;
use canonwire_wire::{DecodeError, EncodeError, RegistrationError};
use thiserror::Error;

/// All canonwire errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Conflicting or duplicate type registration
    #[error("registration error: {0}")]
    Registration(String),

    /// Value could not be encoded
    #[error("encode error: {0}")]
    Encode(String),

    /// Bytes could not be decoded
    #[error("decode error: {0}")]
    Decode(String),

    /// Named time zone unavailable
    #[error("time zone error: {0}")]
    TimeZone(String),

    /// Fixture file is not a fixture document
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),

    /// Input value could not be constructed
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for canonwire operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error comes from the codec itself rather than its
    /// surroundings (files, zones, JSON).
    pub fn is_codec(&self) -> bool {
        matches!(
            self,
            Error::Registration(_) | Error::Encode(_) | Error::Decode(_)
        )
    }
}

impl From<RegistrationError> for Error {
    fn from(e: RegistrationError) -> Self {
        Error::Registration(e.to_string())
    }
}

impl From<EncodeError> for Error {
    fn from(e: EncodeError) -> Self {
        match e {
            EncodeError::Io(io_err) => Error::Io(io_err),
            other => Error::Encode(other.to_string()),
        }
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Error::Decode(e.to_string())
    }
}

impl From<TimeZoneLoadError> for Error {
    fn from(e: TimeZoneLoadError) -> Self {
        Error::TimeZone(e.to_string())
    }
}

impl From<FixtureError> for Error {
    fn from(e: FixtureError) -> Self {
        match e {
            FixtureError::Registration(e) => e.into(),
            FixtureError::Encode(e) => e.into(),
            FixtureError::Decode(e) => e.into(),
            FixtureError::TimeZone(e) => e.into(),
            FixtureError::Serialization(e) => e.into(),
            FixtureError::Io { path, source } => Error::Io(std::io::Error::new(
                source.kind(),
                format!("{}: {}", path.display(), source),
            )),
            e @ FixtureError::InvalidFixture { .. } => Error::InvalidFixture(e.to_string()),
            FixtureError::InvalidInput(msg) => Error::InvalidInput(msg),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
