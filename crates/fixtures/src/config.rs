//! Generator configuration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default output directory, relative to the working directory
pub const DEFAULT_OUT_DIR: &str = "test/fixtures";

/// Zone the fixed timestamp input is constructed in
pub const DEFAULT_ZONE: &str = "Hongkong";

/// Secret the public key input is derived from
pub const DEFAULT_SECRET: &str = "foo";

/// Settings for one generation run
///
/// # Example
///
/// ```
/// use canonwire_fixtures::GeneratorConfig;
///
/// let config = GeneratorConfig::new()
///     .out_dir("/tmp/fixtures")
///     .zone("UTC");
/// assert_eq!(config.secret, "foo");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory the fixture files are written to or read from
    pub out_dir: PathBuf,
    /// IANA name of the reference zone
    pub zone: String,
    /// Secret for the Ed25519 key input
    pub secret: String,
    /// Pinned value for the "current instant" input; the clock when unset
    #[serde(skip)]
    pub now: Option<DateTime<Utc>>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            zone: DEFAULT_ZONE.to_string(),
            secret: DEFAULT_SECRET.to_string(),
            now: None,
        }
    }
}

impl GeneratorConfig {
    /// Configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    pub fn out_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.out_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the reference zone
    pub fn zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = zone.into();
        self
    }

    /// Set the key secret
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }

    /// Pin the current instant, making the whole fixture set reproducible
    pub fn now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }
}
