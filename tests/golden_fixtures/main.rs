//! Golden Fixture Test Suite
//!
//! End-to-end checks of the fixtures canonwire produces: the pinned
//! encodings every other implementation must reproduce, and the
//! write/verify round trip on disk.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test golden_fixtures
//!
//! # Disk round trip only
//! cargo test --test golden_fixtures files::
//! ```

use chrono::{DateTime, TimeZone, Utc};

use canonwire::{FixtureGenerator, FixtureSet, GeneratorConfig};

// Test modules
pub mod encodings;
pub mod files;
pub mod registry;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Hash used by the populated block id, as lowercase hex
pub const BLOCK_HASH_HEX: &str = "3031323334353637383930313233343536373839";

/// Raw Ed25519 key derived from secret "foo"
pub const FOO_PUBKEY_HEX: &str =
    "34d26579dbb456693e540672cf922f52dde0d6532e35bf06be013a7c532f20e0";

/// A fixed "current" instant so whole fixture sets compare equal
pub fn pinned_now() -> DateTime<Utc> {
    Utc.timestamp_opt(1_650_000_000, 987_654_321).single().unwrap()
}

/// Default configuration with the pinned instant
pub fn pinned_config() -> GeneratorConfig {
    GeneratorConfig::new().now(pinned_now())
}

/// Generate a full set under the pinned configuration
pub fn pinned_set() -> FixtureSet {
    FixtureGenerator::with_default_registry(pinned_config())
        .unwrap()
        .generate_all()
        .unwrap()
}
