//! Golden fixtures for the canonwire codec
//!
//! A fixture is a pair of an input value and the lowercase hex of its
//! canonical encoding. Any other implementation of the encoding must
//! reproduce every fixture byte for byte.
//!
//! | File | Contents |
//! |------|----------|
//! | `varint.json` | `0, 1, 255, 256, 100000` as bare varints |
//! | `time.json` | a fixed instant and the current instant |
//! | `block_id.json` | an empty and a populated block id |
//! | `pubkey.json` | one Ed25519 key through the interface path |
//!
//! # Example
//!
//! ```no_run
//! use canonwire_fixtures::{write_fixture_set, FixtureGenerator, GeneratorConfig};
//!
//! let config = GeneratorConfig::new().out_dir("test/fixtures");
//! let generator = FixtureGenerator::with_default_registry(config.clone())?;
//! let set = generator.generate_all()?;
//! write_fixture_set(&config.out_dir, &set)?;
//! # Ok::<(), canonwire_fixtures::FixtureError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod generator;
pub mod inputs;
pub mod record;
pub mod verify;
pub mod writer;

pub use config::GeneratorConfig;
pub use error::{FixtureError, Result};
pub use generator::FixtureGenerator;
pub use inputs::{block_id_values, pubkey_value, time_values, varint_values};
pub use record::{Category, FixtureRecord, FixtureSet, TypedValue};
pub use verify::{verify_fixture_dir, Mismatch};
pub use writer::{render_fixture_set, write_fixture_set};
