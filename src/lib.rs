//! # canonwire
//!
//! Deterministic binary encoding with golden fixtures.
//!
//! canonwire maps integers, composite structures, interface-typed values and
//! timestamps to canonical byte sequences, and produces golden fixtures that
//! any other implementation of the same encoding must reproduce exactly.
//!
//! ## Quick Start
//!
//! ```
//! use canonwire::prelude::*;
//!
//! let (encoder, decoder) = canonwire::codec()?;
//!
//! let id = BlockId::new(b"0123".to_vec(), PartSetHeader::new(1, Vec::<u8>::new()));
//! let bytes = encoder.marshal_bare(&id)?;
//! assert_eq!(decoder.unmarshal_bare::<BlockId>(&bytes)?, id);
//!
//! let key = PubKey::from(PubKeyEd25519::from_secret(b"foo"));
//! let bytes = encoder.marshal_interface(&key)?;
//! assert_eq!(bytes.len(), 36);
//! # Ok::<(), canonwire::Error>(())
//! ```
//!
//! ## Crates
//!
//! - [`canonwire_core`]: the value types
//! - [`canonwire_wire`]: varints, type registry, encoder and decoder
//! - [`canonwire_fixtures`]: fixture generation, writing and verification

#![warn(missing_docs)]

mod error;

pub mod prelude;

use std::sync::Arc;

pub use error::{Error, Result};

pub use canonwire_core::{
    load_zone, BlockId, HexBytes, PartSetHeader, PubKey, PubKeyEd25519, Timestamp,
};
pub use canonwire_fixtures::{
    verify_fixture_dir, write_fixture_set, Category, FixtureGenerator, FixtureRecord, FixtureSet,
    GeneratorConfig, Mismatch,
};
pub use canonwire_wire::{
    derive_prefix, encode_uvarint, encode_varint, pubkey_registry, Decode, Decoder, Encode,
    Encoder, Interface, Prefix, RegistryBuilder, TypeRegistry, PUBKEY_ED25519_NAME,
};

/// Encoder and decoder sharing the public key registry.
pub fn codec() -> Result<(Encoder, Decoder)> {
    let registry = Arc::new(pubkey_registry()?);
    Ok((Encoder::new(Arc::clone(&registry)), Decoder::new(registry)))
}

/// Generate every fixture for `config` and write it to `config.out_dir`.
pub fn generate(config: &GeneratorConfig) -> Result<FixtureSet> {
    let set = FixtureGenerator::with_default_registry(config.clone())?.generate_all()?;
    write_fixture_set(&config.out_dir, &set)?;
    Ok(set)
}

/// Check the fixtures in `config.out_dir` against a fresh generation.
pub fn verify(config: &GeneratorConfig) -> Result<Vec<Mismatch>> {
    let set = FixtureGenerator::with_default_registry(config.clone())?.generate_all()?;
    Ok(verify_fixture_dir(&config.out_dir, &set)?)
}
