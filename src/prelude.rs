//! Convenient imports for canonwire.
//!
//! ```
//! use canonwire::prelude::*;
//!
//! let bytes = encode_varint(300)?;
//! assert_eq!(bytes, vec![0xac, 0x02]);
//! # Ok::<(), canonwire::Error>(())
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Values
pub use canonwire_core::{BlockId, PartSetHeader, PubKey, PubKeyEd25519, Timestamp};

// Codec
pub use canonwire_wire::{
    encode_varint, pubkey_registry, Decode, Decoder, Encode, Encoder, Interface, TypeRegistry,
};

// Fixtures
pub use canonwire_fixtures::{FixtureGenerator, FixtureSet, GeneratorConfig};
