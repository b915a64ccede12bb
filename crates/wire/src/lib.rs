//! Wire encoding for canonwire
//!
//! This crate implements the deterministic binary encoding of canonwire
//! values. Equal values always produce identical bytes, so the output can be
//! hashed, signed and compared across implementations.
//!
//! ## Layers
//!
//! | Module | Role |
//! |--------|------|
//! | [`varint`] | LEB128 integers |
//! | [`registry`] | Names, prefixes and the interface table |
//! | [`binary`] | Structured encoding and strict decoding |
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use canonwire_core::{PubKey, PubKeyEd25519};
//! use canonwire_wire::{pubkey_registry, Decoder, Encoder};
//!
//! let registry = Arc::new(pubkey_registry().unwrap());
//! let encoder = Encoder::new(Arc::clone(&registry));
//! let decoder = Decoder::new(registry);
//!
//! let key = PubKey::from(PubKeyEd25519::from_secret(b"foo"));
//! let bytes = encoder.marshal_interface(&key).unwrap();
//! assert_eq!(&bytes[..4], &[0x16, 0x24, 0xde, 0x64]);
//! assert_eq!(decoder.unmarshal_interface::<PubKey>(&bytes).unwrap(), key);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binary;
pub mod error;
pub mod registry;
pub mod varint;

pub use binary::{
    pubkey_registry, Decode, Decoder, Encode, Encoder, FieldReader, FieldWriter, Interface,
    WireType, PUBKEY_ED25519_NAME,
};
pub use error::{DecodeError, EncodeError, RegistrationError};
pub use registry::{
    derive_prefix, ConcreteType, Disambiguation, Prefix, RegisteredType, RegistryBuilder,
    TypeRegistry,
};
pub use varint::{decode_uvarint, decode_varint, encode_uvarint, encode_varint};
