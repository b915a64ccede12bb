//! Structured binary encoding
//!
//! A value's body is a sequence of fields in declared order. Each present
//! field is a key followed by a payload:
//!
//! ```text
//! key     = uvarint((field_number << 3) | wire_type)
//! payload = uvarint                      (wire_type 0, integers)
//!         | uvarint(len) || bytes[len]   (wire_type 2, bytes / nested / interface)
//! ```
//!
//! Fields holding their default value (zero, empty bytes, a nested body that
//! encodes to nothing) are omitted, so an all-default value encodes to the
//! empty byte sequence.
//!
//! Interface-typed values are `prefix || body` where the prefix comes from
//! the [`TypeRegistry`](crate::TypeRegistry). At top level this is written
//! bare; as a field it is length-delimited like any nested value.

mod reader;
mod types;
mod writer;

pub use reader::{Decode, Decoder, FieldReader};
pub use types::{pubkey_registry, PUBKEY_ED25519_NAME};
pub use writer::{Encode, Encoder, FieldWriter};

use crate::error::{DecodeError, EncodeError};
use crate::registry::ConcreteType;
use std::any::TypeId;

/// Payload layout announced by a field key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireType {
    /// Unsigned varint payload
    Varint = 0,
    /// Length-prefixed payload
    LengthDelimited = 2,
}

impl WireType {
    /// Numeric tag as written in field keys
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Parse the low three bits of a field key
    pub fn from_tag(tag: u8) -> Result<Self, DecodeError> {
        match tag {
            0 => Ok(WireType::Varint),
            2 => Ok(WireType::LengthDelimited),
            other => Err(DecodeError::UnknownWireType(other)),
        }
    }
}

/// An interface-typed value space
///
/// Implemented by sum types whose variants are the registered concrete
/// types. Dispatch always goes through the registry: the encoder asks which
/// concrete type is held and looks up its prefix; the decoder resolves a
/// prefix to a concrete type and asks the interface to build that variant.
pub trait Interface: Sized + 'static {
    /// Identity of the concrete type currently held
    fn concrete_type(&self) -> ConcreteType;

    /// Write the held value's body (without prefix)
    fn encode_concrete(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError>;

    /// Build the variant for `concrete` from its body
    fn decode_concrete(concrete: TypeId, r: &mut FieldReader<'_>) -> Result<Self, DecodeError>;

    /// JSON rendering of the held value (without the type name)
    fn concrete_json(&self) -> Result<serde_json::Value, serde_json::Error>;
}
