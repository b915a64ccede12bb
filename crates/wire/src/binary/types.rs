//! Field layouts of the core value types
//!
//! | Type | Field | Number | Wire type |
//! |------|-------|--------|-----------|
//! | BlockId | hash | 1 | 2 |
//! | BlockId | parts | 2 | 2 |
//! | PartSetHeader | total | 1 | 0 |
//! | PartSetHeader | hash | 2 | 2 |
//! | Timestamp | seconds | 1 | 0 |
//! | Timestamp | nanos | 2 | 0 |
//!
//! `PubKeyEd25519` has a fixed-width body: its 32 key bytes, written verbatim
//! after the prefix with no length in front.

use super::{Decode, Encode, FieldReader, FieldWriter, Interface, WireType};
use crate::error::{DecodeError, EncodeError, RegistrationError};
use crate::registry::{ConcreteType, TypeRegistry};
use canonwire_core::time::MAX_NANOS;
use canonwire_core::{BlockId, PartSetHeader, PubKey, PubKeyEd25519, Timestamp};
use chrono::{DateTime, TimeZone};
use std::any::TypeId;

/// Registered name of [`PubKeyEd25519`]
pub const PUBKEY_ED25519_NAME: &str = "tendermint/PubKeyEd25519";

/// Registry holding the public key interface and its implementations
pub fn pubkey_registry() -> Result<TypeRegistry, RegistrationError> {
    let mut builder = TypeRegistry::builder();
    builder
        .register_interface::<PubKey>()?
        .register_concrete::<PubKey, PubKeyEd25519>(PUBKEY_ED25519_NAME)?;
    Ok(builder.build())
}

fn unknown_field(number: u32, type_name: &'static str) -> DecodeError {
    DecodeError::UnknownField { number, type_name }
}

impl Encode for PartSetHeader {
    fn encode_fields(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        w.varint(1, self.total)?;
        w.bytes(2, &self.hash)
    }
}

impl Decode for PartSetHeader {
    fn decode_fields(r: &mut FieldReader<'_>) -> Result<Self, DecodeError> {
        let mut header = PartSetHeader::default();
        while let Some((number, wire_type)) = r.next_field()? {
            match number {
                1 => {
                    FieldReader::expect(number, wire_type, WireType::Varint)?;
                    header.total = r.read_varint()?;
                }
                2 => {
                    FieldReader::expect(number, wire_type, WireType::LengthDelimited)?;
                    header.hash = r.read_bytes()?.into();
                }
                _ => return Err(unknown_field(number, "PartSetHeader")),
            }
        }
        Ok(header)
    }
}

impl Encode for BlockId {
    fn encode_fields(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        w.bytes(1, &self.hash)?;
        w.message(2, &self.parts)
    }
}

impl Decode for BlockId {
    fn decode_fields(r: &mut FieldReader<'_>) -> Result<Self, DecodeError> {
        let mut id = BlockId::default();
        while let Some((number, wire_type)) = r.next_field()? {
            match number {
                1 => {
                    FieldReader::expect(number, wire_type, WireType::LengthDelimited)?;
                    id.hash = r.read_bytes()?.into();
                }
                2 => {
                    FieldReader::expect(number, wire_type, WireType::LengthDelimited)?;
                    id.parts = r.read_message()?;
                }
                _ => return Err(unknown_field(number, "BlockId")),
            }
        }
        Ok(id)
    }
}

impl Encode for Timestamp {
    fn encode_fields(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        w.varint(1, self.seconds())?;
        w.uvarint(2, u64::from(self.subsec_nanos()))
    }
}

/// Zoned datetimes encode as the UTC instant they denote
impl<Z: TimeZone> Encode for DateTime<Z> {
    fn encode_fields(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        Timestamp::from_zoned(self).encode_fields(w)
    }
}

impl Decode for Timestamp {
    fn decode_fields(r: &mut FieldReader<'_>) -> Result<Self, DecodeError> {
        let mut seconds = 0i64;
        let mut nanos = 0u64;
        while let Some((number, wire_type)) = r.next_field()? {
            match number {
                1 => {
                    FieldReader::expect(number, wire_type, WireType::Varint)?;
                    seconds = r.read_varint()?;
                }
                2 => {
                    FieldReader::expect(number, wire_type, WireType::Varint)?;
                    nanos = r.read_uvarint()?;
                }
                _ => return Err(unknown_field(number, "Timestamp")),
            }
        }
        let nanos = u32::try_from(nanos)
            .ok()
            .filter(|n| *n <= MAX_NANOS)
            .ok_or_else(|| DecodeError::InvalidValue(format!("nanos {} out of range", nanos)))?;
        Timestamp::from_unix(seconds, nanos)
            .ok_or_else(|| DecodeError::InvalidValue(format!("seconds {} out of range", seconds)))
    }
}

impl Interface for PubKey {
    fn concrete_type(&self) -> ConcreteType {
        match self {
            PubKey::Ed25519(_) => ConcreteType::of::<PubKeyEd25519>(),
        }
    }

    fn encode_concrete(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        match self {
            PubKey::Ed25519(key) => w.raw(key.as_bytes()),
        }
        Ok(())
    }

    fn decode_concrete(concrete: TypeId, r: &mut FieldReader<'_>) -> Result<Self, DecodeError> {
        if concrete == TypeId::of::<PubKeyEd25519>() {
            return Ok(PubKey::Ed25519(PubKeyEd25519(r.read_fixed()?)));
        }
        Err(DecodeError::InvalidValue(
            "registered type is not a public key".to_string(),
        ))
    }

    fn concrete_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            PubKey::Ed25519(key) => serde_json::to_value(key),
        }
    }
}
