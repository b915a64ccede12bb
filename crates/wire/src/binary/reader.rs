//! Decoding side of the structured codec
//!
//! Decoding is strict: fields must appear in increasing order, unknown
//! fields are rejected, and bytes left over after a value are an error.
//! Encoders omit default fields, so a field present with a zero, empty, or
//! empty-message payload is rejected too. Only canonical encodings decode.

use super::{Interface, WireType};
use crate::error::DecodeError;
use crate::registry::{Prefix, TypeRegistry, PREFIX_LEN};
use crate::varint::{decode_uvarint, decode_varint};
use std::any::{self, TypeId};
use std::sync::Arc;

/// A type that can be rebuilt from its canonical body
pub trait Decode: Sized {
    /// Read this value's fields; the reader is positioned at the first key
    fn decode_fields(r: &mut FieldReader<'_>) -> Result<Self, DecodeError>;
}

/// Cursor over one value's body
pub struct FieldReader<'a> {
    registry: &'a TypeRegistry,
    bytes: &'a [u8],
    pos: usize,
    last_field: u32,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(registry: &'a TypeRegistry, bytes: &'a [u8]) -> Self {
        FieldReader {
            registry,
            bytes,
            pos: 0,
            last_field: 0,
        }
    }

    /// Registry consulted for interface-typed fields
    pub fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    /// Unread byte count
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// Fail if anything is left unread
    pub fn finish(&self) -> Result<(), DecodeError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(DecodeError::TrailingBytes(n)),
        }
    }

    /// Read the next field key, or `None` at the end of the body
    pub fn next_field(&mut self) -> Result<Option<(u32, WireType)>, DecodeError> {
        if self.remaining() == 0 {
            return Ok(None);
        }
        let key = self.uvarint()?;
        let wire_type = WireType::from_tag((key & 0x07) as u8)?;
        let number = u32::try_from(key >> 3).map_err(|_| DecodeError::Overflow)?;
        if number == 0 {
            return Err(DecodeError::ZeroFieldNumber);
        }
        if number <= self.last_field {
            return Err(DecodeError::FieldOrder {
                previous: self.last_field,
                current: number,
            });
        }
        self.last_field = number;
        Ok(Some((number, wire_type)))
    }

    /// Check that field `number` arrived with the wire type it requires
    pub fn expect(number: u32, actual: WireType, expected: WireType) -> Result<(), DecodeError> {
        if actual == expected {
            Ok(())
        } else {
            Err(DecodeError::WrongWireType {
                number,
                expected: expected.tag(),
                actual: actual.tag(),
            })
        }
    }

    /// Unsigned varint payload; zero is never written
    pub fn read_uvarint(&mut self) -> Result<u64, DecodeError> {
        match self.uvarint()? {
            0 => Err(self.explicit_default()),
            value => Ok(value),
        }
    }

    /// Signed varint payload; zero is never written
    pub fn read_varint(&mut self) -> Result<i64, DecodeError> {
        let (value, len) = decode_varint(&self.bytes[self.pos..])?;
        self.pos += len;
        match value {
            0 => Err(self.explicit_default()),
            value => Ok(value),
        }
    }

    /// Length-prefixed payload; empty payloads are never written
    pub fn read_bytes(&mut self) -> Result<&'a [u8], DecodeError> {
        let len = usize::try_from(self.uvarint()?).map_err(|_| DecodeError::Overflow)?;
        if len == 0 {
            return Err(self.explicit_default());
        }
        self.take(len)
    }

    /// Length-prefixed nested structure
    pub fn read_message<T: Decode>(&mut self) -> Result<T, DecodeError> {
        let body = self.read_bytes()?;
        decode_body(self.registry, body)
    }

    /// Length-prefixed interface value (`prefix || body`)
    pub fn read_interface<I: Interface>(&mut self) -> Result<I, DecodeError> {
        let body = self.read_bytes()?;
        decode_prefixed(self.registry, body)
    }

    /// Exactly `N` verbatim bytes
    pub fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let slice = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    fn uvarint(&mut self) -> Result<u64, DecodeError> {
        let (value, len) = decode_uvarint(&self.bytes[self.pos..])?;
        self.pos += len;
        Ok(value)
    }

    fn explicit_default(&self) -> DecodeError {
        DecodeError::ExplicitDefault {
            number: self.last_field,
        }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if len > self.remaining() {
            return Err(DecodeError::Truncated {
                needed: len - self.remaining(),
            });
        }
        let slice = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }
}

fn decode_body<T: Decode>(registry: &TypeRegistry, bytes: &[u8]) -> Result<T, DecodeError> {
    let mut r = FieldReader::new(registry, bytes);
    let value = T::decode_fields(&mut r)?;
    r.finish()?;
    Ok(value)
}

fn decode_prefixed<I: Interface>(registry: &TypeRegistry, bytes: &[u8]) -> Result<I, DecodeError> {
    if bytes.len() < PREFIX_LEN {
        return Err(DecodeError::Truncated {
            needed: PREFIX_LEN - bytes.len(),
        });
    }
    let mut raw = [0u8; PREFIX_LEN];
    raw.copy_from_slice(&bytes[..PREFIX_LEN]);
    let prefix = Prefix::new(raw);

    let entry = registry
        .lookup_prefix(&prefix)
        .ok_or(DecodeError::UnknownPrefix(prefix))?;
    if entry.interface.id != TypeId::of::<I>() {
        return Err(DecodeError::InterfaceMismatch {
            interface: any::type_name::<I>(),
            name: entry.name.clone(),
        });
    }

    let mut r = FieldReader::new(registry, &bytes[PREFIX_LEN..]);
    let value = I::decode_concrete(entry.concrete.id, &mut r)?;
    r.finish()?;
    Ok(value)
}

/// Decodes canonical bytes against a frozen registry
#[derive(Debug, Clone)]
pub struct Decoder {
    registry: Arc<TypeRegistry>,
}

impl Decoder {
    /// Decoder over `registry`
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Decoder { registry }
    }

    /// The registry this decoder consults
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Decode a value written by `Encoder::marshal_bare`
    pub fn unmarshal_bare<T: Decode>(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        decode_body(&self.registry, bytes)
    }

    /// Decode a value written by `Encoder::marshal_interface`
    pub fn unmarshal_interface<I: Interface>(&self, bytes: &[u8]) -> Result<I, DecodeError> {
        decode_prefixed(&self.registry, bytes)
    }
}
