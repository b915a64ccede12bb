//! Encoding side of the structured codec

use super::{Interface, WireType};
use crate::error::EncodeError;
use crate::registry::TypeRegistry;
use crate::varint::{write_uvarint, write_varint};
use std::any::{self, TypeId};
use std::io::Write;
use std::sync::Arc;

/// A type with a canonical structured body
pub trait Encode {
    /// Write this value's fields in declared order
    fn encode_fields(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError>;
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode_fields(&self, w: &mut FieldWriter<'_>) -> Result<(), EncodeError> {
        (**self).encode_fields(w)
    }
}

/// Accumulates one value's body
pub struct FieldWriter<'r> {
    registry: &'r TypeRegistry,
    buf: Vec<u8>,
}

impl<'r> FieldWriter<'r> {
    pub(crate) fn new(registry: &'r TypeRegistry) -> Self {
        FieldWriter {
            registry,
            buf: Vec::new(),
        }
    }

    /// Registry consulted for interface-typed fields
    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    /// Bytes written so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn key(&mut self, number: u32, wire_type: WireType) {
        debug_assert!(number > 0, "field numbers start at 1");
        let key = (u64::from(number) << 3) | u64::from(wire_type.tag());
        write_uvarint(&mut self.buf, key);
    }

    fn length_delimited(&mut self, number: u32, body: &[u8]) {
        self.key(number, WireType::LengthDelimited);
        write_uvarint(&mut self.buf, body.len() as u64);
        self.buf.extend_from_slice(body);
    }

    /// Signed integer field; omitted when zero
    pub fn varint(&mut self, number: u32, value: i64) -> Result<(), EncodeError> {
        if value == 0 {
            return Ok(());
        }
        if value < 0 {
            return Err(EncodeError::NegativeVarint(value));
        }
        self.key(number, WireType::Varint);
        write_varint(&mut self.buf, value)?;
        Ok(())
    }

    /// Unsigned integer field; omitted when zero
    pub fn uvarint(&mut self, number: u32, value: u64) -> Result<(), EncodeError> {
        if value == 0 {
            return Ok(());
        }
        self.key(number, WireType::Varint);
        write_uvarint(&mut self.buf, value);
        Ok(())
    }

    /// Byte sequence field, length-prefixed; omitted when empty
    pub fn bytes(&mut self, number: u32, value: &[u8]) -> Result<(), EncodeError> {
        if value.is_empty() {
            return Ok(());
        }
        self.length_delimited(number, value);
        Ok(())
    }

    /// Nested structure field, length-prefixed; omitted when its body is empty
    pub fn message<T: Encode + ?Sized>(&mut self, number: u32, value: &T) -> Result<(), EncodeError> {
        let mut nested = FieldWriter::new(self.registry);
        value.encode_fields(&mut nested)?;
        if nested.buf.is_empty() {
            return Ok(());
        }
        self.length_delimited(number, &nested.buf);
        Ok(())
    }

    /// Interface-typed field: `prefix || body`, length-prefixed
    pub fn interface<I: Interface>(&mut self, number: u32, value: &I) -> Result<(), EncodeError> {
        let body = prefixed_body(self.registry, value)?;
        self.length_delimited(number, &body);
        Ok(())
    }

    /// Verbatim bytes; only for fixed-width bodies whose size the type implies
    pub fn raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }
}

fn prefixed_body<I: Interface>(registry: &TypeRegistry, value: &I) -> Result<Vec<u8>, EncodeError> {
    let concrete = value.concrete_type();
    let entry = registry
        .entry_for(concrete.id)
        .ok_or(EncodeError::Unregistered {
            type_name: concrete.name,
        })?;
    if entry.interface.id != TypeId::of::<I>() {
        return Err(EncodeError::NotAnImplementation {
            interface: any::type_name::<I>(),
            type_name: concrete.name,
        });
    }

    let mut w = FieldWriter::new(registry);
    w.raw(entry.prefix.as_bytes());
    value.encode_concrete(&mut w)?;
    Ok(w.into_bytes())
}

/// Encodes values against a frozen registry
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use canonwire_core::{BlockId, PartSetHeader};
/// use canonwire_wire::{pubkey_registry, Encoder};
///
/// let encoder = Encoder::new(Arc::new(pubkey_registry().unwrap()));
/// assert!(encoder.marshal_bare(&BlockId::default()).unwrap().is_empty());
///
/// let id = BlockId::new(vec![0xab], PartSetHeader::new(1, Vec::<u8>::new()));
/// assert_eq!(encoder.marshal_bare(&id).unwrap(), vec![0x0a, 0x01, 0xab, 0x12, 0x02, 0x08, 0x01]);
/// ```
#[derive(Debug, Clone)]
pub struct Encoder {
    registry: Arc<TypeRegistry>,
}

impl Encoder {
    /// Encoder over `registry`
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Encoder { registry }
    }

    /// The registry this encoder consults
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Shared handle to the registry
    pub fn registry_arc(&self) -> Arc<TypeRegistry> {
        Arc::clone(&self.registry)
    }

    /// Encode a value's body with no outer length prefix
    pub fn marshal_bare<T: Encode + ?Sized>(&self, value: &T) -> Result<Vec<u8>, EncodeError> {
        let mut w = FieldWriter::new(&self.registry);
        value.encode_fields(&mut w)?;
        Ok(w.into_bytes())
    }

    /// Encode an interface-typed value as `prefix || body`
    pub fn marshal_interface<I: Interface>(&self, value: &I) -> Result<Vec<u8>, EncodeError> {
        prefixed_body(&self.registry, value)
    }

    /// Encode a value's body into `out`, returning the byte count
    pub fn write_bare<T: Encode + ?Sized, W: Write>(
        &self,
        value: &T,
        out: &mut W,
    ) -> Result<usize, EncodeError> {
        let bytes = self.marshal_bare(value)?;
        out.write_all(&bytes)?;
        Ok(bytes.len())
    }

    /// Registered name of the concrete type held by `value`
    pub fn type_name_of<I: Interface>(&self, value: &I) -> Result<&str, EncodeError> {
        let concrete = value.concrete_type();
        self.registry
            .entry_for(concrete.id)
            .map(|e| e.name.as_str())
            .ok_or(EncodeError::Unregistered {
                type_name: concrete.name,
            })
    }
}
