//! Error types for the wire codec
//!
//! Three families, one per phase:
//! - [`RegistrationError`]: building the type registry (process start)
//! - [`EncodeError`]: turning values into bytes
//! - [`DecodeError`]: reading canonical bytes back

use crate::registry::Prefix;
use thiserror::Error;

/// Duplicate or conflicting type registration
///
/// Always fatal: a registry that reports one of these is never built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Interface declared twice
    #[error("interface {0} is already registered")]
    DuplicateInterface(&'static str),

    /// Concrete type registered against an interface nobody declared
    #[error("cannot register {concrete}: interface {interface} was never registered")]
    UndeclaredInterface {
        /// Interface type name
        interface: &'static str,
        /// Concrete type name
        concrete: &'static str,
    },

    /// Concrete type registered twice
    #[error("concrete type {concrete} is already registered as {name:?}")]
    DuplicateConcrete {
        /// Concrete type name
        concrete: &'static str,
        /// Name it was first registered under
        name: String,
    },

    /// Two concrete types share one registered name
    #[error("name {name:?} already belongs to {existing}, cannot reuse it for {concrete}")]
    DuplicateName {
        /// The contested name
        name: String,
        /// Type that holds the name
        existing: &'static str,
        /// Type that asked for it
        concrete: &'static str,
    },

    /// Two names hash to the same prefix
    #[error("prefix {prefix} of {name:?} collides with {existing:?}")]
    PrefixCollision {
        /// The shared prefix
        prefix: Prefix,
        /// Name being registered
        name: String,
        /// Name already holding the prefix
        existing: String,
    },

    /// Name is empty
    #[error("registered names must not be empty ({concrete})")]
    EmptyName {
        /// Concrete type name
        concrete: &'static str,
    },
}

/// Failure while encoding a value
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Negative integers have no specified canonical varint encoding
    #[error("varint encoding of negative value {0} is not specified")]
    NegativeVarint(i64),

    /// Value's concrete type has no registry entry
    #[error("type {type_name} is not registered")]
    Unregistered {
        /// Concrete type name
        type_name: &'static str,
    },

    /// Concrete type is registered, but under a different interface
    #[error("type {type_name} is not registered as an implementation of {interface}")]
    NotAnImplementation {
        /// Interface the value was encoded as
        interface: &'static str,
        /// Concrete type name
        type_name: &'static str,
    },

    /// The output sink failed
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure while decoding bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input ended early
    #[error("unexpected end of input: needed {needed} more bytes")]
    Truncated {
        /// Missing byte count (1 when unknown)
        needed: usize,
    },

    /// Varint does not fit the target integer
    #[error("varint overflows 64 bits")]
    Overflow,

    /// Varint carries redundant trailing zero groups
    #[error("varint is not minimally encoded")]
    NonMinimalVarint,

    /// Field key names an unsupported wire type
    #[error("unknown wire type {0}")]
    UnknownWireType(u8),

    /// Field key uses field number zero
    #[error("field number 0 is reserved")]
    ZeroFieldNumber,

    /// Field numbers must strictly increase
    #[error("field {current} follows field {previous}")]
    FieldOrder {
        /// Previous field number
        previous: u32,
        /// Offending field number
        current: u32,
    },

    /// Field present with the value encoders omit
    #[error("field {number} is explicitly encoded with its default value")]
    ExplicitDefault {
        /// Field number
        number: u32,
    },

    /// Field number not part of the type
    #[error("unknown field {number} in {type_name}")]
    UnknownField {
        /// Field number read
        number: u32,
        /// Type being decoded
        type_name: &'static str,
    },

    /// Known field with the wrong wire type
    #[error("field {number} expects wire type {expected}, got {actual}")]
    WrongWireType {
        /// Field number
        number: u32,
        /// Wire type the field requires
        expected: u8,
        /// Wire type found
        actual: u8,
    },

    /// Prefix matches no registered type
    #[error("unknown prefix {0}")]
    UnknownPrefix(Prefix),

    /// Prefix belongs to a type of another interface
    #[error("{name:?} is not an implementation of {interface}")]
    InterfaceMismatch {
        /// Interface being decoded
        interface: &'static str,
        /// Registered name the prefix resolved to
        name: String,
    },

    /// Bytes left after a complete value
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),

    /// Decoded field is out of range for its type
    #[error("invalid value: {0}")]
    InvalidValue(String),
}
