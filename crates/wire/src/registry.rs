//! Type registry for interface-typed values
//!
//! Polymorphic values are encoded as a 4-byte prefix followed by the body of
//! the concrete type. The prefix is derived from the name a concrete type is
//! registered under, so any implementation that knows the name computes the
//! same bytes without sharing runtime type tags.
//!
//! ## Prefix derivation
//!
//! ```text
//! h      = SHA-256(name)
//! h      = h without leading 0x00 bytes
//! disamb = h[0..3]
//! rest   = h[3..] without leading 0x00 bytes
//! prefix = rest[0..4]
//! ```
//!
//! `"tendermint/PubKeyEd25519"` yields disambiguation `ac2679` and prefix
//! `1624de64`.
//!
//! ## Lifecycle
//!
//! A [`RegistryBuilder`] collects interfaces and concrete types, rejecting any
//! conflict as it is registered. [`RegistryBuilder::build`] consumes the
//! builder, so a [`TypeRegistry`] can never change after the first encode.

use crate::error::{EncodeError, RegistrationError};
use sha2::{Digest, Sha256};
use std::any::{self, TypeId};
use std::collections::HashMap;
use std::fmt;

/// Width of a type prefix
pub const PREFIX_LEN: usize = 4;

/// Width of the disambiguation bytes
pub const DISAMBIGUATION_LEN: usize = 3;

/// Prefix written ahead of an interface-typed value's body
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix([u8; PREFIX_LEN]);

impl Prefix {
    /// Wrap raw prefix bytes
    pub const fn new(bytes: [u8; PREFIX_LEN]) -> Self {
        Prefix(bytes)
    }

    /// Raw prefix bytes
    pub fn as_bytes(&self) -> &[u8; PREFIX_LEN] {
        &self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prefix({})", self)
    }
}

/// Bytes that separate names whose prefixes would otherwise collide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Disambiguation([u8; DISAMBIGUATION_LEN]);

impl Disambiguation {
    /// Raw disambiguation bytes
    pub fn as_bytes(&self) -> &[u8; DISAMBIGUATION_LEN] {
        &self.0
    }
}

/// Derive disambiguation and prefix bytes from a registered name
pub fn derive_prefix(name: &str) -> (Disambiguation, Prefix) {
    let hash: [u8; 32] = Sha256::digest(name.as_bytes()).into();
    let mut rest = hash.iter().copied().skip_while(|b| *b == 0);

    let mut disamb = [0u8; DISAMBIGUATION_LEN];
    for slot in disamb.iter_mut() {
        *slot = rest.next().unwrap_or(0);
    }

    let mut prefix = [0u8; PREFIX_LEN];
    let mut rest = rest.skip_while(|b| *b == 0);
    for slot in prefix.iter_mut() {
        *slot = rest.next().unwrap_or(0);
    }

    (Disambiguation(disamb), Prefix(prefix))
}

/// Type identity plus a readable name for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConcreteType {
    /// Runtime type identity
    pub id: TypeId,
    /// Rust type name
    pub name: &'static str,
}

impl ConcreteType {
    /// Identity of `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        ConcreteType {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
        }
    }
}

/// One concrete implementation of a registered interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredType {
    /// Interface the type implements
    pub interface: ConcreteType,
    /// The concrete type
    pub concrete: ConcreteType,
    /// Name the type was registered under
    pub name: String,
    /// Disambiguation bytes derived from `name`
    pub disambiguation: Disambiguation,
    /// Prefix derived from `name`
    pub prefix: Prefix,
}

/// Collects registrations before the registry is frozen
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    interfaces: Vec<ConcreteType>,
    entries: Vec<RegisteredType>,
}

impl RegistryBuilder {
    /// Empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an interface type
    pub fn register_interface<I: ?Sized + 'static>(
        &mut self,
    ) -> Result<&mut Self, RegistrationError> {
        let interface = ConcreteType::of::<I>();
        if self.interfaces.iter().any(|i| i.id == interface.id) {
            return Err(RegistrationError::DuplicateInterface(interface.name));
        }
        self.interfaces.push(interface);
        Ok(self)
    }

    /// Register concrete type `C` as an implementation of interface `I`
    pub fn register_concrete<I: ?Sized + 'static, C: 'static>(
        &mut self,
        name: &str,
    ) -> Result<&mut Self, RegistrationError> {
        let interface = ConcreteType::of::<I>();
        let concrete = ConcreteType::of::<C>();

        if name.is_empty() {
            return Err(RegistrationError::EmptyName {
                concrete: concrete.name,
            });
        }
        if !self.interfaces.iter().any(|i| i.id == interface.id) {
            return Err(RegistrationError::UndeclaredInterface {
                interface: interface.name,
                concrete: concrete.name,
            });
        }
        if let Some(existing) = self.entries.iter().find(|e| e.concrete.id == concrete.id) {
            return Err(RegistrationError::DuplicateConcrete {
                concrete: concrete.name,
                name: existing.name.clone(),
            });
        }
        if let Some(existing) = self.entries.iter().find(|e| e.name == name) {
            return Err(RegistrationError::DuplicateName {
                name: name.to_string(),
                existing: existing.concrete.name,
                concrete: concrete.name,
            });
        }

        let (disambiguation, prefix) = derive_prefix(name);
        if let Some(existing) = self.entries.iter().find(|e| e.prefix == prefix) {
            return Err(RegistrationError::PrefixCollision {
                prefix,
                name: name.to_string(),
                existing: existing.name.clone(),
            });
        }

        self.entries.push(RegisteredType {
            interface,
            concrete,
            name: name.to_string(),
            disambiguation,
            prefix,
        });
        Ok(self)
    }

    /// Freeze the registrations
    pub fn build(self) -> TypeRegistry {
        let by_concrete = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.concrete.id, i))
            .collect();
        let by_prefix = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.prefix, i))
            .collect();
        TypeRegistry {
            interfaces: self.interfaces,
            entries: self.entries,
            by_concrete,
            by_prefix,
        }
    }
}

/// Immutable table of interface implementations
///
/// Shared read-only (usually behind an `Arc`) by every encoder and decoder.
#[derive(Debug)]
pub struct TypeRegistry {
    interfaces: Vec<ConcreteType>,
    entries: Vec<RegisteredType>,
    by_concrete: HashMap<TypeId, usize>,
    by_prefix: HashMap<Prefix, usize>,
}

impl TypeRegistry {
    /// Start a new registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// All registered implementations, in registration order
    pub fn entries(&self) -> &[RegisteredType] {
        &self.entries
    }

    /// Number of registered implementations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if `I` was declared as an interface
    pub fn is_interface<I: ?Sized + 'static>(&self) -> bool {
        let id = TypeId::of::<I>();
        self.interfaces.iter().any(|i| i.id == id)
    }

    /// Entry for a concrete type identity
    pub fn entry_for(&self, concrete: TypeId) -> Option<&RegisteredType> {
        self.by_concrete.get(&concrete).map(|&i| &self.entries[i])
    }

    /// Prefix of concrete type `C`
    pub fn prefix_for<C: 'static>(&self) -> Result<Prefix, EncodeError> {
        self.entry_for(TypeId::of::<C>())
            .map(|e| e.prefix)
            .ok_or(EncodeError::Unregistered {
                type_name: any::type_name::<C>(),
            })
    }

    /// Entry owning a prefix, used when decoding
    pub fn lookup_prefix(&self, prefix: &Prefix) -> Option<&RegisteredType> {
        self.by_prefix.get(prefix).map(|&i| &self.entries[i])
    }

    /// Entry registered under `name`
    pub fn lookup_name(&self, name: &str) -> Option<&RegisteredType> {
        self.entries.iter().find(|e| e.name == name)
    }
}
