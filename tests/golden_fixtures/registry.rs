//! Type Registry Tests
//!
//! Registration conflicts and interface dispatch through the facade.

use canonwire::prelude::*;
use canonwire::{derive_prefix, PUBKEY_ED25519_NAME};
use canonwire_wire::{DecodeError, RegistrationError};

// =============================================================================
// PREFIXES
// =============================================================================

#[test]
fn test_pubkey_prefix() {
    let registry = pubkey_registry().unwrap();
    let entry = registry.lookup_name(PUBKEY_ED25519_NAME).unwrap();
    assert_eq!(entry.prefix.to_string(), "1624de64");
    assert_eq!(entry.prefix, derive_prefix(PUBKEY_ED25519_NAME).1);
    assert_eq!(entry.disambiguation.as_bytes(), &[0xac, 0x26, 0x79]);
}

// =============================================================================
// CONFLICTS
// =============================================================================

#[test]
fn test_pubkey_registered_twice_fails() {
    let mut builder = TypeRegistry::builder();
    builder
        .register_interface::<PubKey>()
        .unwrap()
        .register_concrete::<PubKey, PubKeyEd25519>(PUBKEY_ED25519_NAME)
        .unwrap();
    let err = builder
        .register_concrete::<PubKey, PubKeyEd25519>(PUBKEY_ED25519_NAME)
        .unwrap_err();
    assert!(matches!(err, RegistrationError::DuplicateConcrete { .. }));

    let facade_err: canonwire::Error = err.into();
    assert!(facade_err.is_codec());
}

#[test]
fn test_concrete_before_interface_fails() {
    let mut builder = TypeRegistry::builder();
    assert!(matches!(
        builder.register_concrete::<PubKey, PubKeyEd25519>(PUBKEY_ED25519_NAME),
        Err(RegistrationError::UndeclaredInterface { .. })
    ));
}

// =============================================================================
// DISPATCH
// =============================================================================

#[test]
fn test_interface_round_trip() {
    let (encoder, decoder) = canonwire::codec().unwrap();
    let key = PubKey::from(PubKeyEd25519::from_secret(b"foo"));
    let bytes = encoder.marshal_interface(&key).unwrap();
    assert_eq!(decoder.unmarshal_interface::<PubKey>(&bytes).unwrap(), key);
}

#[test]
fn test_unknown_prefix_is_rejected() {
    let (encoder, decoder) = canonwire::codec().unwrap();
    let key = PubKey::from(PubKeyEd25519::from_secret(b"foo"));
    let mut bytes = encoder.marshal_interface(&key).unwrap();
    bytes[0] ^= 0xff;
    assert!(matches!(
        decoder.unmarshal_interface::<PubKey>(&bytes),
        Err(DecodeError::UnknownPrefix(_))
    ));
}

#[test]
fn test_empty_registry_cannot_encode_keys() {
    let encoder = Encoder::new(std::sync::Arc::new(TypeRegistry::builder().build()));
    let key = PubKey::from(PubKeyEd25519::from_secret(b"foo"));
    assert!(encoder.marshal_interface(&key).is_err());
}
