//! Public key values
//!
//! [`PubKey`] is the interface-typed value space: every concrete key type
//! the codec can carry is one variant. Which variant is on the wire is told
//! by the disambiguation prefix the type registry assigns to it, never by a
//! Rust discriminant.
//!
//! Key derivation is an external collaborator from the codec's point of view.
//! It is kept here only so the fixture harness can produce a deterministic
//! key from a passphrase.

use base64::Engine;
use ed25519_dalek::SigningKey;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

/// Ed25519 public key size in bytes
pub const ED25519_PUBKEY_SIZE: usize = 32;

/// Raw Ed25519 public key
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PubKeyEd25519(pub [u8; ED25519_PUBKEY_SIZE]);

impl PubKeyEd25519 {
    /// Derive the public key for a passphrase-style secret
    ///
    /// The signing seed is `SHA-256(secret)`; the result is the Ed25519
    /// public key of that seed.
    pub fn from_secret(secret: &[u8]) -> Self {
        let seed: [u8; 32] = Sha256::digest(secret).into();
        let signing = SigningKey::from_bytes(&seed);
        PubKeyEd25519(signing.verifying_key().to_bytes())
    }

    /// Borrow the raw key bytes
    pub fn as_bytes(&self) -> &[u8; ED25519_PUBKEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for PubKeyEd25519 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PubKeyEd25519({})", hex::encode_upper(self.0))
    }
}

impl Serialize for PubKeyEd25519 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let b64 = base64::engine::general_purpose::STANDARD.encode(self.0);
        serializer.serialize_str(&b64)
    }
}

impl<'de> Deserialize<'de> for PubKeyEd25519 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let raw = base64::engine::general_purpose::STANDARD
            .decode(s.as_bytes())
            .map_err(serde::de::Error::custom)?;
        let key: [u8; ED25519_PUBKEY_SIZE] = raw.as_slice().try_into().map_err(|_| {
            serde::de::Error::invalid_length(raw.len(), &"32 bytes of Ed25519 public key")
        })?;
        Ok(PubKeyEd25519(key))
    }
}

/// Polymorphic public key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PubKey {
    /// Ed25519 key
    Ed25519(PubKeyEd25519),
}

impl PubKey {
    /// Raw key bytes of whichever concrete key is held
    pub fn raw_bytes(&self) -> &[u8] {
        match self {
            PubKey::Ed25519(k) => k.as_bytes(),
        }
    }
}

impl From<PubKeyEd25519> for PubKey {
    fn from(key: PubKeyEd25519) -> Self {
        PubKey::Ed25519(key)
    }
}
