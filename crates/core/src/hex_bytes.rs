//! Byte sequences with a hex JSON rendering
//!
//! Hashes inside block identifiers are rendered as uppercase hex strings in
//! fixture documents, which is how other toolchains in this ecosystem print
//! them. Empty sequences render as `""`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

/// Owned byte sequence that serializes as an uppercase hex string
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexBytes(Vec<u8>);

impl HexBytes {
    /// Create from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        HexBytes(bytes.into())
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into the raw bytes
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for HexBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for HexBytes {
    fn from(bytes: Vec<u8>) -> Self {
        HexBytes(bytes)
    }
}

impl From<&[u8]> for HexBytes {
    fn from(bytes: &[u8]) -> Self {
        HexBytes(bytes.to_vec())
    }
}

impl fmt::Display for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(&self.0))
    }
}

impl Serialize for HexBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode_upper(&self.0))
    }
}

impl<'de> Deserialize<'de> for HexBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(&s)
            .map(HexBytes)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_uppercase() {
        let bytes = HexBytes::new(vec![0xab, 0x01, 0xff]);
        let json = serde_json::to_string(&bytes).unwrap();
        assert_eq!(json, r#""AB01FF""#);
    }

    #[test]
    fn test_serialize_empty() {
        let json = serde_json::to_string(&HexBytes::default()).unwrap();
        assert_eq!(json, r#""""#);
    }

    #[test]
    fn test_deserialize_accepts_either_case() {
        let upper: HexBytes = serde_json::from_str(r#""AB01""#).unwrap();
        let lower: HexBytes = serde_json::from_str(r#""ab01""#).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.as_bytes(), &[0xab, 0x01]);
    }

    #[test]
    fn test_deserialize_rejects_odd_length() {
        let result: Result<HexBytes, _> = serde_json::from_str(r#""ABC""#);
        assert!(result.is_err());
    }
}
