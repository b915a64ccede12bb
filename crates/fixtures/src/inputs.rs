//! Fixed input sets
//!
//! Order is significant: records are emitted in the order listed here.
//!
//! `10000000000` is absent from the varint inputs until negative and large
//! value handling is settled across implementations.

use crate::error::{FixtureError, Result};
use canonwire_core::{BlockId, PartSetHeader, PubKey, PubKeyEd25519, Timestamp};
use chrono::{DateTime, TimeZone, Utc};

/// Varint inputs
pub const VARINT_VALUES: [i64; 5] = [0, 1, 255, 256, 100_000];

/// Seconds component of the fixed timestamp input
pub const FIXED_SECONDS: i64 = 123_456_789;

/// Nanoseconds component of the fixed timestamp input
pub const FIXED_NANOS: u32 = 123_456_789;

/// Hash used for both fields of the populated block id
pub const BLOCK_HASH: &[u8] = b"01234567890123456789";

/// Varint inputs, in emission order
pub fn varint_values() -> Vec<i64> {
    VARINT_VALUES.to_vec()
}

/// Timestamp inputs: the fixed instant built in `zone`, then `now`
///
/// Both are normalized to UTC.
pub fn time_values<Z: TimeZone>(zone: &Z, now: DateTime<Utc>) -> Result<Vec<Timestamp>> {
    let fixed = zone
        .timestamp_opt(FIXED_SECONDS, FIXED_NANOS)
        .single()
        .ok_or_else(|| {
            FixtureError::InvalidInput(format!(
                "{}.{:09} is not representable in the reference zone",
                FIXED_SECONDS, FIXED_NANOS
            ))
        })?;
    Ok(vec![Timestamp::from_zoned(&fixed), Timestamp::from(now)])
}

/// Block id inputs: the empty id, then a populated one
pub fn block_id_values() -> Vec<BlockId> {
    vec![
        BlockId::default(),
        BlockId::new(BLOCK_HASH, PartSetHeader::new(1, BLOCK_HASH)),
    ]
}

/// Public key input derived from `secret`
pub fn pubkey_value(secret: &str) -> PubKey {
    PubKey::Ed25519(PubKeyEd25519::from_secret(secret.as_bytes()))
}
