//! Pinned Encodings Tests
//!
//! The bytes in these tests are the contract: they must never change.

use crate::*;
use canonwire::prelude::*;
use canonwire::Category;
use canonwire_wire::EncodeError;
use proptest::prelude::*;
use serde_json::json;

// =============================================================================
// VARINT
// =============================================================================

#[test]
fn test_varint_fixture_records() {
    let set = pinned_set();
    let pairs: Vec<_> = set
        .varint
        .iter()
        .map(|r| (r.value.clone(), r.encoding.clone()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (json!(0), "00".to_string()),
            (json!(1), "01".to_string()),
            (json!(255), "ff01".to_string()),
            (json!(256), "8002".to_string()),
            (json!(100000), "a08d06".to_string()),
        ]
    );
}

#[test]
fn test_negative_varint_is_refused() {
    assert!(encode_varint(-1).is_err());
    let err: canonwire::Error = encode_varint(-1).unwrap_err().into();
    assert!(err.is_codec());
}

proptest! {
    #[test]
    fn prop_varint_round_trip_and_length(n in 0i64..=i64::MAX) {
        let bytes = encode_varint(n).unwrap();
        let bits = 64 - (n as u64).leading_zeros() as usize;
        prop_assert_eq!(bytes.len(), std::cmp::max(1, (bits + 6) / 7));
        let (decoded, used) = canonwire_wire::decode_varint(&bytes).unwrap();
        prop_assert_eq!(decoded, n);
        prop_assert_eq!(used, bytes.len());
    }
}

// =============================================================================
// TIME
// =============================================================================

#[test]
fn test_fixed_time_record() {
    let set = pinned_set();
    assert_eq!(set.time[0].value, json!("1973-11-29T21:33:09.123456789Z"));
    assert_eq!(set.time[0].encoding, "08959aef3a10959aef3a");
}

#[test]
fn test_current_time_record_uses_clock_value() {
    let set = pinned_set();
    assert_eq!(set.time[1].value, json!("2022-04-15T05:20:00.987654321Z"));

    let (_, decoder) = canonwire::codec().unwrap();
    let bytes = set.time[1].encoding_bytes().unwrap();
    let decoded: Timestamp = decoder.unmarshal_bare(&bytes).unwrap();
    assert_eq!(decoded, Timestamp::from(pinned_now()));
}

#[test]
fn test_same_instant_in_two_zones_encodes_identically() {
    let (encoder, _) = canonwire::codec().unwrap();
    let hk = canonwire::load_zone("Hongkong").unwrap();
    let instant = pinned_now();
    assert_eq!(
        encoder.marshal_bare(&instant.with_timezone(&hk)).unwrap(),
        encoder.marshal_bare(&instant).unwrap()
    );
}

#[test]
fn test_pre_epoch_timestamp_is_refused() {
    let (encoder, _) = canonwire::codec().unwrap();
    let ts = Timestamp::from_unix(-1, 500).unwrap();
    assert!(matches!(
        encoder.marshal_bare(&ts),
        Err(EncodeError::NegativeVarint(-1))
    ));

    let err: canonwire::Error = encoder.marshal_bare(&ts).unwrap_err().into();
    assert!(err.is_codec());
}

// =============================================================================
// BLOCK ID
// =============================================================================

#[test]
fn test_block_id_records() {
    let set = pinned_set();
    assert_eq!(set.block_id[0].encoding, "");
    assert_eq!(
        set.block_id[1].encoding,
        format!("0a14{h}121808011214{h}", h = BLOCK_HASH_HEX)
    );
    assert_eq!(
        set.block_id[1].value,
        json!({
            "hash": BLOCK_HASH_HEX.to_uppercase(),
            "parts": {"total": 1, "hash": BLOCK_HASH_HEX.to_uppercase()}
        })
    );
}

#[test]
fn test_block_id_hash_appears_verbatim() {
    let set = pinned_set();
    let bytes = set.block_id[1].encoding_bytes().unwrap();
    let hash = b"01234567890123456789";
    assert_eq!(&bytes[2..22], hash);
    assert_eq!(bytes[1] as usize, hash.len());
}

#[test]
fn test_block_id_json_key_order() {
    let set = pinned_set();
    let h = BLOCK_HASH_HEX.to_uppercase();
    assert_eq!(
        set.block_id[1].value.to_string(),
        format!(r#"{{"hash":"{h}","parts":{{"total":1,"hash":"{h}"}}}}"#)
    );
}

// =============================================================================
// PUBKEY
// =============================================================================

#[test]
fn test_pubkey_record() {
    let set = pinned_set();
    let bytes = set.pubkey.encoding_bytes().unwrap();
    assert_eq!(bytes.len(), 36);
    assert_eq!(hex::encode(&bytes[..4]), "1624de64");
    assert_eq!(hex::encode(&bytes[4..]), FOO_PUBKEY_HEX);
    assert_eq!(
        set.pubkey.value,
        json!({
            "type": "tendermint/PubKeyEd25519",
            "value": "NNJledu0Vmk+VAZyz5IvUt3g1lMuNb8GvgE6fFMvIOA="
        })
    );
}

#[test]
fn test_pubkey_document_is_single_object() {
    let doc = pinned_set().render(Category::PubKey).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
    assert!(parsed.is_object());
    assert_eq!(parsed["value"]["type"], "tendermint/PubKeyEd25519");
}

#[test]
fn test_other_secret_changes_only_the_key() {
    let set = FixtureGenerator::with_default_registry(pinned_config().secret("bar"))
        .unwrap()
        .generate_all()
        .unwrap();
    assert!(set.pubkey.encoding.starts_with("1624de64"));
    assert_ne!(set.pubkey.encoding, pinned_set().pubkey.encoding);
    assert_eq!(set.varint, pinned_set().varint);
}
