//! Fixture Files Tests
//!
//! Generation to disk and verification against a fresh run.

use crate::*;
use canonwire::Category;
use std::fs;

// =============================================================================
// GENERATE
// =============================================================================

#[test]
fn test_generate_writes_every_category() {
    let dir = tempfile::tempdir().unwrap();
    let config = pinned_config().out_dir(dir.path());
    canonwire::generate(&config).unwrap();

    for category in Category::ALL {
        let text = fs::read_to_string(dir.path().join(category.file_name())).unwrap();
        assert!(!text.is_empty(), "{} is empty", category);
    }
}

#[test]
fn test_varint_file_is_pretty_printed() {
    let dir = tempfile::tempdir().unwrap();
    canonwire::generate(&pinned_config().out_dir(dir.path())).unwrap();

    let text = fs::read_to_string(dir.path().join("varint.json")).unwrap();
    assert!(text.starts_with("[\n  {\n    \"value\": 0,\n    \"encoding\": \"00\"\n  },"));
}

#[test]
fn test_generation_is_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    let config = pinned_config().out_dir(dir.path());

    canonwire::generate(&config).unwrap();
    let first = fs::read_to_string(dir.path().join("block_id.json")).unwrap();
    canonwire::generate(&config).unwrap();
    let second = fs::read_to_string(dir.path().join("block_id.json")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_zone_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = pinned_config().out_dir(dir.path()).zone("Nowhere/Special");
    assert!(canonwire::generate(&config).is_err());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

// =============================================================================
// VERIFY
// =============================================================================

#[test]
fn test_verify_accepts_fresh_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = pinned_config().out_dir(dir.path());
    canonwire::generate(&config).unwrap();
    assert!(canonwire::verify(&config).unwrap().is_empty());
}

#[test]
fn test_verify_accepts_output_from_another_moment() {
    let dir = tempfile::tempdir().unwrap();
    canonwire::generate(&pinned_config().out_dir(dir.path())).unwrap();

    // Unpinned: the current-instant record differs, but only in value
    let live = canonwire::GeneratorConfig::new().out_dir(dir.path());
    assert!(canonwire::verify(&live).unwrap().is_empty());
}

#[test]
fn test_verify_reports_tampered_block_id() {
    let dir = tempfile::tempdir().unwrap();
    let config = pinned_config().out_dir(dir.path());
    canonwire::generate(&config).unwrap();

    let path = dir.path().join("block_id.json");
    let text = fs::read_to_string(&path).unwrap();
    fs::write(&path, text.replacen("\"total\": 1", "\"total\": 2", 1)).unwrap();

    let mismatches = canonwire::verify(&config).unwrap();
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].category, Category::BlockId);
    assert_eq!(mismatches[0].index, 1);
}

#[test]
fn test_verify_with_other_secret_flags_pubkey() {
    let dir = tempfile::tempdir().unwrap();
    canonwire::generate(&pinned_config().out_dir(dir.path())).unwrap();

    let other = pinned_config().out_dir(dir.path()).secret("bar");
    let mismatches = canonwire::verify(&other).unwrap();
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].category, Category::PubKey);
}

#[test]
fn test_verify_empty_directory_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = canonwire::verify(&pinned_config().out_dir(dir.path())).unwrap_err();
    assert!(err.is_io());
}
