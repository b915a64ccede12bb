//! Checking a fixture directory against a fresh generation
//!
//! Every record is compared exactly, except the time record taken from the
//! clock. That one can only be checked for shape: its value must be an RFC
//! 3339 instant in UTC, and its encoding must be the canonical encoding of
//! that same instant.

use crate::error::{FixtureError, Result};
use crate::record::{Category, FixtureRecord, FixtureSet};
use canonwire_core::Timestamp;
use canonwire_wire::{Decoder, Encoder, TypeRegistry};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

const MISSING: &str = "<missing>";

/// One record that differs from what generation produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Category the record belongs to
    pub category: Category,
    /// Position within the category
    pub index: usize,
    /// What the record should be
    pub expected: String,
    /// What the file holds
    pub actual: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: expected {}, found {}",
            self.category, self.index, self.expected, self.actual
        )
    }
}

/// Compare the fixture files in `dir` with `set`
///
/// Returns every mismatch found; an empty list means the directory is
/// current. Missing or malformed files are errors, not mismatches.
pub fn verify_fixture_dir(dir: &Path, set: &FixtureSet) -> Result<Vec<Mismatch>> {
    // Timestamps carry no interface fields, so no registrations are needed
    let registry = Arc::new(TypeRegistry::builder().build());
    let encoder = Encoder::new(Arc::clone(&registry));
    let decoder = Decoder::new(registry);

    let mut mismatches = Vec::new();
    for category in Category::ALL {
        let on_disk = load_category(dir, category)?;
        let expected = set.records(category);

        for index in 0..expected.len().max(on_disk.len()) {
            let mismatch = match (expected.get(index), on_disk.get(index)) {
                (Some(e), Some(a)) if is_clock_dependent(category, index) => {
                    check_current_time(&encoder, &decoder, a)
                        .err()
                        .map(|reason| (format!("{} ({})", e.value, reason), a.to_string()))
                }
                (Some(e), Some(a)) if e != a => Some((e.to_string(), a.to_string())),
                (Some(_), Some(_)) => None,
                (Some(e), None) => Some((e.to_string(), MISSING.to_string())),
                (None, Some(a)) => Some((MISSING.to_string(), a.to_string())),
                (None, None) => None,
            };
            if let Some((expected, actual)) = mismatch {
                let mismatch = Mismatch {
                    category,
                    index,
                    expected,
                    actual,
                };
                warn!("Fixture mismatch: {}", mismatch);
                mismatches.push(mismatch);
            }
        }
    }

    if mismatches.is_empty() {
        info!("Fixtures in {} are up to date", dir.display());
    } else {
        warn!("{} fixture records differ in {}", mismatches.len(), dir.display());
    }
    Ok(mismatches)
}

fn is_clock_dependent(category: Category, index: usize) -> bool {
    category == Category::Time && index == FixtureSet::CURRENT_TIME_INDEX
}

fn load_category(dir: &Path, category: Category) -> Result<Vec<FixtureRecord>> {
    let path = dir.join(category.file_name());
    let text = fs::read_to_string(&path).map_err(|e| FixtureError::io(&path, e))?;
    let parsed = if category.is_single() {
        serde_json::from_str::<FixtureRecord>(&text).map(|r| vec![r])
    } else {
        serde_json::from_str::<Vec<FixtureRecord>>(&text)
    };
    parsed.map_err(|e| FixtureError::invalid(&path, e.to_string()))
}

fn check_current_time(
    encoder: &Encoder,
    decoder: &Decoder,
    record: &FixtureRecord,
) -> std::result::Result<(), String> {
    let text = record
        .value
        .as_str()
        .ok_or_else(|| "value is not a string".to_string())?;
    if !text.ends_with('Z') {
        return Err("value is not in UTC".to_string());
    }
    let stated = Timestamp::parse_rfc3339(text).map_err(|e| e.to_string())?;
    let bytes = record.encoding_bytes().map_err(|e| e.to_string())?;
    let decoded: Timestamp = decoder.unmarshal_bare(&bytes).map_err(|e| e.to_string())?;
    if decoded != stated {
        return Err(format!("encoding decodes to {}", decoded));
    }
    let canonical = encoder.marshal_bare(&stated).map_err(|e| e.to_string())?;
    if canonical != bytes {
        return Err(format!(
            "encoding is not canonical, expected {}",
            hex::encode(canonical)
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{write_fixture_set, FixtureGenerator, GeneratorConfig};
    use chrono::{TimeZone, Utc};

    fn set_at(secs: i64) -> FixtureSet {
        set_at_nanos(secs, 42)
    }

    fn set_at_nanos(secs: i64, nanos: u32) -> FixtureSet {
        let now = Utc.timestamp_opt(secs, nanos).single().unwrap();
        FixtureGenerator::with_default_registry(GeneratorConfig::new().now(now))
            .unwrap()
            .generate_all()
            .unwrap()
    }

    fn written(set: &FixtureSet) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write_fixture_set(dir.path(), set).unwrap();
        dir
    }

    fn edit(dir: &Path, category: Category, from: &str, to: &str) {
        let path = dir.join(category.file_name());
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains(from));
        fs::write(&path, text.replacen(from, to, 1)).unwrap();
    }

    // === Clean directories ===

    #[test]
    fn test_fresh_directory_verifies() {
        let set = set_at(1_600_000_000);
        let dir = written(&set);
        assert!(verify_fixture_dir(dir.path(), &set).unwrap().is_empty());
    }

    #[test]
    fn test_current_time_may_differ() {
        let dir = written(&set_at(1_600_000_000));
        let later = set_at(1_700_000_000);
        assert!(verify_fixture_dir(dir.path(), &later).unwrap().is_empty());
    }

    // === Tampering ===

    #[test]
    fn test_changed_encoding_is_reported() {
        let set = set_at(1_600_000_000);
        let dir = written(&set);
        edit(dir.path(), Category::Varint, "\"a08d06\"", "\"a08d07\"");

        let mismatches = verify_fixture_dir(dir.path(), &set).unwrap();
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].category, Category::Varint);
        assert_eq!(mismatches[0].index, 4);
        assert!(mismatches[0].actual.contains("a08d07"));
    }

    #[test]
    fn test_changed_pubkey_is_reported() {
        let set = set_at(1_600_000_000);
        let dir = written(&set);
        edit(dir.path(), Category::PubKey, "1624de64", "1624de65");

        let mismatches = verify_fixture_dir(dir.path(), &set).unwrap();
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].category, Category::PubKey);
    }

    #[test]
    fn test_inconsistent_current_time_is_reported() {
        let set = set_at(1_600_000_000);
        let dir = written(&set);
        // 2020-09-13T12:26:40.000000042Z stated, encoding left alone
        edit(
            dir.path(),
            Category::Time,
            "2020-09-13T12:26:40.000000042Z",
            "2020-09-13T12:26:41.000000042Z",
        );

        let mismatches = verify_fixture_dir(dir.path(), &set).unwrap();
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].index, FixtureSet::CURRENT_TIME_INDEX);
        assert!(mismatches[0].expected.contains("decodes to"));
    }

    #[test]
    fn test_padded_current_time_encoding_is_reported() {
        let set = set_at_nanos(1_600_000_000, 0);
        let dir = written(&set);
        // Explicit nanos = 0 after the seconds field
        edit(dir.path(), Category::Time, "\"0880a0f8fa05\"", "\"0880a0f8fa051000\"");

        let mismatches = verify_fixture_dir(dir.path(), &set).unwrap();
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].index, FixtureSet::CURRENT_TIME_INDEX);
        assert!(mismatches[0].actual.contains("0880a0f8fa051000"));
    }

    #[test]
    fn test_missing_record_is_reported() {
        let set = set_at(1_600_000_000);
        let dir = written(&set);
        let path = dir.path().join("block_id.json");
        let mut records: Vec<FixtureRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        records.pop();
        fs::write(&path, serde_json::to_string_pretty(&records).unwrap()).unwrap();

        let mismatches = verify_fixture_dir(dir.path(), &set).unwrap();
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].index, 1);
        assert_eq!(mismatches[0].actual, MISSING);
    }

    // === Unusable directories ===

    #[test]
    fn test_missing_file_is_error() {
        let set = set_at(1_600_000_000);
        let dir = written(&set);
        fs::remove_file(dir.path().join("time.json")).unwrap();
        assert!(matches!(
            verify_fixture_dir(dir.path(), &set),
            Err(FixtureError::Io { .. })
        ));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let set = set_at(1_600_000_000);
        let dir = written(&set);
        fs::write(dir.path().join("pubkey.json"), "[1, 2]").unwrap();
        assert!(matches!(
            verify_fixture_dir(dir.path(), &set),
            Err(FixtureError::InvalidFixture { .. })
        ));
    }
}
