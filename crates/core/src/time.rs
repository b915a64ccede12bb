//! Timestamps and time zone loading
//!
//! A [`Timestamp`] is always held in UTC. Every constructor normalizes, so two
//! instants that describe the same moment compare equal no matter which zone
//! they were built in. That is what makes their encodings identical.
//!
//! JSON rendering follows RFC 3339 with a `Z` suffix and at most nine
//! fractional digits, trailing zeros dropped:
//! `1973-11-29T21:33:09.123456789Z`, `2001-01-01T00:00:00.5Z`,
//! `2001-01-01T00:00:00Z`.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Largest valid sub-second component
pub const MAX_NANOS: u32 = 999_999_999;

/// Failure to resolve a named time zone
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("time zone {name:?} could not be loaded: {reason}")]
pub struct TimeZoneLoadError {
    /// Zone name as requested
    pub name: String,
    /// Why the lookup failed
    pub reason: String,
}

/// Load a zone from the IANA database by name (e.g. `"Hongkong"`, `"UTC"`)
pub fn load_zone(name: &str) -> Result<Tz, TimeZoneLoadError> {
    name.parse::<Tz>().map_err(|e| TimeZoneLoadError {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// An instant normalized to UTC, with nanosecond resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Build from seconds and nanoseconds since the Unix epoch
    ///
    /// Returns `None` if `nanos` exceeds [`MAX_NANOS`] or the instant is out
    /// of range.
    pub fn from_unix(secs: i64, nanos: u32) -> Option<Self> {
        if nanos > MAX_NANOS {
            return None;
        }
        Utc.timestamp_opt(secs, nanos).single().map(Timestamp)
    }

    /// Normalize an instant expressed in any zone
    pub fn from_zoned<Z: TimeZone>(dt: &DateTime<Z>) -> Self {
        Timestamp(dt.with_timezone(&Utc))
    }

    /// The current instant
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    /// Express this instant in another zone (the value itself stays UTC)
    pub fn in_zone<Z: TimeZone>(&self, zone: &Z) -> DateTime<Z> {
        self.0.with_timezone(zone)
    }

    /// Whole seconds since the Unix epoch
    pub fn seconds(&self) -> i64 {
        self.0.timestamp()
    }

    /// Sub-second component in nanoseconds
    pub fn subsec_nanos(&self) -> u32 {
        self.0.timestamp_subsec_nanos()
    }

    /// Borrow the underlying UTC datetime
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// RFC 3339 rendering with trailing fractional zeros dropped
    pub fn to_rfc3339_nano(&self) -> String {
        if self.subsec_nanos() == 0 {
            return self.0.to_rfc3339_opts(SecondsFormat::Secs, true);
        }
        let full = self.0.to_rfc3339_opts(SecondsFormat::Nanos, true);
        let trimmed = full.trim_end_matches('Z').trim_end_matches('0');
        format!("{}Z", trimmed)
    }

    /// Parse any RFC 3339 string, normalizing its offset to UTC
    pub fn parse_rfc3339(s: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(s).map(|dt| Timestamp::from_zoned(&dt))
    }
}

impl<Z: TimeZone> From<DateTime<Z>> for Timestamp {
    fn from(dt: DateTime<Z>) -> Self {
        Timestamp::from_zoned(&dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339_nano())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339_nano())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Timestamp::parse_rfc3339(&s).map_err(serde::de::Error::custom)
    }
}
