//! Fixture records and documents
//!
//! Every fixture file holds `{"value": ..., "encoding": "<lower hex>"}`
//! records. `pubkey.json` holds a single record whose value is tagged with
//! its registered name; the other categories hold an array.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One golden test vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureRecord {
    /// JSON rendering of the input value
    pub value: serde_json::Value,
    /// Lowercase hex of the canonical encoding
    pub encoding: String,
}

impl FixtureRecord {
    /// Pair a value with its encoding
    pub fn new<T: Serialize + ?Sized>(value: &T, encoding: &[u8]) -> serde_json::Result<Self> {
        Ok(FixtureRecord {
            value: serde_json::to_value(value)?,
            encoding: hex::encode(encoding),
        })
    }

    /// Encoding as raw bytes
    pub fn encoding_bytes(&self) -> Result<Vec<u8>, hex::FromHexError> {
        hex::decode(&self.encoding)
    }
}

impl fmt::Display for FixtureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.value, self.encoding)
    }
}

/// Interface-typed value tagged with its registered name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedValue {
    /// Registered name of the concrete type
    #[serde(rename = "type")]
    pub type_name: String,
    /// JSON rendering of the concrete value
    pub value: serde_json::Value,
}

/// Fixture file kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Bare varints
    Varint,
    /// Timestamps
    Time,
    /// Block identifiers
    BlockId,
    /// Public keys, through the interface path
    PubKey,
}

impl Category {
    /// Every category, in generation order
    pub const ALL: [Category; 4] = [
        Category::Varint,
        Category::Time,
        Category::BlockId,
        Category::PubKey,
    ];

    /// Short name used in logs and file names
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Varint => "varint",
            Category::Time => "time",
            Category::BlockId => "block_id",
            Category::PubKey => "pubkey",
        }
    }

    /// File the category is stored in
    pub fn file_name(self) -> &'static str {
        match self {
            Category::Varint => "varint.json",
            Category::Time => "time.json",
            Category::BlockId => "block_id.json",
            Category::PubKey => "pubkey.json",
        }
    }

    /// True for categories stored as a single object instead of an array
    pub fn is_single(self) -> bool {
        self == Category::PubKey
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All records of one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSet {
    /// Varint records
    pub varint: Vec<FixtureRecord>,
    /// Timestamp records; the last one is the current instant
    pub time: Vec<FixtureRecord>,
    /// Block id records
    pub block_id: Vec<FixtureRecord>,
    /// The public key record
    pub pubkey: FixtureRecord,
}

impl FixtureSet {
    /// Index of the time record that depends on the clock
    pub const CURRENT_TIME_INDEX: usize = 1;

    /// Records of one category
    pub fn records(&self, category: Category) -> &[FixtureRecord] {
        match category {
            Category::Varint => &self.varint,
            Category::Time => &self.time,
            Category::BlockId => &self.block_id,
            Category::PubKey => std::slice::from_ref(&self.pubkey),
        }
    }

    /// Total record count
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.records(*c).len()).sum()
    }

    /// True when no records were generated
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pretty JSON document for one category (two-space indent)
    pub fn render(&self, category: Category) -> serde_json::Result<String> {
        if category.is_single() {
            serde_json::to_string_pretty(&self.pubkey)
        } else {
            serde_json::to_string_pretty(self.records(category))
        }
    }
}
