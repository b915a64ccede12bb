//! Block identifiers
//!
//! A block is identified by its content hash together with the header of the
//! part set it was split into for gossip. Field order here is the field order
//! on the wire:
//!
//! | Type | Field | Number |
//! |------|-------|--------|
//! | BlockId | hash | 1 |
//! | BlockId | parts | 2 |
//! | PartSetHeader | total | 1 |
//! | PartSetHeader | hash | 2 |

use crate::HexBytes;
use serde::{Deserialize, Serialize};

/// Header of the part set a block was split into
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartSetHeader {
    /// Number of parts
    pub total: i64,
    /// Merkle root of the parts
    pub hash: HexBytes,
}

impl PartSetHeader {
    /// Create a header
    pub fn new(total: i64, hash: impl Into<HexBytes>) -> Self {
        PartSetHeader {
            total,
            hash: hash.into(),
        }
    }

    /// True when every field holds its default value
    pub fn is_empty(&self) -> bool {
        self.total == 0 && self.hash.is_empty()
    }
}

/// Identifier of a block: content hash plus part set header
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId {
    /// Block content hash (may be empty)
    pub hash: HexBytes,
    /// Part set header
    pub parts: PartSetHeader,
}

impl BlockId {
    /// Create a block identifier
    pub fn new(hash: impl Into<HexBytes>, parts: PartSetHeader) -> Self {
        BlockId {
            hash: hash.into(),
            parts,
        }
    }

    /// True when every field, including the nested header, is default
    pub fn is_empty(&self) -> bool {
        self.hash.is_empty() && self.parts.is_empty()
    }
}
