//! Core value types for canonwire
//!
//! This crate defines the values the codec consumes as opaque inputs:
//! - [`BlockId`] / [`PartSetHeader`]: composite block identifiers
//! - [`Timestamp`]: UTC-normalized instants with nanosecond resolution
//! - [`PubKey`]: the polymorphic public-key value space
//! - [`HexBytes`]: byte sequences rendered as uppercase hex in JSON
//!
//! Nothing here knows about the binary wire format. Encoding rules live in
//! `canonwire-wire`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod block_id;
pub mod hex_bytes;
pub mod pubkey;
pub mod time;

pub use block_id::{BlockId, PartSetHeader};
pub use hex_bytes::HexBytes;
pub use pubkey::{PubKey, PubKeyEd25519, ED25519_PUBKEY_SIZE};
pub use time::{load_zone, TimeZoneLoadError, Timestamp};
