//! Variable-length integers
//!
//! Each byte carries 7 payload bits, least significant group first. The high
//! bit is set on every byte except the last. Encodings are minimal: no
//! trailing zero groups, and zero is the single byte `00`.
//!
//! | Value | Bytes |
//! |-------|-------|
//! | 0 | `00` |
//! | 1 | `01` |
//! | 255 | `ff 01` |
//! | 256 | `80 02` |
//! | 100000 | `a0 8d 06` |
//!
//! Signed values share the unsigned layout. Negative values are rejected:
//! neither zigzag nor two's-complement is part of the contract yet.

use crate::error::{DecodeError, EncodeError};

/// Longest encoding of a 64-bit value
pub const MAX_VARINT_LEN: usize = 10;

/// Number of bytes `value` occupies
pub fn uvarint_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    ((bits + 6) / 7).max(1)
}

/// Append the encoding of `value` to `buf`, returning the byte count
pub fn write_uvarint(buf: &mut Vec<u8>, mut value: u64) -> usize {
    let start = buf.len();
    while value >= 0x80 {
        buf.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
    buf.len() - start
}

/// Encode an unsigned value
pub fn encode_uvarint(value: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(uvarint_len(value));
    write_uvarint(&mut buf, value);
    buf
}

/// Append the encoding of a non-negative signed value
pub fn write_varint(buf: &mut Vec<u8>, value: i64) -> Result<usize, EncodeError> {
    if value < 0 {
        return Err(EncodeError::NegativeVarint(value));
    }
    Ok(write_uvarint(buf, value as u64))
}

/// Encode a non-negative signed value
pub fn encode_varint(value: i64) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::with_capacity(MAX_VARINT_LEN);
    write_varint(&mut buf, value)?;
    Ok(buf)
}

/// Decode an unsigned value from the front of `bytes`
///
/// Returns the value and the number of bytes consumed.
pub fn decode_uvarint(bytes: &[u8]) -> Result<(u64, usize), DecodeError> {
    let mut value = 0u64;
    for (i, &b) in bytes.iter().enumerate() {
        if i == MAX_VARINT_LEN - 1 && b > 0x01 {
            return Err(DecodeError::Overflow);
        }
        value |= u64::from(b & 0x7f) << (7 * i);
        if b & 0x80 == 0 {
            if i > 0 && b == 0 {
                return Err(DecodeError::NonMinimalVarint);
            }
            return Ok((value, i + 1));
        }
    }
    Err(DecodeError::Truncated { needed: 1 })
}

/// Decode a signed value written by [`encode_varint`]
pub fn decode_varint(bytes: &[u8]) -> Result<(i64, usize), DecodeError> {
    let (value, len) = decode_uvarint(bytes)?;
    let value = i64::try_from(value).map_err(|_| DecodeError::Overflow)?;
    Ok((value, len))
}
