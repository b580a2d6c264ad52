//! Variable-length integer encoding.
//!
//! Unsigned values use base-128 groups, least significant group first, with
//! the high bit of every byte set while more groups follow. Signed values are
//! zigzag-mapped first so that small negative numbers stay short:
//!
//! | value | zigzag | bytes   |
//! |-------|--------|---------|
//! | 0     | 0      | `00`    |
//! | -1    | 1      | `01`    |
//! | 1     | 2      | `02`    |
//! | -64   | 127    | `7f`    |
//! | 64    | 128    | `80 01` |
//!
//! The helpers here work on plain slices; [`Buffer`](crate::Buffer) drives
//! them from its cursors.

use crate::error::{BufferError, Result};

/// Longest encoding of a 32-bit value.
pub const MAX_VARUINT32_LEN: usize = 5;

/// Longest encoding of a 64-bit value.
pub const MAX_VARUINT64_LEN: usize = 10;

/// Maps a signed 32-bit value onto the unsigned range.
#[inline]
pub const fn zigzag_encode32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

/// Inverse of [`zigzag_encode32`].
#[inline]
pub const fn zigzag_decode32(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

/// Maps a signed 64-bit value onto the unsigned range.
#[inline]
pub const fn zigzag_encode64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag_encode64`].
#[inline]
pub const fn zigzag_decode64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Number of bytes [`encode_varuint32`] emits for `value`.
#[inline]
pub const fn varuint32_len(value: u32) -> usize {
    if value == 0 {
        1
    } else {
        ((32 - value.leading_zeros() + 6) / 7) as usize
    }
}

/// Number of bytes [`encode_varuint64`] emits for `value`.
#[inline]
pub const fn varuint64_len(value: u64) -> usize {
    if value == 0 {
        1
    } else {
        ((64 - value.leading_zeros() + 6) / 7) as usize
    }
}

/// Encodes `value` into the front of `out` and returns the encoded length.
///
/// # Panics
///
/// Panics if `out` is shorter than [`varuint32_len`]`(value)`.
#[inline]
pub fn encode_varuint32(mut value: u32, out: &mut [u8]) -> usize {
    let mut i = 0;
    while value >= 0x80 {
        out[i] = (value as u8 & 0x7f) | 0x80;
        value >>= 7;
        i += 1;
    }
    out[i] = value as u8;
    i + 1
}

/// Encodes `value` into the front of `out` and returns the encoded length.
///
/// # Panics
///
/// Panics if `out` is shorter than [`varuint64_len`]`(value)`.
#[inline]
pub fn encode_varuint64(mut value: u64, out: &mut [u8]) -> usize {
    let mut i = 0;
    while value >= 0x80 {
        out[i] = (value as u8 & 0x7f) | 0x80;
        value >>= 7;
        i += 1;
    }
    out[i] = value as u8;
    i + 1
}

/// Decodes a varint starting at `buf[offset]`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
///
/// - [`BufferError::OutOfRange`] if `buf` ends before the last group
/// - [`BufferError::MalformedVarint`] if the chain is longer than 5 bytes, or
///   its fifth group carries bits above bit 31
pub fn decode_varuint32(buf: &[u8], offset: usize) -> Result<(u32, usize)> {
    let mut result: u32 = 0;
    let mut shift: u32 = 0;
    let mut pos = offset;
    loop {
        let byte = *buf
            .get(pos)
            .ok_or_else(|| BufferError::out_of_range(offset, pos - offset + 1, buf.len()))?;
        pos += 1;
        // The fifth group holds the top 4 bits and must end the chain.
        if shift == 28 && byte > 0x0F {
            tracing::debug!(offset, byte, "rejecting varuint32 wider than 32 bits");
            return Err(BufferError::MalformedVarint { bits: 32 });
        }
        result |= u32::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            return Ok((result, pos - offset));
        }
        shift += 7;
    }
}

/// Decodes a varint starting at `buf[offset]`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
///
/// - [`BufferError::OutOfRange`] if `buf` ends before the last group
/// - [`BufferError::MalformedVarint`] if the chain is longer than 10 bytes, or
///   its tenth group carries bits above bit 63
pub fn decode_varuint64(buf: &[u8], offset: usize) -> Result<(u64, usize)> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;
    let mut pos = offset;
    loop {
        let byte = *buf
            .get(pos)
            .ok_or_else(|| BufferError::out_of_range(offset, pos - offset + 1, buf.len()))?;
        pos += 1;
        // The tenth group holds only bit 63 and must end the chain.
        if shift == 63 && byte > 0x01 {
            tracing::debug!(offset, byte, "rejecting varuint64 wider than 64 bits");
            return Err(BufferError::MalformedVarint { bits: 64 });
        }
        result |= u64::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            return Ok((result, pos - offset));
        }
        shift += 7;
    }
}
