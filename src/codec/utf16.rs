//! UTF-16 <-> UTF-8 transcoding.

use super::ByteOrder;
use super::latin::{is_latin, is_latin_utf16};
use crate::error::{BufferError, Result};

#[inline]
fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

#[inline]
fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

#[inline]
fn push_unit(out: &mut Vec<u8>, unit: u16) {
    if unit < 0x80 {
        out.push(unit as u8);
    } else if unit < 0x800 {
        out.extend_from_slice(&[0xC0 | (unit >> 6) as u8, 0x80 | (unit & 0x3F) as u8]);
    } else {
        out.extend_from_slice(&[
            0xE0 | (unit >> 12) as u8,
            0x80 | ((unit >> 6) & 0x3F) as u8,
            0x80 | (unit & 0x3F) as u8,
        ]);
    }
}

#[inline]
fn push_surrogate_pair(out: &mut Vec<u8>, high: u16, low: u16) {
    let code_point = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    out.extend_from_slice(&[
        0xF0 | (code_point >> 18) as u8,
        0x80 | ((code_point >> 12) & 0x3F) as u8,
        0x80 | ((code_point >> 6) & 0x3F) as u8,
        0x80 | (code_point & 0x3F) as u8,
    ]);
}

/// Transcodes into `out`. When `strict` is set, stops at the first unpaired
/// surrogate and returns its index.
fn encode_utf8(units: &[u16], order: ByteOrder, strict: bool, out: &mut Vec<u8>) -> Option<usize> {
    let mut i = 0;
    while i < units.len() {
        let unit = order.apply(units[i]);
        if is_high_surrogate(unit) {
            let low = units.get(i + 1).map(|&u| order.apply(u));
            if let Some(low) = low.filter(|&u| is_low_surrogate(u)) {
                push_surrogate_pair(out, unit, low);
                i += 2;
                continue;
            }
        }
        if strict && (is_high_surrogate(unit) || is_low_surrogate(unit)) {
            return Some(i);
        }
        push_unit(out, unit);
        i += 1;
    }
    None
}

/// Transcodes UTF-16 code units to UTF-8 bytes.
///
/// A high surrogate directly followed by a low surrogate becomes one 4-byte
/// sequence. Any other surrogate is written as a bare 3-byte sequence of its
/// raw value, which existing peers of the wire format expect even though it
/// is not valid UTF-8. Use [`utf16_to_utf8_strict`] to reject such input.
///
/// ```
/// use wirebuf::codec::{utf16_to_utf8, ByteOrder};
///
/// let bytes = utf16_to_utf8(&[0xD83D, 0xDE00], ByteOrder::LittleEndian);
/// assert_eq!(bytes, [0xF0, 0x9F, 0x98, 0x80]);
/// ```
pub fn utf16_to_utf8(units: &[u16], order: ByteOrder) -> Vec<u8> {
    if order.is_little_endian() && is_latin_utf16(units) {
        return units.iter().map(|&u| u as u8).collect();
    }
    let mut out = Vec::with_capacity(units.len() * 3);
    encode_utf8(units, order, false, &mut out);
    out
}

/// Transcodes UTF-16 code units to a UTF-8 string, rejecting unpaired
/// surrogates.
///
/// # Errors
///
/// Returns [`BufferError::UnpairedSurrogate`] with the index of the first
/// surrogate that has no partner.
pub fn utf16_to_utf8_strict(units: &[u16], order: ByteOrder) -> Result<String> {
    let mut out = Vec::with_capacity(units.len() * 3);
    if let Some(index) = encode_utf8(units, order, true, &mut out) {
        return Err(BufferError::UnpairedSurrogate { index });
    }
    String::from_utf8(out).map_err(|e| BufferError::InvalidUtf8 {
        offset: e.utf8_error().valid_up_to(),
    })
}

/// Transcodes UTF-8 bytes to UTF-16 code units.
///
/// The sequence length is taken from the lead byte alone (`< 0x80`: 1,
/// `< 0xE0`: 2, `< 0xF0`: 3, otherwise 4); continuation bytes contribute their
/// low six bits. Code points above `U+FFFF` become a surrogate pair.
///
/// # Errors
///
/// Returns [`BufferError::InvalidUtf8`] if a sequence is cut off by the end
/// of the input, or decodes to a code point above `U+10FFFF`.
///
/// ```
/// use wirebuf::codec::{utf8_to_utf16, ByteOrder};
///
/// assert_eq!(utf8_to_utf16(b"ab", ByteOrder::LittleEndian)?, [0x0061, 0x0062]);
/// assert_eq!(utf8_to_utf16(b"ab", ByteOrder::BigEndian)?, [0x6100, 0x6200]);
/// # Ok::<(), wirebuf::BufferError>(())
/// ```
pub fn utf8_to_utf16(bytes: &[u8], order: ByteOrder) -> Result<Vec<u16>> {
    if is_latin(bytes) {
        return Ok(bytes
            .iter()
            .map(|&b| order.apply(u16::from(b)))
            .collect());
    }

    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let lead = bytes[i];
        let width = match lead {
            0x00..=0x7F => 1,
            0x80..=0xDF => 2,
            0xE0..=0xEF => 3,
            _ => 4,
        };
        let tail = bytes
            .get(i + 1..i + width)
            .ok_or(BufferError::InvalidUtf8 { offset: i })?;
        let code_point = tail.iter().fold(
            match width {
                1 => u32::from(lead),
                2 => u32::from(lead & 0x1F),
                3 => u32::from(lead & 0x0F),
                _ => u32::from(lead & 0x07),
            },
            |acc, &b| (acc << 6) | u32::from(b & 0x3F),
        );
        if code_point > 0x10_FFFF {
            return Err(BufferError::InvalidUtf8 { offset: i });
        }

        if code_point > 0xFFFF {
            let cp = code_point - 0x10000;
            out.push(order.apply(((cp >> 10) + 0xD800) as u16));
            out.push(order.apply(((cp & 0x3FF) + 0xDC00) as u16));
        } else {
            out.push(order.apply(code_point as u16));
        }
        i += width;
    }
    Ok(out)
}
