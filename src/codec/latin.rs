//! ASCII detection, a word at a time.

const BYTE_HIGH_BITS: u64 = 0x8080_8080_8080_8080;
const UNIT_HIGH_BITS: u64 = 0xFF80_FF80_FF80_FF80;

/// Returns true if every byte of `bytes` is below 128.
///
/// Eight bytes are tested per step; the remaining 0-7 bytes are tested one by
/// one.
///
/// ```
/// use wirebuf::codec::is_latin;
///
/// assert!(is_latin(b"Fury"));
/// assert!(!is_latin("你好, Fury".as_bytes()));
/// assert!(is_latin(b""));
/// ```
pub fn is_latin(bytes: &[u8]) -> bool {
    let mut words = bytes.chunks_exact(8);
    for chunk in &mut words {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        if u64::from_ne_bytes(word) & BYTE_HIGH_BITS != 0 {
            return false;
        }
    }
    words.remainder().iter().all(|&b| b < 0x80)
}

/// Returns true if every UTF-16 code unit of `units` is below 128.
///
/// Four units are tested per step.
pub fn is_latin_utf16(units: &[u16]) -> bool {
    let mut words = units.chunks_exact(4);
    for chunk in &mut words {
        let word = u64::from(chunk[0])
            | u64::from(chunk[1]) << 16
            | u64::from(chunk[2]) << 32
            | u64::from(chunk[3]) << 48;
        if word & UNIT_HIGH_BITS != 0 {
            return false;
        }
    }
    words.remainder().iter().all(|&u| u < 0x80)
}
