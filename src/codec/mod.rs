//! Stateless text codecs.
//!
//! - [`is_latin`] / [`is_latin_utf16`] - ASCII detection, used to pick a
//!   one-byte-per-character encoding
//! - [`utf16_to_utf8`] / [`utf16_to_utf8_strict`] - UTF-16 code units to UTF-8
//! - [`utf8_to_utf16`] - UTF-8 bytes to UTF-16 code units
//!
//! Every function is a pure function of its input, safe to call from any
//! number of threads at once.
//!
//! # Example
//!
//! ```
//! use wirebuf::codec::{utf16_to_utf8, utf8_to_utf16, ByteOrder};
//!
//! let units: Vec<u16> = "héllo 😀".encode_utf16().collect();
//! let utf8 = utf16_to_utf8(&units, ByteOrder::LittleEndian);
//! assert_eq!(utf8, "héllo 😀".as_bytes());
//!
//! let back = utf8_to_utf16(&utf8, ByteOrder::LittleEndian)?;
//! assert_eq!(back, units);
//! # Ok::<(), wirebuf::BufferError>(())
//! ```

mod latin;
mod utf16;

pub use latin::{is_latin, is_latin_utf16};
pub use utf16::{utf8_to_utf16, utf16_to_utf8, utf16_to_utf8_strict};

/// Byte order of UTF-16 code units crossing the codec.
///
/// Code units are handled as native `u16` values. With
/// [`ByteOrder::BigEndian`] every unit is byte-swapped before it is
/// interpreted (on input) or after it is produced (on output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Units are used as-is.
    #[default]
    LittleEndian,
    /// Units are byte-swapped.
    BigEndian,
}

impl ByteOrder {
    /// Maps an `is_little_endian` flag onto a byte order.
    pub const fn from_little_endian(is_little_endian: bool) -> Self {
        if is_little_endian {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        }
    }

    /// Returns true for [`ByteOrder::LittleEndian`].
    pub const fn is_little_endian(self) -> bool {
        matches!(self, ByteOrder::LittleEndian)
    }

    #[inline]
    pub(crate) const fn apply(self, unit: u16) -> u16 {
        match self {
            ByteOrder::LittleEndian => unit,
            ByteOrder::BigEndian => unit.swap_bytes(),
        }
    }
}
