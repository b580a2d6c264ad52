//! Length-prefixed byte and string framing.
//!
//! Two framings coexist and must not be mixed between writer and reader:
//!
//! ```text
//! bytes-and-size:  varuint32(len)                 | bytes
//! string:          varuint64((len << 2) | tag)    | bytes
//! ```

use super::Buffer;
use crate::codec::{ByteOrder, utf16_to_utf8_strict};
use crate::error::{BufferError, Result};
use crate::varint::{self, MAX_VARUINT32_LEN, MAX_VARUINT64_LEN};

/// Payload encoding carried in the low two bits of a string header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StringEncoding {
    /// One byte per character, `U+0000..=U+00FF`.
    Latin1 = 0,
    /// Little-endian UTF-16 code units.
    Utf16 = 1,
    /// UTF-8 bytes.
    Utf8 = 2,
}

impl StringEncoding {
    /// Header bits for this encoding.
    pub const fn tag(self) -> u64 {
        self as u64
    }

    /// Parses the low two bits of a string header.
    pub fn from_tag(tag: u64) -> Result<Self> {
        match tag & 0b11 {
            0 => Ok(StringEncoding::Latin1),
            1 => Ok(StringEncoding::Utf16),
            2 => Ok(StringEncoding::Utf8),
            _ => Err(BufferError::InvalidArgument {
                message: "unknown string encoding tag",
            }),
        }
    }
}

impl Buffer {
    /// Copies `value` to `offset`.
    pub fn put_bytes(&mut self, offset: usize, value: &[u8]) -> Result<()> {
        self.check_bound(offset, value.len())?;
        self.data[offset..offset + value.len()].copy_from_slice(value);
        Ok(())
    }

    /// Borrows `length` bytes starting at `offset`.
    pub fn get_bytes(&self, offset: usize, length: usize) -> Result<&[u8]> {
        self.check_bound(offset, length)?;
        Ok(&self.data[offset..offset + length])
    }

    /// Appends raw bytes at the write cursor.
    pub fn write_bytes(&mut self, value: &[u8]) -> Result<()> {
        self.grow(value.len())?;
        self.put_bytes(self.writer_index, value)?;
        self.writer_index += value.len();
        Ok(())
    }

    /// Consumes `length` raw bytes at the read cursor.
    pub fn read_bytes(&mut self, length: usize) -> Result<&[u8]> {
        let start = self.reader_index;
        self.check_readable(length)?;
        self.reader_index += length;
        Ok(&self.data[start..start + length])
    }

    /// Appends a varuint32 length followed by the bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `value` is longer than
    /// `u32::MAX` bytes.
    pub fn write_bytes_and_size(&mut self, value: &[u8]) -> Result<()> {
        let len = u32::try_from(value.len()).map_err(|_| BufferError::InvalidArgument {
            message: "byte length exceeds u32",
        })?;
        self.grow(MAX_VARUINT32_LEN + value.len())?;
        self.write_varuint32(len)?;
        self.write_bytes(value)
    }

    /// Consumes a varuint32 length and that many bytes.
    ///
    /// The read cursor only moves if both the length and the payload are
    /// readable.
    pub fn read_bytes_and_size(&mut self) -> Result<&[u8]> {
        let (len, header) = varint::decode_varuint32(self.written(), self.reader_index)?;
        let start = self.reader_index + header;
        let len = len as usize;
        self.check_readable(header.saturating_add(len))?;
        self.reader_index = start + len;
        Ok(&self.data[start..start + len])
    }

    /// Consumes `length` bytes (1 to 8) as a little-endian integer.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `length` is outside `1..=8`.
    pub fn read_bytes_as_int64(&mut self, length: usize) -> Result<i64> {
        if !(1..=8).contains(&length) {
            return Err(BufferError::InvalidArgument {
                message: "length must be between 1 and 8",
            });
        }
        let mut word = [0u8; 8];
        word[..length].copy_from_slice(self.read_bytes(length)?);
        Ok(i64::from_le_bytes(word))
    }

    /// Appends a UTF-8 string framed as `varuint64((len << 2) | 2)` + bytes.
    ///
    /// ```
    /// use wirebuf::Buffer;
    ///
    /// let mut buf = Buffer::allocate(16)?;
    /// buf.write_string("Fury")?;
    /// assert_eq!(buf.written(), &[(4 << 2) | 2, b'F', b'u', b'r', b'y']);
    /// assert_eq!(buf.read_string()?, "Fury");
    /// # Ok::<(), wirebuf::BufferError>(())
    /// ```
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_tagged(StringEncoding::Utf8, value.as_bytes())
    }

    /// Appends Latin-1 bytes framed with the Latin-1 tag.
    pub fn write_latin1_string(&mut self, value: &[u8]) -> Result<()> {
        self.write_tagged(StringEncoding::Latin1, value)
    }

    /// Appends UTF-16 code units as little-endian bytes framed with the UTF-16
    /// tag.
    pub fn write_utf16_string(&mut self, value: &[u16]) -> Result<()> {
        let bytes: Vec<u8> = value.iter().flat_map(|u| u.to_le_bytes()).collect();
        self.write_tagged(StringEncoding::Utf16, &bytes)
    }

    fn write_tagged(&mut self, encoding: StringEncoding, payload: &[u8]) -> Result<()> {
        let header = ((payload.len() as u64) << 2) | encoding.tag();
        self.grow(MAX_VARUINT64_LEN + payload.len())?;
        self.write_varuint64(header)?;
        self.write_bytes(payload)
    }

    /// Consumes a string written by any of the `write_*string` methods.
    ///
    /// The header's low two bits select the payload decoding; the remaining
    /// bits are the payload length in bytes.
    ///
    /// # Errors
    ///
    /// - [`BufferError::OutOfRange`] if the header or payload is cut short
    /// - [`BufferError::InvalidUtf8`] / [`BufferError::UnpairedSurrogate`] if
    ///   the payload does not decode
    /// - [`BufferError::InvalidArgument`] for an unknown encoding tag or an
    ///   odd-length UTF-16 payload
    ///
    /// The read cursor does not move on error.
    pub fn read_string(&mut self) -> Result<String> {
        let (header, header_len) = varint::decode_varuint64(self.written(), self.reader_index)?;
        let encoding = StringEncoding::from_tag(header)?;
        let start = self.reader_index + header_len;
        let len = usize::try_from(header >> 2)
            .map_err(|_| BufferError::out_of_range(start, usize::MAX, self.writer_index))?;
        self.check_readable(header_len.saturating_add(len))?;
        let payload = self.get_bytes(start, len)?;

        let value = match encoding {
            StringEncoding::Utf8 => std::str::from_utf8(payload)
                .map(str::to_owned)
                .map_err(|e| BufferError::InvalidUtf8 {
                    offset: start + e.valid_up_to(),
                })?,
            StringEncoding::Latin1 => payload.iter().map(|&b| char::from(b)).collect(),
            StringEncoding::Utf16 => {
                if len % 2 != 0 {
                    return Err(BufferError::InvalidArgument {
                        message: "utf-16 payload has odd length",
                    });
                }
                let units: Vec<u16> = payload
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                utf16_to_utf8_strict(&units, ByteOrder::LittleEndian)?
            }
        };

        self.reader_index = start + len;
        Ok(value)
    }
}
