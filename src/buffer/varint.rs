//! Varint and zigzag accessors.

use super::Buffer;
use crate::error::Result;
use crate::varint::{
    self, MAX_VARUINT32_LEN, MAX_VARUINT64_LEN, zigzag_decode32, zigzag_decode64,
    zigzag_encode32, zigzag_encode64,
};

impl Buffer {
    /// Appends `value` as an unsigned varint and returns the bytes emitted.
    ///
    /// ```
    /// use wirebuf::Buffer;
    ///
    /// let mut buf = Buffer::allocate(8)?;
    /// assert_eq!(buf.write_varuint32(300)?, 2);
    /// assert_eq!(buf.written(), &[0xAC, 0x02]);
    /// # Ok::<(), wirebuf::BufferError>(())
    /// ```
    pub fn write_varuint32(&mut self, value: u32) -> Result<usize> {
        self.grow(MAX_VARUINT32_LEN)?;
        let n = varint::encode_varuint32(value, &mut self.data[self.writer_index..]);
        self.writer_index += n;
        Ok(n)
    }

    /// Appends `value` as an unsigned varint and returns the bytes emitted.
    pub fn write_varuint64(&mut self, value: u64) -> Result<usize> {
        self.grow(MAX_VARUINT64_LEN)?;
        let n = varint::encode_varuint64(value, &mut self.data[self.writer_index..]);
        self.writer_index += n;
        Ok(n)
    }

    /// Appends `value` zigzag-encoded and returns the bytes emitted.
    pub fn write_varint32(&mut self, value: i32) -> Result<usize> {
        self.write_varuint32(zigzag_encode32(value))
    }

    /// Appends `value` zigzag-encoded and returns the bytes emitted.
    pub fn write_varint64(&mut self, value: i64) -> Result<usize> {
        self.write_varuint64(zigzag_encode64(value))
    }

    /// Consumes an unsigned varint at the read cursor.
    ///
    /// # Errors
    ///
    /// - [`BufferError::OutOfRange`](crate::BufferError::OutOfRange) if the
    ///   written content ends mid-varint
    /// - [`BufferError::MalformedVarint`](crate::BufferError::MalformedVarint)
    ///   if more than 5 bytes carry a continuation bit
    ///
    /// The read cursor does not move on error.
    pub fn read_varuint32(&mut self) -> Result<u32> {
        let (value, n) = varint::decode_varuint32(self.written(), self.reader_index)?;
        self.reader_index += n;
        Ok(value)
    }

    /// Consumes an unsigned varint at the read cursor.
    ///
    /// Same failure modes as [`Buffer::read_varuint32`], with a 10-byte limit.
    pub fn read_varuint64(&mut self) -> Result<u64> {
        let (value, n) = varint::decode_varuint64(self.written(), self.reader_index)?;
        self.reader_index += n;
        Ok(value)
    }

    /// Consumes a zigzag-encoded varint at the read cursor.
    pub fn read_varint32(&mut self) -> Result<i32> {
        self.read_varuint32().map(zigzag_decode32)
    }

    /// Consumes a zigzag-encoded varint at the read cursor.
    pub fn read_varint64(&mut self) -> Result<i64> {
        self.read_varuint64().map(zigzag_decode64)
    }

    /// Stores an unsigned varint at `offset` and returns its length.
    ///
    /// Fails without writing if the encoding would cross the logical end.
    pub fn put_varuint32(&mut self, offset: usize, value: u32) -> Result<usize> {
        let n = varint::varuint32_len(value);
        self.check_bound(offset, n)?;
        Ok(varint::encode_varuint32(value, &mut self.data[offset..]))
    }

    /// Stores an unsigned varint at `offset` and returns its length.
    pub fn put_varuint64(&mut self, offset: usize, value: u64) -> Result<usize> {
        let n = varint::varuint64_len(value);
        self.check_bound(offset, n)?;
        Ok(varint::encode_varuint64(value, &mut self.data[offset..]))
    }

    /// Loads an unsigned varint at `offset`, returning the value and its length.
    pub fn get_varuint32(&self, offset: usize) -> Result<(u32, usize)> {
        varint::decode_varuint32(self.as_slice(), offset)
    }

    /// Loads an unsigned varint at `offset`, returning the value and its length.
    pub fn get_varuint64(&self, offset: usize) -> Result<(u64, usize)> {
        varint::decode_varuint64(self.as_slice(), offset)
    }
}
