//! Fixed-width little-endian accessors.

use super::Buffer;
use crate::error::Result;

macro_rules! little_endian_accessors {
    ($($ty:ty => $put:ident, $get:ident, $write:ident, $read:ident;)*) => {
        $(
            #[doc = concat!("Stores `value` as a little-endian `", stringify!($ty), "` at `offset`.")]
            #[inline]
            pub fn $put(&mut self, offset: usize, value: $ty) -> Result<()> {
                self.put_array(offset, value.to_le_bytes())
            }

            #[doc = concat!("Loads a little-endian `", stringify!($ty), "` from `offset`.")]
            #[inline]
            pub fn $get(&self, offset: usize) -> Result<$ty> {
                self.get_array(offset).map(<$ty>::from_le_bytes)
            }

            #[doc = concat!("Appends a little-endian `", stringify!($ty), "` at the write cursor.")]
            #[inline]
            pub fn $write(&mut self, value: $ty) -> Result<()> {
                self.write_array(value.to_le_bytes())
            }

            #[doc = concat!("Consumes a little-endian `", stringify!($ty), "` at the read cursor.")]
            #[inline]
            pub fn $read(&mut self) -> Result<$ty> {
                self.read_array().map(<$ty>::from_le_bytes)
            }
        )*
    };
}

impl Buffer {
    #[inline]
    fn put_array<const N: usize>(&mut self, offset: usize, bytes: [u8; N]) -> Result<()> {
        self.check_bound(offset, N)?;
        self.data[offset..offset + N].copy_from_slice(&bytes);
        Ok(())
    }

    #[inline]
    fn get_array<const N: usize>(&self, offset: usize) -> Result<[u8; N]> {
        self.check_bound(offset, N)?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.data[offset..offset + N]);
        Ok(bytes)
    }

    #[inline]
    fn write_array<const N: usize>(&mut self, bytes: [u8; N]) -> Result<()> {
        self.grow(N)?;
        self.put_array(self.writer_index, bytes)?;
        self.writer_index += N;
        Ok(())
    }

    #[inline]
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.check_readable(N)?;
        let bytes = self.get_array(self.reader_index)?;
        self.reader_index += N;
        Ok(bytes)
    }

    /// Stores `value` as a single `0`/`1` byte at `offset`.
    pub fn put_bool(&mut self, offset: usize, value: bool) -> Result<()> {
        self.put_array(offset, [u8::from(value)])
    }

    /// Loads a bool from `offset`; any non-zero byte is `true`.
    pub fn get_bool(&self, offset: usize) -> Result<bool> {
        self.get_array::<1>(offset).map(|[b]| b != 0)
    }

    /// Appends a bool at the write cursor.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_array([u8::from(value)])
    }

    /// Consumes a bool at the read cursor.
    pub fn read_bool(&mut self) -> Result<bool> {
        self.read_array::<1>().map(|[b]| b != 0)
    }

    /// Stores the low 24 bits of `value` as three little-endian bytes.
    ///
    /// ```
    /// use wirebuf::Buffer;
    ///
    /// let mut buf = Buffer::allocate(3)?;
    /// buf.put_int24(0, 0x0012_3456)?;
    /// assert_eq!(buf.as_slice(), &[0x56, 0x34, 0x12]);
    /// # Ok::<(), wirebuf::BufferError>(())
    /// ```
    pub fn put_int24(&mut self, offset: usize, value: i32) -> Result<()> {
        let [b0, b1, b2, _] = value.to_le_bytes();
        self.put_array(offset, [b0, b1, b2])
    }

    /// Loads three little-endian bytes from `offset`.
    ///
    /// The result is zero-extended: `0xFFFFFF` reads back as `16777215`, not
    /// `-1`. Sign interpretation is left to the caller.
    pub fn get_int24(&self, offset: usize) -> Result<i32> {
        self.get_array::<3>(offset)
            .map(|[b0, b1, b2]| i32::from_le_bytes([b0, b1, b2, 0]))
    }

    /// Appends the low 24 bits of `value` at the write cursor.
    pub fn write_int24(&mut self, value: i32) -> Result<()> {
        let [b0, b1, b2, _] = value.to_le_bytes();
        self.write_array([b0, b1, b2])
    }

    /// Consumes a zero-extended 24-bit value at the read cursor.
    pub fn read_int24(&mut self) -> Result<i32> {
        self.read_array::<3>()
            .map(|[b0, b1, b2]| i32::from_le_bytes([b0, b1, b2, 0]))
    }

    little_endian_accessors! {
        i8 => put_int8, get_int8, write_int8, read_int8;
        u8 => put_uint8, get_uint8, write_uint8, read_uint8;
        i16 => put_int16, get_int16, write_int16, read_int16;
        u16 => put_uint16, get_uint16, write_uint16, read_uint16;
        i32 => put_int32, get_int32, write_int32, read_int32;
        u32 => put_uint32, get_uint32, write_uint32, read_uint32;
        i64 => put_int64, get_int64, write_int64, read_int64;
        u64 => put_uint64, get_uint64, write_uint64, read_uint64;
        f32 => put_float32, get_float32, write_float32, read_float32;
        f64 => put_float64, get_float64, write_float64, read_float64;
    }
}

#[cfg(test)]
mod tests {
    use crate::{Buffer, BufferError};

    #[test]
    fn test_little_endian_layout() {
        let mut buf = Buffer::allocate(32).unwrap();
        buf.put_int16(0, 0x0102).unwrap();
        buf.put_int32(2, 0x0304_0506).unwrap();
        buf.put_int64(6, 0x0708_090A_0B0C_0D0E).unwrap();
        assert_eq!(
            &buf.as_slice()[..14],
            &[0x02, 0x01, 0x06, 0x05, 0x04, 0x03, 0x0E, 0x0D, 0x0C, 0x0B, 0x0A, 0x09, 0x08, 0x07]
        );
        assert_eq!(buf.get_int16(0).unwrap(), 0x0102);
        assert_eq!(buf.get_int32(2).unwrap(), 0x0304_0506);
        assert_eq!(buf.get_int64(6).unwrap(), 0x0708_090A_0B0C_0D0E);
    }

    #[test]
    fn test_floats() {
        let mut buf = Buffer::allocate(12).unwrap();
        buf.put_float32(0, 1.5).unwrap();
        buf.put_float64(4, -0.25).unwrap();
        assert_eq!(&buf.as_slice()[..4], &1.5f32.to_le_bytes());
        assert_eq!(buf.get_float32(0).unwrap(), 1.5);
        assert_eq!(buf.get_float64(4).unwrap(), -0.25);
    }

    #[test]
    fn test_bool_and_bytes() {
        let mut buf = Buffer::allocate(3).unwrap();
        buf.put_bool(0, true).unwrap();
        buf.put_int8(1, -1).unwrap();
        buf.put_uint8(2, 200).unwrap();
        assert_eq!(buf.as_slice(), &[1, 0xFF, 200]);
        assert!(buf.get_bool(0).unwrap());
        assert_eq!(buf.get_int8(1).unwrap(), -1);
        assert_eq!(buf.get_uint8(2).unwrap(), 200);

        buf.as_mut_slice()[0] = 7;
        assert!(buf.get_bool(0).unwrap());
    }

    #[test]
    fn test_int24_zero_extends() {
        let mut buf = Buffer::allocate(6).unwrap();
        buf.put_int24(0, -1).unwrap();
        assert_eq!(&buf.as_slice()[..3], &[0xFF, 0xFF, 0xFF]);
        assert_eq!(buf.get_int24(0).unwrap(), 0x00FF_FFFF);

        buf.put_int24(3, 0x7F_0102).unwrap();
        assert_eq!(buf.get_int24(3).unwrap(), 0x7F_0102);
    }

    #[test]
    fn test_put_out_of_range_writes_nothing() {
        let mut buf = Buffer::allocate(4).unwrap();
        let err = buf.put_int32(1, -1).unwrap_err();
        assert_eq!(
            err,
            BufferError::OutOfRange {
                offset: 1,
                end: 5,
                size: 4
            }
        );
        assert_eq!(buf.as_slice(), &[0, 0, 0, 0]);
        assert!(buf.get_int64(0).is_err());
        assert!(buf.get_int24(2).is_err());
    }

    #[test]
    fn test_write_then_read_sequence() {
        let mut buf = Buffer::allocate(1).unwrap();
        buf.write_bool(true).unwrap();
        buf.write_int8(-5).unwrap();
        buf.write_uint8(250).unwrap();
        buf.write_int16(-300).unwrap();
        buf.write_int24(0x12_3456).unwrap();
        buf.write_int32(i32::MIN).unwrap();
        buf.write_int64(i64::MAX).unwrap();
        buf.write_uint64(u64::MAX).unwrap();
        buf.write_float32(3.25).unwrap();
        buf.write_float64(f64::MIN_POSITIVE).unwrap();
        assert_eq!(buf.writer_index(), 1 + 1 + 1 + 2 + 3 + 4 + 8 + 8 + 4 + 8);
        assert!(buf.writer_index() <= buf.size());

        assert!(buf.read_bool().unwrap());
        assert_eq!(buf.read_int8().unwrap(), -5);
        assert_eq!(buf.read_uint8().unwrap(), 250);
        assert_eq!(buf.read_int16().unwrap(), -300);
        assert_eq!(buf.read_int24().unwrap(), 0x12_3456);
        assert_eq!(buf.read_int32().unwrap(), i32::MIN);
        assert_eq!(buf.read_int64().unwrap(), i64::MAX);
        assert_eq!(buf.read_uint64().unwrap(), u64::MAX);
        assert_eq!(buf.read_float32().unwrap(), 3.25);
        assert_eq!(buf.read_float64().unwrap(), f64::MIN_POSITIVE);
        assert_eq!(buf.reader_index(), buf.writer_index());
    }

    #[test]
    fn test_read_stops_at_writer_index() {
        let mut buf = Buffer::allocate(16).unwrap();
        buf.write_int32(7).unwrap();
        assert_eq!(buf.read_int32().unwrap(), 7);
        assert_eq!(
            buf.read_int32().unwrap_err(),
            BufferError::OutOfRange {
                offset: 4,
                end: 8,
                size: 4
            }
        );
        assert_eq!(buf.reader_index(), 4);
        assert_eq!(buf.get_int32(4).unwrap(), 0, "offset reads still see the full size");
    }

    #[test]
    fn test_read_past_end_keeps_cursor() {
        let mut buf = Buffer::from(vec![1, 2, 3]);
        assert_eq!(buf.read_int16().unwrap(), 0x0201);
        assert!(matches!(
            buf.read_int32(),
            Err(BufferError::OutOfRange { .. })
        ));
        assert_eq!(buf.reader_index(), 2);
        assert_eq!(buf.read_uint8().unwrap(), 3);
        assert!(buf.read_bool().is_err());
    }
}
