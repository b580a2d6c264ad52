//! Growable byte buffer with independent read and write cursors.
//!
//! A [`Buffer`] exposes two APIs over the same storage:
//!
//! - offset-addressed `put_*` / `get_*`, which never move a cursor
//! - cursor-based `write_*` / `read_*`, which advance `writer_index` /
//!   `reader_index` by the encoded length
//!
//! Both go through [`Buffer::check_bound`] before touching a byte, so an
//! arbitrary (possibly hostile) offset yields [`BufferError::OutOfRange`]
//! instead of a panic. Cursor reads are further limited to the written
//! region `[reader_index, writer_index)`; bytes past the write cursor are
//! never handed out as data.
//!
//! # Example
//!
//! ```
//! use wirebuf::Buffer;
//!
//! let mut buf = Buffer::allocate(16)?;
//! buf.write_int32(-7)?;
//! buf.write_varuint32(300)?;
//! buf.write_string("Fury")?;
//!
//! let mut reader = Buffer::from(buf.written());
//! assert_eq!(reader.read_int32()?, -7);
//! assert_eq!(reader.read_varuint32()?, 300);
//! assert_eq!(reader.read_string()?, "Fury");
//! # Ok::<(), wirebuf::BufferError>(())
//! ```

mod fixed;
mod string;
mod varint;

pub use string::StringEncoding;

use std::fmt;
use std::ops::Index;

use bytes::Bytes;

use crate::config::{BufferConfig, DEFAULT_MAX_SIZE, MIN_GROWTH_SIZE};
use crate::error::{BufferError, Result};

/// An owned, bounds-checked byte buffer.
///
/// The logical size is the zero-initialised length of the storage; every
/// accessor is validated against it. Writes through the cursor API grow the
/// storage with a doubling policy: when `writer_index + n` exceeds the size,
/// the buffer is resized to `max(2 * (writer_index + n), 64)`.
///
/// A `Buffer` is not shared: [`Buffer::slice`] and [`Buffer::to_bytes`] copy.
#[derive(Clone)]
pub struct Buffer {
    data: Vec<u8>,
    reader_index: usize,
    writer_index: usize,
    max_size: usize,
}

impl Buffer {
    /// Allocates a zero-filled buffer of `size` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `size` is zero or not below
    /// [`DEFAULT_MAX_SIZE`](crate::DEFAULT_MAX_SIZE).
    ///
    /// ```
    /// use wirebuf::{Buffer, BufferError};
    ///
    /// assert_eq!(Buffer::allocate(32)?.size(), 32);
    /// assert!(matches!(Buffer::allocate(0), Err(BufferError::InvalidArgument { .. })));
    /// # Ok::<(), wirebuf::BufferError>(())
    /// ```
    pub fn allocate(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(BufferError::InvalidArgument {
                message: "size must be positive",
            });
        }
        Self::with_config(BufferConfig::default().with_initial_size(size))
    }

    /// Allocates a buffer sized and limited by `config`.
    pub fn with_config(config: BufferConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            data: vec![0; config.initial_size()],
            reader_index: 0,
            writer_index: 0,
            max_size: config.max_size(),
        })
    }

    /// Returns the logical size in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of bytes allocated for storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the largest size this buffer may grow to (exclusive).
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns the read cursor.
    #[inline]
    pub fn reader_index(&self) -> usize {
        self.reader_index
    }

    /// Returns the write cursor.
    #[inline]
    pub fn writer_index(&self) -> usize {
        self.writer_index
    }

    /// Moves the read cursor.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfRange`] if `index` is past the logical size.
    pub fn set_reader_index(&mut self, index: usize) -> Result<()> {
        self.check_bound(index, 0)?;
        self.reader_index = index;
        Ok(())
    }

    /// Moves the write cursor.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::OutOfRange`] if `index` is past the logical size.
    pub fn set_writer_index(&mut self, index: usize) -> Result<()> {
        self.check_bound(index, 0)?;
        self.writer_index = index;
        Ok(())
    }

    /// Number of written bytes not yet consumed, `writer_index - reader_index`.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.writer_index.saturating_sub(self.reader_index)
    }

    /// Rewinds both cursors to zero. Storage is kept.
    pub fn clear(&mut self) {
        self.reader_index = 0;
        self.writer_index = 0;
    }

    /// Validates that `[offset, offset + length)` lies within the logical size.
    ///
    /// Every accessor calls this before touching storage.
    #[inline]
    pub fn check_bound(&self, offset: usize, length: usize) -> Result<()> {
        match offset.checked_add(length) {
            Some(end) if end <= self.size() => Ok(()),
            _ => Err(BufferError::out_of_range(offset, length, self.size())),
        }
    }

    /// Validates that `length` bytes are readable at the read cursor, i.e.
    /// that `[reader_index, reader_index + length)` lies below `writer_index`.
    #[inline]
    pub(crate) fn check_readable(&self, length: usize) -> Result<()> {
        match self.reader_index.checked_add(length) {
            Some(end) if end <= self.writer_index => Ok(()),
            _ => Err(BufferError::out_of_range(
                self.reader_index,
                length,
                self.writer_index,
            )),
        }
    }

    /// Grows the logical size to `new_size` if it is currently smaller.
    ///
    /// Never shrinks; see [`Buffer::resize`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `new_size` is zero or not
    /// below the maximum size.
    pub fn reserve(&mut self, new_size: usize) -> Result<()> {
        if new_size == 0 || new_size >= self.max_size {
            tracing::debug!(new_size, max_size = self.max_size, "rejecting buffer reserve");
            return Err(BufferError::InvalidArgument {
                message: "invalid size for reserve",
            });
        }
        if new_size > self.size() {
            tracing::trace!(from = self.size(), to = new_size, "growing buffer storage");
            self.data.resize(new_size, 0);
        }
        Ok(())
    }

    /// Sets the logical size to exactly `new_size`, clamping both cursors.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `new_size` is not below the
    /// maximum size.
    pub fn resize(&mut self, new_size: usize) -> Result<()> {
        if new_size >= self.max_size {
            return Err(BufferError::InvalidArgument {
                message: "invalid size for resize",
            });
        }
        tracing::trace!(from = self.size(), to = new_size, "resizing buffer storage");
        self.data.resize(new_size, 0);
        self.reader_index = self.reader_index.min(new_size);
        self.writer_index = self.writer_index.min(new_size);
        Ok(())
    }

    /// Makes room for `needed` more bytes at the write cursor.
    ///
    /// If `writer_index + needed` exceeds the size, reserves
    /// `max(2 * (writer_index + needed), 64)`.
    pub fn grow(&mut self, needed: usize) -> Result<()> {
        let required = self
            .writer_index
            .checked_add(needed)
            .ok_or(BufferError::InvalidArgument {
                message: "requested size overflows",
            })?;
        if required > self.size() {
            self.reserve(required.saturating_mul(2).max(MIN_GROWTH_SIZE))?;
        }
        Ok(())
    }

    /// Guarantees a logical size of at least `length`, reserving
    /// `2 * length` when currently smaller.
    ///
    /// Used before filling a buffer through `put_*` rather than `write_*`.
    pub fn ensure(&mut self, length: usize) -> Result<()> {
        if length > self.size() {
            self.reserve(length.saturating_mul(2))?;
        }
        Ok(())
    }

    /// Advances the read cursor by `length` bytes.
    pub fn skip(&mut self, length: usize) -> Result<()> {
        self.check_readable(length)?;
        self.reader_index += length;
        Ok(())
    }

    /// Returns the byte at `index`.
    pub fn byte_at(&self, index: usize) -> Result<u8> {
        self.check_bound(index, 1)?;
        Ok(self.data[index])
    }

    /// Returns the full logical content.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the full logical content, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the bytes written so far, `[0, writer_index)`.
    #[inline]
    pub fn written(&self) -> &[u8] {
        &self.data[..self.writer_index]
    }

    /// Renders the full logical content as lowercase hex, two digits per byte.
    ///
    /// ```
    /// use wirebuf::Buffer;
    ///
    /// let buf = Buffer::from(&[0x00, 0xAB, 0x10][..]);
    /// assert_eq!(buf.to_hex(), "00ab10");
    /// ```
    pub fn to_hex(&self) -> String {
        hex::encode(&self.data)
    }

    /// Alias of [`Buffer::to_hex`].
    #[inline]
    pub fn hex(&self) -> String {
        self.to_hex()
    }

    /// Copies `[offset, offset + length)` out of the buffer.
    ///
    /// A `length` of zero means "to the end of the logical content".
    pub fn to_bytes(&self, offset: usize, length: usize) -> Result<Bytes> {
        let length = self.length_or_rest(offset, length)?;
        self.check_bound(offset, length)?;
        Ok(Bytes::copy_from_slice(&self.data[offset..offset + length]))
    }

    /// Returns a new, independent buffer holding a copy of
    /// `[offset, offset + length)`.
    ///
    /// `None` means "to the end of the logical content". Later writes to
    /// either buffer are not visible in the other.
    pub fn slice(&self, offset: usize, length: Option<usize>) -> Result<Buffer> {
        let length = match length {
            Some(length) => length,
            None => self.rest_from(offset)?,
        };
        self.check_bound(offset, length)?;
        Ok(Buffer::from(&self.data[offset..offset + length]))
    }

    /// Consumes the buffer and returns the written bytes, `[0, writer_index)`.
    pub fn into_bytes(mut self) -> Bytes {
        self.data.truncate(self.writer_index);
        Bytes::from(self.data)
    }

    fn length_or_rest(&self, offset: usize, length: usize) -> Result<usize> {
        if length == 0 {
            self.rest_from(offset)
        } else {
            Ok(length)
        }
    }

    fn rest_from(&self, offset: usize) -> Result<usize> {
        self.size()
            .checked_sub(offset)
            .ok_or_else(|| BufferError::out_of_range(offset, 0, self.size()))
    }
}

impl Default for Buffer {
    fn default() -> Self {
        let config = BufferConfig::default();
        Self {
            data: vec![0; config.initial_size()],
            reader_index: 0,
            writer_index: 0,
            max_size: config.max_size(),
        }
    }
}

impl From<Vec<u8>> for Buffer {
    /// Wraps existing bytes as already written: the logical size and the
    /// write cursor are their length, the read cursor starts at zero.
    fn from(data: Vec<u8>) -> Self {
        Self {
            writer_index: data.len(),
            data,
            reader_index: 0,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl From<&[u8]> for Buffer {
    fn from(data: &[u8]) -> Self {
        Self::from(data.to_vec())
    }
}

impl From<Bytes> for Buffer {
    fn from(data: Bytes) -> Self {
        Self::from(Vec::from(data))
    }
}

impl Index<usize> for Buffer {
    type Output = u8;

    /// Panics when `index` is past the logical size; use [`Buffer::byte_at`]
    /// for a checked read.
    fn index(&self, index: usize) -> &u8 {
        &self.as_slice()[index]
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Buffer(reader_index={}, writer_index={}, size={})",
            self.reader_index,
            self.writer_index,
            self.size()
        )
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::LowerHex for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
