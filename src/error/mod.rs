//! Error types for wirebuf.

use thiserror::Error;

/// Errors raised by [`Buffer`](crate::Buffer) accessors and the string codec.
///
/// Every variant is detected synchronously at the offending call. A failed
/// read or write leaves both cursors where they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// An argument was rejected before any bytes were touched.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The addressed range falls outside the buffer.
    ///
    /// Offset accessors are bounded by the logical size; cursor reads are
    /// bounded by the write cursor.
    #[error("address range [{offset}, {end}) out of bound [0, {size})")]
    OutOfRange {
        /// First addressed byte.
        offset: usize,
        /// One past the last addressed byte.
        end: usize,
        /// Exclusive bound that was exceeded.
        size: usize,
    },

    /// A varint continuation chain ran past the width of the target integer.
    #[error("malformed varint: continuation exceeds {bits} bits")]
    MalformedVarint {
        /// Width of the integer being decoded (32 or 64).
        bits: u32,
    },

    /// Truncated or otherwise undecodable UTF-8.
    #[error("invalid utf-8 at byte offset {offset}")]
    InvalidUtf8 {
        /// Offset of the first byte of the offending sequence.
        offset: usize,
    },

    /// A surrogate code unit without its partner (strict transcoding only).
    #[error("unpaired surrogate at code unit index {index}")]
    UnpairedSurrogate {
        /// Index of the offending code unit.
        index: usize,
    },
}

impl BufferError {
    pub(crate) fn out_of_range(offset: usize, length: usize, size: usize) -> Self {
        BufferError::OutOfRange {
            offset,
            end: offset.saturating_add(length),
            size,
        }
    }
}

/// Result type alias using [`BufferError`].
pub type Result<T> = std::result::Result<T, BufferError>;
