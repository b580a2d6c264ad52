//! wirebuf
//!
//! Low-level wire-format layer for cross-language serialization.
//!
//! `wirebuf` provides the byte-exact primitives an object-graph serializer is
//! built on:
//!
//! - a bounds-checked, growable [`Buffer`] with independent read and write
//!   cursors
//! - fixed-width little-endian integers and floats, including a 3-byte `int24`
//! - base-128 varints with zigzag mapping for signed values
//! - length-prefixed byte and string framing
//! - UTF-16 <-> UTF-8 transcoding with a fast ASCII check ([`codec`])
//!
//! The crate intentionally:
//! - does NOT decide object layout
//! - does NOT compress
//! - does NOT synchronize (a `Buffer` is mutated through `&mut self`)
//!
//! Every accessor validates its byte range first. Arbitrary offsets and
//! arbitrary input bytes produce a [`BufferError`], never a panic or a read
//! outside the buffer.
//!
//! # Example
//!
//! ```
//! use wirebuf::{Buffer, BufferError};
//!
//! fn main() -> Result<(), BufferError> {
//!     let mut out = Buffer::allocate(64)?;
//!     out.write_varint64(-42)?;
//!     out.write_float64(2.5)?;
//!     out.write_string("héllo")?;
//!
//!     let mut input = Buffer::from(out.into_bytes());
//!     assert_eq!(input.read_varint64()?, -42);
//!     assert_eq!(input.read_float64()?, 2.5);
//!     assert_eq!(input.read_string()?, "héllo");
//!     assert!(input.read_uint8().is_err());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod error;

pub mod codec;
pub mod varint;

//
// Public surface
//

pub use buffer::{Buffer, StringEncoding};
pub use config::{BufferConfig, DEFAULT_INITIAL_SIZE, DEFAULT_MAX_SIZE, MIN_GROWTH_SIZE};
pub use error::{BufferError, Result};
