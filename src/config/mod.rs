//! Configuration for buffer allocation.
//!
//! [`BufferConfig`] controls the initial logical size of a [`Buffer`](crate::Buffer)
//! and the largest size it may ever grow to.
//!
//! # Example
//!
//! ```
//! use wirebuf::{Buffer, BufferConfig};
//!
//! let config = BufferConfig::new(256, 1 << 20)?;
//! let buffer = Buffer::with_config(config)?;
//! assert_eq!(buffer.size(), 256);
//! # Ok::<(), wirebuf::BufferError>(())
//! ```

use crate::error::{BufferError, Result};

/// Default initial logical size (64 bytes).
pub const DEFAULT_INITIAL_SIZE: usize = 64;

/// Smallest allocation performed by a growing write.
pub const MIN_GROWTH_SIZE: usize = 64;

/// Default upper bound on the logical size (1 GiB, exclusive).
pub const DEFAULT_MAX_SIZE: usize = 1 << 30;

/// Size limits applied to a [`Buffer`](crate::Buffer).
///
/// # Size Constraints
///
/// - `initial_size` must be non-zero
/// - `initial_size` must be below `max_size`
///
/// Growth beyond `max_size` is rejected with [`BufferError::InvalidArgument`]
/// rather than attempted.
///
/// # Example
///
/// ```
/// use wirebuf::BufferConfig;
///
/// let config = BufferConfig::default()
///     .with_initial_size(1024)
///     .with_max_size(1 << 24);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferConfig {
    /// Logical size of a freshly constructed buffer.
    initial_size: usize,

    /// Exclusive upper bound on the logical size.
    max_size: usize,
}

impl BufferConfig {
    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidArgument`] if `initial_size` is zero or
    /// not below `max_size`.
    pub fn new(initial_size: usize, max_size: usize) -> Result<Self> {
        if initial_size == 0 {
            return Err(BufferError::InvalidArgument {
                message: "initial size must be positive",
            });
        }

        if initial_size >= max_size {
            return Err(BufferError::InvalidArgument {
                message: "initial size must be below max size",
            });
        }

        Ok(Self {
            initial_size,
            max_size,
        })
    }

    /// Sets the initial size.
    ///
    /// Note: This does not validate the configuration. Use [`BufferConfig::validate`].
    pub fn with_initial_size(mut self, size: usize) -> Self {
        self.initial_size = size;
        self
    }

    /// Sets the maximum size.
    ///
    /// Note: This does not validate the configuration. Use [`BufferConfig::validate`].
    pub fn with_max_size(mut self, size: usize) -> Self {
        self.max_size = size;
        self
    }

    /// Returns the initial size.
    pub fn initial_size(&self) -> usize {
        self.initial_size
    }

    /// Returns the maximum size.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Validates the current configuration.
    ///
    /// ```
    /// use wirebuf::BufferConfig;
    ///
    /// let config = BufferConfig::default().with_initial_size(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        Self::new(self.initial_size, self.max_size).map(|_| ())
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_size: DEFAULT_INITIAL_SIZE,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}
