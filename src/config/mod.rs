//! Configuration for dump behavior.
//!
//! - [`DumpConfig`] - Byte limit and line width
//!
//! # Example
//!
//! ```
//! use dumprs::DumpConfig;
//!
//! // Custom limit and line width
//! let config = DumpConfig::new(1024, 16)?;
//!
//! // Dump a whole stream, 8 bytes per line
//! let config = DumpConfig::default().unlimited().with_bytes_per_line(8);
//!
//! # Ok::<(), dumprs::DumpError>(())
//! ```

use crate::error::DumpError;

/// Default maximum number of bytes read from the input (256).
pub const DEFAULT_LIMIT: u64 = 256;

/// Default number of bytes rendered per line (16).
pub const DEFAULT_BYTES_PER_LINE: usize = 16;

/// Configuration for hex-dump behavior.
///
/// `DumpConfig` controls how much of the input is dumped and how wide each
/// output line is:
///
/// - Byte limit (`limit`) - At most this many bytes are read from the input;
///   `None` dumps the whole stream. A limit of zero produces no lines.
/// - Line width (`bytes_per_line`) - Number of bytes per output line. Must be
///   non-zero. The hex column is padded to `3 * bytes_per_line` characters so
///   the ASCII column aligns even on a short final line.
///
/// # Example
///
/// ```
/// use dumprs::DumpConfig;
///
/// // Use default configuration (256-byte limit, 16 bytes per line)
/// let config = DumpConfig::default();
///
/// // Custom configuration
/// let config = DumpConfig::new(1024, 16)?;
///
/// // Builder pattern
/// let config = DumpConfig::default()
///     .with_limit(4096)
///     .with_bytes_per_line(32);
/// # Ok::<(), dumprs::DumpError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DumpConfig {
    /// Maximum number of bytes to read, if bounded.
    limit: Option<u64>,

    /// Number of bytes rendered per output line.
    bytes_per_line: usize,
}

impl DumpConfig {
    /// Creates a new configuration with the specified limit and line width.
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::InvalidConfig`] if `bytes_per_line` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use dumprs::DumpConfig;
    ///
    /// let config = DumpConfig::new(1024, 16)?;
    /// assert_eq!(config.limit(), Some(1024));
    /// # Ok::<(), dumprs::DumpError>(())
    /// ```
    pub fn new(limit: u64, bytes_per_line: usize) -> Result<Self, DumpError> {
        if bytes_per_line == 0 {
            return Err(DumpError::InvalidConfig {
                message: "bytes_per_line must be non-zero",
            });
        }

        Ok(Self {
            limit: Some(limit),
            bytes_per_line,
        })
    }

    /// Sets the byte limit.
    ///
    /// A limit of zero is valid and produces no output lines.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Removes the byte limit so the whole input is dumped.
    pub fn unlimited(mut self) -> Self {
        self.limit = None;
        self
    }

    /// Sets the number of bytes per output line.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`DumpConfig::validate`] to check if the configuration is valid.
    pub fn with_bytes_per_line(mut self, bytes_per_line: usize) -> Self {
        self.bytes_per_line = bytes_per_line;
        self
    }

    /// Returns the byte limit, or `None` if unbounded.
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Returns the number of bytes per output line.
    pub fn bytes_per_line(&self) -> usize {
        self.bytes_per_line
    }

    /// Validates the current configuration.
    ///
    /// Returns an error if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use dumprs::DumpConfig;
    ///
    /// let config = DumpConfig::default().with_bytes_per_line(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), DumpError> {
        if self.bytes_per_line == 0 {
            return Err(DumpError::InvalidConfig {
                message: "bytes_per_line must be non-zero",
            });
        }
        Ok(())
    }
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            limit: Some(DEFAULT_LIMIT),
            bytes_per_line: DEFAULT_BYTES_PER_LINE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DumpConfig::default();
        assert_eq!(config.limit(), Some(DEFAULT_LIMIT));
        assert_eq!(config.bytes_per_line(), DEFAULT_BYTES_PER_LINE);
    }

    #[test]
    fn test_builder_pattern() {
        let config = DumpConfig::default().with_limit(4096).with_bytes_per_line(32);

        assert_eq!(config.limit(), Some(4096));
        assert_eq!(config.bytes_per_line(), 32);
    }

    #[test]
    fn test_unlimited() {
        let config = DumpConfig::default().unlimited();
        assert_eq!(config.limit(), None);
    }

    #[test]
    fn test_zero_limit_is_valid() {
        let config = DumpConfig::new(0, 16).unwrap();
        assert_eq!(config.limit(), Some(0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config_zero_width() {
        let result = DumpConfig::new(256, 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_after_builder() {
        let config = DumpConfig::default().with_bytes_per_line(0);
        assert!(config.validate().is_err());

        let config = DumpConfig::default().with_bytes_per_line(8);
        assert!(config.validate().is_ok());
    }
}
