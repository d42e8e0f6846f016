//! Error types for dumprs.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Errors that can occur during dump operations.
#[derive(Debug)]
pub enum DumpError {
    /// An I/O error occurred while reading input data or writing output.
    Io(std::io::Error),

    /// The input path does not name an existing file.
    FileNotFound {
        /// The path that failed to open.
        path: PathBuf,
    },

    /// The input path exists but is not readable.
    PermissionDenied {
        /// The path that failed to open.
        path: PathBuf,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl DumpError {
    /// Classifies a failed file open by its [`ErrorKind`].
    ///
    /// `NotFound` and `PermissionDenied` become their dedicated variants so
    /// callers can match on them without digging into the I/O error; anything
    /// else stays a plain [`DumpError::Io`].
    pub(crate) fn from_open(path: &Path, e: std::io::Error) -> Self {
        match e.kind() {
            ErrorKind::NotFound => DumpError::FileNotFound {
                path: path.to_path_buf(),
            },
            ErrorKind::PermissionDenied => DumpError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => DumpError::Io(e),
        }
    }
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpError::Io(e) => write!(f, "io error: {}", e),
            DumpError::FileNotFound { path } => {
                write!(f, "file not found: {}", path.display())
            }
            DumpError::PermissionDenied { path } => {
                write!(f, "permission denied: {}", path.display())
            }
            DumpError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for DumpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DumpError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DumpError {
    fn from(e: std::io::Error) -> Self {
        DumpError::Io(e)
    }
}
