//! Error types and exit code mapping for importfix.
//!
//! ## Error Code Mapping
//!
//! - `2`: Invalid arguments (reported by clap before a pass starts)
//! - `3`: Resolution errors (target directory not found)
//! - `4`: Apply errors (permission denied, other read/write failures)
//! - `5`: Encoding errors (matching file is not UTF-8)
//! - `10`: Internal errors

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

// ============================================================================
// Output Error Codes
// ============================================================================

/// Stable error codes, used as process exit codes and in JSON error output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputErrorCode {
    /// Invalid arguments from caller.
    InvalidArguments = 2,
    /// The directory to fix could not be found.
    ResolutionError = 3,
    /// Failed to read or write a file.
    ApplyError = 4,
    /// A file could not be decoded as text.
    EncodingError = 5,
    /// Bugs, unexpected state.
    InternalError = 10,
}

impl OutputErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for OutputErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Fixer Error
// ============================================================================

/// Everything that can abort a fix pass.
#[derive(Debug, Error)]
pub enum FixError {
    /// The target directory does not exist.
    #[error("directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Read or write refused by the filesystem.
    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// A matching file is not valid UTF-8.
    #[error("file is not valid UTF-8: {}", path.display())]
    Encoding { path: PathBuf },

    /// Any other I/O failure.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl FixError {
    /// Classify an I/O error raised while touching `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => FixError::PermissionDenied {
                path: path.to_path_buf(),
            },
            io::ErrorKind::InvalidData => FixError::Encoding {
                path: path.to_path_buf(),
            },
            _ => FixError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Classify a failure to list `dir`.
    ///
    /// A missing directory gets its own variant; everything else goes
    /// through [`FixError::from_io`].
    pub fn from_listing(dir: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            FixError::DirectoryNotFound {
                path: dir.to_path_buf(),
            }
        } else {
            FixError::from_io(dir, err)
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        FixError::Internal {
            message: message.into(),
        }
    }

    /// Path the error is about, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            FixError::DirectoryNotFound { path }
            | FixError::PermissionDenied { path }
            | FixError::Encoding { path }
            | FixError::Io { path, .. } => Some(path),
            FixError::Internal { .. } => None,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> OutputErrorCode {
        OutputErrorCode::from(self)
    }
}

impl From<&FixError> for OutputErrorCode {
    fn from(err: &FixError) -> Self {
        match err {
            FixError::DirectoryNotFound { .. } => OutputErrorCode::ResolutionError,
            FixError::PermissionDenied { .. } => OutputErrorCode::ApplyError,
            FixError::Io { .. } => OutputErrorCode::ApplyError,
            FixError::Encoding { .. } => OutputErrorCode::EncodingError,
            FixError::Internal { .. } => OutputErrorCode::InternalError,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
