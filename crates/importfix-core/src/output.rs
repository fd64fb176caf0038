//! JSON output types for `fix-imports --format json`.
//!
//! Every response has `status` as its first field and carries
//! `schema_version` so consumers can detect format changes.

use std::io::{self, Write};

use serde::Serialize;

use crate::error::{FixError, OutputErrorCode};
use crate::fixer::{FixReport, FixedFile};

/// Current schema version for all responses.
pub const SCHEMA_VERSION: &str = "1";

/// Successful pass.
#[derive(Debug, Clone, Serialize)]
pub struct FixResponse {
    /// Status: "ok".
    pub status: String,
    /// Schema version for compatibility.
    pub schema_version: String,
    /// Directory that was scanned.
    pub directory: String,
    /// Number of matching files read.
    pub scanned: usize,
    /// Rewritten files, in file-name order.
    pub fixed: Vec<FixedFile>,
}

impl FixResponse {
    pub fn from_report(report: FixReport) -> Self {
        FixResponse {
            status: "ok".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            directory: report.directory.display().to_string(),
            scanned: report.scanned,
            fixed: report.fixed,
        }
    }
}

/// Error details inside an [`ErrorResponse`].
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    /// Numeric error code (same as the exit code).
    pub code: u8,
    /// Human-readable message.
    pub message: String,
    /// Path the error is about, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorInfo {
    /// Create from a FixError.
    pub fn from_error(err: &FixError) -> Self {
        ErrorInfo {
            code: OutputErrorCode::from(err).code(),
            message: err.to_string(),
            path: err.path().map(|p| p.display().to_string()),
        }
    }
}

/// Failed pass.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Status: "error".
    pub status: String,
    /// Schema version for compatibility.
    pub schema_version: String,
    /// Error information.
    pub error: ErrorInfo,
}

impl ErrorResponse {
    /// Create an error response from a FixError.
    pub fn from_error(err: &FixError) -> Self {
        ErrorResponse {
            status: "error".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            error: ErrorInfo::from_error(err),
        }
    }
}

/// Emit a response as pretty-printed JSON to a writer.
pub fn emit_response<T: Serialize>(response: &T, writer: &mut impl Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}

// ============================================================================
// Tests
// ============================================================================
