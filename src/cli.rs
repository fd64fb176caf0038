//! CLI front door.
//!
//! Resolves the UI component directory, runs one fix pass, and renders the
//! result in the requested format. The caller (`main.rs`) owns argument
//! parsing, tracing setup, and the process exit code.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;

use importfix_core::error::{FixError, OutputErrorCode};
use importfix_core::fixer::{fix_import_paths_with, UI_COMPONENT_SUFFIX};
use importfix_core::output::{emit_response, ErrorResponse, FixResponse};
use importfix_core::rewrite::UI_IMPORT_REWRITES;

/// Directory holding the UI component files, relative to the workspace.
pub const UI_COMPONENT_DIR: &str = "src/components/ui";

/// Output format for the fix report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `Fixed imports in <path>` line per rewritten file (default).
    #[default]
    Text,
    /// A single JSON response object.
    Json,
}

/// Errors surfaced by the front door.
#[derive(Debug, Error)]
pub enum CliError {
    /// The fix pass failed.
    #[error(transparent)]
    Fix(#[from] FixError),

    /// Writing the report failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Fix(err) => err.error_code().code(),
            CliError::Output(_) => OutputErrorCode::InternalError.code(),
        }
    }
}

/// Directory a pass runs over.
///
/// Without a workspace the relative path is used as-is, so reported paths
/// read `src/components/ui/<name>.tsx`.
pub fn component_dir(workspace: Option<&Path>) -> PathBuf {
    match workspace {
        Some(root) => root.join(UI_COMPONENT_DIR),
        None => PathBuf::from(UI_COMPONENT_DIR),
    }
}

/// Run one fix pass and write the report to `out`.
///
/// In text mode each line is written as soon as its file is rewritten.
pub fn run_fix(
    workspace: Option<&Path>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let dir = component_dir(workspace);

    match format {
        OutputFormat::Text => {
            let mut write_err = None;
            fix_import_paths_with(&dir, UI_COMPONENT_SUFFIX, &UI_IMPORT_REWRITES, |fixed| {
                if write_err.is_none() {
                    write_err = writeln!(out, "{}", fixed).err();
                }
            })?;
            if let Some(err) = write_err {
                return Err(err.into());
            }
        }
        OutputFormat::Json => {
            let report =
                fix_import_paths_with(&dir, UI_COMPONENT_SUFFIX, &UI_IMPORT_REWRITES, |_| {})?;
            emit_response(&FixResponse::from_report(report), out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Render a failure.
///
/// Text mode writes `error: <message>` to `err_out`; JSON mode writes an
/// error response to `out` so consumers only ever parse stdout.
pub fn report_error(
    err: &CliError,
    format: OutputFormat,
    out: &mut impl Write,
    err_out: &mut impl Write,
) -> io::Result<()> {
    match (format, err) {
        (OutputFormat::Json, CliError::Fix(fix_err)) => {
            emit_response(&ErrorResponse::from_error(fix_err), out)?;
            out.flush()
        }
        _ => writeln!(err_out, "error: {}", err),
    }
}

// ============================================================================
// Tests
// ============================================================================
