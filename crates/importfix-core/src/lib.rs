//! Core infrastructure for importfix.
//!
//! This crate provides everything the `fix-imports` front door needs:
//! - Literal import rewrite rules and the pure rewrite step
//! - The directory fixer (list, filter, rewrite, write back)
//! - Atomic file writes
//! - Error types and exit code mapping
//! - JSON output types for CLI responses

pub mod error;
pub mod fixer;
pub mod fs;
pub mod output;
pub mod rewrite;

pub use error::{FixError, OutputErrorCode};
pub use fixer::{
    fix_file, fix_import_paths, fix_import_paths_with, FixReport, FixedFile, UI_COMPONENT_SUFFIX,
};
pub use rewrite::{apply_rewrites, AppliedRewrite, ImportRewrite, RewriteOutcome, UI_IMPORT_REWRITES};
