//! importfix: rewrite alias imports in UI component files.
//!
//! This crate provides the `fix-imports` binary and its front door.
//!
//! ## Modules
//!
//! - `cli` - Directory resolution, the fix pass, and report rendering

pub mod cli;

// Re-export core types for convenience
pub use importfix_core::error::{FixError, OutputErrorCode};
pub use importfix_core::fixer::{fix_import_paths, FixReport, FixedFile, UI_COMPONENT_SUFFIX};
pub use importfix_core::output::{ErrorResponse, FixResponse, SCHEMA_VERSION};
pub use importfix_core::rewrite::{apply_rewrites, ImportRewrite, UI_IMPORT_REWRITES};
