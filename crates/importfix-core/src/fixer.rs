//! The import-path fixer.
//!
//! One pass over a single directory: every direct entry whose name ends with
//! the suffix is read in full, run through the rewrite rules, and written
//! back only if the text changed. Subdirectories are never entered and
//! non-matching files are never opened.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, info_span};
use walkdir::WalkDir;

use crate::error::FixError;
use crate::fs::atomic_write;
use crate::rewrite::{apply_rewrites, AppliedRewrite, ImportRewrite, UI_IMPORT_REWRITES};

/// File name suffix of the UI component files.
pub const UI_COMPONENT_SUFFIX: &str = ".tsx";

/// A file that was rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixedFile {
    /// Directory joined with the file name.
    pub path: PathBuf,
    /// Rules that fired, in rule order.
    pub replacements: Vec<AppliedRewrite>,
}

/// Result of one pass over a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixReport {
    /// Directory that was scanned.
    pub directory: PathBuf,
    /// Number of matching files that were read.
    pub scanned: usize,
    /// Files that were rewritten, in file-name order.
    pub fixed: Vec<FixedFile>,
}

impl fmt::Display for FixedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed imports in {}", self.path.display())
    }
}

impl FixReport {
    /// The `Fixed imports in {path}` lines, one per rewritten file.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.fixed.iter().map(ToString::to_string)
    }
}

/// Fix the UI component imports in `directory`.
///
/// Uses the `.tsx` suffix and [`UI_IMPORT_REWRITES`].
pub fn fix_import_paths(directory: &Path) -> Result<FixReport, FixError> {
    fix_import_paths_with(directory, UI_COMPONENT_SUFFIX, &UI_IMPORT_REWRITES, |_| {})
}

/// Run one pass over `directory` with an explicit suffix and rule set.
///
/// `on_fixed` is called right after each file is written, so callers can
/// report progress before the pass finishes. The first error aborts the
/// pass; files already rewritten stay rewritten.
pub fn fix_import_paths_with<F>(
    directory: &Path,
    suffix: &str,
    rules: &[ImportRewrite],
    mut on_fixed: F,
) -> Result<FixReport, FixError>
where
    F: FnMut(&FixedFile),
{
    let _span = info_span!("fix_import_paths", directory = %directory.display()).entered();

    let meta = fs::metadata(directory).map_err(|e| FixError::from_listing(directory, e))?;
    if !meta.is_dir() {
        return Err(FixError::Io {
            path: directory.to_path_buf(),
            source: io::Error::other("not a directory"),
        });
    }

    let mut report = FixReport {
        directory: directory.to_path_buf(),
        scanned: 0,
        fixed: Vec::new(),
    };

    let walker = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| walk_error(directory, e))?;
        // Non-UTF-8 names never match.
        let matches_suffix = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(suffix));
        if !matches_suffix {
            continue;
        }
        if !entry.file_type().is_file() {
            debug!(path = %entry.path().display(), "skipping non-file entry");
            continue;
        }

        report.scanned += 1;
        if let Some(fixed) = fix_file(entry.path(), rules)? {
            on_fixed(&fixed);
            report.fixed.push(fixed);
        }
    }

    debug!(
        scanned = report.scanned,
        fixed = report.fixed.len(),
        "pass complete"
    );
    Ok(report)
}

/// Rewrite a single file in place.
///
/// Returns `None` without writing when the rewritten text is unchanged.
pub fn fix_file(path: &Path, rules: &[ImportRewrite]) -> Result<Option<FixedFile>, FixError> {
    let content = fs::read_to_string(path).map_err(|e| FixError::from_io(path, e))?;

    let outcome = apply_rewrites(&content, rules);
    if outcome.content == content {
        debug!(path = %path.display(), "no alias imports");
        return Ok(None);
    }

    atomic_write(path, outcome.content.as_bytes())?;
    info!(
        path = %path.display(),
        rules = outcome.applied.len(),
        "fixed imports"
    );

    Ok(Some(FixedFile {
        path: path.to_path_buf(),
        replacements: outcome.applied,
    }))
}

fn walk_error(directory: &Path, err: walkdir::Error) -> FixError {
    let path = err.path().unwrap_or(directory).to_path_buf();
    match err.into_io_error() {
        Some(io_err) if path == directory => FixError::from_listing(directory, io_err),
        Some(io_err) => FixError::from_io(&path, io_err),
        None => FixError::internal(format!("symlink loop at {}", path.display())),
    }
}

// ============================================================================
// Tests
// ============================================================================
