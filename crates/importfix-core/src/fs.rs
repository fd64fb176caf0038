//! Atomic file writes.
//!
//! Rewritten files are staged in a temp file next to the target and renamed
//! over it, so a crash leaves either the old or the new content, never a
//! partial write. Read-only targets are refused the same way an in-place
//! write would be.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::FixError;

/// Replace the contents of `path` with `content` atomically.
///
/// Symlinks are resolved first, so the link's target is rewritten and the
/// link itself stays in place. The temp file lives in the target's directory
/// so the final rename never crosses filesystems. An existing target must be
/// writable; its permissions are carried over to the new file.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<(), FixError> {
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(err) if err.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(err) => return Err(FixError::from_io(path, err)),
    };

    let dir = match target.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => {
            return Err(FixError::internal(format!(
                "cannot write to {}: no parent directory",
                path.display()
            )))
        }
    };

    let permissions = match fs::metadata(&target) {
        Ok(meta) => {
            ensure_writable(path, &target, &meta)?;
            Some(meta.permissions())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => return Err(FixError::from_io(path, err)),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| FixError::from_io(dir, e))?;
    temp.write_all(content)
        .map_err(|e| FixError::from_io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| FixError::from_io(temp.path(), e))?;

    if let Some(permissions) = permissions {
        fs::set_permissions(temp.path(), permissions)
            .map_err(|e| FixError::from_io(temp.path(), e))?;
    }

    temp.persist(&target)
        .map_err(|e| FixError::from_io(path, e.error))?;
    Ok(())
}

/// Refuse targets an in-place write would be refused on.
///
/// The rename only needs a writable directory, so the file's own
/// permissions are checked here. Read-only mode bits are honored even for
/// users who could open the file anyway.
fn ensure_writable(path: &Path, target: &Path, meta: &fs::Metadata) -> Result<(), FixError> {
    if meta.permissions().readonly() {
        return Err(FixError::PermissionDenied {
            path: path.to_path_buf(),
        });
    }
    OpenOptions::new()
        .write(true)
        .open(target)
        .map_err(|e| FixError::from_io(path, e))?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
