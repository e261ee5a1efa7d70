//! Atomic document writes.
//!
//! All writes follow this pattern:
//! 1. Create a fresh temporary file next to the target (never reusing one)
//! 2. Write the content and sync it to disk (fsync)
//! 3. Copy the original file's permissions onto the temporary file
//! 4. Rename the temporary file over the target
//!
//! `rename()` is atomic when source and destination share a filesystem, which
//! holds because the temporary file lives next to the target. Temporary names
//! are `.{filename}.lstshift.tmp.{pid}.{attempt}`; on a crash one may remain,
//! but the target is never partial.

use crate::error::{LstError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

/// Atomically replace `path` with `content`.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let (temp_path, file) = create_temp_file(path)?;

    write_and_sync(file, &temp_path, content.as_bytes())?;

    if let Ok(metadata) = fs::metadata(path)
        && let Err(e) = fs::set_permissions(&temp_path, metadata.permissions())
    {
        tracing::debug!(
            path = %path.display(),
            error = %e,
            "could not carry permissions over to the rewritten document"
        );
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LstError::io("replace", path, e)
    })
}

/// Create a temporary file beside `target`, skipping names already taken.
fn create_temp_file(target: &Path) -> Result<(PathBuf, File)> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            LstError::IoError(format!("invalid document path '{}'", target.display()))
        })?;

    let pid = process::id();
    let mut attempt: u64 = 0;
    loop {
        let candidate = parent.join(format!(".{}.lstshift.tmp.{}.{}", filename, pid, attempt));
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(file) => return Ok((candidate, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(LstError::io("create", &candidate, e)),
        }
    }
}

fn write_and_sync(mut file: File, path: &Path, content: &[u8]) -> Result<()> {
    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            LstError::io("write", path, e)
        })
}
