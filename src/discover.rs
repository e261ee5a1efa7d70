//! Document discovery.
//!
//! Documents are the files with a recognized extension in a root directory
//! and its direct subdirectories. Deeper levels are not searched and hidden
//! entries are skipped.

use crate::error::{LstError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Compile `*.ext` file-name globs for the given extensions.
fn build_globset(extensions: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for ext in extensions {
        let glob = Glob::new(&format!("*.{}", ext)).map_err(|e| {
            LstError::UserError(format!("invalid document extension '{}': {}", ext, e))
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| LstError::UserError(format!("failed to build extension globs: {}", e)))
}

/// Find documents under `root`, sorted by path.
pub fn discover_documents(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let globs = build_globset(extensions)?;
    let mut documents = Vec::new();

    for entry in read_visible(root)? {
        if entry.is_dir() {
            for nested in read_visible(&entry)? {
                if is_document(&nested, &globs) {
                    documents.push(nested);
                }
            }
        } else if is_document(&entry, &globs) {
            documents.push(entry);
        }
    }

    documents.sort();
    tracing::debug!(root = %root.display(), count = documents.len(), "discovered documents");
    Ok(documents)
}

fn is_document(path: &Path, globs: &GlobSet) -> bool {
    path.is_file() && path.file_name().is_some_and(|name| globs.is_match(name))
}

fn read_visible(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| LstError::io("read directory", dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LstError::io("read directory", dir, e))?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        paths.push(entry.path());
    }
    Ok(paths)
}
