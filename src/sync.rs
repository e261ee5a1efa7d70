//! Deriving change descriptors from a nested repository diff.
//!
//! The outer repository pins the nested repository at a commit. When that
//! pointer moves, every hunk between the old and new commit becomes a
//! [`ChangeDescriptor`] that is applied to the documents in hunk order.

use crate::diff::{DiffSource, Hunk};
use crate::error::Result;
use crate::rewrite::{ChangeDescriptor, RewriteOptions, RewriteSummary, rewrite_documents};
use std::path::PathBuf;

/// Build the change descriptor for one hunk.
///
/// Positions use the new file's coordinates: earlier hunks have already been
/// applied to the documents by the time this one is, so the block starts at
/// `new_start` and its old and new ends are measured from there.
pub fn change_for_hunk(hunk: &Hunk, reference_prefix: &str) -> ChangeDescriptor {
    ChangeDescriptor::new(
        format!("{}{}", reference_prefix, hunk.file_path),
        hunk.new_start,
        hunk.new_start.saturating_add(hunk.old_len),
        hunk.new_start.saturating_add(hunk.new_len),
    )
}

/// Resolve the pointer diff and turn every hunk into a change descriptor.
pub fn derive_changes(
    source: &dyn DiffSource,
    reference_prefix: &str,
) -> Result<Vec<ChangeDescriptor>> {
    let pointers = source.subproject_pointers()?;
    tracing::info!(
        old = %pointers.old,
        new = pointers.new_ref().unwrap_or("working tree"),
        "resolved subproject pointers"
    );

    let hunks = source.hunks_for(&pointers.old, pointers.new_ref())?;
    Ok(hunks
        .iter()
        .map(|hunk| change_for_hunk(hunk, reference_prefix))
        .collect())
}

/// Derive change descriptors and apply each one to `documents`.
///
/// Every descriptor is a full pass over all documents. `on_applied` sees each
/// descriptor and its summary as soon as it has been applied. Returns the
/// number of descriptors applied.
pub fn derive_and_apply(
    source: &dyn DiffSource,
    documents: &[PathBuf],
    reference_prefix: &str,
    options: &RewriteOptions,
    mut on_applied: impl FnMut(&ChangeDescriptor, &RewriteSummary),
) -> Result<usize> {
    let changes = derive_changes(source, reference_prefix)?;

    for change in &changes {
        let summary = rewrite_documents(documents, change, options)?;
        on_applied(change, &summary);
    }

    Ok(changes.len())
}
