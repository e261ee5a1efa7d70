//! Applying a change descriptor to documents on disk.

use super::change::ChangeDescriptor;
use super::patterns::{ReferenceEvent, ReferencePatterns, rewrite_text};
use crate::error::{LstError, Result};
use crate::fs::atomic_write_file;
use std::path::{Path, PathBuf};

/// Knobs for [`rewrite_documents`].
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    /// Directive name without the backslash, e.g. `lstinputlisting`.
    pub directive: String,
    /// Compute and report changes without writing documents.
    pub dry_run: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            directive: crate::config::types::default_directive(),
            dry_run: false,
        }
    }
}

/// What happened in one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    pub path: PathBuf,
    /// `(line number, event)` pairs in document order.
    pub events: Vec<(usize, ReferenceEvent)>,
    /// True when the document's text changed (and was written unless dry-run).
    pub changed: bool,
}

/// Outcome of applying one change descriptor to a document set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Reports for documents that had at least one matching reference.
    pub documents: Vec<DocumentReport>,
}

impl RewriteSummary {
    pub fn shifted_count(&self) -> usize {
        self.events()
            .filter(|(_, _, e)| matches!(e, ReferenceEvent::Shifted { .. }))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.events()
            .filter(|(_, _, e)| matches!(e, ReferenceEvent::InsideBlock { .. }))
            .count()
    }

    pub fn changed_documents(&self) -> usize {
        self.documents.iter().filter(|d| d.changed).count()
    }

    /// All events as `(document, line number, event)`.
    pub fn events(&self) -> impl Iterator<Item = (&Path, usize, &ReferenceEvent)> {
        self.documents.iter().flat_map(|doc| {
            doc.events
                .iter()
                .map(move |(line, event)| (doc.path.as_path(), *line, event))
        })
    }
}

/// Apply `change` to every document in `documents`.
///
/// Each document is read in full, rewritten in memory and written back
/// atomically when its text changed. The first unreadable or unwritable
/// document aborts the run.
pub fn rewrite_documents(
    documents: &[PathBuf],
    change: &ChangeDescriptor,
    options: &RewriteOptions,
) -> Result<RewriteSummary> {
    let patterns = ReferencePatterns::compile(&options.directive, &change.file)?;
    let mut summary = RewriteSummary::default();

    tracing::debug!(%change, documents = documents.len(), "applying change");
    if change.is_noop() {
        tracing::debug!("block length unchanged, only checking references inside it");
    }

    for path in documents {
        let original = std::fs::read_to_string(path).map_err(|e| LstError::io("read", path, e))?;
        let rewritten = rewrite_text(&original, change, &patterns);
        let changed = rewritten.text != original;

        if changed && !options.dry_run {
            atomic_write_file(path, &rewritten.text)?;
            tracing::debug!(
                path = %path.display(),
                shifted = rewritten.shifted_count(),
                "document rewritten"
            );
        }

        if !rewritten.events.is_empty() {
            summary.documents.push(DocumentReport {
                path: path.clone(),
                events: rewritten.events,
                changed,
            });
        }
    }

    Ok(summary)
}
