//! Explicit mode: apply one change descriptor given on the command line.

use super::RunContext;
use super::report::print_summary;
use crate::discover::discover_documents;
use crate::error::Result;
use crate::rewrite::{ChangeDescriptor, rewrite_documents};
use std::path::PathBuf;

/// Apply `change` to `documents`, or to the discovered documents when none
/// were given.
pub(super) fn cmd_shift(
    ctx: &RunContext,
    change: ChangeDescriptor,
    documents: Vec<PathBuf>,
) -> Result<()> {
    let documents = if documents.is_empty() {
        discover_documents(&ctx.cwd, &ctx.config.extensions)?
    } else {
        documents
    };

    let summary = rewrite_documents(&documents, &change, &ctx.options)?;
    print_summary(&ctx.cwd, &change, &summary, ctx.options.dry_run);

    Ok(())
}
