//! Diff-derived mode: apply every hunk of the nested repository diff.

use super::RunContext;
use super::report::print_summary;
use crate::diff::GitDiffSource;
use crate::discover::discover_documents;
use crate::error::Result;
use crate::sync::derive_and_apply;

pub(super) fn cmd_sync(ctx: &RunContext) -> Result<()> {
    let documents = discover_documents(&ctx.cwd, &ctx.config.extensions)?;
    let source = GitDiffSource::new(
        &ctx.cwd,
        ctx.config.submodule.clone(),
        ctx.config.diff_context,
    );

    let applied = derive_and_apply(
        &source,
        &documents,
        &ctx.config.reference_prefix(),
        &ctx.options,
        |change, summary| print_summary(&ctx.cwd, change, summary, ctx.options.dry_run),
    )?;

    if applied == 0 {
        println!("No changed blocks in {}.", ctx.config.submodule);
    }

    Ok(())
}
