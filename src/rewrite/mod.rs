//! Line-range reference rewriting.
//!
//! Given a [`ChangeDescriptor`] describing how a block of a source file grew
//! or shrank, every `firstline=`/`lastline=` option of a matching listing
//! directive that lies after the block is shifted by the size delta.
//! References inside the block are left alone and reported.
//!
//! The rewriting itself is pure ([`rewrite_line`], [`rewrite_text`]);
//! [`rewrite_documents`] is the thin I/O layer on top.
//!
//! Rewriting is not idempotent: applying the same descriptor twice shifts
//! the affected references twice.

mod apply;
mod change;
mod patterns;

#[cfg(test)]
mod tests;

pub use apply::{DocumentReport, RewriteOptions, RewriteSummary, rewrite_documents};
pub use change::ChangeDescriptor;
pub use patterns::{
    LineField, ReferenceEvent, ReferencePatterns, RewrittenLine, RewrittenText, rewrite_line,
    rewrite_text,
};
