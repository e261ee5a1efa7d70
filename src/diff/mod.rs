//! Diff parsing primitives for lstshift.
//!
//! Two kinds of git output are parsed:
//! - the outer repository's diff of a nested repository pointer
//!   (`-Subproject commit <old>` / `+Subproject commit <new>[-dirty]`)
//! - a unified diff inside the nested repository, reduced to its hunk headers
//!
//! Git access sits behind the [`DiffSource`] trait so the derivation logic can
//! run against fixture data.

mod api;
mod helpers;
mod parser;


pub use api::{DiffSource, GitDiffSource, Hunk, NewRevision, SubprojectPointers};
pub use parser::{parse_hunks, parse_subproject_pointers};
