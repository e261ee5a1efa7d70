//! Public API for diff access.

use crate::error::{LstError, Result};
use crate::git::run_git;
use std::path::PathBuf;

use super::parser::{parse_hunks, parse_subproject_pointers};

/// One hunk of a unified diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// Path of the file inside the diffed repository (forward slashes).
    pub file_path: String,
    pub old_start: usize,
    pub old_len: usize,
    pub new_start: usize,
    pub new_len: usize,
}

/// The revision a nested repository pointer moved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewRevision {
    /// A concrete commit.
    Commit(String),
    /// The nested repository has uncommitted changes; diff up through its
    /// working tree.
    WorkingTree,
}

/// Old and new revision of a nested repository pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubprojectPointers {
    pub old: String,
    pub new: NewRevision,
}

impl SubprojectPointers {
    /// End revision for `git diff`, or None for the working tree.
    pub fn new_ref(&self) -> Option<&str> {
        match &self.new {
            NewRevision::Commit(sha) => Some(sha),
            NewRevision::WorkingTree => None,
        }
    }
}

/// Source of the diffs the derived mode works from.
pub trait DiffSource {
    /// Old and new revision recorded for the nested repository.
    fn subproject_pointers(&self) -> Result<SubprojectPointers>;

    /// Hunks between `old_ref` and `new_ref` (working tree when None), in
    /// diff order.
    fn hunks_for(&self, old_ref: &str, new_ref: Option<&str>) -> Result<Vec<Hunk>>;
}

/// [`DiffSource`] backed by the `git` command line.
#[derive(Debug, Clone)]
pub struct GitDiffSource {
    /// Root of the outer repository (where the pointer is recorded).
    pub outer_root: PathBuf,
    /// Nested repository path relative to `outer_root`.
    pub submodule: String,
    /// Lines of context for the nested diff.
    pub context: u32,
}

impl GitDiffSource {
    pub fn new(outer_root: impl Into<PathBuf>, submodule: impl Into<String>, context: u32) -> Self {
        Self {
            outer_root: outer_root.into(),
            submodule: submodule.into(),
            context,
        }
    }
}

impl DiffSource for GitDiffSource {
    /// Runs `git diff --submodule=short -- <submodule>` in the outer repository.
    fn subproject_pointers(&self) -> Result<SubprojectPointers> {
        let output = run_git(
            &self.outer_root,
            &[
                "diff",
                "--no-color",
                "--submodule=short",
                "--",
                self.submodule.as_str(),
            ],
        )?;
        if output.is_empty() {
            return Err(LstError::ResolutionError(format!(
                "pointer for '{}' is unchanged (commit or stage a new nested repository commit first)",
                self.submodule
            )));
        }
        parse_subproject_pointers(&output.stdout)
    }

    /// Runs `git diff -U<context> <old> [<new>]` inside the nested repository.
    fn hunks_for(&self, old_ref: &str, new_ref: Option<&str>) -> Result<Vec<Hunk>> {
        let context = format!("-U{}", self.context);
        let mut args: Vec<&str> = vec![
            "diff",
            "--no-color",
            "--no-ext-diff",
            context.as_str(),
            old_ref,
        ];
        if let Some(new_ref) = new_ref {
            args.push(new_ref);
        }

        let output = run_git(self.outer_root.join(&self.submodule), &args)?;
        Ok(parse_hunks(&output.stdout))
    }
}
