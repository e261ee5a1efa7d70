//! Core diff parsing logic.

use crate::error::{LstError, Result};

use super::api::{Hunk, NewRevision, SubprojectPointers};
use super::helpers::{normalize_path, parse_diff_git_line, parse_hunk_header};

const SUBPROJECT_PREFIX: &str = "Subproject commit ";
const DIRTY_SUFFIX: &str = "-dirty";

/// Extract old and new commit from a nested repository pointer diff.
///
/// Expects the `--submodule=short` format:
///
/// ```text
/// -Subproject commit 1111111111111111111111111111111111111111
/// +Subproject commit 2222222222222222222222222222222222222222-dirty
/// ```
///
/// # Returns
///
/// * `Ok(SubprojectPointers)` - Both sides found
/// * `Err(LstError::ResolutionError)` - Old or new pointer missing
pub fn parse_subproject_pointers(diff_output: &str) -> Result<SubprojectPointers> {
    let mut old = None;
    let mut new = None;

    for line in diff_output.lines() {
        if let Some(sha) = line
            .strip_prefix('-')
            .and_then(|rest| rest.strip_prefix(SUBPROJECT_PREFIX))
        {
            old = Some(sha.trim().to_string());
        } else if let Some(sha) = line
            .strip_prefix('+')
            .and_then(|rest| rest.strip_prefix(SUBPROJECT_PREFIX))
        {
            new = Some(sha.trim().to_string());
        }
    }

    let old = old.filter(|s| !s.is_empty()).ok_or_else(|| {
        LstError::ResolutionError(
            "old subproject commit not found in diff (is the nested repository pointer modified?)"
                .to_string(),
        )
    })?;
    let new = new.filter(|s| !s.is_empty()).ok_or_else(|| {
        LstError::ResolutionError(
            "new subproject commit not found in diff (is the nested repository pointer modified?)"
                .to_string(),
        )
    })?;

    let new = if new.ends_with(DIRTY_SUFFIX) {
        NewRevision::WorkingTree
    } else {
        NewRevision::Commit(new)
    };

    Ok(SubprojectPointers { old, new })
}

/// Parse hunk headers from unified diff output.
///
/// File headers (`+++ b/<path>`) set the current file, `+++ /dev/null`
/// clears it so hunks of deleted files are dropped. Hunk bodies are skipped
/// by line count, so content lines that happen to look like headers are not
/// misread.
pub fn parse_hunks(diff_output: &str) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    let mut current_file: Option<String> = None;
    let mut old_remaining: usize = 0;
    let mut new_remaining: usize = 0;

    for line in diff_output.lines() {
        if old_remaining > 0 || new_remaining > 0 {
            match line.chars().next() {
                Some('+') => new_remaining = new_remaining.saturating_sub(1),
                Some('-') => old_remaining = old_remaining.saturating_sub(1),
                Some('\\') => {}
                _ => {
                    old_remaining = old_remaining.saturating_sub(1);
                    new_remaining = new_remaining.saturating_sub(1);
                }
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("diff --git ") {
            current_file = parse_diff_git_line(rest);
            continue;
        }

        if line.starts_with("--- ") {
            continue;
        }

        if let Some(rest) = line.strip_prefix("+++ ") {
            current_file = if rest == "/dev/null" {
                None
            } else {
                Some(normalize_path(rest.strip_prefix("b/").unwrap_or(rest)))
            };
            continue;
        }

        if line.starts_with("@@ ")
            && let Some((old_start, old_len, new_start, new_len)) = parse_hunk_header(line)
        {
            old_remaining = old_len;
            new_remaining = new_len;
            if let Some(file_path) = &current_file {
                hunks.push(Hunk {
                    file_path: file_path.clone(),
                    old_start,
                    old_len,
                    new_start,
                    new_len,
                });
            }
        }
    }

    hunks
}
