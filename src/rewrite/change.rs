//! Change descriptor: how a block of a referenced file changed length.

use std::fmt;

/// A block of `file` that started at `block_start` and ended at
/// `block_old_end` now ends at `block_new_end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeDescriptor {
    /// Filename exactly as written in the directive's `{...}` argument.
    pub file: String,
    pub block_start: usize,
    pub block_old_end: usize,
    pub block_new_end: usize,
}

/// Where a referenced line sits relative to the changed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// At or before the block start (or exactly on the old end).
    Unaffected,
    /// Strictly between the block start and the old end.
    Inside,
    /// After the old end; moves by the delta.
    After,
}

impl ChangeDescriptor {
    pub fn new(
        file: impl Into<String>,
        block_start: usize,
        block_old_end: usize,
        block_new_end: usize,
    ) -> Self {
        Self {
            file: file.into(),
            block_start,
            block_old_end,
            block_new_end,
        }
    }

    /// Signed change in block length.
    pub fn delta(&self) -> i128 {
        self.block_new_end as i128 - self.block_old_end as i128
    }

    /// True when the block kept its length, so no reference can move.
    pub fn is_noop(&self) -> bool {
        self.block_old_end == self.block_new_end
    }

    pub(crate) fn place(&self, line: usize) -> Placement {
        if self.block_start < line && line < self.block_old_end {
            Placement::Inside
        } else if line > self.block_old_end {
            Placement::After
        } else {
            Placement::Unaffected
        }
    }

    /// New value for a reference after the block, or None when it would
    /// not fit in a `usize`.
    pub(crate) fn shifted(&self, line: usize) -> Option<usize> {
        line.checked_sub(self.block_old_end)?.checked_add(self.block_new_end)
    }
}

impl fmt::Display for ChangeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines {}-{} -> {}-{} ({:+})",
            self.file,
            self.block_start,
            self.block_old_end,
            self.block_start,
            self.block_new_end,
            self.delta()
        )
    }
}
