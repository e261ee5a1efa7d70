//! Console output for applied change descriptors.

use crate::rewrite::{ChangeDescriptor, ReferenceEvent, RewriteSummary};
use std::path::Path;

/// Print shifted references, inside-block warnings and a one-line summary.
pub(super) fn print_summary(
    cwd: &Path,
    change: &ChangeDescriptor,
    summary: &RewriteSummary,
    dry_run: bool,
) {
    for (path, line, event) in summary.events() {
        let path = path.strip_prefix(cwd).unwrap_or(path).display();
        match event {
            ReferenceEvent::Shifted { field, from, to } => {
                println!("  {}:{}: {} {} -> {}", path, line, field, from, to);
            }
            ReferenceEvent::InsideBlock { field, value } => {
                println!(
                    "Warning: {}:{}: {}={} lies inside the modified block {}-{} of {}; check it manually",
                    path, line, field, value, change.block_start, change.block_old_end, change.file
                );
            }
        }
    }

    println!(
        "{}: {} {} reference(s) in {} document(s){}",
        change,
        if dry_run { "would shift" } else { "shifted" },
        summary.shifted_count(),
        summary.changed_documents(),
        if summary.warning_count() > 0 {
            format!(", {} warning(s)", summary.warning_count())
        } else {
            String::new()
        }
    );
}
