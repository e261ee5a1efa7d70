//! Helper functions for diff parsing.

/// Parse the file path from a "diff --git" line.
///
/// Returns the "b/" path (new file path), or None if parsing fails. Paths can
/// contain spaces, so the last " b/" separates the two sides.
pub(super) fn parse_diff_git_line(rest: &str) -> Option<String> {
    if let Some(b_pos) = rest.rfind(" b/") {
        return Some(normalize_path(&rest[b_pos + 3..]));
    }

    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.len() >= 2 {
        let b_part = parts[parts.len() - 1];
        if let Some(path) = b_part.strip_prefix("b/") {
            return Some(normalize_path(path));
        }
    }

    None
}

/// Parse a hunk header line.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@" with optional
/// trailing context. An omitted length means 1.
///
/// Returns (old_start, old_len, new_start, new_len) or None if parsing fails.
pub(super) fn parse_hunk_header(line: &str) -> Option<(usize, usize, usize, usize)> {
    let line = line.strip_prefix("@@ ")?;

    let end_marker = line.find(" @@")?;
    let range_part = &line[..end_marker];

    let parts: Vec<&str> = range_part.split_whitespace().collect();
    if parts.len() != 2 {
        return None;
    }

    let (old_start, old_len) = parse_range(parts[0].strip_prefix('-')?)?;
    let (new_start, new_len) = parse_range(parts[1].strip_prefix('+')?)?;

    Some((old_start, old_len, new_start, new_len))
}

/// Parse "start" or "start,len" into (start, len).
fn parse_range(range: &str) -> Option<(usize, usize)> {
    match range.split_once(',') {
        Some((start, len)) => Some((start.parse().ok()?, len.parse().ok()?)),
        None => Some((range.parse().ok()?, 1)),
    }
}

/// Normalize a file path to use forward slashes.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
