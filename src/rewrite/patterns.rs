//! Compiled directive patterns and the pure line rewriter.

use super::change::{ChangeDescriptor, Placement};
use crate::error::{LstError, Result};
use regex::{Captures, Regex};
use std::fmt;

/// Which line option of a directive a reference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineField {
    First,
    Last,
}

impl LineField {
    pub fn key(self) -> &'static str {
        match self {
            LineField::First => "firstline",
            LineField::Last => "lastline",
        }
    }
}

impl fmt::Display for LineField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Something that happened to one reference while rewriting a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceEvent {
    /// The reference lay after the changed block and was moved.
    Shifted {
        field: LineField,
        from: usize,
        to: usize,
    },
    /// The reference lies inside the changed block and was left untouched.
    InsideBlock { field: LineField, value: usize },
}

/// Result of rewriting a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenLine {
    pub text: String,
    pub events: Vec<ReferenceEvent>,
}

/// Result of rewriting a whole document. Events carry 1-based line numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenText {
    pub text: String,
    pub events: Vec<(usize, ReferenceEvent)>,
}

impl RewrittenText {
    pub fn shifted_count(&self) -> usize {
        self.events
            .iter()
            .filter(|(_, e)| matches!(e, ReferenceEvent::Shifted { .. }))
            .count()
    }
}

/// `firstline=`/`lastline=` patterns for one directive and one filename.
///
/// Options are matched within a single `[...]` group, so several directives
/// on one line are handled independently.
#[derive(Debug, Clone)]
pub struct ReferencePatterns {
    first: Regex,
    last: Regex,
}

impl ReferencePatterns {
    /// Compile patterns for `\<directive>[...]{<file>}`; `file` is literal.
    pub fn compile(directive: &str, file: &str) -> Result<Self> {
        Ok(Self {
            first: Self::build(directive, LineField::First, file)?,
            last: Self::build(directive, LineField::Last, file)?,
        })
    }

    fn build(directive: &str, field: LineField, file: &str) -> Result<Regex> {
        let pattern = format!(
            r"\\{}\[([^\]]*){}=([0-9]+)([^\]]*)\]\{{{}\}}",
            regex::escape(directive),
            field.key(),
            regex::escape(file)
        );
        Regex::new(&pattern).map_err(|e| {
            LstError::UserError(format!(
                "failed to build {} pattern for '{}': {}",
                field, file, e
            ))
        })
    }

    fn for_field(&self, field: LineField) -> &Regex {
        match field {
            LineField::First => &self.first,
            LineField::Last => &self.last,
        }
    }
}

/// Rewrite every matching reference on one line.
///
/// `firstline` references are substituted first, then `lastline` references
/// on the result. All text outside the numeric value is kept verbatim.
pub fn rewrite_line(
    line: &str,
    change: &ChangeDescriptor,
    patterns: &ReferencePatterns,
) -> RewrittenLine {
    let mut events = Vec::new();
    let mut text = line.to_string();

    for field in [LineField::First, LineField::Last] {
        let regex = patterns.for_field(field);
        if !regex.is_match(&text) {
            continue;
        }
        text = regex
            .replace_all(&text, |caps: &Captures| {
                substitute(caps, field, change, &mut events)
            })
            .into_owned();
    }

    RewrittenLine { text, events }
}

fn substitute(
    caps: &Captures,
    field: LineField,
    change: &ChangeDescriptor,
    events: &mut Vec<ReferenceEvent>,
) -> String {
    let whole = &caps[0];
    let (Some(full), Some(number)) = (caps.get(0), caps.get(2)) else {
        return whole.to_string();
    };
    let Ok(value) = number.as_str().parse::<usize>() else {
        tracing::debug!(reference = whole, "line number out of range, left unchanged");
        return whole.to_string();
    };

    match change.place(value) {
        Placement::Unaffected => whole.to_string(),
        Placement::Inside => {
            events.push(ReferenceEvent::InsideBlock { field, value });
            whole.to_string()
        }
        Placement::After => {
            let Some(to) = change.shifted(value) else {
                tracing::debug!(
                    reference = whole,
                    "shifted line number overflows, left unchanged"
                );
                return whole.to_string();
            };
            if to != value {
                events.push(ReferenceEvent::Shifted {
                    field,
                    from: value,
                    to,
                });
            }
            let start = number.start() - full.start();
            let end = number.end() - full.start();
            format!("{}{}{}", &whole[..start], to, &whole[end..])
        }
    }
}

/// Rewrite a whole document, preserving line terminators.
pub fn rewrite_text(
    text: &str,
    change: &ChangeDescriptor,
    patterns: &ReferencePatterns,
) -> RewrittenText {
    let mut out = String::with_capacity(text.len());
    let mut events = Vec::new();

    for (index, line) in text.split_inclusive('\n').enumerate() {
        let rewritten = rewrite_line(line, change, patterns);
        out.push_str(&rewritten.text);
        events.extend(rewritten.events.into_iter().map(|e| (index + 1, e)));
    }

    RewrittenText { text: out, events }
}
