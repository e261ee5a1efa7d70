//! Tests for reference rewriting.

use super::*;
use std::fs;
use tempfile::TempDir;

const SCALA_REF: &str = r"\lstinputlisting[language=Scala,firstline=10,lastline=50]{foo.scala}";

fn patterns_for(file: &str) -> ReferencePatterns {
    ReferencePatterns::compile("lstinputlisting", file).unwrap()
}

fn rewrite(line: &str, change: &ChangeDescriptor) -> RewrittenLine {
    rewrite_line(line, change, &patterns_for(&change.file))
}

#[test]
fn test_shifts_reference_after_block() {
    let change = ChangeDescriptor::new("foo.scala", 20, 30, 35);
    let result = rewrite(SCALA_REF, &change);

    assert_eq!(
        result.text,
        r"\lstinputlisting[language=Scala,firstline=10,lastline=55]{foo.scala}"
    );
    assert_eq!(
        result.events,
        vec![ReferenceEvent::Shifted {
            field: LineField::Last,
            from: 50,
            to: 55
        }]
    );
}

#[test]
fn test_zero_delta_leaves_line_identical() {
    let change = ChangeDescriptor::new("foo.scala", 5, 8, 8);
    assert!(change.is_noop());

    let result = rewrite(SCALA_REF, &change);
    assert_eq!(result.text, SCALA_REF);
    assert!(result.events.is_empty());
}

#[test]
fn test_reference_inside_block_is_reported_not_changed() {
    let line = r"\lstinputlisting[firstline=25,lastline=40]{foo.scala}";
    let change = ChangeDescriptor::new("foo.scala", 20, 30, 35);
    let result = rewrite(line, &change);

    assert_eq!(result.text, r"\lstinputlisting[firstline=25,lastline=45]{foo.scala}");
    assert_eq!(
        result.events,
        vec![
            ReferenceEvent::InsideBlock {
                field: LineField::First,
                value: 25
            },
            ReferenceEvent::Shifted {
                field: LineField::Last,
                from: 40,
                to: 45
            },
        ]
    );
}

#[test]
fn test_references_at_or_before_start_are_untouched() {
    let line = r"\lstinputlisting[firstline=1,lastline=20]{foo.scala}";
    let change = ChangeDescriptor::new("foo.scala", 20, 30, 40);
    let result = rewrite(line, &change);

    assert_eq!(result.text, line);
    assert!(result.events.is_empty());
}

#[test]
fn test_reference_on_old_end_is_untouched() {
    let line = r"\lstinputlisting[lastline=30]{foo.scala}";
    let change = ChangeDescriptor::new("foo.scala", 20, 30, 40);
    let result = rewrite(line, &change);

    assert_eq!(result.text, line);
    assert!(result.events.is_empty());
}

#[test]
fn test_shrinking_block_moves_references_up() {
    let line = r"\lstinputlisting[firstline=40,lastline=60]{foo.scala}";
    let change = ChangeDescriptor::new("foo.scala", 10, 20, 12);
    assert_eq!(change.delta(), -8);

    let result = rewrite(line, &change);
    assert_eq!(result.text, r"\lstinputlisting[firstline=32,lastline=52]{foo.scala}");
}

#[test]
fn test_other_files_are_never_touched() {
    let line = r"\lstinputlisting[firstline=100,lastline=200]{bar.scala}";
    let change = ChangeDescriptor::new("foo.scala", 1, 2, 50);
    let result = rewrite(line, &change);

    assert_eq!(result.text, line);
    assert!(result.events.is_empty());
}

#[test]
fn test_filename_is_matched_literally() {
    // '.' must not act as a regex wildcard.
    let line = r"\lstinputlisting[firstline=100]{fooXscala}";
    let change = ChangeDescriptor::new("foo.scala", 1, 2, 50);
    assert_eq!(rewrite(line, &change).text, line);

    let line = r"\lstinputlisting[firstline=100]{code/foo.scala}";
    assert_eq!(rewrite(line, &change).text, line);
}

#[test]
fn test_surrounding_text_is_preserved() {
    let line = "  Listing: \\lstinputlisting[caption={A, B},lastline=12, numbers=left]{foo.scala} % keep\n";
    let change = ChangeDescriptor::new("foo.scala", 2, 4, 7);
    let result = rewrite(line, &change);

    assert_eq!(
        result.text,
        "  Listing: \\lstinputlisting[caption={A, B},lastline=15, numbers=left]{foo.scala} % keep\n"
    );
}

#[test]
fn test_multiple_directives_on_one_line() {
    let line = r"\lstinputlisting[firstline=40]{foo.scala} and \lstinputlisting[firstline=3]{foo.scala} and \lstinputlisting[firstline=50]{bar.scala}";
    let change = ChangeDescriptor::new("foo.scala", 10, 20, 21);
    let result = rewrite(line, &change);

    assert_eq!(
        result.text,
        r"\lstinputlisting[firstline=41]{foo.scala} and \lstinputlisting[firstline=3]{foo.scala} and \lstinputlisting[firstline=50]{bar.scala}"
    );
    assert_eq!(result.events.len(), 1);
}

#[test]
fn test_other_directives_are_ignored() {
    let line = r"\inputminted[firstline=40]{foo.scala}";
    let change = ChangeDescriptor::new("foo.scala", 10, 20, 25);
    assert_eq!(rewrite(line, &change).text, line);

    let patterns = ReferencePatterns::compile("inputminted", "foo.scala").unwrap();
    let result = rewrite_line(line, &change, &patterns);
    assert_eq!(result.text, r"\inputminted[firstline=45]{foo.scala}");
}

#[test]
fn test_rewrite_is_not_idempotent() {
    let change = ChangeDescriptor::new("foo.scala", 20, 30, 35);
    let patterns = patterns_for("foo.scala");

    let once = rewrite_line(SCALA_REF, &change, &patterns);
    let twice = rewrite_line(&once.text, &change, &patterns);

    assert!(twice.text.contains("lastline=60"));
}

#[test]
fn test_oversized_number_is_left_alone() {
    let line = r"\lstinputlisting[firstline=99999999999999999999999]{foo.scala}";
    let change = ChangeDescriptor::new("foo.scala", 1, 2, 3);
    let result = rewrite(line, &change);

    assert_eq!(result.text, line);
    assert!(result.events.is_empty());
}

#[test]
fn test_shift_past_usize_max_from_new_end_is_left_alone() {
    let line = r"\lstinputlisting[lastline=5]{foo.scala}";
    let change = ChangeDescriptor::new("foo.scala", 1, 2, usize::MAX);
    let result = rewrite(line, &change);

    assert_eq!(result.text, line);
    assert!(result.events.is_empty());
}

#[test]
fn test_shift_past_usize_max_from_reference_is_left_alone() {
    let line = format!(r"\lstinputlisting[lastline={}]{{foo.scala}}", usize::MAX);
    let change = ChangeDescriptor::new("foo.scala", 1, 2, 7);
    let result = rewrite(&line, &change);

    assert_eq!(result.text, line);
    assert!(result.events.is_empty());
}

#[test]
fn test_large_values_still_shift_when_they_fit() {
    let line = format!(r"\lstinputlisting[lastline={}]{{foo.scala}}", usize::MAX - 10);
    let change = ChangeDescriptor::new("foo.scala", 1, 2, 7);
    let result = rewrite(&line, &change);

    assert_eq!(
        result.text,
        format!(r"\lstinputlisting[lastline={}]{{foo.scala}}", usize::MAX - 5)
    );
}

#[test]
fn test_delta_of_extreme_bounds_does_not_overflow() {
    let change = ChangeDescriptor::new("foo.scala", 0, 0, usize::MAX);
    assert_eq!(change.delta(), usize::MAX as i128);
    assert!(change.to_string().ends_with(&format!("(+{})", usize::MAX)));
}

#[test]
fn test_rewrite_text_preserves_line_endings_and_numbers_lines() {
    let text = "intro\r\n\\lstinputlisting[firstline=25]{foo.scala}\r\n\\lstinputlisting[lastline=31]{foo.scala}";
    let change = ChangeDescriptor::new("foo.scala", 20, 30, 32);
    let result = rewrite_text(text, &change, &patterns_for("foo.scala"));

    assert_eq!(
        result.text,
        "intro\r\n\\lstinputlisting[firstline=25]{foo.scala}\r\n\\lstinputlisting[lastline=33]{foo.scala}"
    );
    assert_eq!(result.shifted_count(), 1);
    assert_eq!(result.events[0].0, 2);
    assert_eq!(result.events[1].0, 3);
}

#[test]
fn test_change_descriptor_display() {
    let change = ChangeDescriptor::new("foo.scala", 20, 30, 35);
    assert_eq!(change.to_string(), "foo.scala lines 20-30 -> 20-35 (+5)");

    let change = ChangeDescriptor::new("foo.scala", 20, 30, 25);
    assert_eq!(change.to_string(), "foo.scala lines 20-30 -> 20-25 (-5)");
}

// ============================================================================
// rewrite_documents
// ============================================================================

fn write_doc(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_rewrite_documents_updates_files_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_doc(&temp_dir, "main.tex", &format!("{}\n", SCALA_REF));
    let other = write_doc(&temp_dir, "other.tex", "no listings here\n");

    let change = ChangeDescriptor::new("foo.scala", 20, 30, 35);
    let summary =
        rewrite_documents(&[doc.clone(), other.clone()], &change, &RewriteOptions::default())
            .unwrap();

    assert_eq!(
        fs::read_to_string(&doc).unwrap(),
        "\\lstinputlisting[language=Scala,firstline=10,lastline=55]{foo.scala}\n"
    );
    assert_eq!(fs::read_to_string(&other).unwrap(), "no listings here\n");
    assert_eq!(summary.shifted_count(), 1);
    assert_eq!(summary.changed_documents(), 1);
    assert_eq!(summary.documents.len(), 1);
    assert_eq!(summary.documents[0].path, doc);
}

#[test]
fn test_rewrite_documents_zero_delta_does_not_write() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_doc(&temp_dir, "main.tex", SCALA_REF);
    let before = fs::metadata(&doc).unwrap().modified().unwrap();

    let change = ChangeDescriptor::new("foo.scala", 5, 8, 8);
    let summary =
        rewrite_documents(&[doc.clone()], &change, &RewriteOptions::default()).unwrap();

    assert_eq!(fs::read_to_string(&doc).unwrap(), SCALA_REF);
    assert_eq!(fs::metadata(&doc).unwrap().modified().unwrap(), before);
    assert_eq!(summary.changed_documents(), 0);
}

#[test]
fn test_rewrite_documents_reports_inside_block_warning() {
    let temp_dir = TempDir::new().unwrap();
    let text = "a\n\\lstinputlisting[firstline=25]{foo.scala}\n";
    let doc = write_doc(&temp_dir, "main.tex", text);

    let change = ChangeDescriptor::new("foo.scala", 20, 30, 35);
    let summary =
        rewrite_documents(&[doc.clone()], &change, &RewriteOptions::default()).unwrap();

    assert_eq!(fs::read_to_string(&doc).unwrap(), text);
    assert_eq!(summary.warning_count(), 1);
    let (path, line, event) = summary.events().next().unwrap();
    assert_eq!(path, doc.as_path());
    assert_eq!(line, 2);
    assert_eq!(
        *event,
        ReferenceEvent::InsideBlock {
            field: LineField::First,
            value: 25
        }
    );
}

#[test]
fn test_rewrite_documents_dry_run_leaves_files() {
    let temp_dir = TempDir::new().unwrap();
    let doc = write_doc(&temp_dir, "main.tex", SCALA_REF);

    let options = RewriteOptions {
        dry_run: true,
        ..RewriteOptions::default()
    };
    let change = ChangeDescriptor::new("foo.scala", 20, 30, 35);
    let summary = rewrite_documents(&[doc.clone()], &change, &options).unwrap();

    assert_eq!(fs::read_to_string(&doc).unwrap(), SCALA_REF);
    assert_eq!(summary.shifted_count(), 1);
    assert!(summary.documents[0].changed);
}

#[test]
fn test_rewrite_documents_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.tex");

    let change = ChangeDescriptor::new("foo.scala", 20, 30, 35);
    let err = rewrite_documents(&[missing], &change, &RewriteOptions::default()).unwrap_err();

    assert!(matches!(err, crate::error::LstError::IoError(_)));
    assert!(err.to_string().contains("missing.tex"));
}
