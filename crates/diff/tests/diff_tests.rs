use pretty_assertions::assert_eq;
use word_diff::{DiffKind, DiffOp, WordDiff};

#[test]
fn test_both_empty() {
    // Two empty inputs should produce no operations at all
    let summary = WordDiff::compute("", "");

    assert_eq!(summary.op_count(), 0);
    assert_eq!(summary.change_count(), 0);
    assert!(!summary.has_changes());
}

#[test]
fn test_identical_inputs() {
    // Identical inputs collapse into a single unchanged operation
    let summary = WordDiff::compute("same text here", "same text here");

    assert_eq!(
        summary.ops(),
        &[DiffOp::new(DiffKind::Unchanged, "same text here", 0)]
    );
    assert_eq!(summary.change_count(), 0);
}

#[test]
fn test_everything_added() {
    // Empty before, non-empty after is one added operation spanning the text
    let summary = WordDiff::compute("", "brand new text");

    assert_eq!(
        summary.ops(),
        &[DiffOp::new(DiffKind::Added, "brand new text", 0)]
    );
    assert_eq!(summary.change_count(), 1);
}

#[test]
fn test_everything_removed() {
    // Non-empty before, empty after is one removed operation spanning the text
    let summary = WordDiff::compute("old text", "");

    assert_eq!(summary.ops(), &[DiffOp::new(DiffKind::Removed, "old text", 0)]);
    assert_eq!(summary.change_count(), 1);
}

#[test]
fn test_single_word_appended() {
    // "hello" -> "hello world" must surface exactly one added operation
    let summary = WordDiff::compute("hello", "hello world");

    assert_eq!(
        summary.ops(),
        &[
            DiffOp::new(DiffKind::Unchanged, "hello", 0),
            DiffOp::new(DiffKind::Added, " world", 5),
        ]
    );
    assert_eq!(summary.change_count(), 1);
}

#[test]
fn test_single_word_dropped() {
    // "hello world" -> "hello" is unchanged "hello" then one removed op
    let summary = WordDiff::compute("hello world", "hello");

    assert_eq!(
        summary.ops(),
        &[
            DiffOp::new(DiffKind::Unchanged, "hello", 0),
            DiffOp::new(DiffKind::Removed, " world", 5),
        ]
    );
    assert_eq!(summary.change_count(), 1);
}

#[test]
fn test_single_word_replaced() {
    // A one-word replacement is exactly one removed plus one added operation,
    // never a wider removed/added span
    let summary = WordDiff::compute("hello world", "hello universe");

    assert_eq!(
        summary.ops(),
        &[
            DiffOp::new(DiffKind::Unchanged, "hello", 0),
            DiffOp::new(DiffKind::Removed, " world", 5),
            DiffOp::new(DiffKind::Added, " universe", 5),
        ]
    );
    assert_eq!(summary.change_count(), 2);
}

#[test]
fn test_replacement_in_the_middle() {
    let summary = WordDiff::compute("one two three four", "one TWO three four");

    assert_eq!(
        summary.ops(),
        &[
            DiffOp::new(DiffKind::Unchanged, "one", 0),
            DiffOp::new(DiffKind::Removed, " two", 3),
            DiffOp::new(DiffKind::Added, " TWO", 3),
            DiffOp::new(DiffKind::Unchanged, " three four", 7),
        ]
    );
    assert_eq!(summary.change_count(), 2);
}

#[test]
fn test_adjacent_changed_words_coalesce() {
    // A run of inserted tokens becomes one added operation, not one per word
    let summary = WordDiff::compute("start end", "start middle words here end");

    let added: Vec<_> = summary
        .ops()
        .iter()
        .filter(|op| op.kind == DiffKind::Added)
        .collect();
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].text, " middle words here");
    assert_eq!(summary.change_count(), 1);
}

#[test]
fn test_newline_counters() {
    let summary = WordDiff::compute("a\nb\nc", "a\nb");

    assert_eq!(summary.removed_newlines(), 1);
    assert_eq!(summary.added_newlines(), 0);

    let summary = WordDiff::compute("top", "top\nmid\nbottom");
    assert_eq!(summary.added_newlines(), 2);
    assert_eq!(summary.removed_newlines(), 0);
}

#[test]
fn test_missing_inputs_treated_as_empty() {
    assert_eq!(WordDiff::compute_opt(None, None).op_count(), 0);

    let summary = WordDiff::compute_opt(None, Some("text"));
    assert_eq!(summary.ops(), &[DiffOp::new(DiffKind::Added, "text", 0)]);

    let summary = WordDiff::compute_opt(Some("text"), None);
    assert_eq!(summary.ops(), &[DiffOp::new(DiffKind::Removed, "text", 0)]);
}

#[test]
fn test_after_side_offsets_are_contiguous() {
    let summary = WordDiff::compute(
        "the quick brown fox jumps",
        "the slow brown wolf jumps high",
    );

    let mut expected_start = 0;
    for op in summary.ops().iter().filter(|op| op.kind != DiffKind::Removed) {
        assert_eq!(op.start, expected_start);
        expected_start = op.end;
    }
    assert_eq!(expected_start, "the slow brown wolf jumps high".len());
}
