use similar::{capture_diff_slices, Algorithm, DiffTag};

use crate::diff_op::{DiffKind, DiffOp, DiffSummary};
use crate::tokenize::tokenize;

/// Word-granularity diff computation
pub struct WordDiff;

impl WordDiff {
    /// Compute a minimal word-level diff between two texts.
    ///
    /// Runs of equal tokens coalesce into one Unchanged operation; runs of
    /// removed or inserted tokens coalesce into one Removed or Added
    /// operation, with Removed emitted before Added for a replacement.
    pub fn compute(before: &str, after: &str) -> DiffSummary {
        // Special case: two empty inputs produce no operations
        if before.is_empty() && after.is_empty() {
            return DiffSummary::empty();
        }

        // Special case: everything was added
        if before.is_empty() {
            return DiffSummary::new(vec![DiffOp::new(DiffKind::Added, after, 0)]);
        }

        // Special case: everything was removed
        if after.is_empty() {
            return DiffSummary::new(vec![DiffOp::new(DiffKind::Removed, before, 0)]);
        }

        // Special case: identical inputs are a single unchanged span
        if before == after {
            return DiffSummary::new(vec![DiffOp::new(DiffKind::Unchanged, after, 0)]);
        }

        let before_tokens = tokenize(before);
        let after_tokens = tokenize(after);

        // Myers gives the shortest edit script over the token sequences
        let script = capture_diff_slices(Algorithm::Myers, &before_tokens, &after_tokens);

        let mut ops = Vec::new();
        let mut before_pos = 0;
        let mut after_pos = 0;

        for group in script {
            match group.tag() {
                DiffTag::Equal => {
                    let text = after_tokens[group.new_range()].concat();
                    before_pos += text.len();
                    let start = after_pos;
                    after_pos += text.len();
                    ops.push(DiffOp::new(DiffKind::Unchanged, text, start));
                }
                DiffTag::Delete => {
                    let text = before_tokens[group.old_range()].concat();
                    let start = before_pos;
                    before_pos += text.len();
                    ops.push(DiffOp::new(DiffKind::Removed, text, start));
                }
                DiffTag::Insert => {
                    let text = after_tokens[group.new_range()].concat();
                    let start = after_pos;
                    after_pos += text.len();
                    ops.push(DiffOp::new(DiffKind::Added, text, start));
                }
                DiffTag::Replace => {
                    let removed = before_tokens[group.old_range()].concat();
                    let start = before_pos;
                    before_pos += removed.len();
                    ops.push(DiffOp::new(DiffKind::Removed, removed, start));

                    let added = after_tokens[group.new_range()].concat();
                    let start = after_pos;
                    after_pos += added.len();
                    ops.push(DiffOp::new(DiffKind::Added, added, start));
                }
            }
        }

        DiffSummary::new(ops)
    }

    /// Compute a diff where either input may be absent.
    ///
    /// A missing input is treated as the empty string rather than an error.
    pub fn compute_opt(before: Option<&str>, after: Option<&str>) -> DiffSummary {
        Self::compute(before.unwrap_or(""), after.unwrap_or(""))
    }
}
