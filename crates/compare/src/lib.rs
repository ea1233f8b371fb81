//! End-to-end comparison pipeline
//!
//! Wires the three core pieces together in their data-flow order: extract
//! plain text from both rendered documents, compute the word diff, project
//! it back onto the markup as highlights, and hand the change list to a
//! navigation cursor. One `Comparison` value is one comparison session.

use change_cursor::ChangeCursor;
use markup_highlight::{apply_highlights, extract_plain_text, HighlightOutcome};
use word_diff::{DiffSummary, WordDiff};

/// One active comparison between two rendered documents
///
/// Constructed per comparison and discarded wholesale when a new
/// comparison replaces it; nothing is shared across sessions.
#[derive(Debug, Clone)]
pub struct Comparison {
    summary: DiffSummary,
    outcome: HighlightOutcome,
    cursor: ChangeCursor,
}

impl Comparison {
    /// Compare two rendered markup documents.
    ///
    /// Never fails: unparseable markup degrades to unhighlighted output
    /// with an empty change list, and absent text diffs as empty.
    pub fn new(before_markup: &str, after_markup: &str) -> Self {
        let before_text = extract_plain_text(before_markup);
        let after_text = extract_plain_text(after_markup);

        let summary = WordDiff::compute(&before_text, &after_text);
        log::debug!(
            "diff computed: {} ops, {} changes",
            summary.op_count(),
            summary.change_count()
        );

        let outcome = apply_highlights(before_markup, after_markup, summary.ops());
        let cursor = ChangeCursor::new(outcome.change_locations.clone());

        Self {
            summary,
            outcome,
            cursor,
        }
    }

    /// The computed diff
    pub fn summary(&self) -> &DiffSummary {
        &self.summary
    }

    /// The highlighted documents and their change locations
    pub fn outcome(&self) -> &HighlightOutcome {
        &self.outcome
    }

    /// The navigation cursor over the change locations
    pub fn cursor(&self) -> &ChangeCursor {
        &self.cursor
    }

    /// Mutable access to the navigation cursor
    pub fn cursor_mut(&mut self) -> &mut ChangeCursor {
        &mut self.cursor
    }

    /// Check if the comparison found any changes
    pub fn has_changes(&self) -> bool {
        self.summary.has_changes()
    }
}
