use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classifies a diff operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiffKind {
    /// The span only exists in the "after" text
    #[display(fmt = "Added")]
    Added,

    /// The span only exists in the "before" text
    #[display(fmt = "Removed")]
    Removed,

    /// The span exists in both texts
    #[display(fmt = "Unchanged")]
    Unchanged,
}

impl DiffKind {
    /// Returns true for Added and Removed operations
    pub const fn is_change(self) -> bool {
        !matches!(self, DiffKind::Unchanged)
    }
}

/// One typed, contiguous span of text in a diff
///
/// Offsets are UTF-8 byte offsets in the coordinate space of the
/// operation's own side: Added and Unchanged operations are positioned in
/// the "after" text, Removed operations in the "before" text. The
/// invariant `end - start == text.len()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffOp {
    /// How this span differs between the two texts
    pub kind: DiffKind,

    /// The span's text, exactly as it appears on its own side
    pub text: String,

    /// Start offset on the operation's own side
    pub start: usize,

    /// End offset (exclusive) on the operation's own side
    pub end: usize,
}

impl DiffOp {
    /// Create a new operation; the end offset follows from the text length
    pub fn new(kind: DiffKind, text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let end = start + text.len();
        Self {
            kind,
            text,
            start,
            end,
        }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the span is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The result of one diff computation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffSummary {
    /// The operations in order of appearance
    ops: Vec<DiffOp>,

    /// Number of Added and Removed operations (Unchanged never counts)
    change_count: usize,

    /// Newline characters inside Added operation text
    added_newlines: usize,

    /// Newline characters inside Removed operation text
    removed_newlines: usize,
}

impl DiffSummary {
    /// Build a summary from an ordered operation list, deriving the counters
    pub fn new(ops: Vec<DiffOp>) -> Self {
        let mut change_count = 0;
        let mut added_newlines = 0;
        let mut removed_newlines = 0;

        for op in &ops {
            match op.kind {
                DiffKind::Added => {
                    change_count += 1;
                    added_newlines += op.text.matches('\n').count();
                }
                DiffKind::Removed => {
                    change_count += 1;
                    removed_newlines += op.text.matches('\n').count();
                }
                DiffKind::Unchanged => {}
            }
        }

        Self {
            ops,
            change_count,
            added_newlines,
            removed_newlines,
        }
    }

    /// An empty summary (two empty inputs)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the operations
    pub fn ops(&self) -> &[DiffOp] {
        &self.ops
    }

    /// Get the number of operations
    pub fn op_count(&self) -> usize {
        self.ops.len()
    }

    /// Get an operation by index
    pub fn op(&self, index: usize) -> Option<&DiffOp> {
        self.ops.get(index)
    }

    /// Number of Added and Removed operations
    pub fn change_count(&self) -> usize {
        self.change_count
    }

    /// Newline characters inside Added operations
    pub fn added_newlines(&self) -> usize {
        self.added_newlines
    }

    /// Newline characters inside Removed operations
    pub fn removed_newlines(&self) -> usize {
        self.removed_newlines
    }

    /// Check if the diff contains any changes
    pub fn has_changes(&self) -> bool {
        self.change_count > 0
    }

    /// Reconstruct the "before" text from Removed and Unchanged operations
    pub fn before_text(&self) -> String {
        self.ops
            .iter()
            .filter(|op| op.kind != DiffKind::Added)
            .map(|op| op.text.as_str())
            .collect()
    }

    /// Reconstruct the "after" text from Added and Unchanged operations
    pub fn after_text(&self) -> String {
        self.ops
            .iter()
            .filter(|op| op.kind != DiffKind::Removed)
            .map(|op| op.text.as_str())
            .collect()
    }
}
