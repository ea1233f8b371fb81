// Word-level diff engine
// This crate computes a minimal word-granularity diff between two texts

mod diff_op;
mod tokenize;
mod word_diff;

pub use diff_op::{DiffKind, DiffOp, DiffSummary};
pub use tokenize::tokenize;
pub use word_diff::WordDiff;
