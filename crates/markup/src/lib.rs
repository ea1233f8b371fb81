//! Markup-aware highlight projection
//!
//! This crate parses rendered markup into an explicit tree, extracts the
//! visible plain text against which word diffs are computed, and splices
//! highlight annotations back into the tree at the diffed character
//! ranges without breaking nested structure.

mod highlight;
mod node;
mod parser;
mod tree;

pub use highlight::{
    apply_highlights, extract_plain_text, HighlightOutcome, ADDED_CLASS, CHANGE_ID_ATTR,
    REMOVED_CLASS,
};
pub use node::{MarkupNode, NodeData, NodeId};
pub use parser::parse;
pub use tree::MarkupTree;
