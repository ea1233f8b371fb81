use smallvec::SmallVec;
use std::fmt;

/// Unique identifier for a node within a markup tree
///
/// Internally an index into arena-based storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root node always has ID 0
    pub const ROOT: NodeId = NodeId(0);

    /// Create a new NodeId from a usize
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    /// Get the inner usize value
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// The content of a node in the markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// The synthetic document root; serializes to nothing itself
    Root,

    /// An element, keeping its literal source tags so serialization
    /// round-trips the input byte for byte
    Element {
        /// Lowercased tag name
        tag: String,
        /// The open tag exactly as written, e.g. `<p class="x">`
        raw_open: String,
        /// The close tag exactly as written, or `None` for void and
        /// self-closed elements
        raw_close: Option<String>,
    },

    /// Visible character data, verbatim (entity references untouched)
    Text(String),

    /// Source that serializes but carries no visible text: comments,
    /// doctypes, processing instructions, script/style bodies
    Raw(String),
}

impl NodeData {
    /// The visible character data of this node, if it is a text node
    pub fn visible_text(&self) -> Option<&str> {
        match self {
            NodeData::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true for text nodes
    pub fn is_text(&self) -> bool {
        matches!(self, NodeData::Text(_))
    }
}

/// A single node in the markup tree
#[derive(Debug, Clone)]
pub struct MarkupNode {
    /// The node's content
    pub data: NodeData,

    /// Child node ids in document order
    pub children: SmallVec<[NodeId; 4]>,
}

impl MarkupNode {
    /// Create a childless node
    pub fn new(data: NodeData) -> Self {
        Self {
            data,
            children: SmallVec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        assert_eq!(NodeId::ROOT, NodeId(0));
        assert_eq!(NodeId::new(5).get(), 5);
        assert_eq!(NodeId(3).to_string(), "NodeId(3)");
    }

    #[test]
    fn test_visible_text() {
        assert_eq!(NodeData::Text("hi".into()).visible_text(), Some("hi"));
        assert_eq!(NodeData::Raw("<!-- x -->".into()).visible_text(), None);
        assert!(!NodeData::Root.is_text());
    }
}
