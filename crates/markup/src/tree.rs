use crate::node::{MarkupNode, NodeData, NodeId};

/// A visible text node located within the tree
///
/// `start` is the node's offset in the concatenated visible text; the
/// parent id and child index pin down where the node sits structurally.
#[derive(Debug, Clone)]
pub(crate) struct TextSegment {
    pub node: NodeId,
    pub parent: NodeId,
    pub child_index: usize,
    pub start: usize,
    pub len: usize,
}

/// An arena-stored markup tree
///
/// Node 0 is always the synthetic root. Element nodes keep their literal
/// source tags, so a tree serializes back to the exact input string until
/// highlight elements are spliced in.
#[derive(Debug, Clone)]
pub struct MarkupTree {
    nodes: Vec<MarkupNode>,
}

impl MarkupTree {
    /// Create a tree containing only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![MarkupNode::new(NodeData::Root)],
        }
    }

    /// Get a node by id
    pub fn node(&self, id: NodeId) -> &MarkupNode {
        &self.nodes[id.get()]
    }

    /// Get a mutable node by id
    pub fn node_mut(&mut self, id: NodeId) -> &mut MarkupNode {
        &mut self.nodes[id.get()]
    }

    /// Get the number of nodes (including the root)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree holds nothing but the root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Allocate a detached node and return its id
    pub fn add_node(&mut self, data: NodeData) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(MarkupNode::new(data));
        id
    }

    /// Append a child to a parent's child list
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(parent).children.push(child);
    }

    /// Replace the child at `index` with a run of replacement nodes
    pub fn splice_children(&mut self, parent: NodeId, index: usize, replacements: &[NodeId]) {
        let children = &mut self.node_mut(parent).children;
        children.remove(index);
        for (offset, &id) in replacements.iter().enumerate() {
            children.insert(index + offset, id);
        }
    }

    /// Concatenated character data of all visible text nodes, in document
    /// order
    pub fn visible_text(&self) -> String {
        let mut out = String::new();
        self.collect_visible_text(NodeId::ROOT, &mut out);
        out
    }

    fn collect_visible_text(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        if let Some(text) = node.data.visible_text() {
            out.push_str(text);
        }
        for &child in &node.children {
            self.collect_visible_text(child, out);
        }
    }

    /// All visible text nodes in document order, with their offsets in the
    /// concatenated visible text
    pub(crate) fn visible_segments(&self) -> Vec<TextSegment> {
        let mut segments = Vec::new();
        let mut pos = 0;
        self.collect_segments(NodeId::ROOT, &mut pos, &mut segments);
        segments
    }

    fn collect_segments(&self, id: NodeId, pos: &mut usize, segments: &mut Vec<TextSegment>) {
        for (child_index, &child) in self.node(id).children.iter().enumerate() {
            if let Some(text) = self.node(child).data.visible_text() {
                segments.push(TextSegment {
                    node: child,
                    parent: id,
                    child_index,
                    start: *pos,
                    len: text.len(),
                });
                *pos += text.len();
            }
            self.collect_segments(child, pos, segments);
        }
    }

    /// Serialize the tree back to markup text
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.serialize_node(NodeId::ROOT, &mut out);
        out
    }

    fn serialize_node(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        match &node.data {
            NodeData::Root => {}
            NodeData::Element { raw_open, .. } => out.push_str(raw_open),
            NodeData::Text(text) | NodeData::Raw(text) => out.push_str(text),
        }
        for &child in &node.children {
            self.serialize_node(child, out);
        }
        if let NodeData::Element {
            raw_close: Some(close),
            ..
        } = &node.data
        {
            out.push_str(close);
        }
    }
}

impl Default for MarkupTree {
    fn default() -> Self {
        Self::new()
    }
}
