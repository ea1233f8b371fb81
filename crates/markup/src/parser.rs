use anyhow::{bail, Result};

use crate::node::{NodeData, NodeId};
use crate::tree::MarkupTree;

/// Elements that never have children or a close tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is raw source, not visible text
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Parse a markup fragment into a tree.
///
/// The scanner accepts the constructs a rendered document contains: open,
/// close and self-closing tags, void elements, comments, doctypes,
/// processing instructions, and raw-text elements (`script`, `style`).
/// Entity references are kept verbatim inside text nodes.
///
/// Structural damage is an error, not a best-effort recovery: a stray
/// `<`, an unterminated tag or comment, a close tag that matches no open
/// element, or an element left open at end of input all fail the parse.
/// Callers treat that failure as the signal to degrade to unhighlighted
/// output.
pub fn parse(markup: &str) -> Result<MarkupTree> {
    Parser::new(markup).run()
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    tree: MarkupTree,
    /// Open elements: node id plus lowercased tag name
    stack: Vec<(NodeId, String)>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            tree: MarkupTree::new(),
            stack: Vec::new(),
        }
    }

    fn run(mut self) -> Result<MarkupTree> {
        while self.pos < self.input.len() {
            if self.rest().starts_with('<') {
                self.scan_construct()?;
            } else {
                self.scan_text();
            }
        }

        if let Some((_, tag)) = self.stack.last() {
            bail!("element <{}> left open at end of input", tag);
        }

        Ok(self.tree)
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn parent(&self) -> NodeId {
        self.stack.last().map(|(id, _)| *id).unwrap_or(NodeId::ROOT)
    }

    fn scan_text(&mut self) {
        let rest = self.rest();
        let end = rest.find('<').unwrap_or(rest.len());
        let text = &rest[..end];
        let parent = self.parent();
        let node = self.tree.add_node(NodeData::Text(text.to_string()));
        self.tree.append_child(parent, node);
        self.pos += end;
    }

    fn scan_construct(&mut self) -> Result<()> {
        let rest = self.rest();

        if rest.starts_with("<!--") {
            return self.scan_comment();
        }
        if rest.starts_with("<!") || rest.starts_with("<?") {
            return self.scan_declaration();
        }
        if rest.starts_with("</") {
            return self.scan_close_tag();
        }
        self.scan_open_tag()
    }

    fn scan_comment(&mut self) -> Result<()> {
        let rest = self.rest();
        let Some(end) = rest[4..].find("-->") else {
            bail!("unterminated comment at offset {}", self.pos);
        };
        let raw = &rest[..4 + end + 3];
        let parent = self.parent();
        let node = self.tree.add_node(NodeData::Raw(raw.to_string()));
        self.tree.append_child(parent, node);
        self.pos += raw.len();
        Ok(())
    }

    /// Doctypes and processing instructions serialize verbatim and carry
    /// no visible text
    fn scan_declaration(&mut self) -> Result<()> {
        let rest = self.rest();
        let Some(end) = rest.find('>') else {
            bail!("unterminated declaration at offset {}", self.pos);
        };
        let raw = &rest[..=end];
        let parent = self.parent();
        let node = self.tree.add_node(NodeData::Raw(raw.to_string()));
        self.tree.append_child(parent, node);
        self.pos += raw.len();
        Ok(())
    }

    fn scan_close_tag(&mut self) -> Result<()> {
        let rest = self.rest();
        let Some(end) = rest.find('>') else {
            bail!("unterminated close tag at offset {}", self.pos);
        };
        let raw = &rest[..=end];
        let name: String = raw[2..raw.len() - 1].trim().to_ascii_lowercase();
        if name.is_empty() || !name.chars().all(is_tag_name_char) {
            bail!("malformed close tag {:?} at offset {}", raw, self.pos);
        }

        let Some((id, open_name)) = self.stack.pop() else {
            bail!("close tag </{}> with no open element", name);
        };
        if open_name != name {
            bail!("close tag </{}> does not match open <{}>", name, open_name);
        }

        if let NodeData::Element { raw_close, .. } = &mut self.tree.node_mut(id).data {
            *raw_close = Some(raw.to_string());
        }
        self.pos += raw.len();
        Ok(())
    }

    fn scan_open_tag(&mut self) -> Result<()> {
        let rest = self.rest();
        let mut chars = rest.char_indices().skip(1);

        match chars.next() {
            Some((_, ch)) if ch.is_ascii_alphabetic() => {}
            _ => bail!("stray '<' at offset {}", self.pos),
        }

        // Find the closing '>' outside quoted attribute values
        let mut quote: Option<char> = None;
        let mut tag_end = None;
        for (idx, ch) in rest.char_indices().skip(1) {
            match quote {
                Some(q) if ch == q => quote = None,
                Some(_) => {}
                None => match ch {
                    '"' | '\'' => quote = Some(ch),
                    '>' => {
                        tag_end = Some(idx);
                        break;
                    }
                    _ => {}
                },
            }
        }
        let Some(tag_end) = tag_end else {
            bail!("unterminated tag at offset {}", self.pos);
        };

        let raw = &rest[..=tag_end];
        let name: String = raw[1..]
            .chars()
            .take_while(|&ch| is_tag_name_char(ch))
            .collect::<String>()
            .to_ascii_lowercase();

        let self_closing = raw.ends_with("/>") || VOID_ELEMENTS.contains(&name.as_str());

        let parent = self.parent();
        let node = self.tree.add_node(NodeData::Element {
            tag: name.clone(),
            raw_open: raw.to_string(),
            raw_close: None,
        });
        self.tree.append_child(parent, node);
        self.pos += raw.len();

        if self_closing {
            return Ok(());
        }

        self.stack.push((node, name.clone()));

        if RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
            self.scan_raw_text(node, &name)?;
        }
        Ok(())
    }

    /// Consume everything up to the matching close tag as raw source
    fn scan_raw_text(&mut self, element: NodeId, name: &str) -> Result<()> {
        let rest = self.rest();
        let needle = format!("</{}", name);
        let Some(close_start) = rest.to_ascii_lowercase().find(&needle) else {
            bail!("raw-text element <{}> is never closed", name);
        };
        if close_start > 0 {
            let body = &rest[..close_start];
            let node = self.tree.add_node(NodeData::Raw(body.to_string()));
            self.tree.append_child(element, node);
            self.pos += body.len();
        }
        // The close tag itself goes through the normal close-tag path
        Ok(())
    }
}

fn is_tag_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == ':'
}
