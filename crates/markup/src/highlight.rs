use anyhow::{bail, ensure, Context, Result};
use change_cursor::ChangeLocation;
use word_diff::{DiffKind, DiffOp};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::node::NodeData;
use crate::parser::parse;
use crate::tree::MarkupTree;

/// Class carried by highlight spans wrapping added text
pub const ADDED_CLASS: &str = "wd-added";

/// Class carried by highlight spans wrapping removed text
pub const REMOVED_CLASS: &str = "wd-removed";

/// Attribute carrying the change region id on highlight spans
pub const CHANGE_ID_ATTR: &str = "data-change-id";

/// The result of projecting a diff onto two markup documents
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HighlightOutcome {
    /// The before document, with removed ranges wrapped in highlight spans
    pub before_markup: String,

    /// The after document, with added ranges wrapped in highlight spans
    pub after_markup: String,

    /// Navigable change regions, ascending by after-document offset
    pub change_locations: Vec<ChangeLocation>,
}

/// Extract the visible plain text of a markup fragment.
///
/// Walks the tree in document order and concatenates the character data of
/// all visible text nodes, preserving order and exact content so that
/// offsets computed against the result are valid positions in the tree.
///
/// If the markup does not parse, the input is returned unchanged; a later
/// `apply_highlights` over the same input degrades the same way, so the
/// pipeline stays offset-consistent end to end.
pub fn extract_plain_text(markup: &str) -> String {
    match parse(markup) {
        Ok(tree) => tree.visible_text(),
        Err(err) => {
            log::warn!("markup did not parse, using it verbatim as plain text: {err:#}");
            markup.to_string()
        }
    }
}

/// Project diff operations onto two markup documents as highlight spans.
///
/// Added operations resolve into the after document, Removed operations
/// into the before document. A highlighted range that does not fall on
/// text-node boundaries splits the node; a range spanning several text
/// nodes wraps each covered piece separately. A maximal run of
/// consecutive changed operations forms one change region sharing one id,
/// so one semantic edit yields one navigable location.
///
/// This call never fails: if either document cannot be parsed or a range
/// cannot be resolved, both documents are returned unmodified with an
/// empty location list, and the cause is logged.
pub fn apply_highlights(before_markup: &str, after_markup: &str, ops: &[DiffOp]) -> HighlightOutcome {
    match try_apply(before_markup, after_markup, ops) {
        Ok(outcome) => outcome,
        Err(err) => {
            log::warn!("highlight projection failed, returning unannotated markup: {err:#}");
            HighlightOutcome {
                before_markup: before_markup.to_string(),
                after_markup: after_markup.to_string(),
                change_locations: Vec::new(),
            }
        }
    }
}

fn try_apply(before_markup: &str, after_markup: &str, ops: &[DiffOp]) -> Result<HighlightOutcome> {
    let mut before_tree = parse(before_markup).context("before document")?;
    let mut after_tree = parse(after_markup).context("after document")?;

    let before_plain = before_tree.visible_text();
    let after_plain = after_tree.visible_text();

    let reconstructed_before: String = ops
        .iter()
        .filter(|op| op.kind != DiffKind::Added)
        .map(|op| op.text.as_str())
        .collect();
    ensure!(
        reconstructed_before == before_plain,
        "operations do not reconstruct the before document's visible text"
    );

    let reconstructed_after: String = ops
        .iter()
        .filter(|op| op.kind != DiffKind::Removed)
        .map(|op| op.text.as_str())
        .collect();
    ensure!(
        reconstructed_after == after_plain,
        "operations do not reconstruct the after document's visible text"
    );

    let mut locations: Vec<ChangeLocation> = Vec::new();
    let mut removed_ranges: Vec<HighlightRange> = Vec::new();
    let mut added_ranges: Vec<HighlightRange> = Vec::new();
    let mut before_pos = 0;
    let mut after_pos = 0;
    let mut in_region = false;

    for op in ops {
        match op.kind {
            DiffKind::Unchanged => {
                before_pos += op.len();
                after_pos += op.len();
                in_region = false;
            }
            DiffKind::Removed => {
                if !in_region {
                    open_region(&mut locations, before_pos, after_pos);
                    in_region = true;
                }
                let id = locations.last().map(|l| l.id.clone()).unwrap_or_default();
                removed_ranges.push(HighlightRange {
                    start: before_pos,
                    end: before_pos + op.len(),
                    id,
                });
                before_pos += op.len();
            }
            DiffKind::Added => {
                if !in_region {
                    open_region(&mut locations, before_pos, after_pos);
                    in_region = true;
                }
                let id = locations.last().map(|l| l.id.clone()).unwrap_or_default();
                added_ranges.push(HighlightRange {
                    start: after_pos,
                    end: after_pos + op.len(),
                    id,
                });
                after_pos += op.len();
            }
        }
    }

    apply_ranges(&mut before_tree, &removed_ranges, REMOVED_CLASS)?;
    apply_ranges(&mut after_tree, &added_ranges, ADDED_CLASS)?;

    Ok(HighlightOutcome {
        before_markup: before_tree.serialize(),
        after_markup: after_tree.serialize(),
        change_locations: locations,
    })
}

/// A visible-text range to wrap, with the change region id its spans carry
struct HighlightRange {
    start: usize,
    end: usize,
    id: String,
}

/// Ids are unique within one projection pass and never reused
fn open_region(locations: &mut Vec<ChangeLocation>, before_pos: usize, after_pos: usize) {
    let id = format!("chg-{}", locations.len());
    locations.push(ChangeLocation::new(id, before_pos, after_pos));
}

/// Wrap every range in highlight spans, in one pass over the tree.
///
/// `ranges` is ascending and non-overlapping (it was built by walking the
/// operation list in order). Segments are resolved once; each covered
/// text node is rebuilt exactly once, with a span per covered piece, so a
/// range crossing node boundaries wraps each piece separately under its
/// shared id. Nodes are rebuilt last-first so earlier sibling indices
/// stay valid across splices.
fn apply_ranges(tree: &mut MarkupTree, ranges: &[HighlightRange], class: &str) -> Result<()> {
    if ranges.is_empty() {
        return Ok(());
    }

    let segments = tree.visible_segments();
    let visible_len: usize = segments.iter().map(|s| s.len).sum();
    if let Some(last) = ranges.last() {
        ensure!(
            last.end <= visible_len,
            "highlight range {}..{} exceeds visible text length {}",
            last.start,
            last.end,
            visible_len
        );
    }

    for segment in segments.iter().rev() {
        let segment_end = segment.start + segment.len;
        let covering: Vec<&HighlightRange> = ranges
            .iter()
            .filter(|r| r.start < r.end && r.start < segment_end && r.end > segment.start)
            .collect();
        if covering.is_empty() {
            continue;
        }

        let text = match &tree.node(segment.node).data {
            NodeData::Text(text) => text.clone(),
            other => bail!("expected a text node, found {:?}", other),
        };

        let mut replacements = Vec::new();
        let mut pos = 0;
        for range in covering {
            let local_start = range.start.saturating_sub(segment.start);
            let local_end = (range.end - segment.start).min(segment.len);
            ensure!(
                text.is_char_boundary(local_start) && text.is_char_boundary(local_end),
                "highlight range splits a character in {:?}",
                text
            );

            if local_start > pos {
                let plain = tree.add_node(NodeData::Text(text[pos..local_start].to_string()));
                replacements.push(plain);
            }

            let span = tree.add_node(NodeData::Element {
                tag: "span".to_string(),
                raw_open: format!("<span class=\"{}\" {}=\"{}\">", class, CHANGE_ID_ATTR, range.id),
                raw_close: Some("</span>".to_string()),
            });
            let wrapped = tree.add_node(NodeData::Text(text[local_start..local_end].to_string()));
            tree.append_child(span, wrapped);
            replacements.push(span);

            pos = local_end;
        }
        if pos < text.len() {
            let tail = tree.add_node(NodeData::Text(text[pos..].to_string()));
            replacements.push(tail);
        }

        tree.splice_children(segment.parent, segment.child_index, &replacements);
    }
    Ok(())
}
