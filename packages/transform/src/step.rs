//! # Steps
//!
//! A step is the smallest document change. Steps are plain data: they can
//! be replayed onto any document with a compatible shape.

use crate::{MapRange, StepMap, TransformError, TransformResult};
use scribe_model::Node;
use serde::{Deserialize, Serialize};

/// Atomic document change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stepType", rename_all = "camelCase")]
pub enum Step {
    /// Replace `from..to` inside one textblock with plain text
    ///
    /// Insertion when `from == to`, deletion when `text` is empty.
    Replace {
        from: usize,
        to: usize,
        text: String,
    },
}

impl Step {
    pub fn replace(from: usize, to: usize, text: impl Into<String>) -> Self {
        Step::Replace {
            from,
            to,
            text: text.into(),
        }
    }

    /// Apply to a document, producing a new document
    pub fn apply(&self, doc: &Node) -> TransformResult<Node> {
        match self {
            Step::Replace { from, to, text } => apply_replace(doc, *from, *to, text),
        }
    }

    pub fn get_map(&self) -> StepMap {
        match self {
            Step::Replace { from, to, text } => {
                let new_size = text.chars().count();
                if from == to && new_size == 0 {
                    return StepMap::empty();
                }
                StepMap::new(vec![MapRange {
                    start: *from,
                    old_size: to.saturating_sub(*from),
                    new_size,
                }])
            }
        }
    }
}

fn apply_replace(doc: &Node, from: usize, to: usize, text: &str) -> TransformResult<Node> {
    if from > to {
        return Err(TransformError::InvalidRange { from, to });
    }

    let start = doc.resolve(from)?;
    let end = doc.resolve(to)?;

    if !start.in_textblock() {
        return Err(TransformError::NotInline { pos: from });
    }
    if !start.same_parent(&end) {
        return Err(TransformError::CrossesTextblock { from, to });
    }

    let block = doc.descendant(&start.path)?;
    let inline_type = block
        .node_type()
        .inline_type()
        .ok_or(TransformError::NotInline { pos: from })?;

    // Marks are not modeled, so a textblock's text is always one run
    let chars: Vec<char> = block.text_content().chars().collect();
    let mut merged: String = chars[..start.parent_offset()].iter().collect();
    merged.push_str(text);
    merged.extend(&chars[end.parent_offset()..]);

    let content = if merged.is_empty() {
        Vec::new()
    } else {
        vec![Node::new_text(inline_type.clone(), merged)]
    };

    rebuild(doc, &start.path, block.with_content(content))
}

/// Replace the node at `path` and copy its ancestors
fn rebuild(node: &Node, path: &[usize], replacement: Node) -> TransformResult<Node> {
    match path.split_first() {
        None => Ok(replacement),
        Some((&index, rest)) => {
            let child = node.descendant(&[index])?;
            let child = rebuild(child, rest, replacement)?;
            Ok(node.replace_child(index, child)?)
        }
    }
}
