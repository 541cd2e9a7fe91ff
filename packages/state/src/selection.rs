//! # Selections
//!
//! A text selection is an `anchor` (the fixed end) and a `head` (the end
//! that moves). Both must sit at cursor positions, i.e. inside a textblock.

use crate::Action;
use scribe_model::{ModelError, Node};
use scribe_transform::{Assoc, Mapping};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("Position {pos} is outside the document (content size {size})")]
    OutOfRange { pos: usize, size: usize },

    #[error("Position {pos} is not a cursor position")]
    NotCursorPosition { pos: usize },

    #[error("Document has no cursor position")]
    NoCursorPosition,

    #[error("Malformed selection: {0}")]
    Malformed(String),
}

/// Text selection between two positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    /// Selection between two positions, not yet checked against a document
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Checked cursor at `pos`
    pub fn cursor(doc: &Node, pos: usize) -> Result<Self, SelectionError> {
        let selection = Self::new(pos, pos);
        selection.validate(doc)?;
        Ok(selection)
    }

    /// Cursor at the first cursor position in the document
    pub fn at_start(doc: &Node) -> Result<Self, SelectionError> {
        if doc.is_textblock() {
            return Ok(Self::new(0, 0));
        }
        first_cursor(doc, 0)
            .map(|pos| Self::new(pos, pos))
            .ok_or(SelectionError::NoCursorPosition)
    }

    pub fn from(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn to(&self) -> usize {
        self.anchor.max(self.head)
    }

    pub fn empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Check that both ends are cursor positions in `doc`
    pub fn validate(&self, doc: &Node) -> Result<(), SelectionError> {
        for pos in [self.anchor, self.head] {
            let resolved = doc.resolve(pos).map_err(|e| match e {
                ModelError::PositionOutOfRange { pos, size } => {
                    SelectionError::OutOfRange { pos, size }
                }
                other => SelectionError::Malformed(other.to_string()),
            })?;
            if !resolved.in_textblock() {
                return Err(SelectionError::NotCursorPosition { pos });
            }
        }
        Ok(())
    }

    /// Carry the selection through a document change
    pub fn map(&self, mapping: &Mapping) -> Self {
        Self::new(
            mapping.map(self.anchor, Assoc::Right),
            mapping.map(self.head, Assoc::Right),
        )
    }

    /// Action that selects this range in the current document
    pub fn action(self) -> Action {
        Action::Selection(self)
    }

    pub fn to_json(&self) -> Value {
        serde_json::json!({ "anchor": self.anchor, "head": self.head })
    }

    pub fn from_json(json: &Value) -> Result<Self, SelectionError> {
        Selection::deserialize(json).map_err(|e| SelectionError::Malformed(e.to_string()))
    }
}

/// Content start of the first textblock below `node`, whose content starts at `start`
fn first_cursor(node: &Node, start: usize) -> Option<usize> {
    let mut pos = start;
    for child in node.content() {
        if child.is_textblock() {
            return Some(pos + 1);
        }
        if !child.is_text() {
            if let Some(found) = first_cursor(child, pos + 1) {
                return Some(found);
            }
        }
        pos += child.node_size();
    }
    None
}
