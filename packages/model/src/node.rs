//! # Document Nodes
//!
//! Immutable document tree. Every edit produces a new tree; untouched
//! subtrees are cloned, never modified in place.
//!
//! ## Positions
//!
//! ```text
//!   0   1   2   3   4
//!   <p> o   k   </p>
//! ```
//!
//! Entering or leaving a non-text node counts one position, each character
//! of text counts one. Position 0 is the start of the top node's content.

use crate::{ModelError, ModelResult, NodeType};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// A node in the document tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    node_type: Arc<NodeType>,
    content: Vec<Node>,
    text: Option<String>,
}

impl Node {
    /// Create a non-text node without checking content rules
    pub fn new(node_type: Arc<NodeType>, content: Vec<Node>) -> Self {
        Self {
            node_type,
            content,
            text: None,
        }
    }

    /// Create a text node without checking content rules
    pub fn new_text(node_type: Arc<NodeType>, text: String) -> Self {
        Self {
            node_type,
            content: Vec::new(),
            text: Some(text),
        }
    }

    pub fn node_type(&self) -> &NodeType {
        &self.node_type
    }

    pub fn type_name(&self) -> &str {
        &self.node_type.name
    }

    pub fn content(&self) -> &[Node] {
        &self.content
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.content.get(index)
    }

    pub fn child_count(&self) -> usize {
        self.content.len()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_text(&self) -> bool {
        self.node_type.is_text()
    }

    pub fn is_textblock(&self) -> bool {
        self.node_type.is_textblock()
    }

    /// Size of this node in positions
    pub fn node_size(&self) -> usize {
        match &self.text {
            Some(text) => text.chars().count(),
            None => self.content_size() + 2,
        }
    }

    /// Size of this node's content in positions
    pub fn content_size(&self) -> usize {
        match &self.text {
            Some(text) => text.chars().count(),
            None => self.content.iter().map(Node::node_size).sum(),
        }
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        match &self.text {
            Some(text) => text.clone(),
            None => self.content.iter().map(Node::text_content).collect(),
        }
    }

    /// Copy of this node with its content replaced
    pub fn with_content(&self, content: Vec<Node>) -> Node {
        Node {
            node_type: self.node_type.clone(),
            content,
            text: None,
        }
    }

    /// Copy of this node with one child replaced
    pub fn replace_child(&self, index: usize, child: Node) -> ModelResult<Node> {
        if index >= self.content.len() {
            return Err(ModelError::ChildOutOfRange {
                node_type: self.type_name().to_string(),
                index,
            });
        }
        let mut content = self.content.clone();
        content[index] = child;
        Ok(self.with_content(content))
    }

    /// Follow a path of child indices
    pub fn descendant(&self, path: &[usize]) -> ModelResult<&Node> {
        path.iter().try_fold(self, |node, &index| {
            node.child(index).ok_or_else(|| ModelError::ChildOutOfRange {
                node_type: node.type_name().to_string(),
                index,
            })
        })
    }

    /// Resolve a position into the node that directly contains it
    pub fn resolve(&self, pos: usize) -> ModelResult<ResolvedPos> {
        let size = self.content_size();
        if pos > size {
            return Err(ModelError::PositionOutOfRange { pos, size });
        }

        let mut node = self;
        let mut path = Vec::new();
        let mut start = 0;
        let mut rem = pos;

        loop {
            let mut offset = 0;
            let mut next = None;

            for (index, child) in node.content.iter().enumerate() {
                let end = offset + child.node_size();
                if rem > offset && rem < end && !child.is_text() {
                    next = Some((index, child, offset));
                    break;
                }
                if end > rem {
                    break;
                }
                offset = end;
            }

            match next {
                Some((index, child, offset)) => {
                    path.push(index);
                    start += offset + 1;
                    rem -= offset + 1;
                    node = child;
                }
                None => break,
            }
        }

        Ok(ResolvedPos {
            pos,
            path,
            parent_type: node.node_type.clone(),
            parent_start: start,
        })
    }

    /// JSON form: `{"type", "content"?, "text"?}`
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("type".to_string(), Value::String(self.type_name().to_string()));
        if !self.content.is_empty() {
            object.insert(
                "content".to_string(),
                Value::Array(self.content.iter().map(Node::to_json).collect()),
            );
        }
        if let Some(text) = &self.text {
            object.insert("text".to_string(), Value::String(text.clone()));
        }
        Value::Object(object)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = &self.text {
            return write!(f, "{:?}", text);
        }
        write!(f, "{}", self.type_name())?;
        if !self.content.is_empty() {
            write!(f, "(")?;
            for (i, child) in self.content.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", child)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// A position resolved against a document
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPos {
    /// Absolute position
    pub pos: usize,

    /// Child indices from the top node down to the parent
    pub path: Vec<usize>,

    /// Type of the node directly containing the position
    pub parent_type: Arc<NodeType>,

    /// Absolute position of the start of the parent's content
    pub parent_start: usize,
}

impl ResolvedPos {
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn parent_offset(&self) -> usize {
        self.pos - self.parent_start
    }

    /// Whether the parent holds inline content (a valid cursor position)
    pub fn in_textblock(&self) -> bool {
        self.parent_type.is_textblock()
    }

    pub fn same_parent(&self, other: &ResolvedPos) -> bool {
        self.path == other.path
    }
}
