//! # Schema
//!
//! Named node types and the content rules between them.
//!
//! The rules are intentionally coarse: a node either holds block children,
//! holds inline text, or is text itself. That is enough to decide which
//! positions can hold a cursor and what an empty default document looks like.

use crate::{ModelError, ModelResult, Node};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// What a node type may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Holds block nodes, at least `min` of them
    Container { min: usize },

    /// Holds inline text
    Textblock,

    /// A run of text
    Text,
}

impl NodeKind {
    pub fn is_block(&self) -> bool {
        !matches!(self, NodeKind::Text)
    }
}

/// A named node type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeType {
    pub name: String,
    pub kind: NodeKind,

    /// Text type held by a textblock (set by [`Schema::new`])
    inline: Option<Arc<NodeType>>,
}

impl NodeType {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            inline: None,
        }
    }

    /// The text type this textblock holds
    pub fn inline_type(&self) -> Option<&Arc<NodeType>> {
        self.inline.as_ref()
    }

    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    pub fn is_textblock(&self) -> bool {
        self.kind == NodeKind::Textblock
    }
}

/// Set of node types with a designated top node
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Declaration order matters: the first textblock is the default block
    types: Vec<Arc<NodeType>>,
    index: HashMap<String, usize>,
    top: String,
    text: Arc<NodeType>,
}

impl Schema {
    /// Build a schema from node types in declaration order
    ///
    /// Fails if a name is declared twice, if there is no text type, or if
    /// the top node is unknown or not a container.
    pub fn new(top: impl Into<String>, types: Vec<NodeType>) -> ModelResult<Self> {
        let top = top.into();
        let mut index = HashMap::new();

        for (i, node_type) in types.iter().enumerate() {
            if index.insert(node_type.name.clone(), i).is_some() {
                return Err(ModelError::invalid_content(
                    &node_type.name,
                    "node type declared twice",
                ));
            }
        }

        let text = match types.iter().find(|t| t.is_text()) {
            Some(t) => Arc::new(t.clone()),
            None => return Err(ModelError::invalid_content(&top, "schema has no text type")),
        };

        match index.get(&top).map(|&i| types[i].kind) {
            Some(NodeKind::Container { .. }) => {}
            Some(_) => {
                return Err(ModelError::invalid_content(&top, "top node must hold blocks"))
            }
            None => return Err(ModelError::UnknownNodeType(top)),
        }

        let types = types
            .into_iter()
            .map(|t| {
                if t.name == text.name {
                    text.clone()
                } else if t.is_textblock() {
                    Arc::new(NodeType {
                        inline: Some(text.clone()),
                        ..t
                    })
                } else {
                    Arc::new(t)
                }
            })
            .collect();

        Ok(Self {
            types,
            index,
            top,
            text,
        })
    }

    /// `doc` holding one or more `paragraph`/`blockquote` blocks; paragraphs hold text
    pub fn basic() -> Arc<Schema> {
        static BASIC: OnceLock<Arc<Schema>> = OnceLock::new();
        BASIC
            .get_or_init(|| {
                let types = vec![
                    NodeType::new("doc", NodeKind::Container { min: 1 }),
                    NodeType::new("paragraph", NodeKind::Textblock),
                    NodeType::new("blockquote", NodeKind::Container { min: 1 }),
                    NodeType::new("text", NodeKind::Text),
                ];
                match Schema::new("doc", types) {
                    Ok(schema) => Arc::new(schema),
                    Err(e) => unreachable!("basic schema is well-formed: {e}"),
                }
            })
            .clone()
    }

    pub fn node_type(&self, name: &str) -> ModelResult<&Arc<NodeType>> {
        self.index
            .get(name)
            .map(|&i| &self.types[i])
            .ok_or_else(|| ModelError::UnknownNodeType(name.to_string()))
    }

    pub fn top_node_type(&self) -> &Arc<NodeType> {
        &self.types[self.index[&self.top]]
    }

    pub fn text_type(&self) -> &Arc<NodeType> {
        &self.text
    }

    fn default_block(&self) -> Option<&Arc<NodeType>> {
        self.types.iter().find(|t| t.is_textblock())
    }

    /// Create a node of the named type, checking its content
    pub fn node(&self, name: &str, content: Vec<Node>) -> ModelResult<Node> {
        let node_type = self.node_type(name)?.clone();
        if node_type.is_text() {
            return Err(ModelError::invalid_content(name, "use Schema::text for text"));
        }
        let node = Node::new(node_type, content);
        self.check(&node)?;
        Ok(node)
    }

    /// Create a text node; text must be non-empty
    pub fn text(&self, text: impl Into<String>) -> ModelResult<Node> {
        let text = text.into();
        if text.is_empty() {
            return Err(ModelError::invalid_content("text", "empty text node"));
        }
        Ok(Node::new_text(self.text_type().clone(), text))
    }

    /// The smallest valid document: the top node filled with default blocks
    pub fn create_default(&self) -> Node {
        self.fill(self.top_node_type())
    }

    fn fill(&self, node_type: &Arc<NodeType>) -> Node {
        let content = match node_type.kind {
            NodeKind::Container { min } => match self.default_block() {
                Some(block) => (0..min).map(|_| self.fill(block)).collect(),
                None => Vec::new(),
            },
            NodeKind::Textblock | NodeKind::Text => Vec::new(),
        };
        Node::new(node_type.clone(), content)
    }

    /// Check that a tree only uses this schema's types and follows its content rules
    pub fn check(&self, node: &Node) -> ModelResult<()> {
        let own = self.node_type(node.type_name())?;
        if own.as_ref() != node.node_type() {
            return Err(ModelError::invalid_content(
                node.type_name(),
                "node type does not belong to this schema",
            ));
        }

        match own.kind {
            NodeKind::Text => {
                if node.text().map_or(true, str::is_empty) {
                    return Err(ModelError::invalid_content(node.type_name(), "empty text node"));
                }
            }
            NodeKind::Textblock => {
                if let Some(child) = node.content().iter().find(|c| !c.is_text()) {
                    return Err(ModelError::invalid_content(
                        node.type_name(),
                        format!("{} is not inline", child.type_name()),
                    ));
                }
            }
            NodeKind::Container { min } => {
                if node.child_count() < min {
                    return Err(ModelError::invalid_content(
                        node.type_name(),
                        format!("expected at least {} child blocks", min),
                    ));
                }
                if let Some(child) = node.content().iter().find(|c| c.is_text()) {
                    return Err(ModelError::invalid_content(
                        node.type_name(),
                        format!("{} is not a block", child.type_name()),
                    ));
                }
            }
        }

        node.content().iter().try_for_each(|child| self.check(child))
    }

    /// Check a whole document: a valid tree rooted at the top node type
    pub fn check_document(&self, doc: &Node) -> ModelResult<()> {
        if doc.type_name() != self.top {
            return Err(ModelError::invalid_content(
                doc.type_name(),
                format!("a document must be a {} node", self.top),
            ));
        }
        self.check(doc)
    }

    /// Deserialize a node from its JSON form and check it
    pub fn node_from_json(&self, json: &Value) -> ModelResult<Node> {
        let node = self.parse_json(json)?;
        self.check(&node)?;
        Ok(node)
    }

    /// Deserialize a whole document, rooted at the top node type
    pub fn document_from_json(&self, json: &Value) -> ModelResult<Node> {
        let doc = self.parse_json(json)?;
        self.check_document(&doc)?;
        Ok(doc)
    }

    fn parse_json(&self, json: &Value) -> ModelResult<Node> {
        let object = json
            .as_object()
            .ok_or_else(|| ModelError::invalid_json("node must be an object"))?;

        let type_name = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| ModelError::invalid_json("node is missing a \"type\" string"))?;
        let node_type = self.node_type(type_name)?.clone();

        if node_type.is_text() {
            let text = object
                .get("text")
                .and_then(Value::as_str)
                .ok_or_else(|| ModelError::invalid_json("text node is missing \"text\""))?;
            return Ok(Node::new_text(node_type, text.to_string()));
        }

        let content = match object.get("content") {
            None => Vec::new(),
            Some(Value::Array(children)) => children
                .iter()
                .map(|child| self.parse_json(child))
                .collect::<ModelResult<Vec<_>>>()?,
            Some(_) => return Err(ModelError::invalid_json("\"content\" must be an array")),
        };

        Ok(Node::new(node_type, content))
    }
}
