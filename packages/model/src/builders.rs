//! Shorthand constructors over [`Schema::basic`], for tests and fixtures.
//!
//! These panic on invalid content; use [`Schema::node`] when the input is
//! not known to be valid.

use crate::{Node, Schema};

pub fn doc(content: Vec<Node>) -> Node {
    build("doc", content)
}

/// Paragraph holding `text`; an empty string gives an empty paragraph
pub fn p(text: &str) -> Node {
    let schema = Schema::basic();
    let content = if text.is_empty() {
        Vec::new()
    } else {
        vec![Node::new_text(schema.text_type().clone(), text.to_string())]
    };
    build("paragraph", content)
}

pub fn blockquote(content: Vec<Node>) -> Node {
    build("blockquote", content)
}

fn build(name: &str, content: Vec<Node>) -> Node {
    match Schema::basic().node(name, content) {
        Ok(node) => node,
        Err(e) => panic!("invalid {} fixture: {}", name, e),
    }
}
