//! # Transform
//!
//! Accumulates steps against a starting document. Each step is applied
//! eagerly so later steps see the result of earlier ones; the collected
//! maps translate positions from the starting document to the final one.
//!
//! ```rust,ignore
//! let mut tr = Transform::new(doc(vec![p("")]));
//! tr.insert_text(1, "hi")?;
//! assert_eq!(tr.doc(), &doc(vec![p("hi")]));
//! assert_eq!(tr.mapping().map(1, Assoc::Right), 3);
//! ```

use crate::{Mapping, Step, TransformResult};
use scribe_model::Node;

/// A sequence of steps with their intermediate results
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    doc_before: Node,
    doc: Node,
    steps: Vec<Step>,
    mapping: Mapping,
}

impl Transform {
    pub fn new(doc: Node) -> Self {
        Self {
            doc_before: doc.clone(),
            doc,
            steps: Vec::new(),
            mapping: Mapping::new(),
        }
    }

    /// Apply a step; on failure the transform is left unchanged
    pub fn step(&mut self, step: Step) -> TransformResult<&mut Self> {
        self.doc = step.apply(&self.doc)?;
        self.mapping.push(step.get_map());
        self.steps.push(step);
        Ok(self)
    }

    pub fn replace_with_text(
        &mut self,
        from: usize,
        to: usize,
        text: impl Into<String>,
    ) -> TransformResult<&mut Self> {
        let text = text.into();
        if from == to && text.is_empty() {
            return Ok(self);
        }
        self.step(Step::replace(from, to, text))
    }

    pub fn insert_text(&mut self, pos: usize, text: impl Into<String>) -> TransformResult<&mut Self> {
        self.replace_with_text(pos, pos, text)
    }

    pub fn delete(&mut self, from: usize, to: usize) -> TransformResult<&mut Self> {
        self.replace_with_text(from, to, "")
    }

    pub fn doc_before(&self) -> &Node {
        &self.doc_before
    }

    /// Document after all steps
    pub fn doc(&self) -> &Node {
        &self.doc
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn doc_changed(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Replay the steps onto `doc`
    ///
    /// Reuses the computed result when `doc` is the document this transform
    /// was built against.
    pub fn apply_to(&self, doc: &Node) -> TransformResult<Node> {
        if doc == &self.doc_before {
            return Ok(self.doc.clone());
        }
        self.steps
            .iter()
            .try_fold(doc.clone(), |doc, step| step.apply(&doc))
    }
}
