//! # Editor Transform
//!
//! A [`Transform`] bound to the state it started from, so edits can be
//! expressed relative to the current selection.
//!
//! ```rust,ignore
//! let action = state.tr().insert_text("hi")?.action();
//! let next = state.apply_action(&action)?;
//! ```

use crate::{Action, EditorState, Selection};
use scribe_model::Node;
use scribe_transform::{Mapping, Transform, TransformResult};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct EditorTransform {
    transform: Transform,

    /// Selection after the edits so far
    selection: Selection,

    /// Whether `selection` was placed by an edit rather than mapped
    selection_set: bool,
}

impl EditorTransform {
    pub fn new(state: &EditorState) -> Self {
        Self {
            transform: Transform::new(state.doc().clone()),
            selection: state.selection(),
            selection_set: false,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Replace the selection with `text`, leaving the cursor after it
    pub fn insert_text(self, text: &str) -> TransformResult<Self> {
        let (from, to) = (self.selection.from(), self.selection.to());
        let tr = self.replace_with_text(from, to, text)?;
        let end = from + text.chars().count();
        Ok(tr.place_cursor(end))
    }

    /// Remove the selected content, leaving the cursor where it started
    pub fn delete_selection(self) -> TransformResult<Self> {
        let (from, to) = (self.selection.from(), self.selection.to());
        let tr = self.delete(from, to)?;
        Ok(tr.place_cursor(from))
    }

    pub fn replace_with_text(mut self, from: usize, to: usize, text: &str) -> TransformResult<Self> {
        let steps = self.transform.steps().len();
        self.transform.replace_with_text(from, to, text)?;
        self.map_selection(steps);
        Ok(self)
    }

    pub fn delete(mut self, from: usize, to: usize) -> TransformResult<Self> {
        let steps = self.transform.steps().len();
        self.transform.delete(from, to)?;
        self.map_selection(steps);
        Ok(self)
    }

    /// Select a range in the transformed document
    pub fn set_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self.selection_set = true;
        self
    }

    fn place_cursor(mut self, pos: usize) -> Self {
        self.selection = Selection::new(pos, pos);
        self.selection_set = true;
        self
    }

    /// Carry the selection through the steps added since `since`
    fn map_selection(&mut self, since: usize) {
        let mut mapping = Mapping::new();
        for map in &self.transform.mapping().maps()[since..] {
            mapping.push(map.clone());
        }
        self.selection = self.selection.map(&mapping);
    }

    pub fn doc(&self) -> &Node {
        self.transform.doc()
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Action carrying the transform, and the selection if an edit placed it
    pub fn action(self) -> Action {
        Action::Transform {
            transform: Arc::new(self.transform),
            selection: self.selection_set.then_some(self.selection),
        }
    }
}
