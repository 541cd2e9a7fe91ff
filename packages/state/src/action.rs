//! # Actions
//!
//! An action is a request to move from one state to the next. Only
//! `transform` and `selection` actions touch the document or selection;
//! every action, whatever its kind, is shown to every plugin field.

use crate::Selection;
use scribe_transform::Transform;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Apply a document change
    Transform {
        transform: Arc<Transform>,

        /// Selection to use afterwards; mapped from the old one when absent
        selection: Option<Selection>,
    },

    /// Replace the selection
    Selection(Selection),

    /// Anything else, identified by its kind
    Custom { kind: String, payload: Value },
}

impl Action {
    pub const TRANSFORM: &'static str = "transform";
    pub const SELECTION: &'static str = "selection";

    pub fn transform(transform: Transform) -> Self {
        Action::Transform {
            transform: Arc::new(transform),
            selection: None,
        }
    }

    pub fn custom(kind: impl Into<String>) -> Self {
        Action::Custom {
            kind: kind.into(),
            payload: Value::Null,
        }
    }

    pub fn custom_with(kind: impl Into<String>, payload: Value) -> Self {
        Action::Custom {
            kind: kind.into(),
            payload,
        }
    }

    /// Tag identifying the kind of action
    pub fn kind(&self) -> &str {
        match self {
            Action::Transform { .. } => Self::TRANSFORM,
            Action::Selection(_) => Self::SELECTION,
            Action::Custom { kind, .. } => kind,
        }
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            Action::Custom { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn as_transform(&self) -> Option<&Transform> {
        match self {
            Action::Transform { transform, .. } => Some(transform),
            _ => None,
        }
    }
}
