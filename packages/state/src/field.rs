//! # State Fields
//!
//! The contract a plugin implements to keep its own value inside the
//! editor state.
//!
//! A field is initialized once per state construction and recomputed on
//! every action. Its value type is chosen by the field; the state stores it
//! type-erased and hands it back typed through [`EditorState::field`].
//!
//! Serialization is a separate capability: a field that returns `None` from
//! [`StateField::json`] is left out of serialized states and re-initialized
//! when a state is deserialized.
//!
//! ```rust,ignore
//! struct WordCount;
//!
//! impl StateField for WordCount {
//!     type Value = usize;
//!
//!     fn init(&self, config: &StateConfig) -> FieldResult<usize> {
//!         Ok(0)
//!     }
//!
//!     fn apply_action(&self, _: &Action, _: &usize, state: &EditorState) -> FieldResult<usize> {
//!         Ok(state.doc().text_content().split_whitespace().count())
//!     }
//! }
//! ```

use crate::{Action, EditorState, FieldError, FieldResult, StateConfig};
use serde_json::Value;
use std::any::{type_name, Any};
use std::sync::Arc;

/// Plugin-defined state value
pub trait StateField: Send + Sync + 'static {
    type Value: Send + Sync + 'static;

    /// Initial value; must not depend on other fields
    fn init(&self, config: &StateConfig) -> FieldResult<Self::Value>;

    /// Next value after `action`
    ///
    /// `state` is the state being built: its document and selection are
    /// already updated, as are the fields of earlier plugins.
    fn apply_action(
        &self,
        action: &Action,
        value: &Self::Value,
        state: &EditorState,
    ) -> FieldResult<Self::Value>;

    /// JSON capability, if the field can be serialized
    fn json(&self) -> Option<&dyn JsonField<Self::Value>> {
        None
    }
}

/// Serialization hooks for a field; `from_json` must invert `to_json`
pub trait JsonField<V>: Send + Sync {
    fn to_json(&self, value: &V) -> FieldResult<Value>;

    /// `state` holds the document, selection and already restored fields
    fn from_json(&self, config: &StateConfig, json: &Value, state: &EditorState) -> FieldResult<V>;
}

pub(crate) type FieldValue = Arc<dyn Any + Send + Sync>;

/// Object-safe view of a [`StateField`]
pub(crate) trait ErasedField: Send + Sync {
    fn init(&self, config: &StateConfig) -> FieldResult<FieldValue>;

    fn apply_action(
        &self,
        action: &Action,
        value: &FieldValue,
        state: &EditorState,
    ) -> FieldResult<FieldValue>;

    /// `None` when the field has no JSON capability
    fn to_json(&self, value: &FieldValue) -> Option<FieldResult<Value>>;

    /// `None` when the field has no JSON capability
    fn from_json(
        &self,
        config: &StateConfig,
        json: &Value,
        state: &EditorState,
    ) -> Option<FieldResult<FieldValue>>;

    fn value_type(&self) -> &'static str;
}

pub(crate) struct FieldAdapter<F>(pub F);

impl<F: StateField> ErasedField for FieldAdapter<F> {
    fn init(&self, config: &StateConfig) -> FieldResult<FieldValue> {
        Ok(Arc::new(self.0.init(config)?) as FieldValue)
    }

    fn apply_action(
        &self,
        action: &Action,
        value: &FieldValue,
        state: &EditorState,
    ) -> FieldResult<FieldValue> {
        let previous = downcast::<F::Value>(value)?;
        Ok(Arc::new(self.0.apply_action(action, previous, state)?) as FieldValue)
    }

    fn to_json(&self, value: &FieldValue) -> Option<FieldResult<Value>> {
        let json = self.0.json()?;
        Some(downcast::<F::Value>(value).and_then(|value| json.to_json(value)))
    }

    fn from_json(
        &self,
        config: &StateConfig,
        json: &Value,
        state: &EditorState,
    ) -> Option<FieldResult<FieldValue>> {
        let hooks = self.0.json()?;
        Some(
            hooks
                .from_json(config, json, state)
                .map(|value| Arc::new(value) as FieldValue),
        )
    }

    fn value_type(&self) -> &'static str {
        type_name::<F::Value>()
    }
}

fn downcast<T: Any>(value: &FieldValue) -> FieldResult<&T> {
    (**value)
        .downcast_ref::<T>()
        .ok_or(FieldError::TypeMismatch {
            expected: type_name::<T>(),
        })
}
