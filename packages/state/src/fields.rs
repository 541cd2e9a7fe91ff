//! Built-in fields

use crate::{Action, EditorState, FieldError, FieldResult, JsonField, StateConfig, StateField};
use serde_json::Value;

/// Counts every action the state has seen since it was initialized
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionCounter;

impl StateField for ActionCounter {
    type Value = u64;

    fn init(&self, _config: &StateConfig) -> FieldResult<u64> {
        Ok(0)
    }

    fn apply_action(
        &self,
        _action: &Action,
        count: &u64,
        _state: &EditorState,
    ) -> FieldResult<u64> {
        Ok(count + 1)
    }

    fn json(&self) -> Option<&dyn JsonField<u64>> {
        Some(self)
    }
}

impl JsonField<u64> for ActionCounter {
    fn to_json(&self, count: &u64) -> FieldResult<Value> {
        Ok(Value::from(*count))
    }

    fn from_json(
        &self,
        _config: &StateConfig,
        json: &Value,
        _state: &EditorState,
    ) -> FieldResult<u64> {
        json.as_u64()
            .ok_or_else(|| FieldError::message(format!("expected a count, found {}", json)))
    }
}

/// Kind of the most recent action; not persisted
#[derive(Debug, Clone, Copy, Default)]
pub struct LastAction;

impl StateField for LastAction {
    type Value = Option<String>;

    fn init(&self, _config: &StateConfig) -> FieldResult<Option<String>> {
        Ok(None)
    }

    fn apply_action(
        &self,
        action: &Action,
        _previous: &Option<String>,
        _state: &EditorState,
    ) -> FieldResult<Option<String>> {
        Ok(Some(action.kind().to_string()))
    }
}
