//! # State Serialization
//!
//! Converts states to and from plain JSON:
//!
//! ```text
//! {
//!   "document":  <document JSON>,
//!   "selection": { "anchor": 3, "head": 3 },
//!   "<fieldKey>": <field JSON>,     one per serializable field
//! }
//! ```
//!
//! Object keys are sorted, so the same state always serializes to the same
//! string. Fields without a JSON capability, and fields missing from the
//! input, are re-initialized on the way back in.

use crate::plugin::validate_plugins;
use crate::{
    ConfigurationError, EditorState, Selection, SerializeOptions, StateConfig, StateError,
    StateResult,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, instrument, trace};

impl EditorState {
    /// Serialize the document, the selection, and every serializable field
    /// not listed in `options.ignore`
    #[instrument(skip_all, fields(ignored = options.ignore.len()))]
    pub fn to_json(&self, options: &SerializeOptions) -> StateResult<Value> {
        let mut object = Map::new();
        object.insert("document".to_string(), self.doc.to_json());
        object.insert("selection".to_string(), self.selection.to_json());

        for plugin in self.plugins.iter() {
            let Some(field) = plugin.field() else {
                continue;
            };
            if options.ignore.contains(&field.key) {
                trace!(key = %field.key, "Skipping ignored field");
                continue;
            }
            let Some(slot) = self.fields.get(&field.key) else {
                continue;
            };
            if let Some(json) = field.descriptor.to_json(&slot.value) {
                let json = json.map_err(StateError::field(&field.key))?;
                object.insert(field.key.clone(), json);
            }
        }

        debug!(keys = object.len(), "Serialized editor state");
        Ok(Value::Object(object))
    }

    /// Rebuild a state from [`to_json`](Self::to_json) output
    ///
    /// `config.schema` is required to read the document. Fields are restored
    /// from their JSON when present and serializable, otherwise initialized.
    #[instrument(skip_all, fields(plugins = config.plugins.len()))]
    pub fn from_json(config: &StateConfig, json: &Value) -> StateResult<EditorState> {
        let object = json.as_object().ok_or(ConfigurationError::NotAnObject)?;
        let serialized_doc = object
            .get("document")
            .ok_or(ConfigurationError::MissingSerializedDocument)?;
        let schema = config
            .schema
            .as_ref()
            .ok_or(ConfigurationError::MissingSchema)?;

        validate_plugins(&config.plugins)?;

        let doc = Arc::new(schema.document_from_json(serialized_doc)?);
        let selection = match object.get("selection") {
            Some(selection) => {
                let selection = Selection::from_json(selection)?;
                selection.validate(&doc)?;
                selection
            }
            None => Selection::at_start(&doc)?,
        };

        let mut state = EditorState::bare(
            doc,
            selection,
            Some(schema.clone()),
            config.plugins.as_slice().into(),
        );

        for plugin in config.plugins.iter() {
            let Some(field) = plugin.field() else {
                continue;
            };
            let restored = object
                .get(&field.key)
                .and_then(|value| field.descriptor.from_json(config, value, &state));
            let value = match restored {
                Some(value) => value,
                None => field.descriptor.init(config),
            }
            .map_err(StateError::field(&field.key))?;
            state.insert_field(plugin, value);
        }

        debug!(fields = state.fields.len(), "Deserialized editor state");
        Ok(state)
    }
}
