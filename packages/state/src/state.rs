//! # Editor State
//!
//! Immutable snapshot of an editor: document, selection, and the values of
//! every plugin field.
//!
//! ## Lifecycle
//!
//! ```text
//! create ──→ State ──apply_action──→ State ──reconfigure──→ State
//!              │                       │
//!              └── to_json / from_json ┘
//! ```
//!
//! A state is never modified after construction. Deriving a new one leaves
//! the old one intact, so any number of versions can be held at once.
//!
//! ## Invariants
//!
//! - The selection is valid in the document.
//! - The field keys are exactly the keys declared by the plugin list.

use crate::field::FieldValue;
use crate::plugin::validate_plugins;
use crate::{
    Action, ConfigurationError, EditorTransform, FieldError, Plugin, PluginId, Selection,
    StateConfig, StateError, StateResult,
};
use scribe_model::{Node, Schema};
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// A field's value and the plugin that owns it
#[derive(Clone)]
pub(crate) struct FieldSlot {
    pub(crate) plugin: PluginId,
    pub(crate) value: FieldValue,
}

/// Field values keyed by field key
pub(crate) type FieldMap = BTreeMap<String, FieldSlot>;

#[derive(Clone)]
pub struct EditorState {
    pub(crate) doc: Arc<Node>,
    pub(crate) selection: Selection,
    pub(crate) schema: Option<Arc<Schema>>,
    pub(crate) plugins: Arc<[Plugin]>,
    pub(crate) fields: FieldMap,
}

impl EditorState {
    /// Build a state from a configuration
    ///
    /// The document is `config.doc` if given, else the schema's default
    /// document. Every field is initialized in plugin order.
    #[instrument(skip_all, fields(plugins = config.plugins.len()))]
    pub fn create(config: &StateConfig) -> StateResult<Self> {
        validate_plugins(&config.plugins)?;

        let doc = match (&config.doc, &config.schema) {
            (Some(doc), Some(schema)) => {
                schema.check_document(doc)?;
                doc.clone()
            }
            (Some(doc), None) => doc.clone(),
            (None, Some(schema)) => Arc::new(schema.create_default()),
            (None, None) => return Err(ConfigurationError::MissingDocument.into()),
        };

        let selection = match config.selection {
            Some(selection) => {
                selection.validate(&doc)?;
                selection
            }
            None => Selection::at_start(&doc)?,
        };

        let plugins: Arc<[Plugin]> = config.plugins.as_slice().into();
        let mut state = Self::bare(doc, selection, config.schema.clone(), plugins);
        state.init_fields(config)?;

        debug!(
            fields = state.fields.len(),
            doc_size = state.doc.content_size(),
            "Created editor state"
        );
        Ok(state)
    }

    /// State without fields; callers fill them in plugin order
    pub(crate) fn bare(
        doc: Arc<Node>,
        selection: Selection,
        schema: Option<Arc<Schema>>,
        plugins: Arc<[Plugin]>,
    ) -> Self {
        Self {
            doc,
            selection,
            schema,
            plugins,
            fields: FieldMap::new(),
        }
    }

    /// Run `init` for every field-declaring plugin, in plugin order
    pub(crate) fn init_fields(&mut self, config: &StateConfig) -> StateResult<()> {
        for plugin in self.plugins.clone().iter() {
            let Some(field) = plugin.field() else {
                continue;
            };
            let value = field
                .descriptor
                .init(config)
                .map_err(StateError::field(&field.key))?;
            trace!(key = %field.key, plugin = %plugin.id(), "Initialized field");
            self.insert_field(plugin, value);
        }
        Ok(())
    }

    pub(crate) fn insert_field(&mut self, plugin: &Plugin, value: FieldValue) {
        if let Some(key) = plugin.field_key() {
            self.fields.insert(
                key.to_string(),
                FieldSlot {
                    plugin: plugin.id(),
                    value,
                },
            );
        }
    }

    /// Produce the state that follows `action`
    ///
    /// The receiver is left untouched. On error no state is produced.
    #[instrument(skip_all, fields(kind = action.kind()))]
    pub fn apply_action(&self, action: &Action) -> StateResult<EditorState> {
        let (doc, selection) = match action {
            Action::Transform {
                transform,
                selection,
            } => {
                let doc = Arc::new(transform.apply_to(&self.doc)?);
                let selection = match selection {
                    Some(selection) => *selection,
                    None => self.selection.map(transform.mapping()),
                };
                selection.validate(&doc)?;
                (doc, selection)
            }
            Action::Selection(selection) => {
                selection.validate(&self.doc)?;
                (self.doc.clone(), *selection)
            }
            Action::Custom { .. } => (self.doc.clone(), self.selection),
        };

        let mut next = Self::bare(doc, selection, self.schema.clone(), self.plugins.clone());

        for plugin in self.plugins.iter() {
            let Some(field) = plugin.field() else {
                continue;
            };
            let previous = self
                .fields
                .get(&field.key)
                .map(|slot| &slot.value)
                .ok_or_else(|| StateError::Field {
                    key: field.key.clone(),
                    source: FieldError::message("no stored value"),
                })?;
            let value = field
                .descriptor
                .apply_action(action, previous, &next)
                .map_err(StateError::field(&field.key))?;
            next.insert_field(plugin, value);
        }

        debug!(
            doc_changed = !Arc::ptr_eq(&self.doc, &next.doc),
            selection = ?next.selection,
            "Applied action"
        );
        Ok(next)
    }

    /// Start a document change from this state
    pub fn tr(&self) -> EditorTransform {
        EditorTransform::new(self)
    }

    pub fn doc(&self) -> &Node {
        &self.doc
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn schema(&self) -> Option<&Arc<Schema>> {
        self.schema.as_ref()
    }

    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    /// Typed value of a field; `None` if absent or of another type
    pub fn field<T: Any>(&self, key: &str) -> Option<&T> {
        (*self.fields.get(key)?.value).downcast_ref::<T>()
    }

    /// Typed value of the field declared by `plugin`
    pub fn plugin_field<T: Any>(&self, plugin: &Plugin) -> Option<&T> {
        let slot = self.fields.get(plugin.field_key()?)?;
        if slot.plugin != plugin.id() {
            return None;
        }
        (*slot.value).downcast_ref::<T>()
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Field keys in sorted order
    pub fn field_keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl fmt::Debug for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorState")
            .field("doc", &format_args!("{}", self.doc))
            .field("selection", &self.selection)
            .field("plugins", &self.plugins)
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::ActionCounter;
    use scribe_model::builders::{doc, p};

    fn assert_send_sync<T: Send + Sync + Clone>() {}

    #[test]
    fn test_state_is_shareable_across_threads() {
        assert_send_sync::<EditorState>();
        assert_send_sync::<Action>();
        assert_send_sync::<Plugin>();
    }

    #[test]
    fn test_create_requires_document_or_schema() {
        let err = EditorState::create(&StateConfig::new()).unwrap_err();
        assert!(matches!(
            err,
            StateError::Configuration(ConfigurationError::MissingDocument)
        ));
    }

    #[test]
    fn test_explicit_doc_wins_over_schema() {
        let config = StateConfig::new()
            .schema(Schema::basic())
            .doc(doc(vec![p("kept")]));
        let state = EditorState::create(&config).unwrap();
        assert_eq!(state.doc(), &doc(vec![p("kept")]));
    }

    #[test]
    fn test_doc_checked_against_schema() {
        let other = Schema::new(
            "doc",
            vec![
                scribe_model::NodeType::new("doc", scribe_model::NodeKind::Container { min: 1 }),
                scribe_model::NodeType::new("line", scribe_model::NodeKind::Textblock),
                scribe_model::NodeType::new("text", scribe_model::NodeKind::Text),
            ],
        )
        .unwrap();
        let config = StateConfig::new()
            .schema(Arc::new(other))
            .doc(doc(vec![p("x")]));
        assert!(matches!(
            EditorState::create(&config),
            Err(StateError::Model(_))
        ));
    }

    #[test]
    fn test_plugin_field_checks_identity() {
        let counter = Plugin::with_field("count", ActionCounter);
        let impostor = Plugin::with_field("count", ActionCounter);
        let state = EditorState::create(
            &StateConfig::new()
                .schema(Schema::basic())
                .plugins(vec![counter.clone()]),
        )
        .unwrap();

        assert_eq!(state.plugin_field::<u64>(&counter), Some(&0));
        assert_eq!(state.plugin_field::<u64>(&impostor), None);
    }

    #[test]
    fn test_wrong_type_reads_none() {
        let state = EditorState::create(
            &StateConfig::new()
                .schema(Schema::basic())
                .plugins(vec![Plugin::with_field("count", ActionCounter)]),
        )
        .unwrap();

        assert_eq!(state.field::<u64>("count"), Some(&0));
        assert_eq!(state.field::<String>("count"), None);
        assert_eq!(state.field::<u64>("missing"), None);
    }
}
