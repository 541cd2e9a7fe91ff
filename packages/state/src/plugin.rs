//! # Plugins
//!
//! A plugin is an identity plus, optionally, one state field stored under a
//! field key. Clones share the identity; two separately constructed plugins
//! are never the same plugin, even if they are built from equal parts.

use crate::field::{ErasedField, FieldAdapter};
use crate::{ConfigurationError, StateField};
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Keys the serialized state uses for the document and selection
pub const RESERVED_KEYS: [&str; 2] = ["document", "selection"];

static NEXT_PLUGIN_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique plugin identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PluginId(u64);

impl fmt::Display for PluginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Field declared by a plugin
pub(crate) struct PluginField {
    pub(crate) key: String,
    pub(crate) descriptor: Box<dyn ErasedField>,
}

/// Parts of a plugin before it receives its identity
#[derive(Default)]
pub struct PluginSpec {
    name: Option<String>,
    field: Option<PluginField>,
}

impl PluginSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name used in logs and error messages
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declare the plugin's field; a later call replaces an earlier one
    pub fn field<F: StateField>(mut self, key: impl Into<String>, field: F) -> Self {
        self.field = Some(PluginField {
            key: key.into(),
            descriptor: Box::new(FieldAdapter(field)),
        });
        self
    }
}

struct PluginInner {
    id: PluginId,
    name: Option<String>,
    field: Option<PluginField>,
}

/// Extension unit held by an editor state
#[derive(Clone)]
pub struct Plugin {
    inner: Arc<PluginInner>,
}

impl Plugin {
    pub fn new(spec: PluginSpec) -> Self {
        Self {
            inner: Arc::new(PluginInner {
                id: PluginId(NEXT_PLUGIN_ID.fetch_add(1, Ordering::Relaxed)),
                name: spec.name,
                field: spec.field,
            }),
        }
    }

    /// Plugin declaring a single field
    pub fn with_field<F: StateField>(key: impl Into<String>, field: F) -> Self {
        Self::new(PluginSpec::new().field(key, field))
    }

    pub fn id(&self) -> PluginId {
        self.inner.id
    }

    pub fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    /// Key of the declared field, if any
    pub fn field_key(&self) -> Option<&str> {
        self.inner.field.as_ref().map(|f| f.key.as_str())
    }

    pub(crate) fn field(&self) -> Option<&PluginField> {
        self.inner.field.as_ref()
    }

    fn label(&self) -> String {
        match self.name() {
            Some(name) => format!("{} ({})", name, self.id()),
            None => self.id().to_string(),
        }
    }
}

impl PartialEq for Plugin {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Plugin {}

impl fmt::Debug for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Plugin");
        s.field("id", &self.id());
        if let Some(name) = self.name() {
            s.field("name", &name);
        }
        if let Some(field) = self.field() {
            s.field("field", &field.key);
            s.field("value_type", &field.descriptor.value_type());
        }
        s.finish()
    }
}

/// Check a plugin list before building fields from it
///
/// Rejects repeated plugins, field keys declared twice, and reserved keys.
pub(crate) fn validate_plugins(plugins: &[Plugin]) -> Result<(), ConfigurationError> {
    let mut ids = HashSet::new();
    let mut keys = HashSet::new();

    for plugin in plugins {
        if !ids.insert(plugin.id()) {
            return Err(ConfigurationError::DuplicatePlugin(plugin.label()));
        }
        if let Some(key) = plugin.field_key() {
            if RESERVED_KEYS.contains(&key) {
                return Err(ConfigurationError::ReservedFieldKey(key.to_string()));
            }
            if !keys.insert(key) {
                return Err(ConfigurationError::DuplicateFieldKey(key.to_string()));
            }
        }
    }

    Ok(())
}
