//! Configuration for building, reconfiguring and serializing states

use crate::{Plugin, Selection};
use scribe_model::{Node, Schema};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Options for [`EditorState::create`](crate::EditorState::create) and
/// [`EditorState::from_json`](crate::EditorState::from_json)
///
/// Field `init` hooks receive this configuration as-is.
#[derive(Debug, Clone, Default)]
pub struct StateConfig {
    /// Used for the default document when `doc` is absent, and for
    /// deserialization
    pub schema: Option<Arc<Schema>>,

    /// Initial document; takes precedence over the schema's default
    pub doc: Option<Arc<Node>>,

    /// Initial selection; defaults to a cursor at the first cursor position
    pub selection: Option<Selection>,

    pub plugins: Vec<Plugin>,
}

impl StateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema(mut self, schema: Arc<Schema>) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn doc(mut self, doc: Node) -> Self {
        self.doc = Some(Arc::new(doc));
        self
    }

    pub fn selection(mut self, selection: Selection) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn plugins(mut self, plugins: Vec<Plugin>) -> Self {
        self.plugins = plugins;
        self
    }
}

/// Options for [`EditorState::reconfigure`](crate::EditorState::reconfigure)
#[derive(Debug, Clone, Default)]
pub struct ReconfigureConfig {
    pub plugins: Vec<Plugin>,
}

impl ReconfigureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plugins(mut self, plugins: Vec<Plugin>) -> Self {
        self.plugins = plugins;
        self
    }
}

/// Options for [`EditorState::to_json`](crate::EditorState::to_json)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Field keys to leave out; the document and selection are always kept
    pub ignore: BTreeSet<String>,
}

impl SerializeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(keys.into_iter().map(Into::into));
        self
    }
}
