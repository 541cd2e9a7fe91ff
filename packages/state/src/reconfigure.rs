//! # Reconfiguration
//!
//! Swap a state's plugin set. The document and selection carry over; every
//! field is initialized again, including fields of plugins that were
//! already present. A value may have been shaped by plugins that are gone,
//! so only a fresh `init` is known to be consistent.

use crate::plugin::validate_plugins;
use crate::{EditorState, ReconfigureConfig, StateConfig, StateResult};
use tracing::{debug, instrument};

impl EditorState {
    /// New state with the same document and selection and `config.plugins`
    #[instrument(skip_all, fields(from = self.plugins.len(), to = config.plugins.len()))]
    pub fn reconfigure(&self, config: &ReconfigureConfig) -> StateResult<EditorState> {
        validate_plugins(&config.plugins)?;

        let init_config = StateConfig {
            schema: self.schema.clone(),
            doc: Some(self.doc.clone()),
            selection: Some(self.selection),
            plugins: config.plugins.clone(),
        };

        let mut state = EditorState::bare(
            self.doc.clone(),
            self.selection,
            self.schema.clone(),
            config.plugins.as_slice().into(),
        );
        state.init_fields(&init_config)?;

        debug!(fields = state.fields.len(), "Reconfigured editor state");
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use crate::fields::ActionCounter;
    use crate::{Action, EditorState, Plugin, ReconfigureConfig, StateConfig};
    use scribe_model::Schema;
    use std::sync::Arc;

    #[test]
    fn test_shares_document() {
        let state = EditorState::create(&StateConfig::new().schema(Schema::basic())).unwrap();
        let next = state.reconfigure(&ReconfigureConfig::new()).unwrap();
        assert!(Arc::ptr_eq(&state.doc, &next.doc));
        assert_eq!(state.schema(), next.schema());
    }

    #[test]
    fn test_kept_plugin_is_reset() {
        let counter = Plugin::with_field("count", ActionCounter);
        let state = EditorState::create(
            &StateConfig::new()
                .schema(Schema::basic())
                .plugins(vec![counter.clone()]),
        )
        .unwrap()
        .apply_action(&Action::custom("a"))
        .unwrap();
        assert_eq!(state.field::<u64>("count"), Some(&1));

        let same = state
            .reconfigure(&ReconfigureConfig::new().plugins(vec![counter]))
            .unwrap();
        assert_eq!(same.field::<u64>("count"), Some(&0));
    }
}
