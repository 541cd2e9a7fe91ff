//! # Scribe State
//!
//! Immutable, plugin-extensible editor state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Node tree, Schema, positions         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ transform: Steps, step maps, Transform      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ state: EditorState                          │
//! │  - document + selection + plugin fields     │
//! │  - apply_action → new state                 │
//! │  - to_json / from_json                      │
//! │  - reconfigure with another plugin set      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **States are values**: nothing is mutated after construction
//! 2. **Every field sees every action**: relevance is the field's business
//! 3. **Fields are typed, storage is not**: plugins pick their value type
//! 4. **Reconfiguring resets fields**: values never leak across plugin sets
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scribe_state::{Action, EditorState, Plugin, SerializeOptions, StateConfig};
//! use scribe_state::fields::ActionCounter;
//! use scribe_model::Schema;
//!
//! let counter = Plugin::with_field("count", ActionCounter);
//! let config = StateConfig::new().schema(Schema::basic()).plugins(vec![counter]);
//!
//! let state = EditorState::create(&config)?;
//! let next = state.apply_action(&state.tr().insert_text("hi")?.action())?;
//! assert_eq!(next.field::<u64>("count"), Some(&1));
//!
//! let json = next.to_json(&SerializeOptions::default())?;
//! let copy = EditorState::from_json(&config, &json)?;
//! ```

mod action;
mod config;
mod editor_transform;
mod error;
mod field;
pub mod fields;
mod plugin;
mod reconfigure;
pub mod selection;
mod serialize;
mod state;

pub use action::Action;
pub use config::{ReconfigureConfig, SerializeOptions, StateConfig};
pub use editor_transform::EditorTransform;
pub use error::{ConfigurationError, FieldError, FieldResult, StateError, StateResult};
pub use field::{JsonField, StateField};
pub use plugin::{Plugin, PluginId, PluginSpec, RESERVED_KEYS};
pub use selection::{Selection, SelectionError};
pub use state::EditorState;

// Re-export the collaborator crates for convenience
pub use scribe_model as model;
pub use scribe_transform as transform;
