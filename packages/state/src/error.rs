//! Error types for the editor state

use crate::selection::SelectionError;
use scribe_model::ModelError;
use scribe_transform::TransformError;
use thiserror::Error;

pub type StateResult<T> = Result<T, StateError>;

/// Result type for field hooks
pub type FieldResult<T> = Result<T, FieldError>;

#[derive(Error, Debug)]
pub enum StateError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Invalid selection: {0}")]
    InvalidSelection(#[from] SelectionError),

    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("Document error: {0}")]
    Model(#[from] ModelError),

    #[error("Field '{key}' failed: {source}")]
    Field {
        key: String,
        #[source]
        source: FieldError,
    },
}

impl StateError {
    pub(crate) fn field(key: &str) -> impl FnOnce(FieldError) -> StateError + '_ {
        move |source| StateError::Field {
            key: key.to_string(),
            source,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Either a schema or a document is required")]
    MissingDocument,

    #[error("A schema is required to deserialize a document")]
    MissingSchema,

    #[error("Serialized state has no \"document\"")]
    MissingSerializedDocument,

    #[error("Serialized state must be a JSON object")]
    NotAnObject,

    #[error("Field key '{0}' is declared by more than one plugin")]
    DuplicateFieldKey(String),

    #[error("Plugin {0} appears more than once")]
    DuplicatePlugin(String),

    #[error("Field key '{0}' is reserved")]
    ReservedFieldKey(String),
}

/// Failure raised by a field hook
#[derive(Error, Debug)]
pub enum FieldError {
    #[error("{0}")]
    Message(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Stored value is not a {expected}")]
    TypeMismatch { expected: &'static str },

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl FieldError {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}
