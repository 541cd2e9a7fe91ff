use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),

    #[error("Invalid content for {node_type}: {reason}")]
    InvalidContent { node_type: String, reason: String },

    #[error("Invalid document JSON: {0}")]
    InvalidJson(String),

    #[error("Position {pos} out of range (content size {size})")]
    PositionOutOfRange { pos: usize, size: usize },

    #[error("Child index {index} out of range for {node_type}")]
    ChildOutOfRange { node_type: String, index: usize },
}

impl ModelError {
    pub fn invalid_content(node_type: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidContent {
            node_type: node_type.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self::InvalidJson(message.into())
    }
}
