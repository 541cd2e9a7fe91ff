use scribe_model::ModelError;
use thiserror::Error;

pub type TransformResult<T> = Result<T, TransformError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("Invalid range {from}..{to}")]
    InvalidRange { from: usize, to: usize },

    #[error("Position {pos} is not inside a textblock")]
    NotInline { pos: usize },

    #[error("Range {from}..{to} spans more than one textblock")]
    CrossesTextblock { from: usize, to: usize },

    #[error("Document error: {0}")]
    Model(#[from] ModelError),
}
