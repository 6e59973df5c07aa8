//! Error types for editing operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    #[error("Model error: {0}")]
    Model(#[from] canvas_model::ModelError),

    #[error("Cannot roll back a command that has not executed")]
    MissingCapture,

    #[error("Batch must contain at least one command")]
    EmptyBatch,

    #[error("Undo stack is empty")]
    UndoStackEmpty,

    #[error("Redo stack is empty")]
    RedoStackEmpty,
}

pub type Result<T> = std::result::Result<T, EditError>;
