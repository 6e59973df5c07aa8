//! Error types for shape graph operations

use crate::StencilKind;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Shape not found: {0}")]
    ShapeNotFound(Uuid),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Stencil kind mismatch: expected {expected:?}, found {found:?}")]
    StencilKindMismatch {
        expected: StencilKind,
        found: StencilKind,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
