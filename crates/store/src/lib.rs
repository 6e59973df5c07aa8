//! Store - Snapshot format and diagram persistence boundary
//!
//! This crate converts the in-memory shape graph to and from its
//! persisted JSON representation with atomic replace-or-reject load
//! validation. Transport (where the JSON goes) belongs to external
//! collaborators.

mod error;
mod format;
mod serializer;
mod snapshot;

pub use error::*;
pub use format::*;
pub use serializer::*;
pub use snapshot::*;
