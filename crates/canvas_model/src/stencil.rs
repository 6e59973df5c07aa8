//! Stencil references - opaque shape-kind descriptors

use serde::{Deserialize, Serialize};

/// Which shape variant a stencil may produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StencilKind {
    Node,
    Edge,
}

/// An opaque capability descriptor for a shape's kind.
///
/// The core never interprets `id`; external stencil-set logic owns its
/// meaning. `kind` only selects whether the stencil produces a node or an
/// edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stencil {
    pub id: String,
    pub kind: StencilKind,
}

impl Stencil {
    pub fn node(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: StencilKind::Node,
        }
    }

    pub fn edge(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: StencilKind::Edge,
        }
    }
}
