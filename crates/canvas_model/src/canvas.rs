//! Canvas - the complete mutable state of one editor session

use crate::{DiagramGraph, GroupRegistry};
use serde::{Deserialize, Serialize};

/// The shape graph plus the grouping index.
///
/// Owned exclusively by a single editor session; commands receive a
/// mutable reference to it and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub graph: DiagramGraph,
    pub groups: GroupRegistry,
}

impl Canvas {
    /// Create an empty canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a loaded graph; groups always start empty after a load
    pub fn from_graph(graph: DiagramGraph) -> Self {
        Self {
            graph,
            groups: GroupRegistry::new(),
        }
    }
}
