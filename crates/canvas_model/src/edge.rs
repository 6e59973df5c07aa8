//! Edge shapes - connections between two endpoints with bend points

use crate::{Bounds, Docker, Shape, ShapeId, Stencil};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Minimum number of dockers an edge must always hold (its two endpoints)
pub const MIN_DOCKERS: usize = 2;

/// Which end of an edge an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeEnd {
    Source,
    Target,
}

/// An edge connecting two endpoints.
///
/// The docker sequence is ordered: the first and last dockers are the
/// source and target endpoints, interior dockers are user-placed bend
/// points. The sequence never drops below [`MIN_DOCKERS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeShape {
    id: ShapeId,
    parent: Option<ShapeId>,
    pub stencil: Stencil,
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
    dockers: Vec<Docker>,
}

impl EdgeShape {
    /// Create an edge from its two endpoint dockers
    pub fn new(stencil: Stencil, source: Docker, target: Docker) -> Self {
        Self::with_id(ShapeId::new(), stencil, source, target)
    }

    /// Create an edge with a known ID (snapshot restore)
    pub fn with_id(id: ShapeId, stencil: Stencil, source: Docker, target: Docker) -> Self {
        Self {
            id,
            parent: None,
            stencil,
            properties: HashMap::new(),
            dockers: vec![source, target],
        }
    }

    pub fn dockers(&self) -> &[Docker] {
        &self.dockers
    }

    pub(crate) fn dockers_mut(&mut self) -> &mut Vec<Docker> {
        &mut self.dockers
    }

    /// The source endpoint docker
    pub fn source(&self) -> &Docker {
        &self.dockers[0]
    }

    /// The target endpoint docker
    pub fn target(&self) -> &Docker {
        &self.dockers[self.dockers.len() - 1]
    }

    /// Docker index for an edge end
    pub fn end_index(&self, end: EdgeEnd) -> usize {
        match end {
            EdgeEnd::Source => 0,
            EdgeEnd::Target => self.dockers.len() - 1,
        }
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.properties.insert(key.into(), value);
    }

    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.get(key)
    }

    pub fn remove_property(&mut self, key: &str) -> Option<serde_json::Value> {
        self.properties.remove(key)
    }
}

impl Shape for EdgeShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn stencil(&self) -> &Stencil {
        &self.stencil
    }

    /// Derived bounds: the smallest rectangle enclosing all docker positions
    fn bounds(&self) -> Bounds {
        let points: Vec<_> = self.dockers.iter().map(|d| d.position).collect();
        Bounds::enclosing(&points)
    }

    fn parent(&self) -> Option<ShapeId> {
        self.parent
    }

    fn set_parent(&mut self, parent: Option<ShapeId>) {
        self.parent = parent;
    }
}
