//! Node shapes - boxes that own magnets and may contain child shapes

use crate::{Bounds, Magnet, MagnetAnchor, Point, Shape, ShapeId, Stencil};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A node in the diagram: a stencil-typed box with magnets.
///
/// Child membership is stored by id; ownership semantics (cascade on
/// delete, cycle rejection) are enforced by the graph, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeShape {
    id: ShapeId,
    parent: Option<ShapeId>,
    children: Vec<ShapeId>,
    pub stencil: Stencil,
    pub bounds: Bounds,
    /// Opaque key-value pairs owned by external stencil logic
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
    /// Attachment points; positions derive from `bounds` on demand
    pub magnets: Vec<Magnet>,
}

impl NodeShape {
    /// Create a node with the default magnet set
    pub fn new(stencil: Stencil, bounds: Bounds) -> Self {
        Self::with_id(ShapeId::new(), stencil, bounds)
    }

    /// Create a node with a known ID (snapshot restore)
    pub fn with_id(id: ShapeId, stencil: Stencil, bounds: Bounds) -> Self {
        Self {
            id,
            parent: None,
            children: Vec::new(),
            stencil,
            bounds,
            properties: HashMap::new(),
            magnets: Magnet::default_set(),
        }
    }

    /// Add a child shape ID
    pub fn add_child(&mut self, child_id: ShapeId) {
        self.children.push(child_id);
    }

    /// Insert a child at a specific index
    pub fn insert_child(&mut self, index: usize, child_id: ShapeId) {
        self.children.insert(index.min(self.children.len()), child_id);
    }

    /// Remove a child by ID
    pub fn remove_child(&mut self, child_id: ShapeId) -> bool {
        if let Some(pos) = self.children.iter().position(|&id| id == child_id) {
            self.children.remove(pos);
            true
        } else {
            false
        }
    }

    /// Add a free magnet at fractional offsets of the bounds
    pub fn add_free_magnet(&mut self, fx: f64, fy: f64) -> MagnetAnchor {
        let anchor = MagnetAnchor::Free { fx, fy };
        self.magnets.push(Magnet::new(anchor));
        anchor
    }

    /// Look up a magnet by its anchor
    pub fn magnet(&self, anchor: MagnetAnchor) -> Option<&Magnet> {
        self.magnets.iter().find(|m| m.anchor == anchor)
    }

    /// Absolute position of the magnet at `anchor`, for the current bounds
    pub fn magnet_position(&self, anchor: MagnetAnchor) -> Option<Point> {
        self.magnet(anchor).map(|m| m.position(&self.bounds))
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

impl Shape for NodeShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn stencil(&self) -> &Stencil {
        &self.stencil
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn parent(&self) -> Option<ShapeId> {
        self.parent
    }

    fn set_parent(&mut self, parent: Option<ShapeId>) {
        self.parent = parent;
    }

    fn children(&self) -> &[ShapeId] {
        &self.children
    }

    fn can_have_children(&self) -> bool {
        true
    }
}
