//! Commands for creating, deleting, and transforming shapes

use crate::{Command, EditError, Result};
use canvas_model::{
    Bounds, Canvas, Docker, EdgeEndpoint, EdgeShape, Group, ModelError, NodeShape, Point,
    RemovalRecord, Shape, ShapeId, Stencil,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Create a node from a stencil at the given bounds.
///
/// The node (and its ID) is built at construction time, so the caller
/// knows the ID before submitting the batch and redo reproduces the
/// creation with the original ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNode {
    node: NodeShape,
    parent: Option<ShapeId>,
}

impl CreateNode {
    pub fn new(stencil: Stencil, bounds: Bounds) -> Self {
        Self {
            node: NodeShape::new(stencil, bounds),
            parent: None,
        }
    }

    /// Create the node as a child of an existing container node
    pub fn with_parent(mut self, parent: ShapeId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// The ID the node will have once the command executes
    pub fn id(&self) -> ShapeId {
        self.node.id()
    }
}

impl Command for CreateNode {
    fn execute(&mut self, canvas: &mut Canvas) -> Result<()> {
        if let Some(parent) = self.parent {
            if canvas.graph.get_node(parent).is_none() {
                return Err(ModelError::ShapeNotFound(parent.as_uuid()).into());
            }
        }
        let id = canvas.graph.insert_node(self.node.clone())?;
        if let Some(parent) = self.parent {
            canvas.graph.add_child(parent, id)?;
        }
        Ok(())
    }

    fn rollback(&mut self, canvas: &mut Canvas) -> Result<()> {
        canvas.graph.remove_shape(self.node.id())?;
        Ok(())
    }

    fn display_name(&self) -> &str {
        "Create Node"
    }
}

/// Create an edge between two endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEdge {
    id: ShapeId,
    pub stencil: Stencil,
    pub source: EdgeEndpoint,
    pub target: EdgeEndpoint,
    /// Captured on first execution so redo reuses the resolved dockers
    created: Option<EdgeShape>,
}

impl CreateEdge {
    pub fn new(stencil: Stencil, source: EdgeEndpoint, target: EdgeEndpoint) -> Self {
        Self {
            id: ShapeId::new(),
            stencil,
            source,
            target,
            created: None,
        }
    }

    /// The ID the edge will have once the command executes
    pub fn id(&self) -> ShapeId {
        self.id
    }
}

impl Command for CreateEdge {
    fn execute(&mut self, canvas: &mut Canvas) -> Result<()> {
        let edge = match &self.created {
            Some(edge) => edge.clone(),
            None => {
                let source = canvas.graph.resolve_endpoint(&self.source)?;
                let target = canvas.graph.resolve_endpoint(&self.target)?;
                let edge = EdgeShape::with_id(self.id, self.stencil.clone(), source, target);
                self.created = Some(edge.clone());
                edge
            }
        };
        canvas.graph.insert_edge(edge)?;
        Ok(())
    }

    fn rollback(&mut self, canvas: &mut Canvas) -> Result<()> {
        if self.created.is_none() {
            return Err(EditError::MissingCapture);
        }
        canvas.graph.remove_shape(self.id)?;
        Ok(())
    }

    fn display_name(&self) -> &str {
        "Create Edge"
    }
}

/// Delete a shape, cascading to its descendants.
///
/// Captures the full removal record plus the prior group list, so undo
/// restores the subtree, re-docks every docker the removal floated, and
/// brings back dissolved group memberships.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteShape {
    pub shape: ShapeId,
    removed: Option<RemovalRecord>,
    prior_groups: Option<Vec<Group>>,
}

impl DeleteShape {
    pub fn new(shape: ShapeId) -> Self {
        Self {
            shape,
            removed: None,
            prior_groups: None,
        }
    }
}

impl Command for DeleteShape {
    fn execute(&mut self, canvas: &mut Canvas) -> Result<()> {
        let record = canvas.graph.remove_shape(self.shape)?;
        let removed_ids: BTreeSet<ShapeId> = record.shapes.iter().map(|s| s.id()).collect();

        self.prior_groups = Some(canvas.groups.groups().to_vec());
        canvas.groups.remove_shapes(&removed_ids);
        self.removed = Some(record);
        Ok(())
    }

    fn rollback(&mut self, canvas: &mut Canvas) -> Result<()> {
        let record = self.removed.as_ref().ok_or(EditError::MissingCapture)?;
        let groups = self.prior_groups.clone().ok_or(EditError::MissingCapture)?;
        canvas.graph.restore_removal(record)?;
        canvas.groups.restore(groups);
        Ok(())
    }

    fn display_name(&self) -> &str {
        "Delete Shape"
    }
}

/// Move a node so its upper-left corner lands on an absolute point.
///
/// Descendants and contained floating dockers ride along. Rollback
/// restores the captured absolute bounds and docker sequences rather
/// than applying an inverse delta, so repeated undo/redo cannot drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveNode {
    pub node: ShapeId,
    pub to: Point,
    prior_bounds: Option<Vec<(ShapeId, Bounds)>>,
    prior_dockers: Option<Vec<(ShapeId, Vec<Docker>)>>,
}

impl MoveNode {
    pub fn new(node: ShapeId, to: Point) -> Self {
        Self {
            node,
            to,
            prior_bounds: None,
            prior_dockers: None,
        }
    }
}

impl Command for MoveNode {
    fn execute(&mut self, canvas: &mut Canvas) -> Result<()> {
        if self.prior_bounds.is_none() {
            let subtree = canvas.graph.subtree_of(self.node)?;
            let mut bounds = Vec::new();
            let mut dockers = Vec::new();
            for id in subtree {
                if let Some(node) = canvas.graph.get_node(id) {
                    bounds.push((id, node.bounds));
                } else if let Some(edge) = canvas.graph.get_edge(id) {
                    dockers.push((id, edge.dockers().to_vec()));
                }
            }
            self.prior_bounds = Some(bounds);
            self.prior_dockers = Some(dockers);
        }
        canvas.graph.move_node_to(self.node, self.to)?;
        Ok(())
    }

    fn rollback(&mut self, canvas: &mut Canvas) -> Result<()> {
        let bounds = self.prior_bounds.as_ref().ok_or(EditError::MissingCapture)?;
        let dockers = self
            .prior_dockers
            .as_ref()
            .ok_or(EditError::MissingCapture)?;
        for (id, b) in bounds {
            canvas.graph.set_node_bounds(*id, *b)?;
        }
        for (id, d) in dockers {
            canvas.graph.set_dockers(*id, d.clone())?;
        }
        Ok(())
    }

    fn display_name(&self) -> &str {
        "Move Node"
    }
}

/// Resize a node in place; children keep their absolute bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResizeNode {
    pub node: ShapeId,
    pub width: f64,
    pub height: f64,
    prior: Option<Bounds>,
}

impl ResizeNode {
    pub fn new(node: ShapeId, width: f64, height: f64) -> Self {
        Self {
            node,
            width,
            height,
            prior: None,
        }
    }
}

impl Command for ResizeNode {
    fn execute(&mut self, canvas: &mut Canvas) -> Result<()> {
        let node = canvas
            .graph
            .get_node(self.node)
            .ok_or(ModelError::ShapeNotFound(self.node.as_uuid()))?;
        if self.prior.is_none() {
            self.prior = Some(node.bounds);
        }
        canvas.graph.resize_node(self.node, self.width, self.height)?;
        Ok(())
    }

    fn rollback(&mut self, canvas: &mut Canvas) -> Result<()> {
        let prior = self.prior.ok_or(EditError::MissingCapture)?;
        canvas.graph.set_node_bounds(self.node, prior)?;
        Ok(())
    }

    fn display_name(&self) -> &str {
        "Resize Node"
    }
}

/// Set (or overwrite) an opaque property on a node or edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetProperty {
    pub shape: ShapeId,
    pub key: String,
    pub value: serde_json::Value,
    prior: Option<Option<serde_json::Value>>,
}

impl SetProperty {
    pub fn new(shape: ShapeId, key: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            shape,
            key: key.into(),
            value,
            prior: None,
        }
    }
}

impl Command for SetProperty {
    fn execute(&mut self, canvas: &mut Canvas) -> Result<()> {
        if let Some(node) = canvas.graph.get_node_mut(self.shape) {
            if self.prior.is_none() {
                self.prior = Some(node.property(&self.key).cloned());
            }
            node.set_property(self.key.clone(), self.value.clone());
            Ok(())
        } else if let Some(edge) = canvas.graph.get_edge_mut(self.shape) {
            if self.prior.is_none() {
                self.prior = Some(edge.property(&self.key).cloned());
            }
            edge.set_property(self.key.clone(), self.value.clone());
            Ok(())
        } else {
            Err(ModelError::ShapeNotFound(self.shape.as_uuid()).into())
        }
    }

    fn rollback(&mut self, canvas: &mut Canvas) -> Result<()> {
        let prior = self.prior.clone().ok_or(EditError::MissingCapture)?;
        if let Some(node) = canvas.graph.get_node_mut(self.shape) {
            match prior {
                Some(value) => node.set_property(self.key.clone(), value),
                None => {
                    node.remove_property(&self.key);
                }
            }
            Ok(())
        } else if let Some(edge) = canvas.graph.get_edge_mut(self.shape) {
            match prior {
                Some(value) => edge.set_property(self.key.clone(), value),
                None => {
                    edge.remove_property(&self.key);
                }
            }
            Ok(())
        } else {
            Err(ModelError::ShapeNotFound(self.shape.as_uuid()).into())
        }
    }

    fn display_name(&self) -> &str {
        "Set Property"
    }
}
