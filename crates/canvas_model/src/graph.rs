//! Diagram graph storage and operations
//!
//! The graph owns every node and edge of one editor session and is the
//! only place allowed to mutate them. It enforces the structural
//! invariants on every mutation:
//!
//! - no edge ever references a magnet of a node that is not in the graph;
//! - an edge always holds at least two dockers;
//! - parent-child links never form a cycle;
//! - docked docker positions are recomputed synchronously whenever the
//!   referenced node's bounds change, so geometry is never stale at the
//!   end of a mutation.
//!
//! Every fallible operation validates before mutating; the graph is
//! unchanged on any error return.

use crate::{
    Bounds, Docker, EdgeEnd, EdgeShape, MagnetRef, ModelError, NodeShape, Point, Result, Shape,
    ShapeId, Stencil, StencilKind, MIN_DOCKERS,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// One endpoint request when creating or re-docking an edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EdgeEndpoint {
    /// Bound to a magnet on a node
    Docked(MagnetRef),
    /// A free point in canvas space
    Floating(Point),
}

/// Storage for the two shape variants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeStorage {
    pub nodes: HashMap<ShapeId, NodeShape>,
    pub edges: HashMap<ShapeId, EdgeShape>,
}

/// A removed shape, captured with its links intact for restore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RemovedShape {
    Node(NodeShape),
    Edge(EdgeShape),
}

impl RemovedShape {
    pub fn id(&self) -> ShapeId {
        match self {
            RemovedShape::Node(n) => n.id(),
            RemovedShape::Edge(e) => e.id(),
        }
    }
}

/// Where the topmost removed shape sat before removal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub parent: Option<ShapeId>,
    pub index: usize,
}

/// A surviving edge's docker that lost its magnet in a removal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UndockRecord {
    pub edge: ShapeId,
    pub index: usize,
    pub magnet: MagnetRef,
}

/// Everything a shape removal took away, sufficient to restore it exactly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovalRecord {
    /// Removed shapes in subtree preorder (topmost first)
    pub shapes: Vec<RemovedShape>,
    /// Position of the topmost shape within its parent or the root list
    pub placement: Placement,
    /// Dockers of surviving edges converted to floating
    pub undocked: Vec<UndockRecord>,
}

/// The shape graph of one editor session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramGraph {
    pub shapes: ShapeStorage,
    /// Top-level shapes in insertion order (deterministic serialization)
    roots: Vec<ShapeId>,
}

impl DiagramGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub fn get_node(&self, id: ShapeId) -> Option<&NodeShape> {
        self.shapes.nodes.get(&id)
    }

    pub fn get_node_mut(&mut self, id: ShapeId) -> Option<&mut NodeShape> {
        self.shapes.nodes.get_mut(&id)
    }

    pub fn get_edge(&self, id: ShapeId) -> Option<&EdgeShape> {
        self.shapes.edges.get(&id)
    }

    pub fn get_edge_mut(&mut self, id: ShapeId) -> Option<&mut EdgeShape> {
        self.shapes.edges.get_mut(&id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.nodes.contains_key(&id) || self.shapes.edges.contains_key(&id)
    }

    /// Top-level shapes in insertion order
    pub fn roots(&self) -> &[ShapeId] {
        &self.roots
    }

    pub fn node_count(&self) -> usize {
        self.shapes.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.shapes.edges.len()
    }

    /// Parent of any shape (node or edge)
    pub fn parent_of(&self, id: ShapeId) -> Option<ShapeId> {
        self.shapes
            .nodes
            .get(&id)
            .and_then(|n| n.parent())
            .or_else(|| self.shapes.edges.get(&id).and_then(|e| e.parent()))
    }

    // =========================================================================
    // Creation
    // =========================================================================

    /// Create a node from a stencil at the given bounds
    pub fn create_node(&mut self, stencil: Stencil, bounds: Bounds) -> Result<ShapeId> {
        self.insert_node(NodeShape::new(stencil, bounds))
    }

    /// Insert an already-built node as a top-level shape.
    /// Used by redo to reproduce a creation with the original ID.
    pub fn insert_node(&mut self, mut node: NodeShape) -> Result<ShapeId> {
        if node.stencil.kind != StencilKind::Node {
            return Err(ModelError::StencilKindMismatch {
                expected: StencilKind::Node,
                found: node.stencil.kind,
            });
        }
        let id = node.id();
        if self.contains(id) {
            return Err(ModelError::InvariantViolation(format!(
                "duplicate shape id: {id}"
            )));
        }
        node.set_parent(None);
        self.shapes.nodes.insert(id, node);
        self.roots.push(id);
        Ok(id)
    }

    /// Create an edge between two endpoints.
    /// Docked endpoints resolve their absolute position from the magnet;
    /// a reference to a missing node or magnet fails with
    /// [`ModelError::InvalidReference`].
    pub fn create_edge(
        &mut self,
        stencil: Stencil,
        source: EdgeEndpoint,
        target: EdgeEndpoint,
    ) -> Result<ShapeId> {
        let source = self.resolve_endpoint(&source)?;
        let target = self.resolve_endpoint(&target)?;
        self.insert_edge(EdgeShape::new(stencil, source, target))
    }

    /// Insert an already-built edge as a top-level shape.
    /// Used by redo to reproduce a creation with the original ID.
    pub fn insert_edge(&mut self, mut edge: EdgeShape) -> Result<ShapeId> {
        if edge.stencil.kind != StencilKind::Edge {
            return Err(ModelError::StencilKindMismatch {
                expected: StencilKind::Edge,
                found: edge.stencil.kind,
            });
        }
        let id = edge.id();
        if self.contains(id) {
            return Err(ModelError::InvariantViolation(format!(
                "duplicate shape id: {id}"
            )));
        }
        if edge.dockers().len() < MIN_DOCKERS {
            return Err(ModelError::InvariantViolation(format!(
                "edge {id} has fewer than {MIN_DOCKERS} dockers"
            )));
        }
        for docker in edge.dockers() {
            if let Some(magnet) = docker.magnet {
                self.check_magnet(&magnet)?;
            }
        }
        edge.set_parent(None);
        self.shapes.edges.insert(id, edge);
        self.roots.push(id);
        Ok(id)
    }

    /// Resolve an endpoint request into a docker
    pub fn resolve_endpoint(&self, endpoint: &EdgeEndpoint) -> Result<Docker> {
        match endpoint {
            EdgeEndpoint::Docked(magnet) => {
                let position = self.check_magnet(magnet)?;
                Ok(Docker::docked(*magnet, position))
            }
            EdgeEndpoint::Floating(point) => Ok(Docker::floating(*point)),
        }
    }

    /// Validate a magnet reference and return its current absolute position
    fn check_magnet(&self, magnet: &MagnetRef) -> Result<Point> {
        let node = self.shapes.nodes.get(&magnet.node).ok_or_else(|| {
            ModelError::InvalidReference(format!("magnet references missing node {}", magnet.node))
        })?;
        node.magnet_position(magnet.anchor).ok_or_else(|| {
            ModelError::InvalidReference(format!(
                "node {} has no magnet at {:?}",
                magnet.node, magnet.anchor
            ))
        })
    }

    // =========================================================================
    // Parent-child structure
    // =========================================================================

    /// Make `child` a child of `parent`.
    ///
    /// The parent must be a node; the child may be a node or an edge and
    /// is detached from its previous parent (or the root list) first.
    pub fn add_child(&mut self, parent: ShapeId, child: ShapeId) -> Result<()> {
        if !self.shapes.nodes.contains_key(&parent) {
            return Err(ModelError::ShapeNotFound(parent.as_uuid()));
        }
        if !self.contains(child) {
            return Err(ModelError::ShapeNotFound(child.as_uuid()));
        }
        if parent == child {
            return Err(ModelError::InvariantViolation(
                "a shape cannot contain itself".into(),
            ));
        }
        // Reject cycles: the child must not be an ancestor of the parent
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(ModelError::InvariantViolation(format!(
                    "adding {child} under {parent} would create a containment cycle"
                )));
            }
            cursor = self.parent_of(id);
        }

        self.detach(child);
        self.set_parent(child, Some(parent));
        if let Some(p) = self.shapes.nodes.get_mut(&parent) {
            p.add_child(child);
        }
        Ok(())
    }

    /// Detach `child` from its parent and make it top-level again
    pub fn remove_from_parent(&mut self, child: ShapeId) -> Result<()> {
        if !self.contains(child) {
            return Err(ModelError::ShapeNotFound(child.as_uuid()));
        }
        self.detach(child);
        self.set_parent(child, None);
        self.roots.push(child);
        Ok(())
    }

    /// Unlink a shape from its parent's child list or the root list.
    /// Does not touch the shape's own parent field.
    fn detach(&mut self, id: ShapeId) {
        match self.parent_of(id) {
            Some(parent) => {
                if let Some(p) = self.shapes.nodes.get_mut(&parent) {
                    p.remove_child(id);
                }
            }
            None => self.roots.retain(|&r| r != id),
        }
    }

    fn set_parent(&mut self, id: ShapeId, parent: Option<ShapeId>) {
        if let Some(node) = self.shapes.nodes.get_mut(&id) {
            node.set_parent(parent);
        } else if let Some(edge) = self.shapes.edges.get_mut(&id) {
            edge.set_parent(parent);
        }
    }

    /// A shape and all its descendants in preorder
    pub fn subtree_of(&self, id: ShapeId) -> Result<Vec<ShapeId>> {
        if !self.contains(id) {
            return Err(ModelError::ShapeNotFound(id.as_uuid()));
        }
        Ok(self.collect_subtree(id))
    }

    /// Collect a shape and all its descendants in preorder
    fn collect_subtree(&self, id: ShapeId) -> Vec<ShapeId> {
        let mut result = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            result.push(current);
            if let Some(node) = self.shapes.nodes.get(&current) {
                // Reverse keeps preorder left-to-right with a stack
                for &child in node.children().iter().rev() {
                    stack.push(child);
                }
            }
        }
        result
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Remove a shape and cascade to all its descendants.
    ///
    /// Surviving edges with a docker bound to a magnet of any removed node
    /// have that docker converted to floating at its last absolute
    /// position. Removing an edge never affects nodes. The returned record
    /// is sufficient to restore the removal exactly.
    pub fn remove_shape(&mut self, id: ShapeId) -> Result<RemovalRecord> {
        if !self.contains(id) {
            return Err(ModelError::ShapeNotFound(id.as_uuid()));
        }

        // Capture where the topmost shape sat
        let placement = match self.parent_of(id) {
            Some(parent) => {
                let index = self
                    .shapes
                    .nodes
                    .get(&parent)
                    .and_then(|p| p.children().iter().position(|&c| c == id))
                    .ok_or_else(|| {
                        ModelError::InvariantViolation(format!(
                            "shape {id} missing from its parent's child list"
                        ))
                    })?;
                Placement {
                    parent: Some(parent),
                    index,
                }
            }
            None => Placement {
                parent: None,
                index: self.roots.iter().position(|&r| r == id).ok_or_else(|| {
                    ModelError::InvariantViolation(format!("shape {id} missing from root list"))
                })?,
            },
        };

        let subtree = self.collect_subtree(id);
        self.detach(id);

        let mut shapes = Vec::with_capacity(subtree.len());
        let mut removed_nodes: BTreeSet<ShapeId> = BTreeSet::new();
        for &sid in &subtree {
            if let Some(node) = self.shapes.nodes.remove(&sid) {
                removed_nodes.insert(sid);
                shapes.push(RemovedShape::Node(node));
            } else if let Some(edge) = self.shapes.edges.remove(&sid) {
                shapes.push(RemovedShape::Edge(edge));
            }
        }

        // Convert dockers of surviving edges to floating
        let mut undocked = Vec::new();
        for (eid, edge) in self.shapes.edges.iter_mut() {
            for (index, docker) in edge.dockers_mut().iter_mut().enumerate() {
                if let Some(magnet) = docker.magnet {
                    if removed_nodes.contains(&magnet.node) {
                        undocked.push(UndockRecord {
                            edge: *eid,
                            index,
                            magnet,
                        });
                        docker.undock();
                    }
                }
            }
        }

        Ok(RemovalRecord {
            shapes,
            placement,
            undocked,
        })
    }

    /// Restore a prior removal exactly: shapes, placement, and the magnet
    /// references of dockers that were converted to floating.
    pub fn restore_removal(&mut self, record: &RemovalRecord) -> Result<()> {
        let Some(topmost) = record.shapes.first().map(|s| s.id()) else {
            return Ok(());
        };
        for shape in &record.shapes {
            if self.contains(shape.id()) {
                return Err(ModelError::InvariantViolation(format!(
                    "cannot restore {}: id already present",
                    shape.id()
                )));
            }
        }
        if let Some(parent) = record.placement.parent {
            if !self.shapes.nodes.contains_key(&parent) {
                return Err(ModelError::ShapeNotFound(parent.as_uuid()));
            }
        }

        for shape in &record.shapes {
            match shape {
                RemovedShape::Node(node) => {
                    self.shapes.nodes.insert(node.id(), node.clone());
                }
                RemovedShape::Edge(edge) => {
                    self.shapes.edges.insert(edge.id(), edge.clone());
                }
            }
        }

        match record.placement.parent {
            Some(parent) => {
                if let Some(p) = self.shapes.nodes.get_mut(&parent) {
                    p.insert_child(record.placement.index, topmost);
                }
            }
            None => {
                let index = record.placement.index.min(self.roots.len());
                self.roots.insert(index, topmost);
            }
        }

        for undock in &record.undocked {
            let edge = self
                .shapes
                .edges
                .get_mut(&undock.edge)
                .ok_or(ModelError::ShapeNotFound(undock.edge.as_uuid()))?;
            let docker = edge
                .dockers_mut()
                .get_mut(undock.index)
                .ok_or_else(|| {
                    ModelError::InvalidReference(format!(
                        "edge {} has no docker at index {}",
                        undock.edge, undock.index
                    ))
                })?;
            docker.magnet = Some(undock.magnet);
        }
        Ok(())
    }

    // =========================================================================
    // Connectivity queries
    // =========================================================================

    /// Edges whose source docker is bound to one of this node's magnets
    pub fn get_outgoing(&self, node: ShapeId) -> Vec<ShapeId> {
        self.shapes
            .edges
            .iter()
            .filter(|(_, e)| e.source().magnet.map(|m| m.node) == Some(node))
            .map(|(&id, _)| id)
            .collect()
    }

    /// Edges whose target docker is bound to one of this node's magnets
    pub fn get_incoming(&self, node: ShapeId) -> Vec<ShapeId> {
        self.shapes
            .edges
            .iter()
            .filter(|(_, e)| e.target().magnet.map(|m| m.node) == Some(node))
            .map(|(&id, _)| id)
            .collect()
    }

    // =========================================================================
    // Geometry mutation (the docking algorithm lives here)
    // =========================================================================

    /// Set a node's bounds and synchronously recompute every docker bound
    /// to one of its magnets. This is the single bounds mutation point.
    pub fn set_node_bounds(&mut self, id: ShapeId, bounds: Bounds) -> Result<()> {
        let node = self
            .shapes
            .nodes
            .get_mut(&id)
            .ok_or(ModelError::ShapeNotFound(id.as_uuid()))?;
        node.bounds
            .set(bounds.x, bounds.y, bounds.width, bounds.height);
        self.refresh_dockers(&[id]);
        Ok(())
    }

    /// Move a node (and all its descendants) by a delta.
    ///
    /// Descendant nodes translate with the parent; floating dockers of
    /// descendant edges translate too; every docker bound to a moved
    /// node's magnet is recomputed from the new bounds.
    pub fn move_node_by(&mut self, id: ShapeId, dx: f64, dy: f64) -> Result<()> {
        if !self.shapes.nodes.contains_key(&id) {
            return Err(ModelError::ShapeNotFound(id.as_uuid()));
        }
        let subtree = self.collect_subtree(id);
        let mut moved_nodes = Vec::new();
        let mut moved_edges = Vec::new();
        for sid in subtree {
            if let Some(node) = self.shapes.nodes.get_mut(&sid) {
                node.bounds.move_by(dx, dy);
                moved_nodes.push(sid);
            } else {
                moved_edges.push(sid);
            }
        }

        self.refresh_dockers(&moved_nodes);

        // Floating dockers of contained edges ride along with the move;
        // docked ones already track their magnets.
        for eid in moved_edges {
            if let Some(edge) = self.shapes.edges.get_mut(&eid) {
                for docker in edge.dockers_mut() {
                    if !docker.is_docked() {
                        docker.position = docker.position.translated(dx, dy);
                    }
                }
            }
        }
        Ok(())
    }

    /// Move a node so its upper-left corner lands on `point`
    pub fn move_node_to(&mut self, id: ShapeId, point: Point) -> Result<()> {
        let ul = self
            .shapes
            .nodes
            .get(&id)
            .ok_or(ModelError::ShapeNotFound(id.as_uuid()))?
            .bounds
            .upper_left();
        self.move_node_by(id, point.x - ul.x, point.y - ul.y)
    }

    /// Resize a node in place (children keep their absolute bounds)
    pub fn resize_node(&mut self, id: ShapeId, width: f64, height: f64) -> Result<()> {
        let node = self
            .shapes
            .nodes
            .get_mut(&id)
            .ok_or(ModelError::ShapeNotFound(id.as_uuid()))?;
        node.bounds.resize_to(width, height);
        self.refresh_dockers(&[id]);
        Ok(())
    }

    /// Recompute the absolute position of every docker bound to a magnet
    /// of one of the given nodes
    fn refresh_dockers(&mut self, nodes: &[ShapeId]) {
        let bounds: HashMap<ShapeId, Bounds> = nodes
            .iter()
            .filter_map(|id| self.shapes.nodes.get(id).map(|n| (*id, n.bounds)))
            .collect();
        for edge in self.shapes.edges.values_mut() {
            for docker in edge.dockers_mut() {
                if let Some(magnet) = docker.magnet {
                    if let Some(b) = bounds.get(&magnet.node) {
                        docker.position = magnet.anchor.resolve(b);
                    }
                }
            }
        }
    }

    // =========================================================================
    // Docker mutation
    // =========================================================================

    /// Insert a new interior docker at the given absolute position,
    /// splitting the edge's docker sequence at the nearest segment.
    /// Returns the insertion index.
    pub fn add_docker(&mut self, edge: ShapeId, position: Point) -> Result<usize> {
        let e = self
            .shapes
            .edges
            .get_mut(&edge)
            .ok_or(ModelError::ShapeNotFound(edge.as_uuid()))?;
        let dockers = e.dockers_mut();

        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for i in 0..dockers.len() - 1 {
            let d = position.distance_to_segment(&dockers[i].position, &dockers[i + 1].position);
            if d < best_distance {
                best_distance = d;
                best = i;
            }
        }
        let index = best + 1;
        dockers.insert(index, Docker::floating(position));
        Ok(index)
    }

    /// Insert a docker at an explicit index (undo/redo path)
    pub fn insert_docker(&mut self, edge: ShapeId, index: usize, docker: Docker) -> Result<()> {
        if let Some(magnet) = docker.magnet {
            self.check_magnet(&magnet)?;
        }
        let e = self
            .shapes
            .edges
            .get_mut(&edge)
            .ok_or(ModelError::ShapeNotFound(edge.as_uuid()))?;
        if index > e.dockers().len() {
            return Err(ModelError::InvalidReference(format!(
                "edge {edge} has no docker slot at index {index}"
            )));
        }
        e.dockers_mut().insert(index, docker);
        Ok(())
    }

    /// Remove the docker at `index`.
    ///
    /// Fails with [`ModelError::InvariantViolation`] if the edge holds
    /// only the two endpoint dockers; the edge is unchanged on failure.
    pub fn remove_docker(&mut self, edge: ShapeId, index: usize) -> Result<Docker> {
        let e = self
            .shapes
            .edges
            .get_mut(&edge)
            .ok_or(ModelError::ShapeNotFound(edge.as_uuid()))?;
        if index >= e.dockers().len() {
            return Err(ModelError::InvalidReference(format!(
                "edge {edge} has no docker at index {index}"
            )));
        }
        if e.dockers().len() <= MIN_DOCKERS {
            return Err(ModelError::InvariantViolation(format!(
                "edge {edge} must keep at least {MIN_DOCKERS} dockers"
            )));
        }
        Ok(e.dockers_mut().remove(index))
    }

    /// Move a docker to an absolute position. A docked docker is undocked
    /// by the move and becomes floating at the new point.
    pub fn set_docker_position(&mut self, edge: ShapeId, index: usize, point: Point) -> Result<()> {
        let e = self
            .shapes
            .edges
            .get_mut(&edge)
            .ok_or(ModelError::ShapeNotFound(edge.as_uuid()))?;
        let docker = e.dockers_mut().get_mut(index).ok_or_else(|| {
            ModelError::InvalidReference(format!("edge {edge} has no docker at index {index}"))
        })?;
        docker.position = point;
        docker.undock();
        Ok(())
    }

    /// Replace the docker at `index` wholesale (undo path)
    pub fn set_docker(&mut self, edge: ShapeId, index: usize, docker: Docker) -> Result<()> {
        if let Some(magnet) = docker.magnet {
            self.check_magnet(&magnet)?;
        }
        let e = self
            .shapes
            .edges
            .get_mut(&edge)
            .ok_or(ModelError::ShapeNotFound(edge.as_uuid()))?;
        let slot = e.dockers_mut().get_mut(index).ok_or_else(|| {
            ModelError::InvalidReference(format!("edge {edge} has no docker at index {index}"))
        })?;
        *slot = docker;
        Ok(())
    }

    /// Replace an edge's whole docker sequence (undo path for re-docking)
    pub fn set_dockers(&mut self, edge: ShapeId, dockers: Vec<Docker>) -> Result<()> {
        if dockers.len() < MIN_DOCKERS {
            return Err(ModelError::InvariantViolation(format!(
                "edge {edge} must keep at least {MIN_DOCKERS} dockers"
            )));
        }
        for docker in &dockers {
            if let Some(magnet) = docker.magnet {
                self.check_magnet(&magnet)?;
            }
        }
        let e = self
            .shapes
            .edges
            .get_mut(&edge)
            .ok_or(ModelError::ShapeNotFound(edge.as_uuid()))?;
        *e.dockers_mut() = dockers;
        Ok(())
    }

    /// Re-attach (or float) one endpoint of an edge.
    ///
    /// Only the endpoint docker moves; interior bend points are never
    /// implicitly repositioned by a reconnection.
    pub fn redock(&mut self, edge: ShapeId, end: EdgeEnd, endpoint: EdgeEndpoint) -> Result<()> {
        let docker = self.resolve_endpoint(&endpoint)?;
        let e = self
            .shapes
            .edges
            .get_mut(&edge)
            .ok_or(ModelError::ShapeNotFound(edge.as_uuid()))?;
        let index = e.end_index(end);
        e.dockers_mut()[index] = docker;
        Ok(())
    }

    /// Reorder the root list. `order` must be a permutation of the
    /// current roots; used when reconstructing a graph from a snapshot.
    pub fn reorder_roots(&mut self, order: &[ShapeId]) -> Result<()> {
        if order.len() != self.roots.len()
            || !order.iter().all(|id| self.roots.contains(id))
        {
            return Err(ModelError::InvariantViolation(
                "root reorder must be a permutation of the current roots".into(),
            ));
        }
        self.roots = order.to_vec();
        Ok(())
    }

    /// Structural equality: same ids, bounds, docker sequences, parent
    /// links, properties, and top-level order
    pub fn structurally_equal(&self, other: &DiagramGraph) -> bool {
        self == other
    }
}
