//! Snapshot - the persisted representation of a diagram graph
//!
//! A snapshot is a flat list of shape descriptors in deterministic order
//! (depth-first over the top-level shapes). Converting a snapshot back
//! into a graph validates everything up front and rejects the whole load
//! on the first structural problem; nothing partial is ever produced.

use crate::{Result, StoreError};
use canvas_model::{
    Bounds, DiagramGraph, Docker, EdgeEndpoint, EdgeShape, MagnetAnchor, MagnetRef, NodeShape,
    Shape, ShapeId, Stencil, MIN_DOCKERS,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One docker in the persisted form: either a magnet binding (the
/// absolute position is re-derived on load) or an explicit point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DockerDescriptor {
    MagnetRef { node: ShapeId, anchor: MagnetAnchor },
    Point { x: f64, y: f64 },
}

impl DockerDescriptor {
    fn from_docker(docker: &Docker) -> Self {
        match docker.magnet {
            Some(magnet) => DockerDescriptor::MagnetRef {
                node: magnet.node,
                anchor: magnet.anchor,
            },
            None => DockerDescriptor::Point {
                x: docker.position.x,
                y: docker.position.y,
            },
        }
    }

    fn to_endpoint(&self) -> EdgeEndpoint {
        match *self {
            DockerDescriptor::MagnetRef { node, anchor } => {
                EdgeEndpoint::Docked(MagnetRef::new(node, anchor))
            }
            DockerDescriptor::Point { x, y } => {
                EdgeEndpoint::Floating(canvas_model::Point::new(x, y))
            }
        }
    }
}

/// Variant-specific part of a shape descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeBody {
    Node,
    Edge { dockers: Vec<DockerDescriptor> },
}

/// One shape in the persisted form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    pub id: ShapeId,
    pub stencil: Stencil,
    /// For edges this is the derived enclosure of the dockers; it is
    /// recomputed on load
    pub bounds: Bounds,
    pub parent: Option<ShapeId>,
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
    pub body: ShapeBody,
}

/// A complete persisted diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub shapes: Vec<ShapeDescriptor>,
}

impl Snapshot {
    /// Capture a graph as a snapshot. Shapes are emitted depth-first over
    /// the top-level list, so the output is deterministic for a given
    /// graph.
    pub fn from_graph(graph: &DiagramGraph) -> Self {
        let mut shapes = Vec::new();
        for &root in graph.roots() {
            // The root came out of the graph, so the subtree lookup
            // cannot fail.
            let Ok(subtree) = graph.subtree_of(root) else {
                continue;
            };
            for id in subtree {
                if let Some(node) = graph.get_node(id) {
                    shapes.push(ShapeDescriptor {
                        id,
                        stencil: node.stencil.clone(),
                        bounds: node.bounds,
                        parent: node.parent(),
                        properties: node.properties.clone(),
                        body: ShapeBody::Node,
                    });
                } else if let Some(edge) = graph.get_edge(id) {
                    shapes.push(ShapeDescriptor {
                        id,
                        stencil: edge.stencil.clone(),
                        bounds: edge.bounds(),
                        parent: edge.parent(),
                        properties: edge.properties.clone(),
                        body: ShapeBody::Edge {
                            dockers: edge.dockers().iter().map(DockerDescriptor::from_docker).collect(),
                        },
                    });
                }
            }
        }
        Snapshot { shapes }
    }

    /// Reconstruct a graph, validating the snapshot up front.
    ///
    /// Rejected with [`StoreError::LoadFormat`]: duplicate ids, dangling
    /// or non-node parent references, containment cycles, edges with
    /// fewer than two dockers, magnet references to missing nodes or
    /// anchors, and stencil kinds that contradict the shape body.
    pub fn into_graph(self) -> Result<DiagramGraph> {
        let mut seen = HashSet::new();
        for shape in &self.shapes {
            if !seen.insert(shape.id) {
                return Err(StoreError::LoadFormat(format!(
                    "duplicate shape id {}",
                    shape.id
                )));
            }
        }
        for shape in &self.shapes {
            if let Some(parent) = shape.parent {
                if !seen.contains(&parent) {
                    return Err(StoreError::LoadFormat(format!(
                        "shape {} references missing parent {}",
                        shape.id, parent
                    )));
                }
            }
            if let ShapeBody::Edge { dockers } = &shape.body {
                if dockers.len() < MIN_DOCKERS {
                    return Err(StoreError::LoadFormat(format!(
                        "edge {} has fewer than {MIN_DOCKERS} dockers",
                        shape.id
                    )));
                }
            }
        }

        let mut graph = DiagramGraph::new();

        // Nodes first, so magnet references resolve regardless of the
        // order shapes appear in the file
        for shape in &self.shapes {
            if let ShapeBody::Node = shape.body {
                let mut node = NodeShape::with_id(shape.id, shape.stencil.clone(), shape.bounds);
                node.properties = shape.properties.clone();
                graph
                    .insert_node(node)
                    .map_err(|e| StoreError::LoadFormat(e.to_string()))?;
            }
        }

        for shape in &self.shapes {
            if let ShapeBody::Edge { dockers } = &shape.body {
                let resolved: Vec<Docker> = dockers
                    .iter()
                    .map(|d| graph.resolve_endpoint(&d.to_endpoint()))
                    .collect::<std::result::Result<_, _>>()
                    .map_err(|e| StoreError::LoadFormat(e.to_string()))?;

                let mut edge = EdgeShape::with_id(
                    shape.id,
                    shape.stencil.clone(),
                    resolved[0],
                    resolved[resolved.len() - 1],
                );
                edge.properties = shape.properties.clone();
                graph
                    .insert_edge(edge)
                    .map_err(|e| StoreError::LoadFormat(e.to_string()))?;
                for (offset, docker) in resolved[1..resolved.len() - 1].iter().enumerate() {
                    graph
                        .insert_docker(shape.id, offset + 1, *docker)
                        .map_err(|e| StoreError::LoadFormat(e.to_string()))?;
                }
            }
        }

        // Parent links in file order, which is the original child order
        for shape in &self.shapes {
            if let Some(parent) = shape.parent {
                graph
                    .add_child(parent, shape.id)
                    .map_err(|e| StoreError::LoadFormat(e.to_string()))?;
            }
        }

        let roots: Vec<ShapeId> = self
            .shapes
            .iter()
            .filter(|s| s.parent.is_none())
            .map(|s| s.id)
            .collect();
        graph
            .reorder_roots(&roots)
            .map_err(|e| StoreError::LoadFormat(e.to_string()))?;

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas_model::Point;

    fn sample_graph() -> DiagramGraph {
        let mut graph = DiagramGraph::new();
        let a = graph
            .create_node(Stencil::node("task"), Bounds::new(0.0, 0.0, 100.0, 50.0))
            .unwrap();
        let b = graph
            .create_node(Stencil::node("task"), Bounds::new(200.0, 0.0, 100.0, 50.0))
            .unwrap();
        let pool = graph
            .create_node(Stencil::node("pool"), Bounds::new(-50.0, -50.0, 500.0, 300.0))
            .unwrap();
        graph.add_child(pool, a).unwrap();

        let e = graph
            .create_edge(
                Stencil::edge("flow"),
                EdgeEndpoint::Docked(MagnetRef::new(a, MagnetAnchor::East)),
                EdgeEndpoint::Docked(MagnetRef::new(b, MagnetAnchor::West)),
            )
            .unwrap();
        graph.add_docker(e, Point::new(150.0, 80.0)).unwrap();
        graph
            .get_node_mut(b)
            .unwrap()
            .set_property("name", serde_json::json!("Review"));
        graph
    }

    #[test]
    fn test_round_trip_is_structurally_equal() {
        let graph = sample_graph();
        let snapshot = Snapshot::from_graph(&graph);
        let loaded = snapshot.into_graph().unwrap();
        assert!(graph.structurally_equal(&loaded));
    }

    #[test]
    fn test_docked_positions_rederive_on_load() {
        let graph = sample_graph();
        let snapshot = Snapshot::from_graph(&graph);
        let loaded = snapshot.into_graph().unwrap();

        let edge_id = *loaded
            .roots()
            .iter()
            .find(|id| loaded.get_edge(**id).is_some())
            .expect("edge is a root");
        let edge = loaded.get_edge(edge_id).unwrap();
        assert_eq!(edge.source().position, Point::new(100.0, 25.0));
        assert_eq!(edge.target().position, Point::new(200.0, 25.0));
    }

    #[test]
    fn test_reject_edge_with_one_docker() {
        let snapshot = Snapshot {
            shapes: vec![ShapeDescriptor {
                id: ShapeId::new(),
                stencil: Stencil::edge("flow"),
                bounds: Bounds::default(),
                parent: None,
                properties: HashMap::new(),
                body: ShapeBody::Edge {
                    dockers: vec![DockerDescriptor::Point { x: 0.0, y: 0.0 }],
                },
            }],
        };
        assert!(matches!(
            snapshot.into_graph(),
            Err(StoreError::LoadFormat(_))
        ));
    }

    #[test]
    fn test_reject_dangling_parent() {
        let snapshot = Snapshot {
            shapes: vec![ShapeDescriptor {
                id: ShapeId::new(),
                stencil: Stencil::node("task"),
                bounds: Bounds::default(),
                parent: Some(ShapeId::new()),
                properties: HashMap::new(),
                body: ShapeBody::Node,
            }],
        };
        assert!(matches!(
            snapshot.into_graph(),
            Err(StoreError::LoadFormat(_))
        ));
    }

    #[test]
    fn test_reject_magnet_reference_to_missing_node() {
        let snapshot = Snapshot {
            shapes: vec![ShapeDescriptor {
                id: ShapeId::new(),
                stencil: Stencil::edge("flow"),
                bounds: Bounds::default(),
                parent: None,
                properties: HashMap::new(),
                body: ShapeBody::Edge {
                    dockers: vec![
                        DockerDescriptor::MagnetRef {
                            node: ShapeId::new(),
                            anchor: MagnetAnchor::East,
                        },
                        DockerDescriptor::Point { x: 10.0, y: 10.0 },
                    ],
                },
            }],
        };
        assert!(matches!(
            snapshot.into_graph(),
            Err(StoreError::LoadFormat(_))
        ));
    }

    #[test]
    fn test_reject_duplicate_ids() {
        let id = ShapeId::new();
        let descriptor = ShapeDescriptor {
            id,
            stencil: Stencil::node("task"),
            bounds: Bounds::default(),
            parent: None,
            properties: HashMap::new(),
            body: ShapeBody::Node,
        };
        let snapshot = Snapshot {
            shapes: vec![descriptor.clone(), descriptor],
        };
        assert!(matches!(
            snapshot.into_graph(),
            Err(StoreError::LoadFormat(_))
        ));
    }

    #[test]
    fn test_reject_stencil_kind_contradicting_body() {
        let snapshot = Snapshot {
            shapes: vec![ShapeDescriptor {
                id: ShapeId::new(),
                stencil: Stencil::edge("flow"),
                bounds: Bounds::default(),
                parent: None,
                properties: HashMap::new(),
                body: ShapeBody::Node,
            }],
        };
        assert!(matches!(
            snapshot.into_graph(),
            Err(StoreError::LoadFormat(_))
        ));
    }
}
