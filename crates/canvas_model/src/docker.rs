//! Dockers - point controls along an edge

use crate::{MagnetAnchor, Point, ShapeId};
use serde::{Deserialize, Serialize};

/// A weak back-reference to a magnet on some node.
/// Relation and lookup only - the owning node is never affected by the
/// lifecycle of a docker holding this reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnetRef {
    pub node: ShapeId,
    pub anchor: MagnetAnchor,
}

impl MagnetRef {
    pub fn new(node: ShapeId, anchor: MagnetAnchor) -> Self {
        Self { node, anchor }
    }
}

/// A point control on an edge: an endpoint or an interior bend point.
///
/// A docked docker carries both its magnet reference and the last absolute
/// position resolved from it; the graph keeps the position in sync whenever
/// the referenced node's bounds change. A floating docker has no magnet
/// reference and owns its absolute position outright.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Docker {
    pub position: Point,
    pub magnet: Option<MagnetRef>,
}

impl Docker {
    /// A docker bound to a magnet, positioned at the magnet's resolved point
    pub fn docked(magnet: MagnetRef, position: Point) -> Self {
        Self {
            position,
            magnet: Some(magnet),
        }
    }

    /// A free docker at an explicit absolute position
    pub fn floating(position: Point) -> Self {
        Self {
            position,
            magnet: None,
        }
    }

    pub fn is_docked(&self) -> bool {
        self.magnet.is_some()
    }

    /// Drop the magnet reference, keeping the last absolute position
    pub fn undock(&mut self) {
        self.magnet = None;
    }
}
