//! Magnets - fixed attachment points on nodes
//!
//! A magnet's absolute position is always derived from its owning node's
//! current bounds; nothing absolute is ever stored, so magnets can never
//! go stale when a node moves or resizes.

use crate::{Bounds, Point};
use serde::{Deserialize, Serialize};

/// Position of a magnet relative to its owning node's bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MagnetAnchor {
    North,
    South,
    East,
    West,
    Center,
    /// Free anchor at fractional offsets of the bounds (0.0..=1.0 each)
    Free { fx: f64, fy: f64 },
}

impl MagnetAnchor {
    /// Resolve the anchor against a set of bounds
    pub fn resolve(&self, bounds: &Bounds) -> Point {
        match *self {
            MagnetAnchor::North => Point::new(bounds.x + bounds.width / 2.0, bounds.y),
            MagnetAnchor::South => {
                Point::new(bounds.x + bounds.width / 2.0, bounds.y + bounds.height)
            }
            MagnetAnchor::East => {
                Point::new(bounds.x + bounds.width, bounds.y + bounds.height / 2.0)
            }
            MagnetAnchor::West => Point::new(bounds.x, bounds.y + bounds.height / 2.0),
            MagnetAnchor::Center => bounds.center(),
            MagnetAnchor::Free { fx, fy } => Point::new(
                bounds.x + fx.clamp(0.0, 1.0) * bounds.width,
                bounds.y + fy.clamp(0.0, 1.0) * bounds.height,
            ),
        }
    }
}

/// A point-like attachment control owned by exactly one node.
/// Not independently movable; always tracks the owning node's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Magnet {
    pub anchor: MagnetAnchor,
}

impl Magnet {
    pub fn new(anchor: MagnetAnchor) -> Self {
        Self { anchor }
    }

    /// Absolute position for the given owning bounds
    pub fn position(&self, bounds: &Bounds) -> Point {
        self.anchor.resolve(bounds)
    }

    /// The default magnet set every node starts with
    pub fn default_set() -> Vec<Magnet> {
        vec![
            Magnet::new(MagnetAnchor::North),
            Magnet::new(MagnetAnchor::South),
            Magnet::new(MagnetAnchor::East),
            Magnet::new(MagnetAnchor::West),
            Magnet::new(MagnetAnchor::Center),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_anchors() {
        let b = Bounds::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(MagnetAnchor::North.resolve(&b), Point::new(50.0, 0.0));
        assert_eq!(MagnetAnchor::South.resolve(&b), Point::new(50.0, 50.0));
        assert_eq!(MagnetAnchor::East.resolve(&b), Point::new(100.0, 25.0));
        assert_eq!(MagnetAnchor::West.resolve(&b), Point::new(0.0, 25.0));
        assert_eq!(MagnetAnchor::Center.resolve(&b), Point::new(50.0, 25.0));
    }

    #[test]
    fn test_free_anchor_tracks_bounds() {
        let anchor = MagnetAnchor::Free { fx: 0.25, fy: 1.0 };
        let b = Bounds::new(10.0, 10.0, 40.0, 20.0);
        assert_eq!(anchor.resolve(&b), Point::new(20.0, 30.0));
    }

    #[test]
    fn test_free_anchor_clamps_fractions() {
        let anchor = MagnetAnchor::Free { fx: 2.0, fy: -1.0 };
        let b = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(anchor.resolve(&b), Point::new(10.0, 0.0));
    }
}
