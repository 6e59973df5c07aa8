//! Grouping - a selection-management index over shapes
//!
//! Groups have no geometric identity; they only mark sets of shapes that
//! move through selection as one unit. A shape belongs to at most one
//! group at a time.

use crate::ShapeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of shape IDs treated as one selection unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    shapes: BTreeSet<ShapeId>,
}

impl Group {
    pub fn new(shapes: impl IntoIterator<Item = ShapeId>) -> Self {
        Self {
            shapes: shapes.into_iter().collect(),
        }
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shapes(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.shapes.iter().copied()
    }

    fn intersects(&self, other: &BTreeSet<ShapeId>) -> bool {
        self.shapes.iter().any(|id| other.contains(id))
    }
}

/// All groups of one editor session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupRegistry {
    groups: Vec<Group>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The group a shape currently belongs to, if any
    pub fn group_of(&self, id: ShapeId) -> Option<&Group> {
        self.groups.iter().find(|g| g.contains(id))
    }

    /// Create a group from a selection.
    ///
    /// Every existing group that intersects the selection is absorbed
    /// wholesale: the new group's membership is the union of the selection
    /// and all members of every intersecting group, and the absorbed
    /// groups are removed. Returns the resulting member set.
    pub fn create_group(&mut self, selection: &[ShapeId]) -> Group {
        let mut members: BTreeSet<ShapeId> = selection.iter().copied().collect();

        let mut kept = Vec::with_capacity(self.groups.len());
        for group in self.groups.drain(..) {
            if group.intersects(&members) {
                members.extend(group.shapes());
            } else {
                kept.push(group);
            }
        }
        self.groups = kept;

        let group = Group { shapes: members };
        self.groups.push(group.clone());
        group
    }

    /// Delete every group whose membership is exactly equal to the
    /// selection (same size, same members). Partial matches are left
    /// untouched. Returns the number of groups removed.
    pub fn delete_group(&mut self, selection: &[ShapeId]) -> usize {
        let target: BTreeSet<ShapeId> = selection.iter().copied().collect();
        let before = self.groups.len();
        self.groups.retain(|g| g.shapes != target);
        before - self.groups.len()
    }

    /// Drop the given shapes from all groups; groups reduced below two
    /// members are dissolved.
    pub fn remove_shapes(&mut self, removed: &BTreeSet<ShapeId>) {
        for group in &mut self.groups {
            group.shapes.retain(|id| !removed.contains(id));
        }
        self.groups.retain(|g| g.len() >= 2);
    }

    /// Replace the whole group list (used by undo to restore captured state)
    pub fn restore(&mut self, groups: Vec<Group>) {
        self.groups = groups;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<ShapeId> {
        (0..n).map(|_| ShapeId::new()).collect()
    }

    #[test]
    fn test_create_group_absorbs_overlapping_group_wholesale() {
        let v = ids(4);
        let (a, b, c, d) = (v[0], v[1], v[2], v[3]);
        let mut reg = GroupRegistry::new();

        reg.create_group(&[a, b, c]);
        // Grouping one member of the existing 3-shape group with a 4th
        // shape produces a 4-member group.
        let merged = reg.create_group(&[c, d]);
        assert_eq!(reg.len(), 1);
        assert_eq!(merged.len(), 4);
        for id in [a, b, c, d] {
            assert!(merged.contains(id));
        }
    }

    #[test]
    fn test_delete_group_requires_exact_match() {
        let v = ids(3);
        let (a, b, c) = (v[0], v[1], v[2]);
        let mut reg = GroupRegistry::new();
        reg.create_group(&[a, b, c]);

        assert_eq!(reg.delete_group(&[a, b]), 0);
        assert_eq!(reg.len(), 1);

        assert_eq!(reg.delete_group(&[a, b, c]), 1);
        assert!(reg.is_empty());
    }

    #[test]
    fn test_group_of() {
        let v = ids(3);
        let mut reg = GroupRegistry::new();
        reg.create_group(&[v[0], v[1]]);
        assert!(reg.group_of(v[0]).is_some());
        assert!(reg.group_of(v[2]).is_none());
    }

    #[test]
    fn test_remove_shapes_dissolves_tiny_groups() {
        let v = ids(3);
        let mut reg = GroupRegistry::new();
        reg.create_group(&[v[0], v[1], v[2]]);

        reg.remove_shapes(&[v[0], v[1]].into_iter().collect());
        assert!(reg.is_empty());
    }
}
