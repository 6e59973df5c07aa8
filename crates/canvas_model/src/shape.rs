//! Core shape trait

use crate::{Bounds, ShapeId, Stencil};

/// Common interface for all diagram shapes.
///
/// Dispatch between the two shape variants is by tagged lookup in the
/// graph's typed storage, not by trait objects; this trait exists for the
/// seams where code only needs identity, containment, and extent.
pub trait Shape: std::fmt::Debug {
    /// Get the unique ID of this shape
    fn id(&self) -> ShapeId;

    /// The stencil this shape was created from
    fn stencil(&self) -> &Stencil;

    /// Current geometric extent
    fn bounds(&self) -> Bounds;

    /// Get the ID of the parent shape (None for top-level shapes)
    fn parent(&self) -> Option<ShapeId>;

    /// Set the parent shape ID
    fn set_parent(&mut self, parent: Option<ShapeId>);

    /// IDs of child shapes
    fn children(&self) -> &[ShapeId] {
        &[]
    }

    /// Whether this shape may contain children
    fn can_have_children(&self) -> bool {
        false
    }
}
