//! Boundary elements as the tracker sees them, plus a small polyhedral
//! kernel that implements them over nalgebra points.
//!
//! The tracker never inspects geometry directly. It only asks an element
//! whether it is the same boundary element as another one, and asks a face
//! for the edges that bound it.

mod polygon;
mod polyhedron;
mod segment;

pub use polygon::PolygonFace;
pub use polyhedron::Polyhedron;
pub use segment::Segment;

/// An opaque handle to a face or edge produced by a geometry kernel.
pub trait BoundaryElement: Clone {
    /// Returns `true` if `other` denotes the same boundary element.
    ///
    /// This is geometric sameness as decided by the kernel, not identity of
    /// the handles themselves: a kernel that regenerates a solid hands out
    /// fresh handles for elements that did not move.
    fn is_same(&self, other: &Self) -> bool;
}

/// A face-kind boundary element.
pub trait BoundaryFace: BoundaryElement {
    /// The edge-kind element type bounding this face.
    type Edge: BoundaryElement;

    /// Returns the edges bounding this face, in loop order.
    fn boundary_edges(&self) -> Vec<Self::Edge>;
}

/// A solid as supplied by a shape or feature wrapper.
pub trait Shape {
    /// The face type of this shape.
    type Face: BoundaryFace;

    /// Returns the faces of the solid, in the kernel's order.
    fn faces(&self) -> Vec<Self::Face>;
}
