use crate::math::Point3;

use super::{BoundaryElement, BoundaryFace, PolygonFace, Segment, Shape};

/// A solid bounded by planar polygon faces.
#[derive(Debug, Clone, Default)]
pub struct Polyhedron {
    faces: Vec<PolygonFace>,
}

impl Polyhedron {
    /// Creates a polyhedron from its faces.
    #[must_use]
    pub fn new(faces: Vec<PolygonFace>) -> Self {
        Self { faces }
    }

    /// Returns the faces of the polyhedron.
    #[must_use]
    pub fn polygons(&self) -> &[PolygonFace] {
        &self.faces
    }

    /// Returns the indices of the faces whose boundary contains `edge`.
    #[must_use]
    pub fn faces_sharing(&self, edge: &Segment) -> Vec<usize> {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, face)| face.boundary_edges().iter().any(|e| e.is_same(edge)))
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns the indices of the faces that have `point` as a vertex.
    #[must_use]
    pub fn faces_at(&self, point: &Point3) -> Vec<usize> {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, face)| face.contains_vertex(point))
            .map(|(i, _)| i)
            .collect()
    }
}

impl Shape for Polyhedron {
    type Face = PolygonFace;

    fn faces(&self) -> Vec<PolygonFace> {
        self.faces.clone()
    }
}
