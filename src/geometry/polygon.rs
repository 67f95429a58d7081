use crate::error::{GeometryError, Result};
use crate::math::{points_coincide, Point3};

use super::{BoundaryElement, BoundaryFace, Segment};

/// A planar face bounded by a single closed loop of straight edges.
///
/// The loop is implicit: the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonFace {
    vertices: Vec<Point3>,
}

impl PolygonFace {
    /// Creates a polygon face from its vertex loop.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 vertices are given, a vertex is not
    /// finite, or two consecutive vertices coincide.
    pub fn new(vertices: Vec<Point3>) -> Result<Self> {
        let n = vertices.len();
        if n < 3 {
            return Err(GeometryError::Degenerate(format!(
                "polygon face needs at least 3 vertices, got {n}"
            ))
            .into());
        }
        if !vertices.iter().all(|v| v.coords.iter().all(|c| c.is_finite())) {
            return Err(GeometryError::Degenerate(
                "polygon face has a non-finite vertex".into(),
            )
            .into());
        }
        for i in 0..n {
            if points_coincide(&vertices[i], &vertices[(i + 1) % n]) {
                return Err(GeometryError::Degenerate(
                    "polygon face has coincident consecutive vertices".into(),
                )
                .into());
            }
        }
        Ok(Self { vertices })
    }

    /// Returns the vertex loop.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns the index of the vertex coinciding with `point`, if any.
    #[must_use]
    pub fn position_of(&self, point: &Point3) -> Option<usize> {
        self.vertices.iter().position(|v| points_coincide(v, point))
    }

    /// Returns `true` if `point` is one of the vertices of this face.
    #[must_use]
    pub fn contains_vertex(&self, point: &Point3) -> bool {
        self.position_of(point).is_some()
    }

    /// Returns the loop index `i` such that the edge from vertex `i` to vertex
    /// `i + 1` is the same as `edge`.
    #[must_use]
    pub fn edge_index(&self, edge: &Segment) -> Option<usize> {
        self.boundary_edges().iter().position(|e| e.is_same(edge))
    }
}

impl BoundaryElement for PolygonFace {
    /// Loops match up to cyclic rotation and reversal.
    fn is_same(&self, other: &Self) -> bool {
        let n = self.vertices.len();
        if n != other.vertices.len() {
            return false;
        }
        let Some(offset) = other.position_of(&self.vertices[0]) else {
            return false;
        };
        let forward = (0..n)
            .all(|i| points_coincide(&self.vertices[i], &other.vertices[(offset + i) % n]));
        let backward = (0..n)
            .all(|i| points_coincide(&self.vertices[i], &other.vertices[(offset + n - i) % n]));
        forward || backward
    }
}

impl BoundaryFace for PolygonFace {
    type Edge = Segment;

    fn boundary_edges(&self) -> Vec<Segment> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit_square() -> Vec<Point3> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn square_has_four_closing_edges() {
        let face = PolygonFace::new(unit_square()).unwrap();
        let edges = face.boundary_edges();
        assert_eq!(edges.len(), 4);
        assert!(edges[3].is_same(&Segment::new(p(0.0, 1.0, 0.0), p(0.0, 0.0, 0.0))));
    }

    #[test]
    fn rotated_and_reversed_loops_are_same() {
        let face = PolygonFace::new(unit_square()).unwrap();

        let mut rotated = unit_square();
        rotated.rotate_left(2);
        assert!(face.is_same(&PolygonFace::new(rotated).unwrap()));

        let mut reversed = unit_square();
        reversed.reverse();
        assert!(face.is_same(&PolygonFace::new(reversed).unwrap()));
    }

    #[test]
    fn different_loops_are_not_same() {
        let face = PolygonFace::new(unit_square()).unwrap();

        let mut moved = unit_square();
        moved[2] = p(2.0, 1.0, 0.0);
        assert!(!face.is_same(&PolygonFace::new(moved).unwrap()));

        let mut pentagon = unit_square();
        pentagon.insert(1, p(0.5, -0.5, 0.0));
        assert!(!face.is_same(&PolygonFace::new(pentagon).unwrap()));
    }

    #[test]
    fn same_vertices_in_different_order_are_not_same() {
        let face = PolygonFace::new(unit_square()).unwrap();
        let mut crossed = unit_square();
        crossed.swap(1, 2);
        assert!(!face.is_same(&PolygonFace::new(crossed).unwrap()));
    }

    #[test]
    fn edge_index_finds_either_direction() {
        let face = PolygonFace::new(unit_square()).unwrap();
        let edge = Segment::new(p(1.0, 1.0, 0.0), p(1.0, 0.0, 0.0));
        assert_eq!(face.edge_index(&edge), Some(1));
        assert_eq!(
            face.edge_index(&Segment::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0))),
            None
        );
    }

    #[test]
    fn too_few_vertices_fails() {
        let result = PolygonFace::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]);
        assert!(matches!(result, Err(Error::Geometry(_))));
    }

    #[test]
    fn non_finite_vertex_fails() {
        let mut loop_ = unit_square();
        loop_[2] = p(f64::NAN, 1.0, 0.0);
        assert!(matches!(PolygonFace::new(loop_), Err(Error::Geometry(_))));
    }

    #[test]
    fn coincident_vertices_fail() {
        let mut loop_ = unit_square();
        loop_[1] = loop_[0];
        assert!(PolygonFace::new(loop_).is_err());
    }
}
