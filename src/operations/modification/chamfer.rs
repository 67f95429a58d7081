use std::collections::BTreeSet;

use crate::error::{OperationError, Result};
use crate::geometry::{PolygonFace, Polyhedron, Segment};
use crate::math::{points_coincide, Point3, Vector3, TOLERANCE};
use crate::operations::shape::ShapeChange;

/// Bevels an edge of a polyhedron with a flat four-sided face.
///
/// The edge must be shared by exactly two faces, and each of its endpoints
/// must be a corner where exactly three faces meet. Both adjacent faces are
/// cut back by `distance` along their other edges at each corner, and the
/// face closing each corner gains one vertex.
pub struct ChamferEdge {
    edge: Segment,
    distance: f64,
}

impl ChamferEdge {
    /// Creates a new `ChamferEdge` operation.
    #[must_use]
    pub fn new(edge: Segment, distance: f64) -> Self {
        Self { edge, distance }
    }

    /// Executes the chamfer on `solid`.
    ///
    /// Returns the chamfered polyhedron, with the chamfer face last, and the
    /// change describing it: the chamfer face is new, the two trimmed faces
    /// and the two corner faces are modified.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the distance is not a
    /// finite positive number or not shorter than the edges it cuts along, the edge is not
    /// shared by exactly two faces, or an endpoint does not meet exactly
    /// three faces.
    pub fn execute(&self, solid: &Polyhedron) -> Result<(Polyhedron, ShapeChange<PolygonFace>)> {
        if !self.distance.is_finite() || self.distance < TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "chamfer distance must be positive, got {}",
                self.distance
            ))
            .into());
        }
        let &[first, second] = solid.faces_sharing(&self.edge).as_slice() else {
            return Err(OperationError::InvalidInput(
                "chamfer edge must be shared by exactly two faces".into(),
            )
            .into());
        };

        let polygons = solid.polygons();
        let (p, q) = (*self.edge.start(), *self.edge.end());
        let p1 = self.setback(&polygons[first], &p, &q)?;
        let q1 = self.setback(&polygons[first], &q, &p)?;
        let p2 = self.setback(&polygons[second], &p, &q)?;
        let q2 = self.setback(&polygons[second], &q, &p)?;

        let mut loops: Vec<Vec<Point3>> = polygons.iter().map(|f| f.vertices().to_vec()).collect();
        let mut changed = BTreeSet::from([first, second]);

        move_vertex(&mut loops[first], &p, p1);
        move_vertex(&mut loops[first], &q, q1);
        move_vertex(&mut loops[second], &p, p2);
        move_vertex(&mut loops[second], &q, q2);

        for (corner, on_first, on_second) in [(p, p1, p2), (q, q1, q2)] {
            let end_faces: Vec<usize> = solid
                .faces_at(&corner)
                .into_iter()
                .filter(|i| *i != first && *i != second)
                .collect();
            let &[end] = end_faces.as_slice() else {
                return Err(OperationError::InvalidInput(format!(
                    "chamfer corner must meet exactly three faces, found {}",
                    end_faces.len() + 2
                ))
                .into());
            };
            split_corner(&mut loops[end], &corner, on_first, on_second)?;
            changed.insert(end);
        }

        let chamfer = PolygonFace::new(vec![p1, q1, q2, p2])?;
        let mut faces = Vec::with_capacity(polygons.len() + 1);
        let mut change = ShapeChange::new().with_new_face(chamfer.clone());
        for (index, (old, vertices)) in polygons.iter().zip(loops).enumerate() {
            if changed.contains(&index) {
                let new = PolygonFace::new(vertices)?;
                change = change.with_modified_face(old.clone(), new.clone());
                faces.push(new);
            } else {
                faces.push(old.clone());
            }
        }
        faces.push(chamfer);

        tracing::debug!(
            distance = self.distance,
            modified = change.modified_faces.len(),
            "edge chamfered"
        );
        Ok((Polyhedron::new(faces), change))
    }

    /// Returns the point `distance` away from `corner` along the edge of
    /// `face` that leaves `corner` away from `other_end`.
    fn setback(&self, face: &PolygonFace, corner: &Point3, other_end: &Point3) -> Result<Point3> {
        let vertices = face.vertices();
        let n = vertices.len();
        let index = face
            .position_of(corner)
            .ok_or_else(|| OperationError::Failed("chamfer corner is not on its face".into()))?;
        let next = vertices[(index + 1) % n];
        let along = if points_coincide(&next, other_end) {
            vertices[(index + n - 1) % n]
        } else {
            next
        };

        let dir: Vector3 = along - corner;
        let length = dir.norm();
        if self.distance >= length - TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "chamfer distance {} is not shorter than adjacent edge of length {length}",
                self.distance
            ))
            .into());
        }
        Ok(corner + dir / length * self.distance)
    }
}

fn move_vertex(vertices: &mut [Point3], from: &Point3, to: Point3) {
    if let Some(v) = vertices.iter_mut().find(|v| points_coincide(v, from)) {
        *v = to;
    }
}

/// Replaces `corner` by the two cut points, ordered to follow the loop.
fn split_corner(vertices: &mut Vec<Point3>, corner: &Point3, a: Point3, b: Point3) -> Result<()> {
    let n = vertices.len();
    let index = vertices
        .iter()
        .position(|v| points_coincide(v, corner))
        .ok_or_else(|| OperationError::Failed("chamfer corner is not on its end face".into()))?;
    let previous = vertices[(index + n - 1) % n];
    let (first, second) = if Segment::new(*corner, previous).contains_interior(&a) {
        (a, b)
    } else {
        (b, a)
    };
    vertices.splice(index..=index, [first, second]);
    Ok(())
}
