use crate::error::{OperationError, Result};
use crate::geometry::{PolygonFace, Polyhedron, Segment};
use crate::math::Point3;
use crate::operations::shape::ShapeChange;

/// Splits an edge of a polyhedron in two at a point along it.
///
/// Every face bounded by the edge gets the point as an extra vertex; the
/// faces themselves stay where they are.
pub struct SplitEdge {
    edge: Segment,
    point: Point3,
}

impl SplitEdge {
    /// Creates a new `SplitEdge` operation.
    #[must_use]
    pub fn new(edge: Segment, point: Point3) -> Self {
        Self { edge, point }
    }

    /// Executes the split on `solid`, reporting every face using the edge as
    /// modified.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the point is not strictly
    /// inside the edge, or no face of `solid` is bounded by the edge.
    pub fn execute(&self, solid: &Polyhedron) -> Result<(Polyhedron, ShapeChange<PolygonFace>)> {
        if !self.edge.contains_interior(&self.point) {
            return Err(OperationError::InvalidInput(
                "split point must lie strictly inside the edge".into(),
            )
            .into());
        }
        let users = solid.faces_sharing(&self.edge);
        if users.is_empty() {
            return Err(
                OperationError::InvalidInput("split edge is not on the solid".into()).into(),
            );
        }

        let mut faces = solid.polygons().to_vec();
        let mut change = ShapeChange::new();
        for index in users {
            let old = &solid.polygons()[index];
            let at = old
                .edge_index(&self.edge)
                .ok_or_else(|| OperationError::Failed("split edge vanished from face".into()))?;
            let mut vertices = old.vertices().to_vec();
            vertices.insert(at + 1, self.point);
            let new = PolygonFace::new(vertices)?;
            change = change.with_modified_face(old.clone(), new.clone());
            faces[index] = new;
        }

        tracing::debug!(faces = change.modified_faces.len(), "edge split");
        Ok((Polyhedron::new(faces), change))
    }
}
