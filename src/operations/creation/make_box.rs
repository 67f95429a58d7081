use crate::error::{OperationError, Result};
use crate::geometry::{PolygonFace, Polyhedron};
use crate::math::{Point3, TOLERANCE};

/// Creates an axis-aligned box polyhedron from two corner points.
///
/// The six faces come out in a fixed order, see the associated index
/// constants.
pub struct MakeBox {
    min_corner: Point3,
    max_corner: Point3,
}

impl MakeBox {
    /// Index of the face at minimum y.
    pub const FRONT: usize = 0;
    /// Index of the face at maximum y.
    pub const BACK: usize = 1;
    /// Index of the face at maximum z.
    pub const TOP: usize = 2;
    /// Index of the face at minimum z.
    pub const BOTTOM: usize = 3;
    /// Index of the face at minimum x.
    pub const LEFT: usize = 4;
    /// Index of the face at maximum x.
    pub const RIGHT: usize = 5;

    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// Executes the operation, returning the box.
    ///
    /// # Errors
    ///
    /// Returns an error if a corner coordinate is not finite or any extent of
    /// the box is below [`TOLERANCE`].
    pub fn execute(&self) -> Result<Polyhedron> {
        let corners = self.min_corner.coords.iter().chain(self.max_corner.coords.iter());
        if !corners.copied().all(f64::is_finite) {
            return Err(OperationError::InvalidInput(format!(
                "box corners must be finite, got {:?} and {:?}",
                self.min_corner, self.max_corner
            ))
            .into());
        }
        let extent = self.max_corner - self.min_corner;
        if extent.x < TOLERANCE || extent.y < TOLERANCE || extent.z < TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "box extents must be positive, got ({}, {}, {})",
                extent.x, extent.y, extent.z
            ))
            .into());
        }

        let (x0, y0, z0) = (self.min_corner.x, self.min_corner.y, self.min_corner.z);
        let (x1, y1, z1) = (self.max_corner.x, self.max_corner.y, self.max_corner.z);
        let p = Point3::new;

        let loops = [
            // front
            vec![p(x0, y0, z0), p(x1, y0, z0), p(x1, y0, z1), p(x0, y0, z1)],
            // back
            vec![p(x0, y1, z0), p(x0, y1, z1), p(x1, y1, z1), p(x1, y1, z0)],
            // top
            vec![p(x0, y0, z1), p(x1, y0, z1), p(x1, y1, z1), p(x0, y1, z1)],
            // bottom
            vec![p(x0, y0, z0), p(x0, y1, z0), p(x1, y1, z0), p(x1, y0, z0)],
            // left
            vec![p(x0, y0, z0), p(x0, y0, z1), p(x0, y1, z1), p(x0, y1, z0)],
            // right
            vec![p(x1, y0, z0), p(x1, y1, z0), p(x1, y1, z1), p(x1, y0, z1)],
        ];

        let faces = loops
            .into_iter()
            .map(PolygonFace::new)
            .collect::<Result<Vec<_>>>()?;
        tracing::trace!(min = ?self.min_corner, max = ?self.max_corner, "box created");
        Ok(Polyhedron::new(faces))
    }
}
