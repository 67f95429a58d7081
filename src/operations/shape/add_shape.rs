use crate::error::Result;
use crate::geometry::Shape;
use crate::naming::FaceName;
use crate::topology::TopologyTracker;

/// Starts tracking every face of a solid.
pub struct AddShape<'a, S> {
    shape: &'a S,
}

impl<'a, S: Shape> AddShape<'a, S> {
    /// Creates a new `AddShape` operation.
    #[must_use]
    pub fn new(shape: &'a S) -> Self {
        Self { shape }
    }

    /// Adds the faces of the shape to `tracker` in the shape's face order.
    ///
    /// Returns the names issued, one per face.
    ///
    /// # Errors
    ///
    /// Returns the first tracking error encountered. Faces added before it
    /// stay tracked.
    pub fn execute(&self, tracker: &mut TopologyTracker<S::Face>) -> Result<Vec<FaceName>> {
        let faces = self.shape.faces();
        let mut names = Vec::with_capacity(faces.len());
        for face in faces {
            names.push(tracker.add_face(face)?);
        }
        tracing::debug!(faces = names.len(), "shape added");
        Ok(names)
    }
}
