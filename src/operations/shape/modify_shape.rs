use std::collections::HashSet;

use crate::error::{OperationError, Result};
use crate::geometry::BoundaryFace;
use crate::naming::FaceName;
use crate::topology::TopologyTracker;

/// The faces a feature operation created, changed and removed.
///
/// The classification comes from whoever ran the operation; the tracker does
/// not try to work it out.
#[derive(Debug, Clone)]
pub struct ShapeChange<F> {
    /// Faces that did not exist before the operation.
    pub new_faces: Vec<F>,
    /// `(old, new)` pairs for faces that were rebuilt.
    pub modified_faces: Vec<(F, F)>,
    /// Faces that no longer exist.
    pub deleted_faces: Vec<F>,
}

impl<F> Default for ShapeChange<F> {
    fn default() -> Self {
        Self {
            new_faces: Vec::new(),
            modified_faces: Vec::new(),
            deleted_faces: Vec::new(),
        }
    }
}

impl<F> ShapeChange<F> {
    /// Creates an empty change.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a newly created face.
    #[must_use]
    pub fn with_new_face(mut self, face: F) -> Self {
        self.new_faces.push(face);
        self
    }

    /// Adds a rebuilt face.
    #[must_use]
    pub fn with_modified_face(mut self, old: F, new: F) -> Self {
        self.modified_faces.push((old, new));
        self
    }

    /// Adds a removed face.
    #[must_use]
    pub fn with_deleted_face(mut self, face: F) -> Self {
        self.deleted_faces.push(face);
        self
    }

    /// Returns `true` if the change lists no faces at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.new_faces.is_empty() && self.modified_faces.is_empty() && self.deleted_faces.is_empty()
    }
}

/// Names touched by a [`ModifyShape`] operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeChangeReport {
    /// Names issued to new faces.
    pub added: Vec<FaceName>,
    /// Names of rebuilt faces (unchanged by the rebuild).
    pub modified: Vec<FaceName>,
    /// Names of deleted faces, now detached from all edges.
    pub released: Vec<FaceName>,
}

/// Applies a [`ShapeChange`] to a tracker.
///
/// Deleted faces and the old side of every modified face are released first,
/// so edges shared only between rebuilt faces never see a transient third
/// claimant. New faces are then added and, last, modified faces re-claim
/// their edges.
pub struct ModifyShape<F> {
    change: ShapeChange<F>,
}

impl<F: BoundaryFace> ModifyShape<F> {
    /// Creates a new `ModifyShape` operation.
    #[must_use]
    pub fn new(change: ShapeChange<F>) -> Self {
        Self { change }
    }

    /// Executes the change against `tracker`.
    ///
    /// Every deleted face and every old modified face is resolved to a live
    /// tracked face before anything is released.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the change is empty or
    /// lists a face twice, and [`TrackingError::UnknownFace`] if a face to
    /// release is not tracked; in both cases the tracker is unchanged.
    /// Otherwise returns the first tracking error from adding or rebuilding a
    /// face. Each tracker call is atomic, but calls completed before such a
    /// failure stay applied.
    ///
    /// [`TrackingError::UnknownFace`]: crate::error::TrackingError::UnknownFace
    pub fn execute(&self, tracker: &mut TopologyTracker<F>) -> Result<ShapeChangeReport> {
        if self.change.is_empty() {
            return Err(OperationError::InvalidInput(
                "at least one new, modified or deleted face must be provided".into(),
            )
            .into());
        }

        let deleted = self
            .change
            .deleted_faces
            .iter()
            .map(|face| tracker.get_face_name(face))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let rebuilt = self
            .change
            .modified_faces
            .iter()
            .map(|(old, _)| tracker.get_face_name(old))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let mut seen = HashSet::new();
        if let Some(twice) = deleted.iter().chain(&rebuilt).find(|name| !seen.insert(*name)) {
            return Err(OperationError::InvalidInput(format!(
                "{twice} is listed more than once in the change"
            ))
            .into());
        }

        let mut report = ShapeChangeReport::default();
        for face in &self.change.deleted_faces {
            report.released.push(tracker.release_face(face)?);
        }
        for (old, _) in &self.change.modified_faces {
            tracker.release_face(old)?;
        }
        for face in &self.change.new_faces {
            report.added.push(tracker.add_face(face.clone())?);
        }
        for (name, (_, new)) in rebuilt.iter().zip(&self.change.modified_faces) {
            report.modified.push(tracker.modify_face_by_name(name, new.clone())?);
        }

        tracing::debug!(
            added = report.added.len(),
            modified = report.modified.len(),
            released = report.released.len(),
            "shape change applied"
        );
        Ok(report)
    }
}
