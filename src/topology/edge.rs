use crate::error::TrackingError;
use crate::naming::{EdgeName, FaceName};

slotmap::new_key_type! {
    /// Unique identifier for a tracked edge in a topology tracker.
    pub struct TrackedEdgeId;
}

/// An edge element bound to its persistent name and the faces claiming it.
///
/// An edge is valid while exactly two faces claim it. Records are never
/// removed: an edge that loses its claimants stays tracked so the same
/// geometry can be recognised if it becomes shared again.
#[derive(Debug, Clone)]
pub struct TrackedEdge<E> {
    edge: E,
    name: EdgeName,
    /// At most two names, in claim order.
    face_names: Vec<FaceName>,
    /// The claimant pair the last time this edge was valid. Empty until then.
    last_valid_face_names: Vec<FaceName>,
}

impl<E> TrackedEdge<E> {
    /// Creates an unclaimed tracked edge.
    #[must_use]
    pub fn new(edge: E, name: EdgeName) -> Self {
        Self {
            edge,
            name,
            face_names: Vec::with_capacity(2),
            last_valid_face_names: Vec::new(),
        }
    }

    /// Returns the edge element.
    #[must_use]
    pub fn edge(&self) -> &E {
        &self.edge
    }

    /// Returns the persistent name.
    #[must_use]
    pub fn name(&self) -> &EdgeName {
        &self.name
    }

    /// Returns the names of the faces currently claiming this edge.
    #[must_use]
    pub fn face_names(&self) -> &[FaceName] {
        &self.face_names
    }

    /// Returns the claimant pair recorded the last time this edge was valid.
    #[must_use]
    pub fn last_valid_face_names(&self) -> &[FaceName] {
        &self.last_valid_face_names
    }

    /// Returns `true` if `face` currently claims this edge.
    #[must_use]
    pub fn has_face(&self, face: &FaceName) -> bool {
        self.face_names.contains(face)
    }

    /// Returns `true` if exactly two faces claim this edge.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.face_names.len() == 2
    }

    /// Returns the claimants other than `face`.
    #[must_use]
    pub fn claimants_other_than(&self, face: &FaceName) -> Vec<FaceName> {
        self.face_names
            .iter()
            .filter(|name| *name != face)
            .cloned()
            .collect()
    }

    /// Adds `face` as a claimant. Claiming twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::TooManySharers`] if two other faces already
    /// claim this edge; the claimant set is left untouched.
    pub fn attach_face(&mut self, face: &FaceName) -> Result<(), TrackingError> {
        if self.has_face(face) {
            return Ok(());
        }
        if self.face_names.len() == 2 {
            return Err(TrackingError::TooManySharers {
                edge: self.name.clone(),
                face: face.clone(),
                claimants: self.face_names.clone(),
            });
        }
        self.face_names.push(face.clone());
        if self.is_valid() {
            self.last_valid_face_names.clone_from(&self.face_names);
        }
        tracing::trace!(edge = %self.name, face = %face, "edge claimed");
        Ok(())
    }

    /// Removes `face` from the claimants, returning whether it was present.
    pub fn detach_face(&mut self, face: &FaceName) -> bool {
        let before = self.face_names.len();
        self.face_names.retain(|name| name != face);
        before != self.face_names.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn face(name: &str) -> FaceName {
        FaceName::new(name)
    }

    fn tracked() -> TrackedEdge<u32> {
        TrackedEdge::new(0, EdgeName::new("Edge000"))
    }

    #[test]
    fn new_edge_is_unclaimed_and_invalid() {
        let edge = tracked();
        assert!(edge.face_names().is_empty());
        assert!(!edge.is_valid());
        assert!(edge.last_valid_face_names().is_empty());
    }

    #[test]
    fn two_claimants_make_it_valid() {
        let mut edge = tracked();
        edge.attach_face(&face("Face000")).unwrap();
        assert!(!edge.is_valid());
        edge.attach_face(&face("Face001")).unwrap();
        assert!(edge.is_valid());
        assert_eq!(edge.face_names(), &[face("Face000"), face("Face001")]);
        assert_eq!(edge.last_valid_face_names(), edge.face_names());
    }

    #[test]
    fn third_claimant_is_rejected() {
        let mut edge = tracked();
        edge.attach_face(&face("Face000")).unwrap();
        edge.attach_face(&face("Face001")).unwrap();

        let err = edge.attach_face(&face("Face002")).unwrap_err();
        assert!(matches!(err, TrackingError::TooManySharers { ref face, .. } if face == &"Face002"));
        assert_eq!(edge.face_names(), &[face("Face000"), face("Face001")]);
    }

    #[test]
    fn repeated_claim_is_idempotent() {
        let mut edge = tracked();
        edge.attach_face(&face("Face000")).unwrap();
        edge.attach_face(&face("Face000")).unwrap();
        assert_eq!(edge.face_names().len(), 1);
        assert!(!edge.is_valid());
    }

    #[test]
    fn detach_invalidates_but_keeps_last_valid_pair() {
        let mut edge = tracked();
        edge.attach_face(&face("Face000")).unwrap();
        edge.attach_face(&face("Face001")).unwrap();

        assert!(edge.detach_face(&face("Face000")));
        assert!(!edge.is_valid());
        assert_eq!(edge.face_names(), &[face("Face001")]);
        assert_eq!(
            edge.last_valid_face_names(),
            &[face("Face000"), face("Face001")]
        );

        assert!(!edge.detach_face(&face("Face000")));
    }

    #[test]
    fn claimants_other_than() {
        let mut edge = tracked();
        edge.attach_face(&face("Face000")).unwrap();
        edge.attach_face(&face("Face001")).unwrap();
        assert_eq!(edge.claimants_other_than(&face("Face001")), vec![face("Face000")]);
        assert_eq!(edge.claimants_other_than(&face("Face009")).len(), 2);
    }
}
