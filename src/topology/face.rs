use crate::naming::FaceName;

slotmap::new_key_type! {
    /// Unique identifier for a tracked face in a topology tracker.
    pub struct TrackedFaceId;
}

/// A face element bound to its persistent name.
///
/// The name never changes. The element is replaced in place when the face is
/// modified, so the record (and its slot) outlive any one geometric version of
/// the face.
#[derive(Debug, Clone)]
pub struct TrackedFace<F> {
    face: F,
    name: FaceName,
    /// Face this one was split from, if any. Lineage only: the parent may be
    /// modified independently.
    parent: Option<TrackedFaceId>,
    /// Set while the face claims no edges because it was deleted or is about
    /// to be rebuilt.
    released: bool,
}

impl<F> TrackedFace<F> {
    /// Creates a tracked face with no parent.
    #[must_use]
    pub fn new(face: F, name: FaceName) -> Self {
        Self {
            face,
            name,
            parent: None,
            released: false,
        }
    }

    /// Creates a tracked face derived from `parent`.
    #[must_use]
    pub fn with_parent(face: F, name: FaceName, parent: TrackedFaceId) -> Self {
        Self {
            face,
            name,
            parent: Some(parent),
            released: false,
        }
    }

    /// Returns the current face element.
    #[must_use]
    pub fn face(&self) -> &F {
        &self.face
    }

    /// Returns the persistent name.
    #[must_use]
    pub fn name(&self) -> &FaceName {
        &self.name
    }

    /// Returns the parent face, if this face was split from another.
    #[must_use]
    pub fn parent(&self) -> Option<TrackedFaceId> {
        self.parent
    }

    /// Returns `true` if this face was split from `parent`.
    #[must_use]
    pub fn is_child_of(&self, parent: TrackedFaceId) -> bool {
        self.parent == Some(parent)
    }

    /// Returns `true` if the face has been released and not rebuilt since.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    pub(crate) fn release(&mut self) {
        self.released = true;
    }

    /// Swaps in a new face element, returning the previous one. A released
    /// face becomes live again.
    pub(crate) fn replace_face(&mut self, face: F) -> F {
        self.released = false;
        std::mem::replace(&mut self.face, face)
    }
}
