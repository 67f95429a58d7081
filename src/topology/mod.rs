pub mod edge;
pub mod face;

pub use edge::{TrackedEdge, TrackedEdgeId};
pub use face::{TrackedFace, TrackedFaceId};

use std::collections::HashMap;
use std::fmt;

use slotmap::SlotMap;

use crate::error::TrackingError;
use crate::geometry::{BoundaryElement, BoundaryFace};
use crate::naming::{EdgeName, FaceName, NameCounter};

/// How one boundary edge of a face will be claimed once a change commits.
enum Claim<E> {
    /// The edge is already tracked.
    Existing(TrackedEdgeId),
    /// The edge is new and needs a record and a name.
    Fresh(E),
}

/// Tracks the faces and edges of one solid under persistent names.
///
/// Faces are fed in with [`add_face`](Self::add_face) when a solid is first
/// tracked, and replaced with [`modify_face`](Self::modify_face) after each
/// feature operation. A face keeps its name across modification; its edge
/// associations are rediscovered from the new geometry every time.
///
/// Records live in arenas keyed by surrogate IDs and are never removed.
/// Names are also indexed, but equality lookups scan in insertion order since
/// kernel elements cannot be hashed.
pub struct TopologyTracker<F: BoundaryFace> {
    faces: SlotMap<TrackedFaceId, TrackedFace<F>>,
    edges: SlotMap<TrackedEdgeId, TrackedEdge<F::Edge>>,
    face_order: Vec<TrackedFaceId>,
    edge_order: Vec<TrackedEdgeId>,
    face_index: HashMap<FaceName, TrackedFaceId>,
    edge_index: HashMap<EdgeName, TrackedEdgeId>,
    names: NameCounter,
}

impl<F: BoundaryFace> Default for TopologyTracker<F> {
    fn default() -> Self {
        Self {
            faces: SlotMap::with_key(),
            edges: SlotMap::with_key(),
            face_order: Vec::new(),
            edge_order: Vec::new(),
            face_index: HashMap::new(),
            edge_index: HashMap::new(),
            names: NameCounter::new(),
        }
    }
}

impl<F: BoundaryFace> fmt::Debug for TopologyTracker<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TopologyTracker")
            .field("faces", &self.face_order.len())
            .field("edges", &self.edge_order.len())
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}

impl<F: BoundaryFace> TopologyTracker<F> {
    /// Creates an empty tracker. Name counters start at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Mutation ---

    /// Starts tracking `face` and returns its new persistent name.
    ///
    /// Each bounding edge either claims an existing tracked edge that is the
    /// same element, or becomes a new tracked edge with a fresh name.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::DuplicateFace`] if an equal face is already
    /// tracked and not released, or [`TrackingError::TooManySharers`] if one of its edges is
    /// already shared by two faces. Nothing is changed on error.
    pub fn add_face(&mut self, face: F) -> Result<FaceName, TrackingError> {
        if let Some(existing) = self.find_face(&face) {
            return Err(TrackingError::DuplicateFace {
                existing: self.faces[existing].name().clone(),
            });
        }

        let name = self.names.peek_face_name();
        let edges = face.boundary_edges();
        let plan = self.plan_claims(&name, edges)?;

        let name = self.names.next_face_name();
        let id = self.faces.insert(TrackedFace::new(face, name.clone()));
        self.face_order.push(id);
        self.face_index.insert(name.clone(), id);
        let claimed = plan.len();
        self.commit_claims(&name, plan)?;

        tracing::debug!(face = %name, edges = claimed, "face added");
        Ok(name)
    }

    /// Replaces the tracked face equal to `old` with `new`, keeping its name.
    ///
    /// The face is removed from every edge it claimed, then claims the edges
    /// of `new` exactly as [`add_face`](Self::add_face) would. Edges it no
    /// longer touches stay tracked, with one claimant fewer.
    ///
    /// Every claim is checked before anything is changed, so a failing call
    /// leaves the tracker untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::UnknownFace`] if no live tracked face equals
    /// `old`, [`TrackingError::DuplicateFace`] if `new` equals a different
    /// live face, or [`TrackingError::TooManySharers`] if one of the new edges
    /// is already shared by two other faces.
    pub fn modify_face(&mut self, old: &F, new: F) -> Result<FaceName, TrackingError> {
        let id = self.find_face(old).ok_or(TrackingError::UnknownFace)?;
        self.replace_tracked(id, new)
    }

    /// Replaces the face tracked under `name` with `new`.
    ///
    /// Behaves like [`modify_face`](Self::modify_face), but also accepts a
    /// released face, which becomes live again.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::UnknownFace`] if no face has that name, and
    /// otherwise the same errors as [`modify_face`](Self::modify_face).
    pub fn modify_face_by_name(
        &mut self,
        name: &FaceName,
        new: F,
    ) -> Result<FaceName, TrackingError> {
        let id = self
            .face_index
            .get(name)
            .copied()
            .ok_or(TrackingError::UnknownFace)?;
        self.replace_tracked(id, new)
    }

    /// Removes the tracked face equal to `face` from every edge it claims.
    ///
    /// The record and its name are kept, so the face can still be rebuilt
    /// with [`modify_face_by_name`](Self::modify_face_by_name). A released
    /// face no longer matches by geometry: [`get_face_name`](Self::get_face_name)
    /// does not find it, and an equal face may be added again under a new
    /// name.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::UnknownFace`] if no live tracked face equals
    /// `face`.
    pub fn release_face(&mut self, face: &F) -> Result<FaceName, TrackingError> {
        let id = self.find_face(face).ok_or(TrackingError::UnknownFace)?;
        let name = self.faces[id].name().clone();
        let released = self.detach_everywhere(&name);
        self.faces[id].release();
        tracing::debug!(face = %name, released, "face released");
        Ok(name)
    }

    // --- Edge queries ---

    /// Returns the name of the tracked edge equal to `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::InvalidEdge`] if the edge is not tracked or is
    /// not currently shared by exactly two faces.
    pub fn get_edge_name(&self, edge: &F::Edge) -> Result<EdgeName, TrackingError> {
        let id = self
            .find_edge(edge)
            .ok_or_else(|| TrackingError::InvalidEdge("edge is not tracked".into()))?;
        let tracked = &self.edges[id];
        if !tracked.is_valid() {
            return Err(TrackingError::InvalidEdge(format!(
                "{} is not shared by exactly two faces",
                tracked.name()
            )));
        }
        Ok(tracked.name().clone())
    }

    /// Returns the name of the edge currently shared by `first` and `second`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::NoSharedEdge`] if no edge is claimed by
    /// exactly those two faces.
    pub fn get_edge_name_from_faces(
        &self,
        first: &FaceName,
        second: &FaceName,
    ) -> Result<EdgeName, TrackingError> {
        self.tracked_edges()
            .find(|edge| first != second && edge.has_face(first) && edge.has_face(second))
            .map(|edge| edge.name().clone())
            .ok_or_else(|| TrackingError::NoSharedEdge {
                first: first.clone(),
                second: second.clone(),
            })
    }

    /// Resolves a persistent edge name to the current edge elements it denotes.
    ///
    /// The named edge is identified by the pair of faces that last shared it.
    /// Every tracked edge currently shared by that same pair is returned, so an
    /// edge that was split while both faces were rebuilt resolves to all of its
    /// pieces. A piece issued under a different name resolves the same way.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::InvalidEdge`] if the name was never issued or
    /// the edge was never shared by two faces, and [`TrackingError::NoMatch`]
    /// if those two faces no longer share any edge.
    pub fn get_edge_by_name(&self, name: &EdgeName) -> Result<Vec<&F::Edge>, TrackingError> {
        let id = self
            .edge_index
            .get(name)
            .copied()
            .ok_or_else(|| TrackingError::InvalidEdge(format!("{name} was never issued")))?;
        let [first, second] = self.edges[id].last_valid_face_names() else {
            return Err(TrackingError::InvalidEdge(format!(
                "{name} was never shared by two faces"
            )));
        };

        let matches: Vec<&F::Edge> = self
            .tracked_edges()
            .filter(|edge| edge.has_face(first) && edge.has_face(second))
            .map(TrackedEdge::edge)
            .collect();
        if matches.is_empty() {
            return Err(TrackingError::NoMatch {
                first: first.clone(),
                second: second.clone(),
            });
        }
        Ok(matches)
    }

    /// Returns the names of the edges currently claimed by `face`.
    #[must_use]
    pub fn edges_of_face(&self, face: &FaceName) -> Vec<&EdgeName> {
        self.tracked_edges()
            .filter(|edge| edge.has_face(face))
            .map(TrackedEdge::name)
            .collect()
    }

    // --- Face queries ---

    /// Returns the name of the live tracked face equal to `face`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::UnknownFace`] if the face is not tracked or
    /// has been released.
    pub fn get_face_name(&self, face: &F) -> Result<FaceName, TrackingError> {
        self.find_face(face)
            .map(|id| self.faces[id].name().clone())
            .ok_or(TrackingError::UnknownFace)
    }

    /// Returns the current face element tracked under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingError::UnknownFace`] if no face has that name.
    pub fn get_face_by_name(&self, name: &FaceName) -> Result<&F, TrackingError> {
        self.face(name)
            .map(TrackedFace::face)
            .ok_or(TrackingError::UnknownFace)
    }

    // --- Accessors ---

    /// Returns the tracked face named `name`.
    #[must_use]
    pub fn face(&self, name: &FaceName) -> Option<&TrackedFace<F>> {
        self.face_index.get(name).map(|id| &self.faces[*id])
    }

    /// Returns the tracked edge named `name`.
    #[must_use]
    pub fn edge(&self, name: &EdgeName) -> Option<&TrackedEdge<F::Edge>> {
        self.edge_index.get(name).map(|id| &self.edges[*id])
    }

    /// Iterates over tracked faces in the order they were added.
    pub fn tracked_faces(&self) -> impl Iterator<Item = &TrackedFace<F>> + '_ {
        self.face_order.iter().map(|id| &self.faces[*id])
    }

    /// Iterates over tracked edges in the order they were created.
    pub fn tracked_edges(&self) -> impl Iterator<Item = &TrackedEdge<F::Edge>> + '_ {
        self.edge_order.iter().map(|id| &self.edges[*id])
    }

    /// Iterates over all face names.
    pub fn face_names(&self) -> impl Iterator<Item = &FaceName> + '_ {
        self.tracked_faces().map(TrackedFace::name)
    }

    /// Iterates over all edge names, valid or not.
    pub fn edge_names(&self) -> impl Iterator<Item = &EdgeName> + '_ {
        self.tracked_edges().map(TrackedEdge::name)
    }

    /// Iterates over the names of edges currently shared by two faces.
    pub fn valid_edge_names(&self) -> impl Iterator<Item = &EdgeName> + '_ {
        self.tracked_edges()
            .filter(|edge| edge.is_valid())
            .map(TrackedEdge::name)
    }

    /// Number of tracked faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.face_order.len()
    }

    /// Number of tracked edges, valid or not.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }

    /// Returns the first name in `base`'s suffix sequence not tracked here.
    #[must_use]
    pub fn sub_face_name(&self, base: &FaceName) -> FaceName {
        let mut name = base.sub_name();
        while self.face_index.contains_key(&name) {
            name = name.sub_name();
        }
        name
    }

    /// Returns the first name in `base`'s suffix sequence not tracked here.
    #[must_use]
    pub fn sub_edge_name(&self, base: &EdgeName) -> EdgeName {
        let mut name = base.sub_name();
        while self.edge_index.contains_key(&name) {
            name = name.sub_name();
        }
        name
    }

    // --- Internals ---

    /// Finds the live face equal to `face`. Released faces are skipped.
    fn find_face(&self, face: &F) -> Option<TrackedFaceId> {
        self.face_order.iter().copied().find(|id| {
            let tracked = &self.faces[*id];
            !tracked.is_released() && tracked.face().is_same(face)
        })
    }

    fn replace_tracked(&mut self, id: TrackedFaceId, new: F) -> Result<FaceName, TrackingError> {
        if let Some(other) = self.face_order.iter().copied().find(|other| {
            let tracked = &self.faces[*other];
            *other != id && !tracked.is_released() && tracked.face().is_same(&new)
        }) {
            return Err(TrackingError::DuplicateFace {
                existing: self.faces[other].name().clone(),
            });
        }

        let name = self.faces[id].name().clone();
        let plan = self.plan_claims(&name, new.boundary_edges())?;

        let released = self.detach_everywhere(&name);
        self.faces[id].replace_face(new);
        let claimed = plan.len();
        self.commit_claims(&name, plan)?;

        tracing::debug!(face = %name, released, claimed, "face modified");
        Ok(name)
    }

    fn find_edge(&self, edge: &F::Edge) -> Option<TrackedEdgeId> {
        self.edge_order
            .iter()
            .copied()
            .find(|id| self.edges[*id].edge().is_same(edge))
    }

    /// Works out how `face` will claim `edges` without changing anything.
    ///
    /// Claims already held by `face` are ignored, since they are dropped
    /// before the plan commits. An edge listed twice is claimed once.
    fn plan_claims(
        &self,
        face: &FaceName,
        edges: Vec<F::Edge>,
    ) -> Result<Vec<Claim<F::Edge>>, TrackingError> {
        let mut plan: Vec<Claim<F::Edge>> = Vec::with_capacity(edges.len());
        for edge in edges {
            if let Some(id) = self.find_edge(&edge) {
                if plan
                    .iter()
                    .any(|claim| matches!(claim, Claim::Existing(planned) if *planned == id))
                {
                    continue;
                }
                let tracked = &self.edges[id];
                let claimants = tracked.claimants_other_than(face);
                if claimants.len() >= 2 {
                    return Err(TrackingError::TooManySharers {
                        edge: tracked.name().clone(),
                        face: face.clone(),
                        claimants,
                    });
                }
                plan.push(Claim::Existing(id));
            } else if !plan
                .iter()
                .any(|claim| matches!(claim, Claim::Fresh(planned) if planned.is_same(&edge)))
            {
                plan.push(Claim::Fresh(edge));
            }
        }
        Ok(plan)
    }

    fn commit_claims(
        &mut self,
        face: &FaceName,
        plan: Vec<Claim<F::Edge>>,
    ) -> Result<(), TrackingError> {
        for claim in plan {
            let id = match claim {
                Claim::Existing(id) => id,
                Claim::Fresh(edge) => {
                    let name = self.names.next_edge_name();
                    tracing::trace!(edge = %name, face = %face, "edge created");
                    let id = self.edges.insert(TrackedEdge::new(edge, name.clone()));
                    self.edge_order.push(id);
                    self.edge_index.insert(name, id);
                    id
                }
            };
            self.edges[id].attach_face(face)?;
        }
        Ok(())
    }

    fn detach_everywhere(&mut self, face: &FaceName) -> usize {
        self.edges
            .values_mut()
            .map(|edge| edge.detach_face(face))
            .filter(|detached| *detached)
            .count()
    }
}
