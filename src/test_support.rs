//! Value-keyed stand-ins for kernel elements.
//!
//! Two mock elements are the same when their values match, which lets tests
//! say "this face shares that edge" by copying an edge between faces.

use crate::geometry::{BoundaryElement, BoundaryFace, Shape};

pub const FRONT: usize = 0;
pub const BACK: usize = 1;
pub const TOP: usize = 2;
pub const BOTTOM: usize = 3;
pub const LEFT: usize = 4;
pub const RIGHT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockEdge(pub u32);

impl BoundaryElement for MockEdge {
    fn is_same(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockFace {
    pub value: u32,
    pub edges: Vec<MockEdge>,
}

impl BoundaryElement for MockFace {
    fn is_same(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl BoundaryFace for MockFace {
    type Edge = MockEdge;

    fn boundary_edges(&self) -> Vec<MockEdge> {
        self.edges.clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockSolid {
    pub faces: Vec<MockFace>,
}

impl Shape for MockSolid {
    type Face = MockFace;

    fn faces(&self) -> Vec<MockFace> {
        self.faces.clone()
    }
}

/// Hands out mock elements with values that never repeat.
#[derive(Debug, Default)]
pub struct MockMaker {
    faces: u32,
    edges: u32,
}

impl MockMaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edge(&mut self) -> MockEdge {
        let edge = MockEdge(self.edges);
        self.edges += 1;
        edge
    }

    /// A face bounded by four fresh edges.
    pub fn face(&mut self) -> MockFace {
        let edges = (0..4).map(|_| self.edge()).collect();
        self.face_with(edges)
    }

    pub fn face_with(&mut self, edges: Vec<MockEdge>) -> MockFace {
        let face = MockFace {
            value: self.faces,
            edges,
        };
        self.faces += 1;
        face
    }

    /// A box: six faces of four edges each, every edge shared by two faces.
    ///
    /// Faces are indexed by [`FRONT`], [`BACK`], [`TOP`], [`BOTTOM`],
    /// [`LEFT`] and [`RIGHT`].
    pub fn box_solid(&mut self) -> MockSolid {
        let front: Vec<MockEdge> = (0..4).map(|_| self.edge()).collect();
        let back: Vec<MockEdge> = (0..4).map(|_| self.edge()).collect();
        let (top_left, top_right) = (self.edge(), self.edge());
        let (bottom_left, bottom_right) = (self.edge(), self.edge());

        let faces = vec![
            self.face_with(front.clone()),
            self.face_with(back.clone()),
            self.face_with(vec![front[0], back[0], top_left, top_right]),
            self.face_with(vec![front[1], back[1], bottom_left, bottom_right]),
            self.face_with(vec![front[2], back[2], top_left, bottom_left]),
            self.face_with(vec![front[3], back[3], top_right, bottom_right]),
        ];
        MockSolid { faces }
    }

    /// A cylinder as three faces: two caps with one edge each and a lateral
    /// face bounded by both cap edges and a seam.
    pub fn cylinder(&mut self) -> MockSolid {
        let (bottom, top, seam) = (self.edge(), self.edge(), self.edge());
        MockSolid {
            faces: vec![
                self.face_with(vec![bottom]),
                self.face_with(vec![top]),
                self.face_with(vec![bottom, top, seam]),
            ],
        }
    }

    /// Rebuilds a box with a fillet between its front and top faces.
    ///
    /// Every face of the returned box is new geometry. The front and top faces
    /// lose their common edge to the fillet; the left and right faces each gain
    /// a fifth edge from it. Returns the fillet face and the new box.
    pub fn fillet_front_top(&mut self) -> (MockFace, MockSolid) {
        let mut rebuilt = self.box_solid();
        let fillet = self.face();

        rebuilt.faces[FRONT].edges[0] = fillet.edges[0];
        rebuilt.faces[TOP].edges[0] = fillet.edges[1];
        rebuilt.faces[LEFT].edges.push(fillet.edges[2]);
        rebuilt.faces[RIGHT].edges.push(fillet.edges[3]);

        (fillet, rebuilt)
    }
}

/// Installs a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("toponame=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
