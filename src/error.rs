use thiserror::Error;

use crate::naming::{EdgeName, FaceName};

/// Top-level error type for the toponame crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tracking(#[from] TrackingError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised by the reference polyhedral kernel.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Precondition violations reported by the topology tracker.
///
/// None of these are retried internally; the tracker state is left exactly as
/// it was before the failing call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackingError {
    #[error("face is already tracked as {existing}")]
    DuplicateFace { existing: FaceName },

    #[error("face is not being tracked")]
    UnknownFace,

    #[error("{face} cannot claim {edge}: it is already shared by {claimants:?}")]
    TooManySharers {
        edge: EdgeName,
        face: FaceName,
        claimants: Vec<FaceName>,
    },

    #[error("invalid edge: {0}")]
    InvalidEdge(String),

    #[error("no edge is shared by {first} and {second}")]
    NoSharedEdge { first: FaceName, second: FaceName },

    #[error("no current edge is shared by {first} and {second}")]
    NoMatch { first: FaceName, second: FaceName },
}

/// Errors related to shape-level and feature operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
