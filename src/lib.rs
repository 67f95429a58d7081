//! Persistent names for the faces and edges of a solid model.
//!
//! A [`TopologyTracker`] hands out names like `Face003` and `Edge011` and
//! keeps them attached to the same logical elements while feature operations
//! rebuild the solid underneath. Kernel elements are consumed through the
//! traits in [`geometry`]; a small polyhedral kernel is included.

pub mod error;
pub mod geometry;
pub mod math;
pub mod naming;
pub mod operations;
pub mod topology;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{Error, Result};
pub use naming::{EdgeName, FaceName};
pub use topology::TopologyTracker;
