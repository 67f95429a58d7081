mod chamfer;
mod split;

pub use chamfer::ChamferEdge;
pub use split::SplitEdge;
