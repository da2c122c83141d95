//! Min-cut solver boundary.
//!
//! The engine treats the solver as an opaque graph-optimization service: it
//! submits a populated [`EnergyGraph`](crate::energy::EnergyGraph) and gets
//! back one boolean per pixel naming the terminal side that pixel fell on.
//! Keeping the seam this narrow means the core carries no dependency on any
//! particular solver's graph representation, and tests can plug in a stub.
//!
//! Weights are non-negative by construction upstream; behavior for negative
//! weights is a caller error and left unspecified.

pub mod dinic;

pub use dinic::DinicSolver;

use crate::energy::EnergyGraph;
use crate::error::SegmentationError;

/// Narrow interface to a min-cut/max-flow implementation.
///
/// For every pixel node the returned vector holds `true` when the node ends
/// on the foreground-terminal side of the minimum cut. Implementations must
/// be deterministic for identical weights.
pub trait GraphCutSolver {
    fn solve(&self, graph: &EnergyGraph) -> Result<Vec<bool>, SegmentationError>;
}
