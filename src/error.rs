//! Error types surfaced by a segmentation pass.
//!
//! Structural input problems (degenerate trimaps, mismatched grid sizes) fail
//! fast before any model fitting. Numeric edge cases inside the mixture math
//! (singular covariances, vanishing densities) are recovered locally with safe
//! fallbacks and never surface here. Solver failures are propagated unchanged.

use thiserror::Error;

/// Which of the two trimap-derived sample sets turned out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSet {
    /// Pixels labeled definite background.
    Background,
    /// Pixels labeled foreground seed or unknown.
    ForegroundEligible,
}

impl std::fmt::Display for SampleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleSet::Background => write!(f, "background"),
            SampleSet::ForegroundEligible => write!(f, "foreground-eligible"),
        }
    }
}

/// Error type for a segmentation pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SegmentationError {
    /// The trimap produced an empty sample set; both mixture models need at
    /// least one sample before a pass can run.
    #[error("degenerate trimap: the {which} sample set is empty")]
    EmptySampleSet { which: SampleSet },

    /// Two of the input grids disagree on their dimensions.
    #[error("{what} dimensions mismatch: expected {expected_w}x{expected_h}, got {actual_w}x{actual_h}")]
    DimensionMismatch {
        what: &'static str,
        expected_w: usize,
        expected_h: usize,
        actual_w: usize,
        actual_h: usize,
    },

    /// The external min-cut solver reported an internal failure.
    #[error("min-cut solver failed: {0}")]
    Solver(String),
}
