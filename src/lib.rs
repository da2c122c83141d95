#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod image;
pub mod trimap;
pub mod types;

// Building blocks – public for advanced users and tests, but the engine is
// the intended entry point.
pub mod energy;
pub mod gmm;
pub mod solver;

// --- High-level re-exports -------------------------------------------------

// Main entry points: engine + result.
pub use crate::engine::{Segmenter, SegmenterParams};
pub use crate::error::{SampleSet, SegmentationError};
pub use crate::types::SegmentationResult;

// Solver seam and the provided adapter.
pub use crate::solver::{DinicSolver, GraphCutSolver};

// Input grids.
pub use crate::trimap::{Matte, Rect, Trimap, TrimapLabel};

// Per-pass diagnostics.
pub use crate::diagnostics::PassTrace;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use segcut::prelude::*;
///
/// # fn main() -> Result<(), segcut::SegmentationError> {
/// let image = ImageRgbF32::new(320, 240);
/// let rect = Rect { x: 40, y: 30, w: 240, h: 180 };
/// let trimap = Trimap::from_rect(image.w, image.h, rect);
/// let matte = Matte::from_rect(image.w, image.h, rect);
///
/// let segmenter = Segmenter::new(SegmenterParams::default());
/// let result = segmenter.run_pass(&image, &trimap, &matte, &DinicSolver)?;
/// println!(
///     "foreground={} latency_ms={:.3}",
///     result.foreground_count, result.latency_ms
/// );
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageRgbF32;
    pub use crate::{
        DinicSolver, Matte, Rect, SegmentationResult, Segmenter, SegmenterParams, Trimap,
        TrimapLabel,
    };
}
