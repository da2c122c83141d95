//! Per-pass diagnostics returned alongside the segmentation.
//!
//! [`PassTrace`] bundles input statistics, per-stage timings and the key
//! numbers each stage produced (sample counts, beta, max weight, cut sizes)
//! so demo binaries can dump a JSON report of exactly what a pass did.
use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of the pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one segmentation pass.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn with_total(total_ms: f64) -> Self {
        Self {
            total_ms,
            stages: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Input grids as seen by the pass.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub background_pixels: usize,
    pub foreground_seeds: usize,
    pub unknown_pixels: usize,
}

/// Mixture-model fitting statistics.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelFitStage {
    pub elapsed_ms: f64,
    pub background_samples: usize,
    pub foreground_samples: usize,
    pub components_per_model: usize,
}

/// Energy graph construction statistics.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStage {
    pub elapsed_ms: f64,
    pub beta: f32,
    pub max_weight: f32,
    pub pairwise_edges: usize,
}

/// Min-cut solve and matte clipping statistics.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveStage {
    pub elapsed_ms: f64,
    /// Pixels on the foreground side of the cut, before matte clipping.
    pub cut_foreground_pixels: usize,
    /// Foreground-side pixels discarded because the matte excluded them.
    pub clipped_by_matte: usize,
}

/// End-to-end trace describing the internal execution of one pass.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub model_fit: ModelFitStage,
    pub graph: GraphStage,
    pub solve: SolveStage,
}
