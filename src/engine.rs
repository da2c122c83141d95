//! Segmentation engine driving one modeling + cut pass end-to-end.
//!
//! The [`Segmenter`] exposes a simple API: feed an RGB image, a trimap and a
//! matte, get a binary segmentation back. Internally it partitions pixels
//! into the two trimap-derived sample sets, fits a color mixture model per
//! class, builds the weighted grid graph and hands it to the supplied
//! min-cut solver, then clips the returned labeling with the matte.
//!
//! One call is one pass. The engine keeps no state between passes; callers
//! that want iterative refinement re-derive a trimap from the previous mask
//! and run another pass.
//!
//! Typical usage:
//! ```no_run
//! use segcut::prelude::*;
//!
//! # fn example(image: ImageRgbF32) -> Result<(), segcut::SegmentationError> {
//! let rect = Rect { x: 10, y: 10, w: 100, h: 80 };
//! let trimap = Trimap::from_rect(image.w, image.h, rect);
//! let matte = Matte::from_rect(image.w, image.h, rect);
//! let segmenter = Segmenter::new(SegmenterParams::default());
//! let result = segmenter.run_pass(&image, &trimap, &matte, &DinicSolver)?;
//! println!("foreground pixels: {}", result.foreground_count);
//! # Ok(())
//! # }
//! ```
use crate::diagnostics::{
    GraphStage, InputDescriptor, ModelFitStage, PassTrace, SolveStage, TimingBreakdown,
};
use crate::energy::{EnergyGraphBuilder, EnergyOptions};
use crate::error::{SampleSet, SegmentationError};
use crate::gmm::{GmmOptions, MixtureModel};
use crate::image::ImageRgbF32;
use crate::solver::GraphCutSolver;
use crate::trimap::{Matte, Trimap, TrimapLabel};
use crate::types::SegmentationResult;
use log::debug;
use nalgebra::Vector3;
use serde::Deserialize;
use std::time::Instant;

/// Engine-wide parameters for one segmentation pass.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SegmenterParams {
    /// Mixture-model configuration shared by both classes.
    pub gmm: GmmOptions,
    /// Energy graph construction configuration.
    pub energy: EnergyOptions,
}

/// Segmentation engine; stateless across passes.
#[derive(Clone, Debug, Default)]
pub struct Segmenter {
    params: SegmenterParams,
    builder: EnergyGraphBuilder,
}

impl Segmenter {
    /// Create an engine with the supplied parameters.
    pub fn new(params: SegmenterParams) -> Self {
        let builder = EnergyGraphBuilder::new(params.energy);
        Self { params, builder }
    }

    /// Run one segmentation pass, returning the clipped binary mask.
    pub fn run_pass(
        &self,
        image: &ImageRgbF32,
        trimap: &Trimap,
        matte: &Matte,
        solver: &dyn GraphCutSolver,
    ) -> Result<SegmentationResult, SegmentationError> {
        self.run_pass_with_trace(image, trimap, matte, solver)
            .map(|(result, _)| result)
    }

    /// Run one pass and also return the per-stage diagnostics trace.
    pub fn run_pass_with_trace(
        &self,
        image: &ImageRgbF32,
        trimap: &Trimap,
        matte: &Matte,
        solver: &dyn GraphCutSolver,
    ) -> Result<(SegmentationResult, PassTrace), SegmentationError> {
        let total_start = Instant::now();
        let (w, h) = (image.w, image.h);

        check_dimensions("trimap", w, h, trimap.w, trimap.h)?;
        check_dimensions("matte", w, h, matte.w, matte.h)?;

        let (bg_count, seed_count, unknown_count) = trimap.counts();
        debug!(
            "Segmenter::run_pass start w={} h={} bg={} seeds={} unknown={}",
            w, h, bg_count, seed_count, unknown_count
        );

        let (bg_samples, fg_samples) = partition_samples(image, trimap);
        if bg_samples.is_empty() {
            return Err(SegmentationError::EmptySampleSet {
                which: SampleSet::Background,
            });
        }
        if fg_samples.is_empty() {
            return Err(SegmentationError::EmptySampleSet {
                which: SampleSet::ForegroundEligible,
            });
        }
        let (bg_sample_count, fg_sample_count) = (bg_samples.len(), fg_samples.len());

        let fit_start = Instant::now();
        let (bg_model, fg_model) = fit_models(bg_samples, fg_samples, self.params.gmm);
        let model_fit_ms = fit_start.elapsed().as_secs_f64() * 1000.0;

        let graph_start = Instant::now();
        let graph = self.builder.build(image, trimap, &fg_model, &bg_model);
        let graph_ms = graph_start.elapsed().as_secs_f64() * 1000.0;
        let pairwise_edges = graph.pairwise_edge_count();

        let solve_start = Instant::now();
        let labels = solver.solve(&graph)?;
        let solve_ms = solve_start.elapsed().as_secs_f64() * 1000.0;

        let mut mask = vec![false; w * h];
        let mut cut_foreground = 0usize;
        let mut clipped = 0usize;
        for (i, &on_foreground_side) in labels.iter().enumerate() {
            if on_foreground_side {
                cut_foreground += 1;
                if matte.data[i] {
                    mask[i] = true;
                } else {
                    clipped += 1;
                }
            }
        }
        let foreground_count = cut_foreground - clipped;

        let latency = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "Segmenter::run_pass done foreground={} clipped={} latency_ms={:.3}",
            foreground_count, clipped, latency
        );

        let mut timings = TimingBreakdown::with_total(latency);
        timings.push("model_fit", model_fit_ms);
        timings.push("energy_graph", graph_ms);
        timings.push("solve", solve_ms);

        let trace = PassTrace {
            input: InputDescriptor {
                width: w,
                height: h,
                background_pixels: bg_count,
                foreground_seeds: seed_count,
                unknown_pixels: unknown_count,
            },
            timings,
            model_fit: ModelFitStage {
                elapsed_ms: model_fit_ms,
                background_samples: bg_sample_count,
                foreground_samples: fg_sample_count,
                components_per_model: self.params.gmm.components,
            },
            graph: GraphStage {
                elapsed_ms: graph_ms,
                beta: graph.beta,
                max_weight: graph.max_weight,
                pairwise_edges,
            },
            solve: SolveStage {
                elapsed_ms: solve_ms,
                cut_foreground_pixels: cut_foreground,
                clipped_by_matte: clipped,
            },
        };

        let result = SegmentationResult {
            w,
            h,
            mask,
            foreground_count,
            latency_ms: latency,
        };
        Ok((result, trace))
    }
}

fn check_dimensions(
    what: &'static str,
    expected_w: usize,
    expected_h: usize,
    actual_w: usize,
    actual_h: usize,
) -> Result<(), SegmentationError> {
    if expected_w != actual_w || expected_h != actual_h {
        return Err(SegmentationError::DimensionMismatch {
            what,
            expected_w,
            expected_h,
            actual_w,
            actual_h,
        });
    }
    Ok(())
}

/// Split pixel colors into the background set (`Background`) and the
/// foreground-eligible set (`ForegroundSeed` or `Unknown`).
fn partition_samples(
    image: &ImageRgbF32,
    trimap: &Trimap,
) -> (Vec<Vector3<f32>>, Vec<Vector3<f32>>) {
    let mut background = Vec::new();
    let mut foreground = Vec::new();
    for y in 0..image.h {
        for x in 0..image.w {
            let color = image.get(x, y);
            match trimap.get(x, y) {
                TrimapLabel::Background => background.push(color),
                TrimapLabel::ForegroundSeed | TrimapLabel::Unknown => foreground.push(color),
            }
        }
    }
    (background, foreground)
}

/// Seed every sample into component 0, split across the configured component
/// count, then fit the final statistics.
fn fit_color_model(samples: Vec<Vector3<f32>>, options: GmmOptions) -> MixtureModel {
    let mut model = MixtureModel::new(options);
    for sample in samples {
        model.add_sample(sample, 0);
    }
    model.split();
    model.fit();
    model
}

#[cfg(feature = "parallel")]
fn fit_models(
    bg_samples: Vec<Vector3<f32>>,
    fg_samples: Vec<Vector3<f32>>,
    options: GmmOptions,
) -> (MixtureModel, MixtureModel) {
    rayon::join(
        || fit_color_model(bg_samples, options),
        || fit_color_model(fg_samples, options),
    )
}

#[cfg(not(feature = "parallel"))]
fn fit_models(
    bg_samples: Vec<Vector3<f32>>,
    fg_samples: Vec<Vector3<f32>>,
    options: GmmOptions,
) -> (MixtureModel, MixtureModel) {
    (
        fit_color_model(bg_samples, options),
        fit_color_model(fg_samples, options),
    )
}
