//! Energy graph construction: smoothness and data terms on the pixel grid.
//!
//! Overview
//! - [`beta`] derives the image-wide smoothness scale constant from the mean
//!   squared neighbor color difference.
//! - [`neighbor`] computes the four directional pairwise weight buffers and
//!   tracks the maximum weight, which saturates definite terminal edges.
//! - [`terminal`] prices every pixel against the two fitted mixture models
//!   (or pins it, for definite trimap labels).
//! - [`graph`] holds the resulting [`EnergyGraph`] value handed to the
//!   min-cut solver.
//!
//! The builder ties the three computations together; inputs are read-only and
//! the produced graph is consumed once per pass.

pub mod beta;
pub mod graph;
pub mod neighbor;
pub mod terminal;

pub use beta::compute_beta;
pub use graph::{EnergyGraph, TerminalWeights};
pub use neighbor::{build_neighbor_weights, NeighborWeights};
pub use terminal::build_terminal_weights;

use crate::gmm::MixtureModel;
use crate::image::ImageRgbF32;
use crate::trimap::Trimap;
use log::debug;
use serde::Deserialize;

/// Energy construction knobs.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct EnergyOptions {
    /// Smoothness strength; scales every pairwise weight.
    pub gamma: f32,
}

impl Default for EnergyOptions {
    fn default() -> Self {
        Self { gamma: 50.0 }
    }
}

/// Builds the full weighted grid graph for one segmentation pass.
#[derive(Clone, Debug, Default)]
pub struct EnergyGraphBuilder {
    options: EnergyOptions,
}

impl EnergyGraphBuilder {
    /// Create a builder with the supplied options.
    pub fn new(options: EnergyOptions) -> Self {
        Self { options }
    }

    /// Compute beta, the pairwise weights and the terminal weights, and
    /// assemble them into an [`EnergyGraph`]. Inputs are not mutated.
    pub fn build(
        &self,
        image: &ImageRgbF32,
        trimap: &Trimap,
        fg_model: &MixtureModel,
        bg_model: &MixtureModel,
    ) -> EnergyGraph {
        let beta = compute_beta(image);
        let neighbors = build_neighbor_weights(image, beta, self.options.gamma);
        debug!(
            "EnergyGraphBuilder::build beta={:.6} max_weight={:.3}",
            beta, neighbors.max_weight
        );
        let terminals =
            build_terminal_weights(trimap, image, fg_model, bg_model, neighbors.max_weight);

        EnergyGraph {
            w: image.w,
            h: image.h,
            left: neighbors.left,
            up: neighbors.up,
            up_left: neighbors.up_left,
            up_right: neighbors.up_right,
            terminals,
            max_weight: neighbors.max_weight,
            beta,
        }
    }
}
