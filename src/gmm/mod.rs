//! Gaussian mixture color models for the two segmentation classes.
//!
//! One [`MixtureModel`] per class (foreground, background). The fitting flow
//! is: seed every sample into component 0, [`MixtureModel::split`] to
//! redistribute across the configured component count, then
//! [`MixtureModel::fit`] for final statistics. [`MixtureModel::likelihood`]
//! turns a pixel color into the data-term cost consumed by the energy graph.

mod component;
mod model;

pub use component::Component;
pub use model::{GmmOptions, MixtureModel};
