//! Color mixture model with deterministic eigen-projection splitting.
//!
//! One model represents a single class (foreground or background). Samples
//! are seeded into components by the caller, `fit` re-estimates every
//! component from its current assignment, and `split` redistributes samples
//! across the configured component count by repeatedly halving the component
//! with the widest color spread along its dominant covariance axis. The
//! procedure is a one-shot deterministic alternative to iterative clustering:
//! identical inputs give identical assignments, ties in the dominant-spread
//! selection break toward the lowest component index.
use super::component::Component;
use log::debug;
use nalgebra::Vector3;
use serde::Deserialize;

/// Density floor applied before the log so degenerate mixtures still produce
/// a finite, non-negative cost.
const MIN_MIXTURE_DENSITY: f32 = 1e-30;

/// Mixture-model knobs.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct GmmOptions {
    /// Number of Gaussian components per model.
    pub components: usize,
}

impl Default for GmmOptions {
    fn default() -> Self {
        Self { components: 5 }
    }
}

/// Gaussian mixture over 3-channel color samples.
#[derive(Clone, Debug)]
pub struct MixtureModel {
    components: Vec<Component>,
    total_samples: usize,
}

impl MixtureModel {
    /// Create a model with `options.components` empty components.
    pub fn new(options: GmmOptions) -> Self {
        let k = options.components.max(1);
        Self {
            components: vec![Component::default(); k],
            total_samples: 0,
        }
    }

    /// Number of components (fixed at construction).
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Fitted components, in index order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Total number of samples across all components.
    pub fn total_samples(&self) -> usize {
        self.total_samples
    }

    /// Append a sample to the chosen component's assignment list.
    ///
    /// `component_index` must be in range; callers own that contract.
    pub fn add_sample(&mut self, sample: Vector3<f32>, component_index: usize) {
        self.components[component_index].samples.push(sample);
        self.total_samples += 1;
    }

    /// Re-estimate every component from its current sample assignment.
    ///
    /// Components with samples get weight `n / total`, mean, biased
    /// covariance and the cached determinant/inverse/eigenpair; empty
    /// components get weight 0 and contribute nothing downstream.
    pub fn fit(&mut self) {
        let total = self.total_samples;
        for (index, component) in self.components.iter_mut().enumerate() {
            component.fit_stats(total);
            if !component.samples.is_empty() && component.inv_cov.is_none() {
                debug!(
                    "MixtureModel::fit component {} covariance singular (det={:.3e}) -> contribution zeroed",
                    index, component.det_cov
                );
            }
        }
    }

    /// Redistribute samples across components by eigen-projection splitting.
    ///
    /// Runs one round per component beyond the first. Each round picks the
    /// component with the largest dominant eigenvalue, projects its samples
    /// onto the dominant eigenvector and moves those at or below the mean's
    /// projection into the round's target component, then refits so the next
    /// round acts on fresh statistics. A round whose donor and target
    /// coincide is a no-op; the sample multiset is preserved throughout.
    pub fn split(&mut self) {
        self.fit();
        let k = self.components.len();
        for target in 1..k {
            let source = self.dominant_component();
            if source == target {
                continue;
            }
            let axis = self.components[source].eigenvector;
            let threshold = axis.dot(&self.components[source].mean);
            let samples = std::mem::take(&mut self.components[source].samples);
            let (moved, kept): (Vec<_>, Vec<_>) =
                samples.into_iter().partition(|s| axis.dot(s) <= threshold);
            debug!(
                "MixtureModel::split round {}: component {} -> {} ({} moved, {} kept)",
                target,
                source,
                target,
                moved.len(),
                kept.len()
            );
            self.components[source].samples = kept;
            self.components[target].samples.extend(moved);
            self.fit();
        }
    }

    /// Negative log-likelihood of `sample` under the full mixture.
    ///
    /// Each usable component contributes
    /// `weight / sqrt(det) * exp(-0.5 * (x - mean)^T * inv_cov * (x - mean))`;
    /// the summed density is floored before the log and the cost clamped
    /// non-negative so downstream edge weights stay finite and valid.
    pub fn likelihood(&self, sample: Vector3<f32>) -> f32 {
        let mut sum = 0.0f32;
        for component in &self.components {
            sum += component.density(sample);
        }
        if !sum.is_finite() {
            sum = 0.0;
        }
        (-sum.max(MIN_MIXTURE_DENSITY).ln()).max(0.0)
    }

    /// Index of the component with the largest dominant eigenvalue; ties
    /// break toward the lowest index.
    fn dominant_component(&self) -> usize {
        let mut best = 0;
        for (i, component) in self.components.iter().enumerate().skip(1) {
            if component.eigenvalue > self.components[best].eigenvalue {
                best = i;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_model(samples: &[Vector3<f32>], k: usize) -> MixtureModel {
        let mut model = MixtureModel::new(GmmOptions { components: k });
        for &s in samples {
            model.add_sample(s, 0);
        }
        model
    }

    fn two_cluster_samples() -> Vec<Vector3<f32>> {
        let mut samples = Vec::new();
        for i in 0..40 {
            let j = (i % 5) as f32;
            samples.push(Vector3::new(20.0 + j, 30.0 + 2.0 * j, 40.0 + 3.0 * j));
            samples.push(Vector3::new(200.0 + 3.0 * j, 210.0 + j, 220.0 + 2.0 * j));
        }
        samples
    }

    fn sorted_keys(samples: impl Iterator<Item = Vector3<f32>>) -> Vec<(i64, i64, i64)> {
        let mut keys: Vec<(i64, i64, i64)> = samples
            .map(|s| (s[0] as i64, s[1] as i64, s[2] as i64))
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn weights_sum_to_one_and_empty_components_weigh_zero() {
        let mut model = seeded_model(&two_cluster_samples(), 5);
        model.add_sample(Vector3::new(100.0, 100.0, 100.0), 1);
        model.fit();

        let sum: f32 = model.components().iter().map(|c| c.weight).sum();
        assert!((sum - 1.0).abs() < 1e-5, "weights sum to {}", sum);
        for component in &model.components()[2..] {
            assert_eq!(component.weight, 0.0);
        }
    }

    #[test]
    fn fit_is_idempotent() {
        let mut model = seeded_model(&two_cluster_samples(), 3);
        model.fit();
        let before: Vec<_> = model
            .components()
            .iter()
            .map(|c| (c.weight, c.mean, c.cov, c.eigenvalue))
            .collect();
        model.fit();
        let after: Vec<_> = model
            .components()
            .iter()
            .map(|c| (c.weight, c.mean, c.cov, c.eigenvalue))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn split_preserves_the_sample_multiset() {
        let samples = two_cluster_samples();
        let mut model = seeded_model(&samples, 5);
        model.split();

        let total: usize = model.components().iter().map(|c| c.samples.len()).sum();
        assert_eq!(total, samples.len());
        assert_eq!(model.total_samples(), samples.len());

        let before = sorted_keys(samples.into_iter());
        let after = sorted_keys(
            model
                .components()
                .iter()
                .flat_map(|c| c.samples.iter().copied()),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn split_separates_well_separated_clusters() {
        let mut model = seeded_model(&two_cluster_samples(), 5);
        model.split();
        model.fit();

        let populated = model
            .components()
            .iter()
            .filter(|c| !c.samples.is_empty())
            .count();
        assert!(populated >= 2, "expected at least two populated components");

        let near = |center: Vector3<f32>| {
            model
                .components()
                .iter()
                .filter(|c| !c.samples.is_empty())
                .any(|c| (c.mean - center).norm() < 30.0)
        };
        assert!(near(Vector3::new(22.0, 34.0, 46.0)), "no dark component");
        assert!(near(Vector3::new(206.0, 212.0, 224.0)), "no bright component");
    }

    #[test]
    fn singular_covariance_keeps_likelihood_finite() {
        let samples = vec![Vector3::new(10.0, 20.0, 30.0); 16];
        let mut model = seeded_model(&samples, 5);
        model.split();
        model.fit();

        let cost = model.likelihood(Vector3::new(10.0, 20.0, 30.0));
        assert!(cost.is_finite());
        assert!(cost >= 0.0);
    }

    #[test]
    fn likelihood_prefers_fitted_colors() {
        let mut model = seeded_model(&two_cluster_samples(), 5);
        model.split();
        model.fit();

        let near = model.likelihood(Vector3::new(22.0, 34.0, 46.0));
        let far = model.likelihood(Vector3::new(120.0, 120.0, 120.0));
        assert!(
            near < far,
            "fitted color should be cheaper: near={} far={}",
            near,
            far
        );
    }
}
