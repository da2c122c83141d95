//! Single mixture component: owned color samples plus fitted Gaussian stats.
//!
//! Parameters are a pure function of the currently assigned samples and are
//! recomputed wholesale by `fit_stats`. The covariance inverse is guarded: a
//! singular covariance leaves `inv_cov` empty and the component contributes
//! nothing to likelihood evaluation instead of poisoning the mixture.
use nalgebra::{Matrix3, SymmetricEigen, Vector3};

const EPS: f32 = 1e-6;

/// One Gaussian component of a color mixture model.
#[derive(Clone, Debug)]
pub struct Component {
    /// Samples currently assigned to this component.
    pub samples: Vec<Vector3<f32>>,
    /// Mixing coefficient; 0 for components with no samples.
    pub weight: f32,
    /// Arithmetic mean of the assigned samples.
    pub mean: Vector3<f32>,
    /// Biased (population) covariance of the assigned samples.
    pub cov: Matrix3<f32>,
    /// Cached covariance inverse; `None` when the covariance is singular.
    pub inv_cov: Option<Matrix3<f32>>,
    /// Cached covariance determinant.
    pub det_cov: f32,
    /// Largest covariance eigenvalue; 0 for components with no samples.
    pub eigenvalue: f32,
    /// Eigenvector associated with `eigenvalue`; drives the splitting step.
    pub eigenvector: Vector3<f32>,
}

impl Default for Component {
    fn default() -> Self {
        Self {
            samples: Vec::new(),
            weight: 0.0,
            mean: Vector3::zeros(),
            cov: Matrix3::zeros(),
            inv_cov: None,
            det_cov: 0.0,
            eigenvalue: 0.0,
            eigenvector: Vector3::zeros(),
        }
    }
}

impl Component {
    /// Recompute every cached statistic from the current sample list.
    ///
    /// `total_samples` is the model-wide sample count used for the mixing
    /// coefficient. An empty component keeps its last mean/covariance but
    /// drops its weight and eigen-dominance to zero.
    pub fn fit_stats(&mut self, total_samples: usize) {
        let n = self.samples.len();
        if n == 0 {
            self.weight = 0.0;
            self.eigenvalue = 0.0;
            return;
        }
        self.weight = n as f32 / total_samples as f32;

        let mut mean = Vector3::zeros();
        for s in &self.samples {
            mean += s;
        }
        mean /= n as f32;
        self.mean = mean;

        let mut cov = Matrix3::zeros();
        for s in &self.samples {
            let d = s - mean;
            cov += d * d.transpose();
        }
        cov /= n as f32;
        self.cov = cov;

        self.det_cov = cov.determinant();
        self.inv_cov = if self.det_cov > EPS {
            cov.try_inverse()
        } else {
            None
        };

        let eig = SymmetricEigen::new(cov);
        let mut max_idx = 0;
        for i in 1..3 {
            if eig.eigenvalues[i] > eig.eigenvalues[max_idx] {
                max_idx = i;
            }
        }
        self.eigenvalue = eig.eigenvalues[max_idx];
        self.eigenvector = eig.eigenvectors.column(max_idx).into_owned();
    }

    /// Weighted Gaussian density of `sample` under this component, or 0 when
    /// the component is empty or its covariance could not be inverted.
    pub fn density(&self, sample: Vector3<f32>) -> f32 {
        let inv = match self.inv_cov {
            Some(inv) if self.weight > 0.0 && self.det_cov > 0.0 => inv,
            _ => return 0.0,
        };
        let d = sample - self.mean;
        let mahalanobis = d.dot(&(inv * d));
        if !mahalanobis.is_finite() {
            return 0.0;
        }
        self.weight / self.det_cov.sqrt() * (-0.5 * mahalanobis).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_match_hand_computed_values() {
        let mut c = Component {
            samples: vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(2.0, 0.0, 0.0),
                Vector3::new(0.0, 2.0, 0.0),
                Vector3::new(2.0, 2.0, 0.0),
            ],
            ..Default::default()
        };
        c.fit_stats(8);
        assert!((c.weight - 0.5).abs() < 1e-6);
        assert_eq!(c.mean, Vector3::new(1.0, 1.0, 0.0));
        // population covariance: var(x) = var(y) = 1, cov(x, y) = 0
        assert!((c.cov[(0, 0)] - 1.0).abs() < 1e-6);
        assert!((c.cov[(1, 1)] - 1.0).abs() < 1e-6);
        assert!(c.cov[(0, 1)].abs() < 1e-6);
        // third channel is constant -> singular covariance, guarded inverse
        assert!(c.inv_cov.is_none());
        assert!(c.det_cov.abs() < 1e-6);
    }

    #[test]
    fn dominant_eigenvector_follows_elongation() {
        let mut c = Component::default();
        for i in 0..10 {
            let t = i as f32;
            // spread along red, slight jitter elsewhere to keep full rank
            c.samples.push(Vector3::new(
                t * 10.0,
                (i % 3) as f32,
                (i % 2) as f32,
            ));
        }
        c.fit_stats(10);
        assert!(c.inv_cov.is_some());
        assert!(
            c.eigenvector[0].abs() > 0.99,
            "expected red-dominated eigenvector, got {:?}",
            c.eigenvector
        );
    }

    #[test]
    fn empty_component_contributes_nothing() {
        let mut c = Component::default();
        c.fit_stats(5);
        assert_eq!(c.weight, 0.0);
        assert_eq!(c.density(Vector3::new(1.0, 2.0, 3.0)), 0.0);
    }
}
