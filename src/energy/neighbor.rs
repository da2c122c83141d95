//! Pairwise (smoothness) weight computation over the pixel grid.
//!
//! Each pixel stores a weight toward four neighbors: left, up, up-left and
//! up-right; symmetry covers the remaining directions. The weight follows the
//! contrast-sensitive form `gamma / dist * exp(-beta * ||Δcolor||²)` with
//! `dist = √2` on the diagonals. Rows are independent, so the computation
//! fans out per row under the `parallel` feature with identical results.
use crate::image::ImageRgbF32;
use std::f32::consts::SQRT_2;

/// Pairwise weight buffers plus the maximum weight observed anywhere.
#[derive(Clone, Debug)]
pub struct NeighborWeights {
    pub left: Vec<f32>,
    pub up: Vec<f32>,
    pub up_left: Vec<f32>,
    pub up_right: Vec<f32>,
    /// Saturating weight used for definite terminal edges.
    pub max_weight: f32,
}

struct RowWeights {
    left: Vec<f32>,
    up: Vec<f32>,
    up_left: Vec<f32>,
    up_right: Vec<f32>,
    max: f32,
}

/// Compute the four directional weight buffers for the whole image.
///
/// Border pixels lacking a neighbor in a given direction keep weight 0 there.
pub fn build_neighbor_weights(image: &ImageRgbF32, beta: f32, gamma: f32) -> NeighborWeights {
    let (w, h) = (image.w, image.h);
    let mut out = NeighborWeights {
        left: Vec::with_capacity(w * h),
        up: Vec::with_capacity(w * h),
        up_left: Vec::with_capacity(w * h),
        up_right: Vec::with_capacity(w * h),
        max_weight: 0.0,
    };

    for row in collect_rows(image, beta, gamma) {
        out.left.extend_from_slice(&row.left);
        out.up.extend_from_slice(&row.up);
        out.up_left.extend_from_slice(&row.up_left);
        out.up_right.extend_from_slice(&row.up_right);
        out.max_weight = out.max_weight.max(row.max);
    }
    out
}

#[cfg(feature = "parallel")]
fn collect_rows(image: &ImageRgbF32, beta: f32, gamma: f32) -> Vec<RowWeights> {
    use rayon::prelude::*;

    (0..image.h)
        .into_par_iter()
        .map(|y| row_weights(image, beta, gamma, y))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_rows(image: &ImageRgbF32, beta: f32, gamma: f32) -> Vec<RowWeights> {
    (0..image.h).map(|y| row_weights(image, beta, gamma, y)).collect()
}

fn row_weights(image: &ImageRgbF32, beta: f32, gamma: f32, y: usize) -> RowWeights {
    let w = image.w;
    let mut row = RowWeights {
        left: vec![0.0; w],
        up: vec![0.0; w],
        up_left: vec![0.0; w],
        up_right: vec![0.0; w],
        max: 0.0,
    };
    let diag_gamma = gamma / SQRT_2;

    for x in 0..w {
        let color = image.get(x, y);
        if x > 0 {
            let diff = (color - image.get(x - 1, y)).norm_squared();
            row.left[x] = gamma * (-beta * diff).exp();
        }
        if y > 0 {
            let diff = (color - image.get(x, y - 1)).norm_squared();
            row.up[x] = gamma * (-beta * diff).exp();
        }
        if x > 0 && y > 0 {
            let diff = (color - image.get(x - 1, y - 1)).norm_squared();
            row.up_left[x] = diag_gamma * (-beta * diff).exp();
        }
        if x + 1 < w && y > 0 {
            let diff = (color - image.get(x + 1, y - 1)).norm_squared();
            row.up_right[x] = diag_gamma * (-beta * diff).exp();
        }
        row.max = row
            .max
            .max(row.left[x])
            .max(row.up[x])
            .max(row.up_left[x])
            .max(row.up_right[x]);
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::beta::compute_beta;

    fn gradient_image(w: usize, h: usize) -> ImageRgbF32 {
        let mut img = ImageRgbF32::new(w, h);
        for y in 0..h {
            for x in 0..w {
                let v = (x * 20 + y * 10) as f32;
                img.set(x, y, [v, v * 0.5, v * 0.25]);
            }
        }
        img
    }

    #[test]
    fn border_directions_stay_zero() {
        let img = gradient_image(4, 4);
        let beta = compute_beta(&img);
        let nw = build_neighbor_weights(&img, beta, 50.0);
        for x in 0..4 {
            assert_eq!(nw.up[x], 0.0);
            assert_eq!(nw.up_left[x], 0.0);
            assert_eq!(nw.up_right[x], 0.0);
        }
        for y in 0..4 {
            assert_eq!(nw.left[y * 4], 0.0);
            assert_eq!(nw.up_left[y * 4], 0.0);
            assert_eq!(nw.up_right[y * 4 + 3], 0.0);
        }
    }

    #[test]
    fn uniform_image_saturates_at_gamma() {
        let img = ImageRgbF32::new(5, 5);
        let beta = compute_beta(&img);
        let nw = build_neighbor_weights(&img, beta, 50.0);
        // beta sentinel 0 -> exp term is 1 everywhere a neighbor exists
        assert_eq!(nw.left[1], 50.0);
        assert_eq!(nw.up[5], 50.0);
        assert!((nw.up_left[6] - 50.0 / SQRT_2).abs() < 1e-5);
        assert_eq!(nw.max_weight, 50.0);
    }

    #[test]
    fn similar_neighbors_weigh_more_than_contrasting_ones() {
        let mut img = gradient_image(6, 6);
        img.set(3, 3, [255.0, 255.0, 255.0]);
        let beta = compute_beta(&img);
        let nw = build_neighbor_weights(&img, beta, 50.0);
        let flat = nw.left[6 * 1 + 2];
        let across_edge = nw.left[6 * 3 + 3];
        assert!(
            across_edge < flat,
            "contrast edge should weigh less: {} vs {}",
            across_edge,
            flat
        );
        assert!(nw.max_weight >= flat);
    }
}
