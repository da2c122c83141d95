//! Smoothness scale constant.
//!
//! Beta normalizes the exponential color-contrast term to the image's own
//! contrast statistics: the mean squared color difference over all stored
//! neighbor pairs (left, up, up-left, up-right), inverted and halved. Pairs
//! are counted directly while summing, so border-heavy shapes (single row or
//! column) stay well defined.
use crate::image::ImageRgbF32;

const EPS: f64 = 1e-9;

/// Compute `beta = 1 / (2 * mean squared neighbor color difference)`.
///
/// A zero-gradient image (or one too small to have neighbor pairs) returns
/// the sentinel `0.0`, which saturates every smoothness weight at
/// `gamma / distance` instead of dividing by zero.
pub fn compute_beta(image: &ImageRgbF32) -> f32 {
    let (w, h) = (image.w, image.h);
    let mut sum_sq = 0.0f64;
    let mut pairs = 0usize;

    for y in 0..h {
        for x in 0..w {
            let color = image.get(x, y);
            if x > 0 {
                sum_sq += f64::from((color - image.get(x - 1, y)).norm_squared());
                pairs += 1;
            }
            if y > 0 {
                sum_sq += f64::from((color - image.get(x, y - 1)).norm_squared());
                pairs += 1;
            }
            if x > 0 && y > 0 {
                sum_sq += f64::from((color - image.get(x - 1, y - 1)).norm_squared());
                pairs += 1;
            }
            if x + 1 < w && y > 0 {
                sum_sq += f64::from((color - image.get(x + 1, y - 1)).norm_squared());
                pairs += 1;
            }
        }
    }

    if pairs == 0 {
        return 0.0;
    }
    let mean = sum_sq / pairs as f64;
    if mean <= EPS {
        return 0.0;
    }
    (1.0 / (2.0 * mean)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_image_falls_back_to_sentinel() {
        let mut img = ImageRgbF32::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                img.set(x, y, [120.0, 120.0, 120.0]);
            }
        }
        assert_eq!(compute_beta(&img), 0.0);
    }

    #[test]
    fn single_pixel_image_has_no_pairs() {
        let img = ImageRgbF32::new(1, 1);
        assert_eq!(compute_beta(&img), 0.0);
    }

    #[test]
    fn two_pixel_row_matches_hand_computation() {
        let mut img = ImageRgbF32::new(2, 1);
        img.set(0, 0, [0.0, 0.0, 0.0]);
        img.set(1, 0, [3.0, 4.0, 0.0]);
        // one left pair, squared difference 25 -> beta = 1 / 50
        let beta = compute_beta(&img);
        assert!((beta - 0.02).abs() < 1e-7, "beta={}", beta);
    }

    #[test]
    fn single_column_image_is_well_defined() {
        let mut img = ImageRgbF32::new(1, 4);
        for y in 0..4 {
            img.set(0, y, [y as f32 * 10.0, 0.0, 0.0]);
        }
        let beta = compute_beta(&img);
        assert!(beta.is_finite());
        assert!(beta > 0.0);
    }
}
