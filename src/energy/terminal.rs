//! Terminal (data-term) weight computation.
//!
//! Definite trimap labels pin a pixel to its terminal with the saturating
//! `max_weight` on one side and 0 on the other. Unknown pixels are priced by
//! the opposite class's mixture model: the foreground-terminal edge carries
//! the background model's negative log-likelihood and vice versa, so the cut
//! severs the cheaper (worse-matching) side. That pairing is load-bearing;
//! swapping it inverts the segmentation.
use super::graph::TerminalWeights;
use crate::gmm::MixtureModel;
use crate::image::ImageRgbF32;
use crate::trimap::{Trimap, TrimapLabel};

/// Compute per-pixel terminal weights for the whole grid.
pub fn build_terminal_weights(
    trimap: &Trimap,
    image: &ImageRgbF32,
    fg_model: &MixtureModel,
    bg_model: &MixtureModel,
    max_weight: f32,
) -> Vec<TerminalWeights> {
    let mut terminals = Vec::with_capacity(image.w * image.h);
    for y in 0..image.h {
        for x in 0..image.w {
            let weights = match trimap.get(x, y) {
                TrimapLabel::Background => TerminalWeights {
                    to_foreground: 0.0,
                    to_background: max_weight,
                },
                TrimapLabel::ForegroundSeed => TerminalWeights {
                    to_foreground: max_weight,
                    to_background: 0.0,
                },
                TrimapLabel::Unknown => {
                    let color = image.get(x, y);
                    TerminalWeights {
                        to_foreground: bg_model.likelihood(color),
                        to_background: fg_model.likelihood(color),
                    }
                }
            };
            terminals.push(weights);
        }
    }
    terminals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gmm::GmmOptions;
    use crate::trimap::Rect;
    use nalgebra::Vector3;

    fn fitted_model(center: f32) -> MixtureModel {
        let mut model = MixtureModel::new(GmmOptions { components: 2 });
        for i in 0..20 {
            // independent per-channel spread keeps the covariance full rank
            let r = (i % 4) as f32;
            let g = (i % 3) as f32;
            let b = (i % 5) as f32;
            model.add_sample(Vector3::new(center + r, center - g, center + b), 0);
        }
        model.split();
        model.fit();
        model
    }

    #[test]
    fn definite_labels_yield_exact_saturating_weights() {
        let image = ImageRgbF32::new(2, 1);
        let trimap = Trimap::from_labels(
            2,
            1,
            vec![TrimapLabel::Background, TrimapLabel::ForegroundSeed],
        );
        let fg = fitted_model(200.0);
        let bg = fitted_model(30.0);
        let terminals = build_terminal_weights(&trimap, &image, &fg, &bg, 42.5);

        assert_eq!(
            terminals[0],
            TerminalWeights {
                to_foreground: 0.0,
                to_background: 42.5
            }
        );
        assert_eq!(
            terminals[1],
            TerminalWeights {
                to_foreground: 42.5,
                to_background: 0.0
            }
        );
    }

    #[test]
    fn unknown_pixels_use_the_opposite_model() {
        let mut image = ImageRgbF32::new(1, 1);
        image.set(0, 0, [201.0, 199.0, 202.0]);
        let trimap = Trimap::from_rect(
            1,
            1,
            Rect {
                x: 0,
                y: 0,
                w: 1,
                h: 1,
            },
        );
        let fg = fitted_model(200.0);
        let bg = fitted_model(30.0);
        let terminals = build_terminal_weights(&trimap, &image, &fg, &bg, 50.0);

        let color = image.get(0, 0);
        assert_eq!(terminals[0].to_foreground, bg.likelihood(color));
        assert_eq!(terminals[0].to_background, fg.likelihood(color));
        // a bright pixel should be expensive to pin to the background
        assert!(terminals[0].to_foreground > terminals[0].to_background);
    }
}
