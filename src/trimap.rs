//! Trimap and matte grids driving a segmentation pass.
//!
//! The trimap labels every pixel as definite background, definite foreground
//! seed, or unknown (to be classified by the cut). The matte marks the region
//! eligible to become foreground at all; it is applied as a final mask to the
//! solver output. Both are built either from a working rectangle or from an
//! externally supplied label buffer, and the core only ever reads them.
use serde::Deserialize;

/// Per-pixel trimap label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrimapLabel {
    /// Definite background; pinned to the background terminal.
    Background,
    /// Definite foreground seed; pinned to the foreground terminal.
    ForegroundSeed,
    /// Unknown; classified by the minimum cut.
    Unknown,
}

/// Axis-aligned working rectangle in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Rect {
    /// Clamp the rectangle to a `w × h` grid.
    pub fn clamped(&self, grid_w: usize, grid_h: usize) -> Rect {
        let x = self.x.min(grid_w);
        let y = self.y.min(grid_h);
        Rect {
            x,
            y,
            w: self.w.min(grid_w - x),
            h: self.h.min(grid_h - y),
        }
    }

    #[inline]
    fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

/// Per-pixel label grid, same dimensions as the image it annotates.
#[derive(Clone, Debug)]
pub struct Trimap {
    pub w: usize,
    pub h: usize,
    pub data: Vec<TrimapLabel>,
}

impl Trimap {
    /// Rectangle initialization: pixels inside `rect` are unknown, everything
    /// outside is definite background.
    pub fn from_rect(w: usize, h: usize, rect: Rect) -> Self {
        let rect = rect.clamped(w, h);
        let mut data = vec![TrimapLabel::Background; w * h];
        for y in 0..h {
            for x in 0..w {
                if rect.contains(x, y) {
                    data[y * w + x] = TrimapLabel::Unknown;
                }
            }
        }
        Self { w, h, data }
    }

    /// Wrap an externally supplied label buffer; `labels.len()` must equal `w * h`.
    pub fn from_labels(w: usize, h: usize, labels: Vec<TrimapLabel>) -> Self {
        assert_eq!(labels.len(), w * h, "label buffer size must match w * h");
        Self { w, h, data: labels }
    }

    #[inline]
    /// Get the label at (x, y).
    pub fn get(&self, x: usize, y: usize) -> TrimapLabel {
        self.data[y * self.w + x]
    }

    /// Count pixels per label: (background, foreground seed, unknown).
    pub fn counts(&self) -> (usize, usize, usize) {
        let mut bg = 0;
        let mut seed = 0;
        let mut unknown = 0;
        for label in &self.data {
            match label {
                TrimapLabel::Background => bg += 1,
                TrimapLabel::ForegroundSeed => seed += 1,
                TrimapLabel::Unknown => unknown += 1,
            }
        }
        (bg, seed, unknown)
    }
}

/// Binary eligibility mask; its set region is a superset of any pixel that can
/// end up labeled foreground.
#[derive(Clone, Debug)]
pub struct Matte {
    pub w: usize,
    pub h: usize,
    pub data: Vec<bool>,
}

impl Matte {
    /// Rectangle initialization: only pixels inside `rect` are eligible.
    pub fn from_rect(w: usize, h: usize, rect: Rect) -> Self {
        let rect = rect.clamped(w, h);
        let mut data = vec![false; w * h];
        for y in 0..h {
            for x in 0..w {
                if rect.contains(x, y) {
                    data[y * w + x] = true;
                }
            }
        }
        Self { w, h, data }
    }

    /// Every pixel eligible.
    pub fn full(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![true; w * h],
        }
    }

    #[inline]
    /// Whether (x, y) may be labeled foreground.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_trimap_marks_inside_unknown() {
        let rect = Rect {
            x: 1,
            y: 1,
            w: 2,
            h: 2,
        };
        let trimap = Trimap::from_rect(4, 4, rect);
        assert_eq!(trimap.get(0, 0), TrimapLabel::Background);
        assert_eq!(trimap.get(1, 1), TrimapLabel::Unknown);
        assert_eq!(trimap.get(2, 2), TrimapLabel::Unknown);
        assert_eq!(trimap.get(3, 2), TrimapLabel::Background);
        let (bg, seed, unknown) = trimap.counts();
        assert_eq!((bg, seed, unknown), (12, 0, 4));
    }

    #[test]
    fn oversized_rect_is_clamped() {
        let rect = Rect {
            x: 2,
            y: 2,
            w: 100,
            h: 100,
        };
        let trimap = Trimap::from_rect(4, 4, rect);
        let (bg, _, unknown) = trimap.counts();
        assert_eq!(bg, 12);
        assert_eq!(unknown, 4);

        let matte = Matte::from_rect(4, 4, rect);
        assert!(matte.get(3, 3));
        assert!(!matte.get(0, 3));
    }
}
