//! Owned three-channel f32 image in row-major layout (stride == width).
//!
//! Color samples keep the 0–255 range of their 8-bit source; the smoothness
//! scale constant adapts to whatever range the data is in, so no normalization
//! happens here. Provides indexed access and `Vector3` pixel views for the
//! mixture-model math.
use nalgebra::Vector3;

#[derive(Clone, Debug)]
pub struct ImageRgbF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order, one `[r, g, b]` triple per pixel
    pub data: Vec<[f32; 3]>,
}

impl ImageRgbF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![[0.0; 3]; w * h],
        }
    }

    /// Build from a raw triple buffer; `data.len()` must equal `w * h`.
    pub fn from_raw(w: usize, h: usize, data: Vec<[f32; 3]>) -> Self {
        assert_eq!(data.len(), w * h, "pixel buffer size must match w * h");
        Self { w, h, data }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    /// Get the pixel color at (x, y) as a column vector.
    pub fn get(&self, x: usize, y: usize) -> Vector3<f32> {
        let [r, g, b] = self.data[self.idx(x, y)];
        Vector3::new(r, g, b)
    }

    #[inline]
    /// Set the pixel color at (x, y).
    pub fn set(&mut self, x: usize, y: usize, rgb: [f32; 3]) {
        let i = self.idx(x, y);
        self.data[i] = rgb;
    }

    #[inline]
    /// Borrow one row of pixel triples.
    pub fn row(&self, y: usize) -> &[[f32; 3]] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}
