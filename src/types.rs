use serde::Serialize;

/// Binary segmentation produced by one pass, clipped by the matte.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationResult {
    /// Grid width in pixels
    pub w: usize,
    /// Grid height in pixels
    pub h: usize,
    /// Row-major foreground mask (`true` = foreground)
    pub mask: Vec<bool>,
    /// Number of foreground pixels in `mask`
    pub foreground_count: usize,
    /// Wall-clock duration of the pass in milliseconds
    pub latency_ms: f64,
}

impl SegmentationResult {
    #[inline]
    /// Whether the pixel at (x, y) was labeled foreground.
    pub fn is_foreground(&self, x: usize, y: usize) -> bool {
        self.mask[y * self.w + x]
    }
}
