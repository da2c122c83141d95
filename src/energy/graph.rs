//! Weighted pixel grid graph consumed by the min-cut solver.
//!
//! Pairwise weights are stored as four flat row-major buffers, one per stored
//! direction (left, up, up-left, up-right); the reverse directions are implied
//! by symmetry. Terminal weights carry the per-pixel data term. The graph is
//! built fresh for every pass and consumed once.

/// Per-pixel terminal (data-term) edge weights.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TerminalWeights {
    /// Weight of the edge to the foreground terminal.
    pub to_foreground: f32,
    /// Weight of the edge to the background terminal.
    pub to_background: f32,
}

/// Fully populated energy graph over a `w × h` pixel grid.
#[derive(Clone, Debug)]
pub struct EnergyGraph {
    /// Grid width in pixels
    pub w: usize,
    /// Grid height in pixels
    pub h: usize,
    /// Smoothness weight to the left neighbor (0 on the left border)
    pub left: Vec<f32>,
    /// Smoothness weight to the upper neighbor (0 on the top border)
    pub up: Vec<f32>,
    /// Smoothness weight to the upper-left neighbor
    pub up_left: Vec<f32>,
    /// Smoothness weight to the upper-right neighbor
    pub up_right: Vec<f32>,
    /// Terminal weights per pixel
    pub terminals: Vec<TerminalWeights>,
    /// Maximum smoothness weight observed across all directions
    pub max_weight: f32,
    /// Smoothness scale constant the pairwise weights were built with
    pub beta: f32,
}

impl EnergyGraph {
    #[inline]
    /// Convert (x, y) to a linear node index.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    /// Number of pixel nodes.
    pub fn node_count(&self) -> usize {
        self.w * self.h
    }

    /// Number of pairwise links carrying a positive weight.
    pub fn pairwise_edge_count(&self) -> usize {
        [&self.left, &self.up, &self.up_left, &self.up_right]
            .iter()
            .map(|buf| buf.iter().filter(|&&w| w > 0.0).count())
            .sum()
    }
}
