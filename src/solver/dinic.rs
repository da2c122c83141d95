//! Dinic max-flow adapter over `rs-graph`.
//!
//! Builds one graph node per pixel plus the two terminals, mirrors every
//! stored pairwise direction as a symmetric arc pair, and attaches terminal
//! arcs from the per-pixel data weights. `rs-graph`'s Dinic implementation
//! works on ordered integer flows, so f32 weights are scaled into `u64`
//! capacities first; the losing precision is far below the weight
//! differences that decide a cut. Nodes reported on the source side of the
//! minimum cut map back to foreground labels.
use super::GraphCutSolver;
use crate::energy::EnergyGraph;
use crate::error::SegmentationError;
use rs_graph::maxflow::dinic;
use rs_graph::vecgraph::{Edge, VecGraphBuilder};
use rs_graph::{Buildable, Builder, IndexGraph, VecGraph};
use std::collections::HashMap;

/// Fixed-point scale applied to f32 weights before flow computation.
const FLOW_SCALE: f64 = 1_000.0;

/// Min-cut solver backed by `rs_graph::maxflow::dinic`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DinicSolver;

fn scale_weight(w: f32) -> u64 {
    if !w.is_finite() {
        return 0;
    }
    (f64::from(w.max(0.0)) * FLOW_SCALE).round() as u64
}

impl GraphCutSolver for DinicSolver {
    fn solve(&self, graph: &EnergyGraph) -> Result<Vec<bool>, SegmentationError> {
        let (w, h) = (graph.w, graph.h);
        let pixel_count = w * h;
        if pixel_count == 0 {
            return Err(SegmentationError::Solver("empty pixel grid".to_string()));
        }
        if graph.terminals.len() != pixel_count {
            return Err(SegmentationError::Solver(format!(
                "terminal buffer size {} does not match {}x{}",
                graph.terminals.len(),
                w,
                h
            )));
        }

        let mut builder: VecGraphBuilder<usize> = VecGraph::new_builder();
        let pixel_nodes = builder.add_nodes(pixel_count);
        let source = builder.add_node(); // foreground terminal
        let sink = builder.add_node(); // background terminal

        let mut capacities: HashMap<Edge<usize>, u64> = HashMap::new();
        let mut link = |b: &mut VecGraphBuilder<usize>, from, to, weight: f32| {
            let cap = scale_weight(weight);
            if cap == 0 {
                return;
            }
            let e1 = b.add_edge(from, to);
            let e2 = b.add_edge(to, from);
            capacities.insert(e1, cap);
            capacities.insert(e2, cap);
        };

        for y in 0..h {
            for x in 0..w {
                let i = graph.idx(x, y);
                let node = pixel_nodes[i];
                if x > 0 {
                    link(&mut builder, node, pixel_nodes[i - 1], graph.left[i]);
                }
                if y > 0 {
                    link(&mut builder, node, pixel_nodes[i - w], graph.up[i]);
                }
                if x > 0 && y > 0 {
                    link(&mut builder, node, pixel_nodes[i - w - 1], graph.up_left[i]);
                }
                if x + 1 < w && y > 0 {
                    link(&mut builder, node, pixel_nodes[i - w + 1], graph.up_right[i]);
                }
                let t = graph.terminals[i];
                link(&mut builder, source, node, t.to_foreground);
                link(&mut builder, node, sink, t.to_background);
            }
        }

        let g = builder.into_graph();
        let (_flow_value, _flows, min_cut) = dinic::dinic(&g, source, sink, |e| capacities[&e]);

        let mut labels = vec![false; pixel_count];
        for node in min_cut {
            let id = g.node_id(node);
            if id < pixel_count {
                labels[id] = true;
            }
        }
        Ok(labels)
    }
}
