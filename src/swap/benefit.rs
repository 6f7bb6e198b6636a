//! Swap benefit scoring.

use crate::error::Result;
use crate::graph::{Color, Graph, NodeId};

/// Benefit of a prospective color exchange between two nodes: the
/// exponentiated same-color degrees as they stand (`old`) and as they would
/// be after the exchange (`new`).
#[derive(Debug, Clone, Copy)]
pub(super) struct PairBenefit {
    pub old: f64,
    pub new: f64,
}

/// Counts how many of a node's neighbors currently hold `color`.
pub(super) fn color_degree(graph: &Graph, id: NodeId, color: Color) -> Result<usize> {
    let mut degree = 0;
    for &neighbor in graph.neighbors_of(id)? {
        if graph.color_of(neighbor)? == color {
            degree += 1;
        }
    }
    Ok(degree)
}

/// Scores the exchange of colors between `p` and `q`.
///
/// `old` sums each node's affinity for its own color, `new` each node's
/// affinity for the other's color, both raised to `alpha`. A degree of zero
/// contributes zero for any positive exponent.
pub(super) fn swap_benefit(graph: &Graph, p: NodeId, q: NodeId, alpha: f64) -> Result<PairBenefit> {
    let color_p = graph.color_of(p)?;
    let color_q = graph.color_of(q)?;
    let d_pp = color_degree(graph, p, color_p)? as f64;
    let d_qq = color_degree(graph, q, color_q)? as f64;
    let d_pq = color_degree(graph, p, color_q)? as f64;
    let d_qp = color_degree(graph, q, color_p)? as f64;
    Ok(PairBenefit {
        old: d_pp.powf(alpha) + d_qq.powf(alpha),
        new: d_pq.powf(alpha) + d_qp.powf(alpha),
    })
}
