//! Per-round metrics computation.

use super::types::RoundRecord;
use crate::error::Result;
use crate::graph::Graph;

/// Scans the graph once and assembles the round's record.
///
/// Every ordered (node, neighbor) pair with differing colors bumps a
/// mismatch counter; since the neighbor relation is symmetric, each cut
/// edge is seen from both endpoints and the counter halves evenly into the
/// edge cut. Migrations compare current against initial color at this
/// instant, so a node that swapped away and back does not count.
pub(super) fn round_record(graph: &Graph, round: usize, swaps: usize) -> Result<RoundRecord> {
    let mut mismatches = 0;
    let mut migrations = 0;
    for &id in graph.node_ids() {
        let node = graph.get(id)?;
        if node.current_color() != node.initial_color() {
            migrations += 1;
        }
        for &neighbor in node.neighbors() {
            if graph.color_of(neighbor)? != node.current_color() {
                mismatches += 1;
            }
        }
    }
    Ok(RoundRecord {
        round,
        edge_cut: mismatches / 2,
        swaps,
        migrations,
    })
}
