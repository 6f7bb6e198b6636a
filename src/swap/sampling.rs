//! Candidate partner sampling.
//!
//! Both samplers return distinct ids and never include the requesting node.
//! The requested size is clipped to the eligible pool up front, so a request
//! larger than the pool returns the whole pool instead of spinning forever
//! in the rejection loop.

use rand::Rng;

use crate::error::Result;
use crate::graph::{Graph, NodeId};

/// Draws up to `k` distinct neighbors of `node`, uniformly without
/// replacement. Returns the whole neighbor list when it has at most `k`
/// entries.
pub(super) fn local_sample<R: Rng>(
    graph: &Graph,
    node: NodeId,
    k: usize,
    rng: &mut R,
) -> Result<Vec<NodeId>> {
    let neighbors = graph.neighbors_of(node)?;
    if neighbors.len() <= k {
        return Ok(neighbors.to_vec());
    }
    let mut picked = Vec::with_capacity(k);
    while picked.len() < k {
        let candidate = neighbors[rng.random_range(0..neighbors.len())];
        if !picked.contains(&candidate) {
            picked.push(candidate);
        }
    }
    Ok(picked)
}

/// Draws up to `k` distinct ids uniformly over the whole graph, excluding
/// `node` itself.
pub(super) fn uniform_sample<R: Rng>(
    graph: &Graph,
    node: NodeId,
    k: usize,
    rng: &mut R,
) -> Vec<NodeId> {
    let ids = graph.node_ids();
    let eligible = ids.len().saturating_sub(1);
    let k = k.min(eligible);
    let mut picked = Vec::with_capacity(k);
    while picked.len() < k {
        let candidate = ids[rng.random_range(0..ids.len())];
        if candidate != node && !picked.contains(&candidate) {
            picked.push(candidate);
        }
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn star(leaves: u32) -> Graph {
        let mut graph = Graph::new();
        graph.add_node(0, 0).unwrap();
        for id in 1..=leaves {
            graph.add_node(id, 0).unwrap();
            graph.add_edge(0, id).unwrap();
        }
        graph
    }

    #[test]
    fn test_local_sample_returns_all_neighbors_when_pool_fits() {
        let graph = star(3);
        let mut rng = StdRng::seed_from_u64(1);
        let sample = local_sample(&graph, 0, 5, &mut rng).unwrap();
        assert_eq!(sample, vec![1, 2, 3]);
    }

    #[test]
    fn test_local_sample_draws_distinct_neighbors() {
        let graph = star(10);
        let mut rng = StdRng::seed_from_u64(1);
        let sample = local_sample(&graph, 0, 4, &mut rng).unwrap();
        assert_eq!(sample.len(), 4);
        let mut deduped = sample.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), 4, "sample contains duplicates: {sample:?}");
        assert!(sample.iter().all(|&id| (1..=10).contains(&id)));
    }

    #[test]
    fn test_local_sample_of_leaf_is_its_center() {
        let graph = star(4);
        let mut rng = StdRng::seed_from_u64(1);
        let sample = local_sample(&graph, 2, 3, &mut rng).unwrap();
        assert_eq!(sample, vec![0]);
    }

    #[test]
    fn test_local_sample_unknown_node_fails() {
        let graph = star(2);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(local_sample(&graph, 42, 1, &mut rng).is_err());
    }

    #[test]
    fn test_uniform_sample_excludes_self() {
        let graph = star(6);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let sample = uniform_sample(&graph, 0, 4, &mut rng);
            assert_eq!(sample.len(), 4);
            assert!(!sample.contains(&0), "self id in sample: {sample:?}");
        }
    }

    #[test]
    fn test_uniform_sample_clips_oversized_request() {
        let graph = star(3);
        let mut rng = StdRng::seed_from_u64(5);
        // 4 nodes total, 3 eligible after excluding the requester.
        let sample = uniform_sample(&graph, 0, 100, &mut rng);
        let mut sorted = sample;
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3]);
    }

    #[test]
    fn test_uniform_sample_single_node_graph_is_empty() {
        let mut graph = Graph::new();
        graph.add_node(0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        assert!(uniform_sample(&graph, 0, 3, &mut rng).is_empty());
    }

    #[test]
    fn test_sampling_is_seed_deterministic() {
        let graph = star(12);
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        assert_eq!(
            local_sample(&graph, 0, 5, &mut rng_a).unwrap(),
            local_sample(&graph, 0, 5, &mut rng_b).unwrap()
        );
        assert_eq!(
            uniform_sample(&graph, 3, 5, &mut rng_a),
            uniform_sample(&graph, 3, 5, &mut rng_b)
        );
    }
}
