//! Initial coloring policies.

use rand::Rng;

use super::model::Graph;
use super::types::Color;
use crate::error::{Error, Result};

/// How the initial partition labels are spread over a freshly built graph.
///
/// Applying a policy rewrites both the initial and the current color of
/// every node, so it must happen before the first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialColorPolicy {
    /// Cycle through the colors along the id order: node `i` gets color
    /// `i mod num_colors`. Produces maximally interleaved partitions.
    RoundRobin,
    /// Split the id order into contiguous blocks, one color per block.
    /// Produces maximally clustered partitions.
    Batch,
    /// Draw every node's color uniformly at random.
    Random,
}

impl InitialColorPolicy {
    /// Recolors the whole graph with `num_colors` labels `0..num_colors`.
    pub fn apply<R: Rng>(&self, graph: &mut Graph, num_colors: Color, rng: &mut R) -> Result<()> {
        if num_colors == 0 {
            return Err(Error::Config("number of colors must be positive".into()));
        }
        let ids = graph.node_ids().to_vec();
        let block = ids.len().div_ceil(num_colors as usize).max(1);
        for (index, id) in ids.into_iter().enumerate() {
            let color = match self {
                InitialColorPolicy::RoundRobin => (index % num_colors as usize) as Color,
                InitialColorPolicy::Batch => (index / block) as Color,
                InitialColorPolicy::Random => rng.random_range(0..num_colors),
            };
            graph.reset_color(id, color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn nodes(n: u32) -> Graph {
        let mut graph = Graph::new();
        for id in 0..n {
            graph.add_node(id, 0).unwrap();
        }
        graph
    }

    fn colors(graph: &Graph) -> Vec<Color> {
        graph
            .node_ids()
            .iter()
            .map(|&id| graph.color_of(id).unwrap())
            .collect()
    }

    #[test]
    fn test_round_robin_interleaves() {
        let mut graph = nodes(6);
        let mut rng = StdRng::seed_from_u64(0);
        InitialColorPolicy::RoundRobin
            .apply(&mut graph, 3, &mut rng)
            .unwrap();
        assert_eq!(colors(&graph), vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_batch_clusters() {
        let mut graph = nodes(6);
        let mut rng = StdRng::seed_from_u64(0);
        InitialColorPolicy::Batch
            .apply(&mut graph, 2, &mut rng)
            .unwrap();
        assert_eq!(colors(&graph), vec![0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_batch_uneven_split_stays_in_range() {
        let mut graph = nodes(7);
        let mut rng = StdRng::seed_from_u64(0);
        InitialColorPolicy::Batch
            .apply(&mut graph, 3, &mut rng)
            .unwrap();
        for color in colors(&graph) {
            assert!(color < 3, "color {color} out of range");
        }
    }

    #[test]
    fn test_random_is_seed_deterministic() {
        let mut first = nodes(20);
        let mut second = nodes(20);
        let mut rng_a = StdRng::seed_from_u64(17);
        let mut rng_b = StdRng::seed_from_u64(17);
        InitialColorPolicy::Random
            .apply(&mut first, 4, &mut rng_a)
            .unwrap();
        InitialColorPolicy::Random
            .apply(&mut second, 4, &mut rng_b)
            .unwrap();
        assert_eq!(colors(&first), colors(&second));
        assert!(colors(&first).iter().all(|&c| c < 4));
    }

    #[test]
    fn test_apply_resets_initial_color() {
        let mut graph = nodes(4);
        graph.set_color(2, 9).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        InitialColorPolicy::RoundRobin
            .apply(&mut graph, 2, &mut rng)
            .unwrap();
        let node = graph.get(2).unwrap();
        assert_eq!(node.initial_color(), node.current_color());
    }

    #[test]
    fn test_zero_colors_rejected() {
        let mut graph = nodes(3);
        let mut rng = StdRng::seed_from_u64(0);
        let result = InitialColorPolicy::RoundRobin.apply(&mut graph, 0, &mut rng);
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
