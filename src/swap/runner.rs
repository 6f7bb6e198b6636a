//! Round-driven execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::annealing::Annealing;
use super::benefit::swap_benefit;
use super::config::{SelectionPolicy, SwapConfig};
use super::metrics::round_record;
use super::sampling::{local_sample, uniform_sample};
use super::types::{ResultSink, RoundRecord};
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Result of a completed simulation run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Rounds executed.
    pub rounds: usize,

    /// Accepted swaps across the whole run.
    pub total_swaps: usize,

    /// Temperature after the final cooldown.
    pub final_temperature: f64,

    /// The last round's record, `None` when zero rounds were requested.
    pub last_record: Option<RoundRecord>,
}

/// Executes the swap simulation.
///
/// Each round offers every node, in the graph's fixed id order, exactly one
/// chance to find a partner and exchange colors. After the full pass the
/// temperature cools and the round's metrics are appended to the sink.
/// Nodes processed later in a round see the colors left behind by earlier
/// swaps; that staleness is deliberate, approximating independently acting
/// peers with slightly outdated views of their neighborhood.
pub struct SwapRunner;

impl SwapRunner {
    /// Runs the simulation to completion.
    ///
    /// # Examples
    ///
    /// ```
    /// use graph_anneal::graph::Graph;
    /// use graph_anneal::report::MemorySink;
    /// use graph_anneal::swap::{SwapConfig, SwapRunner};
    ///
    /// let mut graph = Graph::new();
    /// for id in 0..4 {
    ///     graph.add_node(id, id % 2).unwrap();
    /// }
    /// for id in 0..4 {
    ///     graph.add_edge(id, (id + 1) % 4).unwrap();
    /// }
    /// let config = SwapConfig::default().with_rounds(10).with_seed(42);
    /// let mut sink = MemorySink::new();
    /// let summary = SwapRunner::run(&mut graph, &config, &mut sink).unwrap();
    /// assert_eq!(summary.rounds, 10);
    /// assert_eq!(sink.records().len(), 10);
    /// ```
    pub fn run<S: ResultSink>(
        graph: &mut Graph,
        config: &SwapConfig,
        sink: &mut S,
    ) -> Result<RunSummary> {
        config.validate().map_err(Error::Config)?;

        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));

        // The iteration order is fixed here and reused for every round.
        let order = graph.node_ids().to_vec();
        let mut annealing = Annealing::new(config.initial_temperature, config.delta);
        let mut total_swaps = 0;
        let mut last_record = None;

        for round in 0..config.rounds {
            let mut swaps_this_round = 0;
            for &id in &order {
                if let Some(partner) = sample_and_swap(graph, id, config, &annealing, &mut rng)? {
                    commit_swap(graph, id, partner, &mut swaps_this_round)?;
                }
            }
            annealing.cool_down();

            let record = round_record(graph, round, swaps_this_round)?;
            info!(
                round,
                edge_cut = record.edge_cut,
                swaps = record.swaps,
                migrations = record.migrations,
                temperature = annealing.temperature(),
                "round complete"
            );
            sink.append(&record)?;

            total_swaps += swaps_this_round;
            last_record = Some(record);
        }

        Ok(RunSummary {
            rounds: config.rounds,
            total_swaps,
            final_temperature: annealing.temperature(),
            last_record,
        })
    }
}

/// One node's swap opportunity: sample candidates per the configured
/// policy and pick the best accepted partner, if any.
fn sample_and_swap<R: Rng>(
    graph: &Graph,
    node: NodeId,
    config: &SwapConfig,
    annealing: &Annealing,
    rng: &mut R,
) -> Result<Option<NodeId>> {
    let mut partner = None;

    if matches!(
        config.policy,
        SelectionPolicy::Local | SelectionPolicy::Hybrid
    ) {
        let candidates = local_sample(graph, node, config.neighbor_sample_size, rng)?;
        partner = find_partner(graph, node, &candidates, config.alpha, annealing)?;
    }

    if partner.is_none()
        && matches!(
            config.policy,
            SelectionPolicy::Random | SelectionPolicy::Hybrid
        )
    {
        let candidates = uniform_sample(graph, node, config.uniform_sample_size, rng);
        partner = find_partner(graph, node, &candidates, config.alpha, annealing)?;
    }

    Ok(partner)
}

/// Greedy best-of-sampled partner search.
///
/// A candidate only displaces the running best when its new benefit is
/// strictly higher; ties keep the earlier candidate.
fn find_partner(
    graph: &Graph,
    node: NodeId,
    candidates: &[NodeId],
    alpha: f64,
    annealing: &Annealing,
) -> Result<Option<NodeId>> {
    let mut best = None;
    let mut highest_benefit = 0.0;
    for &candidate in candidates {
        let benefit = swap_benefit(graph, node, candidate, alpha)?;
        if annealing.accepts(&benefit) && benefit.new > highest_benefit {
            best = Some(candidate);
            highest_benefit = benefit.new;
        }
    }
    Ok(best)
}

/// Commits an accepted exchange. Callers have already validated the swap,
/// so this always succeeds on a well-formed graph; there is no rollback.
fn commit_swap(graph: &mut Graph, p: NodeId, q: NodeId, swaps: &mut usize) -> Result<()> {
    let color_p = graph.color_of(p)?;
    let color_q = graph.color_of(q)?;
    graph.set_color(p, color_q)?;
    graph.set_color(q, color_p)?;
    *swaps += 1;
    debug!(node = p, partner = q, "swap committed");
    Ok(())
}
