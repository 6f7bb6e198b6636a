//! Decentralized graph partitioning by annealed pairwise color swaps.
//!
//! Every node of a graph holds a color (its partition label). Round after
//! round, each node samples a few candidate partners, scores what a color
//! exchange with each would do to the pair's same-color neighbor counts,
//! and commits the best exchange that clears a temperature-relaxed bar.
//! The temperature cools between rounds, so the search drifts from
//! exploratory lateral moves toward strictly improving ones, shrinking the
//! number of edges whose endpoints disagree (the edge cut).
//!
//! The simulation is sequential and, given a seed, fully deterministic: it
//! evaluates a globally visible graph in a fixed node order, standing in
//! for the message-passing peers of the distributed original.
//!
//! # Components
//!
//! - [`graph`]: the colored graph, its construction API, and initial
//!   coloring policies.
//! - [`swap`]: the engine — configuration, candidate sampling, benefit
//!   scoring, annealing control, and the round loop.
//! - [`report`]: sinks the per-round records flow into.
//!
//! # Examples
//!
//! ```
//! use graph_anneal::graph::{Graph, InitialColorPolicy};
//! use graph_anneal::report::MemorySink;
//! use graph_anneal::swap::{SwapConfig, SwapRunner};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! // A ring of 12 nodes, 3 colors interleaved as badly as possible.
//! let mut graph = Graph::new();
//! for id in 0..12 {
//!     graph.add_node(id, 0).unwrap();
//! }
//! for id in 0..12 {
//!     graph.add_edge(id, (id + 1) % 12).unwrap();
//! }
//! let mut rng = StdRng::seed_from_u64(1);
//! InitialColorPolicy::RoundRobin
//!     .apply(&mut graph, 3, &mut rng)
//!     .unwrap();
//!
//! let config = SwapConfig::default().with_rounds(50).with_seed(1);
//! let mut sink = MemorySink::new();
//! let summary = SwapRunner::run(&mut graph, &config, &mut sink).unwrap();
//!
//! assert_eq!(summary.rounds, 50);
//! assert_eq!(sink.records().len(), 50);
//! assert!(summary.last_record.unwrap().edge_cut <= graph.edge_count());
//! ```

pub mod error;
pub mod graph;
pub mod report;
pub mod swap;

pub use error::{Error, Result};
