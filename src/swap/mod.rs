//! Annealed pairwise color swapping.
//!
//! The engine behind the simulation: every round, each node samples a
//! handful of candidate partners (its own neighbors, the whole graph, or
//! both in sequence), scores a hypothetical color exchange with each, and
//! commits the best exchange that clears a temperature-relaxed acceptance
//! bar. The temperature cools linearly between rounds toward a floor of 1,
//! at which point only strictly improving exchanges survive.
//!
//! # References
//!
//! - Rahimian, Payberah, Girdzijauskas, Jelasity & Haridi (2013),
//!   "JA-BE-JA: A Distributed Algorithm for Balanced Graph Partitioning"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod annealing;
mod benefit;
mod config;
mod metrics;
mod runner;
mod sampling;
mod types;

pub use config::{SelectionPolicy, SwapConfig};
pub use runner::{RunSummary, SwapRunner};
pub use types::{ResultSink, RoundRecord};
