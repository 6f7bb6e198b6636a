//! Error types for the partitioning simulation.

use crate::graph::NodeId;
use thiserror::Error;

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a graph or running a simulation.
///
/// There is no retry path anywhere: the simulation is a deterministic batch
/// computation, and every variant below aborts the run.
#[derive(Debug, Error)]
pub enum Error {
    /// A node id was referenced that does not exist in the graph. Signals a
    /// malformed input graph; a well-formed loader never produces this.
    #[error("node {0} not found in graph")]
    NotFound(NodeId),

    /// The graph under construction would violate a structural invariant
    /// (duplicate node, duplicate edge, self-loop).
    #[error("malformed graph: {0}")]
    Graph(String),

    /// A configuration field is out of its valid range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The result sink could not be created or appended to. A partial,
    /// gap-containing report is worse than no report, so the run aborts.
    #[error("result sink failure: {0}")]
    Sink(#[from] std::io::Error),
}
