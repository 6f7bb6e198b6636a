//! Graph model for the partitioning simulation.
//!
//! A graph is a set of nodes, each carrying a partition label (color) and a
//! fixed, symmetric neighbor list. The graph is built once before round 0
//! and from then on mutated only through [`Graph::set_color`] by the swap
//! executor. Node iteration uses an explicit id sequence captured at
//! construction time, so a run never depends on hash-map ordering.

mod coloring;
mod model;
mod types;

pub use coloring::InitialColorPolicy;
pub use model::Graph;
pub use types::{Color, Node, NodeId};
