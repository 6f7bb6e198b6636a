//! The graph container.

use std::collections::HashMap;

use super::types::{Color, Node, NodeId};
use crate::error::{Error, Result};

/// An undirected graph with colored nodes.
///
/// Construction is incremental: add every node, then add edges between them.
/// [`Graph::add_edge`] registers the edge on both endpoints, so the neighbor
/// relation is symmetric by construction. The id sequence returned by
/// [`Graph::node_ids`] is kept in ascending numeric order, which fixes the
/// per-round iteration order independently of insertion order.
///
/// # Examples
///
/// ```
/// use graph_anneal::graph::Graph;
///
/// let mut graph = Graph::new();
/// for id in 0..4 {
///     graph.add_node(id, 0).unwrap();
/// }
/// graph.add_edge(0, 1).unwrap();
/// graph.add_edge(1, 2).unwrap();
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<NodeId, Node>,
    /// Ascending id order, captured as nodes are added and reused for every
    /// round pass.
    order: Vec<NodeId>,
    edges: usize,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with the given initial (and current) color.
    ///
    /// Fails if the id is already present.
    pub fn add_node(&mut self, id: NodeId, color: Color) -> Result<()> {
        if self.nodes.contains_key(&id) {
            return Err(Error::Graph(format!("duplicate node id {id}")));
        }
        self.nodes.insert(id, Node::new(id, color));
        let pos = self.order.binary_search(&id).unwrap_or_else(|pos| pos);
        self.order.insert(pos, id);
        Ok(())
    }

    /// Adds an undirected edge, registering each endpoint in the other's
    /// neighbor list.
    ///
    /// Both endpoints must already exist. Self-loops and duplicate edges are
    /// rejected: both would corrupt the color-degree arithmetic.
    pub fn add_edge(&mut self, p: NodeId, q: NodeId) -> Result<()> {
        if p == q {
            return Err(Error::Graph(format!("self-loop on node {p}")));
        }
        if !self.nodes.contains_key(&q) {
            return Err(Error::NotFound(q));
        }
        let node_p = self.nodes.get_mut(&p).ok_or(Error::NotFound(p))?;
        if node_p.neighbors().contains(&q) {
            return Err(Error::Graph(format!("duplicate edge {p}-{q}")));
        }
        node_p.push_neighbor(q);
        self.nodes
            .get_mut(&q)
            .ok_or(Error::NotFound(q))?
            .push_neighbor(p);
        self.edges += 1;
        Ok(())
    }

    /// Looks up a node.
    pub fn get(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(&id).ok_or(Error::NotFound(id))
    }

    /// The neighbor ids of a node, in edge-insertion order.
    pub fn neighbors_of(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(self.get(id)?.neighbors())
    }

    /// The current color of a node.
    pub fn color_of(&self, id: NodeId) -> Result<Color> {
        Ok(self.get(id)?.current_color())
    }

    /// Overwrites a node's current color. Called by the swap executor when
    /// an accepted exchange is committed.
    pub fn set_color(&mut self, id: NodeId, color: Color) -> Result<()> {
        self.nodes
            .get_mut(&id)
            .ok_or(Error::NotFound(id))?
            .set_current_color(color);
        Ok(())
    }

    /// All node ids in ascending order. This sequence is fixed once the
    /// graph is built and is the canonical per-round iteration order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.order
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// True when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub(super) fn reset_color(&mut self, id: NodeId, color: Color) -> Result<()> {
        self.nodes
            .get_mut(&id)
            .ok_or(Error::NotFound(id))?
            .reset_color(color);
        Ok(())
    }
}
