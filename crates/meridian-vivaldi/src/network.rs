//! The node population and batch sample routing.

use std::collections::BTreeMap;

use meridian_coords::Coordinate;
use rand::Rng;

use crate::{Error, Node, NodeId, Result, Rtt, RttSample};

/// A round's worth of samples, keyed by the node that measured them.
///
/// Ordered keys keep the node visit order (and therefore the draw order on a
/// shared rng) deterministic for a given batch.
pub type SampleBatch<P> = BTreeMap<NodeId, Vec<RttSample<P>>>;

/// All-pairs RTT estimations, `matrix[i][j]` for every ordered pair `i != j`.
pub type EstimationMatrix = BTreeMap<NodeId, BTreeMap<NodeId, Rtt>>;

/// Exclusive owner of the overlay's nodes.
///
/// Nodes get dense identifiers `0..num_nodes` at construction and keep them
/// for the network's lifetime. All mutation goes through
/// [`update`](Network::update); nodes own disjoint state, so the order in
/// which different nodes' batches are applied cannot affect the outcome.
#[derive(Debug, Clone)]
pub struct Network<P> {
    nodes: Vec<Node<P>>,
}

impl<P: Coordinate> Network<P> {
    /// Build `num_nodes` nodes, each starting at its own copy of
    /// `initial_point`, sharing the damping constants `cc` and `ce`.
    pub fn new(num_nodes: usize, initial_point: P, cc: f64, ce: f64) -> Self {
        let nodes = (0..num_nodes)
            .map(|id| Node::new(id, initial_point, cc, ce))
            .collect();
        Self { nodes }
    }

    /// Number of nodes in the population.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by identifier.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownNode`] for identifiers outside the population.
    pub fn node(&self, id: NodeId) -> Result<&Node<P>> {
        self.nodes.get(id).ok_or(Error::UnknownNode(id))
    }

    /// Apply a batch of samples.
    ///
    /// Each node consumes its own samples in list order. The batch must name
    /// only known nodes; an unknown identifier fails the whole call before
    /// any of that node's samples are applied.
    pub fn update<R: Rng + ?Sized>(&mut self, batch: &SampleBatch<P>, rng: &mut R) -> Result<()> {
        for (&id, samples) in batch {
            let node = self.nodes.get_mut(id).ok_or(Error::UnknownNode(id))?;
            for sample in samples {
                node.update(sample, rng)?;
            }
        }
        Ok(())
    }

    /// Predicted RTT for every ordered pair of distinct nodes, from current
    /// positions. Self-pairs are excluded.
    pub fn get_estimations(&self) -> EstimationMatrix {
        let mut estimations = EstimationMatrix::new();
        for node in &self.nodes {
            let row = estimations.entry(node.id()).or_default();
            for other in &self.nodes {
                if node.id() == other.id() {
                    continue;
                }
                row.insert(other.id(), node.get_estimation(other.position()));
            }
        }
        estimations
    }
}
