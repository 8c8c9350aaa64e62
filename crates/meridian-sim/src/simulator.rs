//! The round-based simulation driver.

use meridian_coords::Coordinate;
use meridian_vivaldi::{Network, Result, RttSample, SampleBatch};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::{RoundError, RttProvider, SimulationErrors};

/// Orchestrates a Vivaldi experiment.
///
/// Owns the RTT provider, the node population, and an append-only history of
/// per-round error snapshots. Construction takes the population size, the
/// starting coordinate copied into every node, and the damping constants
/// `cc` (position) and `ce` (error), both typically below 1.
#[derive(Debug)]
pub struct Simulator<P, Pr> {
    provider: Pr,
    num_nodes: usize,
    net: Network<P>,
    history: Vec<RoundError>,
}

impl<P, Pr> Simulator<P, Pr>
where
    P: Coordinate,
    Pr: RttProvider,
{
    /// Build the population and attach the RTT provider.
    pub fn new(num_nodes: usize, initial_point: P, provider: Pr, cc: f64, ce: f64) -> Self {
        Self {
            provider,
            num_nodes,
            net: Network::new(num_nodes, initial_point, cc, ce),
            history: Vec::new(),
        }
    }

    /// The node population, for inspection.
    pub fn network(&self) -> &Network<P> {
        &self.net
    }

    /// The recorded per-round snapshots, oldest first.
    pub fn rounds(&self) -> &[RoundError] {
        &self.history
    }

    /// Run `iterations` synchronized rounds.
    ///
    /// Per round, every node draws `samples_per_node` distinct peers
    /// uniformly at random without replacement (shuffle, take the prefix;
    /// a request exceeding the `num_nodes - 1` available peers is clamped
    /// to all of them), measures a noisy RTT against each, and the whole
    /// batch is applied in one network update. Samples carry peer positions
    /// read before any of the round's updates, so the round is a strict
    /// barrier. After the update the estimation matrix is reduced to
    /// absolute errors against the provider's ground truth and appended to
    /// the history.
    ///
    /// # Errors
    ///
    /// Fails fast on the first contract violation (non-positive RTT from
    /// the provider, zero confidence mass); the round's partial effects up
    /// to that sample remain applied, matching the abort-on-fault model.
    pub fn run<R: Rng>(
        &mut self,
        iterations: usize,
        samples_per_node: usize,
        rng: &mut R,
    ) -> Result<()> {
        for round in 0..iterations {
            // Sampling phase: all positions read here predate any update
            // belonging to this round.
            let mut batch = SampleBatch::new();
            for node in 0..self.num_nodes {
                let mut peers: Vec<usize> =
                    (0..self.num_nodes).filter(|&peer| peer != node).collect();
                peers.shuffle(rng);
                peers.truncate(samples_per_node);

                let mut samples = Vec::with_capacity(peers.len());
                for peer in peers {
                    let rtt = self.provider.sample(node, peer, rng);
                    let coord = self.net.node(peer)?.position();
                    samples.push(RttSample::new(peer, coord, rtt));
                }
                batch.insert(node, samples);
            }

            // Update phase.
            self.net.update(&batch, rng)?;

            // Error snapshot against the noiseless ground truth.
            let mut estimations = self.net.get_estimations();
            for (&node, row) in estimations.iter_mut() {
                for (&peer, value) in row.iter_mut() {
                    *value = (self.provider.real_rtt(node, peer) - *value).abs();
                }
            }
            let snapshot = RoundError::new(estimations);
            debug!(round, median = snapshot.median(), "round complete");
            self.history.push(snapshot);
        }
        Ok(())
    }

    /// The median, max, and min error series over all completed rounds,
    /// aligned by round index. Read-only aggregation of the history.
    pub fn get_simulation_errors(&self) -> SimulationErrors {
        let mut errors = SimulationErrors::default();
        for round in &self.history {
            errors.median.push(round.median());
            errors.max.push(round.max());
            errors.min.push(round.min());
        }
        errors
    }
}
