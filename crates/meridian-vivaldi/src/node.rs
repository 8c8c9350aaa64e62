//! A single node of the overlay.

use std::collections::{HashMap, VecDeque};

use meridian_coords::Coordinate;
use rand::Rng;

use crate::{vivaldi_step, Error, NodeId, Result, Rtt, RttSample};

/// How many recent RTTs per peer feed the remote-error estimate.
const RTT_WINDOW: usize = 5;

/// One node: a position, a local error, and a bounded RTT history per peer.
///
/// The local error starts at 1.0 (fully uncertain) and follows the moving
/// average computed by [`vivaldi_step`]. The update rule does not clamp it to
/// `[0, 1]`; it can drift outside that range and is used as-is.
///
/// State is mutated only through [`update`](Node::update); nothing outside
/// the owning [`Network`](crate::Network) writes to a node.
#[derive(Debug, Clone)]
pub struct Node<P> {
    id: NodeId,
    position: P,
    local_error: f64,
    rtt_history: HashMap<NodeId, VecDeque<Rtt>>,
    cc: f64,
    ce: f64,
}

impl<P: Coordinate> Node<P> {
    /// Create a node at the given starting position.
    pub fn new(id: NodeId, position: P, cc: f64, ce: f64) -> Self {
        Self {
            id,
            position,
            local_error: 1.0,
            rtt_history: HashMap::new(),
            cc,
            ce,
        }
    }

    /// This node's identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's current coordinate.
    pub fn position(&self) -> P {
        self.position
    }

    /// The node's current local error estimate.
    pub fn local_error(&self) -> f64 {
        self.local_error
    }

    /// Estimate how unreliable the peer's reported confidence is, from this
    /// node's own measurement history with that peer.
    ///
    /// The simulated protocol has no error-gossip channel, so the mean of the
    /// last five RTTs recorded against the peer stands in: the
    /// further the new measurement sits from that mean (relative to the
    /// measurement), the less the peer is trusted. With no history the peer
    /// is fully untrusted (1.0).
    ///
    /// # Errors
    ///
    /// [`Error::NonPositiveRtt`] if `new_rtt` is not strictly positive.
    pub fn remote_error(&self, peer: NodeId, new_rtt: Rtt) -> Result<f64> {
        if new_rtt <= 0.0 {
            return Err(Error::NonPositiveRtt { peer, rtt: new_rtt });
        }

        let window = match self.rtt_history.get(&peer) {
            Some(w) if !w.is_empty() => w,
            _ => return Ok(1.0),
        };

        let mean = window.iter().sum::<f64>() / window.len() as f64;
        Ok((mean - new_rtt).abs() / new_rtt)
    }

    /// Incorporate one RTT sample.
    ///
    /// Computes the remote error from the history as it stood *before* this
    /// sample, records the sample's RTT in the window, then applies the
    /// Vivaldi step and replaces position and local error with its output.
    pub fn update<R: Rng + ?Sized>(&mut self, sample: &RttSample<P>, rng: &mut R) -> Result<()> {
        let remote_error = self.remote_error(sample.peer, sample.rtt)?;

        let window = self.rtt_history.entry(sample.peer).or_default();
        if window.len() == RTT_WINDOW {
            window.pop_front();
        }
        window.push_back(sample.rtt);

        let (position, local_error) = vivaldi_step(
            self.position,
            sample,
            self.local_error,
            remote_error,
            self.cc,
            self.ce,
            rng,
        )?;
        self.position = position;
        self.local_error = local_error;
        Ok(())
    }

    /// The model's current RTT estimate to an arbitrary coordinate.
    pub fn get_estimation(&self, other: P) -> Rtt {
        (self.position - other).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_coords::Euclidean2D;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn make_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn node_at(x: f64, y: f64) -> Node<Euclidean2D> {
        Node::new(0, Euclidean2D::new(x, y), 0.25, 0.25)
    }

    #[test]
    fn fresh_node_is_fully_uncertain() {
        let node = node_at(0.0, 0.0);
        assert_eq!(node.local_error(), 1.0);
        assert_eq!(node.remote_error(1, 100.0).unwrap(), 1.0);
    }

    #[test]
    fn remote_error_is_relative_distance_from_history_mean() {
        let mut rng = make_rng();
        let mut node = node_at(0.0, 0.0);
        let peer_pos = Euclidean2D::new(50.0, 0.0);

        node.update(&RttSample::new(1, peer_pos, 100.0), &mut rng).unwrap();
        node.update(&RttSample::new(1, peer_pos, 110.0), &mut rng).unwrap();

        // mean([100, 110]) = 105, |105 - 100| / 100 = 0.05
        let e = node.remote_error(1, 100.0).unwrap();
        assert!((e - 0.05).abs() < 1e-12);
    }

    #[test]
    fn history_window_keeps_only_the_last_five_rtts() {
        let mut rng = make_rng();
        let mut node = node_at(0.0, 0.0);
        let peer_pos = Euclidean2D::new(50.0, 0.0);

        for rtt in [10.0, 20.0, 30.0, 40.0, 50.0, 60.0] {
            node.update(&RttSample::new(1, peer_pos, rtt), &mut rng).unwrap();
        }

        // Window is [20, 30, 40, 50, 60]: mean 40, so a new measurement of
        // 40 matches the history exactly. Had the 10 survived, the mean
        // would be 35 and the error 0.125.
        let e = node.remote_error(1, 40.0).unwrap();
        assert!(e.abs() < 1e-12);
    }

    #[test]
    fn histories_are_tracked_per_peer() {
        let mut rng = make_rng();
        let mut node = node_at(0.0, 0.0);
        let pos = Euclidean2D::new(50.0, 0.0);

        node.update(&RttSample::new(1, pos, 80.0), &mut rng).unwrap();

        // Peer 2 has no history yet.
        assert_eq!(node.remote_error(2, 80.0).unwrap(), 1.0);
        assert_eq!(node.remote_error(1, 80.0).unwrap(), 0.0);
    }

    #[test]
    fn estimation_is_the_norm_of_the_difference() {
        let node = node_at(3.0, 4.0);
        assert_eq!(node.get_estimation(Euclidean2D::ORIGIN), 5.0);
    }

    #[test]
    fn update_rejects_non_positive_rtt_without_touching_state() {
        let mut rng = make_rng();
        let mut node = node_at(1.0, 2.0);
        let before = node.position();

        let err = node
            .update(&RttSample::new(1, Euclidean2D::ORIGIN, -3.0), &mut rng)
            .unwrap_err();
        assert_eq!(err, Error::NonPositiveRtt { peer: 1, rtt: -3.0 });
        assert_eq!(node.position(), before);
        assert_eq!(node.remote_error(1, 10.0).unwrap(), 1.0);
    }
}
