//! RTT samples exchanged between the simulation driver and the nodes.

use crate::{NodeId, Rtt};

/// One RTT measurement against a peer.
///
/// Carries the peer's coordinate as it stood *at sampling time*, so a batch
/// of samples drawn at the start of a round keeps using start-of-round
/// positions even while the round's updates move the live nodes. Samples are
/// immutable values; a node consuming one retains only the scalar RTT in its
/// history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RttSample<P> {
    /// The peer that was measured.
    pub peer: NodeId,
    /// The peer's coordinate at sampling time.
    pub coord: P,
    /// The measured round-trip time. Must be strictly positive.
    pub rtt: Rtt,
}

impl<P> RttSample<P> {
    /// Create a new sample.
    pub const fn new(peer: NodeId, coord: P, rtt: Rtt) -> Self {
        Self { peer, coord, rtt }
    }
}
