//! Error types for meridian-vivaldi.

use thiserror::Error;

use crate::NodeId;

/// Result type for meridian-vivaldi operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while applying Vivaldi updates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The update rule divides by the measured RTT, so the RTT provider must
    /// produce strictly positive values.
    #[error("non-positive rtt {rtt} measured against peer {peer}")]
    NonPositiveRtt { peer: NodeId, rtt: f64 },

    /// The confidence weight divides by `local_error + remote_error`.
    #[error("zero confidence mass: local error {local} + remote error {remote}")]
    ZeroConfidence { local: f64, remote: f64 },

    /// A sample batch or lookup referenced a node outside the population.
    #[error("unknown node id {0}")]
    UnknownNode(NodeId),
}
