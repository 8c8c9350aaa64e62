//! Meridian Vivaldi Engine
//!
//! The Vivaldi network-coordinate update rule and the node population that
//! applies it.
//!
//! # The Algorithm
//!
//! Each node holds a position in an embedding space and a scalar local error
//! (its confidence in that position, 1.0 = fully uncertain). When a node
//! measures an RTT against a peer it treats the measurement as a spring
//! between the two positions: if the predicted distance exceeds the measured
//! RTT the node is pulled toward the peer, otherwise pushed away, with the
//! step size damped by a tuning constant and by a confidence weight derived
//! from the two nodes' error estimates.
//!
//! # Layering
//!
//! - [`vivaldi_step`]: the pure update rule, no owned state.
//! - [`Node`]: one position, one local error, a bounded per-peer RTT window.
//! - [`Network`]: exclusive owner of the node population, routes sample
//!   batches and produces the all-pairs estimation matrix.
//!
//! # Failure Model
//!
//! Non-positive RTTs, a zero confidence mass, and unknown node identifiers
//! violate caller contracts and surface immediately as [`Error`] values; no
//! operation retries or silently defaults.

mod error;
mod network;
mod node;
mod sample;
mod step;

pub use error::{Error, Result};
pub use network::{EstimationMatrix, Network, SampleBatch};
pub use node::Node;
pub use sample::RttSample;
pub use step::{direction, vivaldi_step};

/// Identifier of a node in the overlay.
///
/// Identifiers are dense: a population of `n` nodes uses `0..n`.
pub type NodeId = usize;

/// A round-trip time measurement, in the same unit the embedding predicts.
pub type Rtt = f64;
