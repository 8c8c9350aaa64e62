//! Meridian Simulator
//!
//! Drives a population of Vivaldi nodes through synchronized logical rounds
//! and records how well the embedding predicts the ground-truth RTTs.
//!
//! # Round Model
//!
//! Each round forms a strict barrier: every node draws a random subset of
//! peers and measures a noisy RTT against each, with all samples carrying
//! peer positions *as they stood at the start of the round*. Only once the
//! full batch is assembled does the network apply it, so no node ever sees
//! another node's mid-round movement. After the update, the all-pairs
//! estimation matrix is compared against the provider's noiseless ground
//! truth and the absolute errors are recorded as that round's snapshot.
//!
//! The execution is serial and, given a seeded rng, fully deterministic —
//! the rounds model a gossip protocol's synchronized exchanges without any
//! transport.
//!
//! # Reporting Surface
//!
//! [`Simulator::get_simulation_errors`] is the sole output handed to any
//! reporting or plotting layer: three per-round series (median, max, min of
//! the flattened error snapshot).

mod provider;
mod report;
mod simulator;

pub use provider::{MatrixRttProvider, RandomRttProvider, RttProvider};
pub use report::{RoundError, SimulationErrors};
pub use simulator::Simulator;
