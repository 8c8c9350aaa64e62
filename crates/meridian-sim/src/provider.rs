//! RTT sources feeding the simulation.

use meridian_vivaldi::{NodeId, Rtt};
use rand::{Rng, RngCore};

/// Source of RTT measurements between node pairs.
///
/// `sample` returns the ground truth plus bounded positive jitter; `real_rtt`
/// returns the noiseless ground truth the error reporting compares against.
/// The simulation core never inspects which implementation it is given.
///
/// Implementations must produce strictly positive RTTs — the Vivaldi update
/// rule divides by the measurement.
pub trait RttProvider {
    /// A noisy measurement for the ordered pair `(x, y)`.
    fn sample(&self, x: NodeId, y: NodeId, rng: &mut dyn RngCore) -> Rtt;

    /// The noiseless ground truth for the ordered pair `(x, y)`.
    fn real_rtt(&self, x: NodeId, y: NodeId) -> Rtt;
}

/// Jitter bound added by [`MatrixRttProvider::sample`].
const MATRIX_JITTER: f64 = 1.0;

/// Provider wrapping a caller-supplied RTT matrix.
///
/// The matrix may be asymmetric; `matrix[x][y]` is used for the ordered pair
/// `(x, y)` as given. Sampling adds uniform jitter in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct MatrixRttProvider {
    rtts: Vec<Vec<Rtt>>,
}

impl MatrixRttProvider {
    /// Wrap an existing matrix, indexed as `rtts[x][y]`.
    pub fn new(rtts: Vec<Vec<Rtt>>) -> Self {
        Self { rtts }
    }
}

impl RttProvider for MatrixRttProvider {
    /// # Panics
    ///
    /// Panics if either identifier is outside the matrix — an unknown node
    /// is a caller contract violation, surfaced immediately.
    fn sample(&self, x: NodeId, y: NodeId, rng: &mut dyn RngCore) -> Rtt {
        self.rtts[x][y] + rng.gen::<f64>() * MATRIX_JITTER
    }

    fn real_rtt(&self, x: NodeId, y: NodeId) -> Rtt {
        self.rtts[x][y]
    }
}

/// Upper bound of the random ground-truth RTTs.
const RANDOM_RTT_MAX: f64 = 200.0;

/// Jitter bound added by [`RandomRttProvider::sample`].
const RANDOM_JITTER: f64 = 5.0;

/// Provider over a randomly generated symmetric RTT matrix.
///
/// Ground truth is drawn once at construction, uniform in `[0, 200)` and
/// symmetric. Each sample adds independent uniform jitter in `[0, 5)`.
#[derive(Debug, Clone)]
pub struct RandomRttProvider {
    rtts: Vec<Vec<Rtt>>,
}

impl RandomRttProvider {
    /// Generate the symmetric ground-truth matrix for `num_nodes` nodes.
    pub fn new<R: Rng + ?Sized>(num_nodes: usize, rng: &mut R) -> Self {
        let mut rtts = vec![vec![0.0; num_nodes]; num_nodes];
        for i in 0..num_nodes {
            for j in i..num_nodes {
                let rtt = rng.gen::<f64>() * RANDOM_RTT_MAX;
                rtts[i][j] = rtt;
                rtts[j][i] = rtt;
            }
        }
        Self { rtts }
    }
}

impl RttProvider for RandomRttProvider {
    fn sample(&self, x: NodeId, y: NodeId, rng: &mut dyn RngCore) -> Rtt {
        self.rtts[x][y] + rng.gen::<f64>() * RANDOM_JITTER
    }

    fn real_rtt(&self, x: NodeId, y: NodeId) -> Rtt {
        self.rtts[x][y]
    }
}
