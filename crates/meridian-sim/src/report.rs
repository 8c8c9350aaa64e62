//! Per-round error snapshots and the aggregated report series.

use meridian_vivaldi::EstimationMatrix;

/// Absolute estimation errors for one completed round.
///
/// Holds the per-pair error matrix (ordered pairs, self-pairs excluded) and
/// a flat list of the same values, flattened eagerly at construction so the
/// snapshot is immutable afterward.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundError {
    errors: EstimationMatrix,
    flat: Vec<f64>,
}

impl RoundError {
    /// Take ownership of a round's absolute-error matrix.
    pub fn new(errors: EstimationMatrix) -> Self {
        let flat = errors
            .values()
            .flat_map(|row| row.values().copied())
            .collect();
        Self { errors, flat }
    }

    /// The per-pair error matrix.
    pub fn errors(&self) -> &EstimationMatrix {
        &self.errors
    }

    /// All error values of the round, in node-pair order.
    pub fn values(&self) -> &[f64] {
        &self.flat
    }

    /// Median of the round's errors. An even-length list averages the two
    /// middle elements.
    pub fn median(&self) -> f64 {
        let mut sorted = self.flat.clone();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        if n == 0 {
            return f64::NAN;
        }
        if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        }
    }

    /// Largest error of the round.
    pub fn max(&self) -> f64 {
        self.flat.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest error of the round.
    pub fn min(&self) -> f64 {
        self.flat.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

/// The report handed to external consumers: three per-round series, aligned
/// by round index.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationErrors {
    /// Median error per round.
    pub median: Vec<f64>,
    /// Maximum error per round.
    pub max: Vec<f64>,
    /// Minimum error per round.
    pub min: Vec<f64>,
}

impl SimulationErrors {
    /// Number of recorded rounds.
    pub fn len(&self) -> usize {
        self.median.len()
    }

    /// Whether any rounds were recorded.
    pub fn is_empty(&self) -> bool {
        self.median.is_empty()
    }
}
