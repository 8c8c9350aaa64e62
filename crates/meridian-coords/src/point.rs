//! The common contract all embedding spaces satisfy.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

use rand::Rng;

/// A point in a Vivaldi embedding space.
///
/// Implementors are closed vector spaces over `f64`: addition and subtraction
/// are defined between points of the same space, scalar multiplication and
/// division scale every component, and [`norm`](Coordinate::norm) gives the
/// predicted latency of the vector.
///
/// # Laws
///
/// - Addition is commutative and associative (up to floating-point rounding).
/// - `(p * s) / s` recovers `p` for any non-zero scalar `s`.
/// - `norm(p) >= 0` for well-formed points.
///
/// Note that `(a + b) - b == a` holds for the Euclidean spaces but *not* for
/// the height-vector spaces, whose subtraction accumulates the height terms
/// (see [`HeightVector2D`](crate::HeightVector2D)).
pub trait Coordinate:
    Copy
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    /// The origin of the space (all components zero).
    const ORIGIN: Self;

    /// Predicted latency of this vector.
    ///
    /// Always non-negative for points with non-negative height terms.
    fn norm(&self) -> f64;

    /// Draw a uniformly random point and normalize it to unit norm.
    ///
    /// Each component is drawn uniformly from `[0, 1)` and the candidate is
    /// divided by its own norm, so the result has norm 1 in every space
    /// (including the height-vector spaces, by construction of the division).
    fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Self;
}
