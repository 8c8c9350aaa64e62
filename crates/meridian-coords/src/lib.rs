//! Meridian Coordinate Spaces
//!
//! Synthetic coordinate spaces for Vivaldi network-coordinate embedding.
//!
//! # Mathematical Foundation
//!
//! Every node in a Vivaldi overlay occupies a point in an abstract embedding
//! space, and the norm of the difference between two points predicts the
//! round-trip latency between the nodes. Four concrete spaces are provided:
//!
//! - [`Euclidean2D`] / [`Euclidean3D`]: plain Euclidean vectors, norm is the
//!   usual L2 length.
//! - [`HeightVector2D`] / [`HeightVector3D`]: Euclidean vectors augmented with
//!   a non-negative height term modeling access-link latency. The norm is the
//!   Euclidean length of the planar part *plus* the height.
//!
//! # Closed Operation Set
//!
//! All four spaces expose the same operation set through the [`Coordinate`]
//! trait: addition, subtraction, scalar multiplication/division, norm, and a
//! uniformly random unit vector. Arithmetic is only defined between points of
//! the same space; generic code is parameterized over a single `P: Coordinate`
//! so mixing spaces is a compile error, not a runtime check.
//!
//! Points are plain `Copy` value types. Every operation returns a new point,
//! so snapshots of a node's position can be shared freely across samples and
//! histories without aliasing.

mod euclidean;
mod height;
mod point;

pub use euclidean::{Euclidean2D, Euclidean3D};
pub use height::{HeightVector2D, HeightVector3D};
pub use point::Coordinate;
