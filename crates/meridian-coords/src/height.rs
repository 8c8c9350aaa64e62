//! Height-augmented embedding spaces.
//!
//! The height-vector model splits a node's latency into a shared geometric
//! part and a private access-link part: a point is a Euclidean vector plus a
//! non-negative height, and the norm is the Euclidean length plus the height.
//!
//! Subtraction *adds* the height terms while the planar components subtract
//! normally: a packet crossing between two nodes pays both access links no
//! matter which direction it travels, so the difference vector carries the
//! sum of both heights. A consequence is that subtraction does not invert
//! addition on the height component: `(a + b) - b` recovers the planar part
//! of `a` but carries height `a.height + 2 * b.height`. Callers must not
//! assume Euclidean intuitions hold for these spaces.

use std::ops::{Add, Div, Mul, Sub};

use rand::Rng;

use crate::Coordinate;

/// A point in the 2D height-vector embedding space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeightVector2D {
    /// First planar component
    pub x: f64,
    /// Second planar component
    pub y: f64,
    /// Access-link term, expected non-negative
    pub height: f64,
}

impl HeightVector2D {
    /// Create a new point.
    pub const fn new(x: f64, y: f64, height: f64) -> Self {
        Self { x, y, height }
    }
}

impl Coordinate for HeightVector2D {
    const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        height: 0.0,
    };

    fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt() + self.height
    }

    fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let candidate = Self::new(rng.gen(), rng.gen(), rng.gen());
        candidate / candidate.norm()
    }
}

impl Add for HeightVector2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            height: self.height + other.height,
        }
    }
}

impl Sub for HeightVector2D {
    type Output = Self;

    // Heights accumulate: both endpoints pay their access link.
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            height: self.height + other.height,
        }
    }
}

impl Mul<f64> for HeightVector2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            height: self.height * scalar,
        }
    }
}

impl Div<f64> for HeightVector2D {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            height: self.height / scalar,
        }
    }
}

/// A point in the 3D height-vector embedding space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeightVector3D {
    /// First planar component
    pub x: f64,
    /// Second planar component
    pub y: f64,
    /// Third planar component
    pub z: f64,
    /// Access-link term, expected non-negative
    pub height: f64,
}

impl HeightVector3D {
    /// Create a new point.
    pub const fn new(x: f64, y: f64, z: f64, height: f64) -> Self {
        Self { x, y, z, height }
    }
}

impl Coordinate for HeightVector3D {
    const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        height: 0.0,
    };

    fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt() + self.height
    }

    fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let candidate = Self::new(rng.gen(), rng.gen(), rng.gen(), rng.gen());
        candidate / candidate.norm()
    }
}

impl Add for HeightVector3D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            height: self.height + other.height,
        }
    }
}

impl Sub for HeightVector3D {
    type Output = Self;

    // Heights accumulate: both endpoints pay their access link.
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
            height: self.height + other.height,
        }
    }
}

impl Mul<f64> for HeightVector3D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            height: self.height * scalar,
        }
    }
}

impl Div<f64> for HeightVector3D {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
            height: self.height / scalar,
        }
    }
}
