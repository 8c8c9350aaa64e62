//! Plain Euclidean embedding spaces.

use std::ops::{Add, Div, Mul, Sub};

use rand::Rng;

use crate::Coordinate;

/// A point in the 2D Euclidean embedding space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Euclidean2D {
    /// First component
    pub x: f64,
    /// Second component
    pub y: f64,
}

impl Euclidean2D {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Coordinate for Euclidean2D {
    const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let candidate = Self::new(rng.gen(), rng.gen());
        candidate / candidate.norm()
    }
}

impl Add for Euclidean2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Euclidean2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Euclidean2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Div<f64> for Euclidean2D {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

/// A point in the 3D Euclidean embedding space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Euclidean3D {
    /// First component
    pub x: f64,
    /// Second component
    pub y: f64,
    /// Third component
    pub z: f64,
}

impl Euclidean3D {
    /// Create a new point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Coordinate for Euclidean3D {
    const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let candidate = Self::new(rng.gen(), rng.gen(), rng.gen());
        candidate / candidate.norm()
    }
}

impl Add for Euclidean3D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Euclidean3D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f64> for Euclidean3D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Div<f64> for Euclidean3D {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}
