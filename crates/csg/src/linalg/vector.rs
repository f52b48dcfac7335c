use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use super::canonical_bits;
use crate::error::GeomError;

/// 2D point or direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ORIGIN: Vector = Vector { x: 0.0, y: 0.0 };
    pub const X: Vector = Vector { x: 1.0, y: 0.0 };
    pub const Y: Vector = Vector { x: 0.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Cartesian point of the homogeneous triple `(x, y, w)`.
    pub fn from_homogeneous(x: f64, y: f64, w: f64) -> Result<Self, GeomError> {
        if w == 0.0 {
            return Err(GeomError::ZeroDivisor);
        }
        Ok(Self::new(x / w, y / w))
    }

    #[inline]
    pub fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn scale(self, s: f64) -> Vector {
        Vector::new(self.x * s, self.y * s)
    }

    #[inline]
    pub fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }

    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product; positive when `other` lies
    /// counterclockwise of `self`.
    #[inline]
    pub fn cross(self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn distance(self, other: Vector) -> f64 {
        self.sub(other).norm()
    }

    /// Signed angle from `self` to `other`, `atan2(cross, dot)`.
    ///
    /// Continuous everywhere except at the ±π branch cut. A zero vector on
    /// either side yields `0.0`.
    #[inline]
    pub fn angle(self, other: Vector) -> f64 {
        self.cross(other).atan2(self.dot(other))
    }

    /// Unit vector in the same direction.
    pub fn normalized(self) -> Result<Vector, GeomError> {
        Self::from_homogeneous(self.x, self.y, self.norm()).map_err(|_| GeomError::ZeroLength)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    fn key(&self) -> (u64, u64) {
        (canonical_bits(self.x), canonical_bits(self.y))
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Vector {}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::sub(self, rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::neg(self)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        rhs.scale(self)
    }
}

/// Dot product.
impl Mul for Vector {
    type Output = f64;
    #[inline]
    fn mul(self, rhs: Vector) -> f64 {
        self.dot(rhs)
    }
}
