use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Mul;

use nalgebra::{Matrix3, Vector3};

use super::{canonical_bits, Vector};
use crate::error::GeomError;

/// Homogeneous 3×3 transform, row-major, applied to column vectors `(x, y, 1)`.
///
/// Composition is associative but not commutative: `(a * b) * v == a * (b * v)`.
#[derive(Clone, Copy, Debug)]
pub struct Matrix(Matrix3<f64>);

impl Matrix {
    /// Build from 9 row-major entries.
    #[inline]
    pub fn new(entries: [f64; 9]) -> Self {
        Self(Matrix3::from_row_slice(&entries))
    }

    /// Build from a row-major slice; the slice must hold exactly 9 entries.
    pub fn from_row_slice(entries: &[f64]) -> Result<Self, GeomError> {
        let entries: [f64; 9] = entries
            .try_into()
            .map_err(|_| GeomError::EntryCount {
                found: entries.len(),
            })?;
        Ok(Self::new(entries))
    }

    #[inline]
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    /// Negates x.
    pub fn mirror_x() -> Self {
        Self::new([-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
    }

    /// Negates y.
    pub fn mirror_y() -> Self {
        Self::new([1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0])
    }

    /// Uniform scale about the origin.
    pub fn scale(s: f64) -> Self {
        Self::new([s, 0.0, 0.0, 0.0, s, 0.0, 0.0, 0.0, 1.0])
    }

    pub fn translate(x: f64, y: f64) -> Self {
        Self::new([1.0, 0.0, x, 0.0, 1.0, y, 0.0, 0.0, 1.0])
    }

    /// Rotation by `angle` radians, clockwise in a y-up frame
    /// (counterclockwise once the y axis is flipped for screen space).
    pub fn rotate(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0])
    }

    pub fn rotate_degrees(degrees: f64) -> Self {
        Self::rotate(degrees.to_radians())
    }

    #[inline]
    pub fn entry(&self, row: usize, col: usize) -> f64 {
        self.0[(row, col)]
    }

    /// Entries in row-major order.
    pub fn entries(&self) -> [f64; 9] {
        let m = &self.0;
        [
            m[(0, 0)], m[(0, 1)], m[(0, 2)],
            m[(1, 0)], m[(1, 1)], m[(1, 2)],
            m[(2, 0)], m[(2, 1)], m[(2, 2)],
        ]
    }

    /// `self * other`: applies `other` first, then `self`.
    #[inline]
    pub fn compose(&self, other: &Matrix) -> Matrix {
        Matrix(self.0 * other.0)
    }

    /// Apply to `v` and project by the homogeneous coordinate.
    ///
    /// Affine matrices always keep the divisor at 1. A projective matrix that
    /// sends `v` to infinity yields non-finite components; use `try_apply` to
    /// surface that as an error instead.
    #[inline]
    pub fn apply(&self, v: Vector) -> Vector {
        let h = self.homogeneous(v);
        Vector::new(h.x / h.z, h.y / h.z)
    }

    pub fn try_apply(&self, v: Vector) -> Result<Vector, GeomError> {
        let h = self.homogeneous(v);
        Vector::from_homogeneous(h.x, h.y, h.z)
    }

    #[inline]
    fn homogeneous(&self, v: Vector) -> Vector3<f64> {
        self.0 * Vector3::new(v.x, v.y, 1.0)
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        let [a, b, c, d, e, f, g, h, i] = self.entries();
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Adjugate divided by the determinant. Fails iff the determinant is exactly 0.
    pub fn inverse(&self) -> Result<Matrix, GeomError> {
        let det = self.determinant();
        if det == 0.0 {
            tracing::debug!(matrix = %self, "singular matrix has no inverse");
            return Err(GeomError::Singular);
        }
        let inv = 1.0 / det;
        let [a, b, c, d, e, f, g, h, i] = self.entries();
        Ok(Matrix::new([
            (e * i - f * h) * inv,
            -(b * i - c * h) * inv,
            (b * f - c * e) * inv,
            -(d * i - f * g) * inv,
            (a * i - c * g) * inv,
            -(a * f - c * d) * inv,
            (d * h - e * g) * inv,
            -(a * h - b * g) * inv,
            (a * e - b * d) * inv,
        ]))
    }

    /// Largest absolute entry-wise difference.
    pub fn max_abs_diff(&self, other: &Matrix) -> f64 {
        (self.0 - other.0).amax()
    }

    fn key(&self) -> [u64; 9] {
        self.entries().map(canonical_bits)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Matrix {}

impl Hash for Matrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Mul for Matrix {
    type Output = Matrix;
    #[inline]
    fn mul(self, rhs: Matrix) -> Matrix {
        self.compose(&rhs)
    }
}

impl Mul<Vector> for Matrix {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        self.apply(rhs)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn cell(v: f64) -> String {
            let s = if v == 0.0 { String::new() } else { v.to_string() };
            format!("{s:>5}")
        }
        let e = self.entries().map(cell);
        writeln!(f, "/ {} {} {} \\", e[0], e[1], e[2])?;
        writeln!(f, "| {} {} {} |", e[3], e[4], e[5])?;
        write!(f, "\\ {} {} {} /", e[6], e[7], e[8])
    }
}
