//! Immutable 2D vector and homogeneous 3×3 matrix algebra.
//!
//! - `Vector`: point/direction value with dot, cross, signed angle.
//! - `Matrix`: row-major affine transform acting on `(x, y, 1)`.
//!
//! `Matrix` wraps an nalgebra `Matrix3`; equality and hashing go through a
//! canonical bit key so they are usable as hash-map keys.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;

/// Bit key with `-0.0` folded onto `0.0` and every NaN folded onto one NaN.
#[inline]
pub(crate) fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        v.to_bits()
    }
}
