//! Winding numbers and containment.

use super::types::{Loop, Shape};
use crate::cfg::{GeomCfg, CONTAINS_EPS};
use crate::linalg::Vector;

impl Loop {
    /// Sum of signed angles subtended at `p` by each edge, in radians.
    ///
    /// `±2π` per full turn around `p`; `0` outside. Points on the boundary give
    /// intermediate values.
    pub fn winding_number(&self, p: Vector) -> f64 {
        self.vertex_pairs().map(|(a, b)| (a - p).angle(b - p)).sum()
    }

    pub fn contains(&self, p: Vector) -> bool {
        self.winding_number(p).abs() > CONTAINS_EPS
    }
}

impl Shape {
    /// Sum of the per-loop winding numbers. A hole wound against its outer
    /// loop cancels it.
    pub fn winding_number(&self, p: Vector) -> f64 {
        self.loops().iter().map(|l| l.winding_number(p)).sum()
    }

    pub fn contains(&self, p: Vector) -> bool {
        self.contains_with(p, &GeomCfg::default())
    }

    pub fn contains_with(&self, p: Vector, cfg: &GeomCfg) -> bool {
        self.winding_number(p).abs() > cfg.contains_eps
    }
}
