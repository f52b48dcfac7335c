//! Tolerances.
//!
//! Policy
//! - Defaults are fixed constants; `GeomCfg` exists so callers with unusual
//!   scales can override them per query without touching call sites broadly.

/// Minimum |winding number| for a point to count as inside.
pub const CONTAINS_EPS: f64 = 1e-3;
/// Two scanline crossings closer than this (distance along the query line)
/// are one crossing.
pub const CROSSING_DEDUP_EPS: f64 = 1e-9;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub contains_eps: f64,
    pub crossing_dedup_eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            contains_eps: CONTAINS_EPS,
            crossing_dedup_eps: CROSSING_DEDUP_EPS,
        }
    }
}
