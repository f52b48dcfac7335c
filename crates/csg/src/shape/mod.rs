//! Multi-loop polygons ("shapes") with holes.
//!
//! Purpose
//! - `Loop`: implicitly closed polygon ring with at least three vertices.
//! - `Shape`: one or more loops; holes are loops wound opposite to the loop
//!   around them.
//!
//! Containment is decided by the summed winding number over all loops, so
//! nested and overlapping loops need no special casing. Scanlines re-derive
//! containment at every candidate sub-segment instead of trusting crossing
//! parity.
//!
//! Code cross-refs: `linalg::Vector::angle`, `line::Line::intersection`,
//! `bbox::BoundingBox`, `cfg::GeomCfg`.

mod build;
mod scan;
mod types;
mod winding;

pub use build::{LoopBuilder, ShapeBuilder};
pub use types::{Loop, Shape};
