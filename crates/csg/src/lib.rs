//! 2D polygon kernel: vector/affine algebra, multi-loop shapes, winding-number
//! containment and scanline extraction.
//!
//! Layout
//! - `linalg`: `Vector` and the homogeneous 3×3 `Matrix`.
//! - `line`: directed segments and their intersection outcome.
//! - `shape`: `Loop`, `Shape`, builders, winding numbers and scanlines.
//! - `bbox`: axis-aligned extents and lattice sampling.
//! - `raster`: fill samples and per-row scanlines for renderers.
//!
//! Everything is an immutable value. Transforms return new shapes; queries
//! never mutate their inputs.

pub mod bbox;
pub mod cfg;
pub mod error;
pub mod line;
pub mod linalg;
pub mod raster;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use bbox::{BoundingBox, Grid};
pub use cfg::GeomCfg;
pub use error::GeomError;
pub use line::{Intersection, Line};
pub use linalg::{Matrix, Vector};
pub use shape::{Loop, LoopBuilder, Shape, ShapeBuilder};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bbox::{BoundingBox, Grid};
    pub use crate::cfg::GeomCfg;
    pub use crate::error::GeomError;
    pub use crate::line::{Intersection, Line};
    pub use crate::linalg::{Matrix, Vector};
    pub use crate::raster::{fill_samples, scan_rows};
    pub use crate::shape::{Loop, LoopBuilder, Shape, ShapeBuilder};
}
