//! Error type shared by the kernel.
//!
//! Only caller bugs and singular transforms are errors. Degenerate geometry
//! (parallel edges, zero-length directions, non-finite parameters) resolves to
//! "no intersection" or "not contained" instead.

/// Failures raised by constructors and inverse transforms.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeomError {
    #[error("matrix must contain exactly 9 entries (row-wise), got {found}")]
    EntryCount { found: usize },
    #[error("cannot invert a matrix with determinant 0")]
    Singular,
    #[error("homogeneous divisor is 0")]
    ZeroDivisor,
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,
    #[error("a loop needs at least 3 points, got {found}")]
    TooFewPoints { found: usize },
    #[error("a shape needs at least one loop")]
    EmptyShape,
    #[error("grid resolution must be positive and finite, got ({x_res}, {y_res})")]
    InvalidResolution { x_res: f64, y_res: f64 },
    #[error("grid of {width} × {height} at ({x_res}, {y_res}) has too many points")]
    GridTooLarge {
        width: f64,
        height: f64,
        x_res: f64,
        y_res: f64,
    },
}
