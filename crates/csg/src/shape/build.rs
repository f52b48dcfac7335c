//! Point-accumulating builders that freeze into `Loop` and `Shape`.

use super::types::{Loop, Shape};
use crate::error::GeomError;
use crate::linalg::Vector;

/// Collects vertices in connection order.
#[derive(Clone, Debug, Default)]
pub struct LoopBuilder {
    points: Vec<Vector>,
}

impl LoopBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point(self, x: f64, y: f64) -> Self {
        self.vector(Vector::new(x, y))
    }

    pub fn vector(mut self, v: Vector) -> Self {
        self.points.push(v);
        self
    }

    pub fn build(self) -> Result<Loop, GeomError> {
        Loop::new(self.points)
    }
}

/// Collects loops; order is kept but carries no meaning.
#[derive(Clone, Debug, Default)]
pub struct ShapeBuilder {
    loops: Vec<Loop>,
}

impl ShapeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_loop(mut self, l: Loop) -> Self {
        self.loops.push(l);
        self
    }

    /// Describe one loop in place:
    /// `ShapeBuilder::new().with_loop(|l| l.point(0.0, 0.0).point(1.0, 0.0).point(0.0, 1.0))?`.
    pub fn with_loop<F>(self, f: F) -> Result<Self, GeomError>
    where
        F: FnOnce(LoopBuilder) -> LoopBuilder,
    {
        let l = f(LoopBuilder::new()).build()?;
        Ok(self.push_loop(l))
    }

    pub fn build(self) -> Result<Shape, GeomError> {
        Shape::new(self.loops)
    }
}

impl Loop {
    pub fn builder() -> LoopBuilder {
        LoopBuilder::new()
    }
}

impl Shape {
    pub fn builder() -> ShapeBuilder {
        ShapeBuilder::new()
    }
}
