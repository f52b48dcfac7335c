//! Built-in demo shapes and the view transform applied to them.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use csg::{Matrix, Shape};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Counterclockwise unit square.
    Square,
    /// Unit square with an opposite-wound centred hole.
    SquareHole,
    /// Rectangle with two peaks on top.
    TwinPeaks,
}

impl Demo {
    pub fn coords(self) -> Vec<Vec<(f64, f64)>> {
        let unit = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        match self {
            Demo::Square => vec![unit],
            Demo::SquareHole => vec![
                unit,
                vec![(0.25, 0.25), (0.25, 0.75), (0.75, 0.75), (0.75, 0.25)],
            ],
            Demo::TwinPeaks => vec![vec![
                (0.0, 0.0),
                (4.0, 0.0),
                (4.0, 1.0),
                (3.0, 2.0),
                (2.0, 1.0),
                (1.0, 2.0),
                (0.0, 1.0),
            ]],
        }
    }

    pub fn shape(self) -> Result<Shape> {
        Shape::from_coords(self.coords()).with_context(|| format!("building demo shape {self:?}"))
    }
}

/// Model-to-view transform: rotate, then scale, then translate.
#[derive(Args, Clone, Copy, Debug)]
pub struct ViewArgs {
    /// Rotation in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub rotate: f64,
    /// Uniform scale factor
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,
    /// Translation along x
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub dx: f64,
    /// Translation along y
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub dy: f64,
}

impl ViewArgs {
    pub fn matrix(&self) -> Matrix {
        Matrix::translate(self.dx, self.dy)
            * Matrix::scale(self.scale)
            * Matrix::rotate_degrees(self.rotate)
    }

    /// Demo shape placed in view space.
    pub fn place(&self, demo: Demo) -> Result<Shape> {
        Ok(self.matrix() * demo.shape()?)
    }
}
