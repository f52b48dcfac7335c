//! `Loop` and `Shape` values and their transforms.

use std::fmt;
use std::ops::Mul;

use crate::bbox::BoundingBox;
use crate::error::GeomError;
use crate::line::Line;
use crate::linalg::{Matrix, Vector};

/// Ordered, implicitly closed ring of vertices.
///
/// Invariant: at least 3 points. Orientation is not normalized; a
/// counterclockwise ring has winding number `2π` at interior points.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Loop {
    points: Vec<Vector>,
}

/// Region bounded by one or more loops.
///
/// Invariant: at least one loop. Loop order carries no meaning.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    loops: Vec<Loop>,
}

impl Loop {
    pub const MIN_POINTS: usize = 3;

    pub fn new(points: Vec<Vector>) -> Result<Self, GeomError> {
        if points.len() < Self::MIN_POINTS {
            return Err(GeomError::TooFewPoints {
                found: points.len(),
            });
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn points(&self) -> &[Vector] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive vertex pairs, including the closing pair `(last, first)`.
    pub(crate) fn vertex_pairs(&self) -> impl Iterator<Item = (Vector, Vector)> + '_ {
        self.points
            .iter()
            .copied()
            .zip(self.points.iter().copied().cycle().skip(1))
    }

    /// Edges as directed segments, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        self.vertex_pairs().map(|(a, b)| Line::from_to(a, b))
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let first = BoundingBox::from_point(self.points[0]);
        self.points[1..]
            .iter()
            .fold(first, |b, &p| b.with_point(p))
    }

    /// New loop with every vertex mapped through `m`.
    pub fn transform(&self, m: &Matrix) -> Loop {
        Loop {
            points: self.points.iter().map(|&p| m.apply(p)).collect(),
        }
    }

    /// Same ring traversed in the opposite direction.
    pub fn reversed(&self) -> Loop {
        let mut points = self.points.clone();
        points.reverse();
        Loop { points }
    }
}

impl Shape {
    pub fn new(loops: Vec<Loop>) -> Result<Self, GeomError> {
        if loops.is_empty() {
            return Err(GeomError::EmptyShape);
        }
        Ok(Self { loops })
    }

    /// Build from raw coordinates, one inner sequence per loop, each listed in
    /// connection order.
    pub fn from_coords<I, L>(loops: I) -> Result<Self, GeomError>
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = (f64, f64)>,
    {
        let loops = loops
            .into_iter()
            .map(|l| Loop::new(l.into_iter().map(Vector::from).collect()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(loops)
    }

    #[inline]
    pub fn loops(&self) -> &[Loop] {
        &self.loops
    }

    /// Every edge of every loop.
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        self.loops.iter().flat_map(|l| l.edges())
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let first = self.loops[0].bounding_box();
        self.loops[1..]
            .iter()
            .fold(first, |b, l| b.union(&l.bounding_box()))
    }

    pub fn transform(&self, m: &Matrix) -> Shape {
        Shape {
            loops: self.loops.iter().map(|l| l.transform(m)).collect(),
        }
    }
}

impl fmt::Display for Loop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, l) in self.loops.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{l}")?;
        }
        write!(f, "]")
    }
}

impl Mul<&Loop> for Matrix {
    type Output = Loop;
    #[inline]
    fn mul(self, rhs: &Loop) -> Loop {
        rhs.transform(&self)
    }
}

impl Mul<Loop> for Matrix {
    type Output = Loop;
    #[inline]
    fn mul(self, rhs: Loop) -> Loop {
        rhs.transform(&self)
    }
}

impl Mul<&Shape> for Matrix {
    type Output = Shape;
    #[inline]
    fn mul(self, rhs: &Shape) -> Shape {
        rhs.transform(&self)
    }
}

impl Mul<Shape> for Matrix {
    type Output = Shape;
    #[inline]
    fn mul(self, rhs: Shape) -> Shape {
        rhs.transform(&self)
    }
}
