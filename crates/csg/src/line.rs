//! Directed segments and segment intersection.

use crate::linalg::{Matrix, Vector};

/// Directed segment from `start` to `start + direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    pub start: Vector,
    pub direction: Vector,
}

/// Outcome of intersecting two lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    /// Parallel, disjoint, or numerically degenerate.
    None,
    /// Single crossing; `t` is the parameter along the first line.
    Point { point: Vector, t: f64 },
    /// Collinear overlap. Reserved: `Line::intersection` does not produce it.
    Overlap { start: Vector, end: Vector },
}

impl Line {
    #[inline]
    pub fn new(start: Vector, direction: Vector) -> Self {
        Self { start, direction }
    }

    #[inline]
    pub fn from_to(start: Vector, end: Vector) -> Self {
        Self::new(start, end - start)
    }

    #[inline]
    pub fn end(&self) -> Vector {
        self.start + self.direction
    }

    #[inline]
    pub fn point_at(&self, t: f64) -> Vector {
        self.start + self.direction * t
    }

    #[inline]
    pub fn midpoint(&self) -> Vector {
        self.point_at(0.5)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.direction.norm()
    }

    /// Map both endpoints through `m`.
    pub fn transform(&self, m: &Matrix) -> Line {
        Line::from_to(m.apply(self.start), m.apply(self.end()))
    }

    /// Intersect `self` with the segment `other`.
    ///
    /// `self` is treated as an infinite line (its parameter `t` is not range
    /// checked); `other` is bounded: the crossing must project onto
    /// `other` with parameter `u ∈ [0, 1]`. Parallel lines, collinear ones
    /// included, and non-finite parameters give `Intersection::None`.
    pub fn intersection(&self, other: &Line) -> Intersection {
        let r = self.direction;
        let s = other.direction;
        let denom = r.cross(s);
        if denom == 0.0 {
            return Intersection::None;
        }
        let qp = other.start - self.start;
        let t = qp.cross(s) / denom;
        if !t.is_finite() {
            return Intersection::None;
        }
        let point = self.point_at(t);
        let u = (point - other.start).dot(s) / s.dot(s);
        if (0.0..=1.0).contains(&u) {
            Intersection::Point { point, t }
        } else {
            Intersection::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Vector = Vector::X;
    const Y: Vector = Vector::Y;
    const O: Vector = Vector::ORIGIN;

    #[test]
    fn parallel_lines_do_not_intersect() {
        let a = Line::from_to(O, X);
        let b = Line::from_to(Y, X + Y);
        assert_eq!(a.intersection(&b), Intersection::None);
    }

    #[test]
    fn collinear_lines_do_not_intersect() {
        let a = Line::from_to(O, X);
        let b = Line::from_to(X * 0.5, X * 2.0);
        assert_eq!(a.intersection(&b), Intersection::None);
    }

    #[test]
    fn crossing_outside_second_segment() {
        let a = Line::from_to(O, X);
        let b = Line::from_to(Y, 2.0 * Y);
        assert_eq!(a.intersection(&b), Intersection::None);
    }

    #[test]
    fn crossing_at_origin() {
        let a = Line::from_to(-X, X);
        let b = Line::from_to(-Y, Y);
        match a.intersection(&b) {
            Intersection::Point { point, t } => {
                assert!(point.distance(O) < 0.01);
                assert!((t - 0.5).abs() < 1e-12);
            }
            other => panic!("expected a point, got {other:?}"),
        }
    }

    #[test]
    fn crossing_off_origin() {
        let a = Line::from_to(-X + 0.2 * Y, X + 0.2 * Y);
        let b = Line::from_to(-Y + 0.2 * X, Y + 0.2 * X);
        match a.intersection(&b) {
            Intersection::Point { point, .. } => {
                assert!(point.distance(Vector::new(0.2, 0.2)) < 0.01)
            }
            other => panic!("expected a point, got {other:?}"),
        }
    }

    #[test]
    fn first_line_is_unbounded_second_is_not() {
        // The crossing lies at t = 3 along `a`, inside `b`.
        let a = Line::from_to(O, X);
        let b = Line::from_to(Vector::new(3.0, -1.0), Vector::new(3.0, 1.0));
        match a.intersection(&b) {
            Intersection::Point { point, t } => {
                assert!((t - 3.0).abs() < 1e-12);
                assert!(point.distance(Vector::new(3.0, 0.0)) < 1e-12);
            }
            other => panic!("expected a point, got {other:?}"),
        }
        // Swapped: the crossing is outside `a` as a segment.
        assert_eq!(b.intersection(&a), Intersection::None);
    }

    #[test]
    fn segment_endpoints_are_inclusive() {
        let a = Line::from_to(-X, X);
        let b = Line::from_to(O, Y);
        assert!(matches!(a.intersection(&b), Intersection::Point { .. }));
    }

    #[test]
    fn zero_length_lines_are_degenerate() {
        let a = Line::new(O, O);
        let b = Line::from_to(-Y, Y);
        assert_eq!(a.intersection(&b), Intersection::None);
        assert_eq!(b.intersection(&a), Intersection::None);
    }

    #[test]
    fn derived_end_and_transform() {
        let l = Line::from_to(Vector::new(1.0, 1.0), Vector::new(3.0, 2.0));
        assert_eq!(l.end(), Vector::new(3.0, 2.0));
        assert_eq!(l.midpoint(), Vector::new(2.0, 1.5));
        let moved = l.transform(&Matrix::translate(1.0, -1.0));
        assert_eq!(moved.start, Vector::new(2.0, 0.0));
        assert_eq!(moved.end(), Vector::new(4.0, 1.0));
    }
}
