//! Axis-aligned bounding boxes and lattice sampling.

use crate::error::GeomError;
use crate::linalg::Vector;

/// Axis-aligned extent `[x_min, x_max] × [y_min, y_max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl BoundingBox {
    /// Degenerate box at `p`.
    #[inline]
    pub fn from_point(p: Vector) -> Self {
        Self {
            x_min: p.x,
            y_min: p.y,
            x_max: p.x,
            y_max: p.y,
        }
    }

    /// Smallest box around `points`, or `None` if there are none.
    pub fn enclosing<I: IntoIterator<Item = Vector>>(points: I) -> Option<Self> {
        let mut it = points.into_iter();
        let first = Self::from_point(it.next()?);
        Some(it.fold(first, |b, p| b.with_point(p)))
    }

    #[inline]
    pub fn with_point(&self, p: Vector) -> Self {
        self.union(&Self::from_point(p))
    }

    /// Componentwise min/max; commutative, associative, never shrinks.
    #[inline]
    pub fn union(&self, other: &BoundingBox) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[inline]
    pub fn min(&self) -> Vector {
        Vector::new(self.x_min, self.y_min)
    }

    #[inline]
    pub fn max(&self) -> Vector {
        Vector::new(self.x_max, self.y_max)
    }

    /// Closed-interval membership.
    pub fn contains_point(&self, p: Vector) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.y_min..=self.y_max).contains(&p.y)
    }

    /// Lattice points from `(x_min, y_min)` to `(x_max, y_max)` inclusive at
    /// the given spacing, row by row (y outer, x inner).
    pub fn grid(&self, x_res: f64, y_res: f64) -> Result<Grid, GeomError> {
        let valid = |r: f64| r.is_finite() && r > 0.0;
        if !valid(x_res) || !valid(y_res) {
            return Err(GeomError::InvalidResolution { x_res, y_res });
        }
        let steps = |extent: f64, res: f64| {
            let n = (extent / res).floor();
            if n.is_finite() && n >= 0.0 && n < usize::MAX as f64 {
                (n as usize).checked_add(1)
            } else {
                None
            }
        };
        let too_large = || GeomError::GridTooLarge {
            width: self.width(),
            height: self.height(),
            x_res,
            y_res,
        };
        let cols = steps(self.width(), x_res).ok_or_else(too_large)?;
        let rows = steps(self.height(), y_res).ok_or_else(too_large)?;
        // `len` multiplies these; keep the product representable.
        cols.checked_mul(rows).ok_or_else(too_large)?;
        Ok(Grid {
            origin: self.min(),
            x_res,
            y_res,
            cols,
            rows,
        })
    }
}

/// Finite, restartable lattice over a bounding box. Iterate it as often as
/// needed; every pass yields the same points in the same order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    origin: Vector,
    x_res: f64,
    y_res: f64,
    cols: usize,
    rows: usize,
}

impl Grid {
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Point at `(col, row)`; computed from the index so there is no drift.
    #[inline]
    pub fn point(&self, col: usize, row: usize) -> Vector {
        Vector::new(
            self.origin.x + col as f64 * self.x_res,
            self.origin.y + row as f64 * self.y_res,
        )
    }

    /// y coordinate of every row, bottom to top.
    pub fn row_ys(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.rows).map(|row| self.point(0, row).y)
    }

    pub fn iter(&self) -> GridIter {
        GridIter {
            grid: *self,
            next: 0,
        }
    }
}

impl IntoIterator for Grid {
    type Item = Vector;
    type IntoIter = GridIter;
    fn into_iter(self) -> GridIter {
        self.iter()
    }
}

impl IntoIterator for &Grid {
    type Item = Vector;
    type IntoIter = GridIter;
    fn into_iter(self) -> GridIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct GridIter {
    grid: Grid,
    next: usize,
}

impl Iterator for GridIter {
    type Item = Vector;

    fn next(&mut self) -> Option<Vector> {
        if self.next >= self.grid.len() {
            return None;
        }
        let (row, col) = (self.next / self.grid.cols, self.next % self.grid.cols);
        self.next += 1;
        Some(self.grid.point(col, row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.grid.len() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for GridIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit() -> BoundingBox {
        BoundingBox::from_point(Vector::ORIGIN).with_point(Vector::new(1.0, 1.0))
    }

    #[test]
    fn from_point_is_degenerate() {
        let b = BoundingBox::from_point(Vector::new(2.0, -1.0));
        assert_eq!(b.width(), 0.0);
        assert_eq!(b.height(), 0.0);
        assert!(b.contains_point(Vector::new(2.0, -1.0)));
    }

    #[test]
    fn enclosing_points() {
        let pts = [
            Vector::new(0.0, 1.0),
            Vector::new(-2.0, 0.5),
            Vector::new(3.0, -4.0),
        ];
        let b = BoundingBox::enclosing(pts).unwrap();
        assert_eq!(b.min(), Vector::new(-2.0, -4.0));
        assert_eq!(b.max(), Vector::new(3.0, 1.0));
        assert!(BoundingBox::enclosing(std::iter::empty()).is_none());
    }

    #[test]
    fn grid_counts_and_order() {
        let g = unit().grid(0.5, 0.25).unwrap();
        assert_eq!(g.cols(), 3);
        assert_eq!(g.rows(), 5);
        let pts: Vec<Vector> = g.iter().collect();
        assert_eq!(pts.len(), 15);
        assert_eq!(pts[0], Vector::new(0.0, 0.0));
        assert_eq!(pts[1], Vector::new(0.5, 0.0));
        assert_eq!(pts[3], Vector::new(0.0, 0.25));
        assert_eq!(pts[14], Vector::new(1.0, 1.0));
    }

    #[test]
    fn grid_is_restartable() {
        let g = unit().grid(0.1, 0.1).unwrap();
        let first: Vec<Vector> = g.iter().collect();
        let second: Vec<Vector> = (&g).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(g.iter().len(), g.len());
    }

    #[test]
    fn grid_partial_step_is_dropped() {
        let g = unit().grid(0.3, 1.0).unwrap();
        // floor(1 / 0.3) + 1 = 4 columns; the last one stops short of x_max.
        assert_eq!(g.cols(), 4);
        assert_eq!(g.rows(), 2);
        assert!(g.iter().all(|p| p.x <= 1.0));
    }

    #[test]
    fn degenerate_box_yields_single_point() {
        let g = BoundingBox::from_point(Vector::new(1.0, 2.0))
            .grid(0.1, 0.1)
            .unwrap();
        assert_eq!(g.iter().collect::<Vec<_>>(), vec![Vector::new(1.0, 2.0)]);
    }

    #[test]
    fn oversized_lattice_is_rejected() {
        let huge = unit().with_point(Vector::new(1e10, 1e10));
        assert!(matches!(
            huge.grid(1.0, 1.0),
            Err(GeomError::GridTooLarge { .. })
        ));
        let unbounded = unit().with_point(Vector::new(f64::INFINITY, 0.0));
        assert!(matches!(
            unbounded.grid(1.0, 1.0),
            Err(GeomError::GridTooLarge { .. })
        ));
        // Large but representable.
        let wide = unit().with_point(Vector::new(1e6, 1.0));
        assert_eq!(wide.grid(1.0, 1.0).unwrap().len(), 1_000_001 * 2);
    }

    #[test]
    fn invalid_resolution() {
        assert!(matches!(
            unit().grid(0.0, 0.1),
            Err(GeomError::InvalidResolution { .. })
        ));
        assert!(unit().grid(0.1, f64::NAN).is_err());
        assert!(unit().grid(-1.0, 0.1).is_err());
    }

    fn bbox() -> impl Strategy<Value = BoundingBox> {
        (-10.0f64..10.0, -10.0f64..10.0, -10.0f64..10.0, -10.0f64..10.0).prop_map(
            |(x0, y0, x1, y1)| {
                BoundingBox::from_point(Vector::new(x0, y0)).with_point(Vector::new(x1, y1))
            },
        )
    }

    proptest! {
        #[test]
        fn union_is_commutative(a in bbox(), b in bbox()) {
            prop_assert_eq!(a.union(&b), b.union(&a));
        }

        #[test]
        fn union_is_associative(a in bbox(), b in bbox(), c in bbox()) {
            prop_assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
        }

        #[test]
        fn union_only_grows(a in bbox(), b in bbox()) {
            let u = a.union(&b);
            prop_assert!(u.contains_point(a.min()) && u.contains_point(a.max()));
            prop_assert!(u.contains_point(b.min()) && u.contains_point(b.max()));
        }

        #[test]
        fn grid_count_matches_floor_formula(b in bbox(), xr in 0.5f64..5.0, yr in 0.5f64..5.0) {
            let g = b.grid(xr, yr).unwrap();
            let expected = ((b.width() / xr).floor() as usize + 1)
                * ((b.height() / yr).floor() as usize + 1);
            prop_assert_eq!(g.iter().count(), expected);
        }
    }
}
