//! Renderer-facing sampling: dot fills over the bounding-box lattice and one
//! horizontal scanline query per lattice row.
//!
//! With the `parallel` feature both run on rayon; results keep grid order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::bbox::Grid;
use crate::error::GeomError;
use crate::line::Line;
use crate::linalg::Vector;
use crate::shape::Shape;

/// Lattice points of the shape's bounding box that the shape contains, in
/// row-major order.
pub fn fill_samples(shape: &Shape, x_res: f64, y_res: f64) -> Result<Vec<Vector>, GeomError> {
    let grid = shape.bounding_box().grid(x_res, y_res)?;
    let samples = contained_points(shape, &grid);
    tracing::debug!(
        lattice = grid.len(),
        inside = samples.len(),
        "fill samples"
    );
    Ok(samples)
}

/// Horizontal scanlines across the bounding box, one per lattice row
/// (bottom to top), as `(y, inside segments)`.
pub fn scan_rows(shape: &Shape, y_res: f64) -> Result<Vec<(f64, Vec<Line>)>, GeomError> {
    let bb = shape.bounding_box();
    // x spacing is irrelevant here; the full width keeps the grid valid for
    // zero-width boxes.
    let grid = bb.grid(bb.width().max(1.0), y_res)?;
    let ys: Vec<f64> = grid.row_ys().collect();
    Ok(scan_each(shape, ys, bb.x_min, bb.x_max))
}

#[cfg(feature = "parallel")]
fn contained_points(shape: &Shape, grid: &Grid) -> Vec<Vector> {
    let points: Vec<Vector> = grid.iter().collect();
    points.into_par_iter().filter(|&p| shape.contains(p)).collect()
}

#[cfg(not(feature = "parallel"))]
fn contained_points(shape: &Shape, grid: &Grid) -> Vec<Vector> {
    grid.iter().filter(|&p| shape.contains(p)).collect()
}

fn row_query(y: f64, x_min: f64, x_max: f64) -> Line {
    Line::from_to(Vector::new(x_min, y), Vector::new(x_max, y))
}

#[cfg(feature = "parallel")]
fn scan_each(shape: &Shape, ys: Vec<f64>, x_min: f64, x_max: f64) -> Vec<(f64, Vec<Line>)> {
    ys.into_par_iter()
        .map(|y| (y, shape.scanlines(&row_query(y, x_min, x_max))))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn scan_each(shape: &Shape, ys: Vec<f64>, x_min: f64, x_max: f64) -> Vec<(f64, Vec<Line>)> {
    ys.into_iter()
        .map(|y| (y, shape.scanlines(&row_query(y, x_min, x_max))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::Matrix;

    fn square_hole() -> Shape {
        Shape::from_coords([
            vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
            vec![(0.25, 0.25), (0.25, 0.75), (0.75, 0.75), (0.75, 0.25)],
        ])
        .unwrap()
    }

    #[test]
    fn fill_samples_avoid_hole() {
        let s = square_hole();
        let samples = fill_samples(&s, 0.1, 0.1).unwrap();
        assert!(!samples.is_empty());
        assert!(samples.iter().all(|&p| s.contains(p)));
        assert!(!samples.iter().any(|p| p.distance(Vector::new(0.5, 0.5)) < 1e-9));
        // Strictly interior lattice points of the ring: 0.1..0.9 minus 0.3..0.7.
        let interior = samples
            .iter()
            .filter(|p| p.x > 0.05 && p.x < 0.95 && p.y > 0.05 && p.y < 0.95)
            .count();
        assert_eq!(interior, 9 * 9 - 5 * 5);
    }

    #[test]
    fn fill_samples_keep_grid_order() {
        let samples = fill_samples(&square_hole(), 0.05, 0.05).unwrap();
        let sorted = samples.windows(2).all(|w| {
            w[0].y < w[1].y || (w[0].y == w[1].y && w[0].x < w[1].x)
        });
        assert!(sorted);
    }

    #[test]
    fn scan_rows_cover_every_row() {
        let s = Matrix::translate(2.0, 0.0) * square_hole();
        let rows = scan_rows(&s, 0.25).unwrap();
        assert_eq!(rows.len(), 5);
        let (y, segs) = &rows[2];
        assert_eq!(*y, 0.5);
        assert_eq!(segs.len(), 2);
        assert!(segs[0].start.distance(Vector::new(2.0, 0.5)) < 1e-9);
        assert!(segs[1].end().distance(Vector::new(3.0, 0.5)) < 1e-9);
    }

    #[test]
    fn invalid_resolution_propagates() {
        assert!(fill_samples(&square_hole(), 0.0, 0.1).is_err());
        assert!(scan_rows(&square_hole(), -1.0).is_err());
    }
}
