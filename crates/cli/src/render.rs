//! Text output: ASCII dot fills and JSON reports.

use std::collections::HashSet;

use anyhow::Result;
use csg::raster::{fill_samples, scan_rows};
use csg::{Line, Shape, Vector};
use serde::Serialize;

/// One character per lattice point, top row first: `#` inside, `.` outside.
pub fn ascii_fill(shape: &Shape, res: f64) -> Result<String> {
    let grid = shape.bounding_box().grid(res, res)?;
    let inside: HashSet<Vector> = fill_samples(shape, res, res)?.into_iter().collect();
    let mut out = String::with_capacity(grid.len() + grid.rows());
    for row in (0..grid.rows()).rev() {
        for col in 0..grid.cols() {
            out.push(if inside.contains(&grid.point(col, row)) {
                '#'
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    Ok(out)
}

#[derive(Debug, Serialize)]
pub struct Segment {
    pub start: [f64; 2],
    pub end: [f64; 2],
}

impl From<&Line> for Segment {
    fn from(l: &Line) -> Self {
        let end = l.end();
        Segment {
            start: [l.start.x, l.start.y],
            end: [end.x, end.y],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub y: f64,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Serialize)]
pub struct QueryReport {
    pub point: [f64; 2],
    pub winding_number: f64,
    pub turns: f64,
    pub contains: bool,
}

/// Inside segments of the horizontal line at `y` across the shape's extent.
pub fn scan(shape: &Shape, y: f64) -> ScanReport {
    let bb = shape.bounding_box();
    let query = Line::from_to(Vector::new(bb.x_min, y), Vector::new(bb.x_max, y));
    ScanReport {
        y,
        segments: shape.scanlines(&query).iter().map(Segment::from).collect(),
    }
}

pub fn rows(shape: &Shape, res: f64) -> Result<Vec<ScanReport>> {
    Ok(scan_rows(shape, res)?
        .into_iter()
        .map(|(y, segs)| ScanReport {
            y,
            segments: segs.iter().map(Segment::from).collect(),
        })
        .collect())
}

pub fn query(shape: &Shape, p: Vector) -> QueryReport {
    let w = shape.winding_number(p);
    QueryReport {
        point: [p.x, p.y],
        winding_number: w,
        turns: w / std::f64::consts::TAU,
        contains: shape.contains(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::Demo;

    #[test]
    fn ascii_square_hole_has_empty_centre() {
        let s = Demo::SquareHole.shape().unwrap();
        let art = ascii_fill(&s, 0.125).unwrap();
        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines.iter().all(|l| l.len() == 9));
        assert_eq!(&lines[4][4..5], ".");
        assert_eq!(&lines[1][1..2], "#");
    }

    #[test]
    fn scan_report_serializes() {
        let s = Demo::TwinPeaks.shape().unwrap();
        let report = scan(&s, 1.5);
        assert_eq!(report.segments.len(), 2);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["segments"][0]["start"][0], 0.5);
        assert_eq!(json["segments"][1]["end"][0], 3.5);
    }

    #[test]
    fn query_reports_turns() {
        let s = Demo::Square.shape().unwrap();
        let q = query(&s, Vector::new(0.5, 0.5));
        assert!(q.contains);
        assert!((q.turns - 1.0).abs() < 1e-9);
        assert!(!query(&s, Vector::new(2.0, 2.0)).contains);
    }

    #[test]
    fn rows_follow_lattice() {
        let s = Demo::SquareHole.shape().unwrap();
        let r = rows(&s, 0.5).unwrap();
        assert_eq!(r.len(), 3);
        assert_eq!(r[1].y, 0.5);
        assert_eq!(r[1].segments.len(), 2);
    }
}
