//! Scanline extraction: the parts of a query line that lie inside a shape.

use super::types::Shape;
use crate::cfg::GeomCfg;
use crate::line::{Intersection, Line};
use crate::linalg::Vector;

impl Shape {
    /// Inside sub-segments of `line`, ordered along its direction.
    pub fn scanlines(&self, line: &Line) -> Vec<Line> {
        self.scanlines_with(line, &GeomCfg::default())
    }

    /// Crossings of `line` with every edge are sorted by their parameter along
    /// `line` (which is unbounded), merged when their distance along `line` is
    /// at most `cfg.crossing_dedup_eps`, and each gap between neighbours is kept iff
    /// the shape contains its midpoint. Adjacent kept pieces are not merged.
    pub fn scanlines_with(&self, line: &Line, cfg: &GeomCfg) -> Vec<Line> {
        let mut crossings: Vec<(f64, Vector)> = self
            .edges()
            .filter_map(|edge| match line.intersection(&edge) {
                Intersection::Point { point, t } => Some((t, point)),
                Intersection::None | Intersection::Overlap { .. } => None,
            })
            .collect();
        crossings.sort_by(|a, b| a.0.total_cmp(&b.0));
        // A crossing through a shared vertex is reported once per edge.
        let length = line.length();
        crossings.dedup_by(|later, kept| {
            (later.0 - kept.0).abs() * length <= cfg.crossing_dedup_eps
        });
        tracing::trace!(crossings = crossings.len(), "scanline crossings");

        crossings
            .windows(2)
            .map(|w| Line::from_to(w[0].1, w[1].1))
            .filter(|seg| self.contains_with(seg.midpoint(), cfg))
            .collect()
    }
}
