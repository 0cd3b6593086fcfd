//! Line rasterizers.

use super::Plot;
use crate::color::{Color, Rgba};
use crate::geometry::{round_half_up, GridCell, Segment};

/// Upper bound on up-front allocation for stepping loops.
const PREALLOC_LIMIT: usize = 4096;

// ============================================================================
// Step-by-step and DDA
// ============================================================================

/// Rasterize a segment by naive stepping along the dominant axis.
///
/// The position is advanced by repeated addition of a fixed increment and
/// rounded at every step, so floating-point error accumulates along the
/// segment. That drift is the point of showing this algorithm.
///
/// # Arguments
///
/// * `x1`, `y1` - Start coordinates
/// * `x2`, `y2` - End coordinates
/// * `color` - Plot color
#[must_use]
pub fn step_by_step(x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba) -> Vec<Plot> {
    incremental(Segment::from_coords(x1, y1, x2, y2), color)
}

/// Rasterize a segment with the Digital Differential Analyzer.
///
/// Numerically the same procedure as [`step_by_step`]: uniform increments
/// `dx / steps` and `dy / steps`, rounded per step.
#[must_use]
pub fn dda(x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba) -> Vec<Plot> {
    incremental(Segment::from_coords(x1, y1, x2, y2), color)
}

fn incremental(segment: Segment, color: Rgba) -> Vec<Plot> {
    if !segment.is_in_range() {
        return Vec::new();
    }

    let steps = segment.dominant_extent();
    if steps == 0.0 {
        return vec![Plot::solid(segment.start.to_cell(), color)];
    }

    let (dx, dy) = segment.delta();
    let xinc = dx / steps;
    let yinc = dy / steps;
    let count = steps.floor() as u64;

    let mut plots = Vec::with_capacity((count as usize).saturating_add(1).min(PREALLOC_LIMIT));
    let mut x = segment.start.x;
    let mut y = segment.start.y;
    for _ in 0..=count {
        plots.push(Plot::solid(GridCell::from_rounded(x, y), color));
        x += xinc;
        y += yinc;
    }
    plots
}

// ============================================================================
// Bresenham
// ============================================================================

/// Cells of an integer Bresenham line, start and end inclusive.
///
/// Lazily walks from `from` to `to`, yielding `max(|dx|, |dy|) + 1` cells.
#[derive(Debug, Clone)]
pub struct BresenhamCells {
    x: i64,
    y: i64,
    x_end: i64,
    y_end: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl BresenhamCells {
    /// Longest per-axis span a walk accepts; `2 * err` stays inside `i64`.
    pub const MAX_SPAN: i64 = i64::MAX / 4;

    /// Start a walk between two cells.
    ///
    /// A walk spanning more than [`MAX_SPAN`](Self::MAX_SPAN) on either axis
    /// yields nothing.
    #[must_use]
    pub fn new(from: GridCell, to: GridCell) -> Self {
        let span = |a: i64, b: i64| {
            b.checked_sub(a).and_then(i64::checked_abs).filter(|d| *d <= Self::MAX_SPAN)
        };
        let (dx, dy, done) = match (span(from.x, to.x), span(from.y, to.y)) {
            (Some(dx), Some(dy)) => (dx, dy, false),
            _ => (0, 0, true),
        };
        Self {
            x: from.x,
            y: from.y,
            x_end: to.x,
            y_end: to.y,
            dx,
            dy,
            sx: if from.x < to.x { 1 } else { -1 },
            sy: if from.y < to.y { 1 } else { -1 },
            err: dx - dy,
            done,
        }
    }
}

impl Iterator for BresenhamCells {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        if self.done {
            return None;
        }

        let current = GridCell::new(self.x, self.y);
        if self.x == self.x_end && self.y == self.y_end {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }
}

impl std::iter::FusedIterator for BresenhamCells {}

/// Rasterize a segment with Bresenham's integer algorithm.
///
/// Endpoints are rounded to cells first; the walk itself uses no division
/// and no floating point.
#[must_use]
pub fn bresenham_line(x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba) -> Vec<Plot> {
    let segment = Segment::from_coords(x1, y1, x2, y2);
    if !segment.is_in_range() {
        return Vec::new();
    }

    BresenhamCells::new(segment.start.to_cell(), segment.end.to_cell())
        .map(|cell| Plot::solid(cell, color))
        .collect()
}

// ============================================================================
// Wu
// ============================================================================

/// Rasterize an anti-aliased segment using Wu's algorithm.
///
/// For each column along the major axis two cells straddle the ideal line:
/// the lower gets coverage `1 - fpart(y)` and the upper `fpart(y)`, so the
/// pair always sums to one. Coverage is emitted, not blended; the surface
/// decides how to composite it. Coinciding endpoints emit a single
/// full-coverage plot.
///
/// # References
///
/// Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
#[must_use]
pub fn wu_line(x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba) -> Vec<Plot> {
    let segment = Segment::from_coords(x1, y1, x2, y2);
    if !segment.is_in_range() {
        return Vec::new();
    }
    if segment.is_degenerate() {
        return vec![Plot::solid(segment.start.to_cell(), color)];
    }

    let steep = (y2 - y1).abs() > (x2 - x1).abs();
    let (x1, y1, x2, y2) = if steep { (y1, x1, y2, x2) } else { (x1, y1, x2, y2) };
    let (x1, y1, x2, y2) = if x1 > x2 { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };

    let dx = x2 - x1;
    let dy = y2 - y1;
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

    // Columns x1, x1 + 1, .. up to x2 inclusive.
    let columns = (dx.floor() as u64).saturating_add(1);
    let mut plots = Vec::with_capacity((columns as usize).saturating_mul(2).min(PREALLOC_LIMIT));

    let mut y = y1;
    for i in 0..columns {
        let x = x1 + i as f64;
        let y_floor = y.floor();
        let alpha = y - y_floor;
        let column = round_half_up(x) as i64;
        let row = y_floor as i64;

        let (near, far) = if steep {
            (GridCell::new(row, column), GridCell::new(row + 1, column))
        } else {
            (GridCell::new(column, row), GridCell::new(column, row + 1))
        };
        plots.push(Plot::new(near, Color::with_coverage(color, 1.0 - alpha)));
        plots.push(Plot::new(far, Color::with_coverage(color, alpha)));

        y += gradient;
    }
    plots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::cells;

    fn cell(x: i64, y: i64) -> GridCell {
        GridCell::new(x, y)
    }

    #[test]
    fn test_step_by_step_horizontal() {
        let plots = step_by_step(0.0, 0.0, 4.0, 0.0, Rgba::BLACK);
        assert_eq!(
            cells(&plots),
            vec![cell(0, 0), cell(1, 0), cell(2, 0), cell(3, 0), cell(4, 0)]
        );
    }

    #[test]
    fn test_step_by_step_single_point() {
        let plots = step_by_step(2.4, -1.6, 2.4, -1.6, Rgba::BLACK);
        assert_eq!(cells(&plots), vec![cell(2, -2)]);
    }

    #[test]
    fn test_step_by_step_fractional_extent() {
        // steps = 2.5, so i runs 0, 1, 2
        let plots = step_by_step(0.0, 0.0, 2.5, 1.0, Rgba::BLACK);
        assert_eq!(plots.len(), 3);
        assert_eq!(plots[0].cell, cell(0, 0));
    }

    #[test]
    fn test_dda_matches_step_by_step() {
        let a = step_by_step(-3.0, 7.0, 11.0, -2.0, Rgba::BLACK);
        let b = dda(-3.0, 7.0, 11.0, -2.0, Rgba::BLACK);
        assert_eq!(a, b);
    }

    #[test]
    fn test_dda_vertical() {
        let plots = dda(1.0, 3.0, 1.0, -1.0, Rgba::BLACK);
        assert_eq!(
            cells(&plots),
            vec![cell(1, 3), cell(1, 2), cell(1, 1), cell(1, 0), cell(1, -1)]
        );
    }

    #[test]
    fn test_stepping_rejects_non_finite() {
        assert!(dda(0.0, 0.0, f64::NAN, 1.0, Rgba::BLACK).is_empty());
        assert!(step_by_step(0.0, f64::INFINITY, 1.0, 1.0, Rgba::BLACK).is_empty());
    }

    #[test]
    fn test_bresenham_golden() {
        let plots = bresenham_line(0.0, 0.0, 5.0, 3.0, Rgba::BLACK);
        assert_eq!(
            cells(&plots),
            vec![cell(0, 0), cell(1, 1), cell(2, 1), cell(3, 2), cell(4, 2), cell(5, 3)]
        );
    }

    #[test]
    fn test_bresenham_single_point() {
        let plots = bresenham_line(3.0, 3.0, 3.0, 3.0, Rgba::BLACK);
        assert_eq!(cells(&plots), vec![cell(3, 3)]);
    }

    #[test]
    fn test_bresenham_rounds_inputs() {
        let plots = bresenham_line(0.4, 0.5, 2.6, 0.49, Rgba::BLACK);
        assert_eq!(plots.first().map(|p| p.cell), Some(cell(0, 1)));
        assert_eq!(plots.last().map(|p| p.cell), Some(cell(3, 0)));
    }

    #[test]
    fn test_bresenham_diagonal() {
        let plots = bresenham_line(0.0, 0.0, -3.0, -3.0, Rgba::BLACK);
        assert_eq!(cells(&plots), vec![cell(0, 0), cell(-1, -1), cell(-2, -2), cell(-3, -3)]);
    }

    #[test]
    fn test_bresenham_iterator_is_fused() {
        let mut walk = BresenhamCells::new(cell(0, 0), cell(1, 0));
        assert_eq!(walk.next(), Some(cell(0, 0)));
        assert_eq!(walk.next(), Some(cell(1, 0)));
        assert_eq!(walk.next(), None);
        assert_eq!(walk.next(), None);
    }

    #[test]
    fn test_bresenham_iterator_rejects_overflowing_span() {
        let mut walk = BresenhamCells::new(cell(i64::MIN, 0), cell(i64::MAX, 0));
        assert_eq!(walk.next(), None);

        let near_limit = BresenhamCells::new(cell(0, 0), cell(BresenhamCells::MAX_SPAN + 1, 0));
        assert_eq!(near_limit.count(), 0);
    }

    #[test]
    fn test_out_of_range_coordinates_emit_nothing() {
        assert!(step_by_step(-1e308, 0.0, 1e308, 0.0, Rgba::BLACK).is_empty());
        assert!(dda(-1e308, 0.0, 1e308, 0.0, Rgba::BLACK).is_empty());
        assert!(bresenham_line(-1e19, 0.0, 1e19, 0.0, Rgba::BLACK).is_empty());
        assert!(wu_line(0.0, -1e308, 1.0, 1e308, Rgba::BLACK).is_empty());
    }

    #[test]
    fn test_accepts_coordinates_at_the_bound() {
        use crate::geometry::MAX_COORDINATE;
        let plots = bresenham_line(MAX_COORDINATE, 0.0, MAX_COORDINATE - 2.0, 0.0, Rgba::BLACK);
        assert_eq!(plots.len(), 3);
        assert_eq!(plots[0].cell, cell(2_147_483_648, 0));
    }

    #[test]
    fn test_stepping_accumulates_the_increment() {
        // yinc = 1/3 is inexact: three additions reach 1.4999999999999998 and
        // round down, while 0.5 + 3 * yinc is exactly 1.5 and would round up.
        let expected = vec![cell(0, 1), cell(1, 1), cell(2, 1), cell(3, 1)];
        assert_eq!(cells(&step_by_step(0.0, 0.5, 3.0, 1.5, Rgba::BLACK)), expected);
        assert_eq!(cells(&dda(0.0, 0.5, 3.0, 1.5, Rgba::BLACK)), expected);
    }

    #[test]
    fn test_wu_golden_endpoints() {
        let plots = wu_line(0.0, 0.0, 4.0, 2.0, Rgba::BLACK);
        assert_eq!(plots.len(), 10);

        assert_eq!(plots[0].cell, cell(0, 0));
        assert!((plots[0].coverage() - 1.0).abs() < 1e-9);
        assert_eq!(plots[1].cell, cell(0, 1));
        assert!(plots[1].coverage().abs() < 1e-9);

        assert_eq!(plots[8].cell, cell(4, 2));
        assert!((plots[8].coverage() - 1.0).abs() < 1e-9);
        assert_eq!(plots[9].cell, cell(4, 3));
        assert!(plots[9].coverage().abs() < 1e-9);
    }

    #[test]
    fn test_wu_half_coverage_midway() {
        let plots = wu_line(0.0, 0.0, 4.0, 2.0, Rgba::BLACK);
        assert_eq!(plots[2].cell, cell(1, 0));
        assert!((plots[2].coverage() - 0.5).abs() < 1e-9);
        assert_eq!(plots[3].cell, cell(1, 1));
        assert!((plots[3].coverage() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_wu_steep_is_transposed() {
        let plots = wu_line(0.0, 0.0, 0.0, 3.0, Rgba::BLACK);
        let opaque: Vec<GridCell> =
            plots.iter().filter(|p| p.coverage() > 0.5).map(|p| p.cell).collect();
        assert_eq!(opaque, vec![cell(0, 0), cell(0, 1), cell(0, 2), cell(0, 3)]);
    }

    #[test]
    fn test_wu_single_point() {
        let plots = wu_line(1.0, 1.0, 1.0, 1.0, Rgba::BLACK);
        assert_eq!(plots.len(), 1);
        assert_eq!(plots[0].cell, cell(1, 1));
        assert!(plots[0].color.is_opaque());
    }

    #[test]
    fn test_wu_keeps_base_color() {
        let plots = wu_line(0.0, 0.0, 5.0, 1.0, Rgba::SADDLE_BROWN);
        assert!(plots.iter().all(|p| p.color.base == Rgba::SADDLE_BROWN));
    }
}
