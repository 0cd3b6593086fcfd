//! Quadratic Bézier approximated by Bresenham segments.

use super::line::BresenhamCells;
use super::Plot;
use crate::color::Rgba;
use crate::geometry::{QuadraticBezier, Segment};

/// Default parameter step between curve samples (51 samples over `[0, 1]`).
pub const BEZIER_STEP: f64 = 0.02;

/// Rasterize a bulging quadratic Bézier through the chord `(x1, y1)-(x2, y2)`.
///
/// See [`QuadraticBezier::bulging`] for where the control point goes. Uses
/// [`BEZIER_STEP`].
#[must_use]
pub fn quadratic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba) -> Vec<Plot> {
    quadratic_bezier_with_step(x1, y1, x2, y2, BEZIER_STEP, color)
}

/// Same as [`quadratic_bezier`] with an explicit parameter step.
///
/// The curve is sampled at `t = i * step` (the last sample pinned to `t = 1`),
/// each sample snapped to a cell, and consecutive samples joined with
/// Bresenham lines. Where two joins meet, the shared cell is emitted once.
/// A step outside `(0, 1]` falls back to [`BEZIER_STEP`].
#[must_use]
pub fn quadratic_bezier_with_step(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    step: f64,
    color: Rgba,
) -> Vec<Plot> {
    let chord = Segment::from_coords(x1, y1, x2, y2);
    if !chord.is_in_range() {
        return Vec::new();
    }

    let step = if step.is_finite() && step > 0.0 && step <= 1.0 { step } else { BEZIER_STEP };
    let samples = ((1.0 / step).round() as u64).max(1);
    let curve = QuadraticBezier::bulging(chord);

    let mut plots: Vec<Plot> = Vec::new();
    let mut prev = curve.start.to_cell();
    for i in 1..=samples {
        let t = if i == samples { 1.0 } else { i as f64 * step };
        let next = curve.eval(t).to_cell();

        for cell in BresenhamCells::new(prev, next) {
            if plots.last().map(|p| p.cell) != Some(cell) {
                plots.push(Plot::solid(cell, color));
            }
        }
        prev = next;
    }
    plots
}
