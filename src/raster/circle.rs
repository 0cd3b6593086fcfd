//! Midpoint (Bresenham) circle.

use super::Plot;
use crate::color::Rgba;
use crate::geometry::GridCell;

/// The eight reflections of an octant offset.
#[inline]
fn octants(x: i64, y: i64) -> [(i64, i64); 8] {
    [(x, y), (-x, y), (x, -y), (-x, -y), (y, x), (-y, x), (y, -x), (-y, -x)]
}

/// Rasterize a circle outline with the midpoint algorithm.
///
/// The four axis cells come first, then each step of the first octant is
/// reflected into all eight. Cells on octant boundaries are emitted more than
/// once; the set of cells is what matters. A zero radius emits the center only.
/// A circle reaching past the `i64` grid emits nothing.
///
/// # Arguments
///
/// * `x0`, `y0` - Center cell
/// * `radius` - Radius in cells
/// * `color` - Plot color
#[must_use]
pub fn bresenham_circle(x0: i64, y0: i64, radius: u32, color: Rgba) -> Vec<Plot> {
    let center = GridCell::new(x0, y0);
    if radius == 0 {
        return vec![Plot::solid(center, color)];
    }

    let r = i64::from(radius);
    let fits = |c: i64| c.checked_sub(r).and(c.checked_add(r)).is_some();
    if !fits(x0) || !fits(y0) {
        return Vec::new();
    }

    let at = |dx: i64, dy: i64| Plot::solid(GridCell::new(x0 + dx, y0 + dy), color);

    let mut plots = vec![at(0, r), at(0, -r), at(r, 0), at(-r, 0)];

    let mut x = 0;
    let mut y = r;
    let mut d = 3 - 2 * r;
    while x <= y {
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
        plots.extend(octants(x, y).into_iter().map(|(dx, dy)| at(dx, dy)));
    }
    plots
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_zero_radius_is_single_point() {
        let plots = bresenham_circle(3, -4, 0, Rgba::BLACK);
        assert_eq!(plots.len(), 1);
        assert_eq!(plots[0].cell, GridCell::new(3, -4));
    }

    #[test]
    fn test_axis_points_first() {
        let plots = bresenham_circle(1, 1, 4, Rgba::BLACK);
        let first: Vec<GridCell> = plots.iter().take(4).map(|p| p.cell).collect();
        assert_eq!(
            first,
            vec![GridCell::new(1, 5), GridCell::new(1, -3), GridCell::new(5, 1), GridCell::new(-3, 1)]
        );
    }

    #[test]
    fn test_radius_one_is_a_plus() {
        let set: BTreeSet<GridCell> =
            bresenham_circle(0, 0, 1, Rgba::BLACK).into_iter().map(|p| p.cell).collect();
        let expected: BTreeSet<GridCell> =
            [(0, 1), (0, -1), (1, 0), (-1, 0)].into_iter().map(GridCell::from).collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn test_radius_five_set() {
        let set: BTreeSet<(i64, i64)> = bresenham_circle(0, 0, 5, Rgba::BLACK)
            .into_iter()
            .map(|p| (p.cell.x, p.cell.y))
            .collect();

        let mut expected = BTreeSet::new();
        for (x, y) in [(0, 5), (1, 5), (2, 4), (3, 3)] {
            expected.extend(octants(x, y));
        }
        assert_eq!(set.len(), 24);
        assert_eq!(set, expected);
    }

    #[test]
    fn test_circle_past_grid_edge_is_empty() {
        assert!(bresenham_circle(i64::MAX, 0, 3, Rgba::BLACK).is_empty());
        assert!(bresenham_circle(0, i64::MIN + 2, 3, Rgba::BLACK).is_empty());

        let edge = bresenham_circle(i64::MAX - 3, i64::MIN + 3, 3, Rgba::BLACK);
        assert!(edge.iter().any(|p| p.cell == GridCell::new(i64::MAX, i64::MIN + 3)));
    }

    #[test]
    fn test_center_offset() {
        let plots = bresenham_circle(-10, 20, 3, Rgba::BLACK);
        assert!(plots.iter().all(|p| {
            let dx = (p.cell.x + 10).abs();
            let dy = (p.cell.y - 20).abs();
            dx <= 3 && dy <= 3 && dx.max(dy) >= 2
        }));
    }
}
