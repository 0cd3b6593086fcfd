//! Coordinate grid drawn underneath the plots.

use super::target::RenderTarget;
use crate::color::Rgba;
use crate::geometry::GridCell;

/// Colors and stroke sizes for the background grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridStyle {
    /// Canvas fill.
    pub background: Rgba,
    /// Cell boundary lines.
    pub lines: Rgba,
    /// X and Y axes through the origin.
    pub axes: Rgba,
    /// Axis thickness in pixels.
    pub axis_width: u32,
    /// Length of the unit ticks along each axis.
    pub tick_length: u32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            background: Rgba::WHITE,
            lines: Rgba::GRID_GRAY,
            axes: Rgba::BLACK,
            axis_width: 2,
            tick_length: 6,
        }
    }
}

/// Clear the target and draw cell boundaries, axes and unit ticks.
///
/// Boundary lines run halfway between cell centers, so every cell painted by
/// a renderer sits inside one square of the grid.
pub fn draw_grid(target: &mut RenderTarget, style: &GridStyle) {
    let size = i64::from(target.cell_size());
    let half = size / 2;
    let (ox, oy) = target.origin();
    let width = i64::from(target.width());
    let height = i64::from(target.height());

    target.framebuffer_mut().clear(style.background);

    let mut x = (ox - half).rem_euclid(size);
    while x < width {
        fill(target, x, 0, 1, height, style.lines);
        x += size;
    }
    let mut y = (oy - half).rem_euclid(size);
    while y < height {
        fill(target, 0, y, width, 1, style.lines);
        y += size;
    }

    let axis = i64::from(style.axis_width.max(1));
    fill(target, 0, oy - axis / 2, width, axis, style.axes);
    fill(target, ox - axis / 2, 0, axis, height, style.axes);

    let tick = i64::from(style.tick_length);
    if tick == 0 {
        return;
    }
    let (columns, rows) = target.visible_cells();
    for column in columns.filter(|&c| c != 0) {
        let (cx, _) = target.grid_to_device(GridCell::new(column, 0));
        fill(target, cx, oy - tick / 2, 1, tick, style.axes);
    }
    for row in rows.filter(|&r| r != 0) {
        let (_, cy) = target.grid_to_device(GridCell::new(0, row));
        fill(target, ox - tick / 2, cy, tick, 1, style.axes);
    }
}

fn fill(target: &mut RenderTarget, left: i64, top: i64, width: i64, height: i64, color: Rgba) {
    if let Some(rect) = target.clip(left, top, width, height) {
        target.framebuffer_mut().fill_rect(rect.x, rect.y, rect.width, rect.height, color);
    }
}
