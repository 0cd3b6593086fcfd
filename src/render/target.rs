//! The surface plots are drawn onto.

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::GridCell;
use std::ops::RangeInclusive;

/// Default cell edge in device pixels.
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// A framebuffer plus the mapping from grid cells to device pixels.
///
/// The grid origin sits at the framebuffer center and grid Y grows upward,
/// so `grid_to_device` inverts Y.
#[derive(Debug, Clone)]
pub struct RenderTarget {
    framebuffer: Framebuffer,
    cell_size: u32,
    origin: (i64, i64),
}

/// Device-space rectangle, already clipped to the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl RenderTarget {
    /// Create a target of the given pixel size.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension or the cell size is zero.
    pub fn new(width: u32, height: u32, cell_size: u32) -> Result<Self> {
        if cell_size == 0 {
            return Err(Error::invalid_input("cell_size", cell_size));
        }
        let framebuffer = Framebuffer::new(width, height)?;
        let origin = (i64::from(width / 2), i64::from(height / 2));
        Ok(Self { framebuffer, cell_size, origin })
    }

    /// Pixel width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.framebuffer.width()
    }

    /// Pixel height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.framebuffer.height()
    }

    /// Cell edge in pixels.
    #[must_use]
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Device position of the grid origin.
    #[must_use]
    pub const fn origin(&self) -> (i64, i64) {
        self.origin
    }

    /// Underlying pixels.
    #[must_use]
    pub const fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Underlying pixels, mutably.
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    /// Give up the target, keeping the pixels.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.framebuffer
    }

    /// Device position of a cell's center.
    #[must_use]
    pub fn grid_to_device(&self, cell: GridCell) -> (i64, i64) {
        let size = i64::from(self.cell_size);
        (
            self.origin.0.saturating_add(cell.x.saturating_mul(size)),
            self.origin.1.saturating_sub(cell.y.saturating_mul(size)),
        )
    }

    /// Square painted for a cell, clipped to the framebuffer.
    ///
    /// The square leaves a one-pixel gutter on each side when cells are at
    /// least three pixels wide. Returns `None` for cells entirely out of view.
    #[must_use]
    pub fn cell_rect(&self, cell: GridCell) -> Option<DeviceRect> {
        let size = i64::from(self.cell_size);
        let (gutter, side) = if size >= 3 { (1, size - 2) } else { (0, size) };
        let (cx, cy) = self.grid_to_device(cell);

        let left = cx.saturating_sub(size / 2).saturating_add(gutter);
        let top = cy.saturating_sub(size / 2).saturating_add(gutter);
        self.clip(left, top, side, side)
    }

    /// Clip a device rectangle to the framebuffer.
    #[must_use]
    pub fn clip(&self, left: i64, top: i64, width: i64, height: i64) -> Option<DeviceRect> {
        let x1 = left.max(0);
        let y1 = top.max(0);
        let x2 = left.saturating_add(width).min(i64::from(self.width()));
        let y2 = top.saturating_add(height).min(i64::from(self.height()));
        if x1 >= x2 || y1 >= y2 {
            return None;
        }
        Some(DeviceRect {
            x: x1 as u32,
            y: y1 as u32,
            width: (x2 - x1) as u32,
            height: (y2 - y1) as u32,
        })
    }

    /// Cell columns and rows whose centers fall inside the framebuffer.
    #[must_use]
    pub fn visible_cells(&self) -> (RangeInclusive<i64>, RangeInclusive<i64>) {
        let size = i64::from(self.cell_size);
        let (ox, oy) = self.origin;
        let w = i64::from(self.width());
        let h = i64::from(self.height());

        let columns = ceil_div(-ox, size)..=(w - 1 - ox).div_euclid(size);
        // Device Y is inverted: row r sits at oy - r * size
        let rows = ceil_div(oy - (h - 1), size)..=oy.div_euclid(size);
        (columns, rows)
    }
}

#[inline]
fn ceil_div(a: i64, b: i64) -> i64 {
    -(-a).div_euclid(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_center() {
        let target = RenderTarget::new(800, 600, 20).unwrap();
        assert_eq!(target.origin(), (400, 300));
        assert_eq!(target.grid_to_device(GridCell::ORIGIN), (400, 300));
    }

    #[test]
    fn test_y_is_inverted() {
        let target = RenderTarget::new(800, 600, 20).unwrap();
        assert_eq!(target.grid_to_device(GridCell::new(2, 3)), (440, 240));
        assert_eq!(target.grid_to_device(GridCell::new(-1, -1)), (380, 320));
    }

    #[test]
    fn test_cell_rect_has_gutter() {
        let target = RenderTarget::new(800, 600, 20).unwrap();
        let rect = target.cell_rect(GridCell::ORIGIN).unwrap();
        assert_eq!(rect, DeviceRect { x: 391, y: 291, width: 18, height: 18 });
    }

    #[test]
    fn test_cell_rect_clipped_and_hidden() {
        // origin at 45: cell -2 spans device x -4..14
        let target = RenderTarget::new(90, 90, 20).unwrap();
        let edge = target.cell_rect(GridCell::new(-2, 0)).unwrap();
        assert_eq!(edge.x, 0);
        assert_eq!(edge.width, 14);
        assert!(target.cell_rect(GridCell::new(40, 0)).is_none());
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        assert!(RenderTarget::new(10, 10, 0).is_err());
        assert!(RenderTarget::new(0, 10, 5).is_err());
    }

    #[test]
    fn test_visible_cells() {
        let target = RenderTarget::new(100, 100, 20).unwrap();
        let (columns, rows) = target.visible_cells();
        assert_eq!(columns, -2..=2);
        assert_eq!(rows, -2..=2);
    }
}
