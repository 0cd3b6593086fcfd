//! Rasterization algorithms.
//!
//! Maps continuous geometry onto the cells of an unbounded grid. Every
//! algorithm is a pure function returning the [`Plot`]s it emits, in the order
//! a surface should draw them. Nothing here touches a framebuffer; see
//! [`crate::render`] for that.
//!
//! # Algorithms
//!
//! - **Step-by-step / DDA**: floating-point stepping along the dominant axis
//! - **Bresenham's Line**: integer-only error-term stepping
//! - **Midpoint Circle**: one octant computed, seven reflected
//! - **Quadratic Bézier**: sampled curve joined with Bresenham segments
//! - **Wu's Anti-aliased Line**: two cells per column with coverage weights
//!
//! # Degenerate input
//!
//! Zero-length segments and zero radii emit exactly one plot. Non-finite
//! coordinates, and coordinates beyond
//! [`MAX_COORDINATE`](crate::geometry::MAX_COORDINATE), make the unchecked
//! functions return an empty list; the checked [`rasterize`] entry point
//! reports them as [`crate::Error::InvalidInput`].
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

mod bezier;
mod circle;
mod dispatch;
mod line;

pub use bezier::{quadratic_bezier, quadratic_bezier_with_step, BEZIER_STEP};
pub use circle::bresenham_circle;
pub use dispatch::{rasterize, Algorithm, Request, DEFAULT_RADIUS};
pub use line::{bresenham_line, dda, step_by_step, wu_line, BresenhamCells};

use crate::color::{Color, Rgba};
use crate::geometry::GridCell;

/// One emission of a rasterizer: a cell and the color to paint it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    /// Target cell.
    pub cell: GridCell,
    /// Base color and coverage.
    pub color: Color,
}

impl Plot {
    /// Create a plot.
    #[must_use]
    pub const fn new(cell: GridCell, color: Color) -> Self {
        Self { cell, color }
    }

    /// Create a full-coverage plot.
    #[must_use]
    pub const fn solid(cell: GridCell, color: Rgba) -> Self {
        Self::new(cell, Color::solid(color))
    }

    /// Coverage of this plot's cell.
    #[must_use]
    pub fn coverage(&self) -> f64 {
        self.color.coverage
    }
}

/// Cells of a plot list in emission order.
#[must_use]
pub fn cells(plots: &[Plot]) -> Vec<GridCell> {
    plots.iter().map(|p| p.cell).collect()
}
