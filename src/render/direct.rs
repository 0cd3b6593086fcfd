//! Renderer that paints plots straight into the target's pixels.

use super::target::RenderTarget;
use super::{Renderer, RendererKind};
use crate::error::Result;
use crate::raster::Plot;

/// Paints each plot in emission order: opaque plots overwrite, partial
/// coverage blends over whatever is already there.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectRenderer;

impl DirectRenderer {
    /// Create a direct renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Renderer for DirectRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::Direct
    }

    fn draw_plots(&mut self, target: &mut RenderTarget, plots: &[Plot]) -> Result<()> {
        for plot in plots {
            if let Some(rect) = target.cell_rect(plot.cell) {
                target.framebuffer_mut().blend_rect(
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    plot.color.to_rgba(),
                );
            }
        }
        Ok(())
    }
}
