//! Renderer that composites all plots in one vectorized pass.

use super::target::RenderTarget;
use super::{Renderer, RendererKind};
use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::raster::Plot;
use log::trace;

/// Collects plots on a transparent overlay, then blends the overlay onto
/// the target with trueno vector kernels.
///
/// The overlay is kept between calls and reallocated only when the target
/// size changes.
#[derive(Debug, Clone, Default)]
pub struct AcceleratedRenderer {
    layer: Option<Framebuffer>,
}

impl AcceleratedRenderer {
    /// Create an accelerated renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self { layer: None }
    }

    fn layer_for(&mut self, width: u32, height: u32) -> Result<&mut Framebuffer> {
        let layer = match self.layer.take() {
            Some(fb) if fb.width() == width && fb.height() == height => fb,
            _ => {
                trace!("allocating {width}x{height} overlay");
                Framebuffer::new(width, height)?
            }
        };
        let layer = self.layer.insert(layer);
        layer.clear(Rgba::TRANSPARENT);
        Ok(layer)
    }
}

impl Renderer for AcceleratedRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::Accelerated
    }

    fn draw_plots(&mut self, target: &mut RenderTarget, plots: &[Plot]) -> Result<()> {
        let rects: Vec<_> = plots
            .iter()
            .filter_map(|plot| target.cell_rect(plot.cell).map(|rect| (rect, plot.color.to_rgba())))
            .collect();
        if rects.is_empty() {
            return Ok(());
        }

        let layer = self.layer_for(target.width(), target.height())?;
        for (rect, color) in rects {
            layer.blend_rect(rect.x, rect.y, rect.width, rect.height, color);
        }

        target.framebuffer_mut().composite_over(layer)
    }
}
