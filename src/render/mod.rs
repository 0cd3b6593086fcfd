//! Rendering backends.
//!
//! Turns [`Plot`]s into pixels on a [`RenderTarget`]. Two interchangeable
//! backends implement [`Renderer`]:
//!
//! - [`DirectRenderer`]: writes each cell straight into the framebuffer
//! - [`AcceleratedRenderer`]: gathers cells on an overlay and composites it
//!   with trueno SIMD kernels
//!
//! [`select_renderer`] picks one at runtime. Redrawing the grid is part of
//! [`Renderer::render`], never of the rasterizers.

mod accelerated;
mod direct;
mod grid;
mod target;

pub use accelerated::AcceleratedRenderer;
pub use direct::DirectRenderer;
pub use grid::{draw_grid, GridStyle};
pub use target::{DeviceRect, RenderTarget, DEFAULT_CELL_SIZE};

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::raster::Plot;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A backend that can paint plots onto a render target.
pub trait Renderer {
    /// Which backend this is.
    fn kind(&self) -> RendererKind;

    /// Paint plots over the target's current contents, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot complete the draw.
    fn draw_plots(&mut self, target: &mut RenderTarget, plots: &[Plot]) -> Result<()>;

    /// Redraw the grid, then paint the plots on top.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Renderer::draw_plots`].
    fn render(&mut self, target: &mut RenderTarget, style: &GridStyle, plots: &[Plot]) -> Result<()> {
        draw_grid(target, style);
        debug!("{} renderer: {} plots", self.kind(), plots.len());
        self.draw_plots(target, plots)
    }
}

/// Backend preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Accelerated when SIMD is available, direct otherwise.
    #[default]
    Auto,
    /// [`DirectRenderer`].
    Direct,
    /// [`AcceleratedRenderer`].
    Accelerated,
}

impl RendererKind {
    /// Resolve `Auto` against the current machine.
    #[must_use]
    pub fn resolve(self) -> Self {
        match self {
            Self::Auto if simd_available() => Self::Accelerated,
            Self::Auto => Self::Direct,
            other => other,
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Direct => "direct",
            Self::Accelerated => "accelerated",
        })
    }
}

impl FromStr for RendererKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "direct" => Ok(Self::Direct),
            "accelerated" | "simd" => Ok(Self::Accelerated),
            _ => Err(Error::Rendering(format!("unknown renderer: {s}"))),
        }
    }
}

/// Whether this machine has vector units worth dispatching to.
#[must_use]
pub fn simd_available() -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") || is_x86_feature_detected!("sse2") {
            return true;
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        // NEON is mandatory on AArch64
        return true;
    }

    #[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
    {
        return true;
    }

    #[allow(unreachable_code)]
    false
}

/// Build the renderer for a preference, resolving `Auto` at runtime.
#[must_use]
pub fn select_renderer(kind: RendererKind) -> Box<dyn Renderer> {
    let resolved = kind.resolve();
    info!("renderer: {resolved} (requested {kind}, trueno backend {:?})", Framebuffer::backend());
    match resolved {
        RendererKind::Accelerated => Box::new(AcceleratedRenderer::new()),
        _ => Box::new(DirectRenderer::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::geometry::GridCell;

    #[test]
    fn test_parse_kind() {
        assert_eq!("direct".parse::<RendererKind>().unwrap(), RendererKind::Direct);
        assert_eq!("SIMD".parse::<RendererKind>().unwrap(), RendererKind::Accelerated);
        assert!("opengl".parse::<RendererKind>().is_err());
    }

    #[test]
    fn test_explicit_kind_is_kept() {
        assert_eq!(RendererKind::Direct.resolve(), RendererKind::Direct);
        assert_eq!(RendererKind::Accelerated.resolve(), RendererKind::Accelerated);
        assert_ne!(RendererKind::Auto.resolve(), RendererKind::Auto);
    }

    #[test]
    fn test_select_renderer_kind() {
        assert_eq!(select_renderer(RendererKind::Direct).kind(), RendererKind::Direct);
        assert_eq!(select_renderer(RendererKind::Accelerated).kind(), RendererKind::Accelerated);
    }

    #[test]
    fn test_render_redraws_grid() {
        let mut target = RenderTarget::new(60, 60, 20).unwrap();
        target.framebuffer_mut().clear(Rgba::RED);

        let plots = [Plot::solid(GridCell::new(1, 0), Rgba::DARK_RED)];
        let mut renderer = select_renderer(RendererKind::Auto);
        renderer.render(&mut target, &GridStyle::default(), &plots).unwrap();

        let fb = target.framebuffer();
        assert_eq!(fb.get_pixel(3, 3), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(50, 30), Some(Rgba::DARK_RED));
    }
}
