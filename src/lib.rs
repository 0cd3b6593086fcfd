//! # raster-lab
//!
//! Classic rasterization algorithms on a visible cell grid.
//!
//! Each algorithm is a pure function from continuous geometry to the ordered
//! list of grid cells it lights. A separate rendering layer paints those
//! cells onto an RGBA framebuffer (with an optional SIMD compositing path
//! built on [trueno](https://crates.io/crates/trueno)) for PNG or terminal
//! output.
//!
//! ## Features
//!
//! - **Six algorithms**: step-by-step, DDA, Bresenham line, midpoint circle,
//!   quadratic Bézier and Wu's anti-aliased line
//! - **Pure core**: rasterizers never touch a framebuffer
//! - **Two renderers**: direct per-cell writes or SIMD compositing, chosen at runtime
//! - **Multiple outputs**: PNG and terminal (ASCII/Unicode/ANSI)
//!
//! ## Quick Start
//!
//! ```rust
//! use raster_lab::prelude::*;
//!
//! let request = Request::line(Algorithm::Bresenham, 0.0, 0.0, 5.0, 3.0);
//! let plots = rasterize(&request)?;
//! assert_eq!(plots.len(), 6);
//!
//! let mut target = RenderTarget::new(200, 200, DEFAULT_CELL_SIZE)?;
//! select_renderer(RendererKind::Auto).render(&mut target, &GridStyle::default(), &plots)?;
//! let png = PngEncoder::to_bytes(target.framebuffer())?;
//! assert!(!png.is_empty());
//! # Ok::<(), raster_lab::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): the `raster-lab` binary
//! - `parallel`: parallel trueno kernels via rayon
//! - `wasm`: WebAssembly bindings
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and coverage.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Grid cells and continuous geometry.
pub mod geometry;

/// The rasterization algorithms.
pub mod raster;

/// Static algorithm descriptions.
pub mod catalog;

// ============================================================================
// Rendering & Output
// ============================================================================

/// Render targets, grid drawing and renderer backends.
pub mod render;

/// Output encoders (PNG, terminal).
pub mod output;

/// Repeated-run timing diagnostic.
pub mod timing;

/// YAML configuration.
pub mod config;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for raster-lab operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use raster_lab::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::{describe, AlgorithmInfo};
    pub use crate::color::{Color, Rgba};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{GridCell, Point, Segment};
    pub use crate::output::{PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::raster::{rasterize, Algorithm, Plot, Request};
    pub use crate::render::{
        select_renderer, GridStyle, RenderTarget, Renderer, RendererKind, DEFAULT_CELL_SIZE,
    };
    pub use crate::timing::{time_runs, Timing};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
