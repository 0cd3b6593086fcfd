//! Core framebuffer for pixel rendering.
//!
//! Provides a SIMD-aligned RGBA pixel buffer. Layer compositing goes through
//! trueno vector kernels; everything else is plain row-major byte access.

use crate::color::Rgba;
use crate::error::{Error, Result};
use trueno::{Backend, Vector};

/// Alignment for SIMD operations (64 bytes for AVX-512).
const SIMD_ALIGNMENT: usize = 64;

/// SIMD-aligned framebuffer for efficient pixel operations.
///
/// Rows are padded to a multiple of 64 bytes so whole rows can be handed to
/// wide SIMD kernels.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order.
    /// Each pixel is 4 bytes: [R, G, B, A].
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions.
    ///
    /// All pixels start fully transparent.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_lab::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        // Calculate stride with alignment padding
        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + SIMD_ALIGNMENT - 1) & !(SIMD_ALIGNMENT - 1);

        let size = stride * (height as usize);
        let pixels = vec![0; size];

        Ok(Self { width, height, pixels, stride })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the stride (row width in bytes, including any padding).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let [r, g, b, a] = color.to_array();

        // 64-byte pattern (16 pixels) for a SIMD-friendly fill
        let pattern: [u8; 64] = {
            let mut p = [0u8; 64];
            for px in p.chunks_exact_mut(4) {
                px.copy_from_slice(&[r, g, b, a]);
            }
            p
        };

        let row_bytes = (self.width as usize) * 4;
        for row in self.pixels.chunks_exact_mut(self.stride) {
            let row = &mut row[..row_bytes];

            let mut chunks = row.chunks_exact_mut(64);
            for chunk in &mut chunks {
                chunk.copy_from_slice(&pattern);
            }
            for px in chunks.into_remainder().chunks_exact_mut(4) {
                px.copy_from_slice(&[r, g, b, a]);
            }
        }
    }

    /// Fill a rectangular region with a solid color.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let rgba = color.to_array();
        let rect_width = (x2 - x1) as usize;

        for row_y in y1..y2 {
            let row_start = (row_y as usize) * self.stride + (x1 as usize) * 4;
            let row = &mut self.pixels[row_start..row_start + rect_width * 4];

            for chunk in row.chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Blend a color over a rectangular region.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn blend_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        if color.a == 0 {
            return;
        }
        if color.a == 255 {
            self.fill_rect(x, y, w, h, color);
            return;
        }

        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);
        for py in y.min(self.height)..y2 {
            for px in x.min(self.width)..x2 {
                self.blend_pixel(px, py, color);
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Blend a color at a specific pixel coordinate using alpha blending.
    ///
    /// Uses the standard "over" compositing operation:
    /// `out = src * src_alpha + dst * dst_alpha * (1 - src_alpha)`
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        let src_a = f32::from(color.a) / 255.0;
        let dst_a = f32::from(self.pixels[idx + 3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        if out_a > 0.0 {
            let blend = |src: u8, dst: u8| -> u8 {
                let src_f = f32::from(src) / 255.0;
                let dst_f = f32::from(dst) / 255.0;
                let out = (src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a;
                (out * 255.0).round() as u8
            };

            self.pixels[idx] = blend(color.r, self.pixels[idx]);
            self.pixels[idx + 1] = blend(color.g, self.pixels[idx + 1]);
            self.pixels[idx + 2] = blend(color.b, self.pixels[idx + 2]);
            self.pixels[idx + 3] = (out_a * 255.0).round() as u8;
        }
    }

    /// Composite a layer over this framebuffer using its per-pixel alpha.
    ///
    /// Color channels are computed a whole row at a time with trueno vectors:
    /// `out = src * a + dst * (1 - a)` where `a` is the layer pixel's alpha.
    /// Fully transparent layer pixels leave the destination untouched and
    /// fully opaque ones replace it exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if the framebuffers have different dimensions, or if
    /// a vector kernel fails.
    pub fn composite_over(&mut self, layer: &Framebuffer) -> Result<()> {
        if self.width != layer.width || self.height != layer.height {
            return Err(Error::InvalidDimensions { width: layer.width, height: layer.height });
        }

        let row_bytes = (self.width as usize) * 4;
        for y in 0..self.height as usize {
            let row_start = y * self.stride;
            let src_row = &layer.pixels[row_start..row_start + row_bytes];

            // Skip rows the layer never touched
            if src_row.chunks_exact(4).all(|px| px[3] == 0) {
                continue;
            }

            let alpha: Vec<f32> =
                src_row.chunks_exact(4).flat_map(|px| [f32::from(px[3]) / 255.0; 4]).collect();
            let inv_alpha: Vec<f32> = alpha.iter().map(|a| 1.0 - a).collect();
            let src_f32: Vec<f32> = src_row.iter().map(|&b| f32::from(b)).collect();

            let dst_row = &mut self.pixels[row_start..row_start + row_bytes];
            let dst_f32: Vec<f32> = dst_row.iter().map(|&b| f32::from(b)).collect();

            let src_scaled = Vector::from_vec(src_f32)
                .mul(&Vector::from_vec(alpha))
                .map_err(kernel_error)?;
            let dst_scaled = Vector::from_vec(dst_f32)
                .mul(&Vector::from_vec(inv_alpha))
                .map_err(kernel_error)?;
            let blended = src_scaled.add(&dst_scaled).map_err(kernel_error)?;

            for ((out, v), src) in dst_row
                .chunks_exact_mut(4)
                .zip(blended.as_slice().chunks_exact(4))
                .zip(src_row.chunks_exact(4))
            {
                let src_a = f32::from(src[3]) / 255.0;
                let dst_a = f32::from(out[3]) / 255.0;
                for c in 0..3 {
                    out[c] = v[c].round().clamp(0.0, 255.0) as u8;
                }
                out[3] = ((src_a + dst_a * (1.0 - src_a)) * 255.0).round() as u8;
            }
        }

        Ok(())
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Get pixel data as a compact buffer without stride padding.
    ///
    /// This is useful for encoding to formats like PNG that expect
    /// tightly-packed pixel data.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;

        // If stride equals row bytes, return a clone
        if self.stride == row_bytes {
            return self.pixels[..row_bytes * (self.height as usize)].to_vec();
        }

        // Otherwise, copy row by row
        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for row in self.pixels.chunks_exact(self.stride) {
            compact.extend_from_slice(&row[..row_bytes]);
        }
        compact
    }

    /// Get the SIMD backend trueno selects on this machine.
    #[must_use]
    pub fn backend() -> Backend {
        Backend::select_best()
    }
}

/// Wrap a trueno kernel failure.
fn kernel_error<E: std::fmt::Debug>(e: E) -> Error {
    Error::Rendering(format!("vector kernel failed: {e:?}"))
}
