//! Color types.
//!
//! [`Rgba`] is the 8-bit surface color used by framebuffers and encoders.
//! [`Color`] is what a rasterizer emits: a base color plus the fraction of the
//! cell the ideal shape covers. Only Wu's line produces fractional coverage;
//! blending is left to the rendering surface.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);
    /// Dark red (`#8B0000`), the default plot color.
    pub const DARK_RED: Self = Self::rgb(139, 0, 0);
    /// Saddle brown (`#8B4513`), the default antialiased line color.
    pub const SADDLE_BROWN: Self = Self::rgb(139, 69, 19);
    /// Light gray (`#DDDDDD`) used for grid lines.
    pub const GRID_GRAY: Self = Self::rgb(221, 221, 221);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for any other shape or a non-hex digit.
    pub fn from_hex(text: &str) -> Result<Self> {
        let hex = text.trim().trim_start_matches('#');
        let invalid = || Error::InvalidColor(text.to_string());

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match hex.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, digit) in out.iter_mut().zip(hex.chars()) {
                    let v = digit.to_digit(16).ok_or_else(invalid)? as u8;
                    *slot = v * 17;
                }
                Ok(Self::rgb(out[0], out[1], out[2]))
            }
            6 => Ok(Self::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            8 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Format as `#RRGGBB` (alpha omitted when opaque).
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Base color plus coverage, as emitted by a rasterizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Base color of the primitive.
    pub base: Rgba,
    /// Fraction of the cell covered by the ideal shape, in `[0, 1]`.
    pub coverage: f64,
}

impl Color {
    /// Full-coverage color.
    #[must_use]
    pub const fn solid(base: Rgba) -> Self {
        Self { base, coverage: 1.0 }
    }

    /// Color with fractional coverage, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_coverage(base: Rgba, coverage: f64) -> Self {
        Self { base, coverage: coverage.clamp(0.0, 1.0) }
    }

    /// Whether this emission fully covers its cell.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.coverage >= 1.0
    }

    /// Surface color: base alpha scaled by coverage.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let alpha = (f64::from(self.base.a) * self.coverage).round() as u8;
        self.base.with_alpha(alpha)
    }
}

impl From<Rgba> for Color {
    fn from(base: Rgba) -> Self {
        Self::solid(base)
    }
}
