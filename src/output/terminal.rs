//! Terminal output encoder (ASCII/Unicode/ANSI).
//!
//! Prints a render target one grid cell at a time, so the picture in the
//! terminal shows exactly the cells a rasterizer lit. Each cell is reduced
//! to the average color of its painted square.
//!
//! - ASCII: ink ramp ` .:-=+*#%@`, darker cells print denser glyphs
//! - Half-block: `▀` with 24-bit colors, two grid rows per text line
//! - ANSI: two colored spaces per cell for a roughly square aspect

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::GridCell;
use crate::render::RenderTarget;
use std::fmt::{self, Write as FmtWrite};
use std::str::FromStr;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// Plain ASCII glyphs (widest compatibility).
    Ascii,
    /// Unicode half blocks with ANSI 24-bit color.
    #[default]
    HalfBlock,
    /// Colored cell backgrounds with ANSI 24-bit color.
    Ansi,
}

impl fmt::Display for TerminalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascii => "ascii",
            Self::HalfBlock => "half-block",
            Self::Ansi => "ansi",
        })
    }
}

impl FromStr for TerminalMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" => Ok(Self::Ascii),
            "half-block" | "halfblock" | "unicode" => Ok(Self::HalfBlock),
            "ansi" | "truecolor" => Ok(Self::Ansi),
            _ => Err(Error::Rendering(format!("unknown terminal mode: {s}"))),
        }
    }
}

/// Terminal encoder configuration.
#[derive(Debug, Clone, Default)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    invert: bool,
}

impl TerminalEncoder {
    /// Ink ramp from light to dark (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Invert colors (for light-on-dark terminals).
    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Render the visible cells of a target to a string.
    #[must_use]
    pub fn render(&self, target: &RenderTarget) -> String {
        let rows = self.sample_rows(target);
        match self.mode {
            TerminalMode::Ascii => Self::render_ascii(&rows),
            TerminalMode::HalfBlock => Self::render_half_block(&rows),
            TerminalMode::Ansi => Self::render_ansi(&rows),
        }
    }

    /// Cell colors, top row first.
    fn sample_rows(&self, target: &RenderTarget) -> Vec<Vec<Rgba>> {
        let (columns, rows) = target.visible_cells();
        rows.rev()
            .map(|row| {
                columns
                    .clone()
                    .map(|column| {
                        let color = cell_average(target, GridCell::new(column, row));
                        if self.invert {
                            Rgba::rgb(255 - color.r, 255 - color.g, 255 - color.b)
                        } else {
                            color
                        }
                    })
                    .collect()
            })
            .collect()
    }

    fn render_ascii(rows: &[Vec<Rgba>]) -> String {
        let mut output = String::new();
        for row in rows {
            output.extend(row.iter().map(|&c| Self::ASCII_RAMP[ink_index(c)]));
            output.push('\n');
        }
        output
    }

    fn render_half_block(rows: &[Vec<Rgba>]) -> String {
        let mut output = String::new();
        for pair in rows.chunks(2) {
            for (i, top) in pair[0].iter().enumerate() {
                let _ = write!(output, "\x1b[38;2;{};{};{}m", top.r, top.g, top.b);
                match pair.get(1) {
                    Some(bottom) => {
                        let b = bottom[i];
                        let _ = write!(output, "\x1b[48;2;{};{};{}m▀", b.r, b.g, b.b);
                    }
                    None => output.push_str("\x1b[49m▀"),
                }
            }
            output.push_str("\x1b[0m\n");
        }
        output
    }

    fn render_ansi(rows: &[Vec<Rgba>]) -> String {
        let mut output = String::new();
        for row in rows {
            for c in row {
                let _ = write!(output, "\x1b[48;2;{};{};{}m  ", c.r, c.g, c.b);
            }
            output.push_str("\x1b[0m\n");
        }
        output
    }
}

/// Mean color of a cell's painted square, or black when it is off screen.
fn cell_average(target: &RenderTarget, cell: GridCell) -> Rgba {
    let Some(rect) = target.cell_rect(cell) else {
        return Rgba::BLACK;
    };
    let fb = target.framebuffer();
    let mut sum = [0u64; 3];
    let mut count = 0u64;
    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            if let Some(px) = fb.get_pixel(x, y) {
                sum[0] += u64::from(px.r);
                sum[1] += u64::from(px.g);
                sum[2] += u64::from(px.b);
                count += 1;
            }
        }
    }
    if count == 0 {
        return Rgba::BLACK;
    }
    let mean = |s: u64| ((s + count / 2) / count) as u8;
    Rgba::rgb(mean(sum[0]), mean(sum[1]), mean(sum[2]))
}

/// Ramp index for a color: white maps to 0, black to the densest glyph.
fn ink_index(color: Rgba) -> usize {
    // Rec. 709 luminance coefficients
    let luma = 0.2126 * (f32::from(color.r) / 255.0)
        + 0.7152 * (f32::from(color.g) / 255.0)
        + 0.0722 * (f32::from(color.b) / 255.0);
    let last = TerminalEncoder::ASCII_RAMP.len() - 1;
    let idx = ((1.0 - luma) * last as f32).round() as usize;
    idx.min(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Plot;
    use crate::render::{DirectRenderer, GridStyle, Renderer};

    fn rendered(plots: &[Plot]) -> RenderTarget {
        let mut target = RenderTarget::new(100, 100, 20).unwrap();
        DirectRenderer::new().render(&mut target, &GridStyle::default(), plots).unwrap();
        target
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("ascii".parse::<TerminalMode>().unwrap(), TerminalMode::Ascii);
        assert_eq!("half-block".parse::<TerminalMode>().unwrap(), TerminalMode::HalfBlock);
        assert_eq!("ANSI".parse::<TerminalMode>().unwrap(), TerminalMode::Ansi);
        assert!("sixel".parse::<TerminalMode>().is_err());
    }

    #[test]
    fn test_ascii_one_glyph_per_cell() {
        let target = rendered(&[]);
        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).render(&target);
        let lines: Vec<&str> = output.lines().collect();

        // Cells -2..=2 in both directions
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() == 5));
    }

    #[test]
    fn test_ascii_marks_plotted_cell() {
        let target = rendered(&[Plot::solid(GridCell::new(1, 1), Rgba::BLACK)]);
        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).render(&target);
        let lines: Vec<Vec<char>> = output.lines().map(|l| l.chars().collect()).collect();

        // Row 1 is the second line, column 1 the fourth glyph
        assert_eq!(lines[1][3], '@');
        // Cell (2, 2) is untouched background
        assert_eq!(lines[0][4], ' ');
    }

    #[test]
    fn test_invert_mode() {
        let target = rendered(&[]);
        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).invert(true).render(&target);
        let first = output.lines().next().unwrap();
        assert_eq!(first.chars().last(), Some('@'));
    }

    #[test]
    fn test_half_block_pairs_rows() {
        let target = rendered(&[Plot::solid(GridCell::new(0, 2), Rgba::RED)]);
        let output = TerminalEncoder::new().mode(TerminalMode::HalfBlock).render(&target);

        // Five grid rows fold into three text lines
        assert_eq!(output.lines().count(), 3);
        assert!(output.contains('▀'));
        assert!(output.contains("\x1b[38;2;255;0;0m"));
        assert!(output.contains("\x1b[49m"));
        assert!(output.ends_with("\x1b[0m\n"));
    }

    #[test]
    fn test_ansi_contains_cell_color() {
        let target = rendered(&[Plot::solid(GridCell::new(-1, 0), Rgba::BLUE)]);
        let output = TerminalEncoder::new().mode(TerminalMode::Ansi).render(&target);
        assert!(output.contains("48;2;0;0;255"));
        assert_eq!(output.lines().count(), 5);
    }

    #[test]
    fn test_ink_index_extremes() {
        assert_eq!(ink_index(Rgba::WHITE), 0);
        assert_eq!(ink_index(Rgba::BLACK), 9);
    }
}
