//! Configuration system.
//!
//! Supports YAML configuration with precedence: CLI > file > defaults.
//! Every field is optional in the file; missing ones take their default.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::raster::{Algorithm, DEFAULT_RADIUS};
use crate::render::{GridStyle, RendererKind, DEFAULT_CELL_SIZE};
use crate::timing::DEFAULT_RUNS;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canvas size and cell scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Cell edge in pixels.
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}
fn default_cell_size() -> u32 {
    DEFAULT_CELL_SIZE
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: default_width(), height: default_height(), cell_size: default_cell_size() }
    }
}

/// Plot color per algorithm, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorsConfig {
    /// Step-by-step line.
    #[serde(default = "default_solid")]
    pub step: String,
    /// DDA line.
    #[serde(default = "default_solid")]
    pub dda: String,
    /// Bresenham line.
    #[serde(default = "default_solid")]
    pub bresenham: String,
    /// Midpoint circle.
    #[serde(default = "default_solid")]
    pub circle: String,
    /// Quadratic Bezier.
    #[serde(default = "default_solid")]
    pub bezier: String,
    /// Wu anti-aliased line.
    #[serde(default = "default_wu")]
    pub wu: String,
}

fn default_solid() -> String {
    Algorithm::Bresenham.default_color().to_hex()
}
fn default_wu() -> String {
    Algorithm::Wu.default_color().to_hex()
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            step: default_solid(),
            dda: default_solid(),
            bresenham: default_solid(),
            circle: default_solid(),
            bezier: default_solid(),
            wu: default_wu(),
        }
    }
}

/// Grid colors, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Canvas fill.
    #[serde(default = "default_background")]
    pub background: String,

    /// Cell boundary lines.
    #[serde(default = "default_lines")]
    pub lines: String,

    /// Axes and ticks.
    #[serde(default = "default_axes")]
    pub axes: String,
}

fn default_background() -> String {
    Rgba::WHITE.to_hex()
}
fn default_lines() -> String {
    Rgba::GRID_GRAY.to_hex()
}
fn default_axes() -> String {
    Rgba::BLACK.to_hex()
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { background: default_background(), lines: default_lines(), axes: default_axes() }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Canvas settings.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Runs of the timing diagnostic.
    #[serde(default = "default_runs")]
    pub runs: usize,

    /// Default circle radius.
    #[serde(default = "default_radius")]
    pub radius: u32,

    /// Renderer preference.
    #[serde(default)]
    pub renderer: RendererKind,

    /// Plot colors.
    #[serde(default)]
    pub colors: ColorsConfig,

    /// Grid colors.
    #[serde(default)]
    pub grid: GridConfig,
}

fn default_runs() -> usize {
    DEFAULT_RUNS
}
fn default_radius() -> u32 {
    DEFAULT_RADIUS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            runs: default_runs(),
            radius: default_radius(),
            renderer: RendererKind::default(),
            colors: ColorsConfig::default(),
            grid: GridConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse { line, message: e.to_string() }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            warn!("using default config ({}): {e}", path.display());
            Self::default()
        })
    }

    /// Default config location: `<config dir>/raster-lab/config.yaml`.
    #[cfg(feature = "cli")]
    #[must_use]
    pub fn default_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|dir| dir.join("raster-lab").join("config.yaml"))
    }

    /// Plot color configured for an algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if the configured hex string is malformed.
    pub fn color_for(&self, algorithm: Algorithm) -> Result<Rgba> {
        let hex = match algorithm {
            Algorithm::Step => &self.colors.step,
            Algorithm::Dda => &self.colors.dda,
            Algorithm::Bresenham => &self.colors.bresenham,
            Algorithm::Circle => &self.colors.circle,
            Algorithm::Bezier => &self.colors.bezier,
            Algorithm::Wu => &self.colors.wu,
        };
        Rgba::from_hex(hex)
    }

    /// Grid style built from the configured colors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if any grid color is malformed.
    pub fn grid_style(&self) -> Result<GridStyle> {
        Ok(GridStyle {
            background: Rgba::from_hex(&self.grid.background)?,
            lines: Rgba::from_hex(&self.grid.lines)?,
            axes: Rgba::from_hex(&self.grid.axes)?,
            ..GridStyle::default()
        })
    }
}
