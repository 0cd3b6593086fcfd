//! Algorithm selection and the checked rasterization entry point.

use super::{
    bresenham_circle, bresenham_line, dda, quadratic_bezier, step_by_step, wu_line, Plot,
};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{in_range, round_half_up};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Radius used for circles when the caller does not supply one.
pub const DEFAULT_RADIUS: u32 = 8;

/// The rasterization algorithms on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Naive floating-point stepping.
    Step,
    /// Digital Differential Analyzer.
    Dda,
    /// Bresenham's integer line.
    Bresenham,
    /// Midpoint circle.
    Circle,
    /// Quadratic Bézier through Bresenham segments.
    Bezier,
    /// Wu's anti-aliased line.
    Wu,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Self; 6] =
        [Self::Step, Self::Dda, Self::Bresenham, Self::Circle, Self::Bezier, Self::Wu];

    /// Short identifier (`step`, `dda`, ...).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::Dda => "dda",
            Self::Bresenham => "bresenham",
            Self::Circle => "circle",
            Self::Bezier => "bezier",
            Self::Wu => "wu",
        }
    }

    /// Color used when the caller does not pick one.
    #[must_use]
    pub const fn default_color(self) -> Rgba {
        match self {
            Self::Wu => Rgba::SADDLE_BROWN,
            _ => Rgba::DARK_RED,
        }
    }

    /// Whether this algorithm emits fractional coverage.
    #[must_use]
    pub const fn is_antialiased(self) -> bool {
        matches!(self, Self::Wu)
    }

    /// Whether this algorithm reads the radius instead of the second point.
    #[must_use]
    pub const fn uses_radius(self) -> bool {
        matches!(self, Self::Circle)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.id() == wanted)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Parameters for one rasterization.
///
/// Line algorithms read `(x1, y1)-(x2, y2)`. The circle uses `(x1, y1)` as its
/// center (rounded to a cell) and `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Request {
    /// Algorithm to run.
    pub algorithm: Algorithm,
    /// First point X (circle center X).
    pub x1: f64,
    /// First point Y (circle center Y).
    pub y1: f64,
    /// Second point X.
    pub x2: f64,
    /// Second point Y.
    pub y2: f64,
    /// Circle radius in cells.
    pub radius: i64,
    /// Override for the algorithm's default color.
    pub color: Option<Rgba>,
}

impl Request {
    /// Request for a line-like algorithm.
    #[must_use]
    pub const fn line(algorithm: Algorithm, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { algorithm, x1, y1, x2, y2, radius: DEFAULT_RADIUS as i64, color: None }
    }

    /// Request for a circle.
    #[must_use]
    pub const fn circle(x0: f64, y0: f64, radius: i64) -> Self {
        Self { algorithm: Algorithm::Circle, x1: x0, y1: y0, x2: x0, y2: y0, radius, color: None }
    }

    /// Use a specific color.
    #[must_use]
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Effective plot color.
    #[must_use]
    pub fn color(&self) -> Rgba {
        self.color.unwrap_or_else(|| self.algorithm.default_color())
    }

    /// Check every parameter the chosen algorithm reads.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for NaN or infinite coordinates, for
    /// coordinates beyond `±MAX_COORDINATE`, and for a radius outside
    /// `0..=u32::MAX`.
    pub fn validate(&self) -> Result<()> {
        let mut fields = vec![("x1", self.x1), ("y1", self.y1)];
        if !self.algorithm.uses_radius() {
            fields.push(("x2", self.x2));
            fields.push(("y2", self.y2));
        }
        for (field, value) in fields {
            if !in_range(value) {
                return Err(Error::invalid_input(field, value));
            }
        }

        if self.algorithm.uses_radius() && u32::try_from(self.radius).is_err() {
            return Err(Error::invalid_input("radius", self.radius));
        }
        Ok(())
    }
}

/// Validate a request and run the selected rasterizer.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when [`Request::validate`] rejects the input.
pub fn rasterize(request: &Request) -> Result<Vec<Plot>> {
    request.validate()?;

    let Request { algorithm, x1, y1, x2, y2, .. } = *request;
    let color = request.color();

    let plots = match algorithm {
        Algorithm::Step => step_by_step(x1, y1, x2, y2, color),
        Algorithm::Dda => dda(x1, y1, x2, y2, color),
        Algorithm::Bresenham => bresenham_line(x1, y1, x2, y2, color),
        Algorithm::Circle => {
            let radius = u32::try_from(request.radius)
                .map_err(|_| Error::invalid_input("radius", request.radius))?;
            bresenham_circle(round_half_up(x1) as i64, round_half_up(y1) as i64, radius, color)
        }
        Algorithm::Bezier => quadratic_bezier(x1, y1, x2, y2, color),
        Algorithm::Wu => wu_line(x1, y1, x2, y2, color),
    };

    debug!("{algorithm}: {} plots", plots.len());
    Ok(plots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridCell;

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("wu".parse::<Algorithm>().unwrap(), Algorithm::Wu);
        assert_eq!(" Bresenham ".parse::<Algorithm>().unwrap(), Algorithm::Bresenham);
        assert!(matches!("spline".parse::<Algorithm>(), Err(Error::UnknownAlgorithm(_))));
    }

    #[test]
    fn test_display_roundtrips_ids() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_default_colors() {
        assert_eq!(Algorithm::Wu.default_color(), Rgba::SADDLE_BROWN);
        assert_eq!(Algorithm::Dda.default_color(), Rgba::DARK_RED);
    }

    #[test]
    fn test_rasterize_line() {
        let plots = rasterize(&Request::line(Algorithm::Bresenham, 0.0, 0.0, 5.0, 3.0)).unwrap();
        assert_eq!(plots.len(), 6);
        assert!(plots.iter().all(|p| p.color.base == Rgba::DARK_RED));
    }

    #[test]
    fn test_rasterize_color_override() {
        let request = Request::line(Algorithm::Wu, 0.0, 0.0, 3.0, 1.0).with_color(Rgba::BLUE);
        let plots = rasterize(&request).unwrap();
        assert!(plots.iter().all(|p| p.color.base == Rgba::BLUE));
    }

    #[test]
    fn test_rasterize_circle_rounds_center() {
        let plots = rasterize(&Request::circle(0.6, -0.4, 0)).unwrap();
        assert_eq!(plots.len(), 1);
        assert_eq!(plots[0].cell, GridCell::new(1, 0));
    }

    #[test]
    fn test_rasterize_rejects_nan() {
        let err = rasterize(&Request::line(Algorithm::Dda, 0.0, f64::NAN, 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { field: "y1", .. }));
    }

    #[test]
    fn test_rasterize_rejects_infinite_endpoint() {
        let err =
            rasterize(&Request::line(Algorithm::Wu, 0.0, 0.0, f64::NEG_INFINITY, 1.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { field: "x2", .. }));
    }

    #[test]
    fn test_rasterize_rejects_huge_coordinates() {
        let err = rasterize(&Request::line(Algorithm::Dda, -1e308, 0.0, 1e308, 0.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { field: "x1", .. }));

        let err = rasterize(&Request::circle(0.0, 1e19, 3)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { field: "y1", .. }));
    }

    #[test]
    fn test_rasterize_rejects_negative_radius() {
        let err = rasterize(&Request::circle(0.0, 0.0, -3)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { field: "radius", .. }));
    }

    #[test]
    fn test_circle_ignores_second_point() {
        let mut request = Request::circle(0.0, 0.0, 2);
        request.x2 = f64::NAN;
        assert!(rasterize(&request).is_ok());
    }
}
