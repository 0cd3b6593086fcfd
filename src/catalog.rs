//! Descriptions shown next to each algorithm.
//!
//! Static data only; the rasterizers never consult it.

use crate::raster::Algorithm;

/// Title and summary for one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    /// Algorithm this entry describes.
    pub algorithm: Algorithm,
    /// Display title.
    pub title: &'static str,
    /// One-paragraph summary.
    pub summary: &'static str,
}

static CATALOG: [AlgorithmInfo; 6] = [
    AlgorithmInfo {
        algorithm: Algorithm::Step,
        title: "Step-by-step algorithm",
        summary: "The simplest way to rasterize a segment. X and Y advance by a fixed \
                  increment each step and are rounded to the nearest cell. Its weakness is \
                  the accumulation of rounding error along the line.",
    },
    AlgorithmInfo {
        algorithm: Algorithm::Dda,
        title: "DDA (Digital Differential Analyzer)",
        summary: "Uses uniform coordinate increments along the dominant axis. Easy to \
                  implement, but needs a floating-point division up front and rounding at \
                  every step.",
    },
    AlgorithmInfo {
        algorithm: Algorithm::Bresenham,
        title: "Bresenham (line)",
        summary: "An integer-only, fast and exact method with no division, driven by a \
                  running error term. The workhorse of raster graphics.",
    },
    AlgorithmInfo {
        algorithm: Algorithm::Circle,
        title: "Bresenham (circle)",
        summary: "Computes one octant with integer arithmetic and reflects it eight ways, \
                  which makes drawing circle outlines cheap.",
    },
    AlgorithmInfo {
        algorithm: Algorithm::Bezier,
        title: "Quadratic Bézier",
        summary: "Builds a second-order Bézier curve from the chord and a generated control \
                  point, sampling it and joining the samples with Bresenham segments. Used for \
                  smooth outlines and trajectories.",
    },
    AlgorithmInfo {
        algorithm: Algorithm::Wu,
        title: "Anti-aliased lines (Wu)",
        summary: "Accounts for partial pixel coverage: each column paints two cells whose \
                  intensities split the line between them, visually removing the staircase \
                  effect.",
    },
];

/// Look up the entry for an algorithm.
#[must_use]
pub fn describe(algorithm: Algorithm) -> &'static AlgorithmInfo {
    // CATALOG is ordered like Algorithm::ALL
    &CATALOG[algorithm as usize]
}

/// All entries, in menu order.
#[must_use]
pub fn entries() -> &'static [AlgorithmInfo] {
    &CATALOG
}
