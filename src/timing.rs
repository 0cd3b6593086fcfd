//! Repeated-run timing of a rasterizer.
//!
//! A quick diagnostic printed next to each drawing. For real measurements
//! use the criterion benches.

use crate::error::{Error, Result};
use crate::raster::{rasterize, Plot, Request};
use log::debug;
use std::time::{Duration, Instant};

/// Default number of back-to-back runs.
pub const DEFAULT_RUNS: usize = 50;

/// Outcome of [`time_runs`].
#[derive(Debug, Clone)]
pub struct Timing {
    /// Number of runs measured.
    pub runs: usize,
    /// Wall time across all runs.
    pub total: Duration,
    /// Output of the last run.
    pub plots: Vec<Plot>,
}

impl Timing {
    /// Mean time per run.
    #[must_use]
    pub fn mean(&self) -> Duration {
        let runs = u32::try_from(self.runs.max(1)).unwrap_or(u32::MAX);
        self.total / runs
    }

    /// Mean time per run in milliseconds.
    #[must_use]
    pub fn mean_ms(&self) -> f64 {
        self.mean().as_secs_f64() * 1000.0
    }

    /// One-line report, e.g. `Mean execution time: 0.00123 ms (over 50 runs)`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Mean execution time: {:.5} ms (over {} runs)", self.mean_ms(), self.runs)
    }
}

/// Run a request `runs` times and keep the last output.
///
/// The request is validated once up front.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `runs` is zero or the request is invalid.
pub fn time_runs(request: &Request, runs: usize) -> Result<Timing> {
    if runs == 0 {
        return Err(Error::invalid_input("runs", runs));
    }
    request.validate()?;

    let start = Instant::now();
    let mut plots = Vec::new();
    for _ in 0..runs {
        plots = rasterize(request)?;
    }
    let total = start.elapsed();

    let timing = Timing { runs, total, plots };
    debug!("{}: {}", request.algorithm, timing.summary());
    Ok(timing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Algorithm;

    #[test]
    fn test_time_runs_keeps_last_output() {
        let request = Request::line(Algorithm::Bresenham, 0.0, 0.0, 5.0, 3.0);
        let timing = time_runs(&request, DEFAULT_RUNS).unwrap();

        assert_eq!(timing.runs, 50);
        assert_eq!(timing.plots, rasterize(&request).unwrap());
    }

    #[test]
    fn test_zero_runs_rejected() {
        let request = Request::line(Algorithm::Dda, 0.0, 0.0, 1.0, 1.0);
        assert!(matches!(time_runs(&request, 0), Err(Error::InvalidInput { field: "runs", .. })));
    }

    #[test]
    fn test_invalid_request_rejected() {
        let request = Request::line(Algorithm::Wu, f64::NAN, 0.0, 1.0, 1.0);
        assert!(time_runs(&request, 3).is_err());
    }

    #[test]
    fn test_summary_format() {
        let timing = Timing { runs: 4, total: Duration::from_millis(2), plots: Vec::new() };
        assert_eq!(timing.mean(), Duration::from_micros(500));
        assert_eq!(timing.summary(), "Mean execution time: 0.50000 ms (over 4 runs)");
    }
}
