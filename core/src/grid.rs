//! # Grid Sampler
//!
//! Lays a regular grid over the plot bounds and drops the cells that sit
//! exactly on a charge.
//!
//! Axis values are derived from an integer step index (`min + i * interval`)
//! instead of accumulating `interval`, so the number of samples is fixed up
//! front and a bad interval cannot turn into an endless loop.

use std::collections::HashSet;

use coulomb_common::error::{Error, Result};
use coulomb_common::field::{Charge, ObservationPoint, PlotBounds};
use tracing::debug;

/// Slack on the step quotient so an endpoint that lands on a step boundary
/// survives division rounding (e.g. `0.3 / 0.1`).
const STEP_TOLERANCE: f64 = 1e-9;

/// Generates the observation points for `bounds`, `interval` apart on both axes.
///
/// Points are produced X-major (outer loop over X, inner over Y), both
/// ascending. A point is skipped when its exact `(x, y)` pair equals the
/// exact coordinates of a charge.
pub fn generate(
    bounds: PlotBounds,
    interval: f64,
    charges: &[Charge],
) -> Result<Vec<ObservationPoint>> {
    let steps = step_count(bounds, interval)?;
    let occupied: HashSet<(u64, u64)> = charges
        .iter()
        .map(|charge| coordinate_key(charge.x, charge.y))
        .collect();

    let axis: Vec<f64> = (0..=steps)
        .map(|i| bounds.min() + i as f64 * interval)
        .collect();

    let points: Vec<ObservationPoint> = axis
        .iter()
        .flat_map(|&x| axis.iter().map(move |&y| ObservationPoint::new(x, y)))
        .filter(|point| !occupied.contains(&coordinate_key(point.x, point.y)))
        .collect();

    debug!(
        "sampled {} of {} grid cells ({} per axis)",
        points.len(),
        axis.len() * axis.len(),
        axis.len()
    );

    Ok(points)
}

/// Number of whole intervals that fit in the bounds.
fn step_count(bounds: PlotBounds, interval: f64) -> Result<u64> {
    if !interval.is_finite() || interval <= 0.0 {
        return Err(Error::InvalidConfiguration(format!(
            "sampling interval must be a positive number, got {interval}"
        )));
    }

    let quotient = bounds.span() / interval;
    let steps = (quotient * (1.0 + STEP_TOLERANCE)).floor();
    if !steps.is_finite() || steps >= u32::MAX as f64 {
        return Err(Error::InvalidConfiguration(format!(
            "interval {interval} is too small for bounds [{}, {}]",
            bounds.min(),
            bounds.max()
        )));
    }

    Ok(steps as u64)
}

/// Hash key matching IEEE equality: `-0.0` and `0.0` share a key.
fn coordinate_key(x: f64, y: f64) -> (u64, u64) {
    ((x + 0.0).to_bits(), (y + 0.0).to_bits())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
