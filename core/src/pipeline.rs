//! Runs a collected [`Request`] through sampling and rendering.

use std::path::PathBuf;

use coulomb_common::config::Config;
use coulomb_common::error::Result;
use coulomb_common::field::PlotBounds;
use coulomb_common::input::Request;
use tracing::{info, warn};

use crate::grid;
use crate::palette::Palette;
use crate::render::{self, PlotSink};

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSummary {
    pub charges: usize,
    pub observation_points: usize,
    /// Strongest net field magnitude among the observation points, in N/C.
    pub peak_magnitude: f64,
    pub output: PathBuf,
}

/// Samples the grid for `request`, computes the field and hands the scene to `sink`.
///
/// Configuration problems are reported before any field is computed; sink
/// failures after.
pub fn plot_field(request: &Request, cfg: &Config, sink: &dyn PlotSink) -> Result<PlotSummary> {
    cfg.validate()?;
    let bounds = PlotBounds::new(cfg.min, request.max_value)?;

    for charge in &request.charges {
        if !bounds.contains(charge.x, charge.y) {
            warn!("Charge {charge} lies outside the plot and will not be visible");
        }
    }

    let points = grid::generate(bounds, cfg.interval, &request.charges)?;
    info!(
        "Sampling {} observation points over [{}, {}]",
        points.len(),
        bounds.min(),
        bounds.max()
    );

    let palette = Palette::new(cfg.reference_scale);
    let scene = render::render(
        &request.charges,
        &points,
        bounds,
        &request.output,
        &palette,
        sink,
    )?;

    Ok(PlotSummary {
        charges: request.charges.len(),
        observation_points: points.len(),
        peak_magnitude: scene.peak_magnitude(),
        output: request.output.clone(),
    })
}
