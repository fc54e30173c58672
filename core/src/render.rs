//! The **abstraction** between the physics and whatever produces the image.
//!
//! [`compose`] turns charges and observation points into a [`Scene`] of plain
//! drawing primitives (markers and segments). A [`PlotSink`] consumes that
//! scene and writes the output file. The shipped sink is
//! [`raster::RasterSink`]; tests and other front ends can supply their own.

use std::path::Path;

use coulomb_common::error::{Error, Result};
use coulomb_common::field::{Charge, FieldVector, ObservationPoint, PlotBounds};
use rayon::prelude::*;
use tracing::debug;

use crate::field::{net_field, normalized_direction};
use crate::palette::{CHARGE_RADIUS_PT, OBSERVATION_RADIUS_PT, Palette, Rgba};

pub mod raster;

pub const TITLE: &str = "Electric Field Vectors";

/// A filled circle in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub radius_pt: f64,
    pub color: Rgba,
}

/// A straight line in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: Rgba,
    /// Net field magnitude the segment stands for.
    pub magnitude: f64,
}

/// Everything a sink needs to draw one plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bounds: PlotBounds,
    /// Charges first, then observation points.
    pub markers: Vec<Marker>,
    /// One per observation point, in grid order.
    pub segments: Vec<Segment>,
}

impl Scene {
    /// Strongest net field magnitude among the segments.
    pub fn peak_magnitude(&self) -> f64 {
        self.segments
            .iter()
            .map(|segment| segment.magnitude)
            .fold(0.0, f64::max)
    }
}

/// Produces the output file for a scene.
pub trait PlotSink {
    fn draw(&self, scene: &Scene, output: &Path) -> Result<()>;
}

/// Builds the scene for `charges` sampled at `points`.
///
/// Every segment starts at its observation point and has unit length along
/// the net field, so arrows show direction only; strength is carried by the
/// color. The per-point field is computed in parallel, collected back in
/// grid order.
pub fn compose(
    charges: &[Charge],
    points: &[ObservationPoint],
    bounds: PlotBounds,
    palette: &Palette,
) -> Scene {
    let charge_markers = charges.iter().map(|charge| Marker {
        x: charge.x,
        y: charge.y,
        radius_pt: CHARGE_RADIUS_PT,
        color: palette.charge(charge),
    });
    let point_markers = points.iter().map(|point| Marker {
        x: point.x,
        y: point.y,
        radius_pt: OBSERVATION_RADIUS_PT,
        color: palette.observation(),
    });
    let markers: Vec<Marker> = charge_markers.chain(point_markers).collect();

    let segments: Vec<Segment> = points
        .par_iter()
        .map(|&point| {
            let field: FieldVector = net_field(charges, point);
            field_segment(point, field, palette)
        })
        .collect();

    debug!(
        "composed scene with {} markers and {} segments",
        markers.len(),
        segments.len()
    );

    Scene {
        title: TITLE.to_string(),
        x_label: "X".to_string(),
        y_label: "Y".to_string(),
        bounds,
        markers,
        segments,
    }
}

fn field_segment(point: ObservationPoint, field: FieldVector, palette: &Palette) -> Segment {
    let magnitude = field.magnitude();
    let direction = normalized_direction(field);
    Segment {
        from: (point.x, point.y),
        to: (point.x + direction.ex, point.y + direction.ey),
        color: palette.field(magnitude),
        magnitude,
    }
}

/// Composes the scene and hands it to `sink`.
///
/// A net field beyond the `f64` range has no direction to draw, so the scene
/// is refused before anything is written.
pub fn render(
    charges: &[Charge],
    points: &[ObservationPoint],
    bounds: PlotBounds,
    output: &Path,
    palette: &Palette,
    sink: &dyn PlotSink,
) -> Result<Scene> {
    let scene = compose(charges, points, bounds, palette);
    if let Some(segment) = scene.segments.iter().find(|s| !s.magnitude.is_finite()) {
        return Err(Error::InvalidConfiguration(format!(
            "net field at ({}, {}) exceeds the f64 range, use smaller charge values",
            segment.from.0, segment.from.1
        )));
    }
    sink.draw(&scene, output)?;
    Ok(scene)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
