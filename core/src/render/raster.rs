//! [`PlotSink`] backed by `plotters`.
//!
//! The output extension picks the backend: `.svg` goes through the SVG
//! backend, `.png`, `.jpg`, `.jpeg` and `.bmp` through the bitmap backend.
//! Anything else is refused before a file is created.
//!
//! Text needs a font backend on bitmaps. Without the `ttf` feature the
//! bitmap path draws a plain frame around the plotting area and leaves out
//! the title, axis descriptions and tick labels. SVG output writes its text
//! as markup and always carries it.

use std::path::Path;

use coulomb_common::config::{CANVAS_INCHES, Config};
use coulomb_common::error::{Error, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use super::{PlotSink, Scene};
use crate::palette::Rgba;

const SUPPORTED: &str = ".png, .jpg, .jpeg, .bmp or .svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Bitmap,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("svg") => Ok(Self::Svg),
            Some("png" | "jpg" | "jpeg" | "bmp") => Ok(Self::Bitmap),
            Some(other) => Err(Error::render(
                path,
                format!("unsupported image format '.{other}', use {SUPPORTED}"),
            )),
            None => Err(Error::render(
                path,
                format!("missing file extension, use {SUPPORTED}"),
            )),
        }
    }

    /// Whether the backend can lay out glyphs in this build.
    pub fn draws_text(self) -> bool {
        self == Self::Svg || cfg!(feature = "ttf")
    }
}

/// Draws on a square canvas of [`CANVAS_INCHES`] at `dpi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterSink {
    dpi: u32,
}

impl RasterSink {
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.dpi)
    }

    pub fn pixels(&self) -> u32 {
        CANVAS_INCHES * self.dpi
    }

    fn points_to_pixels(&self, pt: f64) -> i32 {
        ((pt * self.dpi as f64 / 72.0).round() as i32).max(1)
    }

    fn paint<DB: DrawingBackend>(
        &self,
        root: DrawingArea<DB, Shift>,
        scene: &Scene,
        with_text: bool,
    ) -> std::result::Result<(), String> {
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let (min, max) = (scene.bounds.min(), scene.bounds.max());
        let pixels = self.pixels();
        let mut builder = ChartBuilder::on(&root);
        builder.margin(pixels / 40);
        if with_text {
            builder
                .caption(
                    &scene.title,
                    ("sans-serif", self.points_to_pixels(16.0) as f64).into_font(),
                )
                .x_label_area_size(pixels / 16)
                .y_label_area_size(pixels / 16);
        }
        let mut chart = builder
            .build_cartesian_2d(min..max, min..max)
            .map_err(|e| e.to_string())?;

        if with_text {
            chart
                .configure_mesh()
                .disable_mesh()
                .x_desc(scene.x_label.as_str())
                .y_desc(scene.y_label.as_str())
                .draw()
                .map_err(|e| e.to_string())?;
        } else {
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(min, min), (max, max)],
                    BLACK.stroke_width(1),
                )))
                .map_err(|e| e.to_string())?;
        }

        chart
            .draw_series(scene.markers.iter().map(|marker| {
                Circle::new(
                    (marker.x, marker.y),
                    self.points_to_pixels(marker.radius_pt),
                    backend_color(marker.color).filled(),
                )
            }))
            .map_err(|e| e.to_string())?;

        chart
            .draw_series(scene.segments.iter().map(|segment| {
                PathElement::new(
                    vec![segment.from, segment.to],
                    backend_color(segment.color).stroke_width(1),
                )
            }))
            .map_err(|e| e.to_string())?;

        root.present().map_err(|e| e.to_string())
    }
}

impl PlotSink for RasterSink {
    fn draw(&self, scene: &Scene, output: &Path) -> Result<()> {
        let format = ImageFormat::from_path(output)?;
        let size = (self.pixels(), self.pixels());
        debug!(
            "drawing {}x{} {:?} image to {}",
            size.0,
            size.1,
            format,
            output.display()
        );

        let with_text = format.draws_text();
        let painted = match format {
            ImageFormat::Svg => self.paint(
                SVGBackend::new(output, size).into_drawing_area(),
                scene,
                with_text,
            ),
            ImageFormat::Bitmap => self.paint(
                BitMapBackend::new(output, size).into_drawing_area(),
                scene,
                with_text,
            ),
        };

        painted.map_err(|reason| Error::render(output, reason))
    }
}

fn backend_color(color: Rgba) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, color.a as f64 / 255.0)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
