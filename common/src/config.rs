use crate::error::{Error, Result};
use crate::field::COULOMB_CONSTANT;

/// Net field magnitude that maps to full color intensity.
///
/// A visual tuning value (`k / 100`) with no physical meaning; override it
/// through [`Config::reference_scale`].
pub const DEFAULT_REFERENCE_SCALE: f64 = COULOMB_CONSTANT / 100.0;

pub const DEFAULT_INTERVAL: f64 = 1.0;
pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_DPI: u32 = 100;

/// Edge length of the square canvas, in inches.
pub const CANVAS_INCHES: u32 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Spacing between neighbouring observation points on both axes.
    pub interval: f64,
    /// Lower bound of both axes. The upper bound is asked for interactively.
    pub min: f64,
    pub reference_scale: f64,
    /// Raster resolution of the canvas.
    pub dpi: u32,
    /// `1` hides headers and the summary, `2` also hides info-level logs.
    pub quiet: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            min: DEFAULT_MIN,
            reference_scale: DEFAULT_REFERENCE_SCALE,
            dpi: DEFAULT_DPI,
            quiet: 0,
            no_banner: false,
        }
    }
}

impl Config {
    /// Checks the options that do not depend on interactive input.
    pub fn validate(&self) -> Result<()> {
        if !self.interval.is_finite() || self.interval <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "sampling interval must be a positive number, got {}",
                self.interval
            )));
        }
        if !self.min.is_finite() {
            return Err(Error::InvalidConfiguration(format!(
                "plot minimum must be finite, got {}",
                self.min
            )));
        }
        if !self.reference_scale.is_finite() || self.reference_scale <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "reference scale must be a positive number, got {}",
                self.reference_scale
            )));
        }
        if self.dpi == 0 {
            return Err(Error::InvalidConfiguration("dpi must be at least 1".into()));
        }
        Ok(())
    }
}
