//! # Plot Bounds
//!
//! The square region `[min, max] × [min, max]` that is both sampled and drawn.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    min: f64,
    max: f64,
}

impl PlotBounds {
    /// Both ends must be finite and `min < max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidConfiguration(format!(
                "plot bounds must be finite, got [{min}, {max}]"
            )));
        }
        if min >= max {
            return Err(Error::InvalidConfiguration(format!(
                "plot maximum ({max}) must be greater than the minimum ({min})"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.min..=self.max).contains(&x) && (self.min..=self.max).contains(&y)
    }
}
