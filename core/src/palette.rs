//! # Palette
//!
//! Purely presentational: how charges, grid markers and field segments are
//! colored and sized. Nothing here feeds back into the physics.

use coulomb_common::config::DEFAULT_REFERENCE_SCALE;
use coulomb_common::field::Charge;

/// 8-bit RGBA color, independent of any drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const RED: Self = Self::opaque(255, 0, 0);
    pub const BLUE: Self = Self::opaque(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

/// Marker radius of a charge, in points.
pub const CHARGE_RADIUS_PT: f64 = 5.0;
/// Marker radius of an observation point, in points.
pub const OBSERVATION_RADIUS_PT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    reference_scale: f64,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_SCALE)
    }
}

impl Palette {
    /// `reference_scale` is the net field magnitude drawn at full intensity.
    pub fn new(reference_scale: f64) -> Self {
        Self { reference_scale }
    }

    pub fn reference_scale(&self) -> f64 {
        self.reference_scale
    }

    pub fn charge(&self, charge: &Charge) -> Rgba {
        if charge.is_positive() {
            Rgba::RED
        } else {
            Rgba::BLUE
        }
    }

    pub fn observation(&self) -> Rgba {
        Rgba::BLACK
    }

    /// Blue for weak fields, shading to green as `magnitude` approaches the
    /// reference scale. A zero field is invisible.
    pub fn field(&self, magnitude: f64) -> Rgba {
        if magnitude == 0.0 {
            return Rgba::TRANSPARENT;
        }
        let intensity = (255.0 * (magnitude / self.reference_scale).min(1.0)) as u8;
        Rgba::opaque(0, intensity, 255 - intensity)
    }
}
