//! # Field Vector
//!
//! The electric field at a single observation point, in N/C.

use std::iter::Sum;
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldVector {
    pub ex: f64,
    pub ey: f64,
}

impl FieldVector {
    pub const ZERO: Self = Self { ex: 0.0, ey: 0.0 };

    pub fn new(ex: f64, ey: f64) -> Self {
        Self { ex, ey }
    }

    pub fn magnitude(&self) -> f64 {
        (self.ex * self.ex + self.ey * self.ey).sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.ex == 0.0 && self.ey == 0.0
    }
}

impl Add for FieldVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            ex: self.ex + rhs.ex,
            ey: self.ey + rhs.ey,
        }
    }
}

impl Sum for FieldVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
