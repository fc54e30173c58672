use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationPoint {
    pub x: f64,
    pub y: f64,
}

impl ObservationPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for ObservationPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
