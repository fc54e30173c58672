//! # Field Model
//!
//! Plain values that flow through a run. None of them are mutated after
//! construction.
//!
//! * [`charge::Charge`]: a point charge, parsed from user input.
//! * [`point::ObservationPoint`]: a grid sample where the field is evaluated.
//! * [`vector::FieldVector`]: the field at one observation point.
//! * [`bounds::PlotBounds`]: the square region that is sampled and drawn.

pub mod bounds;
pub mod charge;
pub mod point;
pub mod vector;

pub use bounds::PlotBounds;
pub use charge::Charge;
pub use point::ObservationPoint;
pub use vector::FieldVector;

/// Coulomb's constant in N·m²/C².
pub const COULOMB_CONSTANT: f64 = 8.987551787e9;
