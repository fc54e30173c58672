//! # Field Calculator
//!
//! Coulomb's law for a single charge and the superposition over a charge set.

use coulomb_common::field::{Charge, FieldVector, ObservationPoint};

pub use coulomb_common::field::COULOMB_CONSTANT;

/// Field produced by `charge` at `at`.
///
/// For a positive charge the vector points from the charge towards the
/// observation point; otherwise it points from the observation point towards
/// the charge. The direction is picked before the angle is taken, so a zero
/// charge still has a well-defined (zero length) vector.
///
/// An observation point sitting on the charge contributes nothing.
pub fn field_from(charge: &Charge, at: ObservationPoint) -> FieldVector {
    let (dx, dy) = if charge.is_positive() {
        (at.x - charge.x, at.y - charge.y)
    } else {
        (charge.x - at.x, charge.y - at.y)
    };

    let r = (dx * dx + dy * dy).sqrt();
    if r == 0.0 {
        return FieldVector::ZERO;
    }

    let direction = dy.atan2(dx);
    let strength = (COULOMB_CONSTANT * (charge.magnitude / (r * r))).abs();

    FieldVector::new(strength * direction.cos(), strength * direction.sin())
}

/// Superposed field of every charge at `at`.
pub fn net_field(charges: &[Charge], at: ObservationPoint) -> FieldVector {
    charges.iter().map(|charge| field_from(charge, at)).sum()
}

/// Unit vector along `field`, or `field` itself when its magnitude is zero.
pub fn normalized_direction(field: FieldVector) -> FieldVector {
    let magnitude = field.magnitude();
    if magnitude == 0.0 {
        return field;
    }
    FieldVector::new(field.ex / magnitude, field.ey / magnitude)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    const Q: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_positive_charge_points_away() {
        let field = field_from(&Charge::new(0.0, 0.0, Q), ObservationPoint::new(1.0, 0.0));
        assert!(field.ex > 0.0);
        assert_eq!(field.ey, 0.0);
    }

    #[test]
    fn test_negative_charge_points_towards() {
        let field = field_from(&Charge::new(0.0, 0.0, -Q), ObservationPoint::new(1.0, 0.0));
        assert!(field.ex < 0.0);
        assert!(field.ey.abs() < 1e-12 * field.ex.abs());
    }

    #[test]
    fn test_zero_charge_has_zero_length() {
        let field = field_from(&Charge::new(0.0, 0.0, 0.0), ObservationPoint::new(2.0, 3.0));
        assert_eq!(field.magnitude(), 0.0);
    }

    #[test]
    fn test_inverse_square_on_axis() {
        let charge = Charge::new(0.0, 0.0, Q);
        for r in [0.5, 1.0, 2.0, 3.0, 10.0] {
            let field = field_from(&charge, ObservationPoint::new(r, 0.0));
            assert_eq!(field.ex, COULOMB_CONSTANT * (Q / (r * r)));
            assert_eq!(field.ey, 0.0);
        }
    }

    #[test]
    fn test_inverse_square_off_axis_and_monotone() {
        let charge = Charge::new(1.0, 1.0, -2.0 * Q);
        let mut previous = f64::INFINITY;
        for step in 1..=20 {
            let r = step as f64 * 0.75;
            let at = ObservationPoint::new(1.0 + r * 0.6, 1.0 + r * 0.8);
            let magnitude = field_from(&charge, at).magnitude();

            let expected = COULOMB_CONSTANT * (2.0 * Q) / (r * r);
            assert!(close(magnitude, expected), "r = {r}: {magnitude} != {expected}");
            assert!(magnitude < previous);
            previous = magnitude;
        }
    }

    #[test]
    fn test_huge_charge_stays_finite_at_distance() {
        let field = field_from(&Charge::new(0.0, 0.0, 1e300), ObservationPoint::new(10.0, 0.0));
        assert!(field.ex.is_finite() && field.ey.is_finite());
        assert!(close(field.ex, COULOMB_CONSTANT * 1e298));
    }

    #[test]
    fn test_zero_distance_is_skipped() {
        let charge = Charge::new(3.0, 4.0, Q);
        let field = field_from(&charge, ObservationPoint::new(3.0, 4.0));
        assert_eq!(field, FieldVector::ZERO);
        assert!(field.ex.is_finite() && field.ey.is_finite());
    }

    #[test]
    fn test_symmetric_dipole_cancels_along_bisector() {
        // Charges on the x axis, observation point on the perpendicular bisector.
        let charges = [Charge::new(-1.0, 0.0, Q), Charge::new(1.0, 0.0, -Q)];
        for y in [0.5, 1.0, 4.0] {
            let field = net_field(&charges, ObservationPoint::new(0.0, y));
            assert!(
                field.ey.abs() <= 1e-9 * field.ex.abs(),
                "bisector component {} at y = {y}",
                field.ey
            );
            // Both contributions point from + towards -.
            assert!(field.ex > 0.0);
        }
    }

    #[test]
    fn test_superposition_is_linear() {
        let c1 = Charge::new(0.0, 0.0, Q);
        let c2 = Charge::new(4.0, 1.0, -3.0 * Q);
        let at = ObservationPoint::new(2.0, 5.0);

        let net = net_field(&[c1, c2], at);
        let sum = field_from(&c1, at) + field_from(&c2, at);
        assert_eq!(net, sum);
    }

    #[test]
    fn test_net_field_skips_coincident_charge() {
        let at = ObservationPoint::new(1.0, 1.0);
        let other = Charge::new(3.0, 1.0, Q);
        let net = net_field(&[Charge::new(1.0, 1.0, Q), other], at);
        assert_eq!(net, field_from(&other, at));
    }

    #[test]
    fn test_net_field_without_charges() {
        assert!(net_field(&[], ObservationPoint::new(1.0, 2.0)).is_zero());
    }

    #[test]
    fn test_normalized_direction() {
        let unit = normalized_direction(FieldVector::new(3.0e9, -4.0e9));
        assert!(close(unit.ex, 0.6));
        assert!(close(unit.ey, -0.8));
        assert!(close(unit.magnitude(), 1.0));

        assert_eq!(normalized_direction(FieldVector::ZERO), FieldVector::ZERO);
    }
}
