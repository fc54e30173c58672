//! # Point Charge Model
//!
//! A charge is read from a single line of user input: `x y q`, separated by
//! whitespace. Positive magnitudes are sources, everything else is a sink.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charge {
    pub x: f64,
    pub y: f64,
    /// Charge in coulombs. The sign picks the field direction.
    pub magnitude: f64,
}

impl Charge {
    pub fn new(x: f64, y: f64, magnitude: f64) -> Self {
        Self { x, y, magnitude }
    }

    pub fn is_positive(&self) -> bool {
        self.magnitude > 0.0
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+e} C at ({}, {})", self.magnitude, self.x, self.y)
    }
}

impl FromStr for Charge {
    type Err = Error;

    /// Parses `"x y q"`.
    ///
    /// Exactly three tokens are required and each must be a finite number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [x, y, q] = parts.as_slice() else {
            return Err(Error::input_format(
                "input format",
                format!(
                    "expected 3 values (x y charge), got {}",
                    parts.len()
                ),
            ));
        };

        Ok(Self {
            x: parse_finite(x, "position x")?,
            y: parse_finite(y, "position y")?,
            magnitude: parse_finite(q, "charge value")?,
        })
    }
}

/// Parses a token as an `f64`, rejecting NaN and infinities.
pub fn parse_finite(token: &str, field: &str) -> Result<f64, Error> {
    let value: f64 = token
        .parse()
        .map_err(|e| Error::input_format(field, format!("'{token}': {e}")))?;

    if !value.is_finite() {
        return Err(Error::input_format(
            field,
            format!("'{token}' is not a finite number"),
        ));
    }
    Ok(value)
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

    #[test]
    fn test_from_str_valid() {
        let charge = Charge::from_str("5 5 1e-9").unwrap();
        assert_eq!(charge, Charge::new(5.0, 5.0, 1e-9));
        assert!(charge.is_positive());

        // Surrounding and repeated whitespace is fine
        let charge = Charge::from_str("  -1.5\t2   -3e-6 ").unwrap();
        assert_eq!(charge, Charge::new(-1.5, 2.0, -3e-6));
        assert!(!charge.is_positive());
    }

    #[test]
    fn test_zero_magnitude_is_not_positive() {
        let charge = Charge::from_str("0 0 0").unwrap();
        assert!(!charge.is_positive());
    }

    #[test]
    fn test_from_str_wrong_token_count() {
        for input in ["", "1 2", "1 2 3 4"] {
            let err = Charge::from_str(input).unwrap_err();
            assert!(
                matches!(err, Error::InputFormat { ref field, .. } if field == "input format"),
                "unexpected error for {input:?}: {err}"
            );
        }
    }

    #[test]
    fn test_from_str_names_failing_field() {
        let cases = [
            ("a 2 3", "position x"),
            ("1 b 3", "position y"),
            ("1 2 c", "charge value"),
            ("1 2 NaN", "charge value"),
            ("inf 2 3", "position x"),
        ];
        for (input, expected) in cases {
            match Charge::from_str(input) {
                Err(Error::InputFormat { field, .. }) => assert_eq!(field, expected),
                other => panic!("unexpected result for {input:?}: {other:?}"),
            }
        }
    }
}
