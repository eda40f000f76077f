//! Unit-of-measure conversion
//!
//! Conversions are looked up in a fixed table of ordered `(from, to)` pairs.
//! Every unit is exactly one hop away from the other units of its class,
//! and no entry crosses a class boundary.

use crate::contract::UnitOfMeasure::{self, *};

/// Bar to PSI factor
const PSI_PER_BAR: f64 = 14.5037738007218;

type Formula = fn(f64) -> f64;

static CONVERSIONS: [(UnitOfMeasure, UnitOfMeasure, Formula); 8] = [
    // Temperature
    (Celsius, Fahrenheit, |v| v * 9.0 / 5.0 + 32.0),
    (Fahrenheit, Celsius, |v| (v - 32.0) * 5.0 / 9.0),
    // Pressure
    (Bar, Psi, |v| v * PSI_PER_BAR),
    (Psi, Bar, |v| v / PSI_PER_BAR),
    // Rotation rate
    (Rpm, Rps, |v| v / 60.0),
    (Rps, Rpm, |v| v * 60.0),
    // Duration
    (Second, Minute, |v| v / 60.0),
    (Minute, Second, |v| v * 60.0),
];

/// Convert `value` from one unit to another.
///
/// Returns the value untouched when both units are equal and `None` when the
/// pair is not convertible. Never panics.
pub fn convert(value: f64, from: UnitOfMeasure, to: UnitOfMeasure) -> Option<f64> {
    if from == to {
        return Some(value);
    }

    CONVERSIONS
        .iter()
        .find(|(f, t, _)| *f == from && *t == to)
        .map(|(_, _, formula)| formula(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 7] = [-273.15, -40.0, 0.0, 1.0, 37.5, 212.0, 1.0e6];

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_identity_returns_value_unchanged() {
        for uom in UnitOfMeasure::ALL {
            for v in SAMPLES {
                assert_eq!(convert(v, uom, uom), Some(v));
            }
            let nan = convert(f64::NAN, uom, uom);
            assert!(nan.is_some_and(f64::is_nan));
        }
    }

    #[test]
    fn test_known_reference_points() {
        assert_eq!(convert(100.0, Celsius, Fahrenheit), Some(212.0));
        assert_eq!(convert(212.0, Fahrenheit, Celsius), Some(100.0));
        assert_eq!(convert(-40.0, Celsius, Fahrenheit), Some(-40.0));
        assert_eq!(convert(1.0, Bar, Psi), Some(14.5037738007218));
        assert_eq!(convert(120.0, Rpm, Rps), Some(2.0));
        assert_eq!(convert(2.0, Rps, Rpm), Some(120.0));
        assert_eq!(convert(90.0, Second, Minute), Some(1.5));
        assert_eq!(convert(1.5, Minute, Second), Some(90.0));
    }

    #[test]
    fn test_inverse_pairs_round_trip() {
        for (from, to, _) in CONVERSIONS.iter() {
            for v in SAMPLES {
                let there = convert(v, *from, *to).unwrap();
                let back = convert(there, *to, *from).unwrap();
                assert!(approx_eq(back, v), "{from} -> {to} -> {from}: {v} became {back}");
            }
        }
    }

    #[test]
    fn test_conversion_is_closed_within_class() {
        for from in UnitOfMeasure::ALL {
            for to in UnitOfMeasure::ALL {
                let same_class = from.class() == to.class();
                assert_eq!(convert(1.0, from, to).is_some(), same_class, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_cross_class_not_convertible_both_directions() {
        assert_eq!(convert(10.0, Celsius, Rpm), None);
        assert_eq!(convert(10.0, Rpm, Celsius), None);
        assert_eq!(convert(10.0, Bar, Second), None);
        assert_eq!(convert(10.0, Minute, Psi), None);
    }
}
