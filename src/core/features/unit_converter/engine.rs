//! Conversion engine
//!
//! `value -> base -> target` through the unit strategies. Linear categories go
//! through their base unit, temperature goes through kelvin.

use super::catalog::UnitId;
use super::strategy::UnitScale;
use crate::shared::error::{ConversionError, ConversionResult};

/// Convert `value` from one unit to another of the same category
pub fn convert(value: f64, from_unit: UnitId, to_unit: UnitId) -> ConversionResult<f64> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidNumericInput(value.to_string()));
    }

    // Same unit: exact identity, no round trip through the base
    if from_unit == to_unit {
        return Ok(value);
    }

    if from_unit.category() != to_unit.category() {
        tracing::warn!(from = %from_unit, to = %to_unit, "rejected cross-category conversion");
        return Err(ConversionError::CategoryMismatch {
            from: from_unit.to_string(),
            to: to_unit.to_string(),
        });
    }

    let base = from_unit.strategy().to_base(value);
    let result = to_unit.strategy().from_base(base);

    tracing::debug!(value, from = %from_unit, to = %to_unit, base, result, "converted");

    Ok(result)
}

/// String-keyed entry point for callers holding raw unit ids
pub fn convert_str(value: f64, from_unit: &str, to_unit: &str) -> ConversionResult<f64> {
    let from = from_unit.parse::<UnitId>()?;
    let to = to_unit.parse::<UnitId>()?;
    convert(value, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::unit_converter::catalog::Category;

    fn assert_close(actual: f64, expected: f64) {
        let scale = expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= 1e-9 * scale,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_known_conversions() {
        assert_eq!(convert(1.0, UnitId::Kilometer, UnitId::Meter).unwrap(), 1000.0);
        assert_close(convert(1.0, UnitId::Gallon, UnitId::Liter).unwrap(), 3.78541178);
        assert_eq!(convert(1024.0, UnitId::Byte, UnitId::Kilobyte).unwrap(), 1.0);
        assert_eq!(convert(1.0, UnitId::Hour, UnitId::Second).unwrap(), 3600.0);
        assert_eq!(convert(1.0, UnitId::Meter, UnitId::Kilometer).unwrap(), 0.001);
    }

    #[test]
    fn test_temperature_fixed_points() {
        assert_eq!(convert(0.0, UnitId::Celsius, UnitId::Fahrenheit).unwrap(), 32.0);
        assert_eq!(convert(100.0, UnitId::Celsius, UnitId::Fahrenheit).unwrap(), 212.0);
        assert_eq!(convert(0.0, UnitId::Celsius, UnitId::Kelvin).unwrap(), 273.15);
        assert_eq!(convert(212.0, UnitId::Fahrenheit, UnitId::Celsius).unwrap(), 100.0);
        assert_close(convert(0.0, UnitId::Kelvin, UnitId::Fahrenheit).unwrap(), -459.67);
    }

    #[test]
    fn test_identity_is_exact() {
        for unit in UnitId::all() {
            for x in [0.0, 1.0, -40.0, 0.1, 123456.789, 1e-12] {
                assert_eq!(convert(x, unit, unit).unwrap(), x, "{unit}");
            }
        }
    }

    #[test]
    fn test_round_trip_all_linear_pairs() {
        for category in Category::ALL {
            for &u in category.units() {
                for &v in category.units() {
                    for x in [1.0, 42.5, -3.25, 1e6] {
                        let there = convert(x, u, v).unwrap();
                        let back = convert(there, v, u).unwrap();
                        assert!(
                            (back - x).abs() <= 1e-9 * x.abs(),
                            "{x} {u} -> {v} -> {u} gave {back}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_base_unit_property() {
        for unit in UnitId::all() {
            if let (Some(base), Some(factor)) = (unit.category().base_unit(), unit.factor()) {
                assert_eq!(convert(1.0, unit, base).unwrap(), factor, "{unit}");
            }
        }
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            convert_str(1.0, "furlong", "meter"),
            Err(ConversionError::UnknownUnit("furlong".to_string()))
        );
        assert_eq!(
            convert_str(1.0, "meter", "parsec"),
            Err(ConversionError::UnknownUnit("parsec".to_string()))
        );
    }

    #[test]
    fn test_cross_category_rejected() {
        assert!(matches!(
            convert(1.0, UnitId::Meter, UnitId::Gram),
            Err(ConversionError::CategoryMismatch { .. })
        ));
        assert!(matches!(
            convert(1.0, UnitId::Celsius, UnitId::Meter),
            Err(ConversionError::CategoryMismatch { .. })
        ));
    }

    #[test]
    fn test_non_finite_input_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                convert(bad, UnitId::Meter, UnitId::Meter),
                Err(ConversionError::InvalidNumericInput(_))
            ));
        }
    }

    #[test]
    fn test_convert_str_matches_typed() {
        assert_eq!(
            convert_str(5.0, "square_kilometer", "hectare").unwrap(),
            convert(5.0, UnitId::SquareKilometer, UnitId::Hectare).unwrap()
        );
    }
}
