//! Free-text parsing: "12 km", "3,5 meters", "12 km to miles"

use once_cell::sync::Lazy;
use regex::Regex;

use super::catalog::UnitId;
use crate::shared::error::{AppError, AppResult};

const ERR_CANNOT_PARSE_UNIT: &str = "Could not parse unit from text";

/// Resolve a unit alias (canonical id, plural, abbreviation) to a unit
pub fn normalize_unit(unit: &str) -> Option<UnitId> {
    use UnitId::*;
    let unit_lower = unit.trim().to_lowercase().replace(['-', ' '], "_");
    if let Ok(canonical) = unit_lower.parse::<UnitId>() {
        return Some(canonical);
    }
    let unit = match unit_lower.as_str() {
        // Length
        "m" | "meters" | "metre" | "metres" => Meter,
        "km" | "kilometers" | "kilometre" | "kilometres" => Kilometer,
        "cm" | "centimeters" | "centimetre" | "centimetres" => Centimeter,
        "mm" | "millimeters" | "millimetre" | "millimetres" => Millimeter,
        "mi" | "miles" => Mile,
        "yd" | "yards" => Yard,
        "ft" | "feet" | "'" => Foot,
        "in" | "inches" | "\"" => Inch,
        // Mass
        "g" | "grams" => Gram,
        "kg" | "kilograms" => Kilogram,
        "mg" | "milligrams" => Milligram,
        "lb" | "lbs" | "pounds" => Pound,
        "oz" | "ounces" => Ounce,
        "t" | "tons" | "tonne" | "tonnes" => Ton,
        // Volume
        "l" | "liters" | "litre" | "litres" => Liter,
        "ml" | "milliliters" | "millilitre" | "millilitres" => Milliliter,
        "m3" | "m³" | "cubic_meters" => CubicMeter,
        "gal" | "gallons" => Gallon,
        "qt" | "quarts" => Quart,
        "pt" | "pints" => Pint,
        "cups" => Cup,
        "fl_oz" | "floz" | "fluid_ounces" => FluidOunce,
        // Temperature
        "k" => Kelvin,
        "c" | "°c" => Celsius,
        "f" | "°f" => Fahrenheit,
        // Time
        "s" | "sec" | "secs" | "seconds" => Second,
        "min" | "mins" | "minutes" => Minute,
        "h" | "hr" | "hrs" | "hours" => Hour,
        "d" | "days" => Day,
        "wk" | "weeks" => Week,
        "months" => Month,
        "yr" | "yrs" | "years" => Year,
        // Speed
        "m/s" | "mps" | "meters_per_second" => MeterPerSecond,
        "km/h" | "kmh" | "kph" | "kilometers_per_hour" => KilometerPerHour,
        "mph" | "miles_per_hour" => MilePerHour,
        "kn" | "kt" | "knots" => Knot,
        // Area
        "m2" | "m²" | "square_meters" => SquareMeter,
        "km2" | "km²" | "square_kilometers" => SquareKilometer,
        "ha" | "hectares" => Hectare,
        "ac" | "acres" => Acre,
        "ft2" | "ft²" | "sq_ft" | "square_feet" => SquareFoot,
        "in2" | "in²" | "sq_in" | "square_inches" => SquareInch,
        // Data
        "bits" => Bit,
        "b" | "bytes" => Byte,
        "kb" | "kilobytes" => Kilobyte,
        "mb" | "megabytes" => Megabyte,
        "gb" | "gigabytes" => Gigabyte,
        "tb" | "terabytes" => Terabyte,
        // Energy
        "j" | "joules" => Joule,
        "kj" | "kilojoules" => Kilojoule,
        "cal" | "calories" => Calorie,
        "kcal" | "kilocalories" => Kilocalorie,
        "wh" | "watt_hours" => WattHour,
        "kwh" | "kilowatt_hours" => KilowattHour,
        // Pressure
        "pa" | "pascals" => Pascal,
        "kpa" | "kilopascals" => Kilopascal,
        "bars" => Bar,
        "atm" | "atmospheres" => Atmosphere,
        _ => return None,
    };
    Some(unit)
}

// Patterns are compile-time constants; a failure here is a programming error
static RE_NUMBER_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?(?:\d+(?:\.\d+)?|\.\d+)(?:[eE][+-]?\d+)?)\s*(.+)$")
        .expect("Failed to compile number-unit pattern")
});

static RE_UNIT_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s*([+-]?(?:\d+(?:\.\d+)?|\.\d+)(?:[eE][+-]?\d+)?)$")
        .expect("Failed to compile unit-number pattern")
});

static RE_TARGET_SPLIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:to|in|into)\b|->|=>")
        .expect("Failed to compile target separator pattern")
});

/// Parse an amount and source unit, e.g. "100m", "12 km", "3,5 meters", "km 12"
pub fn parse_unit_from_text(text: &str) -> AppResult<(f64, UnitId)> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Empty text".to_string()));
    }

    // Comma decimal separators become dots
    let normalized = text.replace(',', ".");

    if let Some(caps) = RE_NUMBER_UNIT.captures(&normalized) {
        if let (Ok(amount), Some(unit)) = (caps[1].parse::<f64>(), normalize_unit(&caps[2])) {
            tracing::debug!(amount, unit = %unit, text, "parsed number-unit");
            return Ok((amount, unit));
        }
    }

    if let Some(caps) = RE_UNIT_NUMBER.captures(&normalized) {
        if let (Some(unit), Ok(amount)) = (normalize_unit(&caps[1]), caps[2].parse::<f64>()) {
            tracing::debug!(amount, unit = %unit, text, "parsed unit-number");
            return Ok((amount, unit));
        }
    }

    tracing::debug!(text, "failed to parse unit");
    Err(AppError::Validation(format!("{}: {}", ERR_CANNOT_PARSE_UNIT, text)))
}

/// A full query: amount, source unit and target unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionQuery {
    pub amount: f64,
    pub from_unit: UnitId,
    pub to_unit: UnitId,
}

/// Parse "12 km to miles", "5 kg in lb", "100 c -> f"
pub fn parse_conversion_query(text: &str) -> AppResult<ConversionQuery> {
    let text = text.trim();
    let mut first_error = None;

    // "in" is both a separator and the inch alias, so try every split in order
    for separator in RE_TARGET_SPLIT.find_iter(text) {
        let source = &text[..separator.start()];
        let target = text[separator.end()..].trim();

        let parsed = parse_unit_from_text(source).and_then(|(amount, from_unit)| {
            let to_unit = normalize_unit(target).ok_or_else(|| {
                AppError::Validation(format!("{}: {}", ERR_CANNOT_PARSE_UNIT, target))
            })?;
            Ok(ConversionQuery {
                amount,
                from_unit,
                to_unit,
            })
        });

        match parsed {
            Ok(query) => return Ok(query),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    Err(first_error
        .unwrap_or_else(|| AppError::Validation(format!("Missing target unit: {}", text))))
}
