//! Unit catalog
//!
//! Fixed registry of the ten measurement categories and their units. Scale
//! factors come from each unit's conversion strategy. Everything here is
//! immutable; the string lookup table is built once on first use.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::strategy::ConversionStrategy;
use crate::shared::error::ConversionError;

/// Measurement categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Length,
    Mass,
    Volume,
    Temperature,
    Time,
    Speed,
    Area,
    Data,
    Energy,
    Pressure,
}

/// Color used for the secondary bar of every comparison chart
pub const SECONDARY_COLOR: &str = "#888888";

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Length,
        Category::Mass,
        Category::Volume,
        Category::Temperature,
        Category::Time,
        Category::Speed,
        Category::Area,
        Category::Data,
        Category::Energy,
        Category::Pressure,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Mass => "Mass",
            Category::Volume => "Volume",
            Category::Temperature => "Temperature",
            Category::Time => "Time",
            Category::Speed => "Speed",
            Category::Area => "Area",
            Category::Data => "Data",
            Category::Energy => "Energy",
            Category::Pressure => "Pressure",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Category::Length => "📏",
            Category::Mass => "⚖️",
            Category::Volume => "🧪",
            Category::Temperature => "🌡️",
            Category::Time => "⏱️",
            Category::Speed => "🚀",
            Category::Area => "📐",
            Category::Data => "💾",
            Category::Energy => "⚡",
            Category::Pressure => "🔄",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Category::Length => "#FF5757",
            Category::Mass => "#4CAF50",
            Category::Volume => "#2196F3",
            Category::Temperature => "#FF9800",
            Category::Time => "#9C27B0",
            Category::Speed => "#607D8B",
            Category::Area => "#795548",
            Category::Data => "#00BCD4",
            Category::Energy => "#FFEB3B",
            Category::Pressure => "#3F51B5",
        }
    }

    /// Units of this category in display order.
    ///
    /// The first two entries are the defaults selected on a category switch.
    pub fn units(self) -> &'static [UnitId] {
        use UnitId::*;
        match self {
            Category::Length => &[Meter, Kilometer, Centimeter, Millimeter, Mile, Yard, Foot, Inch],
            Category::Mass => &[Gram, Kilogram, Milligram, Pound, Ounce, Ton],
            Category::Volume => &[
                Liter, Milliliter, CubicMeter, Gallon, Quart, Pint, Cup, FluidOunce,
            ],
            Category::Temperature => &[Kelvin, Celsius, Fahrenheit],
            Category::Time => &[Second, Minute, Hour, Day, Week, Month, Year],
            Category::Speed => &[MeterPerSecond, KilometerPerHour, MilePerHour, Knot],
            Category::Area => &[
                SquareMeter, SquareKilometer, Hectare, Acre, SquareFoot, SquareInch,
            ],
            Category::Data => &[Bit, Byte, Kilobyte, Megabyte, Gigabyte, Terabyte],
            Category::Energy => &[Joule, Kilojoule, Calorie, Kilocalorie, WattHour, KilowattHour],
            Category::Pressure => &[Pascal, Kilopascal, Bar, Atmosphere, Psi],
        }
    }

    /// Unit with factor 1.0; temperature has no linear base
    pub fn base_unit(self) -> Option<UnitId> {
        match self {
            Category::Length => Some(UnitId::Meter),
            Category::Mass => Some(UnitId::Gram),
            Category::Volume => Some(UnitId::Liter),
            Category::Temperature => None,
            Category::Time => Some(UnitId::Second),
            Category::Speed => Some(UnitId::MeterPerSecond),
            Category::Area => Some(UnitId::SquareMeter),
            Category::Data => Some(UnitId::Byte),
            Category::Energy => Some(UnitId::Joule),
            Category::Pressure => Some(UnitId::Pascal),
        }
    }

    pub fn contains(self, unit: UnitId) -> bool {
        unit.category() == self
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    /// Case-insensitive category lookup ("length", "Length", " LENGTH ")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConversionError::UnknownCategory(s.to_string()))
    }
}

/// Catalog-unique unit identifier.
///
/// Serializes to the canonical snake_case id (`"square_meter"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UnitId {
    // Length
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Mile,
    Yard,
    Foot,
    Inch,
    // Mass
    Gram,
    Kilogram,
    Milligram,
    Pound,
    Ounce,
    Ton,
    // Volume
    Liter,
    Milliliter,
    CubicMeter,
    Gallon,
    Quart,
    Pint,
    Cup,
    FluidOunce,
    // Temperature
    Kelvin,
    Celsius,
    Fahrenheit,
    // Time
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
    // Speed
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
    Knot,
    // Area
    SquareMeter,
    SquareKilometer,
    Hectare,
    Acre,
    SquareFoot,
    SquareInch,
    // Data
    Bit,
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    // Energy
    Joule,
    Kilojoule,
    Calorie,
    Kilocalorie,
    WattHour,
    KilowattHour,
    // Pressure
    Pascal,
    Kilopascal,
    Bar,
    Atmosphere,
    Psi,
}

impl UnitId {
    /// Every unit, grouped by category in catalog order
    pub fn all() -> impl Iterator<Item = UnitId> {
        Category::ALL.into_iter().flat_map(|c| c.units().iter().copied())
    }

    pub fn as_str(self) -> &'static str {
        use UnitId::*;
        match self {
            Meter => "meter",
            Kilometer => "kilometer",
            Centimeter => "centimeter",
            Millimeter => "millimeter",
            Mile => "mile",
            Yard => "yard",
            Foot => "foot",
            Inch => "inch",
            Gram => "gram",
            Kilogram => "kilogram",
            Milligram => "milligram",
            Pound => "pound",
            Ounce => "ounce",
            Ton => "ton",
            Liter => "liter",
            Milliliter => "milliliter",
            CubicMeter => "cubic_meter",
            Gallon => "gallon",
            Quart => "quart",
            Pint => "pint",
            Cup => "cup",
            FluidOunce => "fluid_ounce",
            Kelvin => "kelvin",
            Celsius => "celsius",
            Fahrenheit => "fahrenheit",
            Second => "second",
            Minute => "minute",
            Hour => "hour",
            Day => "day",
            Week => "week",
            Month => "month",
            Year => "year",
            MeterPerSecond => "meter_per_second",
            KilometerPerHour => "kilometer_per_hour",
            MilePerHour => "mile_per_hour",
            Knot => "knot",
            SquareMeter => "square_meter",
            SquareKilometer => "square_kilometer",
            Hectare => "hectare",
            Acre => "acre",
            SquareFoot => "square_foot",
            SquareInch => "square_inch",
            Bit => "bit",
            Byte => "byte",
            Kilobyte => "kilobyte",
            Megabyte => "megabyte",
            Gigabyte => "gigabyte",
            Terabyte => "terabyte",
            Joule => "joule",
            Kilojoule => "kilojoule",
            Calorie => "calorie",
            Kilocalorie => "kilocalorie",
            WattHour => "watt_hour",
            KilowattHour => "kilowatt_hour",
            Pascal => "pascal",
            Kilopascal => "kilopascal",
            Bar => "bar",
            Atmosphere => "atmosphere",
            Psi => "psi",
        }
    }

    pub fn category(self) -> Category {
        use UnitId::*;
        match self {
            Meter | Kilometer | Centimeter | Millimeter | Mile | Yard | Foot | Inch => {
                Category::Length
            }
            Gram | Kilogram | Milligram | Pound | Ounce | Ton => Category::Mass,
            Liter | Milliliter | CubicMeter | Gallon | Quart | Pint | Cup | FluidOunce => {
                Category::Volume
            }
            Kelvin | Celsius | Fahrenheit => Category::Temperature,
            Second | Minute | Hour | Day | Week | Month | Year => Category::Time,
            MeterPerSecond | KilometerPerHour | MilePerHour | Knot => Category::Speed,
            SquareMeter | SquareKilometer | Hectare | Acre | SquareFoot | SquareInch => {
                Category::Area
            }
            Bit | Byte | Kilobyte | Megabyte | Gigabyte | Terabyte => Category::Data,
            Joule | Kilojoule | Calorie | Kilocalorie | WattHour | KilowattHour => {
                Category::Energy
            }
            Pascal | Kilopascal | Bar | Atmosphere | Psi => Category::Pressure,
        }
    }

    /// Scale factor to the category base unit: 1 unit = factor × base.
    ///
    /// `None` for the temperature units, which are affine.
    pub fn factor(self) -> Option<f64> {
        match self.strategy() {
            ConversionStrategy::LinearUnit(linear) => Some(linear.factor),
            ConversionStrategy::TemperatureUnit(_) => None,
        }
    }

    pub fn is_temperature(self) -> bool {
        self.category() == Category::Temperature
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical id → unit, built once at first lookup
static UNIT_REGISTRY: Lazy<HashMap<&'static str, UnitId>> = Lazy::new(|| {
    let registry: HashMap<&'static str, UnitId> = UnitId::all().map(|u| (u.as_str(), u)).collect();
    tracing::debug!(units = registry.len(), "unit registry initialized");
    registry
});

impl FromStr for UnitId {
    type Err = ConversionError;

    /// Exact canonical id lookup; aliases are handled by the text parser
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UNIT_REGISTRY
            .get(s)
            .copied()
            .ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
    }
}

/// All categories in display order
pub fn list_categories() -> &'static [Category] {
    &Category::ALL
}

/// Units of the named category
pub fn units_of(category: &str) -> Result<&'static [UnitId], ConversionError> {
    Ok(category.parse::<Category>()?.units())
}

pub fn symbol_of(category: &str) -> Result<&'static str, ConversionError> {
    Ok(category.parse::<Category>()?.symbol())
}

pub fn color_of(category: &str) -> Result<&'static str, ConversionError> {
    Ok(category.parse::<Category>()?.color())
}
