//! Conversion strategies with enum dispatch
//!
//! Every unit normalizes to its category's base quantity and back. Linear units
//! scale by a factor; temperature units apply an offset through kelvin.

use enum_dispatch::enum_dispatch;

use super::catalog::UnitId;

const KELVIN_OFFSET: f64 = 273.15;

#[enum_dispatch]
pub trait UnitScale {
    /// Value expressed in the category base quantity
    fn to_base(&self, value: f64) -> f64;

    /// Base quantity expressed in this unit
    fn from_base(&self, base: f64) -> f64;
}

/// Multiplicative unit: 1 unit = `factor` base units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearUnit {
    pub factor: f64,
}

impl UnitScale for LinearUnit {
    fn to_base(&self, value: f64) -> f64 {
        value * self.factor
    }

    fn from_base(&self, base: f64) -> f64 {
        base / self.factor
    }
}

/// Affine temperature scale, normalized to kelvin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl UnitScale for TemperatureUnit {
    fn to_base(&self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value + KELVIN_OFFSET,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
            TemperatureUnit::Kelvin => value,
        }
    }

    fn from_base(&self, kelvin: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => kelvin - KELVIN_OFFSET,
            TemperatureUnit::Fahrenheit => (kelvin - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => kelvin,
        }
    }
}

#[enum_dispatch(UnitScale)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionStrategy {
    LinearUnit,
    TemperatureUnit,
}

impl ConversionStrategy {
    pub fn is_linear(&self) -> bool {
        matches!(self, ConversionStrategy::LinearUnit(_))
    }
}

fn linear(factor: f64) -> ConversionStrategy {
    LinearUnit { factor }.into()
}

impl UnitId {
    /// Strategy used to normalize this unit; linear factors give 1 unit = factor × base
    pub fn strategy(self) -> ConversionStrategy {
        use UnitId::*;
        match self {
            // Length (base: meter)
            Meter => linear(1.0),
            Kilometer => linear(1000.0),
            Centimeter => linear(0.01),
            Millimeter => linear(0.001),
            Mile => linear(1609.344),
            Yard => linear(0.9144),
            Foot => linear(0.3048),
            Inch => linear(0.0254),

            // Mass (base: gram)
            Gram => linear(1.0),
            Kilogram => linear(1000.0),
            Milligram => linear(0.001),
            Pound => linear(453.59237),
            Ounce => linear(28.349523125),
            Ton => linear(1_000_000.0),

            // Volume (base: liter)
            Liter => linear(1.0),
            Milliliter => linear(0.001),
            CubicMeter => linear(1000.0),
            Gallon => linear(3.78541178),
            Quart => linear(0.946352946),
            Pint => linear(0.473176473),
            Cup => linear(0.2365882365),
            FluidOunce => linear(0.0295735296875),

            // Temperature (affine, through kelvin)
            Kelvin => TemperatureUnit::Kelvin.into(),
            Celsius => TemperatureUnit::Celsius.into(),
            Fahrenheit => TemperatureUnit::Fahrenheit.into(),

            // Time (base: second); month = 30 days, year = 365 days
            Second => linear(1.0),
            Minute => linear(60.0),
            Hour => linear(3600.0),
            Day => linear(86400.0),
            Week => linear(604800.0),
            Month => linear(2_592_000.0),
            Year => linear(31_536_000.0),

            // Speed (base: meter_per_second)
            MeterPerSecond => linear(1.0),
            KilometerPerHour => linear(0.277778),
            MilePerHour => linear(0.44704),
            Knot => linear(0.514444),

            // Area (base: square_meter)
            SquareMeter => linear(1.0),
            SquareKilometer => linear(1_000_000.0),
            Hectare => linear(10000.0),
            Acre => linear(4046.8564224),
            SquareFoot => linear(0.09290304),
            SquareInch => linear(0.00064516),

            // Data (base: byte)
            Bit => linear(0.125),
            Byte => linear(1.0),
            Kilobyte => linear(1024.0),
            Megabyte => linear(1_048_576.0),
            Gigabyte => linear(1_073_741_824.0),
            Terabyte => linear(1_099_511_627_776.0),

            // Energy (base: joule)
            Joule => linear(1.0),
            Kilojoule => linear(1000.0),
            Calorie => linear(4.184),
            Kilocalorie => linear(4184.0),
            WattHour => linear(3600.0),
            KilowattHour => linear(3_600_000.0),

            // Pressure (base: pascal)
            Pascal => linear(1.0),
            Kilopascal => linear(1000.0),
            Bar => linear(100_000.0),
            Atmosphere => linear(101_325.0),
            Psi => linear(6894.76),
        }
    }
}
