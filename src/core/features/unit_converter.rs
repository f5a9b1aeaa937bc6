//! Unit converter feature
//!
//! - `catalog`: categories, unit ids and scale factors
//! - `strategy`: linear vs temperature normalization
//! - `engine`: the `convert` entry points
//! - `format`: unit labels and significant-digit formatting
//! - `comparison`: chart data for a conversion
//! - `parsing`: free-text amount/unit extraction

pub mod catalog;
pub mod comparison;
pub mod engine;
pub mod format;
pub mod parsing;
pub mod strategy;

pub use catalog::{color_of, list_categories, symbol_of, units_of, Category, UnitId, SECONDARY_COLOR};
pub use comparison::build_comparison;
pub use engine::{convert, convert_str};
pub use format::{display_name, format_input, format_number, format_with, Precision};
pub use parsing::{normalize_unit, parse_conversion_query, parse_unit_from_text, ConversionQuery};
pub use strategy::{ConversionStrategy, LinearUnit, TemperatureUnit, UnitScale};
