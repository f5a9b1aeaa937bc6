use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::core::features::unit_converter::{Category, UnitId};
use crate::core::history::ConversionRecord;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertUnitsRequest {
    pub amount: f64,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertUnitsResponse {
    pub result: f64,
    pub formatted_result: String,
    pub from_unit: UnitId,
    pub to_unit: UnitId,
    pub category: Category,
    pub comparison: ComparisonData,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParseUnitResponse {
    pub amount: f64,
    pub unit: UnitId,
    pub category: Category,
}

// Rich Unit Data Transfer Object for frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitDTO {
    pub id: UnitId,          // Canonical id (e.g., "square_meter")
    pub label: String,       // Display name (e.g., "Square Meter")
    pub category: Category,
}

impl From<UnitId> for UnitDTO {
    fn from(unit: UnitId) -> Self {
        Self {
            id: unit,
            label: crate::core::features::unit_converter::display_name(unit.as_str()),
            category: unit.category(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryDTO {
    pub name: String,
    pub symbol: String,
    pub color: String,
    pub units: Vec<UnitDTO>,
}

impl From<Category> for CategoryDTO {
    fn from(category: Category) -> Self {
        Self {
            name: category.name().to_string(),
            symbol: category.symbol().to_string(),
            color: category.color().to_string(),
            units: category.units().iter().copied().map(UnitDTO::from).collect(),
        }
    }
}

/// Two-bar chart data for any charting layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ComparisonData {
    pub title: String,
    pub labels: [String; 2],
    pub values: [f64; 2],
    /// Text drawn on each bar, compact precision
    pub bar_text: [String; 2],
    pub highlight_color: String,
    pub secondary_color: String,
}

/// One history row ready for a table
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryRow {
    pub id: String,
    pub time: String,
    pub category: String,
    pub conversion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryResponse {
    pub entries: Vec<ConversionRecord>,
    pub rows: Vec<HistoryRow>,
}

/// Formula and per-unit factor lines shown under the result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConversionDetails {
    pub formula: String,
    pub factor: String,
}

/// Full view of the converter session
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSnapshot {
    pub category: Category,
    pub symbol: String,
    pub input_value: f64,
    pub from_unit: UnitId,
    pub to_unit: UnitId,
    pub result: f64,
    pub formatted_result: String,
    pub details: ConversionDetails,
    pub comparison: ComparisonData,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
}
