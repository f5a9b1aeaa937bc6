use super::catalog::{Category, UnitId, SECONDARY_COLOR};
use super::format::{display_name, format_with, Precision};
use crate::shared::types::ComparisonData;

/// Shape the data for a two-bar chart of the input and converted values.
///
/// No rendering happens here; any charting layer can consume the result.
pub fn build_comparison(
    value: f64,
    from_unit: UnitId,
    to_unit: UnitId,
    result: f64,
    category: Category,
) -> ComparisonData {
    let from_label = display_name(from_unit.as_str());
    let to_label = display_name(to_unit.as_str());

    ComparisonData {
        title: format!("{} Conversion: {} to {}", category.name(), from_label, to_label),
        bar_text: [
            format!("{} {}", format_with(value, Precision::Compact), from_label),
            format!("{} {}", format_with(result, Precision::Compact), to_label),
        ],
        labels: [from_label, to_label],
        values: [value, result],
        highlight_color: category.color().to_string(),
        secondary_color: SECONDARY_COLOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_comparison() {
        let data = build_comparison(1.0, UnitId::Meter, UnitId::Kilometer, 0.001, Category::Length);
        assert_eq!(data.labels, ["Meter".to_string(), "Kilometer".to_string()]);
        assert_eq!(data.values, [1.0, 0.001]);
        assert_eq!(data.highlight_color, "#FF5757");
        assert_eq!(data.secondary_color, "#888888");
        assert_eq!(data.title, "Length Conversion: Meter to Kilometer");
        assert_eq!(data.bar_text[1], "0.001 Kilometer");
    }

    #[test]
    fn test_comparison_uses_category_color() {
        let data = build_comparison(
            2.0,
            UnitId::SquareFoot,
            UnitId::SquareInch,
            288.0,
            Category::Area,
        );
        assert_eq!(data.highlight_color, Category::Area.color());
        assert_eq!(data.bar_text[0], "2 Square Foot");
    }
}
