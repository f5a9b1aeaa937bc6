//! Converter session
//!
//! Caller-owned state for one converter view: the selected category, units,
//! input value, last result and the conversion history. Every successful
//! recomputation appends one record to the history.

use crate::core::features::unit_converter::{
    build_comparison, convert, display_name, format_input, format_number, Category, UnitId,
};
use crate::core::history::{ConversionHistory, ConversionRecord};
use crate::shared::error::{ConversionError, ConversionResult};
use crate::shared::settings::UserPreferences;
use crate::shared::types::{ComparisonData, ConversionDetails, HistoryRow, SessionSnapshot};

#[derive(Debug, Clone)]
pub struct ConverterSession {
    category: Category,
    input_value: f64,
    from_unit: UnitId,
    to_unit: UnitId,
    result: f64,
    history: ConversionHistory,
}

impl ConverterSession {
    /// Session with the result computed and an empty history
    pub fn new(
        category: Category,
        from_unit: UnitId,
        to_unit: UnitId,
        input_value: f64,
    ) -> ConversionResult<Self> {
        ensure_in_category(category, from_unit)?;
        ensure_in_category(category, to_unit)?;
        let result = convert(input_value, from_unit, to_unit)?;

        Ok(Self {
            category,
            input_value,
            from_unit,
            to_unit,
            result,
            history: ConversionHistory::new(),
        })
    }

    pub fn from_preferences(preferences: &UserPreferences) -> ConversionResult<Self> {
        Self::new(
            preferences.default_category.parse()?,
            preferences.default_from_unit.parse()?,
            preferences.default_to_unit.parse()?,
            preferences.default_value,
        )
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn input_value(&self) -> f64 {
        self.input_value
    }

    pub fn from_unit(&self) -> UnitId {
        self.from_unit
    }

    pub fn to_unit(&self) -> UnitId {
        self.to_unit
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn history(&self) -> &ConversionHistory {
        &self.history
    }

    pub fn history_rows(&self) -> Vec<HistoryRow> {
        self.history.rows()
    }

    /// Convert the current input, store the result and record it.
    ///
    /// On failure the previous result and the history are left untouched.
    pub fn recompute(&mut self) -> ConversionResult<f64> {
        let result = convert(self.input_value, self.from_unit, self.to_unit)?;
        self.result = result;
        self.history.append(ConversionRecord::new(
            self.input_value,
            self.from_unit,
            result,
            self.to_unit,
        ));
        tracing::info!(
            category = %self.category,
            value = self.input_value,
            from = %self.from_unit,
            to = %self.to_unit,
            result,
            "conversion recorded"
        );
        Ok(result)
    }

    /// Convert an arbitrary unit pair and record it without changing the selection
    pub fn record_conversion(
        &mut self,
        value: f64,
        from_unit: UnitId,
        to_unit: UnitId,
    ) -> ConversionResult<f64> {
        let result = convert(value, from_unit, to_unit)?;
        self.history
            .append(ConversionRecord::new(value, from_unit, result, to_unit));
        Ok(result)
    }

    /// Switch category; selects its first two units
    pub fn select_category(&mut self, category: Category) -> ConversionResult<f64> {
        let units = category.units();
        let from_unit = units[0];
        let to_unit = units.get(1).copied().unwrap_or(from_unit);

        self.category = category;
        self.from_unit = from_unit;
        self.to_unit = to_unit;
        tracing::debug!(category = %category, "category changed");
        self.recompute()
    }

    pub fn select_category_by_name(&mut self, name: &str) -> ConversionResult<f64> {
        self.select_category(name.parse()?)
    }

    pub fn set_value(&mut self, value: f64) -> ConversionResult<f64> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidNumericInput(value.to_string()));
        }
        self.input_value = value;
        self.recompute()
    }

    /// Parse user-entered text as the new input value
    pub fn set_value_text(&mut self, text: &str) -> ConversionResult<f64> {
        let value = text
            .trim()
            .parse::<f64>()
            .map_err(|_| ConversionError::InvalidNumericInput(text.to_string()))?;
        self.set_value(value)
    }

    pub fn set_from_unit(&mut self, unit: UnitId) -> ConversionResult<f64> {
        ensure_in_category(self.category, unit)?;
        self.from_unit = unit;
        self.recompute()
    }

    pub fn set_to_unit(&mut self, unit: UnitId) -> ConversionResult<f64> {
        ensure_in_category(self.category, unit)?;
        self.to_unit = unit;
        self.recompute()
    }

    pub fn swap_units(&mut self) -> ConversionResult<f64> {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
        self.recompute()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Value of one `from_unit` in `to_unit`
    pub fn conversion_factor(&self) -> ConversionResult<f64> {
        convert(1.0, self.from_unit, self.to_unit)
    }

    pub fn details(&self) -> ConversionResult<ConversionDetails> {
        let from = display_name(self.from_unit.as_str());
        let to = display_name(self.to_unit.as_str());
        let factor = self.conversion_factor()?;

        Ok(ConversionDetails {
            formula: format!(
                "{} {} = {} {}",
                format_input(self.input_value),
                from,
                format_number(self.result),
                to
            ),
            factor: format!("1 {} = {} {}", from, format_number(factor), to),
        })
    }

    pub fn comparison(&self) -> ComparisonData {
        build_comparison(
            self.input_value,
            self.from_unit,
            self.to_unit,
            self.result,
            self.category,
        )
    }

    pub fn snapshot(&self) -> ConversionResult<SessionSnapshot> {
        Ok(SessionSnapshot {
            category: self.category,
            symbol: self.category.symbol().to_string(),
            input_value: self.input_value,
            from_unit: self.from_unit,
            to_unit: self.to_unit,
            result: self.result,
            formatted_result: format_number(self.result),
            details: self.details()?,
            comparison: self.comparison(),
        })
    }
}

impl Default for ConverterSession {
    /// Length, 1 meter to kilometer
    fn default() -> Self {
        Self {
            category: Category::Length,
            input_value: 1.0,
            from_unit: UnitId::Meter,
            to_unit: UnitId::Kilometer,
            result: 0.001,
            history: ConversionHistory::new(),
        }
    }
}

fn ensure_in_category(category: Category, unit: UnitId) -> ConversionResult<()> {
    if category.contains(unit) {
        Ok(())
    } else {
        Err(ConversionError::CategoryMismatch {
            from: unit.to_string(),
            to: category.name().to_string(),
        })
    }
}
