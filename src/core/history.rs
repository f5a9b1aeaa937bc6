use std::collections::VecDeque;

use chrono::Local;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::core::features::unit_converter::{display_name, format_with, Precision, UnitId};
use crate::shared::types::HistoryRow;

/// Maximum number of conversions kept in the log
pub const MAX_HISTORY_SIZE: usize = 10;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One completed conversion. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConversionRecord {
    pub id: String,
    pub timestamp: String,
    pub category: String,
    pub from_value: f64,
    pub from_unit: UnitId,
    pub to_value: f64,
    pub to_unit: UnitId,
}

impl ConversionRecord {
    /// Record stamped with the current local time
    pub fn new(from_value: f64, from_unit: UnitId, to_value: f64, to_unit: UnitId) -> Self {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::with_timestamp(timestamp, from_value, from_unit, to_value, to_unit)
    }

    pub fn with_timestamp(
        timestamp: String,
        from_value: f64,
        from_unit: UnitId,
        to_value: f64,
        to_unit: UnitId,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp,
            category: from_unit.category().name().to_string(),
            from_value,
            from_unit,
            to_value,
            to_unit,
        }
    }

    /// Compact row text: "1 Meter → 0.001 Kilometer"
    pub fn summary(&self) -> String {
        format!(
            "{} {} → {} {}",
            format_with(self.from_value, Precision::Compact),
            display_name(self.from_unit.as_str()),
            format_with(self.to_value, Precision::Compact),
            display_name(self.to_unit.as_str()),
        )
    }

    pub fn to_row(&self) -> HistoryRow {
        HistoryRow {
            id: self.id.clone(),
            time: self.timestamp.clone(),
            category: self.category.clone(),
            conversion: self.summary(),
        }
    }
}

/// Bounded, insertion-ordered conversion log.
///
/// Appending beyond [`MAX_HISTORY_SIZE`] evicts the oldest entries first.
#[derive(Debug, Clone, Default)]
pub struct ConversionHistory {
    entries: VecDeque<ConversionRecord>,
}

impl ConversionHistory {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_HISTORY_SIZE + 1),
        }
    }

    pub fn append(&mut self, record: ConversionRecord) {
        self.entries.push_back(record);
        while self.entries.len() > MAX_HISTORY_SIZE {
            if let Some(evicted) = self.entries.pop_front() {
                tracing::debug!(id = %evicted.id, "evicted oldest conversion from history");
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        tracing::info!("conversion history cleared");
    }

    /// Oldest first
    pub fn all(&self) -> impl ExactSizeIterator<Item = &ConversionRecord> + '_ {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<ConversionRecord> {
        self.entries.iter().cloned().collect()
    }

    pub fn rows(&self) -> Vec<HistoryRow> {
        self.entries.iter().map(ConversionRecord::to_row).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(value: f64) -> ConversionRecord {
        ConversionRecord::with_timestamp(
            "2024-01-01 00:00:00".to_string(),
            value,
            UnitId::Meter,
            value / 1000.0,
            UnitId::Kilometer,
        )
    }

    #[test]
    fn test_append_and_all() {
        let mut history = ConversionHistory::new();
        history.append(record(1.0));
        history.append(record(2.0));

        let values: Vec<f64> = history.all().map(|r| r.from_value).collect();
        assert_eq!(values, vec![1.0, 2.0]); // Oldest first
    }

    #[test]
    fn test_max_history_size() {
        let mut history = ConversionHistory::new();
        for i in 0..15 {
            history.append(record(i as f64));
        }

        assert_eq!(history.len(), MAX_HISTORY_SIZE);
        let values: Vec<f64> = history.all().map(|r| r.from_value).collect();
        let expected: Vec<f64> = (5..15).map(|i| i as f64).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn test_no_deduplication() {
        let mut history = ConversionHistory::new();
        history.append(record(1.0));
        history.append(record(1.0));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut history = ConversionHistory::new();
        history.append(record(1.0));
        history.append(record(2.0));
        assert_eq!(history.len(), 2);

        history.clear();

        assert!(history.is_empty());
    }

    #[test]
    fn test_record_category_and_summary() {
        let r = record(1.0);
        assert_eq!(r.category, "Length");
        assert_eq!(r.summary(), "1 Meter → 0.001 Kilometer");
        assert_eq!(r.to_row().conversion, r.summary());
    }

    #[test]
    fn test_record_timestamp_format() {
        let r = ConversionRecord::new(1.0, UnitId::Hour, 3600.0, UnitId::Second);
        assert!(chrono::NaiveDateTime::parse_from_str(&r.timestamp, TIMESTAMP_FORMAT).is_ok());
        assert!(Uuid::parse_str(&r.id).is_ok());
    }
}
