use serde::Serialize;

use crate::lookup_response::{EdnsField, EdnsValue, Record, RecordField};

/// Rendered in place of a missing record value.
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayCell {
    pub label: &'static str,
    pub value: String,
}

/// One table row, cells in projection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub cells: Vec<DisplayCell>,
}

impl DisplayRow {
    /// Projects `record` onto `fields`; unset values become [`PLACEHOLDER`].
    pub fn project(record: &Record, fields: &[RecordField]) -> Self {
        let cells = fields
            .iter()
            .map(|field| DisplayCell {
                label: field.label(),
                value: record.field(*field).unwrap_or(PLACEHOLDER).to_string(),
            })
            .collect();
        Self { cells }
    }

    pub fn values(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.value.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdnsItem {
    pub label: &'static str,
    pub value: String,
}

impl EdnsItem {
    pub fn new(field: EdnsField, value: &EdnsValue) -> Self {
        Self {
            label: field.label(),
            value: value.to_string(),
        }
    }
}
