//! Generic tabular data as returned by the open-data API.
//!
//! Responses are arrays of homogeneous JSON row objects; [`Table`] keeps them
//! as-is so extra descriptive columns survive until projection.

use serde_json::{Map, Value};

/// An ordered set of rows, each a JSON object keyed by column name.
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Map<String, Value>>,
}

impl Table {
    pub fn new(rows: Vec<Map<String, Value>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Map<String, Value>] {
        &self.rows
    }
}

/// Renders a JSON cell in its natural textual form: nulls are empty, strings
/// pass through verbatim, numbers keep their JSON text (integers carry no
/// decimal point).
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
