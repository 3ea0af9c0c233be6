//! Tabular input model shared by the encoders.
//!
//! A [`Record`] is one row of client data: an ordered map from column name to
//! a JSON value. Key order is the order the client sent (`serde_json` is built
//! with `preserve_order`), which is what the first-record header policy relies
//! on.

mod fields;

pub use fields::{HeaderPolicy, collect_fields};

use serde_json::{Map, Value};

/// One row of tabular data
pub type Record = Map<String, Value>;

/// Renders a cell value as text.
///
/// Strings pass through untouched, numbers and booleans use their JSON form
/// (`3.14`, `true`), null becomes an empty cell. Nested arrays and objects are
/// written as compact JSON.
///
/// Numbers keep the textual kind the client sent: `1` renders as `1` but
/// `1.0` renders as `1.0`, since it arrives as a float. Whole-valued floats
/// are not collapsed to integers.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Looks up `field` in `record` and renders it, or returns an empty cell when
/// the record does not carry that column.
pub fn cell(record: &Record, field: &str) -> String {
    record.get(field).map(stringify).unwrap_or_default()
}
