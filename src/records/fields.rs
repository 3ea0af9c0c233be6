use serde::{Deserialize, Serialize};

use super::Record;

/// How column headers are derived from a record set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderPolicy {
    /// Headers are the first record's keys. Keys that only appear in later
    /// records are dropped from the output.
    #[default]
    FirstRecord,
    /// Headers are every key seen across the record set, in first-seen order.
    Union,
}

/// Derives the ordered column list for `records`.
///
/// An empty record set yields no columns.
pub fn collect_fields(records: &[Record], policy: HeaderPolicy) -> Vec<String> {
    match policy {
        HeaderPolicy::FirstRecord => records
            .first()
            .map(|first| first.keys().cloned().collect())
            .unwrap_or_default(),
        HeaderPolicy::Union => {
            let mut fields: Vec<String> = Vec::new();
            for record in records {
                for key in record.keys() {
                    if !fields.iter().any(|f| f == key) {
                        fields.push(key.clone());
                    }
                }
            }
            fields
        }
    }
}
