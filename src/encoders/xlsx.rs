use rust_xlsxwriter::Workbook;

use super::format::DocumentFormat;
use super::traits::{EncodingError, TabularEncoder};
use crate::records::{HeaderPolicy, Record, collect_fields, stringify};

const MAX_ROWS: usize = 1_048_576;
const MAX_COLUMNS: usize = 16_384;

pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Excel workbook encoder
///
/// Produces a workbook with a single worksheet. Every data row is laid out in
/// header order, so a cell always sits under the column it belongs to no
/// matter how the record enumerates its keys. An empty record set yields an
/// empty sheet.
///
/// The workbook embeds a creation timestamp in `docProps/core.xml`; the sheet
/// itself (`xl/worksheets/sheet1.xml` plus `xl/sharedStrings.xml`) is
/// deterministic for a given input.
#[derive(Debug, Clone)]
pub struct XlsxEncoder {
    policy: HeaderPolicy,
    sheet_name: String,
}

impl XlsxEncoder {
    pub fn new(policy: HeaderPolicy, sheet_name: impl Into<String>) -> Self {
        Self {
            policy,
            sheet_name: sheet_name.into(),
        }
    }
}

impl Default for XlsxEncoder {
    fn default() -> Self {
        Self::new(HeaderPolicy::default(), DEFAULT_SHEET_NAME)
    }
}

impl TabularEncoder for XlsxEncoder {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Xlsx
    }

    fn encode(&self, records: &[Record]) -> Result<Vec<u8>, EncodingError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(self.sheet_name.as_str())?;

        if !records.is_empty() {
            let fields = collect_fields(records, self.policy);

            // header row counts against the sheet limit
            if records.len() + 1 > MAX_ROWS || fields.len() > MAX_COLUMNS {
                return Err(EncodingError::TooLarge {
                    rows: records.len(),
                    columns: fields.len(),
                });
            }

            for (col, field) in fields.iter().enumerate() {
                worksheet.write_string(0, col as u16, field.as_str())?;
            }

            for (idx, record) in records.iter().enumerate() {
                let row = idx as u32 + 1;
                for (col, field) in fields.iter().enumerate() {
                    let Some(value) = record.get(field) else {
                        continue;
                    };
                    let text = stringify(value);
                    if !text.is_empty() {
                        worksheet.write_string(row, col as u16, text.as_str())?;
                    }
                }
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::io::{Cursor, Read};

    fn records(value: serde_json::Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    fn read_entry(bytes: &[u8], name: &str) -> Option<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).ok()?;
        let mut out = String::new();
        file.read_to_string(&mut out).unwrap();
        Some(out)
    }

    fn shared_strings(bytes: &[u8]) -> Vec<String> {
        let Some(xml) = read_entry(bytes, "xl/sharedStrings.xml") else {
            return Vec::new();
        };
        xml.split("<si>")
            .skip(1)
            .map(|si| {
                let start = si.find("<t").unwrap();
                let open_end = start + si[start..].find('>').unwrap() + 1;
                let close = si.find("</t>").unwrap();
                si[open_end..close].to_string()
            })
            .collect()
    }

    /// Reads the first worksheet back into a cell-reference → text map.
    fn sheet_cells(bytes: &[u8]) -> BTreeMap<String, String> {
        let strings = shared_strings(bytes);
        let sheet = read_entry(bytes, "xl/worksheets/sheet1.xml").unwrap();

        let mut cells = BTreeMap::new();
        for chunk in sheet.split("<c r=\"").skip(1) {
            let reference = &chunk[..chunk.find('"').unwrap()];
            let v_start = chunk.find("<v>").unwrap() + 3;
            let v_end = chunk.find("</v>").unwrap();
            let index: usize = chunk[v_start..v_end].parse().unwrap();
            cells.insert(reference.to_string(), strings[index].clone());
        }
        cells
    }

    fn sheet_count(bytes: &[u8]) -> usize {
        read_entry(bytes, "xl/workbook.xml")
            .unwrap()
            .matches("<sheet ")
            .count()
    }

    #[test]
    fn test_empty_record_set_yields_empty_sheet() {
        let bytes = XlsxEncoder::default().encode(&[]).unwrap();

        assert_eq!(sheet_count(&bytes), 1);
        let sheet = read_entry(&bytes, "xl/worksheets/sheet1.xml").unwrap();
        assert!(!sheet.contains("<row"));
        assert!(sheet_cells(&bytes).is_empty());
    }

    #[test]
    fn test_header_and_rows() {
        let bytes = XlsxEncoder::default()
            .encode(&records(json!([
                {"name": "alpha", "count": 1, "ok": true},
                {"name": "beta", "count": 2.5, "ok": false},
            ])))
            .unwrap();

        let cells = sheet_cells(&bytes);
        assert_eq!(cells["A1"], "name");
        assert_eq!(cells["B1"], "count");
        assert_eq!(cells["C1"], "ok");
        assert_eq!(cells["A2"], "alpha");
        assert_eq!(cells["B2"], "1");
        assert_eq!(cells["C2"], "true");
        assert_eq!(cells["A3"], "beta");
        assert_eq!(cells["B3"], "2.5");
        assert_eq!(cells["C3"], "false");
    }

    #[test]
    fn test_rows_follow_header_order() {
        let bytes = XlsxEncoder::default()
            .encode(&records(json!([
                {"a": "a1", "b": "b1", "c": "c1"},
                {"c": "c2", "a": "a2", "b": "b2"},
                {"b": "b3", "c": "c3"},
            ])))
            .unwrap();

        let cells = sheet_cells(&bytes);
        assert_eq!(cells["A2"], "a1");
        assert_eq!(cells["A3"], "a2");
        assert_eq!(cells["B3"], "b2");
        assert_eq!(cells["C3"], "c2");
        assert!(!cells.contains_key("A4"));
        assert_eq!(cells["B4"], "b3");
        assert_eq!(cells["C4"], "c3");
    }

    fn wide_record(columns: usize) -> Vec<Record> {
        let record: Record = (0..columns)
            .map(|i| (format!("c{i}"), json!(i)))
            .collect();
        vec![record]
    }

    #[test]
    fn test_column_limit_is_enforced() {
        let err = XlsxEncoder::default()
            .encode(&wide_record(MAX_COLUMNS + 1))
            .unwrap_err();
        assert!(matches!(
            err,
            EncodingError::TooLarge {
                rows: 1,
                columns: 16_385
            }
        ));
    }

    #[test]
    fn test_column_limit_is_inclusive() {
        let bytes = XlsxEncoder::default()
            .encode(&wide_record(MAX_COLUMNS))
            .unwrap();
        assert_eq!(sheet_count(&bytes), 1);
    }

    #[test]
    fn test_custom_sheet_name() {
        let bytes = XlsxEncoder::new(HeaderPolicy::FirstRecord, "Report")
            .encode(&records(json!([{"a": 1}])))
            .unwrap();
        let workbook = read_entry(&bytes, "xl/workbook.xml").unwrap();
        assert!(workbook.contains("name=\"Report\""));
    }

    #[test]
    fn test_sheet_content_is_deterministic() {
        let data = records(json!([{"a": 1, "b": "x"}, {"a": 2, "b": "y"}]));
        let encoder = XlsxEncoder::default();
        let first = encoder.encode(&data).unwrap();
        let second = encoder.encode(&data).unwrap();

        assert_eq!(
            read_entry(&first, "xl/worksheets/sheet1.xml"),
            read_entry(&second, "xl/worksheets/sheet1.xml")
        );
        assert_eq!(shared_strings(&first), shared_strings(&second));
    }
}
