use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::format::DocumentFormat;
use super::traits::{EncodingError, TabularEncoder};
use crate::records::{HeaderPolicy, Record, cell, collect_fields};

/// CSV encoder
///
/// Writes a header row followed by one row per record. Fields that contain
/// the delimiter, a quote or a line break are quoted.
#[derive(Debug, Clone, Default)]
pub struct CsvEncoder {
    policy: HeaderPolicy,
}

impl CsvEncoder {
    pub fn new(policy: HeaderPolicy) -> Self {
        Self { policy }
    }
}

impl TabularEncoder for CsvEncoder {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Csv
    }

    fn encode(&self, records: &[Record]) -> Result<Vec<u8>, EncodingError> {
        if records.is_empty() {
            return Err(EncodingError::EmptyRecordSet);
        }

        let fields = collect_fields(records, self.policy);
        if fields.is_empty() {
            return Err(EncodingError::NoColumns);
        }

        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(&fields)?;
        for record in records {
            writer.write_record(fields.iter().map(|field| cell(record, field)))?;
        }

        writer
            .into_inner()
            .map_err(|err| EncodingError::Flush(err.error().to_string()))
    }
}
