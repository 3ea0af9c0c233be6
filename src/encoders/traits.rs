use thiserror::Error;

use super::format::DocumentFormat;
use crate::records::Record;

/// Encoder errors
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("no data provided")]
    EmptyRecordSet,
    #[error("first record has no columns")]
    NoColumns,
    #[error("record set too large for a worksheet: {rows} rows, {columns} columns")]
    TooLarge { rows: usize, columns: usize },
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("xlsx write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("buffer flush failed: {0}")]
    Flush(String),
}

/// Tabular encoder trait
///
/// Encoding is pure CPU work on an in-memory record set, so the trait is
/// synchronous. Callers on the async runtime move it onto a blocking task.
pub trait TabularEncoder: Send + Sync {
    /// Format this encoder produces
    fn format(&self) -> DocumentFormat;

    /// Serialize the record set into the file's bytes
    fn encode(&self, records: &[Record]) -> Result<Vec<u8>, EncodingError>;
}
