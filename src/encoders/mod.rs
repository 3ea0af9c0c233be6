//! Tabular encoders turning a record set into file bytes.
//!
//! ## Key Components
//!
//! - [`TabularEncoder`] - Trait every output format implements
//! - [`CsvEncoder`] - Comma-separated values
//! - [`XlsxEncoder`] - Single-sheet Excel workbook
//! - [`EncoderRegistry`] - Maps a [`DocumentFormat`] to its encoder
//!
//! ## Example
//!
//! ```rust,ignore
//! use docmaker::encoders::{DocumentFormat, EncoderRegistry};
//!
//! let registry = EncoderRegistry::with_defaults(&config.encoding);
//! let encoder = registry.get(DocumentFormat::Csv)?;
//! let bytes = encoder.encode(&records)?;
//! ```

mod csv;
mod format;
mod registry;
mod traits;
mod xlsx;

pub use self::csv::CsvEncoder;
pub use format::{DocumentFormat, UnsupportedFormat};
pub use registry::{EncoderRegistry, RegistryError};
pub use traits::{EncodingError, TabularEncoder};
pub use xlsx::{DEFAULT_SHEET_NAME, XlsxEncoder};
