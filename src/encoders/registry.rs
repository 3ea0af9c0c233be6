use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use super::csv::CsvEncoder;
use super::format::DocumentFormat;
use super::traits::TabularEncoder;
use super::xlsx::XlsxEncoder;
use crate::config::EncodingConfig;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no encoder registered for format: {0}")]
    NotFound(DocumentFormat),
}

/// Registry mapping document formats to encoder instances
#[derive(Clone, Default)]
pub struct EncoderRegistry {
    encoders: BTreeMap<DocumentFormat, Arc<dyn TabularEncoder>>,
}

impl EncoderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `encoder` under the format it reports, replacing any
    /// previous entry.
    pub fn register(&mut self, encoder: Arc<dyn TabularEncoder>) {
        self.encoders.insert(encoder.format(), encoder);
    }

    pub fn get(&self, format: DocumentFormat) -> Result<Arc<dyn TabularEncoder>, RegistryError> {
        self.encoders
            .get(&format)
            .cloned()
            .ok_or(RegistryError::NotFound(format))
    }

    pub fn formats(&self) -> impl Iterator<Item = DocumentFormat> + '_ {
        self.encoders.keys().copied()
    }

    /// Registry with the built-in CSV and XLSX encoders
    pub fn with_defaults(config: &EncodingConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(CsvEncoder::new(config.header_policy)));
        registry.register(Arc::new(XlsxEncoder::new(
            config.header_policy,
            config.sheet_name.clone(),
        )));
        registry
    }
}
