use std::sync::Arc;

use crate::config::Config;
use crate::encoders::EncoderRegistry;
use crate::observability::Metrics;
use crate::storage::FileStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<EncoderRegistry>,
    pub storage: Arc<FileStore>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: Config, registry: EncoderRegistry, storage: FileStore) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            storage: Arc::new(storage),
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// State wired from configuration alone
    pub fn from_config(config: Config) -> Result<Self, crate::storage::StorageError> {
        let storage = FileStore::from_config(&config.storage)?;
        let registry = EncoderRegistry::with_defaults(&config.encoding);
        Ok(Self::new(config, registry, storage))
    }
}
