//! Configuration management for docmaker
//!
//! Settings are layered, lowest priority first:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables
//!
//! # Usage
//!
//! ```no_run
//! use docmaker::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Storing files under: {}", config.storage.root.display());
//! ```
//!
//! # Environment Variables
//!
//! Any key can be overridden with `DOCMAKER__<section>__<key>`:
//! - `DOCMAKER__SERVER__BIND_ADDR=0.0.0.0:9000`
//! - `DOCMAKER__SERVER__BASE_URL=https://files.example.com/download`
//! - `DOCMAKER__STORAGE__ROOT=/var/lib/docmaker`
//!
//! # Configuration File
//!
//! Read from `config/docmaker.toml` unless `DOCMAKER_CONFIG` points elsewhere.

mod models;
mod sources;
mod validation;

pub use crate::humanize::ByteSize;
pub use models::{ApiLimits, Config, EncodingConfig, ServerConfig, StorageConfig, StorageProvider};
pub use validation::ValidationError;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// # Errors
    ///
    /// Returns an error if the file is malformed or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path plus environment overrides
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Run validation on a config built in code
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate(self)?;
        Ok(())
    }
}
