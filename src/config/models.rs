use crate::humanize::ByteSize;
use crate::records::HeaderPolicy;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub encoding: EncodingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    /// Public URL of the download endpoint; the file name is appended as the
    /// `file` query parameter
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api: ApiLimits,
}

/// API request limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiLimits {
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: ByteSize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            base_url: default_base_url(),
            api: ApiLimits::default(),
        }
    }
}

impl Default for ApiLimits {
    fn default() -> Self {
        Self {
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

fn default_base_url() -> String {
    "http://localhost:3000/download".to_string()
}

fn default_max_payload_bytes() -> ByteSize {
    ByteSize(5 * 1024 * 1024) // 5 MB
}

/// Storage provider type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProvider {
    #[default]
    Local,
    /// Process-local, lost on restart
    Memory,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub provider: StorageProvider,
    /// Directory generated files are written to and served from
    #[serde(default = "default_storage_root")]
    pub root: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: StorageProvider::Local,
            root: default_storage_root(),
        }
    }
}

fn default_storage_root() -> PathBuf {
    std::env::temp_dir()
}

/// Encoder settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EncodingConfig {
    #[serde(default)]
    pub header_policy: HeaderPolicy,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            header_policy: HeaderPolicy::default(),
            sheet_name: default_sheet_name(),
        }
    }
}

fn default_sheet_name() -> String {
    crate::encoders::DEFAULT_SHEET_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(config.server.base_url, "http://localhost:3000/download");
        assert_eq!(config.server.api.max_payload_bytes.as_u64(), 5 * 1024 * 1024);
        assert_eq!(config.storage.provider, StorageProvider::Local);
        assert_eq!(config.encoding.header_policy, HeaderPolicy::FirstRecord);
        assert_eq!(config.encoding.sheet_name, "Sheet1");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
[server]
base_url = "https://files.example.com/download"

[encoding]
header_policy = "union"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(config.server.base_url, "https://files.example.com/download");
        assert_eq!(config.encoding.header_policy, HeaderPolicy::Union);
        assert_eq!(config.encoding.sheet_name, "Sheet1");
    }
}
