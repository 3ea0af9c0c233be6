use super::models::{Config, StorageProvider};
use thiserror::Error;
use url::Url;

const SHEET_NAME_MAX_LEN: usize = 31;
const SHEET_NAME_FORBIDDEN: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("base_url '{url}' is not an absolute http(s) URL")]
    InvalidBaseUrl { url: String },

    #[error("storage.root must not be empty for the local provider")]
    EmptyStorageRoot,

    #[error("max_payload_bytes must be positive")]
    ZeroPayloadLimit,

    #[error("sheet_name '{name}' is invalid: {reason}")]
    InvalidSheetName { name: String, reason: &'static str },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_server(config)?;
    validate_storage(config)?;
    validate_encoding(config)?;
    Ok(())
}

fn validate_server(config: &Config) -> Result<(), ValidationError> {
    let base_url = &config.server.base_url;
    let parsed = Url::parse(base_url).map_err(|_| ValidationError::InvalidBaseUrl {
        url: base_url.clone(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
        return Err(ValidationError::InvalidBaseUrl {
            url: base_url.clone(),
        });
    }

    if config.server.api.max_payload_bytes.as_u64() == 0 {
        return Err(ValidationError::ZeroPayloadLimit);
    }

    Ok(())
}

fn validate_storage(config: &Config) -> Result<(), ValidationError> {
    if config.storage.provider == StorageProvider::Local
        && config.storage.root.as_os_str().is_empty()
    {
        return Err(ValidationError::EmptyStorageRoot);
    }
    Ok(())
}

/// Excel's own worksheet naming rules
fn validate_encoding(config: &Config) -> Result<(), ValidationError> {
    let name = &config.encoding.sheet_name;
    let invalid = |reason| ValidationError::InvalidSheetName {
        name: name.clone(),
        reason,
    };

    if name.trim().is_empty() {
        return Err(invalid("must not be empty"));
    }
    if name.chars().count() > SHEET_NAME_MAX_LEN {
        return Err(invalid("longer than 31 characters"));
    }
    if name.contains(SHEET_NAME_FORBIDDEN) {
        return Err(invalid("contains one of []:*?/\\"));
    }
    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(invalid("starts or ends with an apostrophe"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let mut config = Config::default();
        config.server.base_url = "/download".to_string();
        assert!(matches!(
            validate(&config),
            Err(ValidationError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut config = Config::default();
        config.server.base_url = "ftp://files.example.com/download".to_string();
        assert!(matches!(
            validate(&config),
            Err(ValidationError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_root_for_local_only() {
        let mut config = Config::default();
        config.storage.root = PathBuf::new();
        assert!(matches!(
            validate(&config),
            Err(ValidationError::EmptyStorageRoot)
        ));

        config.storage.provider = StorageProvider::Memory;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_zero_payload_limit() {
        let mut config = Config::default();
        config.server.api.max_payload_bytes = crate::humanize::ByteSize(0);
        assert!(matches!(
            validate(&config),
            Err(ValidationError::ZeroPayloadLimit)
        ));
    }

    #[test]
    fn test_sheet_name_rules() {
        let too_long = "x".repeat(32);
        for bad in ["", "   ", "a/b", "q?", "[x]", "'quoted'", too_long.as_str()] {
            let mut config = Config::default();
            config.encoding.sheet_name = bad.to_string();
            assert!(
                matches!(validate(&config), Err(ValidationError::InvalidSheetName { .. })),
                "expected '{bad}' to be rejected"
            );
        }

        let mut config = Config::default();
        config.encoding.sheet_name = "Monthly report".to_string();
        assert!(validate(&config).is_ok());
    }
}
