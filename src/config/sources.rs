use super::models::Config;
use config::{ConfigError, Environment, File};
use std::env;
use std::path::{Path, PathBuf};

const CONFIG_ENV_VAR: &str = "DOCMAKER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/docmaker.toml";
const ENV_PREFIX: &str = "DOCMAKER";
const ENV_SEPARATOR: &str = "__";
const DOTENV_PATH: &str = ".env";

/// Load configuration from multiple sources with priority:
/// 1. Defaults (embedded in structs)
/// 2. TOML file (if exists)
/// 3. Environment variables from .env file (via dotenvy)
/// 4. System environment variables (highest priority)
pub fn load() -> Result<Config, ConfigError> {
    load_from_sources(default_path())
}

/// Config file path, honouring `DOCMAKER_CONFIG`
pub fn default_path() -> PathBuf {
    env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Load configuration from a specific path, `./.env` and the environment
pub fn load_from_sources(config_path: PathBuf) -> Result<Config, ConfigError> {
    load_layered(config_path, Path::new(DOTENV_PATH))
}

/// Reads `DOCMAKER__*` entries from a dotenv file without touching the
/// process environment. A missing file yields no entries.
fn read_dotenv(path: &Path) -> Result<config::Map<String, String>, ConfigError> {
    if !path.exists() {
        return Ok(config::Map::new());
    }

    let entries = dotenvy::from_path_iter(path)
        .map_err(|e| ConfigError::Message(format!("{}: {}", path.display(), e)))?;

    let mut vars = config::Map::new();
    for entry in entries {
        let (key, value) =
            entry.map_err(|e| ConfigError::Message(format!("{}: {}", path.display(), e)))?;
        if key.starts_with(ENV_PREFIX) {
            vars.insert(key, value);
        }
    }
    Ok(vars)
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

fn load_layered(config_path: PathBuf, dotenv_path: &Path) -> Result<Config, ConfigError> {
    let dotenv_vars = read_dotenv(dotenv_path)?;

    let mut builder = config::Config::builder();

    if config_path.exists() {
        tracing::info!("Loading configuration from: {}", config_path.display());
        builder = builder.add_source(File::from(config_path).required(false));
    } else {
        tracing::warn!(
            "Configuration file not found at {}, using defaults and environment overrides",
            config_path.display()
        );
    }

    if !dotenv_vars.is_empty() {
        tracing::info!(path = %dotenv_path.display(), "Applying .env overrides");
        builder = builder.add_source(environment().source(Some(dotenv_vars)));
    }

    // DOCMAKER__STORAGE__ROOT -> storage.root
    builder = builder.add_source(environment());

    let config = builder.build()?;
    config.try_deserialize()
}
