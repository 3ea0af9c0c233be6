//! Generated file storage
//! Uses Apache Arrow object_store crate; the local backend is rooted at the
//! configured storage directory so keys can never resolve outside it.

use bytes::Bytes;
use object_store::{ObjectStore, local::LocalFileSystem, memory::InMemory, path::Path as StoragePath};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::config::{StorageConfig, StorageProvider};
use crate::encoders::DocumentFormat;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid file name: {0}")]
    InvalidName(String),

    #[error("file not found: {0}")]
    NotFound(String),

    #[error("storage root unavailable: {0}")]
    Root(String),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("object store error: {0}")]
    ObjectStoreError(#[from] object_store::Error),
}

/// Storage result type
pub type Result<T> = std::result::Result<T, StorageError>;

/// Names the next generated file: `file_<unix-seconds>_<uuid>.<ext>`
pub fn generate_file_name(format: DocumentFormat) -> String {
    format!(
        "file_{}_{}.{}",
        chrono::Utc::now().timestamp(),
        Uuid::new_v4().simple(),
        format.extension()
    )
}

/// Accepts only a single plain path segment.
pub fn validate_file_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name.contains("..")
        || name.contains(['/', '\\', '\0'])
        || name.chars().any(char::is_control);

    if invalid {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// File store wrapping object_store
#[derive(Clone)]
pub struct FileStore {
    store: Arc<dyn ObjectStore>,
    /// Canonical root directory, set for the local backend only
    root: Option<PathBuf>,
    /// Human-readable location, for logs
    pub location: String,
}

impl FileStore {
    /// Create new file store with any object_store backend
    pub fn new(store: Arc<dyn ObjectStore>, location: impl Into<String>) -> Self {
        Self {
            store,
            root: None,
            location: location.into(),
        }
    }

    /// Store rooted at a local directory, created if missing
    pub fn local(root: &Path) -> Result<Self> {
        let root_error = |e: io::Error| StorageError::Root(format!("{}: {}", root.display(), e));
        std::fs::create_dir_all(root).map_err(root_error)?;
        let root = std::fs::canonicalize(root).map_err(root_error)?;

        let store = LocalFileSystem::new_with_prefix(&root)?;
        let mut file_store = Self::new(Arc::new(store), root.display().to_string());
        file_store.root = Some(root);
        Ok(file_store)
    }

    /// Create in-memory storage for testing/development
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemory::new()), "memory")
    }

    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        match config.provider {
            StorageProvider::Local => Self::local(&config.root),
            StorageProvider::Memory => Ok(Self::in_memory()),
        }
    }

    /// Persist generated bytes under a fresh name and return that name
    pub async fn save(&self, data: Vec<u8>, format: DocumentFormat) -> Result<String> {
        let name = generate_file_name(format);
        let path = StoragePath::from(name.as_str());
        let size = data.len();

        self.store.put(&path, data.into()).await?;

        tracing::info!(name = %name, size, location = %self.location, "Saved generated file");

        Ok(name)
    }

    /// Read a previously saved file by its bare name
    pub async fn load(&self, name: &str) -> Result<Bytes> {
        let path = storage_path(name)?;
        self.ensure_within_root(name).await?;

        let result = match self.store.get(&path).await {
            Ok(result) => result,
            Err(object_store::Error::NotFound { .. }) => {
                return Err(StorageError::NotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let bytes = result.bytes().await?;

        tracing::info!(name, size = bytes.len(), "Loaded generated file");

        Ok(bytes)
    }

    /// Resolves `name` through any symlinks and rejects it unless the target
    /// is a descendant of the canonical root.
    async fn ensure_within_root(&self, name: &str) -> Result<()> {
        let Some(root) = &self.root else {
            return Ok(());
        };

        let resolved = match tokio::fs::canonicalize(root.join(name)).await {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        if !resolved.starts_with(root) {
            tracing::warn!(
                name,
                resolved = %resolved.display(),
                "Rejected file resolving outside the storage root"
            );
            return Err(StorageError::InvalidName(name.to_string()));
        }

        Ok(())
    }
}

fn storage_path(name: &str) -> Result<StoragePath> {
    validate_file_name(name)?;
    StoragePath::parse(name).map_err(|_| StorageError::InvalidName(name.to_string()))
}
