use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use super::{
    errors::ConfigError,
    models::{AppRegistryEntry, ConfigDocument},
};

#[async_trait]
pub trait ConfigRepository {
    async fn load_document(&self, entry: &AppRegistryEntry) -> Result<ConfigDocument, ConfigError>;
}

/// Serves config files from a directory on local disk.
#[derive(Debug, Clone)]
pub struct FileConfigRepository {
    base_dir: PathBuf,
}

impl FileConfigRepository {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

#[async_trait]
impl ConfigRepository for FileConfigRepository {
    async fn load_document(&self, entry: &AppRegistryEntry) -> Result<ConfigDocument, ConfigError> {
        let path = self.base_dir.join(&entry.config_path);
        log::debug!("Reading config for [{}] from {}", entry.id, path.display());

        let raw = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound(path.clone()),
            _ => ConfigError::Unreadable(path.clone(), e),
        })?;

        match serde_json::from_slice::<Value>(&raw) {
            Ok(Value::Object(fields)) => Ok(ConfigDocument::new(fields)),
            Ok(_) => Err(ConfigError::NotAnObject(path)),
            Err(e) => Err(ConfigError::MalformedDocument(path, e)),
        }
    }
}
