//! JSON-file storage backend.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use headsmith_core::storage::{Result, SeoDocument, SeoStore, StoreError};

/// File-backed store holding the whole document in one JSON file.
///
/// The document is read fully on every load and rewritten fully on every
/// save. Saves go through a sibling temp file and a rename, so a failed
/// write never leaves a half-written document behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over the given file path.
    ///
    /// The file does not need to exist yet; the first save creates it along
    /// with any missing parent directories.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SeoStore for JsonFileStore {
    async fn load(&self) -> Result<SeoDocument> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            // First run: nothing persisted yet.
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(SeoDocument::new()),
            Err(err) => return Err(StoreError::Io(err.to_string())),
        };

        serde_json::from_slice(&bytes).map_err(|err| StoreError::Malformed(err.to_string()))
    }

    async fn save(&self, document: &SeoDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| StoreError::Io(err.to_string()))?;
        }

        // Pretty output keeps the document hand-editable.
        let json = serde_json::to_vec_pretty(document)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, &json)
            .await
            .map_err(|err| StoreError::Io(err.to_string()))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|err| StoreError::Io(err.to_string()))?;

        Ok(())
    }
}
