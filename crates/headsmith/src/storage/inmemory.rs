//! In-memory storage backend.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use headsmith_core::storage::{Result, SeoDocument, SeoStore};

/// Volatile store for tests and demos.
///
/// Holds the document behind an `Arc<RwLock<_>>`; data is lost when the
/// store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    document: Arc<RwLock<SeoDocument>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SeoStore for InMemoryStore {
    async fn load(&self) -> Result<SeoDocument> {
        Ok(self.document.read().await.clone())
    }

    async fn save(&self, document: &SeoDocument) -> Result<()> {
        *self.document.write().await = document.clone();
        Ok(())
    }
}
