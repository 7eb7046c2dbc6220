use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;

use crate::seo::SeoRecord;

use super::Result;

/// The full persisted mapping of page path to SEO record.
pub type SeoDocument = BTreeMap<String, SeoRecord>;

/// Key-value persistence for SEO records, backed by a single document.
///
/// Implementations provide `load` and `save` over whatever medium they own
/// (a JSON file, a remote store); `upsert` and `remove` are derived from
/// them. Every `save` rewrites the whole document.
///
/// The derived operations are read-modify-write sequences and are NOT atomic
/// across concurrent callers: two simultaneous upserts can each `load` a
/// snapshot missing the other's change, and the later `save` wins. This
/// last-writer-wins behavior is a documented limitation of the
/// single-document design, not something implementations should mask.
#[async_trait]
pub trait SeoStore: Send + Sync {
    /// Returns the full current mapping.
    ///
    /// An absent backing document is an empty mapping, never an error.
    async fn load(&self) -> Result<SeoDocument>;

    /// Persists the full mapping, overwriting prior content.
    async fn save(&self, document: &SeoDocument) -> Result<()>;

    /// Inserts or replaces the record stored under `page_path`.
    ///
    /// Stamps `updated_at` with the current time and forces the record's
    /// `page_path` to the given key. Returns the record as stored.
    async fn upsert(&self, page_path: &str, record: SeoRecord) -> Result<SeoRecord> {
        let mut document = self.load().await?;

        let mut record = record;
        record.page_path = page_path.to_string();
        record.updated_at = Some(Utc::now());

        document.insert(page_path.to_string(), record.clone());
        self.save(&document).await?;

        Ok(record)
    }

    /// Removes the record stored under `page_path`.
    ///
    /// Returns whether a deletion occurred; a miss is `false`, not an error,
    /// and does not rewrite the document.
    async fn remove(&self, page_path: &str) -> Result<bool> {
        let mut document = self.load().await?;

        if document.remove(page_path).is_none() {
            return Ok(false);
        }

        self.save(&document).await?;
        Ok(true)
    }
}
