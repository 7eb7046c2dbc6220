//! Aggregation of store, renderer, and validator lookups.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::storage::{Result, SeoStore};

use super::render::{
    render_analytics_codes, render_meta_tags, render_resource_tags, render_structured_data,
};
use super::types::SeoRecord;

/// Everything needed to render one page's head.
///
/// A miss yields four empty fragments and no record, so page generation can
/// consume this unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSeo {
    pub meta_tags: String,
    pub structured_data: String,
    pub resource_tags: String,
    pub analytics_codes: String,
    pub seo_data: Option<SeoRecord>,
}

/// Answers "give me the SEO data for page X" over an injected store.
#[derive(Clone)]
pub struct SeoAggregator {
    store: Arc<dyn SeoStore>,
}

impl SeoAggregator {
    /// Creates an aggregator over the given store.
    pub fn new(store: Arc<dyn SeoStore>) -> Self {
        Self { store }
    }

    /// Looks up the record for a page. A miss is `None`, not an error.
    pub async fn get_for_page(&self, page_path: &str) -> Result<Option<SeoRecord>> {
        let document = self.store.load().await?;
        Ok(document.get(page_path).cloned())
    }

    /// Renders every head fragment for a page.
    pub async fn get_complete_for_page(&self, page_path: &str) -> Result<PageSeo> {
        let Some(record) = self.get_for_page(page_path).await? else {
            return Ok(PageSeo::default());
        };

        Ok(PageSeo {
            meta_tags: render_meta_tags(Some(&record)),
            structured_data: render_structured_data(Some(&record)),
            resource_tags: render_resource_tags(Some(&record)),
            analytics_codes: render_analytics_codes(Some(&record)),
            seo_data: Some(record),
        })
    }

    /// Looks up records for several pages at once.
    ///
    /// Misses map to `None`; one missing page never aborts the rest of the
    /// batch. The document is loaded once for the whole batch, which over a
    /// single-document store is indistinguishable from per-page lookups.
    pub async fn get_for_multiple_pages(
        &self,
        page_paths: &[String],
    ) -> Result<BTreeMap<String, Option<SeoRecord>>> {
        let document = self.store.load().await?;

        Ok(page_paths
            .iter()
            .map(|path| (path.clone(), document.get(path).cloned()))
            .collect())
    }
}
