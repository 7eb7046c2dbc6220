use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A generic `name`/`content` pair emitted as an extra `<meta>` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaTagPair {
    pub name: String,
    pub content: String,
}

impl MetaTagPair {
    /// Creates a new meta tag pair.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// The structured metadata describing one page's search/social presentation.
///
/// Every descriptive field is independently optional. The renderer omits the
/// fragment for any field that is absent or empty; nothing here is required
/// for a record to be stored. Field names serialize in camelCase so the
/// persisted document matches the wire format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoRecord {
    /// Unique key within the store, e.g. `/about`.
    pub page_path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h1_tag: Option<String>,

    // Open Graph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_url: Option<String>,

    // Twitter Card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_creator: Option<String>,

    /// JSON-LD payload, emitted verbatim when non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<serde_json::Map<String, serde_json::Value>>,

    // Resource hints
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub preload_resources: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prefetch_resources: Vec<String>,

    // Analytics identifiers; presence triggers emission of the vendor snippet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_analytics_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_tag_manager_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_pixel_id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_meta_tags: Vec<MetaTagPair>,

    /// Set by the store on every write.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SeoRecord {
    /// Creates an empty record for the given page path.
    pub fn new(page_path: impl Into<String>) -> Self {
        Self {
            page_path: page_path.into(),
            ..Self::default()
        }
    }

    /// Sets the `<title>` text.
    pub fn with_meta_title(mut self, title: impl Into<String>) -> Self {
        self.meta_title = Some(title.into());
        self
    }

    /// Sets the meta description.
    pub fn with_meta_description(mut self, description: impl Into<String>) -> Self {
        self.meta_description = Some(description.into());
        self
    }

    /// Sets the keyword list.
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Sets the canonical URL.
    pub fn with_canonical_url(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }

    /// Sets the robots directive.
    pub fn with_robots(mut self, robots: impl Into<String>) -> Self {
        self.robots = Some(robots.into());
        self
    }

    /// Sets the expected H1 heading.
    pub fn with_h1_tag(mut self, h1: impl Into<String>) -> Self {
        self.h1_tag = Some(h1.into());
        self
    }

    /// Sets the basic Open Graph trio.
    pub fn with_open_graph(
        mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        self.og_title = Some(title.into());
        self.og_description = Some(description.into());
        self.og_image = Some(image.into());
        self
    }

    /// Sets the Twitter card kind.
    pub fn with_twitter_card(mut self, card: impl Into<String>) -> Self {
        self.twitter_card = Some(card.into());
        self
    }

    /// Sets the JSON-LD payload.
    pub fn with_structured_data(
        mut self,
        data: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        self.structured_data = Some(data);
        self
    }

    /// Sets the preload resource list.
    pub fn with_preload_resources(mut self, resources: Vec<String>) -> Self {
        self.preload_resources = resources;
        self
    }

    /// Sets the prefetch resource list.
    pub fn with_prefetch_resources(mut self, resources: Vec<String>) -> Self {
        self.prefetch_resources = resources;
        self
    }

    /// Sets the Google Analytics measurement ID.
    pub fn with_google_analytics_id(mut self, id: impl Into<String>) -> Self {
        self.google_analytics_id = Some(id.into());
        self
    }

    /// Sets the Google Tag Manager container ID.
    pub fn with_google_tag_manager_id(mut self, id: impl Into<String>) -> Self {
        self.google_tag_manager_id = Some(id.into());
        self
    }

    /// Sets the Facebook Pixel ID.
    pub fn with_facebook_pixel_id(mut self, id: impl Into<String>) -> Self {
        self.facebook_pixel_id = Some(id.into());
        self
    }

    /// Appends a generic meta tag.
    pub fn with_additional_meta_tag(mut self, tag: MetaTagPair) -> Self {
        self.additional_meta_tags.push(tag);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = SeoRecord::new("/about")
            .with_meta_title("About Us")
            .with_meta_description("Who we are")
            .with_keywords(vec!["team".to_string(), "company".to_string()])
            .with_canonical_url("https://example.com/about")
            .with_h1_tag("About Us");

        assert_eq!(record.page_path, "/about");
        assert_eq!(record.meta_title, Some("About Us".to_string()));
        assert_eq!(record.keywords.len(), 2);
        assert!(record.og_title.is_none());
        assert!(record.updated_at.is_none());
    }

    #[test]
    fn test_record_serializes_camel_case_and_skips_absent_fields() {
        let record = SeoRecord::new("/pricing").with_meta_title("Pricing");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["pagePath"], "/pricing");
        assert_eq!(json["metaTitle"], "Pricing");
        assert!(json.get("metaDescription").is_none());
        assert!(json.get("keywords").is_none());
        assert!(json.get("updatedAt").is_none());
    }

    #[test]
    fn test_record_deserializes_with_all_fields_absent() {
        let record: SeoRecord = serde_json::from_str(r#"{"pagePath": "/"}"#).unwrap();

        assert_eq!(record.page_path, "/");
        assert!(record.meta_title.is_none());
        assert!(record.preload_resources.is_empty());
        assert!(record.additional_meta_tags.is_empty());
    }
}
