//! Advisory validation for SEO records.
//!
//! Validation never blocks persistence; callers decide what to do with the
//! report. Errors mark fields a page should not ship without, warnings flag
//! quality problems search engines tolerate.

use serde::Serialize;

use super::types::SeoRecord;

/// Recommended maximum length for a meta title.
const META_TITLE_MAX_CHARS: usize = 60;

/// Recommended maximum length for a meta description.
const META_DESCRIPTION_MAX_CHARS: usize = 160;

/// Result of validating one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    /// True iff `errors` is empty; warnings never affect it.
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

fn missing(field: &Option<String>) -> bool {
    field.as_deref().is_none_or(str::is_empty)
}

/// Checks a record against the recommended-field rules.
pub fn validate(record: &SeoRecord) -> SeoReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    match record.meta_title.as_deref().filter(|t| !t.is_empty()) {
        None => errors.push("Meta title is missing".to_string()),
        Some(title) if title.chars().count() > META_TITLE_MAX_CHARS => {
            warnings.push(format!(
                "Meta title is longer than {META_TITLE_MAX_CHARS} characters"
            ));
        }
        Some(_) => {}
    }

    match record.meta_description.as_deref().filter(|d| !d.is_empty()) {
        None => errors.push("Meta description is missing".to_string()),
        Some(description) if description.chars().count() > META_DESCRIPTION_MAX_CHARS => {
            warnings.push(format!(
                "Meta description is longer than {META_DESCRIPTION_MAX_CHARS} characters"
            ));
        }
        Some(_) => {}
    }

    if missing(&record.h1_tag) {
        warnings.push("H1 tag is missing".to_string());
    }

    if missing(&record.og_title) || missing(&record.og_description) || missing(&record.og_image) {
        warnings.push("Open Graph tags are incomplete".to_string());
    }

    if missing(&record.canonical_url) {
        warnings.push("Canonical URL is missing".to_string());
    }

    SeoReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A record that passes every rule.
    fn complete_record() -> SeoRecord {
        SeoRecord::new("/about")
            .with_meta_title("About Us")
            .with_meta_description("Everything about the team")
            .with_h1_tag("About Us")
            .with_open_graph("About", "Everything about the team", "/og.png")
            .with_canonical_url("https://example.com/about")
    }

    #[test]
    fn test_complete_record_is_valid_with_no_warnings() {
        let report = validate(&complete_record());
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_missing_required_fields_are_errors() {
        let report = validate(&SeoRecord::new("/empty"));

        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors.contains(&"Meta title is missing".to_string()));
        assert!(report
            .errors
            .contains(&"Meta description is missing".to_string()));
    }

    #[test]
    fn test_title_over_threshold_warns_but_stays_valid() {
        let mut record = complete_record();
        record.meta_title = Some("x".repeat(61));

        let report = validate(&record);
        assert!(report.is_valid);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("Meta title"));
    }

    #[test]
    fn test_title_at_threshold_does_not_warn() {
        let mut record = complete_record();
        record.meta_title = Some("x".repeat(60));

        let report = validate(&record);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_description_over_threshold_warns() {
        let mut record = complete_record();
        record.meta_description = Some("y".repeat(161));

        let report = validate(&record);
        assert!(report.is_valid);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("Meta description"));
    }

    #[test]
    fn test_incomplete_open_graph_is_a_single_warning() {
        let mut record = complete_record();
        record.og_image = None;
        record.og_description = None;

        let report = validate(&record);
        assert_eq!(
            report.warnings,
            vec!["Open Graph tags are incomplete".to_string()]
        );
    }

    #[test]
    fn test_missing_h1_and_canonical_warn() {
        let mut record = complete_record();
        record.h1_tag = None;
        record.canonical_url = None;

        let report = validate(&record);
        assert!(report.is_valid);
        assert!(report.warnings.contains(&"H1 tag is missing".to_string()));
        assert!(report
            .warnings
            .contains(&"Canonical URL is missing".to_string()));
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut record = complete_record();
        record.meta_title = Some(String::new());

        let report = validate(&record);
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["Meta title is missing".to_string()]);
    }
}
