//! Head-fragment renderer.
//!
//! Pure functions that expand one [`SeoRecord`] into independent HTML
//! fragment strings. Every function accepts `Option<&SeoRecord>` and returns
//! an empty string for `None`; a missing or empty source field means the
//! corresponding tag is omitted, never an error.

use super::types::SeoRecord;

/// Escapes a value for use inside an HTML attribute or text node.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Treats `None` and `Some("")` alike: only non-empty values render.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Renders the `<title>`, meta, and link tags for a record.
///
/// Emission order: title, description, keywords, canonical, robots, Open
/// Graph fields, Twitter fields, then one generic tag per
/// `additional_meta_tags` entry.
pub fn render_meta_tags(record: Option<&SeoRecord>) -> String {
    let Some(record) = record else {
        return String::new();
    };

    let mut tags: Vec<String> = Vec::new();

    if let Some(title) = present(&record.meta_title) {
        tags.push(format!("<title>{}</title>", escape_html(title)));
    }
    if let Some(description) = present(&record.meta_description) {
        tags.push(format!(
            "<meta name=\"description\" content=\"{}\">",
            escape_html(description)
        ));
    }
    if !record.keywords.is_empty() {
        tags.push(format!(
            "<meta name=\"keywords\" content=\"{}\">",
            escape_html(&record.keywords.join(", "))
        ));
    }
    if let Some(canonical) = present(&record.canonical_url) {
        tags.push(format!(
            "<link rel=\"canonical\" href=\"{}\">",
            escape_html(canonical)
        ));
    }
    if let Some(robots) = present(&record.robots) {
        tags.push(format!(
            "<meta name=\"robots\" content=\"{}\">",
            escape_html(robots)
        ));
    }

    let open_graph = [
        ("og:title", &record.og_title),
        ("og:description", &record.og_description),
        ("og:image", &record.og_image),
        ("og:type", &record.og_type),
        ("og:url", &record.og_url),
    ];
    for (property, field) in open_graph {
        if let Some(value) = present(field) {
            tags.push(format!(
                "<meta property=\"{property}\" content=\"{}\">",
                escape_html(value)
            ));
        }
    }

    let twitter = [
        ("twitter:card", &record.twitter_card),
        ("twitter:title", &record.twitter_title),
        ("twitter:description", &record.twitter_description),
        ("twitter:image", &record.twitter_image),
        ("twitter:site", &record.twitter_site),
        ("twitter:creator", &record.twitter_creator),
    ];
    for (name, field) in twitter {
        if let Some(value) = present(field) {
            tags.push(format!(
                "<meta name=\"{name}\" content=\"{}\">",
                escape_html(value)
            ));
        }
    }

    for tag in &record.additional_meta_tags {
        if !tag.name.is_empty() && !tag.content.is_empty() {
            tags.push(format!(
                "<meta name=\"{}\" content=\"{}\">",
                escape_html(&tag.name),
                escape_html(&tag.content)
            ));
        }
    }

    tags.join("\n")
}

/// Renders the JSON-LD script tag.
///
/// Emitted only when `structured_data` is present and has at least one key;
/// the payload is serialized compactly and passed through verbatim.
pub fn render_structured_data(record: Option<&SeoRecord>) -> String {
    let Some(record) = record else {
        return String::new();
    };
    let Some(data) = record.structured_data.as_ref().filter(|d| !d.is_empty()) else {
        return String::new();
    };

    // A Map of String keys cannot fail to serialize.
    let json = serde_json::to_string(data).unwrap_or_default();
    format!("<script type=\"application/ld+json\">{json}</script>")
}

/// Maps a preload resource to its `as` attribute by file extension.
///
/// The mapping is total: css→style, js→script, woff/woff2→font, and every
/// other extension (or none at all) falls through to image.
pub fn preload_as_attr(resource: &str) -> &'static str {
    let Some((_, extension)) = resource.rsplit_once('.') else {
        return "image";
    };
    match extension.to_ascii_lowercase().as_str() {
        "css" => "style",
        "js" => "script",
        "woff" | "woff2" => "font",
        _ => "image",
    }
}

/// Renders `rel=preload` and `rel=prefetch` link tags.
pub fn render_resource_tags(record: Option<&SeoRecord>) -> String {
    let Some(record) = record else {
        return String::new();
    };

    let mut tags: Vec<String> = Vec::new();

    for resource in &record.preload_resources {
        if resource.is_empty() {
            continue;
        }
        tags.push(format!(
            "<link rel=\"preload\" href=\"{}\" as=\"{}\">",
            escape_html(resource),
            preload_as_attr(resource)
        ));
    }
    for resource in &record.prefetch_resources {
        if resource.is_empty() {
            continue;
        }
        tags.push(format!(
            "<link rel=\"prefetch\" href=\"{}\">",
            escape_html(resource)
        ));
    }

    tags.join("\n")
}

/// One third-party analytics integration.
///
/// Adding a provider is a table addition: an identifier accessor plus a
/// snippet template, appended to [`ANALYTICS_VENDORS`].
struct AnalyticsVendor {
    extract: fn(&SeoRecord) -> Option<&str>,
    render: fn(&str) -> String,
}

fn google_analytics_id(record: &SeoRecord) -> Option<&str> {
    present(&record.google_analytics_id)
}

fn google_tag_manager_id(record: &SeoRecord) -> Option<&str> {
    present(&record.google_tag_manager_id)
}

fn facebook_pixel_id(record: &SeoRecord) -> Option<&str> {
    present(&record.facebook_pixel_id)
}

fn google_analytics_snippet(id: &str) -> String {
    format!(
        "<!-- Google Analytics -->\n\
         <script async src=\"https://www.googletagmanager.com/gtag/js?id={id}\"></script>\n\
         <script>\n\
         window.dataLayer = window.dataLayer || [];\n\
         function gtag(){{dataLayer.push(arguments);}}\n\
         gtag('js', new Date());\n\
         gtag('config', '{id}');\n\
         </script>"
    )
}

fn google_tag_manager_snippet(id: &str) -> String {
    format!(
        "<!-- Google Tag Manager -->\n\
         <script>(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':\n\
         new Date().getTime(),event:'gtm.js'}});var f=d.getElementsByTagName(s)[0],\n\
         j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';j.async=true;j.src=\n\
         'https://www.googletagmanager.com/gtm.js?id='+i+dl;f.parentNode.insertBefore(j,f);\n\
         }})(window,document,'script','dataLayer','{id}');</script>"
    )
}

fn facebook_pixel_snippet(id: &str) -> String {
    format!(
        "<!-- Facebook Pixel -->\n\
         <script>\n\
         !function(f,b,e,v,n,t,s)\n\
         {{if(f.fbq)return;n=f.fbq=function(){{n.callMethod?\n\
         n.callMethod.apply(n,arguments):n.queue.push(arguments)}};\n\
         if(!f._fbq)f._fbq=n;n.push=n;n.loaded=!0;n.version='2.0';\n\
         n.queue=[];t=b.createElement(e);t.async=!0;\n\
         t.src=v;s=b.getElementsByTagName(e)[0];\n\
         s.parentNode.insertBefore(t,s)}}(window,document,'script',\n\
         'https://connect.facebook.net/en_US/fbevents.js');\n\
         fbq('init', '{id}');\n\
         fbq('track', 'PageView');\n\
         </script>\n\
         <noscript><img height=\"1\" width=\"1\" style=\"display:none\"\n\
         src=\"https://www.facebook.com/tr?id={id}&ev=PageView&noscript=1\"\n\
         /></noscript>"
    )
}

/// Known vendors in document order: Google Analytics, Tag Manager, Pixel.
const ANALYTICS_VENDORS: [AnalyticsVendor; 3] = [
    AnalyticsVendor {
        extract: google_analytics_id,
        render: google_analytics_snippet,
    },
    AnalyticsVendor {
        extract: google_tag_manager_id,
        render: google_tag_manager_snippet,
    },
    AnalyticsVendor {
        extract: facebook_pixel_id,
        render: facebook_pixel_snippet,
    },
];

/// Renders the bootstrap snippet for each analytics identifier present.
///
/// Vendors are independent: each identifier produces its own block, and the
/// blocks concatenate in [`ANALYTICS_VENDORS`] order.
pub fn render_analytics_codes(record: Option<&SeoRecord>) -> String {
    let Some(record) = record else {
        return String::new();
    };

    ANALYTICS_VENDORS
        .iter()
        .filter_map(|vendor| (vendor.extract)(record).map(vendor.render))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::types::MetaTagPair;

    #[test]
    fn test_all_renderers_return_empty_for_none() {
        assert_eq!(render_meta_tags(None), "");
        assert_eq!(render_structured_data(None), "");
        assert_eq!(render_resource_tags(None), "");
        assert_eq!(render_analytics_codes(None), "");
    }

    #[test]
    fn test_all_renderers_return_empty_for_bare_record() {
        let record = SeoRecord::new("/bare");
        assert_eq!(render_meta_tags(Some(&record)), "");
        assert_eq!(render_structured_data(Some(&record)), "");
        assert_eq!(render_resource_tags(Some(&record)), "");
        assert_eq!(render_analytics_codes(Some(&record)), "");
    }

    #[test]
    fn test_meta_tags_emission_order() {
        let record = SeoRecord::new("/about")
            .with_meta_title("About")
            .with_meta_description("Who we are")
            .with_keywords(vec!["team".to_string(), "history".to_string()])
            .with_canonical_url("https://example.com/about")
            .with_robots("index, follow")
            .with_open_graph("About", "Who we are", "https://example.com/og.png")
            .with_twitter_card("summary")
            .with_additional_meta_tag(MetaTagPair::new("theme-color", "#ffffff"));

        let html = render_meta_tags(Some(&record));
        let lines: Vec<&str> = html.lines().collect();

        assert_eq!(lines[0], "<title>About</title>");
        assert_eq!(
            lines[1],
            "<meta name=\"description\" content=\"Who we are\">"
        );
        assert_eq!(
            lines[2],
            "<meta name=\"keywords\" content=\"team, history\">"
        );
        assert_eq!(
            lines[3],
            "<link rel=\"canonical\" href=\"https://example.com/about\">"
        );
        assert_eq!(lines[4], "<meta name=\"robots\" content=\"index, follow\">");
        assert!(lines[5].starts_with("<meta property=\"og:title\""));
        assert!(html.contains("<meta name=\"twitter:card\" content=\"summary\">"));
        assert!(html.contains("<meta name=\"theme-color\" content=\"#ffffff\">"));
    }

    #[test]
    fn test_meta_tags_skip_empty_strings() {
        let record = SeoRecord::new("/")
            .with_meta_title("")
            .with_meta_description("desc");

        let html = render_meta_tags(Some(&record));
        assert!(!html.contains("<title>"));
        assert!(html.contains("content=\"desc\""));
    }

    #[test]
    fn test_meta_tags_escape_html() {
        let record = SeoRecord::new("/").with_meta_title("Fish & <Chips>");
        let html = render_meta_tags(Some(&record));
        assert_eq!(html, "<title>Fish &amp; &lt;Chips&gt;</title>");
    }

    #[test]
    fn test_structured_data_requires_non_empty_map() {
        let empty = SeoRecord::new("/").with_structured_data(serde_json::Map::new());
        assert_eq!(render_structured_data(Some(&empty)), "");

        let mut data = serde_json::Map::new();
        data.insert(
            "@type".to_string(),
            serde_json::Value::String("Organization".to_string()),
        );
        let record = SeoRecord::new("/").with_structured_data(data);
        let html = render_structured_data(Some(&record));

        assert!(html.starts_with("<script type=\"application/ld+json\">"));
        assert!(html.contains(r#""@type":"Organization""#));
        assert!(html.ends_with("</script>"));
    }

    #[test]
    fn test_preload_as_attr_is_total() {
        assert_eq!(preload_as_attr("/styles/main.css"), "style");
        assert_eq!(preload_as_attr("/js/app.js"), "script");
        assert_eq!(preload_as_attr("/fonts/inter.woff"), "font");
        assert_eq!(preload_as_attr("/fonts/inter.woff2"), "font");
        assert_eq!(preload_as_attr("/img/hero.png"), "image");
        assert_eq!(preload_as_attr("/data/blob.xyz"), "image");
        assert_eq!(preload_as_attr("no-extension"), "image");
    }

    #[test]
    fn test_resource_tags() {
        let record = SeoRecord::new("/")
            .with_preload_resources(vec![
                "/styles/main.css".to_string(),
                "/fonts/inter.woff2".to_string(),
            ])
            .with_prefetch_resources(vec!["/about".to_string()]);

        let html = render_resource_tags(Some(&record));
        let lines: Vec<&str> = html.lines().collect();

        assert_eq!(
            lines[0],
            "<link rel=\"preload\" href=\"/styles/main.css\" as=\"style\">"
        );
        assert_eq!(
            lines[1],
            "<link rel=\"preload\" href=\"/fonts/inter.woff2\" as=\"font\">"
        );
        assert_eq!(lines[2], "<link rel=\"prefetch\" href=\"/about\">");
    }

    #[test]
    fn test_analytics_single_vendor() {
        let record = SeoRecord::new("/").with_facebook_pixel_id("1234567890");
        let html = render_analytics_codes(Some(&record));

        assert!(html.contains("fbq('init', '1234567890');"));
        assert!(!html.contains("gtag"));
        assert!(!html.contains("googletagmanager.com/gtm.js"));
    }

    #[test]
    fn test_analytics_all_vendors_in_document_order() {
        let record = SeoRecord::new("/")
            .with_google_analytics_id("G-ABC123")
            .with_google_tag_manager_id("GTM-XYZ")
            .with_facebook_pixel_id("1234567890");

        let html = render_analytics_codes(Some(&record));

        let ga = html.find("gtag('config', 'G-ABC123')").unwrap();
        let gtm = html.find("'https://www.googletagmanager.com/gtm.js?id='").unwrap();
        let fb = html.find("fbq('init', '1234567890')").unwrap();

        assert!(ga < gtm);
        assert!(gtm < fb);
    }
}
