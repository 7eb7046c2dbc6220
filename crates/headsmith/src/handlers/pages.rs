//! HTML pages: record index and per-page head preview.

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{
    handlers::{seo::PageQuery, AppError},
    state::AppState,
};

/// Template wrapper that converts Askama templates into HTML responses.
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {err}"),
            )
                .into_response(),
        }
    }
}

/// Index page template listing every page with an SEO record.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    paths: Vec<String>,
}

/// Handler for the index page (GET /).
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let document = state.store.load().await?;

    Ok(HtmlTemplate(IndexTemplate {
        paths: document.keys().cloned().collect(),
    }))
}

/// Preview page template; the fragment fields are inserted unescaped into
/// the head, which is the whole point of the renderer.
#[derive(Template)]
#[template(path = "preview.html")]
struct PreviewTemplate {
    page_path: String,
    heading: String,
    meta_tags: String,
    structured_data: String,
    resource_tags: String,
    analytics_codes: String,
}

/// Handler for the head-fragment preview (GET /preview?page=<path>).
///
/// Renders a page shell whose head carries everything the aggregator
/// produced for the page; unknown pages render an empty shell.
pub async fn preview(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let bundle = state.aggregator.get_complete_for_page(&query.page).await?;

    let heading = bundle
        .seo_data
        .as_ref()
        .and_then(|record| record.h1_tag.clone())
        .unwrap_or_else(|| query.page.clone());

    Ok(HtmlTemplate(PreviewTemplate {
        page_path: query.page,
        heading,
        meta_tags: bundle.meta_tags,
        structured_data: bundle.structured_data,
        resource_tags: bundle.resource_tags,
        analytics_codes: bundle.analytics_codes,
    }))
}
