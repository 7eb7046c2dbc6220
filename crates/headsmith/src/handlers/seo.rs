//! SEO record CRUD and render handlers.
//!
//! Read misses are null results, not errors: `GET` with an unknown page
//! responds `200` with a JSON `null` body. Only `DELETE` reports a miss as
//! `404`, since the caller asked to change something that is not there.

use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use headsmith_core::seo::{validate, PageSeo, SeoRecord, SeoReport};

use crate::{handlers::AppError, state::AppState};

/// Error response with message (for query/body validation errors).
fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, String) {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, msg)
}

/// Query parameter naming one page; optional on the collection route.
#[derive(Debug, Deserialize)]
pub struct SeoQuery {
    pub page: Option<String>,
}

/// Query parameter naming one page; required.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: String,
}

/// Query parameters for the batch lookup.
#[derive(Debug, Deserialize)]
pub struct BatchQuery {
    /// Comma-separated page paths.
    pub pages: String,
}

/// Get one record, or the full document when no page is named
/// (GET /api/seo?page=<path>).
pub async fn get_seo(
    State(state): State<AppState>,
    Query(query): Query<SeoQuery>,
) -> Result<Response, AppError> {
    match query.page {
        Some(page) => {
            let record = state.aggregator.get_for_page(&page).await?;
            Ok(Json(record).into_response())
        }
        None => {
            let document = state.store.load().await?;
            Ok(Json(document).into_response())
        }
    }
}

/// Create or replace a record (PUT/POST /api/seo?page=<path>).
///
/// The response echoes the record as stored, including the fresh
/// `updatedAt` stamp.
pub async fn upsert_seo(
    State(state): State<AppState>,
    query_result: Result<Query<PageQuery>, QueryRejection>,
    body_result: Result<Json<SeoRecord>, JsonRejection>,
) -> Result<Json<SeoRecord>, (StatusCode, String)> {
    let Query(query) = query_result.map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Missing page path: {e}"))
    })?;
    let Json(record) = body_result.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse record: {e}"),
        )
    })?;

    let stored = state
        .store
        .upsert(&query.page, record)
        .await
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    tracing::info!(page = %stored.page_path, "Stored SEO record");
    Ok(Json(stored))
}

/// Delete a record (DELETE /api/seo?page=<path>).
pub async fn delete_seo(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<StatusCode, (StatusCode, String)> {
    let removed = state
        .store
        .remove(&query.page)
        .await
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    if removed {
        tracing::info!(page = %query.page, "Deleted SEO record");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(error_response(
            StatusCode::NOT_FOUND,
            format!("No SEO record for {}", query.page),
        ))
    }
}

/// Render every head fragment for a page (GET /api/seo/render?page=<path>).
pub async fn render_seo(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageSeo>, AppError> {
    let bundle = state.aggregator.get_complete_for_page(&query.page).await?;
    Ok(Json(bundle))
}

/// Look up records for several pages (GET /api/seo/batch?pages=/a,/b).
pub async fn batch_seo(
    State(state): State<AppState>,
    Query(query): Query<BatchQuery>,
) -> Result<Json<BTreeMap<String, Option<SeoRecord>>>, AppError> {
    let paths: Vec<String> = query
        .pages
        .split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(String::from)
        .collect();

    let records = state.aggregator.get_for_multiple_pages(&paths).await?;
    Ok(Json(records))
}

/// Validate a candidate record (POST /api/seo/validate).
///
/// Advisory only: nothing is stored, and callers decide whether a failing
/// report should block their save.
pub async fn validate_seo(Json(record): Json<SeoRecord>) -> Json<SeoReport> {
    Json(validate(&record))
}
