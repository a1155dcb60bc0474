use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::AppState;
use crate::error::CatalogError;
use crate::llms;

const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

// ============================================================
// Error Handling
// ============================================================

/// Map an export error to a response.
///
/// A disabled export is a plain 404. Anything else is logged in full
/// server-side and reported to the client as a generic server error, so file
/// system paths never leak into the response.
fn export_error(e: CatalogError) -> (StatusCode, String) {
    match e {
        CatalogError::Disabled => (StatusCode::NOT_FOUND, e.to_string()),
        other => {
            tracing::error!("Internal error: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// llms-full.txt
// ============================================================

/// Every catalog resource's source text, joined by newlines.
pub async fn llms_full_txt(
    State(state): State<AppState>,
) -> Result<Response, (StatusCode, String)> {
    if !state.config.llms_txt.enabled {
        return Err(export_error(CatalogError::Disabled));
    }

    // Reads are blocking and sequential; keep them off the async workers.
    let body = tokio::task::spawn_blocking(move || llms::render(&state.catalog, &state.config))
        .await
        .map_err(|e| {
            tracing::error!("Export task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        })?
        .map_err(export_error)?;

    Ok(([(header::CONTENT_TYPE, TEXT_PLAIN_UTF8)], body).into_response())
}
