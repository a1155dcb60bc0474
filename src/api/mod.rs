mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::LlmsConfig;
use crate::models::Catalog;

/// Route serving the concatenated catalog.
pub const LLMS_FULL_TXT_PATH: &str = "/docs/llm/llms-full.txt";

/// Shared, read-only request state.
///
/// The catalog snapshot and the configuration are fixed when the router is
/// built; handlers never reload either.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<LlmsConfig>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: LlmsConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(LLMS_FULL_TXT_PATH, get(handlers::llms_full_txt))
        .route("/health", get(handlers::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
