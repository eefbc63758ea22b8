//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    search::{search_page, search_submit},
    api::{api_targets, api_candidates, api_shortlist, api_icon},
    export::{export_csv, export_pdf},
};
use crate::sse::sse_handler;

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Page
        .route("/",           get(search_page))
        .route("/search",     post(search_submit))

        // Downloads
        .route("/export/csv", get(export_csv))
        .route("/export/pdf", get(export_pdf))

        // SSE streaming
        .route("/api/events", get(sse_handler))

        // API endpoints
        .route("/api/targets",      get(api_targets))
        .route("/api/candidates",   get(api_candidates))
        .route("/api/shortlist",    get(api_shortlist))
        .route("/api/icons/{name}", get(api_icon))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
