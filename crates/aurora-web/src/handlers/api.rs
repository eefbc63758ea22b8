//! JSON API and icon endpoint.

use aurora_common::hash::target_seed;
use aurora_common::CandidateRecord;
use aurora_molecules::{generate, synthesize, SearchRequest, SearchRun};
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::SharedState;

/// Upper bound on `/api/candidates?count=`.
const MAX_BATCH: usize = 1000;
/// Upper bound on `/api/icons/{name}?size=`.
const MAX_ICON_SIZE: u32 = 1024;
/// Seed used when `/api/candidates` is called without one.
const DEFAULT_SEED: u64 = 42;

// === API Types ===

#[derive(Debug, Serialize)]
pub struct ApiTarget {
    pub symbol: String,
    pub indication: String,
    pub label: String,
    pub seed: u64,
}

#[derive(Deserialize, Default)]
pub struct CandidateParams {
    pub count: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Deserialize)]
pub struct ShortlistParams {
    pub target: String,
    pub max_toxicity: Option<f64>,
    pub top_n: Option<usize>,
}

#[derive(Deserialize, Default)]
pub struct IconParams {
    pub size: Option<u32>,
}

// === Handlers ===

/// GET /api/targets
pub async fn api_targets(State(state): State<SharedState>) -> Json<Vec<ApiTarget>> {
    let targets = state
        .config
        .targets
        .iter()
        .map(|t| {
            let label = t.label();
            ApiTarget {
                symbol: t.symbol.clone(),
                indication: t.indication.clone(),
                seed: target_seed(&label),
                label,
            }
        })
        .collect();
    Json(targets)
}

/// GET /api/candidates — raw generator output, best first.
pub async fn api_candidates(
    State(state): State<SharedState>,
    Query(params): Query<CandidateParams>,
) -> Result<Json<Vec<CandidateRecord>>, ApiError> {
    let count = params.count.unwrap_or(state.config.search.pool_size);
    if count > MAX_BATCH {
        return Err(ApiError::BadRequest(format!("count {count} exceeds {MAX_BATCH}")));
    }
    let records = generate(count, params.seed.unwrap_or(DEFAULT_SEED))?;
    Ok(Json(records))
}

/// GET /api/shortlist — a full run for an arbitrary target label.
pub async fn api_shortlist(
    State(state): State<SharedState>,
    Query(params): Query<ShortlistParams>,
) -> Result<Json<SearchRun>, ApiError> {
    let search = &state.config.search;
    let request = SearchRequest {
        target: params.target,
        max_toxicity: params.max_toxicity.unwrap_or(search.default_max_toxicity),
        top_n: params.top_n.unwrap_or(search.default_top_n),
    };
    let run = state.pipeline.run(&request, chrono::Local::now().naive_local())?;
    Ok(Json(run))
}

/// GET /api/icons/{name} — the molecule icon as SVG.
pub async fn api_icon(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    Query(params): Query<IconParams>,
) -> Result<impl IntoResponse, ApiError> {
    let size = params.size.unwrap_or(state.config.search.icon_size);
    if size > MAX_ICON_SIZE {
        return Err(ApiError::BadRequest(format!("size {size} exceeds {MAX_ICON_SIZE}")));
    }
    let icon = synthesize(&name, size)?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], icon.svg))
}
