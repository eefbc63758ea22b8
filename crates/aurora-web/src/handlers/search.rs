//! The search page and its form submit.

use std::time::Duration;

use aurora_common::config::DATABASES;
use aurora_common::AuroraError;
use aurora_molecules::{synthesize, MoleculeIcon, SearchRequest, SearchRun};
use aurora_report::charts::{result_charts, Chart};
use axum::{
    extract::State,
    response::{Html, Redirect, Response},
    Form,
};
use axum_extra::headers::Cookie;
use axum_extra::TypedHeader;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::handlers::SessionHandle;
use crate::state::{AppEvent, AppState, SharedState};
use crate::templates::INDEX;

/// Rows at or above this rank get the highlight class.
const HIGHLIGHT_RANKS: usize = 3;

// ── Form input ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub target: String,
    pub max_toxicity: f64,
    pub top_n: usize,
}

// ── View model ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct TargetOption {
    label: String,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct TableRow {
    rank: usize,
    name: String,
    activity: String,
    toxicity: String,
    composite_score: String,
    status: &'static str,
    highlight: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct ResultsView {
    target: String,
    max_toxicity: String,
    top_n: usize,
    run_id: String,
    started_at: String,
    rows: Vec<TableRow>,
    icons: Vec<MoleculeIcon>,
    charts: Vec<Chart>,
}

#[derive(Debug, Serialize)]
struct PageView {
    page_title: String,
    targets: Vec<TargetOption>,
    databases: &'static [&'static str],
    max_toxicity: f64,
    max_toxicity_label: String,
    top_n: usize,
    min_top_n: usize,
    max_top_n: usize,
    results: Option<ResultsView>,
}

fn results_view(run: &SearchRun, icon_size: u32) -> Result<ResultsView, ApiError> {
    let rows = run
        .shortlist
        .iter()
        .map(|entry| TableRow {
            rank: entry.rank,
            name: entry.record.name.clone(),
            activity: format!("{:.2}", entry.record.activity),
            toxicity: format!("{:.2}", entry.record.toxicity),
            composite_score: format!("{:.2}", entry.record.composite_score),
            status: entry.record.status.as_str(),
            highlight: (entry.rank <= HIGHLIGHT_RANKS).then_some("highlight"),
        })
        .collect();

    let icons = run
        .records()
        .map(|r| synthesize(&r.name, icon_size))
        .collect::<aurora_common::Result<Vec<_>>>()?;

    Ok(ResultsView {
        target: run.target.clone(),
        max_toxicity: format!("{:.2}", run.max_toxicity),
        top_n: run.top_n,
        run_id: run.run_id.clone(),
        started_at: run.started_at_display(),
        rows,
        icons,
        charts: result_charts(&run.shortlist),
    })
}

fn page_view(state: &AppState, request: &SearchRequest, run: Option<&SearchRun>) -> Result<PageView, ApiError> {
    let search = &state.config.search;
    let targets = state
        .config
        .targets
        .iter()
        .map(|t| {
            let label = t.label();
            TargetOption {
                selected: label == request.target,
                label,
            }
        })
        .collect();

    let results = run.map(|r| results_view(r, search.icon_size)).transpose()?;

    Ok(PageView {
        page_title: state.config.report.title.clone(),
        targets,
        databases: &DATABASES,
        max_toxicity: request.max_toxicity,
        max_toxicity_label: format!("{:.2}", request.max_toxicity),
        top_n: request.top_n,
        min_top_n: search.min_top_n,
        max_top_n: search.max_top_n,
        results,
    })
}

/// GET / — the page, with results once this session has run a search.
pub async fn search_page(
    State(state): State<SharedState>,
    cookie: Option<TypedHeader<Cookie>>,
) -> Result<Response, ApiError> {
    let session = SessionHandle::load(&state, cookie).await;
    let run = session.context.current_run(&state.pipeline).transpose()?;

    let view = page_view(&state, &session.context.request, run.as_ref())?;
    let html = state.templates.render(INDEX, &view)?;
    debug!("Rendered search page (results: {})", run.is_some());
    session.respond(Html(html))
}

/// POST /search — run the search and redirect back to the page.
pub async fn search_submit(
    State(state): State<SharedState>,
    cookie: Option<TypedHeader<Cookie>>,
    Form(form): Form<SearchForm>,
) -> Result<Response, ApiError> {
    let mut session = SessionHandle::load(&state, cookie).await;

    if state.config.find_target(&form.target).is_none() {
        return Err(AuroraError::invalid(format!("unknown target: {}", form.target)).into());
    }
    let request = SearchRequest {
        target: form.target,
        max_toxicity: form.max_toxicity,
        top_n: form.top_n,
    };
    state.pipeline.validate(&request)?;

    state.publish(AppEvent::SearchStarted { target: request.target.clone() });

    let latency = state.config.search.simulated_latency_ms;
    if latency > 0 {
        tokio::time::sleep(Duration::from_millis(latency)).await;
    }

    let started_at = chrono::Local::now().naive_local();
    let run = state.pipeline.run(&request, started_at)?;

    session.context.mark_run(request, started_at);
    state.store_session(session.id, session.context.clone()).await;

    info!(
        "Session {} ran search {} for {} ({} shortlisted)",
        session.id, run.run_id, run.target, run.shortlist.len()
    );
    state.publish(AppEvent::SearchCompleted {
        run_id: run.run_id.clone(),
        target: run.target.clone(),
        shortlisted: run.shortlist.len(),
    });

    session.respond(Redirect::to("/"))
}
