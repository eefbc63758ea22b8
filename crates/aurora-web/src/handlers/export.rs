//! CSV and PDF downloads of the session's current shortlist.

use aurora_report::{csv_export, pdf};
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use axum_extra::headers::Cookie;
use axum_extra::TypedHeader;
use tracing::info;

use crate::error::ApiError;
use crate::handlers::SessionHandle;
use crate::state::{AppEvent, SharedState};

fn attachment(content_type: &'static str, file_name: &str, body: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{file_name}\"")),
        ],
        body,
    )
        .into_response()
}

/// GET /export/csv
pub async fn export_csv(
    State(state): State<SharedState>,
    cookie: Option<TypedHeader<Cookie>>,
) -> Result<Response, ApiError> {
    let session = SessionHandle::load(&state, cookie).await;
    let run = session.context.require_run(&state.pipeline)?;

    let body = csv_export::to_csv(&run.shortlist)?;
    info!("CSV export for run {} ({} rows)", run.run_id, run.shortlist.len());
    state.publish(AppEvent::ExportGenerated { run_id: run.run_id, format: "csv".into() });

    session.respond(attachment(
        "text/csv; charset=utf-8",
        &state.config.report.csv_file_name,
        body,
    ))
}

/// GET /export/pdf
pub async fn export_pdf(
    State(state): State<SharedState>,
    cookie: Option<TypedHeader<Cookie>>,
) -> Result<Response, ApiError> {
    let session = SessionHandle::load(&state, cookie).await;
    let run = session.context.require_run(&state.pipeline)?;

    let body = pdf::render_run(&state.config.report.title, &run)?;
    info!("PDF export for run {} ({} bytes)", run.run_id, body.len());
    state.publish(AppEvent::ExportGenerated { run_id: run.run_id, format: "pdf".into() });

    session.respond(attachment(
        "application/pdf",
        &state.config.report.pdf_file_name,
        body,
    ))
}
