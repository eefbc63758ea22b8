//! Per-browser session context.
//!
//! A session only remembers whether a search has been run and with which
//! parameters. Results are recomputed from that request on every render.

use aurora_common::AuroraConfig;
use aurora_molecules::{SearchPipeline, SearchRequest, SearchRun};
use axum::http::{header, HeaderValue};
use axum_extra::headers::Cookie;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::error::ApiError;

pub const SESSION_COOKIE: &str = "aurora_session";

#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    /// Set once the user presses "Run search"; gates the results section
    pub has_run: bool,
    pub request: SearchRequest,
    pub started_at: Option<NaiveDateTime>,
}

impl SessionContext {
    pub fn new(config: &AuroraConfig) -> Self {
        Self {
            has_run: false,
            request: SearchRequest {
                target: config.targets.first().map(|t| t.label()).unwrap_or_default(),
                max_toxicity: config.search.default_max_toxicity,
                top_n: config.search.default_top_n,
            },
            started_at: None,
        }
    }

    pub fn mark_run(&mut self, request: SearchRequest, started_at: NaiveDateTime) {
        self.has_run = true;
        self.request = request;
        self.started_at = Some(started_at);
    }

    /// Re-run the stored request. `None` until a search has been submitted.
    pub fn current_run(&self, pipeline: &SearchPipeline) -> Option<Result<SearchRun, ApiError>> {
        match (self.has_run, self.started_at) {
            (true, Some(started_at)) => {
                Some(pipeline.run(&self.request, started_at).map_err(ApiError::from))
            }
            _ => None,
        }
    }

    pub fn require_run(&self, pipeline: &SearchPipeline) -> Result<SearchRun, ApiError> {
        self.current_run(pipeline).unwrap_or(Err(ApiError::NoRun))
    }
}

/// Resolve the session id from the request cookie. The flag is true when a
/// new id was minted and must be sent back.
pub fn resolve_id(cookie: Option<&Cookie>) -> (Uuid, bool) {
    match cookie
        .and_then(|c| c.get(SESSION_COOKIE))
        .and_then(|v| Uuid::parse_str(v).ok())
    {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    }
}

/// `Set-Cookie` header pinning the session id.
pub fn set_cookie(id: Uuid) -> Result<(header::HeaderName, HeaderValue), ApiError> {
    let value = HeaderValue::try_from(format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax"))
        .map_err(|e| ApiError::Internal(format!("invalid session cookie: {e}")))?;
    Ok((header::SET_COOKIE, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_new_session_uses_config_defaults() {
        let config = AuroraConfig::default();
        let session = SessionContext::new(&config);
        assert!(!session.has_run);
        assert_eq!(session.request.target, "EGFR (non-small cell lung cancer)");
        assert_eq!(session.request.top_n, 5);
        let pipeline = SearchPipeline::new(&config.search);
        assert!(session.current_run(&pipeline).is_none());
        assert!(matches!(session.require_run(&pipeline), Err(ApiError::NoRun)));
    }

    #[test]
    fn test_mark_run_enables_results() {
        let config = AuroraConfig::default();
        let pipeline = SearchPipeline::new(&config.search);
        let mut session = SessionContext::new(&config);
        let at = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap().and_hms_opt(3, 4, 0).unwrap();
        let mut request = session.request.clone();
        request.top_n = 3;
        session.mark_run(request, at);

        let run = session.require_run(&pipeline).unwrap();
        assert!(run.shortlist.len() <= 3);
        assert_eq!(run.started_at, at);
    }

    #[test]
    fn test_resolve_id_mints_when_missing() {
        let (_, minted) = resolve_id(None);
        assert!(minted);
    }

    #[test]
    fn test_set_cookie_format() {
        let id = Uuid::new_v4();
        let (name, value) = set_cookie(id).unwrap();
        assert_eq!(name, header::SET_COOKIE);
        assert!(value.to_str().unwrap().starts_with(&format!("aurora_session={id};")));
    }
}
