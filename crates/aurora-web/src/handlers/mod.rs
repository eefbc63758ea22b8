//! HTTP handlers for all web routes.

pub mod search;
pub mod api;
pub mod export;

use axum::response::{IntoResponse, Response};
use axum_extra::headers::Cookie;
use axum_extra::TypedHeader;
use uuid::Uuid;

use crate::error::ApiError;
use crate::session::{resolve_id, set_cookie, SessionContext};
use crate::state::AppState;

/// Session resolved for one request. Nothing is stored until a search runs.
pub(crate) struct SessionHandle {
    pub id: Uuid,
    pub minted: bool,
    pub context: SessionContext,
}

impl SessionHandle {
    pub async fn load(state: &AppState, cookie: Option<TypedHeader<Cookie>>) -> Self {
        let (id, minted) = resolve_id(cookie.as_ref().map(|TypedHeader(c)| c));
        let context = state.session(id).await;
        Self { id, minted, context }
    }

    /// Attach `Set-Cookie` when the id was minted for this request.
    pub fn respond(&self, response: impl IntoResponse) -> Result<Response, ApiError> {
        let mut response = response.into_response();
        if self.minted {
            let (name, value) = set_cookie(self.id)?;
            response.headers_mut().insert(name, value);
        }
        Ok(response)
    }
}
