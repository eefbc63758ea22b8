//! Server-Sent Events stream of search and export activity.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures_core::Stream;
use std::convert::Infallible;
use std::time::Duration;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::state::SharedState;

/// GET /api/events. Lagged receivers silently skip missed events.
pub async fn sse_handler(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.subscribe()).filter_map(|result| {
        let event = result.ok()?;
        let data = serde_json::to_string(&event).ok()?;
        Some(Ok(Event::default().event(event_name(&event)).data(data)))
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}

fn event_name(event: &crate::state::AppEvent) -> &'static str {
    use crate::state::AppEvent::*;
    match event {
        SearchStarted { .. } => "search_started",
        SearchCompleted { .. } => "search_completed",
        ExportGenerated { .. } => "export_generated",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppEvent;

    #[test]
    fn test_event_names_match_serde_tags() {
        let events = [
            AppEvent::SearchStarted { target: "ALK".into() },
            AppEvent::SearchCompleted { run_id: "1".into(), target: "ALK".into(), shortlisted: 3 },
            AppEvent::ExportGenerated { run_id: "1".into(), format: "csv".into() },
        ];
        for event in &events {
            let json: serde_json::Value = serde_json::to_value(event).unwrap();
            assert_eq!(json["type"], event_name(event));
        }
    }
}
