//! Shared application state for the web server.

use aurora_common::AuroraConfig;
use aurora_molecules::SearchPipeline;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use crate::session::SessionContext;
use crate::templates::Templates;

/// Events pushed to connected clients via SSE.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// A search was submitted and is being ranked
    SearchStarted { target: String },
    /// A search finished
    SearchCompleted { run_id: String, target: String, shortlisted: usize },
    /// A CSV or PDF download was produced
    ExportGenerated { run_id: String, format: String },
}

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: AuroraConfig,
    pub pipeline: SearchPipeline,
    pub templates: Templates,
    sessions: RwLock<HashMap<Uuid, SessionContext>>,
    /// Broadcast channel for SSE push events
    pub event_tx: broadcast::Sender<AppEvent>,
}

impl AppState {
    pub fn new(config: AuroraConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let (event_tx, _) = broadcast::channel(256);
        Ok(Self {
            pipeline: SearchPipeline::new(&config.search),
            templates: Templates::new()?,
            sessions: RwLock::new(HashMap::new()),
            config,
            event_tx,
        })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.event_tx.subscribe()
    }

    /// Fire-and-forget; having no subscribers is normal.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }

    /// Snapshot of a session, or a fresh one built from config defaults.
    pub async fn session(&self, id: Uuid) -> SessionContext {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .unwrap_or_else(|| SessionContext::new(&self.config))
    }

    pub async fn store_session(&self, id: Uuid, session: SessionContext) {
        self.sessions.write().await.insert(id, session);
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

pub type SharedState = Arc<AppState>;
