//! Session Routes

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use session_store::SessionHistory;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::AppState;

/// Session descriptor
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub prediction_count: usize,
}

/// Get the current session
pub async fn get_session(State(state): State<Arc<AppState>>) -> Json<SessionInfo> {
    let history = state.history.read().await;
    Json(SessionInfo {
        session_id: history.session_id(),
        started_at: history.started_at(),
        prediction_count: history.len(),
    })
}

/// Tear down the current session and start a fresh one
pub async fn reset_session(State(state): State<Arc<AppState>>) -> Json<SessionInfo> {
    let mut history = state.history.write().await;
    *history = SessionHistory::new();
    info!(session_id = %history.session_id(), "session reset");

    Json(SessionInfo {
        session_id: history.session_id(),
        started_at: history.started_at(),
        prediction_count: 0,
    })
}
