//! CLV Prediction API Server
//!
//! REST boundary between the prediction engine and the dashboard UI shell.

use anyhow::Context;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod error;
mod routes;
mod settings;

pub use error::ApiError;
pub use settings::{ModelSettings, ServerSettings, Settings};

use customer_profile::Validator;
use inference_engine::ClvModel;
use session_store::SessionHistory;

/// Application state shared across handlers.
///
/// The model is immutable for the process lifetime; the session history
/// carries its own synchronization and is swapped wholesale on session reset.
pub struct AppState {
    /// Pre-trained CLV model
    pub model: ClvModel,
    /// Input range validator
    pub validator: Validator,
    /// Current session's prediction history
    pub history: RwLock<SessionHistory>,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state around a loaded model
    pub fn new(model: ClvModel) -> Self {
        Self {
            model,
            validator: Validator::default(),
            history: RwLock::new(SessionHistory::new()),
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub model: ModelStatus,
    pub metrics: SystemMetrics,
}

/// Loaded model status
#[derive(Debug, Serialize)]
pub struct ModelStatus {
    pub feature_dimension: usize,
    pub tree_count: usize,
}

/// System metrics
#[derive(Debug, Serialize)]
pub struct SystemMetrics {
    pub prediction_count: usize,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route(
            "/api/v1/predictions",
            get(routes::predictions::get_history).post(routes::predictions::create_prediction),
        )
        .route(
            "/api/v1/predictions/export",
            get(routes::predictions::export_history),
        )
        .route(
            "/api/v1/session",
            get(routes::session::get_session).delete(routes::session::reset_session),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let prediction_count = state.history.read().await.len();

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        model: ModelStatus {
            feature_dimension: state.model.feature_dimension(),
            tree_count: state.model.tree_count(),
        },
        metrics: SystemMetrics { prediction_count },
    })
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Load the model per settings and serve until shutdown
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let model = ClvModel::load(&settings.model.artifact_path, &settings.model.features_path)
        .context("loading model artifacts")?;
    let state = Arc::new(AppState::new(model));
    let app = create_router(state);

    let addr = settings.bind_addr();
    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
