//! Health check endpoints.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;

/// Health payload for `/healthz`.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    /// Number of configured feed sources.
    pub sources: usize,
}

/// GET /livez - basic liveness probe, returns 200 immediately.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - reports the configured source count.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        sources: state.config.sources.len(),
    })
}
