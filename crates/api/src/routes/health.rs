//! Health check endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use persistence::db::ping;
use persistence::metrics::record_pool_metrics;
use serde::Serialize;
use std::time::Instant;

use crate::app::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: DatabaseHealth,
    pub telemetry_enabled: bool,
}

/// Database health status.
#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub connected: bool,
    pub latency_ms: Option<u64>,
}

/// Simple status response for liveness/readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Full health check including database round-trip latency.
///
/// GET /health
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let start = Instant::now();
    let connected = ping(&state.pool).await.is_ok();
    let latency_ms = start.elapsed().as_millis() as u64;
    record_pool_metrics(&state.pool);

    let status = if connected {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if connected { "healthy" } else { "unhealthy" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: DatabaseHealth {
            connected,
            latency_ms: connected.then_some(latency_ms),
        },
        telemetry_enabled: state.telemetry.is_some(),
    };

    (status, Json(response))
}

/// Liveness probe: 200 while the process runs.
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}

/// Readiness probe: 200 only when the database answers.
pub async fn ready(State(state): State<AppState>) -> Result<Json<StatusResponse>, StatusCode> {
    if ping(&state.pool).await.is_ok() {
        Ok(Json(StatusResponse {
            status: "ready".to_string(),
        }))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}
