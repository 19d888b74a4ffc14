//! Mock onboarding routes
//!
//! `POST /api/onboard` echoes any JSON body back after a fixed delay. There is
//! no validation, persistence or authentication here.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

/// Shared state for the onboarding route
#[derive(Debug, Clone)]
pub struct MockState {
    pub delay: Duration,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create the onboarding routes
pub fn onboard_routes(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/api/onboard", post(onboard_handler))
        .with_state(state)
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn onboard_handler(State(state): State<Arc<MockState>>, body: Bytes) -> impl IntoResponse {
    // Simulated processing time
    tokio::time::sleep(state.delay).await;

    match serde_json::from_slice::<Value>(&body) {
        Ok(data) => {
            tracing::info!(%data, "Mock API received submission");
            (
                StatusCode::OK,
                Json(json!({
                    "status": "success",
                    "message": "Form submitted successfully (mock response)",
                    "data": data,
                })),
            )
        }
        Err(e) => {
            tracing::error!("Mock API error: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Mock API error - check server logs" })),
            )
        }
    }
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
