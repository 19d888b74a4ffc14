//! # Mock submission endpoint
//!
//! Stand-in for the real onboarding API so the form can be exercised end to
//! end: `onboard-tui mock-server` plus `ONBOARD_URL=http://127.0.0.1:3000/api/onboard`.

mod config;
mod routes;

pub use config::{MockServerConfig, DEFAULT_DELAY_MS};

use anyhow::{Context, Result};
use axum::Router;
use routes::{health_routes, onboard_routes, MockState};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the mock router with the given per-request delay
pub fn router(delay: Duration) -> Router {
    let state = Arc::new(MockState { delay });

    // Browsers posting from a dev server need permissive CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health_routes())
        .merge(onboard_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped
pub async fn serve(config: MockServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind mock server to {}", config.addr))?;

    tracing::info!(
        "Mock onboarding endpoint listening on {} (delay {}ms)",
        config.endpoint_url(),
        config.delay_ms
    );

    axum::serve(listener, router(config.delay()))
        .await
        .context("mock server stopped with an error")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::time::Instant;
    use tower::ServiceExt;

    async fn post(router: Router, body: &'static str) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/onboard")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_echoes_arbitrary_json() {
        let (status, body) = post(router(Duration::ZERO), r#"{"anything":[1,2,3]}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "status": "success",
                "message": "Form submitted successfully (mock response)",
                "data": { "anything": [1, 2, 3] },
            })
        );
    }

    #[tokio::test]
    async fn test_invalid_json_is_server_error() {
        let (status, body) = post(router(Duration::ZERO), "{not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Mock API error - check server logs" }));
    }

    #[tokio::test]
    async fn test_response_is_delayed() {
        let started = Instant::now();
        let (status, _) = post(router(Duration::from_millis(50)), "{}").await;
        assert_eq!(status, StatusCode::OK);
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_health() {
        let response = router(Duration::ZERO)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_on_onboard_is_not_allowed() {
        let response = router(Duration::ZERO)
            .oneshot(
                Request::builder()
                    .uri("/api/onboard")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
