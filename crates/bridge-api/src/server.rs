//! HTTP server setup and configuration

use std::net::{IpAddr, SocketAddr};

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::routes::create_router;
use crate::AppState;

/// Largest request body accepted, in bytes
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Create the full application router with middleware
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_router(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the HTTP server on the configured address
pub async fn start_server(state: AppState) -> Result<(), std::io::Error> {
    let api = state.config().await.api;
    let ip = api.host.parse::<IpAddr>().map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid host '{}': {}", api.host, e),
        )
    })?;
    let addr = SocketAddr::new(ip, api.port);
    let app = create_app(state);

    tracing::info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = create_app(AppState::new()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_route() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = create_app(AppState::new()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "bridge-amounts");
    }

    #[tokio::test]
    async fn test_oversized_body_rejected() {
        let body = json!({"amount": "1".repeat(MAX_BODY_BYTES), "decimals": 18});
        let request = Request::builder()
            .method("POST")
            .uri("/convert/to-base-units")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = create_app(AppState::new()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_truncate_digit_limit_over_http() {
        let (status, body) = post_json(
            "/format/truncate",
            json!({"value": "1", "fraction_digits": 65536}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_policy");
    }

    #[tokio::test]
    async fn test_convert_round_trip_over_http() {
        let (status, body) = post_json(
            "/convert/to-base-units",
            json!({"amount": "2.5", "decimals": 6}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["base_units"], "2500000");

        let (status, body) = post_json(
            "/convert/from-base-units",
            json!({"amount": "2500000", "decimals": "6"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["amount"], "2.5");
    }

    #[tokio::test]
    async fn test_invalid_amount_over_http() {
        let (status, body) = post_json(
            "/convert/to-base-units",
            json!({"amount": "abc", "decimals": 18}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_amount");
    }

    #[tokio::test]
    async fn test_pool_share_over_http() {
        let (status, body) = post_json(
            "/pool/share",
            json!({"lp_balance": "1", "lp_total_supply": "3", "reserve_a": "1", "reserve_b": "2"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["share_pct"], "33.33");
        assert_eq!(body["pooled_b"], "0.666667");
    }
}
