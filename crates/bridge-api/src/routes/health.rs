//! Health check endpoint

use axum::Json;

use crate::dto::HealthResponse;

/// GET /health - Check API health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::SERVICE_NAME;

    #[tokio::test]
    async fn test_health_names_service() {
        let response = health_check().await;
        assert_eq!(response.0.status, "ok");
        assert_eq!(response.0.service, SERVICE_NAME);
        assert_eq!(response.0.version, env!("CARGO_PKG_VERSION"));
    }
}
