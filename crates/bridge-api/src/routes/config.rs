//! Display configuration endpoints

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use bridge_core::DisplayConfig;

use super::Rejection;
use crate::dto::ApiError;
use crate::AppState;

/// Create config routes
pub fn router() -> Router<AppState> {
    Router::new().route("/display", get(get_display).put(set_display))
}

/// GET /config/display - Current display presets
pub async fn get_display(State(state): State<AppState>) -> Json<DisplayConfig> {
    Json(state.display().await)
}

/// PUT /config/display - Replace display presets
pub async fn set_display(
    State(state): State<AppState>,
    Json(display): Json<DisplayConfig>,
) -> Result<Json<DisplayConfig>, Rejection> {
    state.set_display(display).await.map_err(|e| {
        tracing::warn!("Rejected display config: {}", e);
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("invalid_config", e.to_string())),
        )
    })?;
    Ok(Json(state.display().await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_core::FormatPolicy;

    #[tokio::test]
    async fn test_update_display() {
        let state = AppState::new();
        let mut display = DisplayConfig::default();
        display.balance = FormatPolicy::new(0, 4, true).unwrap();

        let updated = set_display(State(state.clone()), Json(display))
            .await
            .unwrap();
        assert_eq!(updated.0.balance.max_fraction_digits, 4);
        assert_eq!(get_display(State(state)).await.0.balance.max_fraction_digits, 4);
    }

    #[tokio::test]
    async fn test_update_display_rejects_zero_edge() {
        let mut display = DisplayConfig::default();
        display.identifier_edge_length = 0;
        let (status, body) = set_display(State(AppState::new()), Json(display))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.code, "invalid_config");
    }
}
