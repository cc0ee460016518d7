//! API route handlers

pub mod config;
pub mod convert;
pub mod format;
pub mod health;
pub mod pool;

use axum::{http::StatusCode, routing::get, Json, Router};
use bridge_amounts::AmountError;

use crate::dto::ApiError;
use crate::AppState;

/// Handler error: status plus JSON body
pub type Rejection = (StatusCode, Json<ApiError>);

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/convert", convert::router())
        .nest("/format", format::router())
        .nest("/pool", pool::router())
        .nest("/config", config::router())
        .with_state(state)
}

/// Map an amount error onto an HTTP rejection
pub(crate) fn reject(err: AmountError) -> Rejection {
    tracing::warn!("Rejecting request: {}", err);
    (
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST),
        Json(ApiError::from(&err)),
    )
}
