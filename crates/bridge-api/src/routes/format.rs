//! Display formatting endpoints

use axum::{extract::State, routing::post, Json, Router};
use bridge_amounts::{format, format_currency, truncate_fixed, truncate_middle, AmountError};

use super::{reject, Rejection};
use crate::dto::{
    amount_from_value, FormatRequest, FormatResponse, IdentifierRequest, TruncateRequest,
    ValueResponse,
};
use crate::AppState;

/// Preset used when a request names neither a policy nor a preset
const DEFAULT_PRESET: &str = "balance";

/// Create formatting routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(format_value))
        .route("/truncate", post(truncate_value))
        .route("/identifier", post(shorten_identifier))
}

/// POST /format - Round and group a value for display
pub async fn format_value(
    State(state): State<AppState>,
    Json(request): Json<FormatRequest>,
) -> Result<Json<FormatResponse>, Rejection> {
    let policy = match (request.policy, request.preset.as_deref()) {
        (Some(policy), _) => policy,
        (None, preset) => {
            let name = preset.unwrap_or(DEFAULT_PRESET);
            state.preset(name).await.ok_or_else(|| {
                reject(AmountError::invalid_policy(format!(
                    "unknown preset '{}'",
                    name
                )))
            })?
        }
    };

    let value = amount_from_value(&request.value).map_err(reject)?;
    let formatted = match request.symbol.as_deref() {
        Some(symbol) => format_currency(&value, &policy, symbol),
        None => format(&value, &policy),
    }
    .map_err(reject)?;

    Ok(Json(FormatResponse { formatted }))
}

/// POST /format/truncate - Pad or cut to a fixed number of fraction digits
pub async fn truncate_value(
    Json(request): Json<TruncateRequest>,
) -> Result<Json<ValueResponse>, Rejection> {
    let value = amount_from_value(&request.value).map_err(reject)?;
    let value = truncate_fixed(&value, request.fraction_digits).map_err(reject)?;
    Ok(Json(ValueResponse { value }))
}

/// POST /format/identifier - Shorten an address or transaction hash
///
/// `edge_length` must be at least 1, the same rule the display config enforces.
pub async fn shorten_identifier(
    State(state): State<AppState>,
    Json(request): Json<IdentifierRequest>,
) -> Result<Json<ValueResponse>, Rejection> {
    let edge_length = match request.edge_length {
        Some(0) => {
            return Err(reject(AmountError::invalid_policy(
                "edge_length must be at least 1",
            )))
        }
        Some(edge_length) => edge_length,
        None => state.display().await.identifier_edge_length,
    };
    let identifier = request.identifier.unwrap_or_default();
    Ok(Json(ValueResponse {
        value: truncate_middle(&identifier, edge_length),
    }))
}
