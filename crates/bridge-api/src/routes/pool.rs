//! Liquidity pool endpoints

use axum::{routing::post, Json, Router};
use bridge_amounts::PoolShare;

use super::{reject, Rejection};
use crate::dto::{amount_from_value, PoolShareRequest};
use crate::AppState;

/// Create pool routes
pub fn router() -> Router<AppState> {
    Router::new().route("/share", post(pool_share))
}

/// POST /pool/share - Holder's pooled amounts and share percentage
pub async fn pool_share(
    Json(request): Json<PoolShareRequest>,
) -> Result<Json<PoolShare>, Rejection> {
    let lp_balance = amount_from_value(&request.lp_balance).map_err(reject)?;
    let lp_total_supply = amount_from_value(&request.lp_total_supply).map_err(reject)?;
    let reserve_a = amount_from_value(&request.reserve_a).map_err(reject)?;
    let reserve_b = amount_from_value(&request.reserve_b).map_err(reject)?;

    let share = PoolShare::compute(&lp_balance, &lp_total_supply, &reserve_a, &reserve_b)
        .map_err(reject)?;
    Ok(Json(share))
}
