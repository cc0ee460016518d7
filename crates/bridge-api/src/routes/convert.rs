//! Base-unit conversion endpoints

use axum::{routing::post, Json, Router};
use bridge_amounts::{
    from_base_units, parse_base_units, to_base_units, to_base_units_exact, AmountError,
};
use serde_json::Value;

use super::{reject, Rejection};
use crate::dto::{
    amount_from_value, decimals_from_value, AmountResponse, FromBaseUnitsRequest,
    ToBaseUnitsRequest, ToBaseUnitsResponse,
};
use crate::AppState;

/// Create conversion routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/to-base-units", post(to_base_units_handler))
        .route("/from-base-units", post(from_base_units_handler))
}

/// POST /convert/to-base-units - Scale a human amount into integer base units
pub async fn to_base_units_handler(
    Json(request): Json<ToBaseUnitsRequest>,
) -> Result<Json<ToBaseUnitsResponse>, Rejection> {
    let amount = amount_from_value(&request.amount).map_err(reject)?;
    let decimals = decimals_from_value(&request.decimals).map_err(reject)?;

    let base_units = if request.exact {
        to_base_units_exact(&amount, decimals)
    } else {
        to_base_units(&amount, decimals)
    }
    .map_err(reject)?;

    Ok(Json(ToBaseUnitsResponse {
        base_units: base_units.to_string(),
    }))
}

/// POST /convert/from-base-units - Scale integer base units into a human amount
pub async fn from_base_units_handler(
    Json(request): Json<FromBaseUnitsRequest>,
) -> Result<Json<AmountResponse>, Rejection> {
    let decimals = decimals_from_value(&request.decimals).map_err(reject)?;
    let units = match &request.amount {
        Value::String(s) => parse_base_units(s),
        Value::Number(n) => parse_base_units(&n.to_string()),
        Value::Null => Err(AmountError::invalid_amount("missing amount")),
        other => Err(AmountError::invalid_amount(format!(
            "{} is not an integer base-unit amount",
            other
        ))),
    }
    .map_err(reject)?;

    Ok(Json(AmountResponse {
        amount: from_base_units(&units, decimals),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    fn to_request(amount: Value, decimals: Value) -> ToBaseUnitsRequest {
        ToBaseUnitsRequest {
            amount,
            decimals,
            exact: false,
        }
    }

    #[tokio::test]
    async fn test_to_base_units() {
        let response = to_base_units_handler(Json(to_request(json!("1"), json!(18))))
            .await
            .unwrap();
        assert_eq!(response.0.base_units, "1000000000000000000");
    }

    #[tokio::test]
    async fn test_to_base_units_rejects_negative() {
        let (status, body) = to_base_units_handler(Json(to_request(json!("-5"), json!(18))))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.code, "invalid_amount");
    }

    #[tokio::test]
    async fn test_to_base_units_exact() {
        let request = ToBaseUnitsRequest {
            amount: json!("1.1234567"),
            decimals: json!("6"),
            exact: true,
        };
        let (status, body) = to_base_units_handler(Json(request)).await.unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.0.code, "excess_precision");
    }

    #[tokio::test]
    async fn test_from_base_units() {
        let request = FromBaseUnitsRequest {
            amount: json!("1500000"),
            decimals: json!(6),
        };
        let response = from_base_units_handler(Json(request)).await.unwrap();
        assert_eq!(response.0.amount, "1.5");

        let request = FromBaseUnitsRequest {
            amount: json!(42),
            decimals: json!(0),
        };
        let response = from_base_units_handler(Json(request)).await.unwrap();
        assert_eq!(response.0.amount, "42");
    }

    #[tokio::test]
    async fn test_from_base_units_requires_integer_units() {
        for amount in [json!("1.5"), json!(" 7 "), json!("1e3"), json!(""), json!(1.5)] {
            let request = FromBaseUnitsRequest {
                amount: amount.clone(),
                decimals: json!(0),
            };
            let (status, body) = from_base_units_handler(Json(request)).await.unwrap_err();
            assert_eq!(status, StatusCode::BAD_REQUEST, "amount {}", amount);
            assert_eq!(body.0.code, "invalid_amount", "amount {}", amount);
        }
    }

    #[tokio::test]
    async fn test_from_base_units_large_json_number() {
        let request = FromBaseUnitsRequest {
            amount: serde_json::from_str("100000000000000000000000000001").unwrap(),
            decimals: json!(18),
        };
        let response = from_base_units_handler(Json(request)).await.unwrap();
        assert_eq!(response.0.amount, "100000000000.000000000000000001");
    }

    #[tokio::test]
    async fn test_from_base_units_rejects_bad_decimals() {
        let request = FromBaseUnitsRequest {
            amount: json!("100"),
            decimals: json!(-1),
        };
        let (_, body) = from_base_units_handler(Json(request)).await.unwrap_err();
        assert_eq!(body.0.code, "invalid_decimals");
    }
}
