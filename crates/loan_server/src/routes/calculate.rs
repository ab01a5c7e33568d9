//! Loan calculation endpoint
//!
//! `POST /api/calculate` validates the body, runs the calculator selected by
//! `interestType` and returns the full amortization table.

use axum::{body::Bytes, extract::State, response::Json, routing::post, Router};
use loan_core::amortization::{assign_payment_dates, calculate};
use loan_core::rng::LoanRng;
use loan_core::types::LoanResult;
use uuid::Uuid;

use super::AppState;
use crate::error::ApiError;
use crate::request::parse_calculate_request;

/// Build the calculation routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/calculate", post(calculate_handler))
}

/// POST /api/calculate - Amortization schedule for a fixed or variable loan
async fn calculate_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoanResult>, ApiError> {
    let request_id = Uuid::new_v4();
    let today = chrono::Utc::now().date_naive();
    let request = parse_calculate_request(&body, state.config.max_term_years, today)?;

    let mut rng = match state.config.rng_seed {
        Some(seed) => LoanRng::from_seed(seed),
        None => LoanRng::from_entropy(),
    };

    tracing::debug!(
        request_id = %request_id,
        interest_type = %request.loan.interest_type(),
        periods = request.loan.periods(),
        fixed_period_months = request.loan.fixed_period_months(),
        seed = rng.seed(),
        "Calculating amortization schedule"
    );

    let mut result = calculate(&request.loan, &mut rng)?;
    if let Some(calendar) = request.calendar {
        result = assign_payment_dates(result, calendar.start, calendar.payment_day)?;
    }

    tracing::debug!(
        request_id = %request_id,
        monthly_payment = result.monthly_payment,
        total_payment = result.total_payment,
        "Schedule calculated"
    );

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::error::ErrorBody;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_state(seed: Option<u64>) -> AppState {
        let config = ServerConfig {
            rng_seed: seed,
            ..Default::default()
        };
        AppState::new(Arc::new(config))
    }

    async fn post_json(state: AppState, body: &str) -> Response {
        routes()
            .with_state(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/calculate")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn read_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_fixed_reference_loan() {
        let response = post_json(
            create_test_state(None),
            r#"{"loanAmount": "100000", "loanTermYears": 1, "interestType": "fijo"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let result: LoanResult = read_body(response).await;
        assert_eq!(result.rate_type, "Fixed (16%)");
        assert_eq!(result.amortization_table.len(), 12);
        assert_eq!(result.amortization_table[0].starting_balance, 100_000.0);
        assert_eq!(result.amortization_table[11].ending_balance, 0.0);
        assert_eq!(result.monthly_payment, result.amortization_table[0].payment);
    }

    #[tokio::test]
    async fn test_response_uses_camel_case_fields() {
        let response = post_json(
            create_test_state(None),
            r#"{"loanAmount": 5000, "loanTermYears": 1, "interestType": "fijo"}"#,
        )
        .await;
        let json: serde_json::Value = read_body(response).await;

        for key in ["monthlyPayment", "totalPayment", "totalInterest", "amortizationTable", "rateType"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        let row = &json["amortizationTable"][0];
        for key in ["period", "startingBalance", "payment", "interest", "principal", "endingBalance"] {
            assert!(row.get(key).is_some(), "missing row field {}", key);
        }
        assert!(row.get("paymentDate").is_none());
    }

    #[tokio::test]
    async fn test_variable_loan_with_seed_is_reproducible() {
        let body = r#"{"loanAmount": 200000, "loanTermYears": 5, "interestType": "variable", "fixedPeriodMonths": 18}"#;

        let first: LoanResult = read_body(post_json(create_test_state(Some(11)), body).await).await;
        let second: LoanResult = read_body(post_json(create_test_state(Some(11)), body).await).await;

        assert_eq!(first, second);
        assert_eq!(first.rate_type, "Hybrid (1 year/6 months at 13.3%)");
        assert_eq!(first.amortization_table.len(), 60);
        for row in &first.amortization_table[..18] {
            assert_eq!(row.payment, first.monthly_payment);
        }
    }

    #[tokio::test]
    async fn test_payment_dates_are_attached() {
        let response = post_json(
            create_test_state(None),
            r#"{"loanAmount": 1200, "loanTermYears": 1, "interestType": "fijo", "paymentDay": 6, "startDate": "2024-12-20"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let result: LoanResult = read_body(response).await;
        assert_eq!(
            result.amortization_table[0].payment_date,
            chrono::NaiveDate::from_ymd_opt(2025, 1, 6)
        );
        assert_eq!(
            result.amortization_table[11].payment_date,
            chrono::NaiveDate::from_ymd_opt(2025, 12, 6)
        );
    }

    #[tokio::test]
    async fn test_non_numeric_amount_returns_400() {
        let response = post_json(
            create_test_state(None),
            r#"{"loanAmount": "abc", "loanTermYears": 1, "interestType": "fijo"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: ErrorBody = read_body(response).await;
        assert!(body.error.contains("loanAmount"));
    }

    #[tokio::test]
    async fn test_bogus_interest_type_returns_400() {
        let response = post_json(
            create_test_state(None),
            r#"{"interestType": "bogus", "loanAmount": 1000, "loanTermYears": 1}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: ErrorBody = read_body(response).await;
        assert!(body.error.contains("bogus"));
    }

    #[tokio::test]
    async fn test_invalid_json_returns_400() {
        let response = post_json(create_test_state(None), "loanAmount=1000").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: ErrorBody = read_body(response).await;
        assert!(!body.error.is_empty());
    }

    #[tokio::test]
    async fn test_overflowing_amount_returns_500() {
        for interest_type in ["fijo", "variable"] {
            let body = format!(
                r#"{{"loanAmount": 1e307, "loanTermYears": 10, "interestType": "{}"}}"#,
                interest_type
            );
            let response = post_json(create_test_state(Some(5)), &body).await;
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let body: ErrorBody = read_body(response).await;
            assert_eq!(body.error, crate::error::INTERNAL_ERROR_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_calculate_is_post_only() {
        let response = routes()
            .with_state(create_test_state(None))
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/calculate")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
