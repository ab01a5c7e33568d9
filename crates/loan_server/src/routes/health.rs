//! Health and readiness probes
//!
//! `/health` reports the running build together with what the calculator
//! accepts, so a client can discover the supported interest types and the
//! term limit without a failed request. `/ready` fails with 503 when the
//! loaded configuration would make every calculation fail.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use loan_core::types::{InterestType, MAX_PERIODS};
use serde::{Deserialize, Serialize};

use super::AppState;

/// Limits and options of the calculate endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInfo {
    /// Accepted `interestType` values
    pub interest_types: Vec<String>,
    /// Longest accepted term in years
    pub max_term_years: f64,
    /// Whether variable schedules are reproducible from a configured seed
    pub seeded: bool,
}

impl CalculatorInfo {
    fn from_state(state: &AppState) -> Self {
        Self {
            interest_types: InterestType::ALL
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
            // The core refuses anything past MAX_PERIODS whatever the config says
            max_term_years: state.config.max_term_years.min(MAX_PERIODS as f64 / 12.0),
            seeded: state.config.rng_seed.is_some(),
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests
    pub status: String,
    /// Crate version
    pub version: String,
    /// Seconds since the router was built
    pub uptime_secs: u64,
    /// Deployment environment
    pub environment: String,
    /// What the calculate endpoint accepts
    pub calculator: CalculatorInfo,
}

/// Body of `GET /ready`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyResponse {
    /// Whether calculations can be served
    pub ready: bool,
    /// Configuration problem that keeps the server unready
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Build the probe routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        environment: state.config.environment.to_string(),
        calculator: CalculatorInfo::from_state(&state),
    })
}

async fn ready_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.config.validate() {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyResponse {
                ready: true,
                reason: None,
            }),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyResponse {
                ready: false,
                reason: Some(e.to_string()),
            }),
        ),
    }
}
