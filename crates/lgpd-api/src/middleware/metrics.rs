//! # Prometheus Metrics
//!
//! Request counters recorded through the `metrics` facade. The binary
//! installs a Prometheus recorder at startup; without one the counters
//! are no-ops and `/metrics` answers 404.
//!
//! | Metric                       | Labels   |
//! |------------------------------|----------|
//! | `lgpd_http_requests_total`   | `status` |
//! | `lgpd_http_errors_total`     |          |
//! | `lgpd_diagnoses_total`       | `tier`   |

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use lgpd_core::Tier;

use crate::error::AppError;
use crate::state::AppState;

pub const HTTP_REQUESTS_TOTAL: &str = "lgpd_http_requests_total";
pub const HTTP_ERRORS_TOTAL: &str = "lgpd_http_errors_total";
pub const DIAGNOSES_TOTAL: &str = "lgpd_diagnoses_total";

/// Middleware that counts requests and client/server errors.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    let status = response.status();
    metrics::counter!(HTTP_REQUESTS_TOTAL, "status" => status.as_u16().to_string()).increment(1);
    if status.is_client_error() || status.is_server_error() {
        metrics::counter!(HTTP_ERRORS_TOTAL).increment(1);
    }

    response
}

/// Count one completed diagnosis.
pub fn record_diagnosis(tier: Tier) {
    metrics::counter!(DIAGNOSES_TOTAL, "tier" => tier.as_str()).increment(1);
}

pub fn router() -> Router<AppState> {
    Router::new().route("/metrics", get(render_metrics))
}

/// GET /metrics — Prometheus text exposition.
async fn render_metrics(State(state): State<AppState>) -> Result<String, AppError> {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .ok_or_else(|| AppError::NotFound("metrics recorder not installed".to_string()))
}
