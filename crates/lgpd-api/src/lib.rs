//! # lgpd-api — HTTP Front End
//!
//! Serves the questionnaire, evaluates submissions and offers the
//! register template. All evaluation logic lives in `lgpd-core`; handlers
//! only extract, delegate and serialize.
//!
//! ## API Surface
//!
//! | Route                   | Module                            |
//! |-------------------------|-----------------------------------|
//! | `GET /v1/questionnaire` | [`routes::questionnaire`]         |
//! | `GET /v1/glossary`      | [`routes::questionnaire`]         |
//! | `POST /v1/diagnosis`    | [`routes::diagnosis`]             |
//! | `GET /v1/template`      | [`routes::template`]              |
//! | `GET /metrics`          | [`middleware::metrics`]           |
//! | `GET /openapi.json`     | [`openapi`]                       |
//! | `GET /health/*`         | liveness and readiness probes     |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → Handler
//! ```

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub use error::AppError;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes are mounted outside the metrics middleware so that
/// orchestrator polling does not inflate request counts.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::questionnaire::router())
        .merge(routes::diagnosis::router())
        .merge(routes::template::router())
        .merge(middleware::metrics::router())
        .merge(openapi::router())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — the service holds no external dependencies.
async fn readiness() -> &'static str {
    "ready"
}
