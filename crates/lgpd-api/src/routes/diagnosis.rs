//! # Diagnosis API
//!
//! Routes:
//! - POST /v1/diagnosis — Evaluate a completed questionnaire.
//!
//! The body must carry every answer. A missing or mistyped field is a
//! 400; the evaluator itself never fails.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use lgpd_core::{QuestionnaireAnswers, Report};

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::middleware::metrics::record_diagnosis;
use crate::state::AppState;

/// Diagnosis response: the rendered report plus request metadata.
#[derive(Debug, Serialize, ToSchema)]
pub struct DiagnosisResponse {
    pub diagnosis_id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub report: Report,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/diagnosis", post(create_diagnosis))
}

/// POST /v1/diagnosis — Evaluate a completed questionnaire.
#[utoipa::path(
    post,
    path = "/v1/diagnosis",
    request_body = QuestionnaireAnswers,
    responses(
        (status = 200, description = "Diagnosis", body = DiagnosisResponse),
        (status = 400, description = "Incomplete or malformed answers", body = crate::error::ErrorBody),
    ),
    tag = "diagnosis"
)]
pub(crate) async fn create_diagnosis(
    State(state): State<AppState>,
    body: Result<Json<QuestionnaireAnswers>, JsonRejection>,
) -> Result<Json<DiagnosisResponse>, AppError> {
    let answers = extract_json(body)?;
    let report = Report::build(&answers, &state.triage);
    let diagnosis_id = Uuid::new_v4();

    record_diagnosis(report.result.tier);
    tracing::info!(
        %diagnosis_id,
        company_size = %answers.company_size,
        tier = %report.result.tier,
        score = report.result.score,
        "diagnosis issued"
    );

    Ok(Json(DiagnosisResponse {
        diagnosis_id,
        evaluated_at: Utc::now(),
        report,
    }))
}
