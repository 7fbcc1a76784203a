//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LGPD Triage API",
        version = "0.1.0",
        description = "Preliminary LGPD self-assessment for small processing agents (Resolution CD/ANPD nº 2/2022). Screening only; does not replace legal advice.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::questionnaire::get_questionnaire,
        crate::routes::questionnaire::get_glossary,
        crate::routes::diagnosis::create_diagnosis,
        crate::routes::template::download_template,
    ),
    components(schemas(
        lgpd_core::QuestionnaireAnswers,
        lgpd_core::CompanySize,
        lgpd_core::ComplianceResult,
        lgpd_core::Tier,
        lgpd_core::Verdict,
        lgpd_core::Severity,
        lgpd_core::Report,
        crate::routes::diagnosis::DiagnosisResponse,
        crate::routes::questionnaire::QuestionView,
        crate::routes::questionnaire::OptionView,
        crate::routes::questionnaire::GlossaryEntryView,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "questionnaire", description = "Question catalog and glossary"),
        (name = "diagnosis", description = "Compliance evaluation"),
        (name = "template", description = "Register template download"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_every_route() {
        let spec = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = spec["paths"].as_object().unwrap();
        for path in ["/v1/questionnaire", "/v1/glossary", "/v1/diagnosis", "/v1/template"] {
            assert!(paths.contains_key(path), "{path} missing from spec");
        }
    }

    #[test]
    fn answers_schema_requires_every_field() {
        let spec = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let required = spec["components"]["schemas"]["QuestionnaireAnswers"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 9);
    }
}
