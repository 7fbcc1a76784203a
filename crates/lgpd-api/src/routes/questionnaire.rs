//! # Questionnaire and Glossary API
//!
//! Routes:
//! - GET /v1/questionnaire — Ordered question catalog with answer options.
//! - GET /v1/glossary — Term explanations.
//!
//! Front ends render the form from this catalog instead of hard-coding
//! their own copy of it.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use lgpd_core::questionnaire::{questions, QuestionKind, SECTIONS};
use lgpd_core::{CompanySize, GLOSSARY};

use crate::state::AppState;

/// One selectable answer.
#[derive(Debug, Serialize, ToSchema)]
pub struct OptionView {
    /// Value to submit in the diagnosis body.
    pub value: serde_json::Value,
    pub label: String,
}

/// One question of the form.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionView {
    pub section: u8,
    pub section_title: String,
    /// Field name in the diagnosis body.
    pub id: String,
    pub prompt: String,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GlossaryEntryView {
    pub term: String,
    pub explanation: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/questionnaire", get(get_questionnaire))
        .route("/v1/glossary", get(get_glossary))
}

fn options_for(kind: QuestionKind) -> Vec<OptionView> {
    match kind {
        QuestionKind::CompanySize => CompanySize::all()
            .iter()
            .map(|size| OptionView {
                value: serde_json::Value::from(size.as_str()),
                label: size.label().to_string(),
            })
            .collect(),
        QuestionKind::YesNo => vec![
            OptionView {
                value: serde_json::Value::Bool(true),
                label: "Yes".to_string(),
            },
            OptionView {
                value: serde_json::Value::Bool(false),
                label: "No".to_string(),
            },
        ],
    }
}

/// GET /v1/questionnaire — Question catalog.
#[utoipa::path(
    get,
    path = "/v1/questionnaire",
    responses(
        (status = 200, description = "Ordered question catalog", body = [QuestionView]),
    ),
    tag = "questionnaire"
)]
pub(crate) async fn get_questionnaire() -> Json<Vec<QuestionView>> {
    let catalog = questions()
        .into_iter()
        .map(|q| QuestionView {
            section: q.section,
            section_title: SECTIONS[usize::from(q.section) - 1].to_string(),
            id: q.id.to_string(),
            prompt: q.prompt.to_string(),
            options: options_for(q.kind),
        })
        .collect();
    Json(catalog)
}

/// GET /v1/glossary — Glossary entries.
#[utoipa::path(
    get,
    path = "/v1/glossary",
    responses(
        (status = 200, description = "Glossary", body = [GlossaryEntryView]),
    ),
    tag = "questionnaire"
)]
pub(crate) async fn get_glossary() -> Json<Vec<GlossaryEntryView>> {
    Json(
        GLOSSARY
            .iter()
            .map(|e| GlossaryEntryView {
                term: e.term.to_string(),
                explanation: e.explanation.to_string(),
            })
            .collect(),
    )
}
