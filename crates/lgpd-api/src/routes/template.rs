//! # Register Template Download
//!
//! Routes:
//! - GET /v1/template — Download the INV-01 register template.
//!
//! A missing template is a 404 with a warning in the log; it has no
//! bearing on diagnoses.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use lgpd_core::template::{TEMPLATE_FILE_NAME, TEMPLATE_MIME_TYPE};
use lgpd_core::TemplateFile;

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/template", get(download_template))
}

/// GET /v1/template — Download the register template.
#[utoipa::path(
    get,
    path = "/v1/template",
    responses(
        (status = 200, description = "INV-01 spreadsheet (xlsx bytes)"),
        (status = 404, description = "Template not available", body = crate::error::ErrorBody),
    ),
    tag = "template"
)]
pub(crate) async fn download_template(State(state): State<AppState>) -> Result<Response, AppError> {
    let template = TemplateFile::locate(&state.triage.template_path);
    let bytes = template
        .read()?
        .ok_or_else(|| AppError::NotFound(format!("{TEMPLATE_FILE_NAME} is not available")))?;

    let disposition = format!("attachment; filename=\"{TEMPLATE_FILE_NAME}\"");
    Ok((
        [
            (header::CONTENT_TYPE, TEMPLATE_MIME_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
