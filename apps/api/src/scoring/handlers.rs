//! Axum route handlers for the Scoring API.

use axum::{
    extract::{multipart::Field, Multipart, State},
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::scoring::models::{AnalysisResult, Upload};
use crate::scoring::orchestrator::score_uploads;
use crate::state::AppState;

pub const JD_FIELD: &str = "jd_file";
pub const RESUME_FIELD: &str = "resume_file";

/// POST /score
///
/// Multipart upload of `jd_file` (plain text) and `resume_file` (PDF).
/// Returns the rubric score with the analysis built around it.
#[tracing::instrument(name = "score", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn handle_score(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let (jd, resume) = read_uploads(multipart).await?;
    let result = score_uploads(state.model.as_ref(), jd, resume).await?;
    info!(match_score = result.match_score.value(), "Scoring complete");
    Ok(Json(result))
}

/// Pulls the two file fields out of the form. Unknown fields are drained and ignored.
async fn read_uploads(mut multipart: Multipart) -> Result<(Upload, Upload), AppError> {
    let mut jd = None;
    let mut resume = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(JD_FIELD) => jd = Some(read_upload(field).await?),
            Some(RESUME_FIELD) => resume = Some(read_upload(field).await?),
            _ => {
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?;
            }
        }
    }

    let jd = jd.ok_or_else(|| missing_field(JD_FIELD))?;
    let resume = resume.ok_or_else(|| missing_field(RESUME_FIELD))?;
    Ok((jd, resume))
}

async fn read_upload(field: Field<'_>) -> Result<Upload, AppError> {
    let content_type = field.content_type().map(str::to_string);
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
    Ok(Upload {
        content_type,
        bytes,
    })
}

fn missing_field(name: &str) -> AppError {
    AppError::Validation(format!("Missing form field '{name}'."))
}
