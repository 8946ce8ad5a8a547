//! Scoring Orchestrator — extraction → rubric call → analysis call → score enforcement.
//!
//! Strictly sequential. The analysis call needs the rubric score, so the two
//! model calls cannot overlap. Nothing is retried: every failure goes back to
//! the caller, who resubmits both documents.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::ChatModel;
use crate::scoring::analysis::{enforce_score, AnalysisInput, AnalysisStage};
use crate::scoring::extract::extract_text_blocking;
use crate::scoring::models::{
    ensure_min_length, AnalysisResult, Document, MatchScore, MediaKind, ScoreRequest, Upload,
};
use crate::scoring::rubric::{DocumentTexts, RubricStage};
use crate::scoring::stage::run_stage;

const JD_KIND_MESSAGE: &str = "JD must be a .txt file.";
const RESUME_KIND_MESSAGE: &str = "Resume must be a PDF.";
const JD_EMPTY_MESSAGE: &str = "Empty JD file uploaded.";
const RESUME_EMPTY_MESSAGE: &str = "Empty PDF uploaded.";
const JD_SHORT_MESSAGE: &str = "JD text is too short.";
const RESUME_SHORT_MESSAGE: &str =
    "Could not extract enough text from PDF (might be scanned/image-only).";

/// Full pipeline from raw uploads to the final `AnalysisResult`.
pub async fn score_uploads(
    model: &dyn ChatModel,
    jd: Upload,
    resume: Upload,
) -> Result<AnalysisResult, AppError> {
    let request = prepare_request(jd, resume).await?;
    score_request(model, &request).await
}

/// Kind check, empty check, extraction and length check. No model call is made here.
pub async fn prepare_request(jd: Upload, resume: Upload) -> Result<ScoreRequest, AppError> {
    let jd_kind = accepted_kind(&jd, MediaKind::is_text, JD_KIND_MESSAGE)?;
    let resume_kind = accepted_kind(&resume, |k| k == MediaKind::Pdf, RESUME_KIND_MESSAGE)?;

    if jd.bytes.is_empty() {
        return Err(AppError::Validation(JD_EMPTY_MESSAGE.to_string()));
    }
    if resume.bytes.is_empty() {
        return Err(AppError::Validation(RESUME_EMPTY_MESSAGE.to_string()));
    }

    let jd_text = extract_text_blocking(jd.bytes.clone(), jd_kind).await?;
    let resume_text = extract_text_blocking(resume.bytes.clone(), resume_kind).await?;

    ensure_min_length(&jd_text, JD_SHORT_MESSAGE)?;
    ensure_min_length(&resume_text, RESUME_SHORT_MESSAGE)?;

    let request = ScoreRequest {
        jd: Document {
            kind: jd_kind,
            bytes: jd.bytes,
            text: jd_text,
        },
        resume: Document {
            kind: resume_kind,
            bytes: resume.bytes,
            text: resume_text,
        },
    };

    debug!(
        jd_kind = ?request.jd.kind,
        jd_bytes = request.jd.bytes.len(),
        jd_chars = request.jd.char_count(),
        resume_kind = ?request.resume.kind,
        resume_bytes = request.resume.bytes.len(),
        resume_chars = request.resume.char_count(),
        "Documents extracted"
    );

    Ok(request)
}

/// Rubric call, analysis call, score enforcement. Both texts are already validated.
pub async fn score_request(
    model: &dyn ChatModel,
    request: &ScoreRequest,
) -> Result<AnalysisResult, AppError> {
    let texts = DocumentTexts {
        jd: &request.jd.text,
        resume: &request.resume.text,
    };

    let score: MatchScore = run_stage(model, &RubricStage, &texts).await?;
    info!(match_score = score.value(), "Rubric score computed");

    let analysis = run_stage(model, &AnalysisStage, &AnalysisInput { score, texts }).await?;

    enforce_score(analysis, score)
}

fn accepted_kind(
    upload: &Upload,
    allowed: impl Fn(MediaKind) -> bool,
    message: &str,
) -> Result<MediaKind, AppError> {
    upload
        .content_type
        .as_deref()
        .and_then(MediaKind::from_content_type)
        .filter(|kind| allowed(*kind))
        .ok_or_else(|| AppError::Validation(message.to_string()))
}
