use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client-caused: wrong declared kind, empty upload, too little text.
    #[error("{0}")]
    Validation(String),

    #[error("Could not parse PDF: {0}")]
    DocumentParse(String),

    #[error("Could not parse match score from: {raw:?}")]
    ScoreParse { raw: String },

    #[error("LLM did not return valid JSON: {0}")]
    UpstreamFormat(String),

    #[error("LLM call failed: {0}")]
    Upstream(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ScoreParse { .. } | AppError::UpstreamFormat(_) => StatusCode::BAD_GATEWAY,
            AppError::DocumentParse(_) | AppError::Upstream(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::DocumentParse(_) => "DOCUMENT_PARSE_ERROR",
            AppError::ScoreParse { .. } => "SCORE_PARSE_ERROR",
            AppError::UpstreamFormat(_) => "UPSTREAM_FORMAT_ERROR",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Validation(msg) => tracing::debug!("Rejected request: {msg}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            other => tracing::error!("{other}"),
        }

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}
