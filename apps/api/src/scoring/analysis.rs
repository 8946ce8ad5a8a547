//! Analysis stage — the second model call. Free-text analysis around a fixed score.
//!
//! The model is told to reuse the rubric score, but the score it echoes back is
//! never trusted: `enforce_score` overwrites it before the shape is validated.

use serde_json::{Map, Value};
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::prompts::document_pair_message;
use crate::scoring::models::{AnalysisResult, MatchScore};
use crate::scoring::prompts::analysis_system;
use crate::scoring::recommendation::RecommendationLabel;
use crate::scoring::rubric::DocumentTexts;
use crate::scoring::stage::PromptStage;

/// Low but non-zero: prose may vary slightly, structure should not.
pub const ANALYSIS_TEMPERATURE: f32 = 0.2;

#[derive(Debug, Clone, Copy)]
pub struct AnalysisInput<'a> {
    pub score: MatchScore,
    pub texts: DocumentTexts<'a>,
}

pub struct AnalysisStage;

impl PromptStage for AnalysisStage {
    type Input<'a> = AnalysisInput<'a>;
    type Output = Map<String, Value>;

    fn name(&self) -> &'static str {
        "analysis"
    }

    fn system_prompt(&self) -> &str {
        analysis_system()
    }

    fn user_message(&self, input: &AnalysisInput<'_>) -> String {
        format!(
            "match_score: {}\n\n{}",
            input.score,
            document_pair_message(input.texts.jd, input.texts.resume)
        )
    }

    fn temperature(&self) -> f32 {
        ANALYSIS_TEMPERATURE
    }

    /// Strict JSON: the reply must be a single JSON object and nothing else.
    fn parse(&self, raw: &str) -> Result<Map<String, Value>, AppError> {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(AppError::UpstreamFormat(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
            Err(e) => Err(AppError::UpstreamFormat(e.to_string())),
        }
    }
}

/// Overwrites `match_score` with the rubric score, then validates the object as
/// an `AnalysisResult`. A shape failure is reported as `UpstreamFormat`.
pub fn enforce_score(
    mut object: Map<String, Value>,
    score: MatchScore,
) -> Result<AnalysisResult, AppError> {
    let model_score = object.insert("match_score".to_string(), Value::from(score.value()));
    match model_score {
        Some(Value::Number(n)) if n.as_u64() == Some(score.value() as u64) => {}
        Some(other) => warn!(
            "Analysis call returned match_score {other}, overriding with rubric score {score}"
        ),
        None => warn!("Analysis call omitted match_score, using rubric score {score}"),
    }

    let result: AnalysisResult = serde_json::from_value(Value::Object(object))
        .map_err(|e| AppError::UpstreamFormat(format!("analysis has the wrong shape: {e}")))?;

    let expected = RecommendationLabel::for_score(score);
    if !result.recommendation.starts_with(expected.as_str()) {
        warn!(
            "Recommendation does not start with expected label {:?}",
            expected.as_str()
        );
    }

    Ok(result)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
