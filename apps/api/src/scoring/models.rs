//! Request-scoped data types for the scoring pipeline. Nothing here outlives a request.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Minimum extracted-text length (in characters) for either document.
pub const MIN_TEXT_CHARS: usize = 20;

/// Declared media kind of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    PlainText,
    OctetStream,
    Pdf,
}

impl MediaKind {
    /// Maps a declared content type onto a kind. Parameters such as
    /// `; charset=utf-8` are ignored. Returns `None` for anything unsupported.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "text/plain" => Some(MediaKind::PlainText),
            "application/octet-stream" => Some(MediaKind::OctetStream),
            "application/pdf" | "application/x-pdf" => Some(MediaKind::Pdf),
            _ => None,
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, MediaKind::PlainText | MediaKind::OctetStream)
    }
}

/// An uploaded file as received: raw bytes plus the declared content type.
#[derive(Debug, Clone)]
pub struct Upload {
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// A document after its kind has been accepted and its text extracted.
#[derive(Debug, Clone)]
pub struct Document {
    pub kind: MediaKind,
    pub bytes: Bytes,
    pub text: String,
}

impl Document {
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// The job description and resume for one scoring run.
#[derive(Debug, Clone)]
pub struct ScoreRequest {
    pub jd: Document,
    pub resume: Document,
}

/// Rubric score in `[0, 100]`. Produced once per request by the rubric call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct MatchScore(u8);

impl MatchScore {
    pub const MAX: u8 = 100;

    /// Pulls any integer into `[0, 100]`.
    pub fn clamped(value: i64) -> Self {
        MatchScore(value.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for MatchScore {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=Self::MAX as i64).contains(&value) {
            Ok(MatchScore(value as u8))
        } else {
            Err(format!("match_score {value} is outside 0-100"))
        }
    }
}

impl From<MatchScore> for u8 {
    fn from(score: MatchScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Final response body: exactly these five keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_score: MatchScore,
    pub explanation: String,
    pub matched_skills: Vec<String>,
    pub missing_or_weak_skills: Vec<String>,
    pub recommendation: String,
}

/// Rejects text shorter than `MIN_TEXT_CHARS` with the given client-facing message.
pub fn ensure_min_length(text: &str, message: &str) -> Result<(), AppError> {
    if text.chars().count() < MIN_TEXT_CHARS {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_media_kind_from_content_type() {
        assert_eq!(
            MediaKind::from_content_type("text/plain"),
            Some(MediaKind::PlainText)
        );
        assert_eq!(
            MediaKind::from_content_type("text/plain; charset=utf-8"),
            Some(MediaKind::PlainText)
        );
        assert_eq!(
            MediaKind::from_content_type("application/octet-stream"),
            Some(MediaKind::OctetStream)
        );
        assert_eq!(
            MediaKind::from_content_type("application/pdf"),
            Some(MediaKind::Pdf)
        );
        assert_eq!(
            MediaKind::from_content_type("Application/X-PDF"),
            Some(MediaKind::Pdf)
        );
        assert_eq!(MediaKind::from_content_type("image/png"), None);
        assert_eq!(MediaKind::from_content_type(""), None);
    }

    #[test]
    fn test_octet_stream_counts_as_text() {
        assert!(MediaKind::OctetStream.is_text());
        assert!(MediaKind::PlainText.is_text());
        assert!(!MediaKind::Pdf.is_text());
    }

    #[test]
    fn test_match_score_clamped() {
        assert_eq!(MatchScore::clamped(-5).value(), 0);
        assert_eq!(MatchScore::clamped(42).value(), 42);
        assert_eq!(MatchScore::clamped(250).value(), 100);
    }

    #[test]
    fn test_match_score_rejects_out_of_range_json() {
        assert!(serde_json::from_value::<MatchScore>(json!(101)).is_err());
        assert!(serde_json::from_value::<MatchScore>(json!(-1)).is_err());
        let score: MatchScore = serde_json::from_value(json!(100)).unwrap();
        assert_eq!(score.value(), 100);
    }

    #[test]
    fn test_analysis_result_serializes_five_keys() {
        let result = AnalysisResult {
            match_score: MatchScore::clamped(72),
            explanation: "Solid backend background.".to_string(),
            matched_skills: vec!["Rust".to_string()],
            missing_or_weak_skills: vec!["Kafka".to_string()],
            recommendation: "Good fit — interview. Reason: Rust; Gap: Kafka.".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
        assert_eq!(value["match_score"], 72);
    }

    #[test]
    fn test_ensure_min_length_counts_characters() {
        assert!(ensure_min_length("short", "too short").is_err());
        // 20 multi-byte characters pass even though byte length is larger
        let text = "é".repeat(20);
        assert!(ensure_min_length(&text, "too short").is_ok());
        let err = ensure_min_length(&"é".repeat(19), "too short").unwrap_err();
        assert_eq!(err.to_string(), "too short");
    }
}
