use crate::scoring::models::MatchScore;

/// Recommendation label, chosen purely from the rubric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationLabel {
    StrongFit,
    GoodFit,
    Borderline,
    NotAFit,
}

impl RecommendationLabel {
    /// Ordered highest threshold first. Each entry is (label, inclusive lower bound).
    pub const THRESHOLDS: [(RecommendationLabel, u8); 4] = [
        (RecommendationLabel::StrongFit, 85),
        (RecommendationLabel::GoodFit, 70),
        (RecommendationLabel::Borderline, 55),
        (RecommendationLabel::NotAFit, 0),
    ];

    pub fn for_score(score: MatchScore) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(_, floor)| score.value() >= *floor)
            .map(|(label, _)| *label)
            .unwrap_or(RecommendationLabel::NotAFit)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecommendationLabel::StrongFit => "Strong fit — shortlist",
            RecommendationLabel::GoodFit => "Good fit — interview",
            RecommendationLabel::Borderline => "Borderline — needs review",
            RecommendationLabel::NotAFit => "Not a fit — reject",
        }
    }

    /// Inclusive score range for this label, e.g. `(70, 84)`.
    pub fn range(self) -> (u8, u8) {
        let idx = Self::THRESHOLDS
            .iter()
            .position(|(label, _)| *label == self)
            .unwrap_or(Self::THRESHOLDS.len() - 1);
        let floor = Self::THRESHOLDS[idx].1;
        let ceiling = if idx == 0 {
            MatchScore::MAX
        } else {
            Self::THRESHOLDS[idx - 1].1 - 1
        };
        (floor, ceiling)
    }
}

impl std::fmt::Display for RecommendationLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the one-sentence recommendation in the required template.
pub fn format_recommendation(label: impl std::fmt::Display, strength: &str, gap: &str) -> String {
    format!("{label}. Reason: {strength}; Gap: {gap}.")
}
