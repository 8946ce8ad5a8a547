//! Rubric stage — the first model call. Produces the authoritative `MatchScore`.

use crate::errors::AppError;
use crate::llm_client::prompts::document_pair_message;
use crate::scoring::models::MatchScore;
use crate::scoring::prompts::rubric_system;
use crate::scoring::score_parser::parse_score;
use crate::scoring::stage::PromptStage;

/// Deterministic: the score must be reproducible for the same inputs.
pub const RUBRIC_TEMPERATURE: f32 = 0.0;

/// Experience tier, inferred by the model from the resume. Selects the rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceTier {
    /// 0 years.
    Fresher,
    /// 0.5–2 years, or undetermined.
    EarlyCareer,
    /// More than 2 years.
    Experienced,
}

impl ExperienceTier {
    pub const ALL: [ExperienceTier; 3] = [
        ExperienceTier::Fresher,
        ExperienceTier::EarlyCareer,
        ExperienceTier::Experienced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceTier::Fresher => "fresher",
            ExperienceTier::EarlyCareer => "early_career",
            ExperienceTier::Experienced => "experienced",
        }
    }

    /// YOE band as written in the prompt.
    pub fn band(self) -> &'static str {
        match self {
            ExperienceTier::Fresher => "0 YOE",
            ExperienceTier::EarlyCareer => "0.5–2 YOE",
            ExperienceTier::Experienced => ">2 YOE",
        }
    }

    pub fn rubric(self) -> Rubric {
        match self {
            ExperienceTier::Fresher => Rubric {
                label: 'A',
                categories: FRESHER,
            },
            ExperienceTier::EarlyCareer => Rubric {
                label: 'B',
                categories: EARLY_CAREER,
            },
            ExperienceTier::Experienced => Rubric {
                label: 'C',
                categories: EXPERIENCED,
            },
        }
    }
}

const FRESHER: &[RubricCategory] = &[
    category("matching_skills", 35),
    category("projects_using_jd_skills", 35),
    category("relevant_education", 20),
    category("internships", 10),
];

const EARLY_CAREER: &[RubricCategory] = &[
    category("matching_skills", 40),
    category("relevant_experience_quality", 30),
    RubricCategory {
        name: "relevant_years_months",
        points: 15,
        note: Some("cap at 24 months"),
    },
    category("relevant_projects", 10),
    category("education_or_certs", 5),
];

const EXPERIENCED: &[RubricCategory] = &[
    category("matching_skills", 45),
    category("relevant_years_experience", 35),
    category("total_years_experience", 10),
    category("role_domain_alignment", 10),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RubricCategory {
    pub name: &'static str,
    pub points: u32,
    pub note: Option<&'static str>,
}

const fn category(name: &'static str, points: u32) -> RubricCategory {
    RubricCategory {
        name,
        points,
        note: None,
    }
}

/// A point-weighted rubric. Category points sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rubric {
    pub label: char,
    pub categories: &'static [RubricCategory],
}

impl Rubric {
    pub fn total(&self) -> u32 {
        self.categories.iter().map(|c| c.points).sum()
    }
}

/// Job description and resume text, already extracted and length-checked.
#[derive(Debug, Clone, Copy)]
pub struct DocumentTexts<'a> {
    pub jd: &'a str,
    pub resume: &'a str,
}

pub struct RubricStage;

impl PromptStage for RubricStage {
    type Input<'a> = DocumentTexts<'a>;
    type Output = MatchScore;

    fn name(&self) -> &'static str {
        "rubric"
    }

    fn system_prompt(&self) -> &str {
        rubric_system()
    }

    fn user_message(&self, input: &DocumentTexts<'_>) -> String {
        document_pair_message(input.jd, input.resume)
    }

    fn temperature(&self) -> f32 {
        RUBRIC_TEMPERATURE
    }

    fn parse(&self, raw: &str) -> Result<MatchScore, AppError> {
        parse_score(raw)
    }
}
