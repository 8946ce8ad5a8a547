// All LLM prompt constants for the Scoring module.
// Reuses cross-cutting fragments from llm_client::prompts.

use std::fmt::Write as _;
use std::sync::OnceLock;

use crate::scoring::recommendation::{format_recommendation, RecommendationLabel};
use crate::scoring::rubric::ExperienceTier;

const RUBRIC_HEADER: &str = r#"You are a strict scoring engine for resume-vs-job-description matching.

Goal: Output ONLY a single integer from 0 to 100 (no JSON, no words, no punctuation).

Inputs you will receive:
- JOB DESCRIPTION text
- RESUME text

STEP 1 — Determine years of experience (YOE)
- Compute candidate YOE from the resume (prefer explicit years, else infer from date ranges).
- If unclear, infer conservatively; if still unclear set experience_level="unknown".
- Map to experience_level:"#;

const RUBRIC_JD_STEP: &str = r#"STEP 2 — Extract JD requirements
- Identify JD skills, technologies and tools (hard skills).
- Identify key responsibilities and experience requirements.
- Treat them as the reference set for matching."#;

const RUBRIC_RULES: &str = r#"STEP 4 — Scoring rules
- matching_skills: score by coverage of JD hard skills found in the resume (exact match or strong synonym). Partial coverage = partial points.
- Experience-related categories: only count experience that matches the JD domain/role.
- relevant_years_months: convert relevant experience to months; (months / 24) * 15, capped at 15.
- relevant_years_experience: convert relevant years; scale linearly up to full points at 5+ relevant years (cap at 35).
- No fabrication: if the resume does not support a claim, award no points for it.

STEP 5 — Output
- Output ONLY the final integer score 0–100."#;

/// System prompt for the rubric call. The model must answer with a bare integer.
/// Built once from the typed rubrics in `scoring::rubric`.
pub fn rubric_system() -> &'static str {
    static PROMPT: OnceLock<String> = OnceLock::new();
    PROMPT.get_or_init(build_rubric_system)
}

fn build_rubric_system() -> String {
    let mut tiers = String::new();
    let mut rubrics = String::new();

    for tier in ExperienceTier::ALL {
        let unknown = if tier == ExperienceTier::EarlyCareer {
            " OR unknown"
        } else {
            ""
        };
        let _ = writeln!(tiers, "  - {}: {}", tier.as_str(), tier.band());

        let rubric = tier.rubric();
        debug_assert_eq!(rubric.total(), 100, "{} rubric must total 100", tier.as_str());
        let _ = writeln!(
            rubrics,
            "Rubric {}) {} ({}{unknown}):",
            rubric.label,
            tier.as_str(),
            tier.band()
        );
        for category in rubric.categories {
            match category.note {
                Some(note) => {
                    let _ = writeln!(rubrics, "- {}: {} ({note})", category.name, category.points);
                }
                None => {
                    let _ = writeln!(rubrics, "- {}: {}", category.name, category.points);
                }
            }
        }
        rubrics.push('\n');
    }
    tiers.push_str("  - unknown: use the early_career rubric\n");

    format!(
        "{RUBRIC_HEADER}\n{tiers}\n{RUBRIC_JD_STEP}\n\n\
         STEP 3 — Apply exactly ONE rubric based on experience_level (each totals 100)\n\n\
         {rubrics}{RUBRIC_RULES}"
    )
}

/// System prompt for the analysis call. Built once from the recommendation
/// thresholds so the prompt and `RecommendationLabel::for_score` cannot drift apart.
pub fn analysis_system() -> &'static str {
    static PROMPT: OnceLock<String> = OnceLock::new();
    PROMPT.get_or_init(build_analysis_system)
}

fn build_analysis_system() -> String {
    let mut rules = String::new();
    for (label, _) in RecommendationLabel::THRESHOLDS {
        let condition = match label.range() {
            (floor, 100) => format!("match_score >= {floor}"),
            (0, ceiling) => format!("match_score < {}", ceiling + 1),
            (floor, ceiling) => format!("{floor} <= match_score <= {ceiling}"),
        };
        let _ = writeln!(rules, "- If {condition}:\n  recommendation_label = \"{label}\"");
    }

    let template = format_recommendation(
        "<recommendation_label>",
        "<one key strength>",
        "<one key missing/weak skill>",
    );

    format!(
        r#"You are an ATS-style evaluator.
Compare a candidate resume to a job description.

A match_score has already been computed using a fixed rubric.
You MUST use the provided match_score exactly as given (do not change it).

Recommendation rules (must follow):
{rules}
The recommendation field MUST be exactly:
"{template}"
Keep it one sentence.

Return ONLY valid JSON with keys:
match_score (0-100 integer),
explanation (1-3 sentences),
matched_skills (array of strings),
missing_or_weak_skills (array of strings),
recommendation (one sentence in the exact format above).
No extra text. Do NOT use markdown code fences."#
    )
}
