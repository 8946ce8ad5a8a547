// Two-stage resume scoring: rubric call for the score, analysis call for the prose.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod analysis;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod orchestrator;
pub mod prompts;
pub mod recommendation;
pub mod rubric;
pub mod score_parser;
pub mod stage;
