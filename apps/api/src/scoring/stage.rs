//! Prompt stages — one model call each, expressed as prompt + parse.
//!
//! The rubric and analysis calls are independent units behind `PromptStage`,
//! so either can be swapped without touching the orchestrator, and every
//! stage runs through the same `run_stage` against any `ChatModel`.

use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::ChatModel;

pub trait PromptStage: Send + Sync {
    type Input<'a>;
    type Output;

    /// Short stage name used in logs.
    fn name(&self) -> &'static str;

    fn system_prompt(&self) -> &str;

    fn user_message(&self, input: &Self::Input<'_>) -> String;

    fn temperature(&self) -> f32;

    /// Turns the model's raw reply into the stage output.
    fn parse(&self, raw: &str) -> Result<Self::Output, AppError>;
}

/// Runs one stage: builds the messages, calls the model once, parses the reply.
/// Transport failures surface as `AppError::Upstream`; parse failures are the stage's own.
pub async fn run_stage<S>(
    model: &dyn ChatModel,
    stage: &S,
    input: &S::Input<'_>,
) -> Result<S::Output, AppError>
where
    S: PromptStage,
{
    let user = stage.user_message(input);
    debug!(
        stage = stage.name(),
        temperature = stage.temperature(),
        user_chars = user.chars().count(),
        "Calling model"
    );

    let raw = model
        .complete(stage.system_prompt(), &user, stage.temperature())
        .await?;

    stage.parse(&raw)
}
