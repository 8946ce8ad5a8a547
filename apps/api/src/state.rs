use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model transport. Default: `LlmClient`. Tests swap in a scripted mock.
    pub model: Arc<dyn ChatModel>,
    pub config: Config,
}
