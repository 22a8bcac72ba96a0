use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::templates::PromptLibrary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model backend. `GeminiClient` in production, scripted in tests.
    pub llm: Arc<dyn TextGenerator>,
    pub prompts: Arc<PromptLibrary>,
}
