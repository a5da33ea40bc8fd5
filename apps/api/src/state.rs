use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatCompleter;
use crate::skillsheet::cache::SkillSheetCache;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Every LLM call goes through this. `LlmClient` in production.
    pub llm: Arc<dyn ChatCompleter>,
    pub config: Config,
    /// Last uploaded skill sheet, used when a request does not carry one.
    pub skill_sheets: SkillSheetCache,
}

#[cfg(test)]
pub fn test_state(script: Vec<Result<String, crate::llm_client::LlmError>>) -> AppState {
    use crate::llm_client::testing::ScriptedCompleter;

    AppState {
        llm: Arc::new(ScriptedCompleter::new(script)),
        config: Config::for_tests(),
        skill_sheets: SkillSheetCache::default(),
    }
}
