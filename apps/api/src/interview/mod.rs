// Mock interview flow: opening questions, stage counter, follow-up
// generation, answer review and end-of-session summary.
// All LLM calls go through llm_client::ChatCompleter.

pub mod composer;
pub mod handlers;
pub mod prompts;
pub mod questions;
pub mod stage;
