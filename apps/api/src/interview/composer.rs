//! Prompt composition and result classification for interview LLM calls.
//!
//! Follow-up generation never returns an error: every outcome, including a
//! provider failure, becomes a `FollowupOutcome` the handler can present.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::interview::prompts::{
    CONTEXT_BLOCK_TEMPLATE, FOLLOWUP_MAX_TOKENS, FOLLOWUP_PROMPT_TEMPLATE, FOLLOWUP_SYSTEM,
    REVIEW_MAX_TOKENS, REVIEW_PROMPT_TEMPLATE, REVIEW_SYSTEM, SUMMARY_MAX_TOKENS,
    SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM,
};
use crate::llm_client::prompts::{fill_template, DEFAULT_TEMPERATURE, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{parse_json_output, ChatCompleter, CompletionRequest, LlmError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompts {
    pub system: String,
    pub user: String,
}

/// Result of asking the LLM for a follow-up question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowupOutcome {
    Question(String),
    /// The call succeeded but the text is not `{"question": "..."}`.
    Malformed { raw: String },
    /// The call itself failed (network, timeout, provider error).
    TransportFailure { message: String },
}

#[derive(Debug, Deserialize)]
struct FollowupPayload {
    question: Option<String>,
}

/// One question/answer pair of a finished interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
}

/// Joins company/interview info and the skill sheet text, skipping blanks.
pub fn combine_context(company_info: Option<&str>, skill_sheet: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = [company_info, skill_sheet]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join("\n\n"))
}

pub fn build_followup_prompts(answer: &str, previous_question: &str, context: Option<&str>) -> Prompts {
    let context_block = context
        .map(|c| fill_template(CONTEXT_BLOCK_TEMPLATE, &[("context", c)]))
        .unwrap_or_default();

    Prompts {
        system: format!("{FOLLOWUP_SYSTEM}\n{JSON_ONLY_INSTRUCTION}"),
        user: fill_template(
            FOLLOWUP_PROMPT_TEMPLATE,
            &[
                ("context", &context_block),
                ("question", previous_question),
                ("answer", answer),
            ],
        ),
    }
}

/// Classifies raw model output as a question or a malformed response.
pub fn classify_followup(raw: &str) -> FollowupOutcome {
    let question = parse_json_output::<FollowupPayload>(raw)
        .ok()
        .and_then(|p| p.question)
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty());

    match question {
        Some(question) => FollowupOutcome::Question(question),
        None => {
            warn!("LLM follow-up was not a question object: {raw:?}");
            FollowupOutcome::Malformed {
                raw: raw.to_string(),
            }
        }
    }
}

pub async fn generate_followup(
    llm: &dyn ChatCompleter,
    answer: &str,
    previous_question: &str,
    context: Option<&str>,
) -> FollowupOutcome {
    let prompts = build_followup_prompts(answer, previous_question, context);
    let result = llm
        .complete(CompletionRequest {
            system: &prompts.system,
            user: &prompts.user,
            max_tokens: FOLLOWUP_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        })
        .await;

    match result {
        Ok(raw) => classify_followup(&raw),
        // A successful call with nothing in it is still a bad response, not a transport problem
        Err(LlmError::EmptyContent) => FollowupOutcome::Malformed { raw: String::new() },
        Err(e) => {
            warn!("LLM follow-up call failed: {e}");
            FollowupOutcome::TransportFailure {
                message: e.to_string(),
            }
        }
    }
}

/// Critiques an answer against the interview rules text.
pub async fn review_answer(
    llm: &dyn ChatCompleter,
    rules: &str,
    answer: &str,
) -> Result<String, LlmError> {
    let user = fill_template(REVIEW_PROMPT_TEMPLATE, &[("rules", rules), ("answer", answer)]);
    llm.complete(CompletionRequest {
        system: REVIEW_SYSTEM,
        user: &user,
        max_tokens: REVIEW_MAX_TOKENS,
        temperature: DEFAULT_TEMPERATURE,
    })
    .await
}

pub fn format_transcript(conversation: &[Exchange]) -> String {
    conversation
        .iter()
        .map(|e| format!("面接官: {}\n面接者: {}", e.question.trim(), e.answer.trim()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Overall review of a whole interview.
pub async fn summarize_conversation(
    llm: &dyn ChatCompleter,
    conversation: &[Exchange],
) -> Result<String, LlmError> {
    let transcript = format_transcript(conversation);
    let user = fill_template(SUMMARY_PROMPT_TEMPLATE, &[("conversation", &transcript)]);
    llm.complete(CompletionRequest {
        system: SUMMARY_SYSTEM,
        user: &user,
        max_tokens: SUMMARY_MAX_TOKENS,
        temperature: DEFAULT_TEMPERATURE,
    })
    .await
}
