//! Axum route handlers for the Interview API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::interview::composer::{
    combine_context, generate_followup, review_answer, summarize_conversation, Exchange,
    FollowupOutcome,
};
use crate::interview::questions::random_opening_question;
use crate::interview::stage::{next_step, InterviewStage, NextStep};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct InitialQuestionResponse {
    pub question: String,
    pub stage: InterviewStage,
    pub turn: u32,
}

#[derive(Debug, Deserialize)]
pub struct NextQuestionRequest {
    pub user_answer: String,
    pub current_question: String,
    /// Free-form company / position info supplied by the client.
    #[serde(default)]
    pub company_info: Option<String>,
    /// Formatted skill sheet text. Falls back to the last upload when absent.
    #[serde(default)]
    pub skill_sheet: Option<String>,
    /// 0-based index of `current_question`. Without it every answer gets a follow-up.
    #[serde(default)]
    pub turn: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowupErrorKind {
    MalformedResponse,
    TransportFailure,
}

#[derive(Debug, Serialize)]
pub struct FollowupError {
    pub kind: FollowupErrorKind,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct NextQuestionResponse {
    pub current_question: String,
    pub user_answer: String,
    pub next_question: Option<String>,
    pub review: Option<String>,
    pub stage: Option<InterviewStage>,
    pub turn: Option<u32>,
    pub is_finished: bool,
    pub is_error: bool,
    pub error: Option<FollowupError>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub conversation: Vec<Exchange>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Where the next question comes from, before any LLM call.
#[derive(Clone, Copy)]
enum Planned {
    FollowUp(Option<InterviewStage>),
    Fixed(InterviewStage),
    Finished,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/interview/question
///
/// Random opening question; the interview starts in the self-introduction stage.
pub async fn handle_initial_question() -> Json<InitialQuestionResponse> {
    Json(InitialQuestionResponse {
        question: random_opening_question().to_string(),
        stage: InterviewStage::SelfIntroduction,
        turn: 0,
    })
}

/// POST /api/v1/interview/next
///
/// Reviews the answer against the rules file (when present) and produces the
/// next question. LLM problems are reported in `error`, never as an HTTP error.
pub async fn handle_next_question(
    State(state): State<AppState>,
    Json(request): Json<NextQuestionRequest>,
) -> Result<Json<NextQuestionResponse>, AppError> {
    let answer = request.user_answer.trim();
    if answer.is_empty() {
        return Err(AppError::Validation(
            "回答が空です。テキストを入力してください。".to_string(),
        ));
    }

    let planned = match request.turn.map(next_step) {
        None => Planned::FollowUp(None),
        Some(NextStep::FollowUp(stage)) => Planned::FollowUp(Some(stage)),
        Some(NextStep::Begin(stage)) => Planned::Fixed(stage),
        Some(NextStep::Finished) => Planned::Finished,
    };

    let review = review_with_rules(&state, answer);
    let next = async {
        match planned {
            Planned::FollowUp(stage) => {
                let skill_sheet = state
                    .skill_sheets
                    .resolve_text(request.skill_sheet.as_deref())
                    .await;
                let context = combine_context(request.company_info.as_deref(), skill_sheet.as_deref());
                let outcome = generate_followup(
                    state.llm.as_ref(),
                    answer,
                    &request.current_question,
                    context.as_deref(),
                )
                .await;
                (Some(outcome), stage, false)
            }
            Planned::Fixed(stage) => {
                info!("Interview moving to stage {}", stage.label());
                (
                    Some(FollowupOutcome::Question(stage.opening_question().to_string())),
                    Some(stage),
                    false,
                )
            }
            Planned::Finished => (None, None, true),
        }
    };
    let (review, (outcome, stage, is_finished)) = tokio::join!(review, next);

    let (next_question, error) = match outcome {
        Some(FollowupOutcome::Question(q)) => (Some(q), None),
        Some(FollowupOutcome::Malformed { raw }) => (
            None,
            Some(FollowupError {
                kind: FollowupErrorKind::MalformedResponse,
                message: format!("AIからのレスポンスが不正な形式です: {raw}"),
            }),
        ),
        Some(FollowupOutcome::TransportFailure { message }) => (
            None,
            Some(FollowupError {
                kind: FollowupErrorKind::TransportFailure,
                message: format!("AIが質問を生成できませんでした: {message}"),
            }),
        ),
        None => (None, None),
    };

    if is_finished {
        info!("Interview finished after turn {:?}", request.turn);
    }

    Ok(Json(NextQuestionResponse {
        current_question: request.current_question.clone(),
        user_answer: request.user_answer.clone(),
        next_question,
        review,
        stage,
        turn: request.turn.map(|t| t.saturating_add(1)),
        is_finished,
        is_error: error.is_some(),
        error,
    }))
}

/// POST /api/v1/interview/summary
///
/// Overall review of the whole conversation.
pub async fn handle_summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    if request.conversation.is_empty() {
        return Err(AppError::Validation("conversation cannot be empty".to_string()));
    }

    let summary = summarize_conversation(state.llm.as_ref(), &request.conversation)
        .await
        .map_err(|e| AppError::Llm(format!("Conversation summary failed: {e}")))?;

    Ok(Json(SummaryResponse { summary }))
}

/// Runs the review when the rules file exists and is non-empty.
/// Any failure only drops the review.
async fn review_with_rules(state: &AppState, answer: &str) -> Option<String> {
    let rules = match tokio::fs::read_to_string(&state.config.review_rules_path).await {
        Ok(rules) => rules,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!(
                "Failed to read review rules '{}': {e}",
                state.config.review_rules_path
            );
            return None;
        }
    };

    let rules = rules.trim();
    if rules.is_empty() {
        return None;
    }

    match review_answer(state.llm.as_ref(), rules, answer).await {
        Ok(review) => Some(review),
        Err(e) => {
            warn!("Answer review failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use chrono::Utc;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::llm_client::testing::ScriptedCompleter;
    use crate::llm_client::LlmError;
    use crate::routes::build_router;
    use crate::skillsheet::cache::CachedSkillSheet;
    use crate::skillsheet::models::SkillSheet;
    use crate::state::{test_state, AppState};

    async fn post_json(state: AppState, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = build_router(state)
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_initial_question() {
        let response = build_router(test_state(vec![]))
            .oneshot(Request::get("/api/v1/interview/question").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["stage"], "self_introduction");
        assert!(!json["question"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_answer_is_rejected() {
        let (status, json) = post_json(
            test_state(vec![]),
            "/api/v1/interview/next",
            json!({"user_answer": "  ", "current_question": "自己紹介をお願いします。"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_followup_question_without_turn() {
        let state = test_state(vec![Ok(r#"{"question": "その経験から何を学びましたか？"}"#.to_string())]);
        let (status, json) = post_json(
            state,
            "/api/v1/interview/next",
            json!({"user_answer": "リーダーを務めました。", "current_question": "経歴を教えてください。"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["next_question"], "その経験から何を学びましたか？");
        assert_eq!(json["is_error"], false);
        assert_eq!(json["error"], Value::Null);
        assert_eq!(json["review"], Value::Null);
        assert_eq!(json["stage"], Value::Null);
    }

    #[tokio::test]
    async fn test_malformed_llm_output_is_flagged() {
        let state = test_state(vec![Ok("これはJSONではありません".to_string())]);
        let (status, json) = post_json(
            state,
            "/api/v1/interview/next",
            json!({"user_answer": "はい", "current_question": "質問"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["is_error"], true);
        assert_eq!(json["next_question"], Value::Null);
        assert_eq!(json["error"]["kind"], "malformed_response");
    }

    #[tokio::test]
    async fn test_transport_failure_is_flagged() {
        let state = test_state(vec![Err(LlmError::Api {
            status: 500,
            message: "upstream".to_string(),
        })]);
        let (_, json) = post_json(
            state,
            "/api/v1/interview/next",
            json!({"user_answer": "はい", "current_question": "質問"}),
        )
        .await;
        assert_eq!(json["is_error"], true);
        assert_eq!(json["error"]["kind"], "transport_failure");
    }

    #[tokio::test]
    async fn test_stage_transition_uses_fixed_question_without_llm() {
        let llm = Arc::new(ScriptedCompleter::default());
        let mut state = test_state(vec![]);
        state.llm = llm.clone();

        let (_, json) = post_json(
            state,
            "/api/v1/interview/next",
            json!({"user_answer": "はい", "current_question": "質問", "turn": 2}),
        )
        .await;
        assert_eq!(json["stage"], "motivation");
        assert_eq!(json["next_question"], "弊社を志望された理由を教えてください。");
        assert_eq!(json["turn"], 3);
        assert!(llm.requests().is_empty());
    }

    #[tokio::test]
    async fn test_last_turn_finishes_interview() {
        let (_, json) = post_json(
            test_state(vec![]),
            "/api/v1/interview/next",
            json!({"user_answer": "特にありません", "current_question": "質問", "turn": 11}),
        )
        .await;
        assert_eq!(json["is_finished"], true);
        assert_eq!(json["is_error"], false);
        assert_eq!(json["next_question"], Value::Null);
    }

    #[tokio::test]
    async fn test_cached_skill_sheet_reaches_prompt() {
        let llm = Arc::new(ScriptedCompleter::replying(r#"{"question": "在庫管理の案件について教えてください。"}"#));
        let mut state = test_state(vec![]);
        state.llm = llm.clone();
        state
            .skill_sheets
            .replace(CachedSkillSheet {
                upload_id: Uuid::new_v4(),
                file_name: "sheet.xlsx".to_string(),
                uploaded_at: Utc::now(),
                skill_sheet: SkillSheet::default(),
                formatted_text: "【スキルシート情報】\n\n■ 自己PR\n  在庫管理に強い\n".to_string(),
            })
            .await;

        let (_, json) = post_json(
            state,
            "/api/v1/interview/next",
            json!({
                "user_answer": "はい",
                "current_question": "質問",
                "company_info": "株式会社サンプル",
                "turn": 0
            }),
        )
        .await;
        assert_eq!(json["stage"], "self_introduction");
        assert_eq!(json["is_error"], false);

        let user = &llm.requests()[0].user;
        assert!(user.contains("株式会社サンプル\n\n【スキルシート情報】"));
        assert!(user.contains("在庫管理に強い"));
    }

    #[tokio::test]
    async fn test_review_runs_when_rules_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let rules_path = dir.path().join("review_rules.txt");
        std::fs::write(&rules_path, "結論から話すこと\n").unwrap();

        // Review and follow-up run concurrently, so both replies are valid questions
        let reply = r#"{"question": "結論を先に述べてください。"}"#;
        let llm = Arc::new(ScriptedCompleter::new(vec![
            Ok(reply.to_string()),
            Ok(reply.to_string()),
        ]));
        let mut state = test_state(vec![]);
        state.llm = llm.clone();
        state.config.review_rules_path = rules_path.to_string_lossy().into_owned();

        let (_, json) = post_json(
            state,
            "/api/v1/interview/next",
            json!({"user_answer": "色々ありまして…", "current_question": "転職理由は？"}),
        )
        .await;

        let requests = llm.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().any(|r| r.user.contains("面談の注意事項:\n結論から話すこと")));
        assert_eq!(json["review"], reply);
        assert_eq!(json["next_question"], "結論を先に述べてください。");
    }

    #[tokio::test]
    async fn test_summary_requires_conversation() {
        let (status, _) = post_json(
            test_state(vec![]),
            "/api/v1/interview/summary",
            json!({"conversation": []}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_summary_returns_llm_text() {
        let state = test_state(vec![Ok("全体的に論理的でした。".to_string())]);
        let (status, json) = post_json(
            state,
            "/api/v1/interview/summary",
            json!({"conversation": [{"question": "自己紹介", "answer": "山田です"}]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["summary"], "全体的に論理的でした。");
    }

    #[tokio::test]
    async fn test_summary_llm_failure_is_bad_gateway() {
        let (status, json) = post_json(
            test_state(vec![]),
            "/api/v1/interview/summary",
            json!({"conversation": [{"question": "自己紹介", "answer": "山田です"}]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"]["code"], "LLM_ERROR");
    }
}
