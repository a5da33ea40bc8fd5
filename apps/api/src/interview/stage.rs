//! Interview stage counter.
//!
//! An interview walks through a fixed list of stages. Each stage opens with a
//! fixed question and then allows `FOLLOWUPS_PER_STAGE` LLM follow-ups. The
//! client reports how many questions it has seen (`turn`, 0-based index of the
//! question just answered) and the server derives what comes next.

use serde::{Deserialize, Serialize};

pub const FOLLOWUPS_PER_STAGE: u32 = 2;
const QUESTIONS_PER_STAGE: u32 = FOLLOWUPS_PER_STAGE + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStage {
    SelfIntroduction,
    Motivation,
    Experience,
    ReverseQuestion,
}

impl InterviewStage {
    pub const ALL: [InterviewStage; 4] = [
        InterviewStage::SelfIntroduction,
        InterviewStage::Motivation,
        InterviewStage::Experience,
        InterviewStage::ReverseQuestion,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InterviewStage::SelfIntroduction => "自己紹介",
            InterviewStage::Motivation => "志望動機",
            InterviewStage::Experience => "経験・スキル",
            InterviewStage::ReverseQuestion => "逆質問",
        }
    }

    /// Fixed question asked when the stage begins.
    pub fn opening_question(self) -> &'static str {
        match self {
            InterviewStage::SelfIntroduction => "まずは簡単に自己紹介をお願いします。",
            InterviewStage::Motivation => "弊社を志望された理由を教えてください。",
            InterviewStage::Experience => {
                "これまでに携わったプロジェクトの中で、最も力を入れたものについて教えてください。"
            }
            InterviewStage::ReverseQuestion => "最後に、何か質問はありますか？",
        }
    }

    /// Stage that owns the question at 0-based position `turn`.
    pub fn for_turn(turn: u32) -> Option<InterviewStage> {
        Self::ALL.get((turn / QUESTIONS_PER_STAGE) as usize).copied()
    }
}

/// What the interviewer does after the answer to question `turn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// Ask an LLM-generated follow-up within the same stage.
    FollowUp(InterviewStage),
    /// Move on and ask the next stage's fixed opening question.
    Begin(InterviewStage),
    Finished,
}

pub fn next_step(answered_turn: u32) -> NextStep {
    let next = answered_turn.saturating_add(1);
    match InterviewStage::for_turn(next) {
        None => NextStep::Finished,
        Some(stage) if next % QUESTIONS_PER_STAGE == 0 => NextStep::Begin(stage),
        Some(stage) => NextStep::FollowUp(stage),
    }
}
