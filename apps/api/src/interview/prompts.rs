// Interview LLM prompt templates.
// All prompts for the interview module are defined here.
// Placeholders are filled with `llm_client::prompts::fill_template`.

/// Token budgets per call.
pub const FOLLOWUP_MAX_TOKENS: u32 = 100;
pub const REVIEW_MAX_TOKENS: u32 = 250;
pub const SUMMARY_MAX_TOKENS: u32 = 500;

pub const FOLLOWUP_SYSTEM: &str = "\
あなたは経験豊富な面接官です。\
面接者の回答に対して、さらに深掘りするような質問を1つだけ考えてください。\
面接の前提情報が与えられた場合は、その内容を踏まえて質問してください。
出力形式:
{\"question\": \"ここに生成した質問を記述\"}";

pub const FOLLOWUP_PROMPT_TEMPLATE: &str = "\
{context}直前の質問: {question}
面接者の回答: {answer}
この回答を受けて、次に何を聞きますか？";

/// Prepended to the follow-up prompt when there is interview context.
pub const CONTEXT_BLOCK_TEMPLATE: &str = "\
---
面接の前提情報:
{context}
---
";

pub const REVIEW_SYSTEM: &str = "\
あなたはプロの面接官であり、面談の指導者です。\
面接者の回答を冷静かつ客観的に添削してください。";

pub const REVIEW_PROMPT_TEMPLATE: &str = "\
以下の面談の注意事項を参考に、面接者の回答がルールに違反していないかチェックしてください。
特に、ルールに違反している場合は、その点を指摘し、修正案を簡潔に提示してください。

---
面談の注意事項:
{rules}
---

面接者の回答:
{answer}
---
添削結果:";

pub const SUMMARY_SYSTEM: &str = "\
あなたはプロの面接官であり、面接者の能力を客観的に評価する役割を担っています。";

pub const SUMMARY_PROMPT_TEMPLATE: &str = "\
以下に示された面接での全会話履歴を読み、以下の項目について総合的にレビューしてください。

1. 会話の全体的な流れと構成の評価
2. 回答の論理性、説得力、一貫性
3. 改善すべき具体的な点

レビューは簡潔に、かつ具体的なフィードバックを含めてください。
---
会話履歴:
{conversation}
---
総合レビュー:";
