use rand::seq::SliceRandom;

/// Opening questions. The interview starts with one of these at random.
pub const OPENING_QUESTIONS: &[&str] = &[
    "まずは簡単に自己紹介をお願いします。",
    "これまでのご経歴を簡単に教えてください。",
    "あなたの強みと弱みを教えてください。",
    "学生時代に最も力を入れたことは何ですか？",
    "最近取り組んだ仕事の中で、一番印象に残っているものを教えてください。",
];

pub fn random_opening_question() -> &'static str {
    OPENING_QUESTIONS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(OPENING_QUESTIONS[0])
}
