// Shared prompt fragments and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting pieces.

/// Sampling temperature used by every interview call.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Appended to system prompts that must return a single JSON object.
pub const JSON_ONLY_INSTRUCTION: &str = "\
出力は必ず指定されたJSON形式のみにしてください。\
余計な説明文やマークダウンのコードブロックは出力しないこと。";

/// Fills `{name}` placeholders in order. Values are inserted verbatim, so
/// later placeholders are never searched for inside earlier values.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let key = &rest[start + 1..start + len];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = &rest[start + len + 1..];
            }
            None => {
                out.push_str(&rest[..=start]);
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_known_keys() {
        let out = fill_template("Q: {question}\nA: {answer}", &[("question", "Q1"), ("answer", "A1")]);
        assert_eq!(out, "Q: Q1\nA: A1");
    }

    #[test]
    fn test_fill_template_does_not_expand_inside_values() {
        let out = fill_template("{answer} / {rules}", &[("answer", "{rules}"), ("rules", "R")]);
        assert_eq!(out, "{rules} / R");
    }

    #[test]
    fn test_fill_template_keeps_unknown_braces() {
        let out = fill_template("{\"question\": \"{x}\"}", &[("x", "y")]);
        assert_eq!(out, "{\"question\": \"y\"}");
    }
}
