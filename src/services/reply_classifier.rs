use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

pub const CLARIFICATION_MARKER: &str = "clarification_needed";

/// What a raw interpreter reply turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelReply {
    /// The model asked the user to narrow the search.
    Clarification(String),
    /// Text that looks like a read query; executed verbatim.
    Query(String),
    /// Neither a clarification nor anything resembling SQL.
    Unrecognized,
}

#[derive(Deserialize)]
struct ClarificationReply {
    clarification_needed: String,
}

fn clarification_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#""clarification_needed"\s*:\s*"([^"]+)""#).expect("valid clarification regex")
    })
}

pub fn classify(raw: &str) -> ModelReply {
    if raw.contains(CLARIFICATION_MARKER) {
        if let Some(message) = extract_clarification(raw) {
            return ModelReply::Clarification(message);
        }
        tracing::debug!("Clarification marker present but no message could be recovered");
    }

    if raw.to_lowercase().contains("select") {
        return ModelReply::Query(raw.trim().to_string());
    }

    ModelReply::Unrecognized
}

fn extract_clarification(raw: &str) -> Option<String> {
    if let Ok(reply) = serde_json::from_str::<ClarificationReply>(strip_code_fence(raw)) {
        return Some(reply.clarification_needed);
    }

    clarification_pattern()
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Strips a surrounding ```json ... ``` or ``` ... ``` fence.
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(rest) => rest
            .trim_start()
            .strip_suffix("```")
            .map(str::trim)
            .unwrap_or_else(|| rest.trim_start()),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_json_clarification_returns_value_exactly() {
        let raw = r#"{ "clarification_needed": "هل يمكنك تحديد التخصص أو المدينة؟" }"#;
        assert_eq!(
            classify(raw),
            ModelReply::Clarification("هل يمكنك تحديد التخصص أو المدينة؟".into())
        );
    }

    #[test]
    fn fenced_json_clarification_is_parsed() {
        let raw = "```json\n{\"clarification_needed\": \"ما هي المدينة؟\"}\n```";
        assert_eq!(classify(raw), ModelReply::Clarification("ما هي المدينة؟".into()));
    }

    #[test]
    fn malformed_json_falls_back_to_pattern_extraction() {
        let raw = r#"Sure! {"clarification_needed": "ما هو التخصص المطلوب؟", }"#;
        assert_eq!(
            classify(raw),
            ModelReply::Clarification("ما هو التخصص المطلوب؟".into())
        );
    }

    #[test]
    fn non_string_clarification_value_uses_pattern_or_falls_through() {
        let raw = r#"{"clarification_needed": 42}"#;
        assert_eq!(classify(raw), ModelReply::Unrecognized);
    }

    #[test]
    fn unrecoverable_clarification_with_select_is_a_query() {
        let raw = "clarification_needed? SELECT * FROM candidates";
        assert_eq!(
            classify(raw),
            ModelReply::Query("clarification_needed? SELECT * FROM candidates".into())
        );
    }

    #[test]
    fn unrecoverable_clarification_without_select_is_unrecognized() {
        assert_eq!(classify("clarification_needed: unknown"), ModelReply::Unrecognized);
    }

    #[test]
    fn select_is_matched_case_insensitively_and_trimmed() {
        let raw = "  sElEcT * FROM candidates WHERE city = 'جدة'\n";
        assert_eq!(
            classify(raw),
            ModelReply::Query("sElEcT * FROM candidates WHERE city = 'جدة'".into())
        );
    }

    #[test]
    fn text_without_marker_or_select_is_unrecognized() {
        assert_eq!(classify("I cannot help with that."), ModelReply::Unrecognized);
        assert_eq!(classify(""), ModelReply::Unrecognized);
    }

    #[test]
    fn strip_code_fence_leaves_plain_text_alone() {
        assert_eq!(strip_code_fence(" {\"a\": 1} "), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }
}
