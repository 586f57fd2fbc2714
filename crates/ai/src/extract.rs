//! Helpers for extracting JSON payloads from model replies.
//!
//! Models frequently wrap their JSON in markdown code fences or pad it
//! with prose. These helpers recover the payload without failing the
//! whole request.

/// Strip a surrounding markdown code fence, including an optional
/// `json` language tag, and trim whitespace.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// Extract a JSON object from a reply: strip fences, then fall back to
/// slicing from the first `{` to the last `}` when prose surrounds it.
pub fn extract_json_object(text: &str) -> Option<serde_json::Value> {
    let cleaned = strip_code_fence(text);
    if let Ok(value) = serde_json::from_str(cleaned) {
        return Some(value);
    }

    let start = cleaned.find('{')?;
    let end = cleaned.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&cleaned[start..=end]).ok()
}

/// Extract a JSON array from a reply, slicing from the first `[` to
/// the last `]` when needed.
pub fn extract_json_array(text: &str) -> Option<serde_json::Value> {
    let cleaned = strip_code_fence(text);
    if let Ok(value @ serde_json::Value::Array(_)) = serde_json::from_str(cleaned) {
        return Some(value);
    }

    let start = cleaned.find('[')?;
    let end = cleaned.rfind(']')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&cleaned[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fence_with_language_tag() {
        let text = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fence(text), "{\"a\": 1}");
    }

    #[test]
    fn strips_fence_without_language_tag() {
        let text = "```\n[1, 2]\n```";
        assert_eq!(strip_code_fence(text), "[1, 2]");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_code_fence("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn extracts_object_from_prose() {
        let text = "Sure! Here is the analysis:\n{\"item_type\": \"Chair\"}\nLet me know.";
        let value = extract_json_object(text).unwrap();
        assert_eq!(value["item_type"], "Chair");
    }

    #[test]
    fn extracts_fenced_object() {
        let text = "```json\n{\"risk_level\": \"low\"}\n```";
        let value = extract_json_object(text).unwrap();
        assert_eq!(value["risk_level"], "low");
    }

    #[test]
    fn object_extraction_fails_on_garbage() {
        assert!(extract_json_object("no json here").is_none());
        assert!(extract_json_object("{broken").is_none());
    }

    #[test]
    fn extracts_array_from_prose() {
        let text = "Found these vendors:\n[{\"name\": \"Fix It Fast\"}]";
        let value = extract_json_array(text).unwrap();
        assert_eq!(value[0]["name"], "Fix It Fast");
    }

    #[test]
    fn nested_braces_survive_object_slicing() {
        let text = "reply: {\"cost_estimate\": {\"low\": 25, \"high\": 100}} done";
        let value = extract_json_object(text).unwrap();
        assert_eq!(value["cost_estimate"]["low"], 25);
    }
}
