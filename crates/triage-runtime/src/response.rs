//! Response-text extraction from opaque provider responses.
//!
//! Different backends and SDK versions expose the completion text in
//! different places. Extraction probes a ranked list of known shapes and
//! falls back to string coercion, so it never fails: downstream JSON
//! parsing is where malformed responses surface.

use serde_json::Value as JsonValue;

/// One extraction strategy over an opaque response value.
type Extractor = fn(&JsonValue) -> Option<String>;

/// Known response shapes, most specific first.
const EXTRACTORS: &[Extractor] = &[chat_choice_content, completion_choice_text];

/// Chat-completions shape: `choices[0].message.content`.
fn chat_choice_content(response: &JsonValue) -> Option<String> {
    response
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(|s| s.to_string())
}

/// Legacy completions shape: `choices[0].text`.
fn completion_choice_text(response: &JsonValue) -> Option<String> {
    response
        .get("choices")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(|s| s.to_string())
}

/// Extract the completion text from a provider response.
///
/// Tries each known shape in order; when none matches, coerces the whole
/// value to a string (a JSON string yields its contents, anything else
/// its compact JSON rendering). The result is trimmed. Infallible by
/// construction.
pub fn extract_response_text(response: &JsonValue) -> String {
    for extract in EXTRACTORS {
        if let Some(text) = extract(response) {
            return text.trim().to_string();
        }
    }

    match response {
        JsonValue::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_shape() {
        let response = json!({
            "choices": [{"message": {"role": "assistant", "content": "  hello  "}}]
        });
        assert_eq!(extract_response_text(&response), "hello");
    }

    #[test]
    fn test_legacy_completion_shape() {
        let response = json!({"choices": [{"text": "hello"}]});
        assert_eq!(extract_response_text(&response), "hello");
    }

    #[test]
    fn test_chat_shape_wins_over_legacy() {
        let response = json!({
            "choices": [{"message": {"content": "from chat"}, "text": "from legacy"}]
        });
        assert_eq!(extract_response_text(&response), "from chat");
    }

    #[test]
    fn test_bare_string_coercion() {
        let response = json!("{\"summary\": []}");
        assert_eq!(extract_response_text(&response), "{\"summary\": []}");
    }

    #[test]
    fn test_unknown_object_coerces_to_json_text() {
        let response = json!({"unexpected": true});
        assert_eq!(extract_response_text(&response), "{\"unexpected\":true}");
    }

    #[test]
    fn test_empty_choices_falls_through_to_coercion() {
        let response = json!({"choices": []});
        assert_eq!(extract_response_text(&response), "{\"choices\":[]}");
    }
}
