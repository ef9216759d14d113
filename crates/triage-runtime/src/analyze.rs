//! Model-output validation and the single inference call.
//!
//! [`validate_analysis`] is the strict gate between raw response text and
//! the typed [`TicketAnalysis`] contract: exact field checks, no
//! normalization, fail-fast with a stable reason. [`analyze_ticket`]
//! wraps the full path from ticket text to validated analysis; every way
//! it can fail is a [`TriageFailure`] the orchestrator recovers from.

use serde_json::Value as JsonValue;
use triage_core::types::{Category, Priority, TicketAnalysis, TriageFailure};

use crate::prompts::triage_prompt;
use crate::providers::{CompletionConfig, CompletionProvider};
use crate::response::extract_response_text;

/// Summary bullet count bounds, inclusive.
const SUMMARY_MIN_BULLETS: usize = 3;
const SUMMARY_MAX_BULLETS: usize = 5;

/// Validate raw response text against the analysis contract.
///
/// Checks run in a fixed order and stop at the first violation:
/// JSON parse, object shape, `summary` (array of 3-5 strings),
/// `priority` (exact member), `category` (exact member). Matching is
/// case-sensitive with no trimming: `"low"` is invalid even though the
/// rules engine downstream could normalize it. Keeping this gate strict
/// is what makes validation drift observable.
pub fn validate_analysis(response_text: &str) -> Result<TicketAnalysis, TriageFailure> {
    let value: JsonValue = serde_json::from_str(response_text)
        .map_err(|e| TriageFailure::InvalidJson(e.to_string()))?;

    let object = value.as_object().ok_or(TriageFailure::InvalidJsonShape)?;

    let summary = object
        .get("summary")
        .and_then(JsonValue::as_array)
        .ok_or(TriageFailure::InvalidSummary)?;
    if summary.len() < SUMMARY_MIN_BULLETS || summary.len() > SUMMARY_MAX_BULLETS {
        return Err(TriageFailure::InvalidSummary);
    }
    let summary: Vec<String> = summary
        .iter()
        .map(|item| item.as_str().map(|s| s.to_string()))
        .collect::<Option<Vec<_>>>()
        .ok_or(TriageFailure::InvalidSummary)?;

    let priority = object
        .get("priority")
        .and_then(JsonValue::as_str)
        .filter(|s| Priority::from_exact(s).is_some())
        .ok_or(TriageFailure::InvalidPriority)?
        .to_string();

    let category = object
        .get("category")
        .and_then(JsonValue::as_str)
        .filter(|s| Category::from_exact(s).is_some())
        .ok_or(TriageFailure::InvalidCategory)?
        .to_string();

    Ok(TicketAnalysis {
        summary,
        priority,
        category,
    })
}

/// Run one inference call and validate its output.
///
/// Empty or whitespace-only ticket text short-circuits before any
/// provider call. This is the sole await point in the triage path.
pub async fn analyze_ticket(
    ticket_text: &str,
    provider: &dyn CompletionProvider,
    config: &CompletionConfig,
) -> Result<TicketAnalysis, TriageFailure> {
    if ticket_text.trim().is_empty() {
        return Err(TriageFailure::EmptyTicketText);
    }

    let prompt = triage_prompt(ticket_text);
    let response = provider
        .complete(&prompt, config)
        .await
        .map_err(|e| TriageFailure::LlmCallFailed(e.to_string()))?;

    let response_text = extract_response_text(&response);
    validate_analysis(&response_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ProviderError;
    use async_trait::async_trait;
    use serde_json::json;

    struct CannedProvider {
        response: Result<JsonValue, String>,
    }

    #[async_trait]
    impl CompletionProvider for CannedProvider {
        async fn complete(
            &self,
            _prompt: &str,
            _config: &CompletionConfig,
        ) -> Result<JsonValue, ProviderError> {
            self.response
                .clone()
                .map_err(|msg| ProviderError::HttpError(msg))
        }

        fn name(&self) -> &str {
            "canned"
        }
    }

    fn valid_payload() -> String {
        json!({
            "summary": ["Checkout fails with a 500.", "Started this morning.", "Blocks all purchases."],
            "priority": "High",
            "category": "Bug"
        })
        .to_string()
    }

    #[test]
    fn test_validate_accepts_contract_payload() {
        let analysis = validate_analysis(&valid_payload()).unwrap();
        assert_eq!(analysis.summary.len(), 3);
        assert_eq!(analysis.priority, "High");
        assert_eq!(analysis.category, "Bug");
    }

    #[test]
    fn test_validate_rejects_non_json() {
        let err = validate_analysis("I think this is a Bug ticket").unwrap_err();
        assert!(matches!(err, TriageFailure::InvalidJson(_)));
        assert!(err.to_string().starts_with("invalid_json: "));
    }

    #[test]
    fn test_validate_rejects_non_object() {
        let err = validate_analysis("[1, 2, 3]").unwrap_err();
        assert_eq!(err, TriageFailure::InvalidJsonShape);
    }

    #[test]
    fn test_validate_rejects_short_summary() {
        let payload = json!({
            "summary": ["Only one bullet."],
            "priority": "Low",
            "category": "General"
        });
        let err = validate_analysis(&payload.to_string()).unwrap_err();
        assert_eq!(err, TriageFailure::InvalidSummary);
    }

    #[test]
    fn test_validate_rejects_six_bullets() {
        let payload = json!({
            "summary": ["a", "b", "c", "d", "e", "f"],
            "priority": "Low",
            "category": "General"
        });
        let err = validate_analysis(&payload.to_string()).unwrap_err();
        assert_eq!(err, TriageFailure::InvalidSummary);
    }

    #[test]
    fn test_validate_rejects_non_string_bullet() {
        let payload = json!({
            "summary": ["a", 2, "c"],
            "priority": "Low",
            "category": "General"
        });
        let err = validate_analysis(&payload.to_string()).unwrap_err();
        assert_eq!(err, TriageFailure::InvalidSummary);
    }

    #[test]
    fn test_validate_is_case_sensitive_on_priority() {
        let payload = json!({
            "summary": ["a", "b", "c"],
            "priority": "low",
            "category": "General"
        });
        let err = validate_analysis(&payload.to_string()).unwrap_err();
        assert_eq!(err, TriageFailure::InvalidPriority);
    }

    #[test]
    fn test_validate_rejects_unknown_category() {
        let payload = json!({
            "summary": ["a", "b", "c"],
            "priority": "Low",
            "category": "Refunds"
        });
        let err = validate_analysis(&payload.to_string()).unwrap_err();
        assert_eq!(err, TriageFailure::InvalidCategory);
    }

    #[test]
    fn test_validate_checks_summary_before_priority() {
        let payload = json!({
            "summary": [],
            "priority": "nope",
            "category": "nope"
        });
        let err = validate_analysis(&payload.to_string()).unwrap_err();
        assert_eq!(err, TriageFailure::InvalidSummary);
    }

    #[test]
    fn test_validated_analysis_round_trips() {
        let analysis = validate_analysis(&valid_payload()).unwrap();
        let reserialized = serde_json::to_string(&analysis).unwrap();
        let again = validate_analysis(&reserialized).unwrap();
        assert_eq!(analysis, again);
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_text_without_calling_provider() {
        let provider = CannedProvider {
            response: Err("should never be reached".to_string()),
        };
        let err = analyze_ticket("   \n\t ", &provider, &CompletionConfig::default())
            .await
            .unwrap_err();
        assert_eq!(err, TriageFailure::EmptyTicketText);
    }

    #[tokio::test]
    async fn test_analyze_maps_provider_error() {
        let provider = CannedProvider {
            response: Err("connection refused".to_string()),
        };
        let err = analyze_ticket("site is down", &provider, &CompletionConfig::default())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            TriageFailure::LlmCallFailed("HTTP request failed: connection refused".to_string())
        );
    }

    #[tokio::test]
    async fn test_analyze_extracts_chat_shape_then_validates() {
        let provider = CannedProvider {
            response: Ok(json!({
                "choices": [{"message": {"content": valid_payload()}}]
            })),
        };
        let analysis = analyze_ticket("checkout 500s", &provider, &CompletionConfig::default())
            .await
            .unwrap();
        assert_eq!(analysis.category, "Bug");
    }
}
