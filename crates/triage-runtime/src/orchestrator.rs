//! Never-failing triage entry point.
//!
//! [`triage_ticket`] is the one function embedding applications call per
//! ticket. It runs model analysis, substitutes the fixed fallback
//! analysis on any failure, and always hands the result to the
//! deterministic rules engine. The returned [`TriageDecision`] is
//! complete for every input: failures surface only through forced
//! review, zeroed confidence, the explanation prefix, and `error`.

use tracing::warn;
use triage_core::rules::reconcile;
use triage_core::types::{TicketAnalysis, TriageDecision};

use crate::analyze::analyze_ticket;
use crate::providers::{CompletionConfig, CompletionProvider};

/// Triage one ticket end to end.
///
/// # Arguments
/// * `ticket_text` - Raw customer message, used both for the prompt and
///   for independent keyword inference
/// * `provider` - Completion backend; consulted at most once
/// * `config` - Request parameters for the completion call
///
/// # Returns
/// A fully populated decision. This function does not return `Result`:
/// every upstream failure is absorbed into the decision itself.
pub async fn triage_ticket(
    ticket_text: &str,
    provider: &dyn CompletionProvider,
    config: &CompletionConfig,
) -> TriageDecision {
    let (analysis, failure) = match analyze_ticket(ticket_text, provider, config).await {
        Ok(analysis) => (analysis, None),
        Err(failure) => {
            warn!(
                error = %failure,
                provider = provider.name(),
                "ticket analysis failed, using fallback analysis"
            );
            (TicketAnalysis::fallback(), Some(failure))
        }
    };

    let mut decision = reconcile(ticket_text, &analysis);

    let mut explanation_parts = Vec::new();
    if let Some(failure) = &failure {
        explanation_parts.push(format!("LLM issue: {failure}"));
        decision.needs_human_review = true;
        decision.confidence = 0.0;
        decision
            .rules_applied
            .push("review:llm_failure_fallback".to_string());
    }
    explanation_parts.push(format!(
        "Final: {} / {} -> {}",
        decision.category, decision.priority, decision.suggested_assignee
    ));
    decision.explanation = explanation_parts.join(" | ");
    decision.error = failure.map(|f| f.to_string());

    decision
}
