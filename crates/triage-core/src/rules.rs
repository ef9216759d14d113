//! Rule reconciliation engine.
//!
//! Takes raw ticket text plus a (possibly fallback) model analysis,
//! derives independent keyword signals, reconciles disagreements via
//! explicit override rules, scores confidence, and decides whether a
//! human must review the result.
//!
//! ## Key guarantees
//!
//! 1. **Total**: [`reconcile`] never fails, for any input pair
//! 2. **Deterministic**: same inputs always produce an identical decision
//! 3. **In-domain**: the final priority and category are always enum values
//! 4. **Auditable**: every decision appends to `rules_applied`, in order
//!
//! The scoring constants below are a behavioral contract shared with the
//! test suite and downstream review tooling. Do not retune them.

use crate::keywords::{infer_category, infer_priority_override};
use crate::types::{Category, Priority, TicketAnalysis, TriageDecision};

/// Starting confidence before any adjustment.
const BASE_CONFIDENCE: f64 = 0.5;

/// Decisions below this confidence always go to a human.
const REVIEW_THRESHOLD: f64 = 0.6;

/// Normalized tickets shorter than this (in chars) are penalized.
const SHORT_INPUT_CHARS: usize = 30;

/// Collapse whitespace runs to single spaces, trim, and lowercase.
///
/// This normalized form is used for all keyword matching and for the
/// short-input check.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn round_to_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reconcile a model analysis with keyword signals from the ticket text.
///
/// # Arguments
///
/// * `ticket_text` - The raw ticket text (any string; an empty ticket is
///   rejected upstream, but this function stays total regardless)
/// * `analysis` - Validated model output, or [`TicketAnalysis::fallback`]
///
/// # Returns
///
/// A fully populated [`TriageDecision`]. `explanation` is left empty and
/// `error` is `None` at this layer; the orchestrator annotates both.
pub fn reconcile(ticket_text: &str, analysis: &TicketAnalysis) -> TriageDecision {
    let mut rules_applied: Vec<String> = Vec::new();
    let normalized = normalize_text(ticket_text);

    // Second safety net against casing drift from upstream. The validator
    // already enforces exact membership, so the substitution branches only
    // fire when the engine is driven directly with unvalidated strings.
    let model_priority = match Priority::from_lenient(&analysis.priority) {
        Some(priority) => priority,
        None => {
            rules_applied.push("llm_invalid_priority->needs_review".to_string());
            Priority::Medium
        }
    };
    let model_category = match Category::from_lenient(&analysis.category) {
        Some(category) => category,
        None => {
            rules_applied.push("llm_invalid_category->General".to_string());
            Category::General
        }
    };

    let rule_category = infer_category(&normalized);
    let rule_priority_override = infer_priority_override(&normalized);

    let mut override_applied = false;

    // Keyword-inferred category wins on disagreement. The General default
    // counts as a genuine inference here and can override the model.
    let final_category = if rule_category != model_category {
        override_applied = true;
        rules_applied.push(format!("override_category:{model_category}->{rule_category}"));
        tracing::debug!(
            from = %model_category,
            to = %rule_category,
            "Category override from keyword signal"
        );
        rule_category
    } else {
        model_category
    };

    // Urgent keywords force High priority when the model disagrees.
    let final_priority = match rule_priority_override {
        Some(override_priority) if override_priority != model_priority => {
            override_applied = true;
            rules_applied.push(format!(
                "override_priority:{model_priority}->{override_priority}"
            ));
            tracing::debug!(
                from = %model_priority,
                to = %override_priority,
                "Priority override from urgency keywords"
            );
            override_priority
        }
        _ => model_priority,
    };

    let suggested_assignee = final_category.assignee().to_string();
    rules_applied.push(format!("assignee_map:{final_category}->{suggested_assignee}"));

    // Confidence scoring: fixed order, every step audited.
    let mut confidence = BASE_CONFIDENCE;

    if model_category == rule_category {
        confidence += 0.2;
        rules_applied.push("confidence:+0.2(category_agreement)".to_string());
    } else {
        confidence -= 0.1;
        rules_applied.push("confidence:-0.1(category_disagreement)".to_string());
    }

    // A keyword-confirmed high priority earns more than silence: the
    // urgency signal is positive evidence even though it triggers review.
    match rule_priority_override {
        None => {
            confidence += 0.05;
            rules_applied.push("confidence:+0.05(no_priority_override_needed)".to_string());
        }
        Some(_) => {
            confidence += 0.1;
            rules_applied.push("confidence:+0.1(high_priority_keywords)".to_string());
        }
    }

    if override_applied {
        confidence -= 0.2;
        rules_applied.push("confidence:-0.2(override_penalty)".to_string());
    }

    // A ticket that normalizes to exactly empty is an upstream failure,
    // not a short ticket, so zero length is excluded here.
    let normalized_len = normalized.chars().count();
    if normalized_len > 0 && normalized_len < SHORT_INPUT_CHARS {
        confidence -= 0.2;
        rules_applied.push("confidence:-0.2(short_input)".to_string());
    }

    let confidence = round_to_2(confidence.clamp(0.0, 1.0));

    let mut needs_human_review = false;
    if confidence < REVIEW_THRESHOLD {
        needs_human_review = true;
        rules_applied.push("review:confidence_below_0.6".to_string());
    }
    if override_applied {
        needs_human_review = true;
        rules_applied.push("review:override_applied".to_string());
    }

    TriageDecision {
        summary: analysis.summary.clone(),
        priority: final_priority,
        category: final_category,
        suggested_assignee,
        confidence,
        needs_human_review,
        rules_applied,
        explanation: String::new(),
        error: None,
    }
}
