//! Core types for ticket triage.
//!
//! The types here are the contract between the model-facing runtime and
//! the deterministic rules engine:
//!
//! - [`TicketAnalysis`] mirrors the JSON object the model is asked to
//!   return. Priority and category stay as validated strings because this
//!   is a wire-contract type; the rules engine re-normalizes them
//!   defensively before use.
//! - [`TriageDecision`] is the sole externally visible output. Its
//!   priority and category are real enums, so downstream consumers can
//!   never observe a value outside the allowed domains.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ticket priority. Serialized as its exact title-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// All allowed priorities, in ascending order of urgency.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Case-sensitive lookup, used by the validator (no normalization
    /// at that stage).
    pub fn from_exact(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == value)
    }

    /// Lenient lookup: trims and title-cases before matching. This is the
    /// rules engine's second safety net against casing drift upstream.
    pub fn from_lenient(value: &str) -> Option<Self> {
        Self::from_exact(&title_case(value.trim()))
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ticket category. Serialized as its exact title-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Billing,
    Bug,
    Feature,
    General,
}

impl Category {
    /// All allowed categories, in rule-precedence order
    /// (Billing > Bug > Feature > General).
    pub const ALL: [Category; 4] = [
        Category::Billing,
        Category::Bug,
        Category::Feature,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Billing => "Billing",
            Category::Bug => "Bug",
            Category::Feature => "Feature",
            Category::General => "General",
        }
    }

    /// Case-sensitive lookup, used by the validator.
    pub fn from_exact(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }

    /// Lenient lookup: trims and title-cases before matching.
    pub fn from_lenient(value: &str) -> Option<Self> {
        Self::from_exact(&title_case(value.trim()))
    }

    /// Team that handles tickets in this category.
    pub fn assignee(&self) -> &'static str {
        match self {
            Category::Billing => "Billing Team",
            Category::Bug => "Engineering - Bugs",
            Category::Feature => "Product - Feature Requests",
            Category::General => "Support L1",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title-case each whitespace-separated word ("hIGH" -> "High").
pub(crate) fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Validated model output for one ticket.
///
/// This mirrors the JSON object the model is instructed to return:
/// `summary` is 3 to 5 bullet strings, `priority` and `category` are
/// members of their allowed sets. The validator guarantees membership;
/// the strings are kept as-is so the type round-trips the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketAnalysis {
    /// 3 to 5 concise bullet strings.
    pub summary: Vec<String>,

    /// One of "Low", "Medium", "High".
    pub priority: String,

    /// One of "Billing", "Bug", "Feature", "General".
    pub category: String,
}

impl TicketAnalysis {
    /// Fixed safe substitute used whenever model analysis is unavailable
    /// or invalid. The rules engine still runs over this value, so every
    /// ticket yields a complete decision.
    pub fn fallback() -> Self {
        Self {
            summary: vec![
                "Unable to confidently summarize ticket.".to_string(),
                "Requires human review.".to_string(),
                "Please review the original message.".to_string(),
            ],
            priority: Priority::Medium.as_str().to_string(),
            category: Category::General.as_str().to_string(),
        }
    }
}

/// Final triage decision for one ticket.
///
/// Always fully populated: upstream failures surface only through
/// `error`, forced review, and the explanation prefix — never through
/// missing or out-of-domain fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageDecision {
    /// Summary bullets, passed through from the (possibly fallback)
    /// model analysis unchanged.
    pub summary: Vec<String>,

    /// Final priority after reconciliation.
    pub priority: Priority,

    /// Final category after reconciliation.
    pub category: Category,

    /// Team suggested by the final category.
    pub suggested_assignee: String,

    /// Heuristic confidence in [0.0, 1.0], rounded to 2 decimals.
    pub confidence: f64,

    /// Whether a human must review this decision.
    pub needs_human_review: bool,

    /// Append-only, order-preserving audit log of every rule decision.
    pub rules_applied: Vec<String>,

    /// Human-readable explanation, composed by the orchestrator.
    pub explanation: String,

    /// Machine-readable failure reason, if model analysis failed.
    pub error: Option<String>,
}

/// Why model analysis could not produce a usable [`TicketAnalysis`].
///
/// The `Display` form is the stable machine-readable reason carried in
/// [`TriageDecision::error`]. Every variant is fully recovered by the
/// orchestrator via [`TicketAnalysis::fallback`]; none escapes as a
/// panic or a propagated error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriageFailure {
    /// The ticket text was empty or whitespace-only. No inference call
    /// is attempted in this case.
    #[error("empty_ticket_text")]
    EmptyTicketText,

    /// The inference call itself errored.
    #[error("llm_call_failed: {0}")]
    LlmCallFailed(String),

    /// The extracted response text did not parse as JSON.
    #[error("invalid_json: {0}")]
    InvalidJson(String),

    /// The response parsed, but was not a JSON object.
    #[error("invalid_json_shape_not_object")]
    InvalidJsonShape,

    /// `summary` was missing, not an array, outside 3-5 items, or had
    /// non-string elements.
    #[error("invalid_summary")]
    InvalidSummary,

    /// `priority` was not exactly one of Low/Medium/High.
    #[error("invalid_priority")]
    InvalidPriority,

    /// `category` was not exactly one of Billing/Bug/Feature/General.
    #[error("invalid_category")]
    InvalidCategory,
}
