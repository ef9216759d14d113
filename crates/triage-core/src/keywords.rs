//! Keyword signal extraction from normalized ticket text.
//!
//! Matching is intentionally literal: a single substring hit anywhere in
//! the normalized text is sufficient, with no word-boundary requirement.
//! Category precedence is fixed (Billing > Bug > Feature > General) and
//! the keyword lists are a behavioral contract, not a tuning surface.

use crate::types::{Category, Priority};

/// Billing keywords. Checked first.
const BILLING_KEYWORDS: &[&str] = &[
    "refund",
    "invoice",
    "charged",
    "charge",
    "payment",
    "billing",
    "card",
    "subscription",
];

/// Bug keywords. Checked after billing.
const BUG_KEYWORDS: &[&str] = &[
    "error",
    "500",
    "crash",
    "crashing",
    "broken",
    "bug",
    "stack trace",
    "exception",
    "internal server error",
];

/// Feature-request keywords. Checked last before the General default.
const FEATURE_KEYWORDS: &[&str] = &[
    "feature request",
    "would like",
    "can you add",
    "enhancement",
    "request a feature",
    "add support for",
];

/// Keywords that force a High priority override.
const HIGH_PRIORITY_KEYWORDS: &[&str] = &[
    "production down",
    "prod down",
    "outage",
    "data loss",
    "security breach",
    "can't access",
    "cannot access",
    "can't login",
    "cannot login",
    "urgent",
    "immediately",
    "asap",
    "p0",
    "sev0",
    "sev1",
];

fn keyword_hit(normalized: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| normalized.contains(k))
}

/// Infer a category from normalized ticket text, first match wins.
///
/// The General default is itself a genuine inference: the engine treats
/// "no keyword fired" as evidence for General and will override a
/// disagreeing model category with it.
pub fn infer_category(normalized: &str) -> Category {
    if keyword_hit(normalized, BILLING_KEYWORDS) {
        return Category::Billing;
    }
    if keyword_hit(normalized, BUG_KEYWORDS) {
        return Category::Bug;
    }
    if keyword_hit(normalized, FEATURE_KEYWORDS) {
        return Category::Feature;
    }
    Category::General
}

/// Infer a priority override from normalized ticket text.
///
/// Returns `Some(High)` when any urgent keyword is present, `None` when
/// the text carries no urgency signal (no override).
pub fn infer_priority_override(normalized: &str) -> Option<Priority> {
    if keyword_hit(normalized, HIGH_PRIORITY_KEYWORDS) {
        Some(Priority::High)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_takes_precedence_over_bug() {
        // "charged" (billing) and "error" (bug) both present
        let normalized = "i was charged twice and saw an error page";
        assert_eq!(infer_category(normalized), Category::Billing);
    }

    #[test]
    fn test_bug_takes_precedence_over_feature() {
        let normalized = "the app keeps crashing, also i would like dark mode";
        assert_eq!(infer_category(normalized), Category::Bug);
    }

    #[test]
    fn test_feature_detected() {
        let normalized = "can you add support for csv export";
        assert_eq!(infer_category(normalized), Category::Feature);
    }

    #[test]
    fn test_default_is_general() {
        let normalized = "hello, i have a question about my account settings";
        assert_eq!(infer_category(normalized), Category::General);
    }

    #[test]
    fn test_substring_match_has_no_word_boundary() {
        // "cardboard" contains "card"
        assert_eq!(infer_category("my cardboard box arrived"), Category::Billing);
    }

    #[test]
    fn test_priority_override_on_urgent_keyword() {
        assert_eq!(
            infer_priority_override("production down since 9am"),
            Some(Priority::High)
        );
        assert_eq!(infer_priority_override("asap please"), Some(Priority::High));
    }

    #[test]
    fn test_no_priority_override_on_calm_text() {
        assert_eq!(infer_priority_override("just checking in on my order"), None);
    }
}
