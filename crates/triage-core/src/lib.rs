//! # triage-core
//!
//! Deterministic ticket triage rules and reconciliation engine.
//!
//! This crate owns the decision side of triage: given raw ticket text and
//! a (possibly fallback) model analysis, it infers independent keyword
//! signals, reconciles disagreements through explicit override rules,
//! scores a heuristic confidence, and decides whether a human must review
//! the result.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: same input always produces the same decision
//! 2. **No LLM calls**: everything here is rule-based
//! 3. **Total**: [`reconcile`] never fails, whatever it is fed
//! 4. **Auditable**: every decision is recorded in `rules_applied`
//!
//! ## Example
//!
//! ```rust
//! use triage_core::{reconcile, Category, TicketAnalysis};
//!
//! let analysis = TicketAnalysis {
//!     summary: vec![
//!         "Customer was charged twice at checkout.".into(),
//!         "Requests a refund for the duplicate charge.".into(),
//!         "Provides invoice number INV-12345.".into(),
//!     ],
//!     priority: "Medium".into(),
//!     category: "General".into(),
//! };
//!
//! let decision = reconcile("I was charged twice, invoice INV-12345 attached", &analysis);
//! assert_eq!(decision.category, Category::Billing);
//! assert!(decision.needs_human_review);
//! ```

pub mod keywords;
pub mod rules;
pub mod types;

// Re-export main types at crate root
pub use keywords::{infer_category, infer_priority_override};
pub use rules::{normalize_text, reconcile};
pub use types::{Category, Priority, TicketAnalysis, TriageDecision, TriageFailure};
