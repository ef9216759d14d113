//! # triage-runtime
//!
//! LLM-assisted ticket analysis runtime with deterministic fallback.
//!
//! This crate owns the model-facing side of triage: prompt rendering, the
//! provider seam, response-text extraction, strict output validation, and
//! the orchestrator that stitches analysis to the rules engine in
//! `triage-core`.
//!
//! ## Key Guarantees
//!
//! 1. **Never fails**: [`triage_ticket`] always returns a complete
//!    decision, whatever the model or transport does
//! 2. **One call**: the provider is consulted at most once per ticket,
//!    with no retries
//! 3. **Strict gate**: model output enters the system only through
//!    [`validate_analysis`]
//! 4. **Pluggable**: backends implement [`CompletionProvider`]; no
//!    transport ships here
//!
//! ## Example
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use serde_json::{json, Value};
//! use triage_runtime::{
//!     triage_ticket, CompletionConfig, CompletionProvider, ProviderError,
//! };
//!
//! struct MyBackend;
//!
//! #[async_trait]
//! impl CompletionProvider for MyBackend {
//!     async fn complete(
//!         &self,
//!         _prompt: &str,
//!         _config: &CompletionConfig,
//!     ) -> Result<Value, ProviderError> {
//!         // Call your inference API here and return its response body.
//!         Ok(json!({"choices": [{"message": {"content": "{}"}}]}))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "my-backend"
//!     }
//! }
//!
//! # async fn run() {
//! let decision = triage_ticket(
//!     "I was charged twice for my subscription",
//!     &MyBackend,
//!     &CompletionConfig::default(),
//! )
//! .await;
//! println!("{} -> {}", decision.category, decision.suggested_assignee);
//! # }
//! ```

pub mod analyze;
pub mod orchestrator;
pub mod prompts;
pub mod providers;
pub mod response;

// Re-export main types at crate root
pub use analyze::{analyze_ticket, validate_analysis};
pub use orchestrator::triage_ticket;
pub use prompts::triage_prompt;
pub use providers::{CompletionConfig, CompletionProvider, ProviderError};
pub use response::extract_response_text;

// Core types callers need alongside the runtime API
pub use triage_core::types::{
    Category, Priority, TicketAnalysis, TriageDecision, TriageFailure,
};
