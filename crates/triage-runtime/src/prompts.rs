//! Prompt template for ticket analysis.
//!
//! The template constrains the model to the exact JSON contract the
//! validator enforces: `summary` (3-5 bullets), `priority`
//! (Low/Medium/High), `category` (Billing/Bug/Feature/General).
//! Keeping the instruction and the validator in lockstep is what makes
//! the `invalid_*` failure reasons meaningful.

/// Instruction block appended after the ticket text.
const OUTPUT_CONTRACT: &str = r#"Return JSON with:
- summary: array of 3 to 5 concise bullet strings
- priority: one of "Low", "Medium", "High"
- category: one of "Billing", "Bug", "Feature", "General"

Rules:
- Do NOT invent details that are not in the ticket
- Keep it factual and concise
- If unsure of category, use "General"

Example:
{"summary":["...","...","..."],"priority":"Medium","category":"Bug"}"#;

/// Render the analysis prompt for one ticket.
pub fn triage_prompt(ticket_text: &str) -> String {
    format!(
        "Analyze the support ticket below and output ONLY valid JSON \
         (no markdown, no extra text).\n\nTicket:\n{}\n\n{}",
        ticket_text, OUTPUT_CONTRACT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_ticket_text() {
        let prompt = triage_prompt("My invoice is wrong");
        assert!(prompt.contains("My invoice is wrong"));
    }

    #[test]
    fn test_prompt_states_full_contract() {
        let prompt = triage_prompt("x");
        assert!(prompt.contains("ONLY valid JSON"));
        assert!(prompt.contains("3 to 5 concise bullet strings"));
        for value in ["\"Low\"", "\"Medium\"", "\"High\""] {
            assert!(prompt.contains(value));
        }
        for value in ["\"Billing\"", "\"Bug\"", "\"Feature\"", "\"General\""] {
            assert!(prompt.contains(value));
        }
    }
}
