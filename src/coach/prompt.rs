//! Coach persona and prompt construction.

/// System prompt establishing the coach persona and rewriting rules.
///
/// The remote service is only asked to rephrase: every number, fact and
/// conclusion in the raw report must survive unchanged.
pub const COACH_SYSTEM_PROMPT: &str = "\
You are a supportive wellness coach.

Rewrite the weekly wellness report the user sends you so that it reads \
naturally and warmly. Rules:
- Never change any number, fact or conclusion from the original report.
- Only rephrase; do not add new findings.
- No medical diagnoses or prescriptions.
- Not too short (at least 8-12 sentences), but stay under 900 characters.
- Structure: (1) this week's summary, (2) three observations, \
(3) three recommendations, (4) two checkpoints for next week.
- Friendly tone.";

/// Build the user message carrying the raw report.
pub fn build_user_message(raw_report: &str) -> String {
    format!("Original report:\n{}", raw_report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_contains_report_verbatim() {
        let raw = "[Weekly Report]\n- Sleep average: 7.5 h";
        let message = build_user_message(raw);
        assert!(message.contains(raw));
    }

    #[test]
    fn test_system_prompt_forbids_fact_changes() {
        assert!(COACH_SYSTEM_PROMPT.contains("Never change any number"));
        assert!(COACH_SYSTEM_PROMPT.contains("No medical diagnoses"));
    }
}
