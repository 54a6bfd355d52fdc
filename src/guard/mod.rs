//! Input guardrails applied before any completion-service call.
//!
//! Three checks run in order on every inbound message:
//!   1. validation (empty / oversized) — [`validate`]
//!   2. sanitization — [`sanitize::sanitize`]
//!   3. subject gating — [`classify::is_study_related`]
//!
//! Each rejection carries the fixed user-facing message for that path; the
//! conversation handler displays it and ends the turn. No retries.

pub mod classify;
pub mod sanitize;

pub use classify::is_study_related;
pub use sanitize::sanitize;

/// Fixed reply when the message is not study-related.
pub const REDIRECT_MESSAGE: &str = "I'm a study assistant, so I can only help with \
study topics like math, science, history, or literature. Try asking me to explain \
a concept, summarize a topic, quiz you, or build a study plan.";

/// Fixed reply when the completion service fails or returns unusable output.
pub const FAILURE_MESSAGE: &str = "Sorry, I ran into a problem while handling your \
request. Please try again or rephrase it.";

/// A terminal per-turn rejection. Converting one into its message is the
/// only way a guard failure reaches the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Inbound text was empty or whitespace-only.
    EmptyInput,
    /// Inbound text exceeded the configured character limit.
    TooLong { limit: usize },
    /// Sanitized text did not reference any allowed study subject.
    OffTopic,
    /// The completion service failed or produced unusable output.
    Upstream,
}

impl Rejection {
    /// The user-visible message displayed for this rejection.
    pub fn message(&self) -> String {
        match self {
            Rejection::EmptyInput => {
                "Please type a question or request so I can help with your studies.".to_string()
            }
            Rejection::TooLong { limit } => {
                format!("That message is too long. Please keep it under {limit} characters.")
            }
            Rejection::OffTopic => REDIRECT_MESSAGE.to_string(),
            Rejection::Upstream => FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Validate raw inbound text before any other processing.
///
/// Rejects empty (or whitespace-only) input and input longer than `limit`
/// characters. Length counts Unicode scalar values, not bytes.
pub fn validate(raw: &str, limit: usize) -> Result<(), Rejection> {
    if raw.trim().is_empty() {
        return Err(Rejection::EmptyInput);
    }
    if raw.chars().count() > limit {
        return Err(Rejection::TooLong { limit });
    }
    Ok(())
}

/// One inbound message, carried through the guard steps of a turn.
/// Built per message and dropped when the turn ends — nothing persists.
#[derive(Debug, Clone)]
pub struct StudyQuery {
    pub raw: String,
    pub sanitized: String,
    pub is_study_related: bool,
}

impl StudyQuery {
    /// Sanitize `raw` and classify the result.
    pub fn build(raw: &str) -> Self {
        let sanitized = sanitize(raw);
        let is_study_related = is_study_related(&sanitized);
        Self {
            raw: raw.to_string(),
            sanitized,
            is_study_related,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_normal_input() {
        assert!(validate("explain calculus", 1000).is_ok());
    }

    #[test]
    fn validate_rejects_empty() {
        assert_eq!(validate("", 1000), Err(Rejection::EmptyInput));
        assert_eq!(validate("   \t", 1000), Err(Rejection::EmptyInput));
    }

    #[test]
    fn validate_rejects_oversized() {
        let long = "a".repeat(1001);
        assert_eq!(validate(&long, 1000), Err(Rejection::TooLong { limit: 1000 }));
    }

    #[test]
    fn validate_accepts_exactly_at_limit() {
        let exact = "a".repeat(1000);
        assert!(validate(&exact, 1000).is_ok());
    }

    #[test]
    fn validate_counts_chars_not_bytes() {
        // 400 three-byte chars: 1200 bytes but only 400 chars.
        let s = "学".repeat(400);
        assert!(validate(&s, 1000).is_ok());
    }

    #[test]
    fn rejection_messages_are_distinct() {
        let msgs = [
            Rejection::EmptyInput.message(),
            Rejection::TooLong { limit: 1000 }.message(),
            Rejection::OffTopic.message(),
            Rejection::Upstream.message(),
        ];
        for (i, a) in msgs.iter().enumerate() {
            assert!(!a.is_empty());
            for b in msgs.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn too_long_message_names_the_limit() {
        let msg = Rejection::TooLong { limit: 1000 }.message();
        assert!(msg.contains("1000"));
    }

    #[test]
    fn query_build_sets_all_fields() {
        let q = StudyQuery::build("  <b>explain calculus</b>  ");
        assert_eq!(q.raw, "  <b>explain calculus</b>  ");
        assert_eq!(q.sanitized, "explain calculus");
        assert!(q.is_study_related);
    }

    #[test]
    fn query_build_flags_off_topic() {
        let q = StudyQuery::build("tell me a joke");
        assert!(!q.is_study_related);
    }
}
