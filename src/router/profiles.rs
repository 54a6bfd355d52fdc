//! The four responder profiles and the routing policy text.
//!
//! Profiles are plain immutable records. Nothing in this crate interprets
//! them — they are rendered into the routing prompt and the completion
//! service performs the actual selection.

/// A fixed natural-language instruction profile that biases the model's
/// output style. Defined at compile time, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponderProfile {
    pub name: &'static str,
    pub instructions: &'static str,
}

/// The four specialized responders, rendered into the routing prompt in
/// declaration order.
pub const RESPONDERS: [ResponderProfile; 4] = [
    ResponderProfile {
        name: "question_answer",
        instructions: "You're an expert in answering study-related questions. Provide \
clear, accurate, and concise answers to questions across subjects like math, science, \
history, or literature. Use examples where helpful.",
    },
    ResponderProfile {
        name: "summary",
        instructions: "You're an expert in summarizing content. Summarize provided text \
or concepts in a concise, easy-to-understand manner, focusing on key points.",
    },
    ResponderProfile {
        name: "practice_question",
        instructions: "You're an expert in creating practice questions. Generate \
relevant, subject-specific practice questions based on the user's request (e.g. \
'create math questions' or 'quiz me on biology'). Include answers.",
    },
    ResponderProfile {
        name: "study_plan",
        instructions: "You're an expert in creating study plans. Generate a detailed, \
structured study schedule based on the user's goals, subject, and timeframe (e.g. \
'study plan for a calculus exam in 2 weeks').",
    },
];

/// Natural-language routing policy. The completion service reads this and
/// picks which responder's style applies — there is no dispatch table here.
pub const ROUTING_POLICY: &str = "You are a study assistant. Read the user's \
request and answer in the style of whichever one of the following responders fits \
it best. If weather data is included with the request, incorporate it where \
relevant. If the request is unclear, ask for clarification politely.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_four_responders_with_unique_names() {
        assert_eq!(RESPONDERS.len(), 4);
        for (i, a) in RESPONDERS.iter().enumerate() {
            assert!(!a.name.is_empty());
            assert!(!a.instructions.is_empty());
            for b in RESPONDERS.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn prompt_texts_avoid_the_failure_marker() {
        // Turn vetting treats replies containing "error" as upstream failures.
        // An echo provider reflects the whole prompt, so the static texts must
        // never trip that check themselves.
        let lower = format!("{ROUTING_POLICY} {}", RESPONDERS.map(|r| r.instructions).join(" "))
            .to_lowercase();
        assert!(!lower.contains("error"));
    }
}
