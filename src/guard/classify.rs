//! Subject classifier — boolean gate for study-related text.

/// The allowed study subjects. Case-insensitive substring match only;
/// no tokenization or stemming.
pub const SUBJECT_KEYWORDS: [&str; 8] = [
    "math",
    "science",
    "history",
    "literature",
    "calculus",
    "biology",
    "physics",
    "chemistry",
];

/// True if the lowercased text mentions an allowed subject or the literal
/// substrings `study` / `exam`. Pure predicate, no state.
pub fn is_study_related(text: &str) -> bool {
    let lower = text.to_lowercase();
    SUBJECT_KEYWORDS
        .iter()
        .any(|kw| lower.contains(kw))
        || lower.contains("study")
        || lower.contains("exam")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_mentions_pass() {
        assert!(is_study_related("please explain calculus"));
        assert!(is_study_related("create biology questions"));
        assert!(is_study_related("summarize the history of rome"));
    }

    #[test]
    fn study_and_exam_pass() {
        assert!(is_study_related("I have an exam tomorrow"));
        assert!(is_study_related("help me study"));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(is_study_related("EXPLAIN CALCULUS"));
        assert!(is_study_related("Physics homework"));
    }

    #[test]
    fn unrelated_text_fails() {
        assert!(!is_study_related("tell me a joke"));
        assert!(!is_study_related("what's your favorite movie"));
        assert!(!is_study_related(""));
    }

    #[test]
    fn substring_matches_count() {
        // Substring-only semantics: "example" contains "exam".
        assert!(is_study_related("for example"));
    }
}
