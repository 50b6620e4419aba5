use std::sync::LazyLock;

use regex::Regex;

/// Vocabulary that signals emotionally charged framing.
const EMOTIONAL_WORDS: &[&str] = &["shocking", "unbelievable", "outrageous", "scandal", "exposed"];

static ALL_CAPS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]{10,}").unwrap());

pub const EMOTIONAL_LANGUAGE_FLAG: &str = "Contains emotional language";
pub const EXCESSIVE_CAPS_FLAG: &str = "Excessive use of capital letters";
pub const NO_SOURCES_FLAG: &str = "No sources cited";

/// Scan content for credibility-risk patterns. Checks run in a fixed order,
/// so the diagnostics are reproducible.
pub fn detect_red_flags(content: &str) -> Vec<String> {
    let mut flags = Vec::new();
    let text = content.to_lowercase();

    if EMOTIONAL_WORDS.iter().any(|word| text.contains(word)) {
        flags.push(EMOTIONAL_LANGUAGE_FLAG.to_string());
    }

    if ALL_CAPS_RE.is_match(content) {
        flags.push(EXCESSIVE_CAPS_FLAG.to_string());
    }

    if !text.contains("source") && !text.contains("according to") {
        flags.push(NO_SOURCES_FLAG.to_string());
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sourced_neutral_content_is_clean() {
        let flags = detect_red_flags(
            "According to the city council, the budget passed after a public hearing.",
        );
        assert!(flags.is_empty());
    }

    #[test]
    fn emotional_vocabulary_is_flagged() {
        let flags = detect_red_flags("A shocking development, according to sources.");
        assert_eq!(flags, vec![EMOTIONAL_LANGUAGE_FLAG.to_string()]);
    }

    #[test]
    fn long_uppercase_run_is_flagged() {
        let flags = detect_red_flags("BREAKINGNEWS everyone, sources say it happened.");
        assert_eq!(flags, vec![EXCESSIVE_CAPS_FLAG.to_string()]);
    }

    #[test]
    fn nine_uppercase_letters_are_not_flagged() {
        let flags = detect_red_flags("BREAKINGN is nine letters, according to our source.");
        assert!(flags.is_empty());
    }

    #[test]
    fn uncited_content_is_flagged() {
        let flags = detect_red_flags("The minister resigned yesterday afternoon.");
        assert_eq!(flags, vec![NO_SOURCES_FLAG.to_string()]);
    }

    #[test]
    fn flags_keep_a_fixed_order() {
        let flags = detect_red_flags("SHOCKING!!! UNBELIEVABLE SCANDAL EXPOSED TODAY");
        assert_eq!(
            flags,
            vec![
                EMOTIONAL_LANGUAGE_FLAG.to_string(),
                EXCESSIVE_CAPS_FLAG.to_string(),
                NO_SOURCES_FLAG.to_string(),
            ]
        );
    }
}
