use verifact_common::Language;

/// How many leading whitespace-delimited tokens are scored.
const TOKEN_WINDOW: usize = 50;

/// Stop-word lists per candidate language, evaluated in this order. A
/// candidate wins only with a strictly greater match count than the running
/// maximum, so ties resolve to the earlier language and the base language
/// wins when nothing scores above zero.
const STOP_WORDS: &[(Language, &[&str])] = &[
    (
        Language::Spanish,
        &["el", "la", "de", "que", "y", "en", "un", "es", "se", "no"],
    ),
    (
        Language::French,
        &["le", "de", "et", "à", "un", "il", "être", "en", "avoir"],
    ),
    (
        Language::German,
        &["der", "die", "und", "in", "den", "von", "zu", "das", "mit", "sich"],
    ),
];

pub fn detect_language(content: &str, base: Language) -> Language {
    let text = content.to_lowercase();
    let words: Vec<&str> = text.split_whitespace().take(TOKEN_WINDOW).collect();

    let mut detected = base;
    let mut max_matches = 0usize;

    for (language, stop_words) in STOP_WORDS {
        let matches = words.iter().filter(|word| stop_words.contains(*word)).count();
        if matches > max_matches {
            max_matches = matches;
            detected = *language;
        }
    }

    detected
}
