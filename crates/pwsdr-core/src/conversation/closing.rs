//! End-of-call phrase detection.

/// Phrases that signal the user wants to wrap up.
pub const CLOSING_PHRASES: [&str; 5] = ["i'm done", "that's all", "thank you", "thanks", "i am done"];

/// Whether `utterance` contains a closing phrase (case-insensitive).
///
/// Transcripts often carry the typographic apostrophe, so `’` is folded to
/// `'` before matching. Paraphrases outside the fixed set are not detected.
pub fn is_closing(utterance: &str) -> bool {
    let normalized = utterance.to_lowercase().replace('\u{2019}', "'");
    CLOSING_PHRASES
        .iter()
        .any(|phrase| normalized.contains(phrase))
}
