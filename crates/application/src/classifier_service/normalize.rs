//! Deterministic text preprocessing shared by training and inference.

/// Tokens shorter than this carry no class signal and are dropped.
const MIN_TOKEN_CHARS: usize = 2;

/// Canonicalizes raw text for the classifier.
///
/// Lower-cases the input and strips every character that is not an ASCII
/// letter or whitespace; whitespace structure is preserved. Total and
/// idempotent.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|character| character.is_ascii_alphabetic() || character.is_whitespace())
        .collect()
}

/// Splits normalized text into the token stream the vectorizer indexes.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_owned)
        .collect()
}
