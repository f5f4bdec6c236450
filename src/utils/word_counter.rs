//! Word tokenization for the word-count endpoint.

use regex::Regex;
use std::sync::LazyLock;

/// A word is a maximal run of ASCII letters, digits or underscores. Any other
/// character, including non-ASCII letters, separates words.
static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9A-Za-z_]+").unwrap());

/// Counts the words in `text`. Punctuation and whitespace only separate words.
pub fn count_words(text: &str) -> usize {
    WORD_REGEX.find_iter(text).count()
}
