use std::sync::LazyLock;

use regex::Regex;

use super::types::TokenizedMessage;

/// Static regex matching runs of word characters (compiled once on first use)
#[expect(
    clippy::expect_used,
    reason = "Regex pattern is a compile-time constant and cannot fail"
)]
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("WORD_PATTERN is a valid regex literal"));

/// Normalize and tokenize a raw message.
///
/// The whole input is lowercased first, then split on word boundaries:
/// each maximal run of alphanumeric or underscore characters becomes one
/// token and everything else (punctuation, whitespace) is discarded.
/// Tokens keep their order and duplicates. Empty input yields empty
/// output; there are no error cases.
#[must_use]
pub fn tokenize(message: &str) -> TokenizedMessage {
    let text = message.to_lowercase();
    let tokens = WORD_PATTERN
        .find_iter(&text)
        .map(|word| word.as_str().to_string())
        .collect();
    TokenizedMessage { text, tokens }
}
