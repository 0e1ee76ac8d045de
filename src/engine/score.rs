use crate::config::TagConfig;

use super::types::{TagScore, TokenizedMessage};

#[cfg(test)]
#[path = "score_tests.rs"]
mod tests;

/// Score every configured tag against a tokenized message.
///
/// Each keyword contributes its occurrence count and a tag's score is the
/// sum over its keywords. Every tag appears in the output, zero scores
/// included, in configuration order.
///
/// Single-word keywords count exact token matches, so punctuation-split
/// fragments ("it's" tokenizing to "it", "s") count like any other token.
/// Multi-word keywords count non-overlapping substring occurrences in the
/// space-rejoined token text, which means a phrase can also match across
/// what were separate clauses in the original message ("price. match"
/// rejoins to "price match"). Both behaviors are long-standing and
/// downstream routing rules depend on them.
#[must_use]
pub fn score_tags(config: &TagConfig, message: &TokenizedMessage) -> Vec<TagScore> {
    let joined = message.joined_tokens();
    config
        .entries()
        .iter()
        .map(|entry| TagScore {
            tag: entry.name.clone(),
            score: entry
                .keywords
                .iter()
                .map(|keyword| keyword_occurrences(keyword, &message.tokens, &joined))
                .fold(0, usize::saturating_add),
        })
        .collect()
}

/// Count how many occurrences one keyword contributes.
///
/// A keyword that is a single word under whitespace splitting is compared
/// against each token for equality; anything else (including the empty
/// string, which splits to no words) is counted as non-overlapping
/// substring occurrences of the keyword verbatim in the joined text.
fn keyword_occurrences(keyword: &str, tokens: &[String], joined: &str) -> usize {
    let mut words = keyword.split_whitespace();
    match (words.next(), words.next()) {
        (Some(word), None) => tokens.iter().filter(|token| token.as_str() == word).count(),
        _ => joined.matches(keyword).count(),
    }
}
