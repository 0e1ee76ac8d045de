use crate::config::{TagConfig, CATCH_ALL_TAG};

use super::fallback::default_tags;
use super::types::{TagResult, TagScore};

#[cfg(test)]
#[path = "rank_tests.rs"]
mod tests;

/// Order scores from highest to lowest.
///
/// `sort_by` is stable, so tags with equal scores keep their relative
/// (configuration) order. Selection relies on that for its tie-break.
#[must_use]
pub fn rank_tags(mut scores: Vec<TagScore>) -> Vec<TagScore> {
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores
}

/// Pick the primary/secondary pair from a ranked score list.
///
/// The top two entries win, with two exceptions: a top score of zero means
/// the message matched nothing and the default pair applies instead, and a
/// zero-scoring runner-up is replaced by the `OTHER` catch-all when one is
/// configured (a tag that matched nothing should not ride along just
/// because it ranked second). Without a catch-all the zero-scoring
/// runner-up is reported as ranked.
#[must_use]
pub fn select_top_two(ranked: &[TagScore], config: &TagConfig) -> TagResult {
    let (Some(first), Some(second)) = (ranked.first(), ranked.get(1)) else {
        return default_tags(config);
    };
    if first.score == 0 {
        return default_tags(config);
    }
    let secondary = if second.score == 0 && config.has_tag(CATCH_ALL_TAG) {
        CATCH_ALL_TAG.to_string()
    } else {
        second.tag.clone()
    };
    TagResult::new(first.tag.clone(), secondary)
}
