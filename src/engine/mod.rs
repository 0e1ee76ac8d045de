//! The tagging engine: tokenization, scoring, ranking and fallback policy.
//!
//! `TaggerEngine::analyze` is a pure function of the immutable
//! configuration and the message text. No I/O, no locking, no state
//! between calls; one engine can be shared freely across tasks.

mod fallback;
mod rank;
mod score;
mod tokenize;
mod types;

pub use fallback::default_tags;
pub use rank::{rank_tags, select_top_two};
pub use score::score_tags;
pub use tokenize::tokenize;
pub use types::{TagResult, TagScore, TokenizedMessage};

use crate::config::TagConfig;

/// Scores and ranks messages against a fixed tag configuration.
#[derive(Debug, Clone)]
pub struct TaggerEngine {
    config: TagConfig,
}

impl TaggerEngine {
    /// Build an engine over `config`.
    #[must_use]
    pub fn new(config: TagConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    /// Assign the two best-matching tags to `message`.
    ///
    /// Total for every input: empty or whitespace-only messages resolve
    /// straight to the default pair, and a degenerate configuration
    /// resolves to the `UNKNOWN` sentinel pair rather than failing.
    #[must_use]
    pub fn analyze(&self, message: &str) -> TagResult {
        if message.trim().is_empty() {
            return default_tags(&self.config);
        }
        let tokenized = tokenize(message);
        let scores = score_tags(&self.config, &tokenized);
        let ranked = rank_tags(scores);
        select_top_two(&ranked, &self.config)
    }
}
