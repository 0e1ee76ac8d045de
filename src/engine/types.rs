/// A message prepared for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedMessage {
    /// The input lowercased in full, punctuation intact.
    pub text: String,
    /// Word tokens extracted from the lowercased text, in order,
    /// duplicates preserved.
    pub tokens: Vec<String>,
}

impl TokenizedMessage {
    /// The token sequence rejoined with single spaces.
    ///
    /// This is the haystack multi-word keywords are matched against, so
    /// phrase matching sees exactly one space between words regardless of
    /// the original punctuation or spacing.
    #[must_use]
    pub fn joined_tokens(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Match strength of one tag against one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagScore {
    /// Tag name as configured.
    pub tag: String,
    /// Total keyword occurrences counted for the tag.
    pub score: usize,
}

/// The two tags assigned to a message.
///
/// Always fully populated: when nothing matches, the fallback policy fills
/// both fields rather than leaving a hole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagResult {
    /// Best-matching tag.
    pub primary: String,
    /// Second-best tag, or the catch-all / fallback stand-in.
    pub secondary: String,
}

impl TagResult {
    /// Create a result pair from anything string-like.
    #[must_use]
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}
