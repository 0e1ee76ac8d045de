/// Name of the conventional catch-all tag.
///
/// A configuration-level convention, not an enum: deployments without an
/// `OTHER` tag stay valid and simply fall back to configuration order.
pub const CATCH_ALL_TAG: &str = "OTHER";

/// Sentinel tag returned when no usable configuration exists.
pub const UNKNOWN_TAG: &str = "UNKNOWN";

/// A single tag and the keywords that vote for it.
///
/// Keywords are whitespace-separated phrases, already lowercased by the
/// loader. A single word matches tokens exactly; a multi-word phrase
/// matches the tokenized-and-rejoined message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    /// Tag name as it appears in the configuration document.
    pub name: String,
    /// Keywords voting for this tag, lowercased, possibly empty.
    pub keywords: Vec<String>,
}

impl TagEntry {
    /// Create a tag entry from anything string-like.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// The ordered tag configuration shared by every analysis call.
///
/// Entries keep the order of the configuration document; ranking ties are
/// broken by that order, so this is deliberately a list rather than a map.
/// Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagConfig {
    entries: Vec<TagEntry>,
}

impl TagConfig {
    /// Build a configuration from ordered entries.
    #[must_use]
    pub fn new(entries: Vec<TagEntry>) -> Self {
        Self { entries }
    }

    /// The entries in configuration order.
    #[must_use]
    pub fn entries(&self) -> &[TagEntry] {
        &self.entries
    }

    /// Number of configured tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the configuration holds no tags at all (degenerate).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a tag with exactly this name is configured.
    #[must_use]
    pub fn has_tag(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Tag names in configuration order.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.name.as_str())
    }
}
