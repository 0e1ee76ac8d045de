use std::path::Path;

use tokio::fs;
use tracing::debug;

use super::types::{TagConfig, TagEntry, CATCH_ALL_TAG};
use super::ConfigError;

#[cfg(test)]
#[path = "io_tests.rs"]
mod tests;

/// Load and parse the tag configuration file at `path`.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist, and the
/// corresponding parse variant for malformed content.
pub async fn load_tag_config(path: &Path) -> Result<TagConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).await?;
    let config = parse_tag_config(&content)?;
    debug!(
        "Loaded {} tags from {}",
        config.len(),
        path.display()
    );
    Ok(config)
}

/// Parse a tag configuration document.
///
/// The document is a JSON object with a `tags` key mapping tag names to
/// objects carrying a `keywords` string array. Keywords are lowercased
/// here so matching never has to; tag names are kept verbatim. Entry
/// order follows the document, which is what ranking ties are broken by.
///
/// # Errors
///
/// Returns a `ConfigError` variant naming the first structural problem
/// found: invalid JSON, a missing or non-object `tags` key, an empty tag
/// name, missing or non-string-array keywords, or no tags at all.
pub fn parse_tag_config(content: &str) -> Result<TagConfig, ConfigError> {
    let document: serde_json::Value = serde_json::from_str(content)?;
    let tags = document.get("tags").ok_or(ConfigError::MissingTagsKey)?;
    let map = tags.as_object().ok_or(ConfigError::TagsNotObject)?;

    let mut entries = Vec::with_capacity(map.len());
    for (name, value) in map {
        if name.is_empty() {
            return Err(ConfigError::EmptyTagName);
        }
        let keywords = value
            .get("keywords")
            .ok_or_else(|| ConfigError::MissingKeywords(name.clone()))?
            .as_array()
            .ok_or_else(|| ConfigError::InvalidKeywords(name.clone()))?
            .iter()
            .map(|keyword| {
                keyword
                    .as_str()
                    .map(str::to_lowercase)
                    .ok_or_else(|| ConfigError::InvalidKeywords(name.clone()))
            })
            .collect::<Result<Vec<String>, ConfigError>>()?;
        entries.push(TagEntry::new(name.clone(), keywords));
    }

    if entries.is_empty() {
        return Err(ConfigError::Empty);
    }
    Ok(TagConfig::new(entries))
}

/// Check a parsed configuration for legal-but-suspicious shapes.
///
/// Returns human-readable findings for the caller to report. A tag with
/// no keywords can never score, and a configuration without the
/// `OTHER` catch-all changes what low-signal messages resolve to; both
/// are usually configuration mistakes rather than intent.
#[must_use]
pub fn validate_tag_config(config: &TagConfig) -> Vec<String> {
    let mut findings = Vec::new();
    for entry in config.entries() {
        if entry.keywords.is_empty() {
            findings.push(format!(
                "tag '{}' has no keywords and will never score",
                entry.name
            ));
        }
    }
    if !config.has_tag(CATCH_ALL_TAG) {
        findings.push(format!(
            "no '{CATCH_ALL_TAG}' catch-all tag configured; low-signal messages fall back to the first two configured tags"
        ));
    }
    findings
}
