//! Tag configuration: the ordered tag-to-keywords mapping and its JSON loader.

mod io;
mod types;

pub use io::{load_tag_config, parse_tag_config, validate_tag_config};
pub use types::{TagConfig, TagEntry, CATCH_ALL_TAG, UNKNOWN_TAG};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or parsing the tag configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Tag configuration not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in tag configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Tag configuration must contain a 'tags' key")]
    MissingTagsKey,

    #[error("'tags' must be an object keyed by tag name")]
    TagsNotObject,

    #[error("Tag '{0}' is missing its 'keywords' field")]
    MissingKeywords(String),

    #[error("Keywords for tag '{0}' must be an array of strings")]
    InvalidKeywords(String),

    #[error("Tag names must be non-empty")]
    EmptyTagName,

    #[error("Tag configuration must contain at least one tag")]
    Empty,
}
