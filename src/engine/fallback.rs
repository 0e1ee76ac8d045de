use crate::config::{TagConfig, CATCH_ALL_TAG, UNKNOWN_TAG};

use super::types::TagResult;

/// Resolve the default pair used when a message carries no usable signal.
///
/// Preference order: the `OTHER` catch-all doubled if configured, then the
/// first two configured tags, then the `UNKNOWN` sentinel doubled when the
/// configuration has fewer than two tags. The sentinel is the only case
/// where a returned tag is not part of the configuration.
#[must_use]
pub fn default_tags(config: &TagConfig) -> TagResult {
    if config.has_tag(CATCH_ALL_TAG) {
        return TagResult::new(CATCH_ALL_TAG, CATCH_ALL_TAG);
    }
    let mut names = config.tag_names();
    match (names.next(), names.next()) {
        (Some(first), Some(second)) => TagResult::new(first, second),
        _ => TagResult::new(UNKNOWN_TAG, UNKNOWN_TAG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TagEntry;

    fn config_of(names: &[&str]) -> TagConfig {
        TagConfig::new(
            names
                .iter()
                .map(|name| TagEntry::new(*name, ["x"]))
                .collect(),
        )
    }

    #[test]
    fn test_catch_all_preferred_when_configured() {
        let result = default_tags(&config_of(&["SALES", "SUPPORT", "OTHER"]));
        assert_eq!(result.primary, "OTHER");
        assert_eq!(result.secondary, "OTHER");
    }

    #[test]
    fn test_first_two_tags_without_catch_all() {
        let result = default_tags(&config_of(&["SALES", "SUPPORT", "BILLING"]));
        assert_eq!(result.primary, "SALES");
        assert_eq!(result.secondary, "SUPPORT");
    }

    #[test]
    fn test_single_tag_yields_unknown_sentinel() {
        let result = default_tags(&config_of(&["SALES"]));
        assert_eq!(result.primary, "UNKNOWN");
        assert_eq!(result.secondary, "UNKNOWN");
    }

    #[test]
    fn test_empty_config_yields_unknown_sentinel() {
        let result = default_tags(&TagConfig::default());
        assert_eq!(result.primary, "UNKNOWN");
        assert_eq!(result.secondary, "UNKNOWN");
    }

    #[test]
    fn test_lone_catch_all_still_doubles() {
        let result = default_tags(&config_of(&["OTHER"]));
        assert_eq!(result.primary, "OTHER");
        assert_eq!(result.secondary, "OTHER");
    }
}
