use std::path::PathBuf;

/// Name of the per-user tagtriage folder
pub const APP_DIR_NAME: &str = ".tagtriage";

/// Default tag configuration filename, resolved against the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tag_config.json";

/// Width of the horizontal rules framing terminal output
pub const RULE_WIDTH: usize = 60;

/// Get the per-user tagtriage directory (`~/.tagtriage`)
#[must_use]
pub fn app_home() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_DIR_NAME))
}

/// Get the default log directory (`~/.tagtriage/logs`)
#[must_use]
pub fn default_log_dir() -> PathBuf {
    app_home().unwrap_or_else(|| PathBuf::from(".")).join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_home_under_home_dir() {
        let home = app_home().expect("home directory should resolve in tests");
        assert!(home.ends_with(APP_DIR_NAME));
    }

    #[test]
    fn test_default_log_dir_ends_with_logs() {
        let dir = default_log_dir();
        assert!(dir.ends_with("logs"));
    }

    #[test]
    fn test_default_log_dir_contains_app_folder() {
        let path_str = default_log_dir().to_string_lossy().to_string();
        assert!(path_str.contains(APP_DIR_NAME));
    }

    #[test]
    fn test_default_config_file_constant() {
        assert_eq!(DEFAULT_CONFIG_FILE, "tag_config.json");
    }
}
