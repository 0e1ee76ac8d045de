//! Common test utilities

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use tagtriage::config::TagConfig;

/// Standard four-tag routing configuration used across the suites.
#[allow(dead_code)] // Test utility for integration tests
pub const SAMPLE_CONFIG_JSON: &str = r#"{
  "tags": {
    "SALES": {"keywords": ["buy", "purchase", "price", "pricing", "demo", "upgrade"]},
    "SUPPORT": {"keywords": ["help", "issue", "problem", "error", "bug", "fix", "broken"]},
    "BILLING": {"keywords": ["invoice", "payment", "charge", "charged", "refund", "bill"]},
    "OTHER": {"keywords": ["question", "inquiry", "general"]}
  }
}"#;

/// Create a temporary directory for testing
#[allow(dead_code)]
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Parse the standard configuration.
#[allow(dead_code)]
pub fn sample_config() -> TagConfig {
    tagtriage::config::parse_tag_config(SAMPLE_CONFIG_JSON).expect("Sample config should parse")
}

/// Write `content` as a tag config file inside `dir`, returning its path.
#[allow(dead_code)]
pub fn write_config_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("tag_config.json");
    std::fs::write(&path, content).expect("Failed to write config file");
    path
}
