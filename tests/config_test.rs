#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{create_test_dir, write_config_file, SAMPLE_CONFIG_JSON};
use tagtriage::config::{
    load_tag_config, parse_tag_config, validate_tag_config, ConfigError,
};

#[tokio::test]
async fn test_load_sample_config_from_disk() {
    let dir = create_test_dir();
    let path = write_config_file(dir.path(), SAMPLE_CONFIG_JSON);

    let config = load_tag_config(&path).await.expect("Should load config");
    assert_eq!(config.len(), 4);
    let names: Vec<&str> = config.tag_names().collect();
    assert_eq!(names, vec!["SALES", "SUPPORT", "BILLING", "OTHER"]);
}

#[tokio::test]
async fn test_load_missing_file_reports_not_found() {
    let dir = create_test_dir();
    let path = dir.path().join("no_such_config.json");

    let err = load_tag_config(&path)
        .await
        .expect_err("Should fail for missing file");
    assert!(matches!(err, ConfigError::NotFound(_)));
    assert!(err.to_string().contains("no_such_config.json"));
}

#[tokio::test]
async fn test_load_rejects_malformed_json() {
    let dir = create_test_dir();
    let path = write_config_file(dir.path(), "{\"tags\": ");

    let err = load_tag_config(&path)
        .await
        .expect_err("Should fail for malformed JSON");
    assert!(matches!(err, ConfigError::Json(_)));
}

#[tokio::test]
async fn test_keywords_lowercased_on_load() {
    let dir = create_test_dir();
    let path = write_config_file(
        dir.path(),
        r#"{"tags": {"SALES": {"keywords": ["BUY", "Price Match"]}}}"#,
    );

    let config = load_tag_config(&path).await.expect("Should load config");
    let entry = config.entries().first().expect("Should have an entry");
    assert_eq!(entry.keywords, vec!["buy", "price match"]);
}

#[test]
fn test_missing_keywords_error_names_the_tag() {
    let err = parse_tag_config(r#"{"tags": {"SUPPORT": {}}}"#)
        .expect_err("Should reject tag without keywords");
    assert!(err.to_string().contains("SUPPORT"));
}

#[test]
fn test_validate_reports_all_findings() {
    let config = parse_tag_config(
        r#"{"tags": {
            "SALES": {"keywords": []},
            "SUPPORT": {"keywords": ["help"]}
        }}"#,
    )
    .expect("Should parse");

    let findings = validate_tag_config(&config);
    assert_eq!(findings.len(), 2);
    assert!(findings.iter().any(|finding| finding.contains("SALES")));
    assert!(findings.iter().any(|finding| finding.contains("OTHER")));
}

#[test]
fn test_shipped_config_is_valid() {
    let shipped = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tag_config.json"));
    let config = parse_tag_config(shipped).expect("Shipped config should parse");
    assert_eq!(config.len(), 4);
    assert!(config.has_tag("OTHER"));
    assert!(validate_tag_config(&config).is_empty());
}
