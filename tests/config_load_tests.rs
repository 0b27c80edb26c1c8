#![allow(clippy::unwrap_used, clippy::expect_used)]

use fileroute::config::load_config;
use std::path::PathBuf;

const YAML_CONFIG: &str = r#"avatar:
  name: avatar_upload
  type: s3
  api_enabled: true
document:
  enabled: false
badge:
"#;

const JSON_CONFIG: &str = r#"{
  "avatar": { "name": "avatar_upload", "type": "s3", "api_enabled": true },
  "document": { "enabled": false },
  "badge": null
}"#;

const TOML_CONFIG: &str = r#"[avatar]
name = "avatar_upload"
type = "s3"
api_enabled = true

[document]
enabled = false

[badge]
"#;

fn write_temp_config(name: &str, contents: &str, dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_config_yaml_json_and_toml_agree() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = load_config(&write_temp_config("routes.yaml", YAML_CONFIG, &dir)).unwrap();
    let json = load_config(&write_temp_config("routes.json", JSON_CONFIG, &dir)).unwrap();
    let toml = load_config(&write_temp_config("routes.toml", TOML_CONFIG, &dir)).unwrap();

    assert_eq!(yaml, json);
    assert_eq!(yaml, toml);

    assert_eq!(yaml.len(), 3);
    let keys: Vec<&str> = yaml.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["avatar", "document", "badge"]);

    let avatar = yaml.get("avatar").unwrap();
    assert_eq!(avatar.name.as_deref(), Some("avatar_upload"));
    assert_eq!(avatar.spec_name.as_deref(), Some("s3"));
    assert_eq!(avatar.api_enabled, Some(true));
    assert_eq!(avatar.enabled, None);

    assert_eq!(yaml.get("document").unwrap().enabled, Some(false));
    assert_eq!(yaml.get("badge").unwrap().name, None);
}

#[test]
fn test_load_config_missing_file_names_the_path() {
    let err = load_config(&PathBuf::from("/nonexistent/routes.yaml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/routes.yaml"));
}

#[test]
fn test_load_config_rejects_unknown_entry_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config("routes.yaml", "avatar:\n  upload_dir: /tmp\n", &dir);
    let err = load_config(&path).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("routes.yaml"), "unexpected error: {chain}");
}

#[test]
fn test_load_config_rejects_non_mapping_top_level() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config("routes.json", "[1, 2, 3]", &dir);
    assert!(load_config(&path).is_err());
}
