use crate::config::{load_config_from, save_config_to, Config};

#[test]
fn test_defaults_when_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("nope.json"));

    assert!(config.default_repo.is_none());
    assert_eq!(config.color, "auto");
    assert!(config.trust_tooltips);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = Config {
        default_repo: Some("/work/repo".to_string()),
        color: "never".to_string(),
        trust_tooltips: false,
    };
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path);
    assert_eq!(loaded.default_repo.as_deref(), Some("/work/repo"));
    assert_eq!(loaded.color, "never");
    assert!(!loaded.trust_tooltips);
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "default_repo": "/work/repo" }"#).unwrap();

    let loaded = load_config_from(&path);
    assert_eq!(loaded.default_repo.as_deref(), Some("/work/repo"));
    assert_eq!(loaded.color, "auto");
    assert!(loaded.trust_tooltips);
}

#[test]
fn test_garbage_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let loaded = load_config_from(&path);
    assert!(loaded.default_repo.is_none());
}
