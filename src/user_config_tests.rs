use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_empty_toml_produces_defaults() {
    let cfg: UserConfig = toml::from_str("").expect("Should parse empty TOML");
    assert_eq!(cfg, UserConfig::default());
    assert_eq!(cfg.server.addr, None);
    assert!(cfg.server.cors_origins.is_empty());
}

#[test]
fn test_server_section() {
    let toml_str = "[server]\naddr = \"0.0.0.0:8080\"\ncors_origins = [\"https://app.example\"]\n";
    let cfg: UserConfig = toml::from_str(toml_str).expect("Should parse [server] section");
    assert_eq!(cfg.server.addr.as_deref(), Some("0.0.0.0:8080"));
    assert_eq!(cfg.server.cors_origins, vec!["https://app.example"]);
}

#[test]
fn test_unknown_server_key_is_rejected() {
    let toml_str = "[server]\nport = 8080\n";
    assert!(toml::from_str::<UserConfig>(toml_str).is_err());
}

#[test]
fn test_roundtrip_serialization() {
    let cfg = UserConfig {
        server: ServerConfig {
            addr: Some("127.0.0.1:4000".to_string()),
            cors_origins: vec!["http://localhost:5173".to_string()],
        },
    };
    let serialized = toml::to_string(&cfg).expect("Should serialize");
    let deserialized: UserConfig = toml::from_str(&serialized).expect("Should deserialize");
    assert_eq!(cfg, deserialized);
}

#[test]
fn test_load_user_config_absent_file() {
    let dir = tempdir().expect("tempdir");
    let non_existent = dir.path().join("config.toml");

    let cfg = load_user_config_from(&non_existent).expect("absent file is not an error");
    assert_eq!(cfg, UserConfig::default());
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "# issue tracker config\n\n[server]\naddr = \"127.0.0.1:9000\"\n")
        .expect("write config");

    let cfg = load_user_config_from(&config_path).expect("parse config");
    assert_eq!(cfg.server.addr.as_deref(), Some("127.0.0.1:9000"));
}

#[test]
fn test_load_invalid_file_is_error() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[server\n").expect("write config");

    let err = load_user_config_from(&config_path).unwrap_err();
    assert!(matches!(err, UserConfigError::Toml(_)));
}

#[test]
fn test_user_config_path_location() {
    let path = user_config_path();
    assert!(path.ends_with(".issue-tracker/config.toml"));
}
