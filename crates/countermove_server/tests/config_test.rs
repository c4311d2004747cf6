//! Tests for server configuration loading.

use countermove_server::ServerConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = ServerConfig::default();
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(*config.port(), 8080);
    assert_eq!(*config.seed(), None);
    assert_eq!(ServerConfig::load(None).unwrap(), config);
}

#[test]
fn test_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("countermove.toml");
    fs::write(&path, "host = \"0.0.0.0\"\nport = 9000\nseed = 7\n").expect("Failed to write TOML");

    let config = ServerConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.host(), "0.0.0.0");
    assert_eq!(*config.port(), 9000);
    assert_eq!(*config.seed(), Some(7));
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("countermove.toml");
    fs::write(&path, "port = 3000\n").expect("Failed to write TOML");

    let config = ServerConfig::load(Some(path.as_path())).expect("Load failed");
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(*config.port(), 3000);
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_invalid_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "port = \"not a number\"").expect("Write failed");

    let err = ServerConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{err}");
    assert!(ServerConfig::from_file(dir.path().join("missing.toml")).is_err());
}

#[test]
fn test_overrides() {
    let config = ServerConfig::default().with_overrides(None, Some(1234), Some(5));
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(*config.port(), 1234);
    assert_eq!(*config.seed(), Some(5));

    let kept = config.clone().with_overrides(Some("::1".to_string()), None, None);
    assert_eq!(kept.host(), "::1");
    assert_eq!(*kept.seed(), Some(5));
}
