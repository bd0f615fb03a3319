//! Tests for configuration module

use huker_console::config::{Config, CONFIG};

#[test]
fn test_config_defaults() {
    let config = Config::from_env();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8002);
    assert_eq!(config.dashboard_url, "http://127.0.0.1:8001");
    assert!(config.inventory_path.is_none());
    assert!(!config.log_json);
}

#[test]
fn test_endpoint_base_appends_api() {
    let config = Config::from_env();
    assert_eq!(config.endpoint_base(), format!("{}/api", config.dashboard_url));
}

#[test]
fn test_version_from_cargo() {
    let config = Config::from_env();
    assert!(!config.version.is_empty());
    assert!(config.version.contains('.'));
}

#[test]
fn test_lazy_static_config() {
    assert!(!CONFIG.host.is_empty());
    assert!(!CONFIG.log_level.is_empty());
}
