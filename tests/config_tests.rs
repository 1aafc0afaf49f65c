use betfair_rpc::config::Config;
use betfair_rpc::{Endpoints, SessionState};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

const MINIMAL: &str = r#"
[betfair]
username = "test_user"
password = "test_pass"
api_key = "test_key"
"#;

#[test]
fn test_config_from_path_with_valid_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, MINIMAL).unwrap();

    let config = Config::from_path(&config_path).unwrap();

    assert_eq!(config.betfair.username, "test_user");
    assert_eq!(config.betfair.password, "test_pass");
    assert_eq!(config.betfair.api_key, "test_key");
    assert_eq!(config.betfair.locale, "en");
    assert!(!config.betfair.keep_alive);
    assert_eq!(config.keep_alive_interval(), Duration::from_secs(3600));
    assert_eq!(config.endpoints, Endpoints::default());
}

#[test]
fn test_config_from_path_with_missing_file() {
    let dir = tempdir().unwrap();
    let result = Config::from_path(dir.path().join("config.toml"));
    assert!(result.is_err());
}

#[test]
fn test_config_with_invalid_toml() {
    let result = Config::from_toml_str(
        r#"
[betfair
username = "test_user"
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_config_with_missing_fields() {
    let result = Config::from_toml_str(
        r#"
[betfair]
username = "test_user"
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_config_rejects_zero_keep_alive_interval() {
    let result = Config::from_toml_str(
        r#"
[betfair]
username = "test_user"
password = "test_pass"
api_key = "test_key"
keep_alive = true
keep_alive_interval_secs = 0
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_config_with_all_options() {
    let config = Config::from_toml_str(
        r#"
[betfair]
username = "test_user"
password = "test_pass"
api_key = "test_key"
locale = "es"
keep_alive = true
keep_alive_interval_secs = 1200

[endpoints]
identity_host = "identitysso.betfair.es"
api_host = "api.betfair.es"
"#,
    )
    .unwrap();

    assert_eq!(config.betfair.locale, "es");
    assert!(config.betfair.keep_alive);
    assert_eq!(config.keep_alive_interval(), Duration::from_secs(1200));
    assert_eq!(config.endpoints.identity_host, "identitysso.betfair.es");
    assert_eq!(config.endpoints.api_host, "api.betfair.es");
    assert_eq!(config.endpoints.scheme, "https");
    assert_eq!(config.endpoints.login_path, "/api/login");
}

#[test]
fn test_environment_overrides() {
    let mut config = Config::from_toml_str(MINIMAL).unwrap();
    let env: HashMap<&str, &str> = [
        ("BETFAIR_USERNAME", "env_user"),
        ("BETFAIR_API_KEY", "env_key"),
        ("BETFAIR_PASSWORD", ""),
    ]
    .into_iter()
    .collect();

    config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.betfair.username, "env_user");
    assert_eq!(config.betfair.api_key, "env_key");
    assert_eq!(config.betfair.password, "test_pass");
    assert_eq!(config.betfair.locale, "en");
}

#[test]
fn test_session_from_config() {
    let config = Config::from_toml_str(
        r#"
[betfair]
username = "test_user"
password = "test_pass"
api_key = "test_key"
locale = "pt"
keep_alive = true
keep_alive_interval_secs = 900
"#,
    )
    .unwrap();

    let session = config.session();

    assert_eq!(session.application_key(), "test_key");
    assert_eq!(session.username(), "test_user");
    assert_eq!(session.password(), "test_pass");
    assert_eq!(session.locale(), "pt");
    assert!(session.keep_alive_enabled());
    assert_eq!(session.keep_alive_interval(), Duration::from_secs(900));
    assert_eq!(session.state(), SessionState::Unauthenticated);
}

#[test]
fn test_debug_output_hides_password() {
    let config = Config::from_toml_str(MINIMAL).unwrap();
    let printed = format!("{:?}", config);
    assert!(printed.contains("test_user"));
    assert!(!printed.contains("test_pass"));
}
