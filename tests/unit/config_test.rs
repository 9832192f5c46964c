//! Configuration loading from files and `LIGHTER_COMPLIANCE__*` variables

use std::env;

use lighter_compliance::config::*;
use serial_test::serial;

mod utils {
    /// Clean up environment variables with the service prefix
    pub fn clean_env_vars() {
        let keys: Vec<String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("LIGHTER_COMPLIANCE"))
            .map(|(k, _)| k)
            .collect();

        for key in keys {
            unsafe { std::env::remove_var(&key) };
        }

        unsafe { std::env::remove_var("APP_ENV") };
    }
}

#[test]
#[serial]
fn test_load_default_config_success() {
    utils::clean_env_vars();

    let config = load();

    assert!(config.is_ok(), "Failed to load default configuration: {:?}", config.err());

    let config = config.unwrap();

    assert_eq!(config.app.name, "lighter-compliance");
    assert_eq!(config.app.environment, "development");
    assert_eq!(config.server.port, 8080);
    assert!(config.cache.enabled);
    assert_eq!(config.cache.ttl, 300);
    assert!(config.metrics.enabled);
    assert_eq!(config.observability.log_format, LogFormat::Pretty);
    assert!(config.auth.appengine.allowed_app_ids.is_empty());
}

#[test]
#[serial]
fn test_env_var_overrides_scalar() {
    utils::clean_env_vars();
    unsafe { env::set_var("LIGHTER_COMPLIANCE__SERVER__PORT", "9191") };

    let config = load();
    utils::clean_env_vars();

    assert_eq!(config.unwrap().server.port, 9191);
}

#[test]
#[serial]
fn test_env_var_sets_allowed_app_ids() {
    utils::clean_env_vars();
    unsafe {
        env::set_var(
            "LIGHTER_COMPLIANCE__AUTH__APPENGINE__ALLOWED_APP_IDS",
            "allowed,other-app",
        )
    };

    let config = load();
    utils::clean_env_vars();

    let appengine = config.unwrap().auth.appengine;
    assert_eq!(appengine.allowed_app_ids, vec!["allowed", "other-app"]);
    assert!(appengine.is_allowed("allowed"));
    assert!(!appengine.is_allowed("disallowed"));
}

#[test]
#[serial]
fn test_env_var_selects_json_logging() {
    utils::clean_env_vars();
    unsafe { env::set_var("LIGHTER_COMPLIANCE__OBSERVABILITY__LOG_FORMAT", "json") };

    let config = load();
    utils::clean_env_vars();

    assert_eq!(config.unwrap().observability.log_format, LogFormat::Json);
}

#[test]
#[serial]
fn test_invalid_value_fails_validation() {
    utils::clean_env_vars();
    unsafe { env::set_var("LIGHTER_COMPLIANCE__SERVER__PORT", "0") };

    let config = load();
    utils::clean_env_vars();

    assert!(matches!(config, Err(ConfigError::ValidationError(_))));
}

#[test]
#[serial]
fn test_unparsable_value_fails_loading() {
    utils::clean_env_vars();
    unsafe { env::set_var("LIGHTER_COMPLIANCE__SERVER__PORT", "not-a-port") };

    let config = load();
    utils::clean_env_vars();

    assert!(matches!(config, Err(ConfigError::Load(_))));
}

#[test]
fn test_defaults_without_files_are_valid() {
    let config = AppConfig::with_defaults();

    assert!(config.validate().is_ok());
    assert_eq!(config.database.url, DatabaseConfig::default().url);
}
