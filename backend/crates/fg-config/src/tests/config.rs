use crate::tests::{EnvGuard, VALID_SECRET, setup_config_dir, write_config};
use crate::{Config, LogLevel};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.server.host.as_str(), eq(crate::DEFAULT_HOST));
    assert_that!(config.database.path.as_str(), eq("facegate.db"));
    assert_that!(config.matcher.threshold, eq(0.4));
    assert_that!(config.rate_limit.max_requests, eq(30));
    assert_that!(config.auth.jwt_secret, none());
    assert_that!(config.logging.level, eq(LogLevel(LevelFilter::Info)));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join("facegate");
    let _guard = EnvGuard::set("FG_CONFIG_DIR", nested.to_str().unwrap());

    // When
    Config::load().unwrap();

    // Then
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        &format!(
            r#"
              [server]
              port = 9000

              [auth]
              jwt_secret = "{}"

              [matcher]
              threshold = 0.55

              [logging]
              level = "debug"
              audit_file = "audit.log"
          "#,
            VALID_SECRET
        ),
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.matcher.threshold, eq(0.55));
    assert_that!(config.logging.level, eq(LogLevel(LevelFilter::Debug)));
    assert_eq!(config.auth.jwt_secret.as_deref(), Some(VALID_SECRET));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[server]\nport = 9000");
    let _port_guard = EnvGuard::set("FG_SERVER_PORT", "8888");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(8888));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _host = EnvGuard::set("FG_SERVER_HOST", "0.0.0.0");
    let _secret = EnvGuard::set("FG_AUTH_JWT_SECRET", VALID_SECRET);
    let _threshold = EnvGuard::set("FG_MATCHER_THRESHOLD", "0.35");
    let _max = EnvGuard::set("FG_RATE_LIMIT_MAX_REQUESTS", "5");
    let _window = EnvGuard::set("FG_RATE_LIMIT_WINDOW_SECS", "10");
    let _colored = EnvGuard::set("FG_LOG_COLORED", "false");
    let _audit = EnvGuard::set("FG_LOG_AUDIT_FILE", "audit.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.host.as_str(), eq("0.0.0.0"));
    assert_that!(config.matcher.threshold, eq(0.35));
    assert_that!(config.rate_limit.max_requests, eq(5));
    assert_that!(config.rate_limit.window_secs, eq(10));
    assert_that!(config.logging.colored, eq(false));
    assert_eq!(config.logging.audit_file.as_deref(), Some("audit.log"));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_unparseable_env_value_when_load_then_ignored() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("FG_SERVER_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
}

#[test]
#[serial]
fn given_invalid_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[server\nport = ");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_unknown_log_level_when_load_then_defaults_to_info() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _level = EnvGuard::set("FG_LOG_LEVEL", "chatty");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.level, eq(LogLevel(LevelFilter::Info)));
}

#[test]
#[serial]
fn given_log_files_when_resolving_paths_then_under_log_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("FG_LOG_FILE", "facegate.log");

    // When
    let config = Config::load().unwrap();

    // Then
    let expected = temp.path().join("log").join("facegate.log");
    assert_eq!(config.log_file_path().unwrap(), Some(expected));
    assert_eq!(config.audit_log_path().unwrap(), None);
    assert_eq!(
        config.database_path().unwrap(),
        temp.path().join("facegate.db")
    );
}

#[test]
fn given_config_when_bind_addr_then_host_and_port() {
    let mut config = Config::default();
    config.server.host = "0.0.0.0".to_string();
    config.server.port = 9100;

    assert_eq!(config.bind_addr(), "0.0.0.0:9100");
}
