//! Logging tests

use lakeguard_infrastructure::config::LoggingConfig;
use lakeguard_infrastructure::logging::{init_logging, log_config_loaded, parse_log_level};
use std::path::Path;
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert!(parse_log_level("verbose").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_init_logging_twice_fails() {
    let config = LoggingConfig::default();
    // The first call may lose the race to another test; the second never wins.
    let _ = init_logging(&config);
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_log_config_loaded_does_not_panic() {
    log_config_loaded(Path::new("/tmp/lakeguard.toml"), true);
    log_config_loaded(Path::new("/tmp/absent.toml"), false);
}
