//! Configuration loading from process environment variables.

mod test_helpers;

use test_helpers::EnvVarGuard;
use workboard::config::{ConfigError, DatabaseKind, PROJECT_MANAGER_DEFAULTS, ServiceConfig};

const KEYS: [&str; 9] = [
    "HTTP_PORT",
    "HTTPS_PORT",
    "CERT_PATH",
    "KEY_PATH",
    "DB_TYPE",
    "DB_CONNECTION_STRING",
    "DB_NAME",
    "DB_POOL_SIZE",
    "TELEMETRY_KEY",
];

fn cleared_with(overrides: &[(&'static str, Option<&'static str>)]) -> EnvVarGuard {
    let mut changes: Vec<(&str, Option<&str>)> = KEYS.iter().map(|key| (*key, None)).collect();
    changes.extend_from_slice(overrides);
    EnvVarGuard::set_many(&changes)
}

#[test]
fn environment_overrides_defaults() -> eyre::Result<()> {
    let _guard = cleared_with(&[
        ("HTTP_PORT", Some("8080")),
        ("DB_TYPE", Some("SQLSERVER")),
        ("DB_NAME", Some("Projects")),
    ]);

    let config = ServiceConfig::from_env(&PROJECT_MANAGER_DEFAULTS)?;

    assert_eq!(config.http_port, 8080);
    assert_eq!(config.https_port, 9091);
    assert_eq!(config.database.kind, DatabaseKind::Postgres);
    assert_eq!(config.database.name, "Projects");
    Ok(())
}

#[test]
fn invalid_port_is_reported() {
    let _guard = cleared_with(&[("HTTPS_PORT", Some("secure"))]);

    let result = ServiceConfig::from_env(&PROJECT_MANAGER_DEFAULTS);

    assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
}
