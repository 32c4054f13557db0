//! Environment-driven service configuration.
//!
//! Every setting is read from an environment variable, optionally seeded
//! from a `.env` file. Unset or empty variables fall back to per-service
//! defaults.

use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// Per-service fallback values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDefaults {
    /// Name used in logs.
    pub service_name: &'static str,
    /// PEM certificate enabling HTTPS when present.
    pub cert_path: &'static str,
    /// PEM private key matching `cert_path`.
    pub key_path: &'static str,
    /// `PostgreSQL` connection URL.
    pub connection_string: &'static str,
    /// Logical database name.
    pub database_name: &'static str,
}

/// Defaults for the Task Manager API.
pub const TASK_MANAGER_DEFAULTS: ServiceDefaults = ServiceDefaults {
    service_name: "task-manager-api",
    cert_path: "task_manager.crt",
    key_path: "task_manager.key",
    connection_string: "postgres://localhost/tasks",
    database_name: "TasksDb",
};

/// Defaults for the Project Manager API.
pub const PROJECT_MANAGER_DEFAULTS: ServiceDefaults = ServiceDefaults {
    service_name: "project-manager-api",
    cert_path: "project_manager.crt",
    key_path: "project_manager.key",
    connection_string: "postgres://localhost/project_manager",
    database_name: "ProjectManagerDb",
};

const DEFAULT_HTTP_PORT: u16 = 9090;
const DEFAULT_HTTPS_PORT: u16 = 9091;
const DEFAULT_POOL_SIZE: u32 = 8;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A port variable is not a valid TCP port.
    #[error("invalid port in {key}: {value}")]
    InvalidPort {
        /// Variable name.
        key: &'static str,
        /// Rejected value.
        value: String,
    },

    /// The pool size is not a positive integer.
    #[error("invalid pool size in DB_POOL_SIZE: {0}")]
    InvalidPoolSize(String),

    /// The database selector names no known backend.
    #[error("unknown database type: {0}")]
    UnknownDatabaseKind(String),
}

/// Storage backend selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    /// Process-local store, empty on every start.
    InMemory,
    /// `PostgreSQL` through a pooled Diesel connection.
    Postgres,
}

impl FromStr for DatabaseKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "INMEMORY" | "MEMORY" => Ok(Self::InMemory),
            "LOCAL" | "LOCALDB" | "SERVER" | "SQLSERVER" | "POSTGRES" => Ok(Self::Postgres),
            _ => Err(ConfigError::UnknownDatabaseKind(value.to_owned())),
        }
    }
}

/// Storage settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Selected backend.
    pub kind: DatabaseKind,
    /// `PostgreSQL` connection URL.
    pub connection_string: String,
    /// Logical database name.
    pub name: String,
    /// Maximum pooled connections.
    pub pool_size: u32,
}

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Name used in logs.
    pub service_name: &'static str,
    /// Plain HTTP listening port.
    pub http_port: u16,
    /// TLS listening port.
    pub https_port: u16,
    /// PEM certificate path.
    pub cert_path: PathBuf,
    /// PEM private key path.
    pub key_path: PathBuf,
    /// Storage settings.
    pub database: DatabaseConfig,
    /// Telemetry instrumentation key, when configured.
    pub telemetry_key: Option<String>,
}

impl ServiceConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_env(defaults: &ServiceDefaults) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(defaults, |key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_lookup<F>(defaults: &ServiceDefaults, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let http_port = parse_port(&read, "HTTP_PORT", DEFAULT_HTTP_PORT)?;
        let https_port = parse_port(&read, "HTTPS_PORT", DEFAULT_HTTPS_PORT)?;
        let kind = read("DB_TYPE")
            .map(|value| value.parse())
            .transpose()?
            .unwrap_or(DatabaseKind::InMemory);
        let pool_size = read("DB_POOL_SIZE")
            .map(|value| {
                value
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|size| *size > 0)
                    .ok_or(ConfigError::InvalidPoolSize(value))
            })
            .transpose()?
            .unwrap_or(DEFAULT_POOL_SIZE);

        Ok(Self {
            service_name: defaults.service_name,
            http_port,
            https_port,
            cert_path: read("CERT_PATH").map_or_else(|| defaults.cert_path.into(), PathBuf::from),
            key_path: read("KEY_PATH").map_or_else(|| defaults.key_path.into(), PathBuf::from),
            database: DatabaseConfig {
                kind,
                connection_string: read("DB_CONNECTION_STRING")
                    .unwrap_or_else(|| defaults.connection_string.to_owned()),
                name: read("DB_NAME").unwrap_or_else(|| defaults.database_name.to_owned()),
                pool_size,
            },
            telemetry_key: read("TELEMETRY_KEY"),
        })
    }

    /// Returns `true` when both TLS files exist on disk.
    #[must_use]
    pub fn tls_available(&self) -> bool {
        self.cert_path.is_file() && self.key_path.is_file()
    }

    /// Logs the effective configuration without secrets.
    pub fn log_summary(&self) {
        info!(
            service = self.service_name,
            http_port = self.http_port,
            https_port = self.https_port,
            cert_path = %self.cert_path.display(),
            database = ?self.database.kind,
            database_name = %self.database.name,
            telemetry = self.telemetry_key.is_some(),
            "configuration loaded"
        );
    }
}

fn parse_port<F>(read: &F, key: &'static str, default: u16) -> Result<u16, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    read(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort { key, value })
    })
}

#[cfg(test)]
mod tests {
    use super::{
        ConfigError, DatabaseKind, PROJECT_MANAGER_DEFAULTS, ServiceConfig, TASK_MANAGER_DEFAULTS,
    };
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = ServiceConfig::from_lookup(&TASK_MANAGER_DEFAULTS, lookup(&[]))
            .expect("defaults should be valid");

        assert_eq!(config.http_port, 9090);
        assert_eq!(config.https_port, 9091);
        assert_eq!(config.database.kind, DatabaseKind::InMemory);
        assert_eq!(config.database.name, "TasksDb");
        assert_eq!(config.database.pool_size, 8);
        assert_eq!(config.telemetry_key, None);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = ServiceConfig::from_lookup(
            &PROJECT_MANAGER_DEFAULTS,
            lookup(&[
                ("HTTP_PORT", "8080"),
                ("DB_TYPE", "server"),
                ("DB_CONNECTION_STRING", "postgres://db/pm"),
                ("TELEMETRY_KEY", "abc"),
                ("CERT_PATH", "/etc/tls/pm.crt"),
            ]),
        )
        .expect("overrides should be valid");

        assert_eq!(config.http_port, 8080);
        assert_eq!(config.database.kind, DatabaseKind::Postgres);
        assert_eq!(config.database.connection_string, "postgres://db/pm");
        assert_eq!(config.database.name, "ProjectManagerDb");
        assert_eq!(config.telemetry_key.as_deref(), Some("abc"));
        assert_eq!(config.cert_path.to_str(), Some("/etc/tls/pm.crt"));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config =
            ServiceConfig::from_lookup(&TASK_MANAGER_DEFAULTS, lookup(&[("HTTP_PORT", "  ")]))
                .expect("blank port should fall back");
        assert_eq!(config.http_port, 9090);
    }

    #[rstest]
    #[case("INMEMORY", DatabaseKind::InMemory)]
    #[case("localdb", DatabaseKind::Postgres)]
    #[case("SqlServer", DatabaseKind::Postgres)]
    #[case("postgres", DatabaseKind::Postgres)]
    fn database_selector_accepts_known_backends(#[case] raw: &str, #[case] expected: DatabaseKind) {
        assert_eq!(raw.parse::<DatabaseKind>(), Ok(expected));
    }

    #[test]
    fn invalid_values_are_reported() {
        let port = ServiceConfig::from_lookup(&TASK_MANAGER_DEFAULTS, lookup(&[("HTTPS_PORT", "x")]));
        assert_eq!(
            port,
            Err(ConfigError::InvalidPort {
                key: "HTTPS_PORT",
                value: "x".to_owned()
            })
        );

        let kind = ServiceConfig::from_lookup(&TASK_MANAGER_DEFAULTS, lookup(&[("DB_TYPE", "oracle")]));
        assert_eq!(
            kind,
            Err(ConfigError::UnknownDatabaseKind("oracle".to_owned()))
        );

        let pool = ServiceConfig::from_lookup(&TASK_MANAGER_DEFAULTS, lookup(&[("DB_POOL_SIZE", "0")]));
        assert_eq!(pool, Err(ConfigError::InvalidPoolSize("0".to_owned())));
    }

    #[test]
    fn tls_requires_both_files() {
        let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        let missing = concat!(env!("CARGO_MANIFEST_DIR"), "/no-such.key");

        let plain = ServiceConfig::from_lookup(
            &TASK_MANAGER_DEFAULTS,
            lookup(&[("CERT_PATH", manifest), ("KEY_PATH", missing)]),
        )
        .expect("paths should be accepted");
        assert!(!plain.tls_available());

        let secured = ServiceConfig::from_lookup(
            &TASK_MANAGER_DEFAULTS,
            lookup(&[("CERT_PATH", manifest), ("KEY_PATH", manifest)]),
        )
        .expect("paths should be accepted");
        assert!(secured.tls_available());
    }
}
