//! Database connection settings.
//!
//! One resolution function with a fixed precedence:
//!
//! 1. Explicit host variables, when `PGHOST` is set
//! 2. `DATABASE_URL`
//! 3. A local default with no password
//!
//! | Env Var                   | Default     |
//! |---------------------------|-------------|
//! | `PGHOST`                  | --          |
//! | `PGPORT`                  | `5432`      |
//! | `PGUSER`                  | `postgres`  |
//! | `PGPASSWORD`              | --          |
//! | `PGPASSWORD_FILE`         | --          |
//! | `PGDATABASE`              | `fabsite`   |
//! | `DATABASE_URL`            | --          |
//! | `DB_MAX_CONNECTIONS`      | `10`        |
//! | `DB_ACQUIRE_TIMEOUT_SECS` | `30`        |
//!
//! Passwords come only from `PGPASSWORD` or a mounted secret file named by
//! `PGPASSWORD_FILE`. Empty variables count as unset.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_USER: &str = "postgres";
pub const DEFAULT_DATABASE: &str = "fabsite";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}'")]
    InvalidValue { var: &'static str, value: String },

    #[error("failed to read secret file {path}: {source}")]
    SecretFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where connections go.
#[derive(Clone, PartialEq, Eq)]
pub enum ConnectionTarget {
    Params {
        host: String,
        port: u16,
        user: String,
        password: Option<String>,
        database: String,
    },
    Url(String),
}

impl std::fmt::Debug for ConnectionTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Params {
                host,
                port,
                user,
                password,
                database,
            } => f
                .debug_struct("Params")
                .field("host", host)
                .field("port", port)
                .field("user", user)
                .field("password", &password.as_ref().map(|_| "<redacted>"))
                .field("database", database)
                .finish(),
            Self::Url(_) => f.write_str("Url(<redacted>)"),
        }
    }
}

/// Resolved database settings for [`crate::create_pool`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub target: ConnectionTarget,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseSettings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve settings from an arbitrary variable lookup.
    pub fn resolve<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let target = if let Some(host) = get("PGHOST") {
            ConnectionTarget::Params {
                host,
                port: parse_or_default(&get, "PGPORT", DEFAULT_PORT)?,
                user: get("PGUSER").unwrap_or_else(|| DEFAULT_USER.to_string()),
                password: resolve_password(&get)?,
                database: get("PGDATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            }
        } else if let Some(url) = get("DATABASE_URL") {
            ConnectionTarget::Url(url)
        } else {
            ConnectionTarget::Params {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                user: DEFAULT_USER.to_string(),
                password: None,
                database: DEFAULT_DATABASE.to_string(),
            }
        };

        let max_connections =
            parse_or_default(&get, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }

        let acquire_timeout_secs =
            parse_or_default(&get, "DB_ACQUIRE_TIMEOUT_SECS", DEFAULT_ACQUIRE_TIMEOUT_SECS)?;

        Ok(Self {
            target,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }

    /// Build sqlx connect options for the resolved target.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.target {
            ConnectionTarget::Params {
                host,
                port,
                user,
                password,
                database,
            } => {
                let mut opts = PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .database(database);
                if let Some(password) = password {
                    opts = opts.password(password);
                }
                Ok(opts)
            }
            ConnectionTarget::Url(url) => PgConnectOptions::from_str(url),
        }
    }

    /// Short description of the target that is safe to log.
    pub fn describe(&self) -> String {
        match &self.target {
            ConnectionTarget::Params {
                host,
                port,
                database,
                ..
            } => format!("{host}:{port}/{database}"),
            ConnectionTarget::Url(_) => "DATABASE_URL".to_string(),
        }
    }
}

fn resolve_password<F>(get: &F) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(password) = get("PGPASSWORD") {
        return Ok(Some(password));
    }
    match get("PGPASSWORD_FILE") {
        Some(path) => {
            let path = PathBuf::from(path);
            let contents = std::fs::read_to_string(&path)
                .map_err(|source| ConfigError::SecretFile { path, source })?;
            Ok(Some(contents.trim_end_matches(['\r', '\n']).to_string()))
        }
        None => Ok(None),
    }
}

/// Parse `var` with `FromStr`, falling back to `default` when unset.
pub fn parse_or_default<F, T>(get: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match get(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn host_vars_take_precedence_over_url() {
        let settings = DatabaseSettings::resolve(lookup(&[
            ("PGHOST", "db.internal"),
            ("PGPORT", "6543"),
            ("PGUSER", "site"),
            ("PGPASSWORD", "pw"),
            ("PGDATABASE", "site_db"),
            ("DATABASE_URL", "postgres://ignored@elsewhere/x"),
        ]))
        .unwrap();

        assert_eq!(
            settings.target,
            ConnectionTarget::Params {
                host: "db.internal".into(),
                port: 6543,
                user: "site".into(),
                password: Some("pw".into()),
                database: "site_db".into(),
            }
        );
    }

    #[test]
    fn url_used_when_no_host() {
        let settings =
            DatabaseSettings::resolve(lookup(&[("DATABASE_URL", "postgres://u@h/d")])).unwrap();
        assert_eq!(settings.target, ConnectionTarget::Url("postgres://u@h/d".into()));
        assert_eq!(settings.describe(), "DATABASE_URL");
    }

    #[test]
    fn local_default_has_no_password() {
        let settings = DatabaseSettings::resolve(lookup(&[])).unwrap();
        match settings.target {
            ConnectionTarget::Params { host, password, .. } => {
                assert_eq!(host, DEFAULT_HOST);
                assert!(password.is_none());
            }
            other => panic!("expected params, got {other:?}"),
        }
        assert_eq!(settings.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(
            settings.acquire_timeout,
            Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS)
        );
    }

    #[test]
    fn empty_host_falls_through() {
        let settings = DatabaseSettings::resolve(lookup(&[
            ("PGHOST", ""),
            ("DATABASE_URL", "postgres://u@h/d"),
        ]))
        .unwrap();
        assert!(matches!(settings.target, ConnectionTarget::Url(_)));
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err =
            DatabaseSettings::resolve(lookup(&[("PGHOST", "h"), ("PGPORT", "abc")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "PGPORT", .. }));
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let err = DatabaseSettings::resolve(lookup(&[("DB_MAX_CONNECTIONS", "0")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                var: "DB_MAX_CONNECTIONS",
                ..
            }
        ));
    }

    #[test]
    fn password_read_from_secret_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "from-file").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let settings =
            DatabaseSettings::resolve(lookup(&[("PGHOST", "h"), ("PGPASSWORD_FILE", path.as_str())]))
                .unwrap();
        match settings.target {
            ConnectionTarget::Params { password, .. } => {
                assert_eq!(password.as_deref(), Some("from-file"));
            }
            other => panic!("expected params, got {other:?}"),
        }
    }

    #[test]
    fn missing_secret_file_is_an_error() {
        let err = DatabaseSettings::resolve(lookup(&[
            ("PGHOST", "h"),
            ("PGPASSWORD_FILE", "/definitely/not/here"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::SecretFile { .. }));
    }

    #[test]
    fn debug_output_redacts_password() {
        let settings =
            DatabaseSettings::resolve(lookup(&[("PGHOST", "h"), ("PGPASSWORD", "hunter2")]))
                .unwrap();
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
