pub use fabsite_db::config::ConfigError;
use fabsite_db::config::parse_or_default;

/// Default ceiling for a whole request body (100 MiB).
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 100 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. Database
/// settings are resolved separately by [`fabsite_db::DatabaseSettings`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins. `["*"]` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum accepted request body size in bytes.
    pub max_request_bytes: usize,
    /// SHA-256 hex digest of the admin API key. `None` disables the admin API.
    pub admin_key_sha256: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `HOST`                 | `0.0.0.0`   |
    /// | `PORT`                 | `3000`      |
    /// | `CORS_ORIGINS`         | `*`         |
    /// | `REQUEST_TIMEOUT_SECS` | `30`        |
    /// | `MAX_REQUEST_BYTES`    | `104857600` |
    /// | `ADMIN_API_KEY_SHA256` | unset       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or_default(&get, "PORT", 3000u16)?;

        let cors_origins: Vec<String> = get("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or_default(&get, "REQUEST_TIMEOUT_SECS", 30u64)?;
        let max_request_bytes =
            parse_or_default(&get, "MAX_REQUEST_BYTES", DEFAULT_MAX_REQUEST_BYTES)?;

        let admin_key_sha256 = match get("ADMIN_API_KEY_SHA256") {
            Some(digest) => {
                let digest = digest.trim().to_ascii_lowercase();
                if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(ConfigError::InvalidValue {
                        var: "ADMIN_API_KEY_SHA256",
                        value: "<not a SHA-256 hex digest>".into(),
                    });
                }
                Some(digest)
            }
            None => None,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_request_bytes,
            admin_key_sha256,
        })
    }

    /// Whether CORS should allow any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        ServerConfig::from_lookup(|key| map.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn defaults() {
        let c = config(&[]).unwrap();
        assert_eq!(c.host, "0.0.0.0");
        assert_eq!(c.port, 3000);
        assert!(c.allows_any_origin());
        assert_eq!(c.request_timeout_secs, 30);
        assert_eq!(c.max_request_bytes, DEFAULT_MAX_REQUEST_BYTES);
        assert!(c.admin_key_sha256.is_none());
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let c = config(&[("CORS_ORIGINS", "https://a.example, https://b.example ,")]).unwrap();
        assert_eq!(c.cors_origins, vec!["https://a.example", "https://b.example"]);
        assert!(!c.allows_any_origin());
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert_matches!(
            config(&[("PORT", "http")]),
            Err(ConfigError::InvalidValue { var: "PORT", .. })
        );
    }

    #[test]
    fn admin_digest_is_normalized() {
        let digest = fabsite_core::access::hash_admin_key("key").to_uppercase();
        let c = config(&[("ADMIN_API_KEY_SHA256", digest.as_str())]).unwrap();
        assert_eq!(c.admin_key_sha256, Some(digest.to_lowercase()));
    }

    #[test]
    fn plaintext_admin_key_is_rejected() {
        assert_matches!(
            config(&[("ADMIN_API_KEY_SHA256", "hunter2")]),
            Err(ConfigError::InvalidValue {
                var: "ADMIN_API_KEY_SHA256",
                ..
            })
        );
    }
}
