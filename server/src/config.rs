//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` (if present) before calling [`ServerConfig::from_env`].
//! Parsing itself goes through a lookup function so it can be tested without
//! touching the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Origin of the CRM REST backend, without trailing slash.
    pub backend_url: String,
    pub proxy_timeout_secs: u64,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CRM_BACKEND_URL`: default `http://localhost:8000`
    /// - `CRM_PROXY_TIMEOUT_SECS`: default 30
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_number(&lookup, "PORT", DEFAULT_PORT)?;
        let proxy_timeout_secs = parse_number(&lookup, "CRM_PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS)?;
        if port == 0 {
            return Err(ConfigError::Invalid { var: "PORT", value: "0".into() });
        }
        if proxy_timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "CRM_PROXY_TIMEOUT_SECS", value: "0".into() });
        }

        let backend_url = non_empty(lookup("CRM_BACKEND_URL")).unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::Invalid { var: "CRM_BACKEND_URL", value: backend_url });
        }
        let backend_url = backend_url.trim_end_matches('/').to_string();

        Ok(Self { port, backend_url, proxy_timeout_secs })
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match non_empty(lookup(var)) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
