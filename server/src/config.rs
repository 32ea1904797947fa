//! Environment-driven server configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the panel listens on.
    pub port: u16,
    /// Base URL of the lending backend API, without a trailing slash.
    pub backend_url: String,
    /// Whether session cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

const DEFAULT_BACKEND_URL: &str = "http://localhost:3001/api";

impl Config {
    /// Load from `PORT`, `BACKEND_API_URL`, and `COOKIE_SECURE`.
    ///
    /// `COOKIE_SECURE` overrides; otherwise `Secure` is inferred from the
    /// backend URL scheme.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `PORT` is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_raw = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
        let port: u16 = port_raw.parse().map_err(|_| ConfigError::InvalidPort(port_raw))?;

        let backend_url = std::env::var("BACKEND_API_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        let cookie_secure =
            env_bool("COOKIE_SECURE").unwrap_or_else(|| backend_url.starts_with("https://"));

        Ok(Self { port, backend_url, cookie_secure })
    }
}

/// Parse a boolean-ish environment variable (`1/true/yes/on`, `0/false/no/off`).
pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}
