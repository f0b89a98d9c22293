//! REST backend connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_context_path() -> String {
    "/".to_string()
}

/// Default request timeout.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Scheme, host and port of the backend, e.g. `https://dtrack.example.com`.
    #[serde(default = "default_url")]
    pub url: String,

    /// Path prefix the application is deployed under.
    #[serde(default = "default_context_path")]
    pub context_path: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            context_path: default_context_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServerConfig {
    /// Context path with exactly one leading and one trailing `/`.
    #[must_use]
    pub fn normalized_context_path(&self) -> String {
        let trimmed = self.context_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        }
    }

    /// Base URL for REST calls and links: `url` joined with the context path,
    /// without a trailing slash.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `url` has no `http(s)://` scheme.
    pub fn base_url(&self) -> Result<String, ConfigError> {
        let url = self.url.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "server.url".into(),
                reason: format!("expected an http:// or https:// URL, got '{url}'"),
            });
        }
        let context = self.normalized_context_path();
        Ok(format!("{url}{}", context.trim_end_matches('/')))
    }
}
