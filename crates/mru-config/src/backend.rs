//! Hosted backend (data, auth, and storage API) configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default database schema exposed through the data API.
fn default_schema() -> String {
    "mru_dev".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Project URL (e.g., `https://abcd.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// Public anonymous API key. Sent as `apikey` on every request.
    #[serde(default)]
    pub anon_key: String,

    /// Schema selected through `Accept-Profile` / `Content-Profile`.
    #[serde(default = "default_schema")]
    pub schema: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            schema: default_schema(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Both the project URL and the anonymous key are present.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Project URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Check the section is usable for making requests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when the URL or key is missing, and
    /// `ConfigError::InvalidValue` when the URL is not http(s).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "backend".into(),
            });
        }
        if !(self.url.starts_with("https://") || self.url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "backend.url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.url),
            });
        }
        if self.schema.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "backend.schema".into(),
                reason: "schema name cannot be empty".into(),
            });
        }
        Ok(())
    }
}
