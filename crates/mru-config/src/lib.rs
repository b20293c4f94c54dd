//! # mru-config
//!
//! Layered configuration loading for MRU Exchange using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MRU_*` prefix, `__` as separator)
//! 2. Bare `SUPABASE_URL` / `SUPABASE_ANON_KEY` environment variables
//! 3. Project-level `.mru/config.toml`
//! 4. User-level `~/.config/mru/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MRU_BACKEND__URL` -> `backend.url`,
//! `MRU_STORAGE__PRODUCT_BUCKET` -> `storage.product_bucket`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use mru_config::MarketConfig;
//!
//! let config = MarketConfig::load_with_dotenv().expect("config");
//! let backend = config.require_backend().expect("backend url and key are required");
//! println!("backend: {}", backend.base_url());
//! ```

mod auth;
mod backend;
mod error;
mod general;
mod storage;

pub use auth::AuthConfig;
pub use backend::BackendConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MarketConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl MarketConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".mru/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Bare backend variables shared with the web front end
        figment = figment.merge(Env::raw().filter_map(|key| {
            match key.as_str() {
                "SUPABASE_URL" | "VITE_SUPABASE_URL" => Some("backend.url".into()),
                "SUPABASE_ANON_KEY" | "VITE_SUPABASE_ANON_KEY" => {
                    Some("backend.anon_key".into())
                }
                _ => None,
            }
        }));

        // Layer 4: Prefixed environment variables (highest priority)
        figment = figment.merge(Env::prefixed("MRU_").split("__"));

        figment
    }

    /// The backend section, or a fatal error when the URL or key is missing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` or `ConfigError::InvalidValue`.
    pub fn require_backend(&self) -> Result<&BackendConfig, ConfigError> {
        self.backend.validate()?;
        Ok(&self.backend)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mru").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available), then falls back to
    /// the current directory. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
