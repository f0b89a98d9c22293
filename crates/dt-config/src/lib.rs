//! # dt-config
//!
//! Layered configuration loading for the dtrack console using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DTRACK_*` prefix, `__` as separator)
//! 2. Project-level `.dtrack/config.toml`
//! 3. User-level `~/.config/dtrack/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DTRACK_SERVER__URL` -> `server.url`,
//! `DTRACK_SESSION__DIR` -> `session.dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use dt_config::DtConfig;
//!
//! let config = DtConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.server.base_url().expect("valid url"));
//! ```

mod error;
mod server;
mod session;

pub use error::ConfigError;
pub use server::ServerConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DtConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl DtConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env` files; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the current directory, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or stack providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".dtrack/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("DTRACK_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dtrack").join("config.toml"))
    }
}
