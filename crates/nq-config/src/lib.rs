//! # nq-config
//!
//! Layered configuration loading for neuroquery using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NEUROQUERY_*` prefix, `__` as separator)
//! 2. `DB_URL`, mapped onto `database.url`
//! 3. Project-level `./neuroquery.toml`
//! 4. User-level `~/.config/neuroquery/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NEUROQUERY_DATABASE__URL` -> `database.url`,
//! `NEUROQUERY_SERVER__PORT` -> `server.port`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use nq_config::NqConfig;
//!
//! let config = NqConfig::load_with_dotenv().expect("config");
//! let addr = config.server.socket_addr().expect("bind address");
//! let target = config.database.target().expect("database url");
//! ```

mod database;
mod error;
mod server;

pub use database::{DatabaseConfig, DatabaseTarget};
pub use error::ConfigError;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for namespaced environment variables.
pub const ENV_PREFIX: &str = "NEUROQUERY_";

/// Single-variable connection string honored for existing deployments.
pub const LEGACY_DB_URL_VAR: &str = "DB_URL";

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "neuroquery.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NqConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl NqConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source is malformed or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment = figment.merge(
            Env::raw()
                .only(&[LEGACY_DB_URL_VAR])
                .map(|_| "database.url".into()),
        );

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("neuroquery").join("config.toml"))
    }
}
