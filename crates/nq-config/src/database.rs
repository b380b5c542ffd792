//! Backing store configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// URL schemes served by a remote libSQL endpoint.
const REMOTE_SCHEMES: &[&str] = &["libsql://", "https://", "http://", "wss://", "ws://"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection string: `libsql://db-org.turso.io`, `file:corpus.db`, or a
    /// bare filesystem path.
    #[serde(default)]
    pub url: String,

    /// Auth token for remote endpoints. Ignored for local files.
    #[serde(default)]
    pub auth_token: String,
}

/// Where the corpus lives, resolved from [`DatabaseConfig::url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// A local SQLite file (or `:memory:`).
    Local(String),
    /// A remote libSQL server.
    Remote { url: String, auth_token: String },
}

impl DatabaseConfig {
    /// Check if a connection string is present.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Resolve the connection string into a concrete target.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` if no URL is set, or
    /// `ConfigError::InvalidValue` for a `file:` URL without a path.
    pub fn target(&self) -> Result<DatabaseTarget, ConfigError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "database".into(),
            });
        }

        if REMOTE_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
            return Ok(DatabaseTarget::Remote {
                url: url.to_string(),
                auth_token: self.auth_token.clone(),
            });
        }

        let path = url
            .strip_prefix("file://")
            .or_else(|| url.strip_prefix("file:"))
            .unwrap_or(url);
        if path.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.url".into(),
                reason: format!("'{url}' names no database file"),
            });
        }
        Ok(DatabaseTarget::Local(path.to_string()))
    }
}
