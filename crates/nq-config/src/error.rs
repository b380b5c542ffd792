//! Errors raised while loading or resolving neuroquery settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or environment variable could not be merged into
    /// [`crate::NqConfig`].
    #[error("Failed to load neuroquery settings: {0}")]
    Figment(#[from] figment::Error),

    /// A section the server needs to start is empty, e.g. no `database.url`.
    #[error("No value set for '{section}' (set it in neuroquery.toml or the environment)")]
    NotConfigured { section: String },

    /// A field is present but unusable, such as a non-IP bind address.
    #[error("'{field}' is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}
