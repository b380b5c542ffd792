//! Database error types for nq-db.

use nq_core::errors::CoreError;
use thiserror::Error;

/// Errors from store access. Any of these maps to a server fault.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema bootstrap failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// The store target could not be resolved from configuration.
    #[error(transparent)]
    Config(#[from] nq_config::ConfigError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

/// Errors from a query service operation: bad client input or a store failure.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Client input was rejected before any store access.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] DatabaseError),
}

impl From<libsql::Error> for QueryError {
    fn from(error: libsql::Error) -> Self {
        Self::Store(error.into())
    }
}
