//! # nq-db
//!
//! libSQL store access for the neuroquery study corpus.
//!
//! Holds the database handle, the named query templates that express the set
//! algebra (membership, anti-join, inner join), the repositories that run
//! them, and the [`service::QueryService`] that composes them into the
//! lookup / dissociation / intersection operations.
//!
//! Uses the `libsql` crate, which serves both local SQLite files and remote
//! libSQL/Turso endpoints through the same `Connection` API.

pub mod error;
pub mod helpers;
mod migrations;
pub mod queries;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;
use nq_config::DatabaseTarget;

/// Which flavor of store is behind the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Local SQLite file through the embedded libSQL engine.
    Sqlite,
    /// Remote libSQL server.
    Libsql,
}

impl Dialect {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Libsql => "libsql",
        }
    }
}

/// Shared database handle for the query service.
///
/// Holds the libSQL database, not a connection: every unit of work acquires
/// its own connection through [`NqDb::connect`] and drops it when done.
pub struct NqDb {
    db: libsql::Database,
    dialect: Dialect,
}

impl NqDb {
    /// Open a local database file, creating the corpus schema if absent.
    ///
    /// `":memory:"` works for schema checks only: each connection to it sees
    /// its own empty database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the file cannot be opened or the schema
    /// bootstrap fails.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let nq_db = Self {
            db,
            dialect: Dialect::Sqlite,
        };
        let conn = nq_db.connect()?;
        migrations::run_migrations(&conn).await?;
        tracing::debug!(path, "opened local corpus database");
        Ok(nq_db)
    }

    /// Connect to a remote libSQL server. The schema is used as-is.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the client cannot be built.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        tracing::debug!(url, "opened remote corpus database");
        Ok(Self {
            db,
            dialect: Dialect::Libsql,
        })
    }

    /// Open whichever store `target` names.
    ///
    /// # Errors
    ///
    /// See [`Self::open_local`] and [`Self::open_remote`].
    pub async fn open(target: &DatabaseTarget) -> Result<Self, DatabaseError> {
        match target {
            DatabaseTarget::Local(path) => Self::open_local(path).await,
            DatabaseTarget::Remote { url, auth_token } => Self::open_remote(url, auth_token).await,
        }
    }

    /// Acquire a fresh connection for one unit of work.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the connection cannot be established.
    pub fn connect(&self) -> Result<libsql::Connection, DatabaseError> {
        Ok(self.db.connect()?)
    }

    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }
}
