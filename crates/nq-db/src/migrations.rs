//! Schema bootstrap.
//!
//! Embeds the SQL migration at compile time and executes it when a local
//! database is opened. All statements use `IF NOT EXISTS` for idempotent
//! re-running.

use crate::error::DatabaseError;

/// Corpus schema: 3 tables, 4 indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_corpus.sql");

/// Run all embedded migrations in sequence on `conn`.
pub async fn run_migrations(conn: &libsql::Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(MIGRATION_001)
        .await
        .map_err(|e| DatabaseError::Migration(format!("001_corpus: {e}")))?;
    Ok(())
}
