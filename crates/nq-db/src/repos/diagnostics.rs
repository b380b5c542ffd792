//! Store probes behind `GET /test_db`: engine version, table counts, and a
//! few sample rows from each corpus table.

use nq_core::entities::{CoordinateRecord, TermAnnotation};

use crate::error::DatabaseError;
use crate::helpers::{column_names, get_number, get_opt_text, get_text, row_to_json};

/// Rows returned by each sample probe.
pub const SAMPLE_ROWS: i64 = 3;

/// Corpus tables whose sizes are reported.
pub const COUNTED_TABLES: [&str; 3] = ["coordinates", "metadata", "annotations_terms"];

/// SQLite engine version string.
///
/// # Errors
///
/// Returns `DatabaseError` if the probe query fails.
pub async fn engine_version(conn: &libsql::Connection) -> Result<String, DatabaseError> {
    let mut rows = conn.query("SELECT sqlite_version()", ()).await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<String>(0)?)
}

/// Row count of one of [`COUNTED_TABLES`].
///
/// # Errors
///
/// Returns `DatabaseError::Query` for a table outside that list, or the
/// store's error if the count fails.
pub async fn count_rows(conn: &libsql::Connection, table: &str) -> Result<i64, DatabaseError> {
    let Some(table) = COUNTED_TABLES.iter().find(|t| **t == table) else {
        return Err(DatabaseError::Query(format!("not a corpus table: {table}")));
    };
    let mut rows = conn
        .query(&format!("SELECT COUNT(*) FROM {table}"), ())
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)?)
}

/// First [`SAMPLE_ROWS`] coordinate rows.
///
/// # Errors
///
/// Returns `DatabaseError` if the probe query fails.
pub async fn coordinates_sample(
    conn: &libsql::Connection,
) -> Result<Vec<CoordinateRecord>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT study_id, x, y, z FROM coordinates LIMIT ?1",
            [SAMPLE_ROWS],
        )
        .await?;
    let mut sample = Vec::new();
    while let Some(row) = rows.next().await? {
        sample.push(CoordinateRecord {
            study_id: get_text(&row, 0)?,
            x: get_number(&row, 1)?,
            y: get_number(&row, 2)?,
            z: get_number(&row, 3)?,
        });
    }
    Ok(sample)
}

/// Whole metadata rows; the column set depends on the loaded corpus.
///
/// # Errors
///
/// Returns `DatabaseError` if the probe query fails.
pub async fn metadata_sample(
    conn: &libsql::Connection,
) -> Result<Vec<serde_json::Map<String, serde_json::Value>>, DatabaseError> {
    let mut rows = conn
        .query("SELECT * FROM metadata LIMIT ?1", [SAMPLE_ROWS])
        .await?;
    let columns = column_names(&rows);
    let mut sample = Vec::new();
    while let Some(row) = rows.next().await? {
        sample.push(row_to_json(&row, &columns)?);
    }
    Ok(sample)
}

/// First [`SAMPLE_ROWS`] term annotation rows.
///
/// # Errors
///
/// Returns `DatabaseError` if the probe query fails.
pub async fn annotations_sample(
    conn: &libsql::Connection,
) -> Result<Vec<TermAnnotation>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT study_id, contrast_id, term, weight FROM annotations_terms LIMIT ?1",
            [SAMPLE_ROWS],
        )
        .await?;
    let mut sample = Vec::new();
    while let Some(row) = rows.next().await? {
        sample.push(TermAnnotation {
            study_id: get_text(&row, 0)?,
            contrast_id: get_opt_text(&row, 1)?,
            term: get_text(&row, 2)?,
            weight: get_number(&row, 3)?,
        });
    }
    Ok(sample)
}
