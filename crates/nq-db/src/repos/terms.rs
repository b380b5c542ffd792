//! Term annotation queries. All term arguments are stored-form terms.

use nq_core::entities::StudyRef;
use nq_core::responses::Capped;

use crate::error::DatabaseError;
use crate::queries::{TERM_ANTI_JOIN, TERM_INNER_JOIN, TERM_MEMBERSHIP, TERMS_SAMPLE};

use super::fetch_studies;

/// Studies with at least one annotation equal to `term`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the query fails, or
/// `DatabaseError::LibSql` if a row cannot be read.
pub async fn studies_with_term(
    conn: &libsql::Connection,
    term: &str,
) -> Result<Capped<StudyRef>, DatabaseError> {
    fetch_studies(
        conn,
        &TERM_MEMBERSHIP,
        libsql::params![term, TERM_MEMBERSHIP.limit_param()],
    )
    .await
}

/// Studies annotated with `term` and never with `excluded`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the query fails, or
/// `DatabaseError::LibSql` if a row cannot be read.
pub async fn studies_with_term_without(
    conn: &libsql::Connection,
    term: &str,
    excluded: &str,
) -> Result<Capped<StudyRef>, DatabaseError> {
    fetch_studies(
        conn,
        &TERM_ANTI_JOIN,
        libsql::params![term, excluded, TERM_ANTI_JOIN.limit_param()],
    )
    .await
}

/// Studies annotated with both `term_a` and `term_b`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the query fails, or
/// `DatabaseError::LibSql` if a row cannot be read.
pub async fn studies_with_both_terms(
    conn: &libsql::Connection,
    term_a: &str,
    term_b: &str,
) -> Result<Capped<StudyRef>, DatabaseError> {
    fetch_studies(
        conn,
        &TERM_INNER_JOIN,
        libsql::params![term_a, term_b, TERM_INNER_JOIN.limit_param()],
    )
    .await
}

/// Distinct raw term strings as stored (prefix included).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the query fails, or
/// `DatabaseError::LibSql` if a row cannot be read.
pub async fn terms_sample(conn: &libsql::Connection) -> Result<Capped<String>, DatabaseError> {
    let mut rows = conn
        .query(TERMS_SAMPLE.sql, [TERMS_SAMPLE.limit_param()])
        .await
        .map_err(|e| DatabaseError::Query(format!("{}: {e}", TERMS_SAMPLE.name)))?;

    let mut terms = Vec::new();
    while let Some(row) = rows.next().await? {
        terms.push(row.get::<String>(0)?);
    }
    Ok(Capped::from_overfetch(terms, TERMS_SAMPLE.cap_len()))
}
