//! Coordinate queries. A point matches only on exact equality of all axes.

use nq_core::coordinate::Coordinate;
use nq_core::entities::StudyRef;
use nq_core::responses::Capped;

use crate::error::DatabaseError;
use crate::queries::{LOCATION_ANTI_JOIN, LOCATION_INNER_JOIN, QueryTemplate};

use super::fetch_studies;

async fn fetch_pair(
    conn: &libsql::Connection,
    template: &QueryTemplate,
    first: Coordinate,
    second: Coordinate,
) -> Result<Capped<StudyRef>, DatabaseError> {
    fetch_studies(
        conn,
        template,
        libsql::params![
            first.x,
            first.y,
            first.z,
            second.x,
            second.y,
            second.z,
            template.limit_param()
        ],
    )
    .await
}

/// Studies reporting `point` and never `excluded`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the query fails, or
/// `DatabaseError::LibSql` if a row cannot be read.
pub async fn studies_at_without(
    conn: &libsql::Connection,
    point: Coordinate,
    excluded: Coordinate,
) -> Result<Capped<StudyRef>, DatabaseError> {
    fetch_pair(conn, &LOCATION_ANTI_JOIN, point, excluded).await
}

/// Studies reporting both `first` and `second`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the query fails, or
/// `DatabaseError::LibSql` if a row cannot be read.
pub async fn studies_at_both(
    conn: &libsql::Connection,
    first: Coordinate,
    second: Coordinate,
) -> Result<Capped<StudyRef>, DatabaseError> {
    fetch_pair(conn, &LOCATION_INNER_JOIN, first, second).await
}
