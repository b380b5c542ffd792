//! Repositories running the query templates against a connection.
//!
//! Functions take `&libsql::Connection` so callers decide the unit of work;
//! a `libsql::Transaction` derefs to one.

pub mod diagnostics;
pub mod locations;
pub mod terms;

use libsql::params::IntoParams;
use nq_core::entities::StudyRef;
use nq_core::responses::Capped;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_text, get_text};
use crate::queries::QueryTemplate;

fn row_to_study_ref(row: &libsql::Row) -> Result<StudyRef, DatabaseError> {
    Ok(StudyRef {
        study_id: get_text(row, 0)?,
        title: get_opt_text(row, 1)?,
    })
}

/// Run a study-returning template and apply its cap.
async fn fetch_studies(
    conn: &libsql::Connection,
    template: &QueryTemplate,
    params: impl IntoParams,
) -> Result<Capped<StudyRef>, DatabaseError> {
    let mut rows = conn
        .query(template.sql, params)
        .await
        .map_err(|e| DatabaseError::Query(format!("{}: {e}", template.name)))?;

    let mut studies = Vec::new();
    while let Some(row) = rows.next().await? {
        studies.push(row_to_study_ref(&row)?);
    }

    let capped = Capped::from_overfetch(studies, template.cap_len());
    tracing::debug!(
        query = template.name,
        rows = capped.items.len(),
        truncated = capped.truncated,
        "store query"
    );
    if capped.truncated {
        tracing::warn!(
            query = template.name,
            cap = template.cap,
            "result exceeds cap; list truncated"
        );
    }
    Ok(capped)
}
