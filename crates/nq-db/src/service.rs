//! Set comparison engine.
//!
//! `QueryService` wraps an injected [`NqDb`] and exposes the read operations
//! served over HTTP. Every operation follows the same protocol:
//! 1. Validate and canonicalize inputs (no store access on failure)
//! 2. Acquire a connection and begin a transaction
//! 3. Run one or two template queries
//! 4. Commit, then assemble the response body
//!
//! A failure at any step returns the error; partial results are never built.
//! The transaction and connection are dropped on every path.

use nq_core::coordinate::Coordinate;
use nq_core::entities::StudyRef;
use nq_core::responses::{
    Answer, DbDiagnostics, LocationDissociation, LocationIntersection, TermDissociation,
    TermIntersection,
};
use nq_core::term::{self, ResolvedTerm};

use crate::NqDb;
use crate::error::{DatabaseError, QueryError};
use crate::repos::{diagnostics, locations, terms};

/// Read-only query operations over the study corpus.
pub struct QueryService {
    db: NqDb,
}

impl QueryService {
    #[must_use]
    pub const fn new(db: NqDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &NqDb {
        &self.db
    }

    /// Distinct raw term strings, as stored.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Store` on any store failure.
    pub async fn terms_sample(&self) -> Result<Answer<Vec<String>>, QueryError> {
        let conn = self.db.connect()?;
        let tx = conn.transaction().await?;
        let sample = terms::terms_sample(&tx).await?;
        tx.commit().await?;

        Ok(Answer {
            body: sample.items,
            truncated: sample.truncated,
        })
    }

    /// Studies with at least one annotation of `term`.
    ///
    /// The term is normalized as given; underscores are kept.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Store` on any store failure.
    pub async fn studies_by_term(&self, term: &str) -> Result<Answer<Vec<StudyRef>>, QueryError> {
        let stored = term::normalize(term);
        tracing::debug!(%stored, "lookup studies by term");

        let conn = self.db.connect()?;
        let tx = conn.transaction().await?;
        let studies = terms::studies_with_term(&tx, &stored).await?;
        tx.commit().await?;

        Ok(Answer {
            body: studies.items,
            truncated: studies.truncated,
        })
    }

    /// Studies tagged with `a` but not `b`, and with `b` but not `a`.
    ///
    /// The two lists come from independent anti-join queries, each under its
    /// own cap.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Store` on any store failure.
    pub async fn dissociate_terms(
        &self,
        a: &str,
        b: &str,
    ) -> Result<Answer<TermDissociation>, QueryError> {
        let a = ResolvedTerm::from_path(a);
        let b = ResolvedTerm::from_path(b);
        tracing::debug!(term_a = %a.stored, term_b = %b.stored, "dissociate terms");

        let conn = self.db.connect()?;
        let tx = conn.transaction().await?;
        let a_not_b = terms::studies_with_term_without(&tx, &a.stored, &b.stored).await?;
        let b_not_a = terms::studies_with_term_without(&tx, &b.stored, &a.stored).await?;
        tx.commit().await?;

        Ok(Answer {
            truncated: a_not_b.truncated || b_not_a.truncated,
            body: TermDissociation {
                term_a: a.display,
                term_b: b.display,
                term_a_not_term_b: a_not_b.items,
                term_b_not_term_a: b_not_a.items,
            },
        })
    }

    /// Studies tagged with both `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Store` on any store failure.
    pub async fn intersect_terms(
        &self,
        a: &str,
        b: &str,
    ) -> Result<Answer<TermIntersection>, QueryError> {
        let a = ResolvedTerm::from_path(a);
        let b = ResolvedTerm::from_path(b);
        tracing::debug!(term_a = %a.stored, term_b = %b.stored, "intersect terms");

        let conn = self.db.connect()?;
        let tx = conn.transaction().await?;
        let both = terms::studies_with_both_terms(&tx, &a.stored, &b.stored).await?;
        tx.commit().await?;

        Ok(Answer {
            truncated: both.truncated,
            body: TermIntersection {
                term_a: a.display,
                term_b: b.display,
                term_a_and_term_b: both.items,
            },
        })
    }

    /// Studies reporting `c1` but not `c2`, and `c2` but not `c1`.
    ///
    /// Both tokens are parsed before the store is touched.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Invalid` for a malformed token, or
    /// `QueryError::Store` on any store failure.
    pub async fn dissociate_locations(
        &self,
        c1: &str,
        c2: &str,
    ) -> Result<Answer<LocationDissociation>, QueryError> {
        let c1 = Coordinate::parse(c1)?;
        let c2 = Coordinate::parse(c2)?;
        tracing::debug!(%c1, %c2, "dissociate locations");

        let conn = self.db.connect()?;
        let tx = conn.transaction().await?;
        let first_only = locations::studies_at_without(&tx, c1, c2).await?;
        let second_only = locations::studies_at_without(&tx, c2, c1).await?;
        tx.commit().await?;

        Ok(Answer {
            truncated: first_only.truncated || second_only.truncated,
            body: LocationDissociation {
                coordinate_1: c1.to_string(),
                coordinate_2: c2.to_string(),
                coordinate_1_not_coordinate_2: first_only.items,
                coordinate_2_not_coordinate_1: second_only.items,
            },
        })
    }

    /// Studies reporting both `c1` and `c2`.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Invalid` for a malformed token, or
    /// `QueryError::Store` on any store failure.
    pub async fn intersect_locations(
        &self,
        c1: &str,
        c2: &str,
    ) -> Result<Answer<LocationIntersection>, QueryError> {
        let c1 = Coordinate::parse(c1)?;
        let c2 = Coordinate::parse(c2)?;
        tracing::debug!(%c1, %c2, "intersect locations");

        let conn = self.db.connect()?;
        let tx = conn.transaction().await?;
        let both = locations::studies_at_both(&tx, c1, c2).await?;
        tx.commit().await?;

        Ok(Answer {
            truncated: both.truncated,
            body: LocationIntersection {
                coordinate_1: c1.to_string(),
                coordinate_2: c2.to_string(),
                coordinate_1_and_coordinate_2: both.items,
            },
        })
    }

    /// Probe the store: version, table counts, sample rows.
    ///
    /// # Errors
    ///
    /// Returns the first failing probe's `DatabaseError`.
    pub async fn diagnostics(&self) -> Result<DbDiagnostics, DatabaseError> {
        let conn = self.db.connect()?;
        let tx = conn.transaction().await?;

        let version = diagnostics::engine_version(&tx).await?;
        let coordinates_count = diagnostics::count_rows(&tx, "coordinates").await?;
        let metadata_count = diagnostics::count_rows(&tx, "metadata").await?;
        let annotations_terms_count = diagnostics::count_rows(&tx, "annotations_terms").await?;
        let coordinates_sample = diagnostics::coordinates_sample(&tx).await?;
        let metadata_sample = diagnostics::metadata_sample(&tx).await?;
        let annotations_terms_sample = diagnostics::annotations_sample(&tx).await?;
        tx.commit().await?;

        Ok(DbDiagnostics {
            ok: true,
            dialect: self.db.dialect().as_str().to_string(),
            version,
            coordinates_count,
            metadata_count,
            annotations_terms_count,
            coordinates_sample,
            metadata_sample,
            annotations_terms_sample,
        })
    }
}
