//! Named query templates for the corpus set algebra.
//!
//! Every template is fully parameterized; user input is only ever bound.
//! Study-returning templates select `DISTINCT m.study_id, m.title`, join
//! `metadata`, order by `study_id`, and take the row limit as their last
//! parameter. Callers bind [`QueryTemplate::limit_param`] (`cap + 1`) so a
//! result that overflows its cap can be detected.
//!
//! Term parameters are stored-form terms (see `nq_core::term::normalize`).
//! Coordinate predicates are exact equality on all three axes.

/// A SQL statement with its name (for logs) and its result cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTemplate {
    pub name: &'static str,
    pub sql: &'static str,
    pub cap: u32,
}

impl QueryTemplate {
    /// Value to bind for the trailing `LIMIT` parameter: one past the cap.
    #[must_use]
    pub fn limit_param(&self) -> i64 {
        i64::from(self.cap) + 1
    }

    /// Cap as a slice length.
    #[must_use]
    pub const fn cap_len(&self) -> usize {
        self.cap as usize
    }
}

/// Distinct raw term strings. `?1` limit.
pub const TERMS_SAMPLE: QueryTemplate = QueryTemplate {
    name: "terms_sample",
    sql: "SELECT DISTINCT term
          FROM annotations_terms
          ORDER BY term
          LIMIT ?1",
    cap: 100_000,
};

/// Studies with ≥1 annotation equal to `?1`. `?2` limit.
pub const TERM_MEMBERSHIP: QueryTemplate = QueryTemplate {
    name: "term_membership",
    sql: "SELECT DISTINCT m.study_id, m.title
          FROM annotations_terms a
          JOIN metadata m ON m.study_id = a.study_id
          WHERE a.term = ?1
          ORDER BY m.study_id
          LIMIT ?2",
    cap: 10_000,
};

/// Studies annotated with `?1` and never with `?2`. `?3` limit.
///
/// Swapping `?1`/`?2` yields the other direction of a dissociation.
pub const TERM_ANTI_JOIN: QueryTemplate = QueryTemplate {
    name: "term_anti_join",
    sql: "SELECT DISTINCT m.study_id, m.title
          FROM annotations_terms a
          JOIN metadata m ON m.study_id = a.study_id
          WHERE a.term = ?1
            AND NOT EXISTS (
                SELECT 1 FROM annotations_terms b
                WHERE b.study_id = a.study_id AND b.term = ?2
            )
          ORDER BY m.study_id
          LIMIT ?3",
    cap: 1_000,
};

/// Studies annotated with both `?1` and `?2`. `?3` limit.
pub const TERM_INNER_JOIN: QueryTemplate = QueryTemplate {
    name: "term_inner_join",
    sql: "SELECT DISTINCT m.study_id, m.title
          FROM annotations_terms a
          JOIN annotations_terms b ON b.study_id = a.study_id
          JOIN metadata m ON m.study_id = a.study_id
          WHERE a.term = ?1
            AND b.term = ?2
          ORDER BY m.study_id
          LIMIT ?3",
    cap: 100,
};

/// Studies reporting point (`?1`,`?2`,`?3`) and never point
/// (`?4`,`?5`,`?6`). `?7` limit.
pub const LOCATION_ANTI_JOIN: QueryTemplate = QueryTemplate {
    name: "location_anti_join",
    sql: "SELECT DISTINCT m.study_id, m.title
          FROM coordinates c1
          JOIN metadata m ON m.study_id = c1.study_id
          WHERE c1.x = ?1 AND c1.y = ?2 AND c1.z = ?3
            AND NOT EXISTS (
                SELECT 1 FROM coordinates c2
                WHERE c2.study_id = c1.study_id
                  AND c2.x = ?4 AND c2.y = ?5 AND c2.z = ?6
            )
          ORDER BY m.study_id
          LIMIT ?7",
    cap: 100,
};

/// Studies reporting both point (`?1`,`?2`,`?3`) and point
/// (`?4`,`?5`,`?6`). `?7` limit.
pub const LOCATION_INNER_JOIN: QueryTemplate = QueryTemplate {
    name: "location_inner_join",
    sql: "SELECT DISTINCT m.study_id, m.title
          FROM coordinates c1
          JOIN coordinates c2 ON c2.study_id = c1.study_id
          JOIN metadata m ON m.study_id = c1.study_id
          WHERE c1.x = ?1 AND c1.y = ?2 AND c1.z = ?3
            AND c2.x = ?4 AND c2.y = ?5 AND c2.z = ?6
          ORDER BY m.study_id
          LIMIT ?7",
    cap: 100,
};

/// All study templates, for checks that apply to every one of them.
pub const STUDY_TEMPLATES: [QueryTemplate; 5] = [
    TERM_MEMBERSHIP,
    TERM_ANTI_JOIN,
    TERM_INNER_JOIN,
    LOCATION_ANTI_JOIN,
    LOCATION_INNER_JOIN,
];
