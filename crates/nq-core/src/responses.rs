//! Response types returned as JSON by the query service.
//!
//! Field declaration order is the wire key order: echoed inputs first, then
//! result lists. Clients display keys in the order received, so do not
//! reorder fields.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{CoordinateRecord, StudyRef, TermAnnotation};

/// Rows fetched under a result cap, with whether the cap cut the list short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capped<T> {
    pub items: Vec<T>,
    pub truncated: bool,
}

impl<T> Capped<T> {
    /// Build from rows fetched with `LIMIT cap + 1`: one extra row means the
    /// true result exceeds the cap.
    #[must_use]
    pub fn from_overfetch(mut items: Vec<T>, cap: usize) -> Self {
        let truncated = items.len() > cap;
        items.truncate(cap);
        Self { items, truncated }
    }
}

/// A response body plus whether any of its lists hit a result cap.
///
/// The flag travels out of band (a response header) so the body keeps its
/// fixed shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer<T> {
    pub body: T,
    pub truncated: bool,
}

/// Response from `GET /dissociate/terms/{a}/{b}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TermDissociation {
    pub term_a: String,
    pub term_b: String,
    pub term_a_not_term_b: Vec<StudyRef>,
    pub term_b_not_term_a: Vec<StudyRef>,
}

/// Response from `GET /intersect/terms/{a}/{b}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TermIntersection {
    pub term_a: String,
    pub term_b: String,
    pub term_a_and_term_b: Vec<StudyRef>,
}

/// Response from `GET /dissociate/locations/{c1}/{c2}`.
///
/// Coordinates are echoed as `"x,y,z"` strings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LocationDissociation {
    pub coordinate_1: String,
    pub coordinate_2: String,
    pub coordinate_1_not_coordinate_2: Vec<StudyRef>,
    pub coordinate_2_not_coordinate_1: Vec<StudyRef>,
}

/// Response from `GET /intersect/locations/{c1}/{c2}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LocationIntersection {
    pub coordinate_1: String,
    pub coordinate_2: String,
    pub coordinate_1_and_coordinate_2: Vec<StudyRef>,
}

/// Response from `GET /test_db` when every probe succeeds.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DbDiagnostics {
    pub ok: bool,
    pub dialect: String,
    pub version: String,
    pub coordinates_count: i64,
    pub metadata_count: i64,
    pub annotations_terms_count: i64,
    pub coordinates_sample: Vec<CoordinateRecord>,
    /// Whole metadata rows, keyed by column name.
    pub metadata_sample: Vec<serde_json::Map<String, serde_json::Value>>,
    pub annotations_terms_sample: Vec<TermAnnotation>,
}

/// Response from `GET /test_db` when a probe fails.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DbDiagnosticsFailure {
    pub ok: bool,
    pub dialect: String,
    pub error: String,
}

/// Error body for every failing route.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
