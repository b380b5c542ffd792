//! Entity structs for the study corpus.
//!
//! Each entity maps to a table in the libSQL schema (see `nq-db`'s
//! `migrations/001_corpus.sql`). All derive `Serialize`, `Deserialize`, and
//! `JsonSchema`.

mod annotation;
mod coordinate;
mod study;

pub use annotation::TermAnnotation;
pub use coordinate::CoordinateRecord;
pub use study::StudyRef;
