//! Term canonicalization.
//!
//! Annotation terms are stored under a fixed namespace prefix
//! (`terms_abstract_tfidf__pain`). Clients send bare labels (`pain`,
//! `Working_Memory`); this module maps them onto the stored form used for
//! querying and onto the display form echoed back in responses.

/// Storage namespace prepended to every annotation term.
pub const TERM_PREFIX: &str = "terms_abstract_tfidf__";

/// Canonicalize a term into its stored, prefix-qualified form.
///
/// Trims surrounding whitespace, lower-cases, and prepends [`TERM_PREFIX`]
/// unless it is already present. Idempotent.
#[must_use]
pub fn normalize(term: &str) -> String {
    let term = term.trim().to_lowercase();
    if term.starts_with(TERM_PREFIX) {
        term
    } else {
        format!("{TERM_PREFIX}{term}")
    }
}

/// Human-readable form of a path term: underscores become spaces, then
/// trimmed and lower-cased. Never used for querying directly.
#[must_use]
pub fn display(term: &str) -> String {
    term.replace('_', " ").trim().to_lowercase()
}

/// A client term resolved into both of its forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTerm {
    /// Echoed back to the client.
    pub display: String,
    /// Bound into store queries.
    pub stored: String,
}

impl ResolvedTerm {
    /// Resolve a path term the way the two-term operations do:
    /// `stored = normalize(display(raw))`.
    #[must_use]
    pub fn from_path(raw: &str) -> Self {
        let display = display(raw);
        let stored = normalize(&display);
        Self { display, stored }
    }
}
