//! Cross-cutting error types for neuroquery.
//!
//! Store failures are `DatabaseError` in `nq-db`; HTTP status mapping happens
//! in `nq-server` where all crate errors converge.

use thiserror::Error;

/// Errors raised while validating client input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A coordinate token did not match `x_y_z` with integer components.
    #[error("Invalid coordinate '{token}': {reason}")]
    InvalidFormat { token: String, reason: String },
}

impl CoreError {
    pub(crate) fn invalid_format(token: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}
