//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nq_core::errors::CoreError;
use nq_core::responses::ErrorBody;
use nq_db::error::{DatabaseError, QueryError};

/// Message returned for any malformed coordinate token.
pub const INVALID_COORDINATES_MESSAGE: &str = "Coordinates must be in x_y_z format and integers.";

/// A failed request, ready to render.
#[derive(Debug)]
pub enum ApiError {
    /// A coordinate token was rejected before the store was touched.
    InvalidCoordinates(CoreError),
    /// A path segment on a term route could not be decoded.
    InvalidPath(String),
    /// The store failed; the message is passed through to the client.
    Store(DatabaseError),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCoordinates(_) | Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidCoordinates(_) => INVALID_COORDINATES_MESSAGE.to_string(),
            Self::InvalidPath(reason) => reason.clone(),
            Self::Store(error) => error.to_string(),
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(error: QueryError) -> Self {
        match error {
            QueryError::Invalid(error) => Self::InvalidCoordinates(error),
            QueryError::Store(error) => Self::Store(error),
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(error: DatabaseError) -> Self {
        Self::Store(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidCoordinates(error) => tracing::debug!(%error, "rejected request"),
            Self::InvalidPath(reason) => tracing::debug!(%reason, "rejected request path"),
            Self::Store(error) => tracing::error!(%error, "store failure"),
        }
        let body = ErrorBody {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinates_are_client_errors() {
        let error = ApiError::from(QueryError::Invalid(
            nq_core::coordinate::Coordinate::parse("a_b_c").unwrap_err(),
        ));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), INVALID_COORDINATES_MESSAGE);
    }

    #[test]
    fn invalid_paths_keep_their_reason() {
        let error = ApiError::InvalidPath("Invalid URL: bad segment".into());
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "Invalid URL: bad segment");
    }

    #[test]
    fn store_errors_pass_their_message_through() {
        let error = ApiError::from(DatabaseError::Query("no such table: metadata".into()));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Query failed: no such table: metadata");
    }
}
