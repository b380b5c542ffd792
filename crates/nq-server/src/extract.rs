//! Path extractors whose rejections render as JSON error bodies.
//!
//! axum's own `Path` rejects an undecodable segment (e.g. `%FF`) with a
//! plain-text 400. These wrappers route that rejection through [`ApiError`].

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use nq_core::errors::CoreError;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Path parameters of a term route.
///
/// An undecodable segment is `ApiError::InvalidPath`.
#[derive(Debug)]
pub struct TermPath<T>(pub T);

/// Path parameters of a location route.
///
/// An undecodable segment is `ApiError::InvalidCoordinates`, the same
/// rejection a well-formed but non-integer token gets.
#[derive(Debug)]
pub struct CoordinatePath<T>(pub T);

impl<T, S> FromRequestParts<S> for TermPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(params)) => Ok(Self(params)),
            Err(rejection) => Err(ApiError::InvalidPath(rejection.body_text())),
        }
    }
}

impl<T, S> FromRequestParts<S> for CoordinatePath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(params)) => Ok(Self(params)),
            Err(rejection) => Err(ApiError::InvalidCoordinates(CoreError::InvalidFormat {
                token: parts.uri.path().to_string(),
                reason: rejection.body_text(),
            })),
        }
    }
}
