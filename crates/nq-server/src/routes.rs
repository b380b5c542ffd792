//! Router and request handlers.
//!
//! | Route                               | Body                                  |
//! |-------------------------------------|---------------------------------------|
//! | `/`                                 | health HTML                           |
//! | `/test_db`                          | store diagnostics                     |
//! | `/terms_sample`                     | distinct stored terms                 |
//! | `/terms/{term}/studies`             | `[{study_id, title}]`                 |
//! | `/dissociate/terms/{a}/{b}`         | `TermDissociation`                    |
//! | `/intersect/terms/{a}/{b}`          | `TermIntersection`                    |
//! | `/dissociate/locations/{c1}/{c2}`   | `LocationDissociation`                |
//! | `/intersect/locations/{c1}/{c2}`    | `LocationIntersection`                |

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::{HeaderName, HeaderValue};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use nq_core::responses::{Answer, DbDiagnosticsFailure};
use nq_db::service::QueryService;
use serde::Serialize;

use crate::error::ApiError;
use crate::extract::{CoordinatePath, TermPath};

/// Shared handler state: the query service over the injected store handle.
pub type AppState = Arc<QueryService>;

/// Set to `true` when any list in the body was cut at its result cap.
pub const TRUNCATED_HEADER: &str = "x-result-truncated";

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/test_db", get(test_db))
        .route("/terms_sample", get(terms_sample))
        .route("/terms/{term}/studies", get(studies_by_term))
        .route("/dissociate/terms/{term_a}/{term_b}", get(dissociate_terms))
        .route("/intersect/terms/{term_a}/{term_b}", get(intersect_terms))
        .route(
            "/dissociate/locations/{coord_1}/{coord_2}",
            get(dissociate_locations),
        )
        .route(
            "/intersect/locations/{coord_1}/{coord_2}",
            get(intersect_locations),
        )
        .with_state(state)
}

/// Serialize an answer's body, flagging truncation in a header.
fn json_answer<T: Serialize>(answer: Answer<T>) -> Response {
    let mut response = Json(answer.body).into_response();
    if answer.truncated {
        response.headers_mut().insert(
            HeaderName::from_static(TRUNCATED_HEADER),
            HeaderValue::from_static("true"),
        );
    }
    response
}

async fn health() -> Html<&'static str> {
    Html("<p>Server working!</p>")
}

async fn test_db(State(svc): State<AppState>) -> Response {
    match svc.diagnostics().await {
        Ok(report) => Json(report).into_response(),
        Err(error) => {
            tracing::error!(%error, "store diagnostics failed");
            let body = DbDiagnosticsFailure {
                ok: false,
                dialect: svc.db().dialect().as_str().to_string(),
                error: error.to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

async fn terms_sample(State(svc): State<AppState>) -> Result<Response, ApiError> {
    Ok(json_answer(svc.terms_sample().await?))
}

async fn studies_by_term(
    State(svc): State<AppState>,
    TermPath(term): TermPath<String>,
) -> Result<Response, ApiError> {
    Ok(json_answer(svc.studies_by_term(&term).await?))
}

async fn dissociate_terms(
    State(svc): State<AppState>,
    TermPath((term_a, term_b)): TermPath<(String, String)>,
) -> Result<Response, ApiError> {
    Ok(json_answer(svc.dissociate_terms(&term_a, &term_b).await?))
}

async fn intersect_terms(
    State(svc): State<AppState>,
    TermPath((term_a, term_b)): TermPath<(String, String)>,
) -> Result<Response, ApiError> {
    Ok(json_answer(svc.intersect_terms(&term_a, &term_b).await?))
}

async fn dissociate_locations(
    State(svc): State<AppState>,
    CoordinatePath((coord_1, coord_2)): CoordinatePath<(String, String)>,
) -> Result<Response, ApiError> {
    Ok(json_answer(svc.dissociate_locations(&coord_1, &coord_2).await?))
}

async fn intersect_locations(
    State(svc): State<AppState>,
    CoordinatePath((coord_1, coord_2)): CoordinatePath<(String, String)>,
) -> Result<Response, ApiError> {
    Ok(json_answer(svc.intersect_locations(&coord_1, &coord_2).await?))
}
