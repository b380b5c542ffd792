//! # nq-server
//!
//! Read-only HTTP surface over the neuroquery study corpus.
//!
//! All routes are `GET`. Handlers delegate to
//! [`nq_db::service::QueryService`] and map its errors through
//! [`error::ApiError`]: malformed client input (including an undecodable path
//! segment) is a 400, any store failure a 500, both with an `{"error": ...}`
//! body.

pub mod cli;
pub mod error;
pub mod extract;
pub mod routes;

pub use routes::{AppState, TRUNCATED_HEADER, router};
