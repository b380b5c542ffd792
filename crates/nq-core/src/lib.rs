//! # nq-core
//!
//! Core types shared across all neuroquery crates:
//! - Entity structs for the study corpus (studies, annotations, coordinates)
//! - Term normalization into the stored, prefix-qualified form
//! - Coordinate token parsing (`x_y_z`)
//! - Response shapes with a fixed wire key order
//! - Cross-cutting error types

pub mod coordinate;
pub mod entities;
pub mod errors;
pub mod responses;
pub mod term;
