//! Coordinate tokens.
//!
//! Locations arrive in URL paths as `x_y_z` with signed integer axes
//! (`-42_18_6`). They are echoed back comma-joined (`-42,18,6`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Separator between axes in a path token.
pub const AXIS_SEPARATOR: char = '_';

/// An integer-valued position in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Parse an `x_y_z` token.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFormat` unless the token splits into exactly
    /// three components that each parse as a signed integer.
    pub fn parse(token: &str) -> Result<Self, CoreError> {
        let parts: Vec<&str> = token.split(AXIS_SEPARATOR).collect();
        let [x, y, z] = parts.as_slice() else {
            return Err(CoreError::invalid_format(
                token,
                format!("expected 3 components, found {}", parts.len()),
            ));
        };
        Ok(Self {
            x: parse_axis(token, x)?,
            y: parse_axis(token, y)?,
            z: parse_axis(token, z)?,
        })
    }
}

fn parse_axis(token: &str, raw: &str) -> Result<i64, CoreError> {
    raw.trim()
        .parse()
        .map_err(|error| CoreError::invalid_format(token, format!("axis '{raw}': {error}")))
}

impl FromStr for Coordinate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Comma-joined echo form used in responses.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}
