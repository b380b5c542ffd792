use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A reported activation peak, as stored (axes are numeric columns).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CoordinateRecord {
    pub study_id: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
