use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One weighted term attached to a study contrast.
///
/// Set operations only look at `(study_id, term)`; `contrast_id` and `weight`
/// are carried for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TermAnnotation {
    pub study_id: String,
    pub contrast_id: Option<String>,
    pub term: String,
    pub weight: f64,
}
