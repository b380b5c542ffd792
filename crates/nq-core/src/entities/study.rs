use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A study as listed in query results: its identifier and title.
///
/// Result lists are deduplicated on this pair. A study with no recorded
/// title serializes `"title": null`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct StudyRef {
    pub study_id: String,
    pub title: Option<String>,
}

impl StudyRef {
    #[must_use]
    pub fn new(study_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            study_id: study_id.into(),
            title: Some(title.into()),
        }
    }

    /// A study whose metadata row has no title.
    #[must_use]
    pub fn untitled(study_id: impl Into<String>) -> Self {
        Self {
            study_id: study_id.into(),
            title: None,
        }
    }
}
