use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A lesson file as it appears on disk.
#[derive(Debug, Serialize, Deserialize)]
pub struct RawLesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub technology: String,
    pub difficulty: String,
    #[serde(default)]
    pub language: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(default)]
    pub flow: Vec<RawStep>,
}

fn default_status() -> String {
    "draft".to_string()
}

/// One entry of the `flow` array.
///
/// Required fields are optional here so that a missing one can be reported
/// with the position of the offending step.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RawStep {
    #[serde(rename = "stepId", alias = "step_id")]
    pub step_id: Option<String>,
    #[serde(rename = "mentorSays", alias = "mentor_says")]
    pub mentor_says: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<RawChoice>>,
}

/// A `{label, next}` entry of a choice step.
#[derive(Debug, Serialize, Deserialize)]
pub struct RawChoice {
    pub label: String,
    pub next: String,
}
