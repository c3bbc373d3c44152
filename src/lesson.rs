use crate::error::FormatError;
use crate::graph::FlowGraph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Seniority level a lesson targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Junior,
    Mid,
    Senior,
    Lead,
}

impl Difficulty {
    /// Maps a challenge bank star rating: one star is junior, four or more is lead.
    pub fn from_stars(stars: usize) -> Self {
        match stars {
            0 | 1 => Difficulty::Junior,
            2 => Difficulty::Mid,
            3 => Difficulty::Senior,
            _ => Difficulty::Lead,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Junior => "junior",
            Difficulty::Mid => "mid",
            Difficulty::Senior => "senior",
            Difficulty::Lead => "lead",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "junior" => Ok(Difficulty::Junior),
            "mid" => Ok(Difficulty::Mid),
            "senior" => Ok(Difficulty::Senior),
            "lead" => Ok(Difficulty::Lead),
            other => Err(FormatError::InvalidValue {
                field: "difficulty",
                value: other.to_string(),
            }),
        }
    }
}

/// Publication state of a lesson file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    #[default]
    Draft,
    Published,
}

impl LessonStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonStatus::Draft => "draft",
            LessonStatus::Published => "published",
        }
    }
}

impl FromStr for LessonStatus {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(LessonStatus::Draft),
            "published" => Ok(LessonStatus::Published),
            other => Err(FormatError::InvalidValue {
                field: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// Parsed challenge bank entry a lesson is generated from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeSource {
    /// Position of the challenge in its bank, e.g. `"8"`.
    #[serde(default)]
    pub number: Option<String>,
    pub title: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub time_estimate: String,
    pub tested_concepts: String,
    pub challenge_text: String,
    pub solution_text: String,
}

/// Metadata envelope around one lesson's flow graph.
#[derive(Debug, Clone)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub technology: String,
    pub difficulty: Difficulty,
    /// Programming language the coding steps use.
    pub language: String,
    pub status: LessonStatus,
    pub metadata: BTreeMap<String, String>,
    pub flow: FlowGraph,
}

impl Lesson {
    /// Wraps a built flow with the metadata derived from its source challenge.
    ///
    /// The id is `{technology}-{number}-{kebab title}`; the status starts as draft.
    pub fn from_challenge(
        source: &ChallengeSource,
        technology: &str,
        language: &str,
        flow: FlowGraph,
    ) -> Self {
        let tech_slug = kebab_case(technology);
        let id = match &source.number {
            Some(number) => format!("{}-{}-{}", tech_slug, number, kebab_case(&source.title)),
            None => format!("{}-{}", tech_slug, kebab_case(&source.title)),
        };

        let mut metadata = BTreeMap::new();
        metadata.insert("time_estimate".to_string(), source.time_estimate.clone());
        metadata.insert("tests".to_string(), source.tested_concepts.clone());
        if let Some(number) = &source.number {
            metadata.insert("challenge_number".to_string(), number.clone());
        }

        Self {
            id,
            title: source.title.clone(),
            technology: technology.to_string(),
            difficulty: source.difficulty,
            language: language.to_string(),
            status: LessonStatus::Draft,
            metadata,
            flow,
        }
    }

    pub fn with_status(mut self, status: LessonStatus) -> Self {
        self.status = status;
        self
    }
}

/// Lowercases, drops anything but ASCII alphanumerics, whitespace and `-`,
/// then joins whitespace runs with a single `-`.
pub fn kebab_case(s: &str) -> String {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect::<String>()
        .to_lowercase();
    cleaned.split_whitespace().collect::<Vec<_>>().join("-")
}
