use crate::validator::DanglingReference;
use itertools::Itertools;
use thiserror::Error;

/// Errors raised while constructing a single `Step`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error("Step '{step_id}' is invalid: {reason}")]
    InvalidStep { step_id: String, reason: String },
}

/// Errors raised while mutating or querying a `FlowGraph`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error(transparent)]
    InvalidStep(#[from] StepError),

    #[error("A step with id '{0}' already exists in this flow")]
    DuplicateStepId(String),

    #[error("Step '{0}' not found in this flow")]
    UnknownStep(String),

    #[error("A flow must contain at least one step")]
    EmptyFlow,
}

/// Errors raised by `FlowBuilder::build`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error("{} dangling reference(s): {}", .0.len(), list_references(.0))]
    DanglingReferences(Vec<DanglingReference>),
}

impl BuildError {
    /// Returns every unresolved `(source, target)` pair, or an empty slice for other errors.
    pub fn dangling_references(&self) -> &[DanglingReference] {
        match self {
            BuildError::DanglingReferences(refs) => refs,
            BuildError::Flow(_) => &[],
        }
    }
}

fn list_references(refs: &[DanglingReference]) -> String {
    refs.iter()
        .map(|r| format!("'{}' -> '{}'", r.step_id, r.target_id))
        .join(", ")
}

/// Errors raised at the lesson JSON boundary.
#[derive(Error, Debug, Clone)]
pub enum FormatError {
    #[error("Failed to parse lesson JSON: {0}")]
    Json(String),

    #[error("I/O error on '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Step at position {index} is missing the required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidValue { field: &'static str, value: String },

    #[error(transparent)]
    Flow(#[from] FlowError),
}

impl From<StepError> for FormatError {
    fn from(e: StepError) -> Self {
        FormatError::Flow(e.into())
    }
}

impl From<serde_json::Error> for FormatError {
    fn from(e: serde_json::Error) -> Self {
        FormatError::Json(e.to_string())
    }
}
