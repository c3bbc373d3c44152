use crate::error::StepError;
use std::fmt;

/// A labelled option on a `Choice` step, leading to another step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub label: String,
    pub target_id: String,
}

impl ChoiceOption {
    pub fn new(label: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target_id: target_id.into(),
        }
    }
}

impl<L: Into<String>, T: Into<String>> From<(L, T)> for ChoiceOption {
    fn from((label, target_id): (L, T)) -> Self {
        Self::new(label, target_id)
    }
}

/// How a step hands control to the rest of the lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepKind {
    /// Shows text and auto-advances to `next`.
    ///
    /// `next` is only `None` for a narration whose successor was never wired,
    /// i.e. a builder chain left open. Such a step is reported as a dead end by
    /// the validator.
    Narration { next: Option<String> },
    /// Shows text plus an ordered list of options.
    Choice { options: Vec<ChoiceOption> },
    /// Ends the lesson.
    Terminal,
}

impl StepKind {
    pub fn name(&self) -> &'static str {
        match self {
            StepKind::Narration { .. } => "narration",
            StepKind::Choice { .. } => "choice",
            StepKind::Terminal => "terminal",
        }
    }
}

/// One node in a lesson's dialogue graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: String,
    pub kind: StepKind,
    /// Text shown to the learner.
    pub body: String,
    /// Snippet displayed alongside `body`.
    pub code_example: Option<String>,
}

impl Step {
    /// Creates a `Narration` step that advances to `next`.
    pub fn narration(
        id: impl Into<String>,
        body: impl Into<String>,
        next: impl Into<String>,
        code_example: Option<String>,
    ) -> Result<Self, StepError> {
        let id = require_id(id.into())?;
        let body = require_body(&id, body.into())?;
        let next = next.into();
        if next.is_empty() {
            return Err(invalid(&id, "narration requires a non-empty `next` id"));
        }
        Ok(Self {
            id,
            kind: StepKind::Narration { next: Some(next) },
            body,
            code_example,
        })
    }

    /// Creates a `Choice` step. Options keep the order they are given in.
    pub fn choice<I, O>(
        id: impl Into<String>,
        body: impl Into<String>,
        options: I,
    ) -> Result<Self, StepError>
    where
        I: IntoIterator<Item = O>,
        O: Into<ChoiceOption>,
    {
        let id = require_id(id.into())?;
        let body = require_body(&id, body.into())?;
        let options: Vec<ChoiceOption> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(invalid(&id, "choice requires at least one option"));
        }
        if let Some(pos) = options.iter().position(|o| o.label.is_empty()) {
            return Err(invalid(&id, &format!("option {} has an empty label", pos)));
        }
        Ok(Self {
            id,
            kind: StepKind::Choice { options },
            body,
            code_example: None,
        })
    }

    /// Creates a `Terminal` step with no outgoing link.
    pub fn terminal(id: impl Into<String>, body: impl Into<String>) -> Result<Self, StepError> {
        let id = require_id(id.into())?;
        let body = require_body(&id, body.into())?;
        Ok(Self {
            id,
            kind: StepKind::Terminal,
            body,
            code_example: None,
        })
    }

    /// Assembles a step from already-parsed parts. Only the id is checked, so
    /// the builder can leave a narration open and the JSON loader can keep
    /// imperfect steps for the validator to report.
    pub(crate) fn from_parts(
        id: String,
        kind: StepKind,
        body: String,
        code_example: Option<String>,
    ) -> Result<Self, StepError> {
        Ok(Self {
            id: require_id(id)?,
            kind,
            body,
            code_example,
        })
    }

    pub fn with_code_example(mut self, code: impl Into<String>) -> Self {
        self.code_example = Some(code.into());
        self
    }

    /// Ids this step links to: `[next]`, the choice targets in order, or nothing.
    pub fn outgoing_ids(&self) -> Vec<&str> {
        match &self.kind {
            StepKind::Narration { next } => next.iter().map(String::as_str).collect(),
            StepKind::Choice { options } => options.iter().map(|o| o.target_id.as_str()).collect(),
            StepKind::Terminal => Vec::new(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, StepKind::Terminal)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.id, self.kind.name())?;
        let targets = self.outgoing_ids();
        if !targets.is_empty() {
            write!(f, " -> {}", targets.join(" | "))?;
        }
        Ok(())
    }
}

fn require_id(id: String) -> Result<String, StepError> {
    if id.trim().is_empty() {
        return Err(invalid(&id, "step id must not be empty"));
    }
    Ok(id)
}

pub(crate) fn require_body(step_id: &str, body: String) -> Result<String, StepError> {
    if body.trim().is_empty() {
        return Err(invalid(step_id, "step body must not be empty"));
    }
    Ok(body)
}

fn invalid(step_id: &str, reason: &str) -> StepError {
    StepError::InvalidStep {
        step_id: step_id.to_string(),
        reason: reason.to_string(),
    }
}
