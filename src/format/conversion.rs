use super::raw::{RawChoice, RawLesson, RawStep};
use crate::error::FormatError;
use crate::graph::FlowGraph;
use crate::lesson::Lesson;
use crate::step::{ChoiceOption, Step, StepKind};

/// Action value marking a narration that auto-advances.
pub const CONTINUE_ACTION: &str = "continue";

/// Converts a custom lesson description into a `FlowGraph`.
///
/// This is the extension point for lesson sources other than the JSON file
/// format. Implementations should only translate; broken links are left in
/// place for the `Validator` to report.
///
/// # Example
///
/// ```rust
/// use lessonflow::prelude::*;
///
/// struct Outline(Vec<(&'static str, &'static str)>);
///
/// impl IntoFlow for Outline {
///     fn into_flow(self) -> std::result::Result<FlowGraph, FormatError> {
///         let mut graph = FlowGraph::new();
///         let mut lines = self.0.into_iter().peekable();
///         while let Some((id, text)) = lines.next() {
///             let step = match lines.peek() {
///                 Some((next, _)) => Step::narration(id, text, *next, None)?,
///                 None => Step::terminal(id, text)?,
///             };
///             graph.add_step(step)?;
///         }
///         let first = graph.steps().next().map(|s| s.id.clone());
///         if let Some(first) = first {
///             graph.set_entry(&first)?;
///         }
///         Ok(graph)
///     }
/// }
///
/// let graph = Outline(vec![("intro", "Hi"), ("final", "Bye")]).into_flow()?;
/// assert!(Validator::validate(&graph).is_valid());
/// # Ok::<(), FormatError>(())
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a lesson flow graph.
    fn into_flow(self) -> Result<FlowGraph, FormatError>;
}

impl IntoFlow for Vec<RawStep> {
    fn into_flow(self) -> Result<FlowGraph, FormatError> {
        let mut graph = FlowGraph::new();
        let mut raws = self.into_iter().enumerate().peekable();
        while let Some((index, raw)) = raws.next() {
            let following = raws.peek().and_then(|(_, r)| r.step_id.clone());
            graph.add_step(raw_to_step(index, raw, following)?)?;
        }
        // Players start on the first step of the array.
        let first = graph.steps().next().map(|s| s.id.clone());
        if let Some(first) = first {
            graph.set_entry(&first)?;
        }
        Ok(graph)
    }
}

/// Kind detection: `choices` makes a choice and `next` a narration. A bare
/// `"continue"` action advances to the following array element, or ends the
/// lesson on the last one. A step with no link and no action is a terminal.
fn raw_to_step(
    index: usize,
    raw: RawStep,
    following: Option<String>,
) -> Result<Step, FormatError> {
    let id = raw.step_id.ok_or(FormatError::MissingField {
        index,
        field: "stepId",
    })?;
    let body = raw.mentor_says.ok_or(FormatError::MissingField {
        index,
        field: "mentorSays",
    })?;
    let next = raw.next.filter(|n| !n.is_empty());

    let kind = match (raw.choices, next) {
        (Some(choices), _) => StepKind::Choice {
            options: choices
                .into_iter()
                .map(|c| ChoiceOption::new(c.label, c.next))
                .collect(),
        },
        (None, Some(next)) => StepKind::Narration { next: Some(next) },
        (None, None) if raw.action.as_deref() == Some(CONTINUE_ACTION) => match following {
            Some(following) => StepKind::Narration {
                next: Some(following),
            },
            None => StepKind::Terminal,
        },
        (None, None) => StepKind::Terminal,
    };

    Ok(Step::from_parts(id, kind, body, raw.example)?)
}

impl From<&Step> for RawStep {
    fn from(step: &Step) -> Self {
        let mut raw = RawStep {
            step_id: Some(step.id.clone()),
            mentor_says: Some(step.body.clone()),
            example: step.code_example.clone(),
            ..RawStep::default()
        };
        match &step.kind {
            StepKind::Narration { next } => {
                raw.action = Some(CONTINUE_ACTION.to_string());
                raw.next = next.clone();
            }
            StepKind::Choice { options } => {
                raw.choices = Some(
                    options
                        .iter()
                        .map(|o| RawChoice {
                            label: o.label.clone(),
                            next: o.target_id.clone(),
                        })
                        .collect(),
                );
            }
            StepKind::Terminal => {}
        }
        raw
    }
}

impl TryFrom<RawLesson> for Lesson {
    type Error = FormatError;

    fn try_from(raw: RawLesson) -> Result<Self, Self::Error> {
        Ok(Lesson {
            difficulty: raw.difficulty.parse()?,
            status: raw.status.parse()?,
            flow: raw.flow.into_flow()?,
            id: raw.id,
            title: raw.title,
            technology: raw.technology,
            language: raw.language,
            metadata: raw.metadata,
        })
    }
}

impl From<&Lesson> for RawLesson {
    fn from(lesson: &Lesson) -> Self {
        RawLesson {
            id: lesson.id.clone(),
            title: lesson.title.clone(),
            technology: lesson.technology.clone(),
            difficulty: lesson.difficulty.as_str().to_string(),
            language: lesson.language.clone(),
            status: lesson.status.as_str().to_string(),
            metadata: lesson.metadata.clone(),
            flow: lesson.flow.steps().map(RawStep::from).collect(),
        }
    }
}
