use crate::error::{BuildError, FlowError};
use crate::graph::FlowGraph;
use crate::step::{ChoiceOption, Step, StepKind, require_body};
use crate::validator::DanglingReference;
use log::{debug, info, warn};

/// Incrementally assembles a `FlowGraph` in authoring order.
///
/// A narration appended with [`append_narration`](Self::append_narration) is
/// held open until the next step arrives, whose id then becomes its `next`.
/// Choice targets may point at steps that are appended later; they are only
/// checked by [`build`](Self::build), which reports every unresolved link at once.
///
/// ```rust
/// use lessonflow::prelude::*;
///
/// let graph = FlowBuilder::new()
///     .append_narration("title", "At the end of this lesson...", None)?
///     .append_knowledge_check("loop", "Do you know loops?", "final", "A loop repeats.", "final")?
///     .append_terminal("final", "Well done!")?
///     .build()?;
///
/// assert_eq!(graph.entry_id(), Some("title"));
/// assert_eq!(graph.all_outgoing_ids("title")?, vec!["loop-check"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct FlowBuilder {
    graph: FlowGraph,
    pending: Option<String>,
    entry: Option<String>,
}

impl FlowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the entry step. Defaults to the first appended step; checked at build time.
    pub fn with_entry(mut self, id: impl Into<String>) -> Self {
        self.entry = Some(id.into());
        self
    }

    /// Appends a narration whose `next` is wired to whichever step is appended after it.
    pub fn append_narration(
        self,
        id: impl Into<String>,
        body: impl Into<String>,
        code_example: Option<String>,
    ) -> Result<Self, FlowError> {
        let id = id.into();
        let body = require_body(&id, body.into())?;
        let step = Step::from_parts(id, StepKind::Narration { next: None }, body, code_example)?;
        let mut builder = self.push(step)?;
        builder.pending = builder.graph.steps().last().map(|s| s.id.clone());
        Ok(builder)
    }

    /// Appends a narration with an explicit `next`. It does not take part in lazy wiring.
    pub fn append_narration_to(
        self,
        id: impl Into<String>,
        body: impl Into<String>,
        next: impl Into<String>,
        code_example: Option<String>,
    ) -> Result<Self, FlowError> {
        let step = Step::narration(id, body, next, code_example)?;
        self.push(step)
    }

    /// Appends a choice step. Targets may reference steps that do not exist yet.
    pub fn append_choice<I, O>(
        self,
        id: impl Into<String>,
        body: impl Into<String>,
        options: I,
    ) -> Result<Self, FlowError>
    where
        I: IntoIterator<Item = O>,
        O: Into<ChoiceOption>,
    {
        let step = Step::choice(id, body, options)?;
        self.push(step)
    }

    /// Appends a terminal step, closing any open narration chain.
    pub fn append_terminal(
        self,
        id: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, FlowError> {
        let step = Step::terminal(id, body)?;
        self.push(step)
    }

    /// Appends the check/explain pair used for every prerequisite concept:
    ///
    /// * `{concept_id}-check`: a choice with "Yes" → `yes_target` and
    ///   "No" → `{concept_id}-explanation`.
    /// * `{concept_id}-explanation`: a narration continuing to `explanation_next`.
    pub fn append_knowledge_check(
        self,
        concept_id: &str,
        question: impl Into<String>,
        yes_target: impl Into<String>,
        explanation_body: impl Into<String>,
        explanation_next: impl Into<String>,
    ) -> Result<Self, FlowError> {
        let check_id = format!("{}-check", concept_id);
        let explanation_id = format!("{}-explanation", concept_id);

        self.append_choice(
            check_id,
            question,
            [
                ChoiceOption::new("Yes", yes_target),
                ChoiceOption::new("No", explanation_id.clone()),
            ],
        )?
        .append_narration_to(explanation_id, explanation_body, explanation_next, None)
    }

    /// Resolves the open narration chain and checks that every link lands on a step.
    ///
    /// All dangling references are collected before failing. A narration still
    /// open at this point keeps no successor; the validator reports it as a dead end.
    pub fn build(self) -> Result<FlowGraph, BuildError> {
        let FlowBuilder {
            mut graph,
            pending,
            entry,
        } = self;

        if let Some(open) = pending {
            warn!("Narration '{}' has no following step and stays unlinked", open);
        }

        let dangling: Vec<DanglingReference> = graph
            .steps()
            .flat_map(|step| {
                step.outgoing_ids()
                    .into_iter()
                    .filter(|target| !graph.contains(target))
                    .map(|target| DanglingReference::new(&step.id, target))
                    .collect::<Vec<_>>()
            })
            .collect();
        if !dangling.is_empty() {
            return Err(BuildError::DanglingReferences(dangling));
        }

        let entry = match entry {
            Some(id) => id,
            None => graph
                .steps()
                .next()
                .map(|s| s.id.clone())
                .ok_or(FlowError::EmptyFlow)?,
        };
        graph.set_entry(&entry)?;

        info!(
            "Built lesson flow with {} steps (entry '{}')",
            graph.len(),
            entry
        );
        Ok(graph)
    }

    /// Adds a step and points the open narration, if any, at it.
    fn push(mut self, step: Step) -> Result<Self, FlowError> {
        let id = step.id.clone();
        debug!("Appending {}", step);
        self.graph.add_step(step)?;

        if let Some(open) = self.pending.take() {
            debug!("Linking narration '{}' -> '{}'", open, id);
            if let StepKind::Narration { next } = &mut self.graph.get_step_mut(&open)?.kind {
                *next = Some(id);
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_narration_links_to_choice() {
        let graph = FlowBuilder::new()
            .append_narration("intro", "Hi", None)
            .unwrap()
            .append_choice("pick", "Which?", [("end", "end")])
            .unwrap()
            .append_terminal("end", "Bye")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(graph.all_outgoing_ids("intro").unwrap(), vec!["pick"]);
    }

    #[test]
    fn test_invalid_step_is_reported_from_append() {
        let builder = FlowBuilder::new()
            .append_narration("intro", "Hi", None)
            .unwrap();
        let err = builder
            .append_terminal("", "Bye")
            .map(|_| ())
            .unwrap_err();
        assert!(matches!(err, FlowError::InvalidStep(_)));
    }

    #[test]
    fn test_unknown_entry_fails_build() {
        let result = FlowBuilder::new()
            .append_terminal("end", "Bye")
            .unwrap()
            .with_entry("start")
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::Flow(FlowError::UnknownStep("start".to_string()))
        );
    }

    #[test]
    fn test_empty_builder_fails() {
        assert_eq!(
            FlowBuilder::new().build().unwrap_err(),
            BuildError::Flow(FlowError::EmptyFlow)
        );
    }
}
