//! Canonical lesson skeleton.
//!
//! Every generated lesson walks the same path: learning goals, a problem
//! walkthrough, a thinking challenge branching into candidate approaches, the
//! optimal approach, language selection, one knowledge check per prerequisite
//! concept, the incremental coding steps, a test step and a closing step.
//! [`LessonScaffold`] emits that path through [`FlowBuilder`] so the result is
//! always link-checked.

use crate::builder::FlowBuilder;
use crate::error::BuildError;
use crate::graph::FlowGraph;
use crate::lesson::{ChallengeSource, Lesson};
use crate::step::ChoiceOption;

/// A prerequisite checked before coding starts.
#[derive(Debug, Clone)]
pub struct Concept {
    pub id: String,
    pub question: String,
    pub explanation: String,
}

/// One increment of the solution.
#[derive(Debug, Clone)]
pub struct CodingStep {
    pub instruction: String,
    pub code: Option<String>,
}

/// Assembles the standard lesson flow for one challenge and one language.
#[derive(Debug, Clone)]
pub struct LessonScaffold {
    challenge: ChallengeSource,
    /// Short language tag appended to per-language step ids, e.g. `js`.
    suffix: String,
    language_name: String,
    approaches: Vec<(String, String)>,
    concepts: Vec<Concept>,
    coding_steps: Vec<CodingStep>,
    test_code: Option<String>,
}

impl LessonScaffold {
    pub fn new(challenge: ChallengeSource, suffix: &str) -> Self {
        Self {
            challenge,
            suffix: suffix.to_string(),
            language_name: suffix.to_string(),
            approaches: Vec::new(),
            concepts: Vec::new(),
            coding_steps: Vec::new(),
            test_code: None,
        }
    }

    /// Display name of the language used in mentor text. Defaults to the suffix.
    pub fn with_language_name(mut self, name: &str) -> Self {
        self.language_name = name.to_string();
        self
    }

    /// Adds a non-optimal approach offered by the thinking challenge.
    pub fn with_approach(mut self, label: &str, explanation: &str) -> Self {
        self.approaches
            .push((label.to_string(), explanation.to_string()));
        self
    }

    /// Adds a knowledge check. Checks are asked in the order they are added.
    pub fn with_concept(mut self, id: &str, question: &str, explanation: &str) -> Self {
        self.concepts.push(Concept {
            id: id.to_string(),
            question: question.to_string(),
            explanation: explanation.to_string(),
        });
        self
    }

    pub fn with_coding_step(mut self, instruction: &str, code: Option<&str>) -> Self {
        self.coding_steps.push(CodingStep {
            instruction: instruction.to_string(),
            code: code.map(str::to_string),
        });
        self
    }

    pub fn with_test_code(mut self, code: &str) -> Self {
        self.test_code = Some(code.to_string());
        self
    }

    fn lang_id(&self, base: &str) -> String {
        format!("{}-{}", base, self.suffix)
    }

    /// Builds the flow graph. The entry step is `title`.
    pub fn build_flow(&self) -> Result<FlowGraph, BuildError> {
        let challenge = &self.challenge;
        let coding_start = self.lang_id("coding-start");

        let mut builder = FlowBuilder::new()
            .append_narration(
                "title",
                format!(
                    "At the end of this lesson, you will be able to solve \"{}\".\n\nThis challenge tests: {}\nTime estimate: {}",
                    challenge.title, challenge.tested_concepts, challenge.time_estimate
                ),
                None,
            )?
            .append_narration(
                "problem-illustration",
                format!("Let's understand the problem first.\n\n{}", challenge.challenge_text),
                Some(challenge.challenge_text.clone()),
            )?;

        let mut options: Vec<ChoiceOption> = self
            .approaches
            .iter()
            .enumerate()
            .map(|(i, (label, _))| ChoiceOption::new(label.as_str(), format!("explore-approach-{}", i + 1)))
            .collect();
        options.push(ChoiceOption::new("Show me the optimal approach", "explore-optimal"));
        options.push(ChoiceOption::new("I need more context", "problem-illustration"));
        builder = builder.append_choice(
            "thinking-challenge",
            "How would YOU solve this? Pick the approach you would start with.",
            options,
        )?;

        for (i, (_, explanation)) in self.approaches.iter().enumerate() {
            builder = builder.append_narration_to(
                format!("explore-approach-{}", i + 1),
                explanation.as_str(),
                "explore-optimal",
                None,
            )?;
        }

        builder = builder
            .append_narration(
                "explore-optimal",
                "Here is the optimal solution. We will build it step by step.",
                Some(challenge.solution_text.clone()),
            )?
            .append_narration(
                "language-selection",
                format!("We will write this solution in {}.", self.language_name),
                None,
            )?;

        for (i, concept) in self.concepts.iter().enumerate() {
            let continue_to = match self.concepts.get(i + 1) {
                Some(following) => format!("{}-check", self.lang_id(&following.id)),
                None => coding_start.clone(),
            };
            builder = builder.append_knowledge_check(
                &self.lang_id(&concept.id),
                concept.question.as_str(),
                continue_to.as_str(),
                concept.explanation.as_str(),
                continue_to.as_str(),
            )?;
        }

        builder = builder.append_narration(
            coding_start,
            format!("Let's start coding in {}, one concept at a time.", self.language_name),
            None,
        )?;
        for (i, step) in self.coding_steps.iter().enumerate() {
            builder = builder.append_narration(
                self.lang_id(&format!("coding-step-{}", i + 1)),
                step.instruction.as_str(),
                step.code.clone(),
            )?;
        }

        builder
            .append_narration(
                self.lang_id("test-code"),
                "Now let's test the solution against a few cases.",
                self.test_code.clone(),
            )?
            .append_terminal(
                "final",
                format!("Congratulations! You solved \"{}\".", challenge.title),
            )?
            .build()
    }

    /// Builds the flow and wraps it in a draft lesson.
    pub fn build_lesson(&self, technology: &str, language: &str) -> Result<Lesson, BuildError> {
        let flow = self.build_flow()?;
        Ok(Lesson::from_challenge(&self.challenge, technology, language, flow))
    }
}
