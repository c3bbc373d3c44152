use crate::lesson::Lesson;
use std::fmt;

/// Step count at which a lesson gets the full step score.
const TARGET_STEPS: f64 = 25.0;
/// Knowledge check count at which a lesson gets the full check score.
const TARGET_CHECKS: f64 = 5.0;
/// Coding step count at which a lesson gets the full coding score.
const TARGET_CODING: f64 = 7.0;

/// Step id of the long-form problem walkthrough.
pub const PROBLEM_ILLUSTRATION_ID: &str = "problem-illustration";

/// Size and completeness figures for one lesson.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonStats {
    pub total_steps: usize,
    /// Steps whose id starts with `coding-`.
    pub coding_steps: usize,
    /// Steps whose id contains `check`.
    pub knowledge_checks: usize,
    /// Steps whose id contains `explanation`.
    pub explanations: usize,
    /// Words in the `problem-illustration` step, 0 if absent.
    pub illustration_words: usize,
    /// Lines of mentor text across the whole flow.
    pub total_lines: usize,
}

impl LessonStats {
    pub fn from_lesson(lesson: &Lesson) -> Self {
        let mut stats = LessonStats {
            total_steps: lesson.flow.len(),
            coding_steps: 0,
            knowledge_checks: 0,
            explanations: 0,
            illustration_words: 0,
            total_lines: 0,
        };

        for step in lesson.flow.steps() {
            if step.id.starts_with("coding-") {
                stats.coding_steps += 1;
            }
            if step.id.contains("check") {
                stats.knowledge_checks += 1;
            }
            if step.id.contains("explanation") {
                stats.explanations += 1;
            }
            if step.id == PROBLEM_ILLUSTRATION_ID {
                stats.illustration_words = step.body.split_whitespace().count();
            }
            stats.total_lines += step.body.split('\n').count();
        }
        stats
    }

    pub fn steps_score(&self) -> f64 {
        capped_percent(self.total_steps, TARGET_STEPS)
    }

    pub fn checks_score(&self) -> f64 {
        capped_percent(self.knowledge_checks, TARGET_CHECKS)
    }

    pub fn coding_score(&self) -> f64 {
        capped_percent(self.coding_steps, TARGET_CODING)
    }

    /// Weighted completeness out of 100: steps 40%, checks 30%, coding 30%.
    pub fn score(&self) -> f64 {
        self.steps_score() * 0.4 + self.checks_score() * 0.3 + self.coding_score() * 0.3
    }
}

fn capped_percent(count: usize, target: f64) -> f64 {
    (count as f64 / target * 100.0).min(100.0)
}

impl fmt::Display for LessonStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Total Steps: {}", self.total_steps)?;
        writeln!(f, "  Coding Steps: {}", self.coding_steps)?;
        writeln!(f, "  Knowledge Checks: {}", self.knowledge_checks)?;
        writeln!(f, "  Problem Illustration: ~{} words", self.illustration_words)?;
        writeln!(f, "  Total Lines (approx): ~{}", self.total_lines)?;
        writeln!(f, "  Scores:")?;
        writeln!(f, "    Steps: {:.1}/100", self.steps_score())?;
        writeln!(f, "    Checks: {:.1}/100", self.checks_score())?;
        writeln!(f, "    Coding: {:.1}/100", self.coding_score())?;
        write!(f, "    Final: {:.1}/100", self.score())
    }
}
