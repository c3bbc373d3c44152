use crate::graph::FlowGraph;
use ahash::AHashSet;
use itertools::Itertools;
use std::collections::VecDeque;
use std::fmt;

/// A link from `step_id` to a `target_id` that is not in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DanglingReference {
    pub step_id: String,
    pub target_id: String,
}

impl DanglingReference {
    pub fn new(step_id: &str, target_id: &str) -> Self {
        Self {
            step_id: step_id.to_string(),
            target_id: target_id.to_string(),
        }
    }
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' -> '{}'", self.step_id, self.target_id)
    }
}

/// Findings of a static pass over a `FlowGraph`. None of them are fatal on their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Links whose target does not exist, in step order.
    pub dangling_references: Vec<DanglingReference>,
    /// Steps that cannot be reached from the entry step, in step order.
    pub unreachable_steps: Vec<String>,
    /// Narration or choice steps with no outgoing link at all.
    pub non_terminal_dead_ends: Vec<String>,
}

impl ValidationReport {
    /// True when all three finding lists are empty.
    pub fn is_valid(&self) -> bool {
        self.dangling_references.is_empty()
            && self.unreachable_steps.is_empty()
            && self.non_terminal_dead_ends.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.dangling_references.len()
            + self.unreachable_steps.len()
            + self.non_terminal_dead_ends.len()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "OK");
        }
        let mut sections = Vec::new();
        if !self.dangling_references.is_empty() {
            sections.push(format!(
                "dangling references: {}",
                self.dangling_references.iter().join(", ")
            ));
        }
        if !self.unreachable_steps.is_empty() {
            sections.push(format!(
                "unreachable steps: {}",
                self.unreachable_steps.join(", ")
            ));
        }
        if !self.non_terminal_dead_ends.is_empty() {
            sections.push(format!(
                "non-terminal dead ends: {}",
                self.non_terminal_dead_ends.join(", ")
            ));
        }
        write!(f, "{}", sections.join("; "))
    }
}

/// Static analysis over finished graphs, including ones loaded from disk.
pub struct Validator;

impl Validator {
    /// Runs every check and collects the findings. Never fails.
    pub fn validate(graph: &FlowGraph) -> ValidationReport {
        let mut report = ValidationReport::default();

        for step in graph.steps() {
            let targets = step.outgoing_ids();
            if targets.is_empty() && !step.is_terminal() {
                report.non_terminal_dead_ends.push(step.id.clone());
            }
            report.dangling_references.extend(
                targets
                    .into_iter()
                    .filter(|target| !graph.contains(target))
                    .map(|target| DanglingReference::new(&step.id, target)),
            );
        }

        let reachable = Self::reachable_from_entry(graph);
        report.unreachable_steps = graph
            .steps()
            .filter(|s| !reachable.contains(s.id.as_str()))
            .map(|s| s.id.clone())
            .collect();

        report
    }

    /// Breadth-first walk from the entry step. The visited set bounds it on cyclic graphs.
    fn reachable_from_entry(graph: &FlowGraph) -> AHashSet<&str> {
        let mut visited = AHashSet::new();
        let Some(entry) = graph.entry_id().filter(|id| graph.contains(id)) else {
            return visited;
        };

        let mut queue = VecDeque::from([entry]);
        visited.insert(entry);
        while let Some(id) = queue.pop_front() {
            let Ok(step) = graph.get_step(id) else {
                continue;
            };
            for target in step.outgoing_ids() {
                if graph.contains(target) && visited.insert(target) {
                    queue.push_back(target);
                }
            }
        }
        visited
    }
}
