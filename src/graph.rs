use crate::error::FlowError;
use crate::step::Step;
use ahash::AHashMap;

/// The directed graph of steps composing one lesson.
///
/// Steps are kept in the order they were added, since consumers render them in
/// authored order even though traversal follows the links. The graph may contain
/// cycles (an explanation looping back to its check is common).
#[derive(Debug, Clone, Default)]
pub struct FlowGraph {
    steps: Vec<Step>,
    index: AHashMap<String, usize>,
    entry_id: Option<String>,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step, failing if its id is already taken.
    pub fn add_step(&mut self, step: Step) -> Result<(), FlowError> {
        if self.index.contains_key(&step.id) {
            return Err(FlowError::DuplicateStepId(step.id));
        }
        self.index.insert(step.id.clone(), self.steps.len());
        self.steps.push(step);
        Ok(())
    }

    /// Marks an existing step as the one a lesson starts on.
    pub fn set_entry(&mut self, id: &str) -> Result<(), FlowError> {
        if !self.contains(id) {
            return Err(FlowError::UnknownStep(id.to_string()));
        }
        self.entry_id = Some(id.to_string());
        Ok(())
    }

    pub fn get_step(&self, id: &str) -> Result<&Step, FlowError> {
        self.index
            .get(id)
            .map(|&i| &self.steps[i])
            .ok_or_else(|| FlowError::UnknownStep(id.to_string()))
    }

    pub(crate) fn get_step_mut(&mut self, id: &str) -> Result<&mut Step, FlowError> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.steps[i]),
            None => Err(FlowError::UnknownStep(id.to_string())),
        }
    }

    /// Ids the given step links to, in option order for choices.
    pub fn all_outgoing_ids(&self, id: &str) -> Result<Vec<&str>, FlowError> {
        self.get_step(id).map(Step::outgoing_ids)
    }

    pub fn entry_id(&self) -> Option<&str> {
        self.entry_id.as_deref()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Steps in insertion order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outgoing_ids_per_kind() {
        let mut graph = FlowGraph::new();
        graph
            .add_step(Step::narration("a", "A", "b", None).unwrap())
            .unwrap();
        graph
            .add_step(Step::choice("b", "B?", [("yes", "c"), ("no", "a")]).unwrap())
            .unwrap();
        graph.add_step(Step::terminal("c", "C").unwrap()).unwrap();

        assert_eq!(graph.all_outgoing_ids("a").unwrap(), vec!["b"]);
        assert_eq!(graph.all_outgoing_ids("b").unwrap(), vec!["c", "a"]);
        assert!(graph.all_outgoing_ids("c").unwrap().is_empty());
        assert_eq!(
            graph.all_outgoing_ids("zzz"),
            Err(FlowError::UnknownStep("zzz".to_string()))
        );
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut graph = FlowGraph::new();
        for id in ["z", "m", "a"] {
            graph.add_step(Step::terminal(id, "end").unwrap()).unwrap();
        }
        let ids: Vec<_> = graph.steps().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "m", "a"]);
    }
}
