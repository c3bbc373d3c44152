//! Tests for incremental flow construction.
mod common;
use lessonflow::prelude::*;

#[test]
fn test_lazy_next_resolution() {
    let graph = common::create_linear_flow();
    assert_eq!(graph.entry_id(), Some("a"));
    assert_eq!(
        graph.get_step("a").unwrap().kind,
        StepKind::Narration {
            next: Some("b".to_string())
        }
    );
    assert_eq!(graph.all_outgoing_ids("b").unwrap(), vec!["c"]);
}

#[test]
fn test_knowledge_check_appends_two_steps() {
    let graph = FlowBuilder::new()
        .append_knowledge_check(
            "variable",
            "Do you know what a variable is?",
            "function-check",
            "A variable is a named box for a value.",
            "function-check",
        )
        .unwrap()
        .append_terminal("function-check", "Placeholder")
        .unwrap()
        .build()
        .expect("Failed to build");

    assert_eq!(graph.len(), 3);

    let check = graph.get_step("variable-check").unwrap();
    match &check.kind {
        StepKind::Choice { options } => {
            assert_eq!(options.len(), 2);
            assert_eq!(options[0], ChoiceOption::new("Yes", "function-check"));
            assert_eq!(options[1], ChoiceOption::new("No", "variable-explanation"));
        }
        other => panic!("Expected a choice step, got {:?}", other),
    }

    let explanation = graph.get_step("variable-explanation").unwrap();
    assert_eq!(
        explanation.kind,
        StepKind::Narration {
            next: Some("function-check".to_string())
        }
    );
}

#[test]
fn test_dangling_reference_reported_at_build() {
    let result = FlowBuilder::new()
        .append_narration_to("a", "Hello", "ghost", None)
        .unwrap()
        .build();

    let err = result.expect_err("Build should fail");
    assert_eq!(
        err.dangling_references(),
        &[DanglingReference::new("a", "ghost")]
    );
    assert!(err.to_string().contains("'a' -> 'ghost'"));
}

#[test]
fn test_build_collects_every_dangling_reference() {
    let err = FlowBuilder::new()
        .append_choice("pick", "Which?", [("One", "missing-1"), ("Two", "end")])
        .unwrap()
        .append_narration_to("detour", "Detour", "missing-2", None)
        .unwrap()
        .append_terminal("end", "Bye")
        .unwrap()
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        BuildError::DanglingReferences(vec![
            DanglingReference::new("pick", "missing-1"),
            DanglingReference::new("detour", "missing-2"),
        ])
    );
}

#[test]
fn test_forward_choice_targets_resolve() {
    let graph = FlowBuilder::new()
        .append_choice("start", "Ready?", [("Go", "later")])
        .unwrap()
        .append_terminal("later", "Appended after the choice")
        .unwrap()
        .build()
        .expect("Forward references should resolve at build time");
    assert_eq!(graph.len(), 2);
}

#[test]
fn test_duplicate_append_fails_immediately() {
    let result = FlowBuilder::new()
        .append_narration("a", "One", None)
        .unwrap()
        .append_terminal("a", "Two");
    assert!(matches!(result, Err(FlowError::DuplicateStepId(id)) if id == "a"));
}

#[test]
fn test_trailing_narration_stays_unlinked() {
    let graph = FlowBuilder::new()
        .append_terminal("end", "Bye")
        .unwrap()
        .append_narration("after", "Nothing follows", None)
        .unwrap()
        .build()
        .expect("An open narration is not a dangling reference");
    assert!(graph.all_outgoing_ids("after").unwrap().is_empty());
}

#[test]
fn test_explicit_entry() {
    let graph = FlowBuilder::new()
        .append_terminal("end", "Bye")
        .unwrap()
        .append_narration_to("start", "Hi", "end", None)
        .unwrap()
        .with_entry("start")
        .build()
        .unwrap();
    assert_eq!(graph.entry_id(), Some("start"));
}

#[test]
fn test_built_flows_have_no_dangling_references() {
    let graph = FlowBuilder::new()
        .append_narration("intro", "Hi", None)
        .unwrap()
        .append_knowledge_check("loop", "Loops?", "end", "Loops repeat.", "loop-check")
        .unwrap()
        .append_terminal("end", "Bye")
        .unwrap()
        .build()
        .unwrap();
    assert!(Validator::validate(&graph).dangling_references.is_empty());
}
