//! Tests for step construction.
mod common;
use lessonflow::prelude::*;

#[test]
fn test_narration_construction() {
    let step = Step::narration("intro", "Hello", "next", Some("let x = 1;".to_string()))
        .expect("Failed to create narration");
    assert_eq!(step.id, "intro");
    assert_eq!(step.outgoing_ids(), vec!["next"]);
    assert_eq!(step.code_example.as_deref(), Some("let x = 1;"));
}

#[test]
fn test_narration_rejects_empty_id_and_next() {
    assert!(matches!(
        Step::narration("", "Hello", "next", None),
        Err(StepError::InvalidStep { .. })
    ));
    assert!(matches!(
        Step::narration("intro", "Hello", "", None),
        Err(StepError::InvalidStep { .. })
    ));
}

#[test]
fn test_choice_with_zero_options_is_invalid() {
    let result = Step::choice("pick", "Which one?", Vec::<ChoiceOption>::new());
    match result {
        Err(StepError::InvalidStep { step_id, reason }) => {
            assert_eq!(step_id, "pick");
            assert!(reason.contains("at least one option"));
        }
        other => panic!("Expected InvalidStep, got {:?}", other),
    }
}

#[test]
fn test_choice_keeps_option_order() {
    let step = Step::choice(
        "pick",
        "Which one?",
        [("Third", "c"), ("First", "a"), ("Second", "b")],
    )
    .unwrap();
    assert_eq!(step.outgoing_ids(), vec!["c", "a", "b"]);
}

#[test]
fn test_terminal_has_no_outgoing_ids() {
    let step = Step::terminal("final", "Congratulations!").unwrap();
    assert!(step.is_terminal());
    assert!(step.outgoing_ids().is_empty());
}

#[test]
fn test_error_display() {
    let err = Step::terminal("", "Bye").unwrap_err();
    assert!(err.to_string().contains("must not be empty"));

    let flow_err: FlowError = err.into();
    assert!(flow_err.to_string().contains("must not be empty"));
}

#[test]
fn test_code_example_attaches_to_any_kind() {
    let step = Step::terminal("final", "Here is the full solution.")
        .unwrap()
        .with_code_example("fn main() {}");
    assert_eq!(step.code_example.as_deref(), Some("fn main() {}"));
    assert!(step.is_terminal());
}
