//! Common test utilities for building lesson flows and lesson files.
use lessonflow::prelude::*;

/// Builds the three-step linear lesson `a -> b -> c(terminal)`.
#[allow(dead_code)]
pub fn create_linear_flow() -> FlowGraph {
    FlowBuilder::new()
        .append_narration("a", "First", None)
        .and_then(|b| b.append_narration("b", "Second", None))
        .and_then(|b| b.append_terminal("c", "Done"))
        .expect("Failed to append steps")
        .build()
        .expect("Failed to build linear flow")
}

/// A challenge record as produced by the markdown bank parser.
#[allow(dead_code)]
pub fn create_challenge() -> ChallengeSource {
    ChallengeSource {
        number: Some("8".to_string()),
        title: "Component Input".to_string(),
        difficulty: Difficulty::Junior,
        time_estimate: "12 minutes".to_string(),
        tested_concepts: "@Input decorator, parent-child communication".to_string(),
        challenge_text: "Create a child component that receives a name from its parent.".to_string(),
        solution_text: "@Input() name!: string;".to_string(),
    }
}

/// A hand-authored lesson file with a check/explain loop and a broken link.
#[allow(dead_code)]
pub const BROKEN_LESSON_JSON: &str = r#"{
  "id": "react-1-hello-world",
  "title": "Hello World",
  "technology": "React",
  "difficulty": "junior",
  "language": "javascript",
  "status": "draft",
  "metadata": { "time_estimate": "10 minutes", "challenge_number": "1" },
  "flow": [
    { "stepId": "title", "mentorSays": "Welcome", "action": "continue", "next": "jsx-check-js" },
    {
      "stepId": "jsx-check-js",
      "mentorSays": "Do you know JSX?",
      "choices": [
        { "label": "Yes", "next": "coding-step-1-js" },
        { "label": "No", "next": "jsx-explanation-js" }
      ]
    },
    { "stepId": "jsx-explanation-js", "mentorSays": "JSX is HTML-like syntax.", "example": "<h1>Hi</h1>", "action": "continue", "next": "jsx-check-js" },
    { "stepId": "coding-step-1-js", "mentorSays": "Write the component.", "action": "continue", "next": "coding-step-7-js" },
    { "stepId": "orphan", "mentorSays": "Never shown.", "action": "continue" },
    { "stepId": "final", "mentorSays": "Well done!" }
  ]
}"#;

/// A lesson file every check passes on.
#[allow(dead_code)]
pub const CLEAN_LESSON_JSON: &str = r#"{
  "id": "python-2-two-sum",
  "title": "Two Sum",
  "technology": "Python",
  "difficulty": "mid",
  "language": "python",
  "status": "published",
  "metadata": {},
  "flow": [
    { "stepId": "title", "mentorSays": "Welcome", "action": "continue", "next": "final" },
    { "stepId": "final", "mentorSays": "Bye" }
  ]
}"#;

/// A lesson in the shape the lesson generators write: every non-choice step
/// carries `"action": "continue"`, and the closing step has no `next`.
#[allow(dead_code)]
pub const GENERATED_LESSON_JSON: &str = r#"{
  "id": "javascript-1-reverse-a-string",
  "title": "Reverse a String",
  "technology": "JavaScript",
  "difficulty": "junior",
  "language": "javascript",
  "status": "draft",
  "metadata": { "time_estimate": "5 minutes", "tests": "strings", "challenge_number": "1" },
  "flow": [
    { "stepId": "title", "mentorSays": "Let's reverse a string.", "action": "continue", "next": "problem-illustration" },
    { "stepId": "problem-illustration", "mentorSays": "Given 'abc', return 'cba'.", "action": "continue" },
    { "stepId": "coding-start-js", "mentorSays": "Split, reverse, join.", "example": "s.split('').reverse().join('')", "action": "continue", "next": "final" },
    { "stepId": "final", "mentorSays": "Great job!", "action": "continue" }
  ]
}"#;
