//! # Lessonflow - Mentor Lesson Flow Builder and Validator
//!
//! **Lessonflow** models the branching dialogue of an interactive coding lesson as a
//! directed graph of steps, and checks that graph before it is written to disk.
//!
//! ## Core Workflow
//!
//! 1.  **Author**: Append steps in lesson order with a [`FlowBuilder`](builder::FlowBuilder).
//!     Narrations are linked to whatever follows them; choices may point forward.
//! 2.  **Build**: `build()` resolves the links and fails with every dangling
//!     reference at once, so an authoring script can be fixed in one pass.
//! 3.  **Wrap**: Put the graph in a [`Lesson`](lesson::Lesson) with its metadata and
//!     save it as JSON.
//! 4.  **Validate**: Run the [`Validator`](validator::Validator) over any graph, including
//!     lessons loaded from existing files, to find dangling links, unreachable steps
//!     and narrations that lead nowhere.
//!
//! ## Quick Start
//!
//! ```rust
//! use lessonflow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let flow = FlowBuilder::new()
//!         .append_narration("title", "At the end of this lesson you will reverse a string.", None)?
//!         .append_knowledge_check(
//!             "loop-js",
//!             "Do you know how a for loop works in JavaScript?",
//!             "coding-start-js",
//!             "A for loop repeats a block while its condition holds.",
//!             "coding-start-js",
//!         )?
//!         .append_narration("coding-start-js", "Let's write the function.", Some("function reverse(s) {}".to_string()))?
//!         .append_terminal("final", "Well done!")?
//!         .build()?;
//!
//!     let report = Validator::validate(&flow);
//!     assert!(report.is_valid());
//!
//!     let challenge = ChallengeSource {
//!         number: Some("1".to_string()),
//!         title: "Reverse a String".to_string(),
//!         difficulty: Difficulty::Junior,
//!         time_estimate: "10 minutes".to_string(),
//!         tested_concepts: "loops, strings".to_string(),
//!         challenge_text: "Reverse the input string.".to_string(),
//!         solution_text: "return s.split('').reverse().join('');".to_string(),
//!     };
//!     let lesson = Lesson::from_challenge(&challenge, "JavaScript", "javascript", flow);
//!     assert_eq!(lesson.id, "javascript-1-reverse-a-string");
//!
//!     println!("{}", lesson.to_json()?);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod error;
pub mod format;
pub mod graph;
pub mod lesson;
pub mod prelude;
pub mod scaffold;
pub mod stats;
pub mod step;
pub mod validator;
