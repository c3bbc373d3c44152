//! Prelude module for convenient imports
//!
//! Re-exports the types needed to author, load and check lesson flows.
//!
//! # Example
//!
//! ```rust,no_run
//! use lessonflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let lesson = Lesson::from_file("lessons/react-1-hello-world.json")?;
//! let report = Validator::validate(&lesson.flow);
//! if !report.is_valid() {
//!     eprintln!("Warning: {}", report);
//! }
//! println!("{}", LessonStats::from_lesson(&lesson));
//! # Ok(())
//! # }
//! ```

// Flow model and construction
pub use crate::builder::FlowBuilder;
pub use crate::graph::FlowGraph;
pub use crate::step::{ChoiceOption, Step, StepKind};

// Static analysis
pub use crate::validator::{DanglingReference, ValidationReport, Validator};

// Lesson envelope and file format
pub use crate::format::IntoFlow;
pub use crate::lesson::{ChallengeSource, Difficulty, Lesson, LessonStatus};
pub use crate::scaffold::LessonScaffold;
pub use crate::stats::LessonStats;

// Error types
pub use crate::error::{BuildError, FlowError, FormatError, StepError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
