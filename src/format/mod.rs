//! The lesson JSON file format.
//!
//! A lesson file is the shape consumed by the mentor player:
//!
//! ```json
//! {
//!   "id": "react-1-hello-world",
//!   "title": "Hello World",
//!   "technology": "React",
//!   "difficulty": "junior",
//!   "language": "javascript",
//!   "status": "draft",
//!   "metadata": { "time_estimate": "10" },
//!   "flow": [
//!     { "stepId": "title", "mentorSays": "...", "action": "continue", "next": "final" },
//!     { "stepId": "final", "mentorSays": "Well done!" }
//!   ]
//! }
//! ```
//!
//! Loading never rejects broken links; run the [`Validator`](crate::validator::Validator)
//! on the result instead.

pub mod conversion;
pub mod raw;

pub use conversion::*;
pub use raw::*;

use crate::error::FormatError;
use crate::lesson::Lesson;
use log::info;
use std::fs;
use std::path::Path;

impl Lesson {
    /// Parses a lesson from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        let raw: RawLesson = serde_json::from_str(json)?;
        Lesson::try_from(raw)
    }

    /// Serializes the lesson as pretty-printed JSON, steps in insertion order.
    pub fn to_json(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(&RawLesson::from(self))?)
    }

    /// Loads a lesson file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FormatError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| FormatError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Writes the lesson to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FormatError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| FormatError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        info!("Wrote lesson '{}' to '{}'", self.id, path.display());
        Ok(())
    }
}
