//! Record structs for the three workspace collections.
//!
//! Each record maps to one table in the libSQL store. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`; the serialized form is the
//! "read" shape used by list responses and workspace export.

mod habit;
mod journal;
mod stream;

pub use habit::Habit;
pub use journal::JournalEntry;
pub use stream::{LearningStream, clamp_completed};
