pub mod habit;
pub mod journal;
pub mod stream;

pub use habit::HabitCommands;
pub use journal::JournalCommands;
pub use stream::StreamCommands;
