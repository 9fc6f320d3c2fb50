use clap::Subcommand;

/// Journal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum JournalCommands {
    /// Capture a reflection.
    Create {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        reflection: String,
        #[arg(long)]
        mood: Option<String>,
    },
    /// List journal entries, newest first.
    List,
    /// Get a journal entry by ID.
    Get { id: i64 },
    /// Delete a journal entry.
    Delete { id: i64 },
}
