use clap::Subcommand;

/// Habit commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HabitCommands {
    /// Create a habit.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        cadence: Option<String>,
        #[arg(long)]
        context: Option<String>,
    },
    /// List habits, newest first.
    List,
    /// Get a habit by ID.
    Get { id: i64 },
    /// Toggle today's check-in.
    CheckIn { id: i64 },
    /// Delete a habit.
    Delete { id: i64 },
}
