use clap::Subcommand;

/// Learning stream commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StreamCommands {
    /// Create a learning stream.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        focus: Option<String>,
        /// Total milestones (default 1).
        #[arg(long)]
        total: Option<String>,
        /// Milestones already completed (default 0, clamped to total).
        #[arg(long)]
        completed: Option<String>,
        /// Swatch color; drawn from the palette when omitted.
        #[arg(long)]
        color: Option<String>,
    },
    /// List learning streams, newest first.
    List,
    /// Get a learning stream by ID.
    Get { id: i64 },
    /// Shift completed milestones by a delta.
    Progress {
        id: i64,
        #[arg(long, allow_hyphen_values = true)]
        delta: i64,
    },
    /// Delete a learning stream.
    Delete { id: i64 },
}
