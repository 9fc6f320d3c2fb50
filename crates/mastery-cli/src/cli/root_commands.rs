use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use super::subcommands::{HabitCommands, JournalCommands, StreamCommands};

/// Root command set for `mastery`.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Manage learning streams.
    Stream {
        #[command(subcommand)]
        action: StreamCommands,
    },
    /// Manage habits.
    Habit {
        #[command(subcommand)]
        action: HabitCommands,
    },
    /// Manage journal entries.
    Journal {
        #[command(subcommand)]
        action: JournalCommands,
    },
    /// Show the dashboard snapshot.
    Dashboard,
    /// Export the whole workspace as JSON.
    Export(ExportArgs),
    /// Replace the whole workspace from a JSON document.
    Import(ImportArgs),
    /// Print the JSON Schema of a workspace document.
    Schema(SchemaArgs),
    /// Serve the HTTP API.
    Serve(ServeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Write the document here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Document to import; `-` reads stdin.
    pub file: PathBuf,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaDocument {
    Import,
    Export,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub document: SchemaDocument,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Override `server.host`.
    #[arg(long)]
    pub host: Option<String>,
    /// Override `server.port`.
    #[arg(long)]
    pub port: Option<u16>,
}
