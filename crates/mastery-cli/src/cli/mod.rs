use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `mastery` binary.
#[derive(Debug, Parser)]
#[command(
    name = "mastery",
    version,
    about = "Mastery tracker - learning streams, habits, and reflections"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file layered above the user and project config files
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{HabitCommands, StreamCommands};
    use super::{Cli, Commands, OutputFormat};
    use crate::cli::root_commands::SchemaDocument;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["mastery", "--format", "table", "--verbose", "dashboard"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["mastery", "dashboard", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["mastery", "--format", "xml", "dashboard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn stream_create_keeps_numbers_as_typed() {
        let cli = Cli::try_parse_from([
            "mastery", "stream", "create", "--name", "Rust", "--total", "six",
        ])
        .expect("cli should parse");

        let Commands::Stream {
            action: StreamCommands::Create { name, total, .. },
        } = cli.command
        else {
            panic!("expected stream create");
        };
        assert_eq!(name, "Rust");
        assert_eq!(total.as_deref(), Some("six"));
    }

    #[test]
    fn negative_progress_delta_parses() {
        let cli = Cli::try_parse_from(["mastery", "stream", "progress", "3", "--delta", "-2"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Stream {
                action: StreamCommands::Progress { id: 3, delta: -2 }
            }
        ));
    }

    #[test]
    fn habit_check_in_takes_an_id() {
        let cli = Cli::try_parse_from(["mastery", "habit", "check-in", "9"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Habit {
                action: HabitCommands::CheckIn { id: 9 }
            }
        ));
    }

    #[test]
    fn schema_requires_a_known_document() {
        let cli = Cli::try_parse_from(["mastery", "schema", "import"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Schema(ref args) if args.document == SchemaDocument::Import
        ));
        assert!(Cli::try_parse_from(["mastery", "schema", "dashboard"]).is_err());
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["mastery", "stream", "list", "--config", "/tmp/m.toml"])
            .expect("cli should parse");
        assert_eq!(
            cli.global_flags().config.as_deref(),
            Some(std::path::Path::new("/tmp/m.toml"))
        );
    }
}
