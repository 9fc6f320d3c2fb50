use mastery_config::MasteryConfig;
use mastery_db::service::MasteryService;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    service: MasteryService,
    config: &MasteryConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Stream { action } => commands::stream::handle(&action, &service, flags).await,
        Commands::Habit { action } => commands::habit::handle(&action, &service, flags).await,
        Commands::Journal { action } => commands::journal::handle(&action, &service, flags).await,
        Commands::Dashboard => commands::dashboard::handle(&service, flags).await,
        Commands::Export(args) => commands::workspace::export(&args, &service, flags).await,
        Commands::Import(args) => commands::workspace::import(&args, &service, flags).await,
        Commands::Serve(args) => commands::serve::handle(&args, service, config).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
