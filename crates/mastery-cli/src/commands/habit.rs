use mastery_core::input::HabitDraft;
use mastery_db::service::MasteryService;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HabitCommands;
use crate::commands::{require, require_deleted};
use crate::output::output;

const ENTITY: &str = "habit";

/// Handle `mastery habit`.
pub async fn handle(
    action: &HabitCommands,
    service: &MasteryService,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        HabitCommands::Create {
            name,
            cadence,
            context,
        } => {
            let draft = HabitDraft {
                name: Some(name.clone()),
                cadence: cadence.clone(),
                context: context.clone(),
            };
            output(&service.create_habit(&draft).await?, flags.format)
        }
        HabitCommands::List => output(&service.list_habits().await?, flags.format),
        HabitCommands::Get { id } => {
            let habit = require(service.get_habit(*id).await?, ENTITY, *id)?;
            output(&habit, flags.format)
        }
        HabitCommands::CheckIn { id } => {
            let habit = require(service.toggle_habit_check_in(*id).await?, ENTITY, *id)?;
            output(&habit, flags.format)
        }
        HabitCommands::Delete { id } => {
            let deleted = require_deleted(service.delete_habit(*id).await?, ENTITY, *id)?;
            output(&deleted, flags.format)
        }
    }
}
