use mastery_core::input::JournalDraft;
use mastery_db::service::MasteryService;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::JournalCommands;
use crate::commands::{require, require_deleted};
use crate::output::output;

const ENTITY: &str = "journal entry";

/// Handle `mastery journal`.
pub async fn handle(
    action: &JournalCommands,
    service: &MasteryService,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        JournalCommands::Create {
            title,
            reflection,
            mood,
        } => {
            let draft = JournalDraft {
                title: title.clone(),
                reflection: Some(reflection.clone()),
                mood: mood.clone(),
            };
            output(&service.create_journal_entry(&draft).await?, flags.format)
        }
        JournalCommands::List => output(&service.list_journal_entries().await?, flags.format),
        JournalCommands::Get { id } => {
            let entry = require(service.get_journal_entry(*id).await?, ENTITY, *id)?;
            output(&entry, flags.format)
        }
        JournalCommands::Delete { id } => {
            let deleted = require_deleted(service.delete_journal_entry(*id).await?, ENTITY, *id)?;
            output(&deleted, flags.format)
        }
    }
}
