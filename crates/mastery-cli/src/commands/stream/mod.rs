mod create;

use mastery_db::service::MasteryService;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StreamCommands;
use crate::commands::{require, require_deleted};
use crate::output::output;

const ENTITY: &str = "stream";

/// Handle `mastery stream`.
pub async fn handle(
    action: &StreamCommands,
    service: &MasteryService,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StreamCommands::Create {
            name,
            focus,
            total,
            completed,
            color,
        } => {
            create::run(
                create::Args {
                    name,
                    focus: focus.as_deref(),
                    total: total.as_deref(),
                    completed: completed.as_deref(),
                    color: color.as_deref(),
                },
                service,
                flags,
            )
            .await
        }
        StreamCommands::List => output(&service.list_streams().await?, flags.format),
        StreamCommands::Get { id } => {
            let stream = require(service.get_stream(*id).await?, ENTITY, *id)?;
            output(&stream, flags.format)
        }
        StreamCommands::Progress { id, delta } => {
            let stream = require(service.update_stream_progress(*id, *delta).await?, ENTITY, *id)?;
            output(&stream, flags.format)
        }
        StreamCommands::Delete { id } => {
            let deleted = require_deleted(service.delete_stream(*id).await?, ENTITY, *id)?;
            output(&deleted, flags.format)
        }
    }
}
