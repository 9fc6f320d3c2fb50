use mastery_db::service::MasteryService;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `mastery dashboard`.
pub async fn handle(service: &MasteryService, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = service.dashboard().await?;
    output(&snapshot, flags.format)
}
