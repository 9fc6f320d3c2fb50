use anyhow::Context;

use mastery_config::MasteryConfig;
use mastery_db::service::MasteryService;

use crate::cli::GlobalFlags;

/// Load configuration, honoring `--config` when given.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<MasteryConfig> {
    match &flags.config {
        Some(path) => {
            let _ = dotenvy::dotenv();
            MasteryConfig::load_from_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))
        }
        None => MasteryConfig::load_with_dotenv().context("failed to load configuration"),
    }
}

/// Open the store named by `database.path`, seeding demo data when enabled.
pub async fn open_service(config: &MasteryConfig) -> anyhow::Result<MasteryService> {
    let path = &config.database.path;
    if config.database.is_in_memory() {
        tracing::warn!("database.path is {path}; records are discarded on exit");
    }
    let service = MasteryService::new_local(path)
        .await
        .with_context(|| format!("failed to open mastery store at {path}"))?;

    if config.general.seed_demo_data {
        service
            .seed_demo_data()
            .await
            .context("failed to seed demo data")?;
    }
    Ok(service)
}
