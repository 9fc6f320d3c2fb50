use anyhow::Context;

use mastery_config::MasteryConfig;
use mastery_db::service::MasteryService;

use crate::cli::root_commands::ServeArgs;

/// Handle `mastery serve`.
pub async fn handle(
    args: &ServeArgs,
    service: MasteryService,
    config: &MasteryConfig,
) -> anyhow::Result<()> {
    let mut server = config.server.clone();
    if let Some(host) = &args.host {
        server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        server.port = port;
    }

    let addr = server.socket_addr()?;
    mastery_api::serve(service, addr)
        .await
        .with_context(|| format!("server on {addr} stopped"))
}
