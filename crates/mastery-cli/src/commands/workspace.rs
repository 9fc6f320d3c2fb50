use std::io::Read;
use std::path::Path;

use anyhow::Context;

use mastery_core::workspace::WorkspaceImport;
use mastery_db::repos::workspace::ImportSummary;
use mastery_db::service::MasteryService;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ExportArgs, ImportArgs};
use crate::output::output;

/// Handle `mastery export`.
pub async fn export(
    args: &ExportArgs,
    service: &MasteryService,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let document = service.export_workspace().await?;
    match &args.output {
        Some(path) => {
            let json = serde_json::to_string_pretty(&document)?;
            std::fs::write(path, json)
                .with_context(|| format!("failed to write export to {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote workspace export");
            Ok(())
        }
        None => output(&document, flags.format),
    }
}

/// Handle `mastery import`.
pub async fn import(
    args: &ImportArgs,
    service: &MasteryService,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let summary = import_file(&args.file, service).await?;
    output(&summary, flags.format)
}

async fn import_file(path: &Path, service: &MasteryService) -> anyhow::Result<ImportSummary> {
    let raw = read_document(path)?;
    let document: WorkspaceImport = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a workspace document", path.display()))?;
    service
        .import_workspace(&document)
        .await
        .context("import rejected; workspace unchanged")
}

fn read_document(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read document from stdin")?;
        return Ok(raw);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
