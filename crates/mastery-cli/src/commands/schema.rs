use schemars::schema_for;

use mastery_core::workspace::{WorkspaceExport, WorkspaceImport};

use crate::cli::root_commands::{SchemaArgs, SchemaDocument};

/// Handle `mastery schema`. Always pretty JSON; a schema has no table form.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    println!("{}", render(args.document)?);
    Ok(())
}

fn render(document: SchemaDocument) -> anyhow::Result<String> {
    let schema = match document {
        SchemaDocument::Import => schema_for!(WorkspaceImport),
        SchemaDocument::Export => schema_for!(WorkspaceExport),
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}
