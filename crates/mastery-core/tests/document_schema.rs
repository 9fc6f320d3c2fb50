//! JsonSchema validation tests for the workspace documents.

use chrono::{NaiveDate, TimeZone, Utc};
use schemars::schema_for;

use mastery_core::entities::{Habit, JournalEntry, LearningStream};
use mastery_core::workspace::{WorkspaceExport, WorkspaceImport};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn sample_export() -> WorkspaceExport {
    let created_at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
    WorkspaceExport {
        streams: vec![LearningStream {
            id: 1,
            name: "ML Systems".into(),
            focus: "ship a retriever".into(),
            milestones_total: 3,
            milestones_completed: 1,
            color: "#123456".into(),
            created_at,
        }],
        habits: vec![Habit {
            id: 1,
            name: "Ship notes".into(),
            cadence: "Daily".into(),
            context: String::new(),
            last_completed_on: NaiveDate::from_ymd_opt(2026, 3, 14),
            created_at,
        }],
        journal_entries: vec![JournalEntry {
            id: 1,
            title: "Learned".into(),
            reflection: "Vectors".into(),
            mood: "Curious".into(),
            created_at,
        }],
    }
}

#[test]
fn export_document_matches_its_schema() {
    let schema = serde_json::to_value(schema_for!(WorkspaceExport)).unwrap();
    let instance = serde_json::to_value(sample_export()).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "export schema errors: {errors:?}");
}

#[test]
fn export_document_is_a_valid_import_document() {
    let export = serde_json::to_value(sample_export()).unwrap();

    let schema = serde_json::to_value(schema_for!(WorkspaceImport)).unwrap();
    let errors = validate_against_schema(&schema, &export);
    assert!(errors.is_empty(), "import schema errors: {errors:?}");

    let doc: WorkspaceImport = serde_json::from_value(export).unwrap();
    let validated = doc.validate().unwrap();
    assert_eq!(validated.streams[0].name, "ML Systems");
    assert_eq!(validated.streams[0].color.as_deref(), Some("#123456"));
    assert_eq!(validated.habits[0].name, "Ship notes");
    assert_eq!(validated.journal_entries[0].title, "Learned");
}

#[test]
fn import_accepts_form_style_numbers() {
    let instance = serde_json::json!({
        "streams": [{"name": "Deep Practice", "milestones_total": "5", "milestones_completed": "2"}]
    });
    let schema = serde_json::to_value(schema_for!(WorkspaceImport)).unwrap();
    assert!(validate_against_schema(&schema, &instance).is_empty());
}
