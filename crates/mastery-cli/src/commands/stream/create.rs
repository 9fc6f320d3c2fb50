use mastery_core::input::{NumberInput, StreamDraft};
use mastery_db::service::MasteryService;

use crate::cli::GlobalFlags;
use crate::output::output;

pub struct Args<'a> {
    pub name: &'a str,
    pub focus: Option<&'a str>,
    pub total: Option<&'a str>,
    pub completed: Option<&'a str>,
    pub color: Option<&'a str>,
}

fn draft(args: &Args<'_>) -> StreamDraft {
    StreamDraft {
        name: Some(args.name.to_string()),
        focus: args.focus.map(String::from),
        milestones_total: args.total.map(NumberInput::from),
        milestones_completed: args.completed.map(NumberInput::from),
        color: args.color.map(String::from),
    }
}

pub async fn run(args: Args<'_>, service: &MasteryService, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stream = service.create_stream(&draft(&args)).await?;
    output(&stream, flags.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flag_values_pass_through_unparsed() {
        let args = Args {
            name: "Rust",
            focus: None,
            total: Some("6"),
            completed: Some("x"),
            color: None,
        };
        let draft = draft(&args);
        assert_eq!(draft.milestones_total, Some(NumberInput::Text("6".into())));
        assert_eq!(draft.milestones_completed, Some(NumberInput::Text("x".into())));
        assert!(draft.validate().is_err());
    }
}
