use archlab::{ArchlabError, StoreError};

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::terminal::detect_capabilities;

fn format_archlab_error(err: &ArchlabError, supports_color: bool, supports_unicode: bool) -> String {
    let block = match err {
        ArchlabError::InvalidSnapshot { message } => ErrorBlock::new(message.clone())
            .with_location("snapshot")
            .with_fix("The snapshot must be a JSON export of a domain graph."),
        ArchlabError::MissingMetaName => ErrorBlock::new("snapshot is missing meta.name")
            .with_location("snapshot")
            .with_fix("Add \"meta\": { \"name\": \"...\", \"version\": 1 }"),
        ArchlabError::SnapshotNotFound { path } => {
            ErrorBlock::new(format!("snapshot not found: {}", path.display()))
                .with_fix("Run `archlab starter --out model.json` to create one.")
        }
        ArchlabError::Config { file, message } => ErrorBlock::new(message.clone())
            .with_location(file.display().to_string())
            .with_fix("Fix the TOML and try again."),
        ArchlabError::PathEscape { path, root } => ErrorBlock::new(format!(
            "generated path '{}' would be written outside '{}'",
            path,
            root.display()
        ))
        .with_fix("Rename the node so its file name stays inside the output directory."),
        ArchlabError::ProjectNotFound { name } => {
            ErrorBlock::new(format!("project '{}' not found", name))
                .with_fix("Run `archlab project list` to see stored projects.")
        }
        ArchlabError::Store(StoreError::Corrupted { name, message }) => {
            ErrorBlock::new(format!("project '{}' is corrupted: {}", name, message))
                .with_fix(format!("Re-save it, or run `archlab project delete {}`.", name))
        }
        other => ErrorBlock::new(other.to_string()),
    };
    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = detect_capabilities();
    match err.downcast_ref::<ArchlabError>() {
        Some(archlab) => format_archlab_error(archlab, caps.supports_color, caps.supports_unicode),
        None => format!("[ERROR] {:#}\n", err),
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        }));
        return;
    }

    if crate::ui::ci::in_github_actions() {
        println!(
            "{}",
            crate::ui::ci::github_actions_annotation(
                crate::ui::ci::AnnotationLevel::Error,
                &format!("{:#}", err),
                None,
                Some("archlab"),
            )
        );
    }

    eprint!("{}", format_error(err));
}
