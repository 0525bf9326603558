use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use dialoguer::Confirm;
use serde_json::json;

use archlab::{export_graph, ArchlabError, JsonGraphStore, ProjectService};

use super::Session;
use crate::cli::ProjectCommand;
use crate::ui::json;
use crate::ui::primitives::icon::Icon;
use crate::ui::terminal::is_interactive;
use crate::ui::theme::prompt_theme;
use crate::ui::views::projects::ProjectsView;

pub fn cmd_project(session: &Session, action: ProjectCommand) -> Result<ExitCode> {
    let store = match &session.config.store.dir {
        Some(dir) => JsonGraphStore::with_dir(dir),
        None => JsonGraphStore::new(),
    };
    let service = ProjectService::new(store);

    match action {
        ProjectCommand::Save { name, snapshot } => save(session, &service, &name, &snapshot),
        ProjectCommand::Load { name, out } => load(session, &service, &name, out),
        ProjectCommand::List => list(session, &service),
        ProjectCommand::Delete { name, yes } => delete(session, &service, &name, yes),
    }
}

fn save(
    session: &Session,
    service: &ProjectService<JsonGraphStore>,
    name: &str,
    snapshot: &Path,
) -> Result<ExitCode> {
    let graph = service.save_file(name, snapshot)?;
    let ui = &session.ui;

    if ui.json {
        json::emit(json!({
            "event": "saved",
            "command": "project",
            "name": name,
            "node_count": graph.node_count(),
        }))?;
    } else {
        println!(
            "{} Saved project '{}' ({} nodes) to {}",
            Icon::Success.colored(ui.color, ui.unicode),
            name,
            graph.node_count(),
            service.store().dir().display()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn load(
    session: &Session,
    service: &ProjectService<JsonGraphStore>,
    name: &str,
    out: Option<PathBuf>,
) -> Result<ExitCode> {
    let Some(path) = out else {
        println!("{}", export_graph(&service.load(name)?)?);
        return Ok(ExitCode::SUCCESS);
    };

    let graph = service.load_to_file(name, &path)?;
    let ui = &session.ui;
    if ui.json {
        json::emit(json!({
            "event": "loaded",
            "command": "project",
            "name": name,
            "path": path.display().to_string(),
            "node_count": graph.node_count(),
        }))?;
    } else {
        println!(
            "{} Loaded project '{}' into {}",
            Icon::Success.colored(ui.color, ui.unicode),
            name,
            path.display()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn list(session: &Session, service: &ProjectService<JsonGraphStore>) -> Result<ExitCode> {
    let entries = service.list()?;
    let ui = &session.ui;

    if ui.json {
        json::emit(json!({
            "event": "projects",
            "command": "project",
            "store": service.store().dir().display().to_string(),
            "count": entries.len(),
            "projects": entries,
        }))?;
    } else {
        print!(
            "{}",
            ProjectsView::new(&entries, service.store().dir()).render(ui.color, ui.unicode)
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn delete(
    session: &Session,
    service: &ProjectService<JsonGraphStore>,
    name: &str,
    yes: bool,
) -> Result<ExitCode> {
    if !service.exists(name)? {
        return Err(ArchlabError::ProjectNotFound {
            name: name.to_string(),
        }
        .into());
    }

    let ui = &session.ui;
    // Without a terminal there is nobody to ask; scripts proceed
    if !yes && !ui.json && is_interactive() {
        let theme = prompt_theme(ui.color);
        let confirmed = Confirm::with_theme(theme.as_ref())
            .with_prompt(format!("Delete project '{}'?", name))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(ExitCode::SUCCESS);
        }
    }

    service.delete(name)?;

    if ui.json {
        json::emit(json!({
            "event": "deleted",
            "command": "project",
            "name": name,
        }))?;
    } else {
        println!(
            "{} Deleted project '{}'",
            Icon::Trash.colored(ui.color, ui.unicode),
            name
        );
    }
    Ok(ExitCode::SUCCESS)
}
