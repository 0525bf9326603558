use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use serde_json::json;

use archlab::{export_graph, starter_graph, write_snapshot};

use super::Session;
use crate::ui::json;
use crate::ui::primitives::icon::Icon;

pub fn cmd_starter(session: &Session, out: Option<PathBuf>) -> Result<ExitCode> {
    let graph = starter_graph();

    let Some(path) = out else {
        println!("{}", export_graph(&graph)?);
        return Ok(ExitCode::SUCCESS);
    };

    write_snapshot(&path, &graph)?;

    let ui = &session.ui;
    if ui.json {
        json::emit(json!({
            "event": "written",
            "command": "starter",
            "path": path.display().to_string(),
            "node_count": graph.node_count(),
        }))?;
    } else {
        println!(
            "{} Wrote starter snapshot '{}' ({} nodes) to {}",
            Icon::Success.colored(ui.color, ui.unicode),
            graph.meta.name,
            graph.node_count(),
            path.display()
        );
    }

    Ok(ExitCode::SUCCESS)
}
