use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use serde_json::{json, Map, Value};

use archlab::{read_snapshot, NodeKind};

use super::Session;
use crate::ui::json;
use crate::ui::views::inspect::render_inspect;

pub fn cmd_inspect(session: &Session, snapshot: &Path) -> Result<ExitCode> {
    let ui = &session.ui;
    let graph = read_snapshot(snapshot)?;

    if ui.json {
        let mut counts = Map::new();
        for kind in NodeKind::ALL {
            counts.insert(kind.as_str().to_string(), Value::from(graph.count(kind)));
        }
        json::emit(json!({
            "event": "inspect",
            "command": "inspect",
            "graph": graph.meta.name,
            "version": graph.meta.version,
            "counts": counts,
            "edges": graph.edges(),
        }))?;
    } else {
        print!(
            "{}",
            render_inspect(&snapshot.display().to_string(), &graph, ui.color, ui.unicode)
        );
    }

    Ok(ExitCode::SUCCESS)
}
