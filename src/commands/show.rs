use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Result};
use serde_json::json;

use archlab::read_snapshot;

use super::Session;
use crate::ui::json;

/// `Domain/X.cs` and `/Domain/X.cs` name the same file
fn normalize(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

pub fn cmd_show(session: &Session, snapshot: &Path, path: &str) -> Result<ExitCode> {
    let compiler = session.compiler()?;
    let graph = read_snapshot(snapshot)?;
    let outcome = compiler.compile(&graph);
    let wanted = normalize(path);

    let Some(file) = outcome.file(&wanted) else {
        let available: Vec<&str> = outcome.files.iter().map(|f| f.path.as_str()).collect();
        if available.is_empty() {
            bail!("no generated file '{}' (the graph produces no files)", wanted);
        }
        bail!(
            "no generated file '{}'\nAvailable:\n  {}",
            wanted,
            available.join("\n  ")
        );
    };

    if session.ui.json {
        json::emit(json!({
            "event": "file",
            "command": "show",
            "path": file.path,
            "hash": file.content_hash(),
            "content": file.content,
        }))?;
    } else {
        print!("{}", file.content);
        if !file.content.ends_with('\n') {
            println!();
        }
    }

    Ok(ExitCode::SUCCESS)
}
