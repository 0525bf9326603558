use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use serde_json::json;

use archlab::application::{FileChange, OutputWriter};
use archlab::infrastructure::LocalFs;
use archlab::read_snapshot;

use super::Session;
use crate::ui::json;
use crate::ui::views::diff::{render_diff_header, render_diff_summary, render_plan_diffs};

/// Compare freshly generated files with the output directory; writes nothing
pub fn cmd_diff(session: &Session, snapshot: &Path, out: Option<PathBuf>) -> Result<ExitCode> {
    let ui = &session.ui;
    let out_dir = session.out_dir(out);
    let compiler = session.compiler()?;

    let graph = read_snapshot(snapshot)?;
    let outcome = compiler.compile(&graph);
    let plan = OutputWriter::new(LocalFs::new()).plan(&out_dir, &outcome.files)?;

    if ui.json {
        for planned in &plan.files {
            json::emit(json!({
                "event": "file",
                "command": "diff",
                "path": planned.file.path,
                "target": planned.target.display().to_string(),
                "change": planned.change.as_str(),
            }))?;
        }
        json::emit(json!({
            "event": "complete",
            "command": "diff",
            "new": plan.count(FileChange::New),
            "modified": plan.count(FileChange::Modified),
            "unchanged": plan.count(FileChange::Unchanged),
        }))?;
        return Ok(ExitCode::SUCCESS);
    }

    print!(
        "{}",
        render_diff_header(&snapshot.display().to_string(), &out_dir, ui.color, ui.unicode)
    );
    if plan.has_changes() {
        println!();
        print!("{}", render_plan_diffs(&plan, ui.color));
    }
    println!();
    print!("{}", render_diff_summary(&plan, ui.color, ui.unicode));

    Ok(ExitCode::SUCCESS)
}
