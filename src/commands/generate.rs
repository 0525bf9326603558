use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use serde_json::json;

use archlab::infrastructure::LocalFs;
use archlab::{read_snapshot, GenerateOptions, GenerateResult, GenerateUseCase};

use super::Session;
use crate::ui::json;
use crate::ui::views::generate::{render_generate_header, render_generate_summary, render_plan};

pub fn cmd_generate(
    session: &Session,
    snapshot: &Path,
    out: Option<PathBuf>,
    dry_run: bool,
    strict: bool,
) -> Result<ExitCode> {
    let ui = &session.ui;
    let settings = &session.config.generate;
    let out_dir = session.out_dir(out);
    let compiler = session.compiler()?;

    if !ui.json {
        print!(
            "{}",
            render_generate_header(
                &snapshot.display().to_string(),
                &out_dir,
                compiler.emitter().language(),
                dry_run,
                ui.color,
                ui.unicode,
            )
        );
    }

    let graph = read_snapshot(snapshot)?;
    let options = GenerateOptions::new(&out_dir)
        .with_dry_run(dry_run)
        .with_block_on(strict.then_some(settings.fail_on))
        .with_skip_unchanged(settings.skip_unchanged);

    let use_case = GenerateUseCase::new(compiler, LocalFs::new());
    let result = use_case.execute_with_events(&graph, &options, session.compile_events("generate"))?;

    if ui.json {
        emit_result_events(&result, dry_run)?;
    } else {
        if dry_run && !result.blocked {
            println!();
            print!("{}", render_plan(&result.plan, ui.color));
        }
        println!();
        print!(
            "{}",
            render_generate_summary(&result, dry_run, ui.color, ui.unicode)
        );
    }

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn emit_result_events(result: &GenerateResult, dry_run: bool) -> Result<()> {
    if result.blocked {
        json::emit(json!({
            "event": "blocked",
            "command": "generate",
            "errors": result.report.error_count(),
            "warnings": result.report.warning_count(),
        }))?;
        return Ok(());
    }

    for path in &result.duplicate_paths {
        json::emit(json!({
            "event": "duplicate_path",
            "command": "generate",
            "path": path,
        }))?;
    }

    if dry_run {
        for planned in &result.plan.files {
            json::emit(json!({
                "event": "planned",
                "command": "generate",
                "path": planned.file.path,
                "target": planned.target.display().to_string(),
                "change": planned.change.as_str(),
            }))?;
        }
    }
    Ok(())
}
