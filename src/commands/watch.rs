use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use archlab::infrastructure::{ConsoleEventSink, LocalFs};
use archlab::{GenerateOptions, GenerateUseCase, WatchEvent, WatchUseCase};

use super::Session;
use crate::ui::views::watch::{render_watch_event, render_watch_header};

pub fn cmd_watch(session: &Session, snapshot: &Path, out: Option<PathBuf>) -> Result<ExitCode> {
    let ui = session.ui;
    let out_dir = session.out_dir(out);
    let options = GenerateOptions::new(&out_dir)
        .with_skip_unchanged(session.config.generate.skip_unchanged);

    let mut watch = WatchUseCase::new(
        snapshot,
        options,
        GenerateUseCase::new(session.compiler()?, LocalFs::new()),
    );
    // Per-file compile progress would interleave with the NDJSON watch stream
    if !ui.json {
        watch = watch.with_compile_events(Arc::new(ConsoleEventSink::stderr(ui.verbose)));
    }

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install the Ctrl+C handler")?;

    if !ui.json {
        print!(
            "{}",
            render_watch_header(
                &snapshot.display().to_string(),
                &out_dir.display().to_string(),
                ui.color,
                ui.unicode
            )
        );
    }

    watch.start(running, |event| {
        if ui.json {
            println!("{}", event.to_json());
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered = render_watch_event(&timestamp, &event, ui.color, ui.unicode);
        match event {
            WatchEvent::Error { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    })?;

    Ok(ExitCode::SUCCESS)
}
