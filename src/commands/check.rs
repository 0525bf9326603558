use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use serde_json::json;

use archlab::{read_snapshot, ValidationReport};

use super::Session;
use crate::ui::ci::{github_actions_annotation, in_github_actions, AnnotationLevel};
use crate::ui::json;
use crate::ui::views::check::{render_check_header, render_check_summary, render_findings};

pub fn cmd_check(session: &Session, snapshot: &Path) -> Result<ExitCode> {
    let ui = &session.ui;
    let fail_on = session.config.generate.fail_on;
    let graph = read_snapshot(snapshot)?;
    let report = ValidationReport::of(&graph);
    let failed = report.fails(fail_on);
    let snapshot_display = snapshot.display().to_string();

    if ui.json {
        json::emit(json!({
            "event": "start",
            "command": "check",
            "snapshot": snapshot_display,
            "graph": graph.meta.name,
            "node_count": graph.node_count(),
        }))?;
        for finding in &report.findings {
            json::emit(json!({
                "event": "finding",
                "command": "check",
                "node_id": finding.node_id.as_str(),
                "node": graph.node_name(&finding.node_id),
                "severity": finding.severity.as_str(),
                "message": finding.message,
            }))?;
        }
        json::emit(json!({
            "event": "complete",
            "command": "check",
            "errors": report.error_count(),
            "warnings": report.warning_count(),
            "success": !failed,
        }))?;
    } else {
        print!(
            "{}",
            render_check_header(&snapshot_display, &graph, fail_on, ui.color, ui.unicode)
        );
        if !report.findings.is_empty() {
            println!();
            print!(
                "{}",
                render_findings(&graph, &report, ui.verbose, ui.color, ui.unicode)
            );
        }
        println!();
        print!(
            "{}",
            render_check_summary(&report, failed, ui.color, ui.unicode)
        );
    }

    if !ui.json && in_github_actions() {
        for finding in &report.findings {
            let title = graph
                .node_name(&finding.node_id)
                .unwrap_or(finding.node_id.as_str());
            println!(
                "{}",
                github_actions_annotation(
                    AnnotationLevel::from(finding.severity),
                    &finding.message,
                    Some(snapshot_display.as_str()),
                    Some(title),
                )
            );
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
