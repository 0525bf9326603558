use std::path::Path;

use archlab::application::{FileChange, OutputPlan};
use archlab::GenerateResult;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_generate_header(
    snapshot: &str,
    out_dir: &Path,
    language: &str,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Generate, "archlab generate");
    header.add("Snapshot", snapshot);
    header.add("Output", out_dir.display().to_string());
    header.add("Language", language);
    if dry_run {
        header.add("Mode", "dry run (nothing is written)");
    }
    header.render(supports_color, supports_unicode)
}

/// One line per planned file: change marker and target path
pub fn render_plan(plan: &OutputPlan, supports_color: bool) -> String {
    let mut out = String::new();
    for planned in &plan.files {
        let marker = match planned.change {
            FileChange::New => ColoredText::success("+ new     "),
            FileChange::Modified => ColoredText::warning("~ modified"),
            FileChange::Unchanged => ColoredText::dim("  same    "),
        };
        out.push_str(&format!(
            "  {} {}\n",
            marker.render(supports_color),
            planned.target.display()
        ));
    }
    out
}

pub fn render_generate_summary(
    result: &GenerateResult,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if result.blocked {
        ResultSummary::failed("Generate blocked by findings")
    } else if !result.write.is_success() {
        ResultSummary::failed("Generate finished with write errors")
    } else if dry_run {
        ResultSummary::success("Dry run complete")
    } else if !result.duplicate_paths.is_empty() || !result.report.is_clean() {
        ResultSummary::partial("Generate complete with warnings")
    } else {
        ResultSummary::success("Generate complete")
    };

    if result.blocked {
        summary.add_stat("errors", result.report.error_count());
        summary.add_stat("warnings", result.report.warning_count());
        summary.with_next_step("Run `archlab check` to see the findings");
        return summary.render(supports_color, supports_unicode);
    }

    if dry_run {
        summary.add_stat("new", result.plan.count(FileChange::New));
        summary.add_stat("modified", result.plan.count(FileChange::Modified));
        summary.add_stat("unchanged", result.plan.count(FileChange::Unchanged));
    } else {
        summary.add_stat("written", result.write.written.len());
        summary.add_stat("unchanged", result.write.unchanged.len());
        if !result.write.errors.is_empty() {
            summary.add_stat("failed", result.write.errors.len());
        }
    }

    if !result.report.is_clean() {
        summary.add_warning(format!(
            "{} errors, {} warnings in the graph (see `archlab check`)",
            result.report.error_count(),
            result.report.warning_count()
        ));
    }
    for path in &result.duplicate_paths {
        summary.add_warning(format!("{} is generated by more than one node", path));
    }
    for (path, error) in &result.write.errors {
        summary.add_warning(format!("{}: {}", path, error));
    }

    summary.render(supports_color, supports_unicode)
}
