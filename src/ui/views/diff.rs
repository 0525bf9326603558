use std::path::Path;

use archlab::application::{FileChange, OutputPlan};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::components::diff::render_file_diff;
use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::panel::{Panel, PanelStyle};

pub fn render_diff_header(
    snapshot: &str,
    out_dir: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Diff, "archlab diff");
    header.add("Snapshot", snapshot);
    header.add("Output", out_dir.display().to_string());
    header.render(supports_color, supports_unicode)
}

/// Diffs of every new or modified file in plan order
pub fn render_plan_diffs(plan: &OutputPlan, supports_color: bool) -> String {
    plan.files
        .iter()
        .filter(|f| f.change != FileChange::Unchanged)
        .map(|f| {
            render_file_diff(
                &f.file.path,
                f.existing.as_deref(),
                &f.file.content,
                supports_color,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_diff_summary(plan: &OutputPlan, supports_color: bool, supports_unicode: bool) -> String {
    let title = format!(
        "{} Diff Summary",
        Icon::Diff.colored(supports_color, supports_unicode)
    );

    let mut panel = Panel::with_title(title).style(PanelStyle::Info);
    panel.add_empty();
    panel.add_line(format!("{} new", plan.count(FileChange::New)));
    panel.add_line(format!("{} modified", plan.count(FileChange::Modified)));
    panel.add_line(format!("{} unchanged", plan.count(FileChange::Unchanged)));
    panel.render(supports_color, supports_unicode)
}
