use std::path::Path;

use chrono::{DateTime, Utc};

use archlab::ProjectEntry;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

pub struct ProjectsView<'a> {
    projects: &'a [ProjectEntry],
    store_dir: &'a Path,
    now: DateTime<Utc>,
}

impl<'a> ProjectsView<'a> {
    pub fn new(projects: &'a [ProjectEntry], store_dir: &'a Path) -> Self {
        Self {
            projects,
            store_dir,
            now: Utc::now(),
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut header = CommandHeader::new(Icon::Project, "archlab projects");
        header.add("Store", self.store_dir.display().to_string());
        header.add("Projects", self.projects.len().to_string());
        let mut out = header.render(supports_color, supports_unicode);
        out.push('\n');

        if self.projects.is_empty() {
            out.push_str(&format!(
                "{} {}\n\n{}\n",
                Icon::Pending.colored(supports_color, supports_unicode),
                ColoredText::dim("No projects saved.").render(supports_color),
                ColoredText::dim("Run `archlab project save <name> <snapshot>` to add one.")
                    .render(supports_color)
            ));
            return out;
        }

        let mut panel = Panel::with_title("Saved Projects").style(PanelStyle::Info);
        panel.add_line(
            ColoredText::dim(format!("{:<32} {:>6} {:>12}", "Project", "Nodes", "Saved"))
                .render(supports_color),
        );
        for project in self.projects {
            panel.add_line(format!(
                "{:<32} {:>6} {:>12}",
                truncate_middle(&project.name, 32),
                project.node_count,
                humanize_ago(self.now, project.saved_at)
            ));
        }
        out.push_str(&panel.render(supports_color, supports_unicode));
        out
    }
}

fn humanize_ago(now: DateTime<Utc>, at: DateTime<Utc>) -> String {
    let secs = now.signed_duration_since(at).num_seconds().max(0);
    match secs {
        s if s < 60 => "just now".to_string(),
        s if s < 3_600 => format!("{}m ago", s / 60),
        s if s < 86_400 => format!("{}h ago", s / 3_600),
        s => format!("{}d ago", s / 86_400),
    }
}

fn truncate_middle(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        return s.to_string();
    }

    let keep = max_len.saturating_sub(1);
    let left = keep / 2;
    let right = keep - left;
    let head: String = s.chars().take(left).collect();
    let tail: String = s.chars().skip(count - right).collect();
    format!("{}…{}", head, tail)
}
