use archlab::WatchEvent;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_watch_header(
    snapshot: &str,
    out_dir: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "archlab watch");
    header.add("Snapshot", snapshot);
    header.add("Output", out_dir);
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        WatchEvent::WatchStarted { snapshot, .. } => {
            format!("{} {} Watching: {}\n", prefix, icon(Icon::Watch), snapshot)
        }
        WatchEvent::SnapshotChanged { path } => {
            format!("{} {} Changed: {}\n", prefix, icon(Icon::Arrow), path)
        }
        WatchEvent::GenerateStarted => {
            format!("{} {} Generating...\n", prefix, icon(Icon::Progress))
        }
        WatchEvent::GenerateComplete {
            errors,
            warnings,
            written,
            unchanged,
            blocked,
        } => {
            let findings = if errors + warnings > 0 {
                format!(" ({} errors, {} warnings)", errors, warnings)
            } else {
                String::new()
            };
            if *blocked {
                format!(
                    "{} {} Blocked by findings{}\n",
                    prefix,
                    icon(Icon::Error),
                    findings
                )
            } else {
                let status = if errors + warnings > 0 {
                    Icon::Warning
                } else {
                    Icon::Success
                };
                format!(
                    "{} {} Generated: {} written, {} unchanged{}\n",
                    prefix,
                    icon(status),
                    written,
                    unchanged,
                    findings
                )
            }
        }
        WatchEvent::Error { message } => {
            format!("{} {} Error: {}\n", prefix, icon(Icon::Error), message)
        }
        WatchEvent::Shutdown => format!("\n{} {} Watch stopped.\n", prefix, icon(Icon::Watch)),
    }
}
