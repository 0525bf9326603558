use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

use crate::ui::theme;

/// Unified diff with old/new line-number columns
///
/// `old == None` renders a new file against `/dev/null`.
pub fn render_file_diff(path: &str, old: Option<&str>, new: &str, supports_color: bool) -> String {
    let path = path.trim_start_matches('/');
    let before = old.unwrap_or("");
    let diff = TextDiff::from_lines(before, new);
    let width = before
        .lines()
        .count()
        .max(new.lines().count())
        .max(1)
        .to_string()
        .len();

    let header_a = match old {
        Some(_) => format!("--- a/{path}"),
        None => "--- /dev/null".to_string(),
    };
    let mut out = String::new();
    out.push_str(&paint_header(&header_a, supports_color));
    out.push_str(&paint_header(&format!("+++ b/{path}"), supports_color));

    for change in diff.iter_all_changes() {
        let number = |index: Option<usize>| match index {
            Some(i) => format!("{:>width$}", i + 1),
            None => " ".repeat(width),
        };
        let (old_col, new_col, sign) = match change.tag() {
            ChangeTag::Delete => (number(change.old_index()), number(None), "-"),
            ChangeTag::Insert => (number(None), number(change.new_index()), "+"),
            ChangeTag::Equal => (number(change.old_index()), number(change.new_index()), " "),
        };

        let value = change.value().trim_end_matches('\n');
        let line = format!("{old_col} {new_col} {sign} {value}");
        out.push_str(&paint_body(&line, change.tag(), supports_color));
        out.push('\n');
    }

    out
}

fn paint_header(s: &str, supports_color: bool) -> String {
    if supports_color {
        format!("{}\n", s.with(theme::colors::INFO))
    } else {
        format!("{s}\n")
    }
}

fn paint_body(s: &str, tag: ChangeTag, supports_color: bool) -> String {
    if !supports_color {
        return s.to_string();
    }
    let color = match tag {
        ChangeTag::Delete => theme::colors::ERROR,
        ChangeTag::Insert => theme::colors::SUCCESS,
        ChangeTag::Equal => theme::colors::DIM,
    };
    format!("{}", s.with(color))
}
