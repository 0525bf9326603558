use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Pending,
    Arrow,
    Watch,
    Generate,
    Check,
    Diff,
    Inspect,
    Project,
    Trash,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Progress) => theme::icons::PROGRESS,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Watch) => theme::icons::WATCH,
            (true, Icon::Generate) => theme::icons::GENERATE,
            (true, Icon::Check) => theme::icons::CHECK,
            (true, Icon::Diff) => theme::icons::DIFF,
            (true, Icon::Inspect) => theme::icons::INSPECT,
            (true, Icon::Project) => theme::icons::PROJECT,
            (true, Icon::Trash) => theme::icons::TRASH,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Progress) => theme::icons_ascii::PROGRESS,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Watch) => theme::icons_ascii::WATCH,
            (false, Icon::Generate) => theme::icons_ascii::GENERATE,
            (false, Icon::Check) => theme::icons_ascii::CHECK,
            (false, Icon::Diff) => theme::icons_ascii::DIFF,
            (false, Icon::Inspect) => theme::icons_ascii::INSPECT,
            (false, Icon::Project) => theme::icons_ascii::PROJECT,
            (false, Icon::Trash) => theme::icons_ascii::TRASH,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress | Icon::Trash => theme::colors::WARNING,
            Icon::Pending | Icon::Arrow => theme::colors::DIM,
            Icon::Watch
            | Icon::Generate
            | Icon::Check
            | Icon::Diff
            | Icon::Inspect
            | Icon::Project => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
