use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    Partial,
    Failed,
}

/// Closing panel of a command: title, counts, warnings and a next step
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    outcome: Outcome,
    stats: Vec<(String, usize)>,
    warnings: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    fn with_outcome(title: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            title: title.into(),
            outcome,
            stats: Vec::new(),
            warnings: Vec::new(),
            next_step: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::with_outcome(title, Outcome::Success)
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self::with_outcome(title, Outcome::Partial)
    }

    pub fn failed(title: impl Into<String>) -> Self {
        Self::with_outcome(title, Outcome::Failed)
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (style, icon, title) = match self.outcome {
            Outcome::Success => (
                PanelStyle::Success,
                Icon::Success,
                ColoredText::success(self.title.as_str()),
            ),
            Outcome::Partial => (
                PanelStyle::Warning,
                Icon::Warning,
                ColoredText::warning(self.title.as_str()),
            ),
            Outcome::Failed => (
                PanelStyle::Error,
                Icon::Error,
                ColoredText::error(self.title.as_str()),
            ),
        };

        let header = format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        );

        let mut panel = Panel::with_title(header).style(style);
        panel.add_empty();
        for (label, count) in &self.stats {
            panel.add_line(format!("{} {}", count, label));
        }

        if !self.warnings.is_empty() {
            panel.add_empty();
            for warning in &self.warnings {
                panel.add_line(format!(
                    "{} {}",
                    Icon::Warning.colored(supports_color, supports_unicode),
                    warning
                ));
            }
        }

        if let Some(next_step) = &self.next_step {
            panel.add_empty();
            panel.add_line(format!(
                "{} {} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        panel.render(supports_color, supports_unicode)
    }
}
