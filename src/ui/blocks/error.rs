use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Boxed error with an optional location and fix hint
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    location: Option<String>,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            location: None,
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} ERROR",
            Icon::Error.colored(supports_color, supports_unicode)
        );
        let mut panel = Panel::with_title(title).style(PanelStyle::Error);

        if let Some(location) = &self.location {
            panel.add_line(location.clone());
        }
        panel.add_empty();
        panel.add_line(self.message.clone());

        if let Some(fix) = &self.fix {
            panel.add_empty();
            panel.add_line(format!("FIX: {}", fix));
        }

        panel.render(supports_color, supports_unicode)
    }
}
