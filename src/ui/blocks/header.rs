use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Title line plus `label: value` rows shown at the top of a command
#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    items: Vec<(String, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.items.push((label.into(), value.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::info(self.title.as_str())
            .bold()
            .render(supports_color);
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            title
        );
        for (label, value) in &self.items {
            let label = ColoredText::dim(format!("{label}:")).render(supports_color);
            out.push_str(&format!("{label} {value}\n"));
        }
        out
    }
}
