use archlab::Severity;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Findings attached to one node, rendered under a node heading
#[derive(Debug, Clone)]
pub struct FindingGroup {
    pub heading: String,
    pub node_id: String,
    pub findings: Vec<(Severity, String)>,
}

impl FindingGroup {
    pub fn render(&self, verbose: bool, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = ColoredText::info(self.heading.as_str())
            .bold()
            .render(supports_color);
        if verbose {
            out.push(' ');
            out.push_str(&ColoredText::dim(format!("({})", self.node_id)).render(supports_color));
        }
        out.push('\n');

        for (severity, message) in &self.findings {
            let icon = match severity {
                Severity::Error => Icon::Error,
                Severity::Warning => Icon::Warning,
            };
            out.push_str(&format!(
                "  {} {}\n",
                icon.colored(supports_color, supports_unicode),
                message
            ));
        }

        out
    }
}
