use crossterm::style::Color;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};

/// Design tokens for the archlab CLI.
///
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders are sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const PENDING: &str = "○";
    pub const ARROW: &str = "↳";

    // Command identifiers (used in headers).
    pub const WATCH: &str = "⟳";
    pub const GENERATE: &str = "⚙";
    pub const CHECK: &str = "🔍";
    pub const DIFF: &str = "Δ";
    pub const INSPECT: &str = "◇";
    pub const PROJECT: &str = "📁";
    pub const TRASH: &str = "🗑";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const PENDING: &str = "[ ]";
    pub const ARROW: &str = "[>]";

    pub const WATCH: &str = "[~]";
    pub const GENERATE: &str = "[GEN]";
    pub const CHECK: &str = "[CHECK]";
    pub const DIFF: &str = "[DIFF]";
    pub const INSPECT: &str = "[INSPECT]";
    pub const PROJECT: &str = "[PROJECT]";
    pub const TRASH: &str = "[DEL]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// Theme for dialoguer prompts; plain when color is off
pub fn prompt_theme(supports_color: bool) -> Box<dyn Theme> {
    if supports_color {
        Box::new(ColorfulTheme::default())
    } else {
        Box::new(SimpleTheme)
    }
}
