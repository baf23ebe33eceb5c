use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub label: Style,
    pub success: Style,
    pub error: Style,
    pub warn: Style,
    pub info: Style,
    pub dim: Style,
    /// The selected record line under the table
    pub selected: Style,
}

impl Theme {
    pub fn detect() -> Self {
        if !console::Term::stdout().is_term() {
            return Self::plain();
        }
        Self::colored()
    }

    pub fn colored() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            label: Style::new().bold(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warn: Style::new().yellow().bold(),
            info: Style::new().blue(),
            dim: Style::new().white().dimmed(),
            selected: Style::new().green(),
        }
    }

    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            label: Style::new(),
            success: Style::new(),
            error: Style::new(),
            warn: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            selected: Style::new(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use owo_colors::OwoColorize;

    #[test]
    fn test_plain_theme_has_no_escapes() {
        let plain = Theme::plain();
        for style in [plain.info, plain.selected, plain.warn] {
            assert_eq!("Ada".style(style).to_string(), "Ada");
        }
    }

    #[test]
    fn test_colored_selection_stands_out() {
        let colored = Theme::colored();
        let selected = "Ada".style(colored.selected).to_string();
        assert!(selected.contains('\u{1b}'));
        assert_ne!(selected, "Ada".style(colored.dim).to_string());
    }
}
