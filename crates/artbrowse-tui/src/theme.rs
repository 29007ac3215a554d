use ratatui::style::{Color, Modifier, Style};

use artbrowse_core::ThemePreference;

/// Color palette for the TUI.
pub struct Theme {
    pub preference: ThemePreference,

    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub stripe_bg: Color,
    pub accent: Color,
    pub checked: Color,
    pub chip: Color,
    pub error: Color,
    pub spinner: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
}

impl Theme {
    /// Warm paper background, ink text, museum-red accent.
    pub fn light() -> Self {
        Self {
            preference: ThemePreference::Light,
            header_fg: Color::Rgb(250, 247, 240),
            header_bg: Color::Rgb(158, 27, 50),
            border: Color::Rgb(190, 182, 170),
            text: Color::Rgb(30, 30, 30),
            dim: Color::Rgb(120, 112, 100),
            highlight_bg: Color::Rgb(236, 224, 204),
            stripe_bg: Color::Rgb(246, 242, 234),
            accent: Color::Rgb(158, 27, 50),
            checked: Color::Rgb(30, 110, 60),
            chip: Color::Rgb(70, 90, 140),
            error: Color::Rgb(190, 30, 30),
            spinner: Color::Rgb(158, 27, 50),
            footer_fg: Color::Rgb(120, 112, 100),
            footer_bg: Color::Reset,
        }
    }

    /// Gallery-at-night: charcoal background, gold accent.
    pub fn dark() -> Self {
        Self {
            preference: ThemePreference::Dark,
            header_fg: Color::Rgb(20, 20, 24),
            header_bg: Color::Rgb(214, 178, 94),
            border: Color::Rgb(70, 70, 80),
            text: Color::Rgb(230, 228, 222),
            dim: Color::Rgb(130, 130, 140),
            highlight_bg: Color::Rgb(50, 46, 36),
            stripe_bg: Color::Rgb(28, 28, 32),
            accent: Color::Rgb(214, 178, 94),
            checked: Color::Rgb(110, 200, 120),
            chip: Color::Rgb(140, 170, 230),
            error: Color::Rgb(255, 100, 100),
            spinner: Color::Rgb(214, 178, 94),
            footer_fg: Color::Rgb(130, 130, 140),
            footer_bg: Color::Reset,
        }
    }

    pub fn for_preference(pref: ThemePreference) -> Self {
        match pref {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }

    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(self.dim).add_modifier(Modifier::ITALIC)
    }
}
