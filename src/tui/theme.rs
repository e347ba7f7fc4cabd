//! Light and dark token sets for the terminal view.

use ratatui::style::{Color, Modifier, Style};

use crate::outline::engine::{Role, StyleClass};
use crate::outline::state::DisplayMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub link: Color,
    pub focus: Color,
    pub accent: Color,
}

const LIGHT: Theme = Theme {
    background: Color::Rgb(255, 255, 255),
    text: Color::Rgb(17, 24, 39),
    muted: Color::Rgb(107, 114, 128),
    border: Color::Rgb(209, 213, 219),
    link: Color::Rgb(37, 99, 235),
    focus: Color::Rgb(243, 244, 246),
    accent: Color::Rgb(30, 64, 175),
};

const DARK: Theme = Theme {
    background: Color::Rgb(17, 24, 39),
    text: Color::Rgb(243, 244, 246),
    muted: Color::Rgb(156, 163, 175),
    border: Color::Rgb(75, 85, 99),
    link: Color::Rgb(96, 165, 250),
    focus: Color::Rgb(55, 65, 81),
    accent: Color::Rgb(147, 197, 253),
};

impl Theme {
    pub fn for_mode(mode: DisplayMode) -> Self {
        if mode.is_dark() {
            DARK
        } else {
            LIGHT
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

/// Concrete style for a row classification.
pub fn style_for(class: StyleClass) -> Style {
    let theme = Theme::for_mode(class.mode);
    match class.role {
        Role::Category => Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD),
        Role::Group => Style::default().fg(theme.text),
        Role::Link => Style::default().fg(theme.link),
    }
}
