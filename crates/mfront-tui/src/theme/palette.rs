//! Color palettes for the resolved light and dark themes.

use mfront_core::ResolvedTheme;
use ratatui::style::Color;

/// Named colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub surface: Color,

    // --- Borders ---
    pub border: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    /// Primary button fill (the site's blue-600)
    pub button: Color,
    pub button_text: Color,

    // --- Text ---
    pub text: Color,
    pub text_muted: Color,
    pub heading: Color,

    // --- Status ---
    pub warning: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(17, 24, 39),
    surface: Color::Rgb(31, 41, 55),
    border: Color::Rgb(55, 65, 81),
    border_active: Color::Rgb(96, 165, 250),
    accent: Color::Rgb(96, 165, 250),
    button: Color::Rgb(37, 99, 235),
    button_text: Color::White,
    text: Color::Rgb(229, 231, 235),
    text_muted: Color::Rgb(156, 163, 175),
    heading: Color::White,
    warning: Color::Rgb(234, 179, 8),
};

pub const LIGHT: Palette = Palette {
    background: Color::White,
    surface: Color::Rgb(243, 244, 246),
    border: Color::Rgb(209, 213, 219),
    border_active: Color::Rgb(37, 99, 235),
    accent: Color::Rgb(37, 99, 235),
    button: Color::Rgb(37, 99, 235),
    button_text: Color::White,
    text: Color::Rgb(31, 41, 55),
    text_muted: Color::Rgb(107, 114, 128),
    heading: Color::Rgb(17, 24, 39),
    warning: Color::Rgb(161, 98, 7),
};

impl Palette {
    pub fn for_theme(theme: ResolvedTheme) -> &'static Palette {
        match theme {
            ResolvedTheme::Light => &LIGHT,
            ResolvedTheme::Dark => &DARK,
        }
    }
}
