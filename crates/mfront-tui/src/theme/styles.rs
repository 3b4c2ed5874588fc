//! Semantic style builders over a [`Palette`].

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Text styles ---
pub fn text(p: &Palette) -> Style {
    Style::default().fg(p.text)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn heading(p: &Palette) -> Style {
    Style::default().fg(p.heading).add_modifier(Modifier::BOLD)
}

pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    accent(p).add_modifier(Modifier::BOLD)
}

pub fn warning(p: &Palette) -> Style {
    Style::default().fg(p.warning)
}

// --- Selection ---
pub fn selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent)
        .bg(p.surface)
        .add_modifier(Modifier::BOLD)
}

// --- Buttons ---
/// Filled primary button ("Start Learning")
pub fn button_primary(p: &Palette, focused: bool) -> Style {
    let style = Style::default().fg(p.button_text).bg(p.button);
    if focused {
        style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        style
    }
}

/// Outlined secondary button ("Explore Demos")
pub fn button_secondary(p: &Palette, focused: bool) -> Style {
    let style = Style::default().fg(p.accent);
    if focused {
        style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        style
    }
}

// --- Containers ---
/// Rounded bordered block used for panels
pub fn panel(p: &Palette, active: bool) -> Block<'static> {
    let border = if active { p.border_active } else { p.border };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(p.background))
}
